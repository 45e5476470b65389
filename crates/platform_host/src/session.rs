//! Session-scoped flag storage.
//!
//! The lock screen records its unlocked state here: the flag must survive a
//! reload but die with the browser session, which is exactly what
//! `sessionStorage` provides on the web adapter. Flags are synchronous on
//! both adapters, so the lock gate can read them during first render.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for boolean flags scoped to the current session.
pub trait SessionFlags {
    /// Reads a flag; absent keys read as `false`.
    fn get_flag(&self, key: &str) -> bool;

    /// Sets or clears a flag.
    fn set_flag(&self, key: &str, value: bool);

    /// Removes a flag entirely.
    fn clear_flag(&self, key: &str);
}

/// In-memory session flags for native targets and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionFlags {
    inner: Rc<RefCell<HashMap<String, bool>>>,
}

impl SessionFlags for MemorySessionFlags {
    fn get_flag(&self, key: &str) -> bool {
        self.inner.borrow().get(key).copied().unwrap_or(false)
    }

    fn set_flag(&self, key: &str, value: bool) {
        self.inner.borrow_mut().insert(key.to_string(), value);
    }

    fn clear_flag(&self, key: &str) {
        self.inner.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_default_to_false_and_round_trip() {
        let flags = MemorySessionFlags::default();
        assert!(!flags.get_flag("unlocked"));

        flags.set_flag("unlocked", true);
        assert!(flags.get_flag("unlocked"));

        flags.clear_flag("unlocked");
        assert!(!flags.get_flag("unlocked"));
    }

    #[test]
    fn clones_share_state() {
        let flags = MemorySessionFlags::default();
        let alias = flags.clone();
        alias.set_flag("unlocked", true);
        assert!(flags.get_flag("unlocked"));
    }
}
