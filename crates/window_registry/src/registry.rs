//! Authoritative window state and the stacking counter.

use std::collections::BTreeMap;

use crate::model::{WindowId, WindowRecord};

/// The single source of truth for all open windows.
///
/// Keys are unique; map order carries no meaning (rendering order comes from
/// [`WindowRecord::stack_order`]). The registry is plain data: it is mutated
/// only through [`crate::apply`], which upholds the focus and stacking
/// invariants.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRegistry<P> {
    windows: BTreeMap<WindowId, WindowRecord<P>>,
    highest_stack_order: u64,
}

impl<P> Default for WindowRegistry<P> {
    fn default() -> Self {
        Self {
            windows: BTreeMap::new(),
            highest_stack_order: 0,
        }
    }
}

impl<P> WindowRegistry<P> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a window by key.
    pub fn window(&self, id: &WindowId) -> Option<&WindowRecord<P>> {
        self.windows.get(id)
    }

    /// Returns whether a window with this key is present.
    pub fn contains(&self, id: &WindowId) -> bool {
        self.windows.contains_key(id)
    }

    /// Returns the key of the focused window, if any.
    ///
    /// Zero focused windows is a legal state (empty registry, or right after
    /// the focused window was closed).
    pub fn focused_window_id(&self) -> Option<&WindowId> {
        self.windows.values().find(|w| w.is_focused).map(|w| &w.id)
    }

    /// Returns whether the window exists and is minimized.
    ///
    /// This is the dock's launch-versus-restore predicate; an absent window
    /// reads as not minimized so the dock falls through to its open callback.
    pub fn is_minimized(&self, id: &WindowId) -> bool {
        self.windows.get(id).map(|w| w.is_minimized).unwrap_or(false)
    }

    /// Number of windows, minimized included.
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Returns whether the registry holds no windows.
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Iterates over all windows in unspecified order.
    pub fn windows(&self) -> impl Iterator<Item = &WindowRecord<P>> {
        self.windows.values()
    }

    /// All windows sorted bottom-to-top by stacking order.
    pub fn stack_ordered(&self) -> Vec<&WindowRecord<P>> {
        let mut ordered: Vec<&WindowRecord<P>> = self.windows.values().collect();
        ordered.sort_by_key(|w| w.stack_order);
        ordered
    }

    /// Highest stacking value allocated so far in this registry instance.
    pub fn highest_stack_order(&self) -> u64 {
        self.highest_stack_order
    }

    pub(crate) fn window_mut(&mut self, id: &WindowId) -> Option<&mut WindowRecord<P>> {
        self.windows.get_mut(id)
    }

    /// Inserts or replaces a record under its own key.
    pub(crate) fn insert(&mut self, record: WindowRecord<P>) {
        self.windows.insert(record.id.clone(), record);
    }

    pub(crate) fn remove(&mut self, id: &WindowId) -> Option<WindowRecord<P>> {
        self.windows.remove(id)
    }

    /// Allocates the next stacking value. Strictly increasing per instance.
    pub(crate) fn allocate_stack_order(&mut self) -> u64 {
        self.highest_stack_order += 1;
        self.highest_stack_order
    }

    /// Clears focus on every window, unconditionally.
    ///
    /// Scanning all records (rather than just the one focused window) keeps
    /// the transition correct even if the single-focus invariant were ever
    /// violated by outside mutation.
    pub(crate) fn clear_focus(&mut self) {
        for window in self.windows.values_mut() {
            window.is_focused = false;
        }
    }

    #[cfg(debug_assertions)]
    pub(crate) fn debug_check_invariants(&self) {
        let focused = self.windows.values().filter(|w| w.is_focused).count();
        debug_assert!(focused <= 1, "multiple focused windows: {focused}");

        let mut orders: Vec<u64> = self.windows.values().map(|w| w.stack_order).collect();
        orders.sort_unstable();
        orders.dedup();
        debug_assert_eq!(
            orders.len(),
            self.windows.len(),
            "duplicate stack orders in registry"
        );
        debug_assert!(
            orders.iter().all(|o| *o <= self.highest_stack_order),
            "stack order above allocation counter"
        );
    }
}
