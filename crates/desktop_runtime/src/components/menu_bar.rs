use std::time::Duration;

use leptos::*;
use system_ui::{Icon, IconName, IconSize};

use crate::runtime_context::use_desktop_runtime;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ClockSnapshot {
    pub(super) weekday: u32,
    pub(super) month: u32,
    pub(super) day: u32,
    pub(super) hour: u32,
    pub(super) minute: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                weekday: date.get_day(),
                month: date.get_month(),
                day: date.get_date(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                weekday: 4,
                month: 0,
                day: 1,
                hour: 9,
                minute: 41,
            }
        }
    }
}

pub(super) fn format_menu_time(snapshot: ClockSnapshot) -> String {
    let period = if snapshot.hour < 12 { "AM" } else { "PM" };
    let hour = match snapshot.hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour}:{:02} {period}", snapshot.minute)
}

pub(super) fn format_menu_date(snapshot: ClockSnapshot) -> String {
    let weekday = WEEKDAYS
        .get(snapshot.weekday as usize)
        .copied()
        .unwrap_or("???");
    let month = MONTHS.get(snapshot.month as usize).copied().unwrap_or("???");
    format!("{weekday} {month} {}", snapshot.day)
}

/// Translucent bar across the top: app menus on the left, status glyphs,
/// lock control, and a live clock on the right.
#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let clock = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(ClockSnapshot::now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    // The active-app slot falls back to the product name whenever nothing is
    // focused (fresh desktop, or right after closing the focused window).
    let active_app = move || {
        let registry = state.get();
        registry
            .focused_window_id()
            .and_then(|id| registry.window(id))
            .map(|window| window.title.clone())
            .unwrap_or_else(|| "glassdesk".to_string())
    };

    view! {
        <header class="menu-bar">
            <div class="menu-bar-left">
                <button class="menu-bar-logo" aria-label="System menu">
                    <Icon icon=IconName::Apple size=IconSize::Sm />
                </button>
                <button class="menu-bar-app">{active_app}</button>
                <div class="menu-bar-menus">
                    <button>"File"</button>
                    <button>"Edit"</button>
                    <button>"View"</button>
                    <button>"Window"</button>
                    <button>"Help"</button>
                </div>
            </div>

            <div class="menu-bar-right">
                <span class="menu-bar-status" aria-hidden="true">
                    <Icon icon=IconName::Bolt size=IconSize::Xs />
                </span>
                <span class="menu-bar-status" aria-hidden="true">
                    <Icon icon=IconName::Wifi size=IconSize::Xs />
                </span>
                <button
                    class="menu-bar-lock"
                    aria-label="Lock screen"
                    on:click=move |_| runtime.on_lock.call(())
                >
                    <Icon icon=IconName::Lock size=IconSize::Xs />
                </button>
                <span class="menu-bar-date">{move || format_menu_date(clock.get())}</span>
                <span class="menu-bar-time">{move || format_menu_time(clock.get())}</span>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn at(hour: u32, minute: u32) -> ClockSnapshot {
        ClockSnapshot {
            weekday: 5,
            month: 7,
            day: 7,
            hour,
            minute,
        }
    }

    #[test]
    fn clock_formats_twelve_hour_time() {
        assert_eq!(format_menu_time(at(0, 5)), "12:05 AM");
        assert_eq!(format_menu_time(at(9, 41)), "9:41 AM");
        assert_eq!(format_menu_time(at(12, 0)), "12:00 PM");
        assert_eq!(format_menu_time(at(23, 59)), "11:59 PM");
    }

    #[test]
    fn clock_formats_short_dates() {
        assert_eq!(format_menu_date(at(9, 0)), "Fri Aug 7");
    }

    #[test]
    fn out_of_range_fields_degrade_gracefully() {
        let snapshot = ClockSnapshot {
            weekday: 9,
            month: 14,
            day: 1,
            hour: 1,
            minute: 1,
        };
        assert_eq!(format_menu_date(snapshot), "??? ??? 1");
    }
}
