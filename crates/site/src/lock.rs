//! Lock screen: big clock, profile chip, and the password gate.

use std::time::Duration;

use leptos::*;
use system_ui::{Icon, IconName, IconSize};

const LOCK_PASSWORD: &str = "aqua";

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

fn password_matches(attempt: &str) -> bool {
    attempt == LOCK_PASSWORD
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LockClock {
    weekday: u32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl LockClock {
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

fn format_lock_time(clock: LockClock) -> String {
    format!("{}:{:02}", clock.hour, clock.minute)
}

fn format_lock_date(clock: LockClock) -> String {
    let weekday = WEEKDAYS.get(clock.weekday as usize).copied().unwrap_or("");
    let month = MONTHS.get(clock.month as usize).copied().unwrap_or("");
    format!("{weekday}, {month} {}", clock.day)
}

/// Full-screen gate in front of the desktop.
#[component]
pub(crate) fn LockScreen(on_unlock: Callback<()>) -> impl IntoView {
    let clock = create_rw_signal(LockClock::now());
    if let Ok(interval) =
        set_interval_with_handle(move || clock.set(LockClock::now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    let show_unlock = create_rw_signal(false);
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(false);

    let attempt = move || {
        if password_matches(&password.get_untracked()) {
            on_unlock.call(());
        } else {
            password.set(String::new());
            error.set(true);
            // The shake animation resets once the error state clears.
            set_timeout(move || error.set(false), Duration::from_millis(500));
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| match ev.key().as_str() {
        "Enter" => attempt(),
        "Escape" => {
            show_unlock.set(false);
            password.set(String::new());
            error.set(false);
        }
        _ => {}
    };

    view! {
        <div class="lock-screen">
            <div class="lock-notch" aria-hidden="true">
                <span class="lock-camera-dot"></span>
            </div>

            <div class="lock-clock">
                <p class="lock-date">{move || format_lock_date(clock.get())}</p>
                <h1 class="lock-time">{move || format_lock_time(clock.get())}</h1>
            </div>

            <div class="lock-profile" on:click=move |_| show_unlock.set(true)>
                <div class="lock-avatar" aria-hidden="true">
                    <Icon icon=IconName::User size=IconSize::Lg />
                </div>

                <Show
                    when=move || show_unlock.get()
                    fallback=|| {
                        view! {
                            <h2 class="lock-name">"glassdesk"</h2>
                            <p class="lock-prompt">"Click to enter password"</p>
                        }
                    }
                >
                    <div class="lock-dialog" role="dialog" aria-label="Unlock">
                        <input
                            class=move || {
                                if error.get() { "lock-input shake" } else { "lock-input" }
                            }
                            type="password"
                            placeholder="Enter Password"
                            aria-label="Password"
                            aria-invalid=move || error.get()
                            autofocus=true
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <Show when=move || error.get() fallback=|| ()>
                            <p class="lock-error" role="alert">"Incorrect password"</p>
                        </Show>
                        <p class="lock-hint">"Hint: the classic Mac interface theme"</p>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_exact_password_unlocks() {
        assert!(password_matches("aqua"));
        assert!(!password_matches("Aqua"));
        assert!(!password_matches(""));
        assert!(!password_matches("aqua "));
    }

    #[test]
    fn lock_clock_formats_24_hour_time_and_long_dates() {
        let clock = LockClock {
            weekday: 5,
            month: 7,
            day: 7,
            hour: 9,
            minute: 5,
        };
        assert_eq!(format_lock_time(clock), "9:05");
        assert_eq!(format_lock_date(clock), "Friday, August 7");
    }
}
