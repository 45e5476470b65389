use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use platform_host::{HostServices, SessionFlags};
use platform_host_web::{browser_host_services, completion_endpoint_from_env};

use crate::lock::LockScreen;

/// Session flag marking a successful unlock; survives reloads within the
/// tab session and dies with it.
const UNLOCK_FLAG_KEY: &str = "glassdesk.unlocked.v1";

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    let host_services = browser_host_services(completion_endpoint_from_env());
    let unlocked = create_rw_signal(host_services.session_flags.get_flag(UNLOCK_FLAG_KEY));

    let flags_for_unlock = host_services.session_flags.clone();
    let on_unlock = Callback::new(move |_: ()| {
        flags_for_unlock.set_flag(UNLOCK_FLAG_KEY, true);
        unlocked.set(true);
    });
    let flags_for_lock = host_services.session_flags.clone();
    let on_lock = Callback::new(move |_: ()| {
        flags_for_lock.clear_flag(UNLOCK_FLAG_KEY);
        unlocked.set(false);
    });

    view! {
        <Title text="glassdesk" />
        <Meta
            name="description"
            content="A macOS-flavored desktop simulation that happens to be a personal website."
        />

        <main class="site-root">
            <Show
                when=move || unlocked.get()
                fallback=move || view! { <LockScreen on_unlock=on_unlock /> }
            >
                <DesktopEntry host_services=host_services.clone() on_lock=on_lock />
            </Show>
        </main>
    }
}

#[component]
pub fn DesktopEntry(host_services: HostServices, on_lock: Callback<()>) -> impl IntoView {
    view! {
        <DesktopProvider host_services=host_services on_lock=on_lock>
            <DesktopShell />
        </DesktopProvider>
    }
}
