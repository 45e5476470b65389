//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the registry store, its signal mirror, the dispatch
//! callback, and the routing of app commands back onto the registry command
//! surface. UI composition stays in [`crate::components`].

use desktop_app_contract::AppCommand;
use leptos::*;
use platform_host::HostServices;
use window_registry::{RegistryStore, WindowCommand, WindowId};

use crate::{
    apps,
    host::DesktopHostContext,
    model::{DesktopCommand, DesktopRegistry, InteractionState, WindowContent},
};

/// Leptos context for reading desktop state and dispatching window commands.
#[derive(Clone, Copy)]
pub struct DesktopRuntimeContext {
    /// Host service bundle and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Owning store behind the reactive mirror.
    pub store: StoredValue<RegistryStore<WindowContent>>,
    /// Reactive registry snapshot, refreshed by a store subscription after
    /// every state-changing command.
    pub state: RwSignal<DesktopRegistry>,
    /// Chrome-layer pointer gesture state.
    pub interaction: RwSignal<InteractionState>,
    /// Whether the voice assistant popup is showing.
    pub assistant_open: RwSignal<bool>,
    /// Registry command sink.
    pub dispatch: Callback<DesktopCommand>,
    /// Re-lock callback owned by the site entry.
    pub on_lock: Callback<()>,
}

impl DesktopRuntimeContext {
    /// Dispatches one registry command through the runtime callback.
    pub fn dispatch_command(&self, command: DesktopCommand) {
        self.dispatch.call(command);
    }
}

/// Provides [`DesktopRuntimeContext`] to descendant components.
#[component]
pub fn DesktopProvider(
    /// Injected browser or in-memory host bundle assembled by the entry
    /// layer.
    host_services: HostServices,
    /// Invoked when a collaborator asks to return to the lock screen.
    on_lock: Callback<()>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services));
    let registry_store = RegistryStore::<WindowContent>::new();
    let state = create_rw_signal(registry_store.snapshot());
    let interaction = create_rw_signal(InteractionState::default());
    let assistant_open = create_rw_signal(false);

    // The one subscription bridging the store into the reactive layer: the
    // signal write happens inside the store's synchronous notification, so
    // every collaborator reads a consistent registry in the same tick as the
    // mutating call.
    registry_store.subscribe(move |registry| state.set(registry.clone()));
    let store = store_value(registry_store);

    let dispatch = Callback::new(move |command: DesktopCommand| {
        match store.get_value().dispatch(command) {
            Ok(effects) => {
                let host = host.get_value();
                for effect in effects {
                    host.run_registry_effect(effect);
                }
            }
            // Unknown-id commands are benign no-ops at the UI layer.
            Err(err) => logging::warn!("window command rejected: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        store,
        state,
        interaction,
        assistant_open,
        dispatch,
        on_lock,
    };

    provide_context(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

/// What a dock click should do for an app's window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockActivation {
    /// Window exists and is minimized: bring it back.
    Restore,
    /// No window, or window is visible: issue the app's open request.
    Launch,
}

/// Decides the dock branch from current registry state.
///
/// The dock reads `is_minimized` before choosing; everything else routes to
/// the launch callback, so clicking a running visible app deliberately
/// reopens it at catalog defaults.
pub fn dock_activation(registry: &DesktopRegistry, window_id: &WindowId) -> DockActivation {
    if registry.is_minimized(window_id) {
        DockActivation::Restore
    } else {
        DockActivation::Launch
    }
}

/// Launches an app by catalog id, or restores its minimized window.
pub fn activate_app(runtime: DesktopRuntimeContext, app_id: &str) {
    let Some(descriptor) = apps::descriptor(app_id) else {
        logging::warn!("activation for unknown app `{app_id}`");
        return;
    };
    let window_id = WindowId::new(descriptor.id);
    match dock_activation(&runtime.state.get_untracked(), &window_id) {
        DockActivation::Restore => {
            runtime.dispatch_command(WindowCommand::Restore { id: window_id })
        }
        DockActivation::Launch => {
            runtime.dispatch_command(WindowCommand::Open(apps::open_request(descriptor)))
        }
    }
}

/// Routes an [`AppCommand`] from a mounted app onto the command surface.
pub(crate) fn handle_app_command(
    runtime: DesktopRuntimeContext,
    window_id: WindowId,
    command: AppCommand,
) {
    match command {
        AppCommand::OpenApp(app) => activate_app(runtime, app.as_str()),
        AppCommand::CloseWindow => runtime.dispatch_command(WindowCommand::Close { id: window_id }),
        AppCommand::MinimizeWindow => {
            runtime.dispatch_command(WindowCommand::Minimize { id: window_id })
        }
        AppCommand::OpenExternalUrl(url) => runtime.host.get_value().open_external_url(url),
        AppCommand::LockSession => runtime.on_lock.call(()),
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::ApplicationId;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use window_registry::{apply, OpenWindowRequest};

    use super::*;

    fn open(registry: &mut DesktopRegistry, id: &str) {
        apply(
            registry,
            WindowCommand::Open(OpenWindowRequest::new(
                id,
                id.to_uppercase(),
                WindowContent {
                    app: ApplicationId::trusted(id),
                    launch_params: Value::Null,
                },
            )),
        )
        .expect("open window");
    }

    #[test]
    fn dock_restores_only_minimized_windows() {
        let mut registry = DesktopRegistry::new();
        let id = WindowId::new("messages");

        assert_eq!(dock_activation(&registry, &id), DockActivation::Launch);

        open(&mut registry, "messages");
        assert_eq!(dock_activation(&registry, &id), DockActivation::Launch);

        apply(&mut registry, WindowCommand::Minimize { id: id.clone() }).expect("minimize");
        assert_eq!(dock_activation(&registry, &id), DockActivation::Restore);

        apply(&mut registry, WindowCommand::Restore { id: id.clone() }).expect("restore");
        assert_eq!(dock_activation(&registry, &id), DockActivation::Launch);
    }
}
