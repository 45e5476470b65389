//! Installed-application catalog: per-app window defaults, launcher
//! visibility, and the content dispatch that resolves a window's payload to
//! its view.

mod placeholders;

use desktop_app_contract::{AppMountContext, ApplicationId};
use desktop_app_facetime::FaceTimeApp;
use desktop_app_finder::FinderApp;
use desktop_app_messages::MessagesApp;
use desktop_app_notes::NotesApp;
use leptos::*;
use serde_json::Value;
use system_ui::IconName;
use window_registry::{OpenWindowRequest, WindowRect};

use crate::model::{DesktopOpenRequest, WindowContent};

/// Static description of one installed application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Application id; doubles as the registry window key.
    pub id: &'static str,
    /// Window and dock title.
    pub title: &'static str,
    /// Launcher glyph.
    pub icon: IconName,
    /// Geometry used when the app is launched.
    pub default_rect: WindowRect,
    /// Whether the shell draws the standard title bar.
    pub has_chrome: bool,
    /// Whether the app appears in the desktop icon grid.
    pub show_on_desktop: bool,
    /// Whether the app appears in the dock.
    pub show_in_dock: bool,
}

/// Every installed app, with the site's original per-app geometry defaults.
/// The finder draws its own frame, so it opens without standard chrome.
const APP_REGISTRY: [AppDescriptor; 9] = [
    AppDescriptor {
        id: "projects",
        title: "Projects",
        icon: IconName::Finder,
        default_rect: WindowRect {
            x: 100,
            y: 80,
            w: 1100,
            h: 700,
        },
        has_chrome: false,
        show_on_desktop: true,
        show_in_dock: true,
    },
    AppDescriptor {
        id: "experience",
        title: "Experience",
        icon: IconName::Briefcase,
        default_rect: WindowRect {
            x: 120,
            y: 100,
            w: 750,
            h: 550,
        },
        has_chrome: true,
        show_on_desktop: true,
        show_in_dock: true,
    },
    AppDescriptor {
        id: "skills",
        title: "Skills",
        icon: IconName::Terminal,
        default_rect: WindowRect {
            x: 140,
            y: 120,
            w: 700,
            h: 500,
        },
        has_chrome: true,
        show_on_desktop: true,
        show_in_dock: true,
    },
    AppDescriptor {
        id: "blog",
        title: "Blog",
        icon: IconName::Compass,
        default_rect: WindowRect {
            x: 160,
            y: 140,
            w: 850,
            h: 650,
        },
        has_chrome: true,
        show_on_desktop: true,
        show_in_dock: true,
    },
    AppDescriptor {
        id: "gallery",
        title: "Gallery",
        icon: IconName::Photos,
        default_rect: WindowRect {
            x: 180,
            y: 160,
            w: 900,
            h: 700,
        },
        has_chrome: true,
        show_on_desktop: true,
        show_in_dock: true,
    },
    AppDescriptor {
        id: "contact",
        title: "Contact",
        icon: IconName::Mail,
        default_rect: WindowRect {
            x: 200,
            y: 180,
            w: 600,
            h: 500,
        },
        has_chrome: true,
        show_on_desktop: true,
        show_in_dock: true,
    },
    AppDescriptor {
        id: "facetime",
        title: "FaceTime",
        icon: IconName::Video,
        default_rect: WindowRect {
            x: 220,
            y: 100,
            w: 900,
            h: 700,
        },
        has_chrome: true,
        show_on_desktop: false,
        show_in_dock: true,
    },
    AppDescriptor {
        id: "messages",
        title: "Messages",
        icon: IconName::MessageBubble,
        default_rect: WindowRect {
            x: 240,
            y: 120,
            w: 950,
            h: 650,
        },
        has_chrome: true,
        show_on_desktop: false,
        show_in_dock: true,
    },
    AppDescriptor {
        id: "resume",
        title: "Resume.pdf",
        icon: IconName::FileText,
        default_rect: WindowRect {
            x: 150,
            y: 80,
            w: 900,
            h: 700,
        },
        has_chrome: true,
        show_on_desktop: false,
        show_in_dock: false,
    },
];

/// Returns the full catalog.
pub fn app_registry() -> &'static [AppDescriptor] {
    &APP_REGISTRY
}

/// Apps shown in the desktop icon grid.
pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

/// Apps shown in the dock, in catalog order.
pub fn dock_apps() -> Vec<AppDescriptor> {
    app_registry()
        .iter()
        .copied()
        .filter(|entry| entry.show_in_dock)
        .collect()
}

/// Looks up a descriptor by application id string.
pub fn descriptor(id: &str) -> Option<&'static AppDescriptor> {
    app_registry().iter().find(|entry| entry.id == id)
}

/// Builds the open request that launches an app at its catalog defaults.
pub fn open_request(descriptor: &AppDescriptor) -> DesktopOpenRequest {
    let mut request = OpenWindowRequest::new(
        descriptor.id,
        descriptor.title,
        WindowContent {
            app: ApplicationId::trusted(descriptor.id),
            launch_params: Value::Null,
        },
    );
    request.rect = Some(descriptor.default_rect);
    request.has_chrome = descriptor.has_chrome;
    request
}

/// Resolves a window payload to its application view.
///
/// The registry hands the payload through untouched; this is the single
/// place that interprets it.
pub fn render_window_contents(content: &WindowContent, ctx: AppMountContext) -> View {
    match content.app.as_str() {
        "projects" => view! { <FinderApp ctx=ctx /> }.into_view(),
        "experience" => view! { <NotesApp ctx=ctx /> }.into_view(),
        "messages" => view! { <MessagesApp ctx=ctx /> }.into_view(),
        "facetime" => view! { <FaceTimeApp ctx=ctx /> }.into_view(),
        "skills" => placeholders::skills_view(),
        "blog" => placeholders::blog_view(),
        "gallery" => placeholders::gallery_view(),
        "contact" => placeholders::contact_view(ctx),
        "resume" => placeholders::pdf_view("resume.pdf"),
        other => view! { <p class="app-missing">{format!("No app installed for `{other}`")}</p> }
            .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    #[test]
    fn catalog_ids_are_unique_and_valid() {
        let mut ids: Vec<&str> = app_registry().iter().map(|entry| entry.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), app_registry().len());

        for entry in app_registry() {
            assert!(
                ApplicationId::new(entry.id).is_ok(),
                "{} should be a valid application id",
                entry.id
            );
        }
    }

    #[test]
    fn default_geometry_respects_chrome_minimums() {
        for entry in app_registry() {
            assert!(entry.default_rect.w >= MIN_WINDOW_WIDTH, "{}", entry.id);
            assert!(entry.default_rect.h >= MIN_WINDOW_HEIGHT, "{}", entry.id);
        }
    }

    #[test]
    fn only_the_finder_draws_its_own_frame() {
        let frameless: Vec<&str> = app_registry()
            .iter()
            .filter(|entry| !entry.has_chrome)
            .map(|entry| entry.id)
            .collect();
        assert_eq!(frameless, vec!["projects"]);
    }

    #[test]
    fn open_request_carries_catalog_defaults() {
        let finder = descriptor("projects").expect("catalog entry");
        let request = open_request(finder);

        assert_eq!(request.id.as_str(), "projects");
        assert_eq!(request.rect, Some(finder.default_rect));
        assert!(!request.has_chrome);
        assert_eq!(request.payload.app.as_str(), "projects");
    }

    #[test]
    fn resume_is_a_desktop_file_not_a_launcher_entry() {
        let resume = descriptor("resume").expect("catalog entry");
        assert!(!resume.show_on_desktop);
        assert!(!resume.show_in_dock);
    }
}
