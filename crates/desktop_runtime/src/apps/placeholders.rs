//! Small presentational apps hosted directly by the runtime.
//!
//! Anything with real state or service wiring gets its own crate under
//! `crates/apps/`; these render static site content.

use desktop_app_contract::{AppCommand, AppMountContext};
use leptos::*;

const SKILL_LINES: [&str; 6] = [
    "Languages: Rust, TypeScript, Python, SQL",
    "Systems: async services, wasm frontends, protocol plumbing",
    "Web: Leptos, fine-grained reactivity, canvas rendering",
    "Infra: GitHub Actions, containers, object storage",
    "Databases: PostgreSQL, SQLite, Redis",
    "Interests: window managers, dev tools, tiny simulations",
];

pub(super) fn skills_view() -> View {
    view! {
        <div class="app-skills" role="log" aria-label="Skills terminal">
            <p class="terminal-line"><span class="terminal-prompt">"$ "</span>"cat skills.txt"</p>
            {SKILL_LINES
                .into_iter()
                .map(|line| view! { <p class="terminal-line">{line}</p> })
                .collect_view()}
            <p class="terminal-line">
                <span class="terminal-prompt">"$ "</span>
                <span class="terminal-cursor">"_"</span>
            </p>
        </div>
    }
    .into_view()
}

struct BlogPost {
    title: &'static str,
    date: &'static str,
    teaser: &'static str,
}

const BLOG_POSTS: [BlogPost; 3] = [
    BlogPost {
        title: "A window manager in three hundred lines",
        date: "June 2026",
        teaser: "Stacking order, focus, and why the boring invariants are the whole game.",
    },
    BlogPost {
        title: "Shipping a desktop that is secretly a web page",
        date: "April 2026",
        teaser: "Lock screens, docks, and other lies the browser lets you tell.",
    },
    BlogPost {
        title: "Drag gestures without tears",
        date: "February 2026",
        teaser: "Pointer capture, commit-on-move, and keeping the registry the only truth.",
    },
];

pub(super) fn blog_view() -> View {
    view! {
        <div class="app-blog">
            <h2>"Blog"</h2>
            {BLOG_POSTS
                .iter()
                .map(|post| {
                    view! {
                        <article class="blog-post">
                            <h3>{post.title}</h3>
                            <p class="blog-date">{post.date}</p>
                            <p>{post.teaser}</p>
                        </article>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_view()
}

pub(super) fn gallery_view() -> View {
    view! {
        <div class="app-gallery">
            <h2>"Gallery"</h2>
            <div class="gallery-grid">
                {(1..=6)
                    .map(|n| view! { <div class="gallery-tile">{n.to_string()}</div> })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}

pub(super) fn contact_view(ctx: AppMountContext) -> View {
    let host = ctx.host;
    let mail = move |_| host.send(AppCommand::OpenExternalUrl("mailto:hello@glassdesk.dev".into()));
    let github =
        move |_| host.send(AppCommand::OpenExternalUrl("https://github.com/glassdesk".into()));

    view! {
        <div class="app-contact">
            <h2>"Contact"</h2>
            <ul class="contact-list">
                <li><button class="contact-link" on:click=mail>"hello@glassdesk.dev"</button></li>
                <li><button class="contact-link" on:click=github>"github.com/glassdesk"</button></li>
            </ul>
            <p class="contact-note">"Or open Messages and just say hi."</p>
        </div>
    }
    .into_view()
}

pub(super) fn pdf_view(path: &str) -> View {
    view! {
        <object class="pdf-frame" data=path.to_string() type="application/pdf">
            <p class="pdf-fallback">
                "Your browser cannot display the PDF inline. "
                <a href=path.to_string() download>"Download it instead."</a>
            </p>
        </object>
    }
    .into_view()
}
