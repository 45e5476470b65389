//! Centralized inline-SVG icon set.

use leptos::*;

/// Every glyph the shell and apps may render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    /// Apple-style menu logo.
    Apple,
    /// Battery/energy bolt for the menu bar.
    Bolt,
    /// Wi-Fi arcs for the menu bar.
    Wifi,
    /// Person silhouette (lock screen, menu bar).
    User,
    /// Padlock for the lock control.
    Lock,
    /// Microphone for speech capture.
    Mic,
    /// Finder face.
    Finder,
    /// Briefcase (experience notes).
    Briefcase,
    /// Terminal prompt.
    Terminal,
    /// Compass (browser/blog).
    Compass,
    /// Photo frame (gallery).
    Photos,
    /// Envelope (contact).
    Mail,
    /// Video camera (calls).
    Video,
    /// Speech bubble (messages).
    MessageBubble,
    /// Voice waveform (assistant).
    Waveform,
    /// Document with text lines (PDF viewer).
    FileText,
    /// Plain folder.
    Folder,
}

impl IconName {
    fn path_data(self) -> &'static str {
        match self {
            Self::Apple => "M14.94 5.19A4.38 4.38 0 0 0 16 2a4.44 4.44 0 0 0-3 1.52 4.17 4.17 0 0 0-1 3.09 3.69 3.69 0 0 0 2.94-1.42zm2.52 7.44a4.51 4.51 0 0 1 2.16-3.81 4.66 4.66 0 0 0-3.66-2c-1.56-.16-3 .91-3.83.91s-2-.89-3.3-.87A4.92 4.92 0 0 0 4.69 9.39C2.93 12.45 4.24 17 6 19.47c.8 1.21 1.8 2.58 3.12 2.53s1.75-.82 3.28-.82 2 .82 3.3.79 2.22-1.24 3.06-2.45a11 11 0 0 0 1.38-2.85 4.41 4.41 0 0 1-2.68-4.08z",
            Self::Bolt => "M13.2 2.2 4.8 13h5.4l-1.4 8.8 8.4-10.8h-5.4z",
            Self::Wifi => "M12 18.6a1.4 1.4 0 1 0 0 2.8 1.4 1.4 0 0 0 0-2.8zm0-4.4c-1.8 0-3.5.7-4.7 2l1.6 1.6a4.5 4.5 0 0 1 6.2 0l1.6-1.6a6.7 6.7 0 0 0-4.7-2zm0-4.4c-3 0-5.8 1.2-7.9 3.2l1.6 1.6A9 9 0 0 1 12 12a9 9 0 0 1 6.3 2.6l1.6-1.6a11.2 11.2 0 0 0-7.9-3.2zM12 5.4c-4.2 0-8.1 1.7-11 4.4l1.6 1.6A13.4 13.4 0 0 1 12 7.6c3.6 0 6.9 1.4 9.4 3.8l1.6-1.6a15.6 15.6 0 0 0-11-4.4z",
            Self::User => "M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8zm0 2c-3.9 0-7 3.1-7 7h14c0-3.9-3.1-7-7-7z",
            Self::Lock => "M12 2a5 5 0 0 0-5 5v3H6a2 2 0 0 0-2 2v8a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-8a2 2 0 0 0-2-2h-1V7a5 5 0 0 0-5-5zm-3 5a3 3 0 0 1 6 0v3H9V7zm3 7a1.6 1.6 0 0 1 .8 3v1.6a.8.8 0 0 1-1.6 0V17a1.6 1.6 0 0 1 .8-3z",
            Self::Mic => "M12 2a3 3 0 0 0-3 3v6a3 3 0 0 0 6 0V5a3 3 0 0 0-3-3zm-7 9a7 7 0 0 0 6 6.9V21H8v2h8v-2h-3v-3.1a7 7 0 0 0 6-6.9h-2a5 5 0 0 1-10 0H5z",
            Self::Finder => "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10 10-4.5 10-10S17.5 2 12 2zm-4 6.4c.5 0 .9.6.9 1.4s-.4 1.4-.9 1.4-.9-.6-.9-1.4.4-1.4.9-1.4zm8 0c.5 0 .9.6.9 1.4s-.4 1.4-.9 1.4-.9-.6-.9-1.4.4-1.4.9-1.4zM7 15.2c1.5 1.2 3.2 1.8 5 1.8s3.5-.6 5-1.8l1 1.3c-1.8 1.4-3.9 2.1-6 2.1s-4.2-.7-6-2.1l1-1.3z",
            Self::Briefcase => "M9 4a2 2 0 0 0-2 2v1H5a2 2 0 0 0-2 2v9a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V9a2 2 0 0 0-2-2h-2V6a2 2 0 0 0-2-2H9zm0 2h6v1H9V6zm-4 5h14v2h-5v1.5h-4V11H5z",
            Self::Terminal => "M4 4a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V6a2 2 0 0 0-2-2H4zm2.3 4 4 4-4 4-1.4-1.4 2.6-2.6-2.6-2.6L6.3 8zM12 14h6v2h-6v-2z",
            Self::Compass => "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10 10-4.5 10-10S17.5 2 12 2zm4.5 5.5-2.7 5.7-5.7 2.7 2.7-5.7 5.7-2.7zM12 11a1 1 0 1 1 0 2 1 1 0 0 1 0-2z",
            Self::Photos => "M4 4a2 2 0 0 0-2 2v12a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2V6a2 2 0 0 0-2-2H4zm4 3a2 2 0 1 1 0 4 2 2 0 0 1 0-4zm-4 11 5-6 3 3.6L15 12l5 6H4z",
            Self::Mail => "M3 8l7.89 5.26a2 2 0 0 0 2.22 0L21 8m-16 11h14a2 2 0 0 0 2-2V7a2 2 0 0 0-2-2H5a2 2 0 0 0-2 2v10a2 2 0 0 0 2 2z",
            Self::Video => "M3 7a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v2.2l4.4-2.6A1 1 0 0 1 22 7.5v9a1 1 0 0 1-1.6.9L16 14.8V17a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V7z",
            Self::MessageBubble => "M12 3C6.5 3 2 6.7 2 11.3c0 2.4 1.2 4.5 3.2 6-.2 1.2-.8 2.3-1.8 3.2 1.8 0 3.4-.6 4.6-1.5 1.2.4 2.6.6 4 .6 5.5 0 10-3.7 10-8.3S17.5 3 12 3z",
            Self::Waveform => "M11 4h2v16h-2V4zM7 8h2v8H7V8zm8 0h2v8h-2V8zM3 10h2v4H3v-4zm16 0h2v4h-2v-4z",
            Self::FileText => "M6 2a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8l-6-6H6zm7 1.5L18.5 9H13V3.5zM8 12h8v1.6H8V12zm0 4h8v1.6H8V16z",
            Self::Folder => "M2 6a2 2 0 0 1 2-2h5l2 2h9a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6z",
        }
    }

    /// Stable token used as a `data-icon` attribute for styling hooks.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Apple => "apple",
            Self::Bolt => "bolt",
            Self::Wifi => "wifi",
            Self::User => "user",
            Self::Lock => "lock",
            Self::Mic => "mic",
            Self::Finder => "finder",
            Self::Briefcase => "briefcase",
            Self::Terminal => "terminal",
            Self::Compass => "compass",
            Self::Photos => "photos",
            Self::Mail => "mail",
            Self::Video => "video",
            Self::MessageBubble => "message-bubble",
            Self::Waveform => "waveform",
            Self::FileText => "file-text",
            Self::Folder => "folder",
        }
    }
}

/// Icon pixel sizes used across the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconSize {
    /// 12px, menu-bar status glyphs.
    Xs,
    /// 16px, inline labels.
    Sm,
    /// 24px, buttons.
    Md,
    /// 48px, dock tiles.
    Lg,
    /// 72px, desktop icons.
    Xl,
}

impl IconSize {
    const fn px(self) -> u32 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 24,
            Self::Lg => 48,
            Self::Xl => 72,
        }
    }
}

/// Renders one glyph as an inline SVG filled with `currentColor`.
#[component]
pub fn Icon(
    /// Glyph to render.
    icon: IconName,
    /// Pixel size.
    size: IconSize,
) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class="ui-icon"
            data-icon=icon.token()
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d=icon.path_data() />
        </svg>
    }
}
