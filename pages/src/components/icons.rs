//! Inline stroke icons for topic cards, the overlay and buttons.
//!
//! Paths are drawn on a 256x256 grid and rendered with `currentColor`, so the
//! accent class on the surrounding element decides the color.

use leptos::prelude::*;

use crate::catalog::TopicIcon;

/// Renders an inline SVG icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_CLOSE size="18" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            viewBox="0 0 256 256"
            fill="none"
            stroke="currentColor"
            stroke-width="16"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            class=class
        >
            <path d=path></path>
        </svg>
    }
}

pub const ICON_PRESENTATION: &str = "M32,48H224V168H32Z M128,168V216 M96,216H160";

pub const ICON_FILE_TEXT: &str = "M56,32H152L200,80V224H56Z M152,32V80H200 M96,136H160 M96,176H160";

pub const ICON_CHART_LINE: &str = "M32,32V224H224 M64,168L112,112L152,144L216,72";

pub const ICON_CHART_PIE: &str = "M128,40A88,88,0,1,0,216,128H128Z M152,24A80,80,0,0,1,232,104H152Z";

pub const ICON_MAGNIFYING_GLASS: &str = "M112,40A72,72,0,1,0,112,184A72,72,0,1,0,112,40Z M163,163L224,224";

pub const ICON_ENVELOPE: &str = "M32,56H224V200H32Z M32,56L128,144L224,56";

/// Dialog close control
pub const ICON_CLOSE: &str = "M64,64L192,192 M192,64L64,192";

/// Empty box in front of each checklist row
pub const ICON_SQUARE: &str = "M48,48H208V208H48Z";

pub const ICON_ARROW_RIGHT: &str = "M40,128H216 M144,56L216,128L144,200";

/// Path data for a catalog icon.
pub fn topic_icon_path(icon: TopicIcon) -> &'static str {
    match icon {
        TopicIcon::Presentation => ICON_PRESENTATION,
        TopicIcon::FileText => ICON_FILE_TEXT,
        TopicIcon::ChartLine => ICON_CHART_LINE,
        TopicIcon::ChartPie => ICON_CHART_PIE,
        TopicIcon::MagnifyingGlass => ICON_MAGNIFYING_GLASS,
        TopicIcon::Envelope => ICON_ENVELOPE,
    }
}
