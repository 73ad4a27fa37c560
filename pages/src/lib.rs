//! # seedline-pages
//!
//! Leptos SSR renderer for the Seedline marketing site.
//!
//! Two views are rendered to complete static HTML documents:
//!
//! - the **landing page**: hero, about, features, process steps and a closing
//!   call to action, all driven by the literal tables in [`content`];
//! - the **founder cheat sheet**: a card grid over the [`catalog`] plus a detail
//!   overlay for the selected topic, driven by [`selection`].
//!
//! ## Quick Start
//!
//! ```rust
//! use seedline_pages::{render_cheat_sheet, RenderOptions};
//! use seedline_pages::catalog::ContentCatalog;
//! use seedline_pages::selection::SelectionController;
//!
//! let catalog = ContentCatalog::standard();
//! let mut controller = SelectionController::new();
//! controller.select_title(&catalog, "KPI Mastery").unwrap();
//!
//! let html = render_cheat_sheet(&catalog, controller.state(), &RenderOptions::default());
//! assert!(html.contains(r#"class="detail-overlay""#));
//! ```
//!
//! ## Selection without scripts
//!
//! The overlay state lives in the page, not in the browser: the generator
//! writes one document per [`selection::Selection`] and every card, close
//! control and backdrop is a link to the document of the state it leads to.
//! Entrance animations are the only script on the page and can be turned off
//! with [`Motion::Static`].

pub mod catalog;
pub mod components;
pub mod content;
pub mod error;
pub mod selection;
pub mod styles;

use components::{CheatSheetPage, LandingPage, PageDocument};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

pub use catalog::{ContentCatalog, TopicEntry};
pub use error::PagesError;
pub use selection::{DismissReason, Selection, SelectionController};

/// Whether pages carry the entrance-animation script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Motion {
    /// Sections fade in as they scroll into view
    #[default]
    Animated,
    /// Everything is visible on load, no script
    Static,
}

/// Settings shared by every rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    /// Brand shown in the navigation bar, footer and `<title>`
    pub site_name: String,
    pub motion: Motion,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            site_name: "Seedline".into(),
            motion: Motion::default(),
        }
    }
}

/// Render the landing page as a complete HTML document.
///
/// ```rust
/// use seedline_pages::{render_landing, RenderOptions};
///
/// let html = render_landing(&RenderOptions::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_landing(options: &RenderOptions) -> String {
    let doc = view! {
        <PageDocument
            page_title=options.site_name.clone()
            site_name=options.site_name.clone()
            root=""
            motion=options.motion
        >
            <LandingPage />
        </PageDocument>
    };

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

/// Render the cheat sheet for one selection state.
///
/// The document is meant to live in `cheatsheet/`, next to the documents of
/// the other states (see [`Selection::page_href`]).
pub fn render_cheat_sheet(
    catalog: &ContentCatalog,
    selection: Selection,
    options: &RenderOptions,
) -> String {
    let page_title = match selection.entry() {
        Some(entry) => format!("{} | {} Cheat Sheet", entry.title, options.site_name),
        None => format!("{} Cheat Sheet", options.site_name),
    };
    let catalog = *catalog;
    let doc = view! {
        <PageDocument
            page_title=page_title
            site_name=options.site_name.clone()
            root="../"
            motion=options.motion
        >
            <CheatSheetPage catalog=catalog selection=selection />
        </PageDocument>
    };

    format!("<!DOCTYPE html>\n{}", doc.to_html())
}
