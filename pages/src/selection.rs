//! Which cheat sheet topic, if any, is expanded into the detail overlay.
//!
//! The overlay has exactly two states, so the slot is a tagged variant rather
//! than an `Option` plus a visibility flag:
//!
//! ```text
//! Hidden --select(e)--> Visible(e)
//! Visible(e) --select(e2)--> Visible(e2)
//! Visible(e) --clear / dismiss--> Hidden
//! ```
//!
//! The controller is owned by the cheat sheet view; the overlay only ever
//! receives a [`Selection`] by value.

use crate::catalog::{ContentCatalog, TopicEntry};
use crate::error::PagesError;

/// Page that renders the catalog with nothing selected.
pub const INDEX_PAGE: &str = "index.html";

/// Current state of the detail overlay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
    /// No topic selected; the overlay is absent.
    #[default]
    Hidden,
    /// The overlay shows this topic.
    Visible(&'static TopicEntry),
}

impl Selection {
    pub fn entry(self) -> Option<&'static TopicEntry> {
        match self {
            Selection::Hidden => None,
            Selection::Visible(entry) => Some(entry),
        }
    }

    pub fn is_visible(self) -> bool {
        matches!(self, Selection::Visible(_))
    }

    /// Relative link to the page rendering this state.
    ///
    /// Cards link to the `Visible` page of their topic; the close control and
    /// the backdrop link to the `Hidden` page.
    pub fn page_href(self) -> String {
        match self {
            Selection::Hidden => INDEX_PAGE.to_string(),
            Selection::Visible(entry) => format!("{}.html", entry.slug()),
        }
    }
}

/// How the user dismissed the overlay. Both paths clear the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissReason {
    /// The explicit close control inside the dialog
    CloseButton,
    /// A tap on the backdrop behind the dialog
    Backdrop,
}

/// Single-slot register for the selected topic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionController {
    state: Selection,
}

impl SelectionController {
    /// Starts `Hidden`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `entry`. Selecting the current entry again changes nothing.
    pub fn select(&mut self, entry: &'static TopicEntry) {
        self.state = Selection::Visible(entry);
    }

    /// Hide the overlay. No-op when already hidden.
    pub fn clear(&mut self) {
        self.state = Selection::Hidden;
    }

    pub fn dismiss(&mut self, _reason: DismissReason) {
        self.clear();
    }

    pub fn current(&self) -> Option<&'static TopicEntry> {
        self.state.entry()
    }

    pub fn state(&self) -> Selection {
        self.state
    }

    /// Select by exact title. Unknown titles leave the state untouched.
    pub fn select_title(
        &mut self,
        catalog: &ContentCatalog,
        title: &str,
    ) -> Result<&'static TopicEntry, PagesError> {
        let entry = catalog
            .find(title)
            .ok_or_else(|| PagesError::UnknownTopic(title.to_string()))?;
        self.select(entry);
        Ok(entry)
    }

    /// Select by slug. Unknown slugs leave the state untouched.
    pub fn select_slug(
        &mut self,
        catalog: &ContentCatalog,
        slug: &str,
    ) -> Result<&'static TopicEntry, PagesError> {
        let entry = catalog
            .find_slug(slug)
            .ok_or_else(|| PagesError::UnknownTopic(slug.to_string()))?;
        self.select(entry);
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn catalog() -> ContentCatalog {
        ContentCatalog::standard()
    }

    #[test]
    fn starts_hidden() {
        let controller = SelectionController::new();
        assert_eq!(controller.state(), Selection::Hidden);
        assert_eq!(controller.current(), None);
    }

    #[test]
    fn select_then_current_returns_entry() {
        for entry in catalog().entries() {
            let mut controller = SelectionController::new();
            controller.select(entry);
            assert_eq!(controller.current(), Some(entry));
            assert!(controller.state().is_visible());
        }
    }

    #[test]
    fn clear_always_hides() {
        let mut controller = SelectionController::new();
        controller.clear();
        assert_eq!(controller.current(), None);

        controller.select(&catalog().entries()[1]);
        controller.clear();
        assert_eq!(controller.current(), None);

        controller.clear();
        assert_eq!(controller.state(), Selection::Hidden);
    }

    #[test]
    fn select_is_idempotent() {
        let entry = &catalog().entries()[0];
        let mut once = SelectionController::new();
        once.select(entry);

        let mut twice = SelectionController::new();
        twice.select(entry);
        twice.select(entry);

        assert_eq!(once, twice);
    }

    #[test]
    fn reselect_replaces_previous_entry() {
        let catalog = catalog();
        let mut controller = SelectionController::new();
        controller.select_title(&catalog, "Term Sheet Basics").unwrap();
        controller.select_title(&catalog, "KPI Mastery").unwrap();
        assert_eq!(controller.current().map(|e| e.title), Some("KPI Mastery"));
    }

    #[test]
    fn both_dismiss_paths_clear() {
        let catalog = catalog();
        for reason in [DismissReason::CloseButton, DismissReason::Backdrop] {
            let mut controller = SelectionController::new();
            controller.select_slug(&catalog, "pitching-perfect").unwrap();
            controller.dismiss(reason);
            assert_eq!(controller.state(), Selection::Hidden);
        }
    }

    #[test]
    fn unknown_topic_keeps_state() {
        let catalog = catalog();
        let mut controller = SelectionController::new();
        controller.select_title(&catalog, "KPI Mastery").unwrap();

        let err = controller.select_slug(&catalog, "series-z").unwrap_err();
        assert_eq!(err, PagesError::UnknownTopic("series-z".into()));
        assert_eq!(controller.current().map(|e| e.title), Some("KPI Mastery"));
    }

    #[test]
    fn page_href_follows_state() {
        let entry = catalog().find("Pitching Perfect").unwrap();
        assert_eq!(Selection::Hidden.page_href(), "index.html");
        assert_eq!(Selection::Visible(entry).page_href(), "pitching-perfect.html");
    }
}
