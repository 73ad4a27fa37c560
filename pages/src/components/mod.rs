//! Leptos UI components for both views.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! ├── Nav
//! ├── LandingPage
//! │   ├── Hero
//! │   ├── About          (HighlightCard x3)
//! │   ├── Features       (HighlightCard xN)
//! │   ├── Process
//! │   └── CallToAction
//! ├── CheatSheetPage
//! │   ├── TopicGrid      (TopicCard per catalog entry)
//! │   └── DetailOverlay  (only when a topic is selected)
//! └── Footer
//! ```
//!
//! Components are normally reached through [`crate::render_landing`] and
//! [`crate::render_cheat_sheet`].

mod about;
mod call_to_action;
mod cheat_sheet;
mod document;
mod features;
mod footer;
mod hero;
mod icons;
mod landing;
mod nav;
mod overlay;
mod process;
mod topic_grid;

pub use about::About;
pub use call_to_action::CallToAction;
pub use cheat_sheet::CheatSheetPage;
pub use document::PageDocument;
pub use features::{Features, HighlightCard};
pub use footer::Footer;
pub use hero::Hero;
pub use icons::*;
pub use landing::LandingPage;
pub use nav::Nav;
pub use overlay::DetailOverlay;
pub use process::Process;
pub use topic_grid::TopicGrid;
