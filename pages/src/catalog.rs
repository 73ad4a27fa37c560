//! The founder cheat sheet catalog.
//!
//! Entries are `'static` tables built at compile time. Nothing mutates them;
//! views and the selection controller hold plain `&'static TopicEntry`
//! references into [`STANDARD_TOPICS`].
//!
//! ```rust
//! use seedline_pages::catalog::ContentCatalog;
//!
//! let catalog = ContentCatalog::standard();
//! let pitch = catalog.find("Pitching Perfect").unwrap();
//! assert_eq!(pitch.slug(), "pitching-perfect");
//! assert_eq!(pitch.detail.checklist.len(), 5);
//! ```

use std::collections::HashSet;

use heck::ToKebabCase;
use serde::Serialize;

use crate::error::PagesError;

/// Icon shown on a topic card and in the overlay header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicIcon {
    /// Slide deck
    Presentation,
    /// Legal document
    FileText,
    /// Trend line
    ChartLine,
    /// Pie split
    ChartPie,
    /// Magnifier
    MagnifyingGlass,
    /// Envelope
    Envelope,
}

/// Opaque accent token. Only ever mapped to a CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccentStyle {
    Blue,
    Green,
    Purple,
    Orange,
    Pink,
    Teal,
}

impl AccentStyle {
    /// CSS class carrying the accent colors.
    pub fn class(self) -> &'static str {
        match self {
            AccentStyle::Blue => "accent-blue",
            AccentStyle::Green => "accent-green",
            AccentStyle::Purple => "accent-purple",
            AccentStyle::Orange => "accent-orange",
            AccentStyle::Pink => "accent-pink",
            AccentStyle::Teal => "accent-teal",
        }
    }
}

/// Extended payload shown in the detail overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TopicDetail {
    /// Ordered tips, rendered as a numbered list
    pub tips: &'static [&'static str],
    /// Checklist rows, rendered as inert labeled rows
    pub checklist: &'static [&'static str],
}

/// One cheat sheet card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TopicEntry {
    /// Unique within the catalog; doubles as the rendering key
    pub title: &'static str,
    pub summary: &'static str,
    pub icon: TopicIcon,
    pub accent: AccentStyle,
    pub detail: TopicDetail,
}

impl TopicEntry {
    /// Kebab-case form of the title, used for page names and anchors.
    pub fn slug(&self) -> String {
        self.title.to_kebab_case()
    }
}

/// Ordered, read-only list of topics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ContentCatalog {
    entries: &'static [TopicEntry],
}

impl ContentCatalog {
    /// Wrap a static table. Order is display order.
    pub const fn new(entries: &'static [TopicEntry]) -> Self {
        Self { entries }
    }

    /// The built-in founder cheat sheet.
    pub fn standard() -> Self {
        Self::new(STANDARD_TOPICS)
    }

    pub fn entries(&self) -> &'static [TopicEntry] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact title lookup.
    pub fn find(&self, title: &str) -> Option<&'static TopicEntry> {
        self.entries.iter().find(|e| e.title == title)
    }

    /// Lookup by [`TopicEntry::slug`].
    pub fn find_slug(&self, slug: &str) -> Option<&'static TopicEntry> {
        self.entries.iter().find(|e| e.slug() == slug)
    }

    /// Title first, then slug. Used by the CLI where either is accepted.
    pub fn resolve(&self, key: &str) -> Result<&'static TopicEntry, PagesError> {
        self.find(key)
            .or_else(|| self.find_slug(key))
            .ok_or_else(|| PagesError::UnknownTopic(key.to_string()))
    }

    /// Check title/slug uniqueness and that every entry carries content.
    pub fn validate(&self) -> Result<(), PagesError> {
        let mut titles = HashSet::new();
        let mut slugs = HashSet::new();
        for entry in self.entries {
            if entry.title.trim().is_empty() {
                return Err(PagesError::EmptyTopic(entry.title.to_string(), "empty title"));
            }
            if entry.detail.tips.is_empty() {
                return Err(PagesError::EmptyTopic(entry.title.to_string(), "no tips"));
            }
            if !titles.insert(entry.title) || !slugs.insert(entry.slug()) {
                return Err(PagesError::DuplicateTopic(entry.title.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Cheat sheet topics in display order.
pub static STANDARD_TOPICS: &[TopicEntry] = &[
    TopicEntry {
        title: "Pitching Perfect",
        summary: "Build a deck that tells a story investors remember after the meeting ends.",
        icon: TopicIcon::Presentation,
        accent: AccentStyle::Blue,
        detail: TopicDetail {
            tips: &[
                "Open with the problem, not the product. Make the pain obvious in one slide.",
                "Keep the deck to 10-12 slides and rehearse it until it fits in ten minutes.",
                "End with a specific ask: how much you are raising and what it unlocks.",
            ],
            checklist: &[
                "Problem Statement",
                "Solution",
                "Market Size",
                "Competition",
                "Team",
            ],
        },
    },
    TopicEntry {
        title: "Term Sheet Basics",
        summary: "Decode the clauses that decide who owns what and who gets paid first.",
        icon: TopicIcon::FileText,
        accent: AccentStyle::Purple,
        detail: TopicDetail {
            tips: &[
                "Valuation is only one number. Preferences and control terms often matter more.",
                "Model the waterfall for a modest exit before you sign anything.",
                "Bring a lawyer who has closed venture rounds, not just a generalist.",
            ],
            checklist: &[
                "Pre-Money Valuation",
                "Liquidation Preference",
                "Board Composition",
                "Pro-Rata Rights",
            ],
        },
    },
    TopicEntry {
        title: "KPI Mastery",
        summary: "Track the handful of metrics that prove your business is working.",
        icon: TopicIcon::ChartLine,
        accent: AccentStyle::Green,
        detail: TopicDetail {
            tips: &[
                "Pick one north-star metric and report it the same way every month.",
                "Show cohorts, not just totals. Retention curves tell the real story.",
                "Know your unit economics cold; investors will ask for them unprompted.",
            ],
            checklist: &[
                "Monthly Recurring Revenue",
                "Customer Acquisition Cost",
                "Lifetime Value",
                "Burn Rate",
            ],
        },
    },
    TopicEntry {
        title: "Cap Table Clarity",
        summary: "Keep ownership clean so every new round closes without surprises.",
        icon: TopicIcon::ChartPie,
        accent: AccentStyle::Orange,
        detail: TopicDetail {
            tips: &[
                "Record every grant, note and SAFE the day it is signed.",
                "Model dilution for the next two rounds before agreeing to this one.",
                "Size the option pool from a hiring plan, not a rule of thumb.",
            ],
            checklist: &[
                "Founder Vesting",
                "Option Pool",
                "Convertible Notes",
                "Fully Diluted Shares",
            ],
        },
    },
    TopicEntry {
        title: "Due Diligence Prep",
        summary: "Have the data room ready before the first partner meeting.",
        icon: TopicIcon::MagnifyingGlass,
        accent: AccentStyle::Pink,
        detail: TopicDetail {
            tips: &[
                "Organize the data room by the questions investors ask, not by department.",
                "Reconcile financials with your bank statements before anyone else does.",
                "Disclose known issues early; surprises late in diligence kill deals.",
            ],
            checklist: &[
                "Incorporation Documents",
                "Financial Statements",
                "IP Assignments",
                "Customer Contracts",
                "Employment Agreements",
            ],
        },
    },
    TopicEntry {
        title: "Investor Updates",
        summary: "Turn a monthly email into your strongest fundraising asset.",
        icon: TopicIcon::Envelope,
        accent: AccentStyle::Teal,
        detail: TopicDetail {
            tips: &[
                "Send updates on a fixed schedule, good month or bad.",
                "Lead with the numbers, then the highlights, then the asks.",
                "Make each ask specific enough that a reader can act in five minutes.",
            ],
            checklist: &[
                "Key Metrics",
                "Highlights",
                "Lowlights",
                "Asks",
            ],
        },
    },
];
