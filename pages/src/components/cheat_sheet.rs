use leptos::prelude::*;

use super::{DetailOverlay, TopicGrid};
use crate::catalog::ContentCatalog;
use crate::selection::Selection;

/// Cheat sheet view: header, card grid and, when a topic is selected, its
/// detail overlay.
#[component]
pub fn CheatSheetPage(catalog: ContentCatalog, selection: Selection) -> impl IntoView {
    view! {
        <section class="page-header">
            <div class="container">
                <p class="section-eyebrow">"Founder cheat sheet"</p>
                <h1 class="page-title">"Fundraising, one card at a time"</h1>
                <p class="page-description">
                    "Pick a topic for the tips and checklist we wish we had before our first raise."
                </p>
            </div>
        </section>
        <section class="cheat-sheet">
            <div class="container">
                <TopicGrid catalog=catalog selection=selection />
            </div>
        </section>
        <DetailOverlay selection=selection />
    }
}
