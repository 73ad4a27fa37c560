//! Card grid for the cheat sheet.

use leptos::prelude::*;

use super::{Icon, topic_icon_path};
use crate::catalog::{ContentCatalog, TopicEntry};
use crate::selection::Selection;

/// One card per catalog entry, in catalog order.
///
/// Each card links to the page of `Visible(entry)`; the card of the current
/// selection is marked `selected`.
#[component]
pub fn TopicGrid(catalog: ContentCatalog, selection: Selection) -> impl IntoView {
    let selected_title = selection.entry().map(|e| e.title);

    view! {
        <div class="topic-grid">
            {catalog
                .entries()
                .iter()
                .map(|entry| {
                    let selected = selected_title == Some(entry.title);
                    view! { <TopicCard entry=entry selected=selected /> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn TopicCard(entry: &'static TopicEntry, selected: bool) -> impl IntoView {
    let class = if selected {
        format!("topic-card reveal {} selected", entry.accent.class())
    } else {
        format!("topic-card reveal {}", entry.accent.class())
    };
    let href = Selection::Visible(entry).page_href();

    view! {
        <a class=class href=href id=entry.slug() data-topic=entry.title>
            <div class="topic-icon">
                <Icon path=topic_icon_path(entry.icon) />
            </div>
            <h3 class="topic-title">{entry.title}</h3>
            <p class="topic-summary">{entry.summary}</p>
            <span class="topic-more">"View tips"</span>
        </a>
    }
}
