//! Detail overlay for the selected topic.
//!
//! Renders nothing at all for [`Selection::Hidden`], so a page without a
//! selection carries neither dialog nor backdrop.

use leptos::prelude::*;

use super::{ICON_CLOSE, ICON_SQUARE, Icon, topic_icon_path};
use crate::catalog::TopicEntry;
use crate::selection::Selection;

#[component]
pub fn DetailOverlay(selection: Selection) -> impl IntoView {
    match selection.entry() {
        None => ().into_any(),
        Some(entry) => view! { <OverlayDialog entry=entry /> }.into_any(),
    }
}

#[component]
fn OverlayDialog(entry: &'static TopicEntry) -> impl IntoView {
    // Dismissing (close control or backdrop) leads to the Hidden page.
    let dismiss_href = Selection::Hidden.page_href();
    let header_class = format!("overlay-header {}", entry.accent.class());

    view! {
        <div class="detail-overlay" data-topic=entry.title>
            <a class="overlay-backdrop" href=dismiss_href.clone() aria-label="Close details"></a>
            <div class="overlay-dialog" role="dialog" aria-modal="true">
                <header class=header_class>
                    <span class="overlay-icon">
                        <Icon path=topic_icon_path(entry.icon) size="28" />
                    </span>
                    <h2 class="overlay-title">{entry.title}</h2>
                    <a class="overlay-close" href=dismiss_href aria-label="Close">
                        <Icon path=ICON_CLOSE size="18" />
                    </a>
                </header>
                <p class="overlay-summary">{entry.summary}</p>

                <h3 class="overlay-heading">"Key tips"</h3>
                <ol class="detail-tips">
                    {entry
                        .detail
                        .tips
                        .iter()
                        .enumerate()
                        .map(|(idx, tip)| {
                            view! {
                                <li class="detail-tip">
                                    <span class="tip-index">{idx + 1}</span>
                                    <span class="tip-text">{*tip}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>

                <h3 class="overlay-heading">"Checklist"</h3>
                <ul class="detail-checklist">
                    {entry
                        .detail
                        .checklist
                        .iter()
                        .map(|item| {
                            view! {
                                <li class="checklist-row">
                                    <Icon path=ICON_SQUARE size="16" class="checklist-box" />
                                    <span class="checklist-label">{*item}</span>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ul>
            </div>
        </div>
    }
}
