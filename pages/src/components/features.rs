use leptos::prelude::*;

use crate::content::{FEATURES, Highlight};

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header reveal">
                    <p class="section-eyebrow">"Features"</p>
                    <h2 class="section-title">"Everything you need to raise your first round"</h2>
                </div>
                <div class="features-grid">
                    {FEATURES.iter().map(|&item| view! { <HighlightCard item=item /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

/// Icon, title and body card used by the about and feature grids.
#[component]
pub fn HighlightCard(item: Highlight) -> impl IntoView {
    view! {
        <article class="highlight-card reveal">
            <div class="highlight-icon">{item.icon}</div>
            <h3 class="highlight-title">{item.title}</h3>
            <p class="highlight-body">{item.body}</p>
        </article>
    }
}
