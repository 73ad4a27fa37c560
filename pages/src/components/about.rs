//! Mission / vision / values strip.

use leptos::prelude::*;

use super::HighlightCard;
use crate::content::ABOUT;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <div class="container">
                <div class="section-header reveal">
                    <p class="section-eyebrow">"About us"</p>
                    <h2 class="section-title">"Fundraising should not depend on who you know"</h2>
                </div>
                <div class="about-grid">
                    {ABOUT.iter().map(|&item| view! { <HighlightCard item=item /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
