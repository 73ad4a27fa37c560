use leptos::prelude::*;

use crate::content::{HERO, INVESTOR_SIGNUP_HREF, SIGNUP_HREF};

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container reveal">
                <div class="hero-badge">
                    <span class="hero-badge-dot"></span>
                    {HERO.badge}
                </div>
                <h1 class="hero-title">
                    {HERO.headline}
                    <br />
                    <span class="hero-title-accent">{HERO.accent}</span>
                </h1>
                <p class="hero-description">{HERO.description}</p>
                <div class="hero-actions">
                    <a href=SIGNUP_HREF class="btn btn-primary">{HERO.primary_cta}</a>
                    <a href=INVESTOR_SIGNUP_HREF class="btn btn-secondary">{HERO.secondary_cta}</a>
                </div>
            </div>
        </section>
    }
}
