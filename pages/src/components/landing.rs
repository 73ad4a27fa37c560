use leptos::prelude::*;

use super::{About, CallToAction, Features, Hero, Process};

/// Landing page sections in display order.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <Hero />
        <About />
        <Features />
        <Process />
        <CallToAction />
    }
}
