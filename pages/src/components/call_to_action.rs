use leptos::prelude::*;

use super::{ICON_ARROW_RIGHT, Icon};
use crate::content::{CALL_TO_ACTION, INVESTOR_SIGNUP_HREF, SIGNUP_HREF};

/// Closing banner with both signup links.
#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section id="signup" class="cta">
            <div class="container reveal">
                <h2 class="cta-title">{CALL_TO_ACTION.title}</h2>
                <p class="cta-description">{CALL_TO_ACTION.description}</p>
                <div class="cta-actions">
                    <a href=SIGNUP_HREF class="btn btn-primary">
                        {CALL_TO_ACTION.founder_label}
                        <Icon path=ICON_ARROW_RIGHT size="18" class="btn-icon" />
                    </a>
                    <a href=INVESTOR_SIGNUP_HREF class="btn btn-secondary">
                        {CALL_TO_ACTION.investor_label}
                    </a>
                </div>
            </div>
        </section>
    }
}
