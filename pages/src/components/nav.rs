use leptos::prelude::*;

use crate::content::{CHEAT_SHEET_HREF, SIGNUP_HREF};

/// Top bar shared by both views.
///
/// `root` is the relative path back to the site root ("" on the landing page,
/// "../" inside `cheatsheet/`).
#[component]
pub fn Nav(site_name: String, root: &'static str) -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner container">
                <a href=format!("{}index.html", root) class="nav-brand">
                    <span class="nav-logo">"S"</span>
                    <span class="nav-title">{site_name}</span>
                </a>
                <div class="nav-links">
                    <a href=format!("{}index.html#features", root) class="nav-link">"Features"</a>
                    <a href=format!("{}index.html#process", root) class="nav-link">"How it works"</a>
                    <a href=format!("{}{}", root, CHEAT_SHEET_HREF) class="nav-link">"Cheat Sheet"</a>
                    <a href=SIGNUP_HREF class="nav-cta">"Sign up"</a>
                </div>
            </div>
        </nav>
    }
}
