//! Root document component - the complete HTML page around a view.

use leptos::prelude::*;

use super::{Footer, Nav};
use crate::styles::{CSP, SITE_CSS};
use crate::Motion;

/// `<html>` shell: head, navigation, the page body and the footer.
#[component]
pub fn PageDocument(
    page_title: String,
    site_name: String,
    /// Relative path back to the site root
    root: &'static str,
    motion: Motion,
    children: Children,
) -> impl IntoView {
    let animated = motion == Motion::Animated;
    let body_class = if animated { "motion" } else { "" };

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{page_title}</title>
                <style>{SITE_CSS}</style>
            </head>
            <body class=body_class>
                <Nav site_name=site_name.clone() root=root />
                <main>{children()}</main>
                <Footer site_name=site_name />
                {animated.then(|| view! { <script>{MOTION_SCRIPT}</script> })}
            </body>
        </html>
    }
}

/// Entrance animations. Adds `visible` to each `.reveal` element once it
/// scrolls into view; without IntersectionObserver everything shows at once.
const MOTION_SCRIPT: &str = r#"
(() => {
  const targets = document.querySelectorAll('.reveal');
  if (!('IntersectionObserver' in window)) {
    targets.forEach(el => el.classList.add('visible'));
    return;
  }
  const observer = new IntersectionObserver(entries => {
    entries.forEach(entry => {
      if (entry.isIntersecting) {
        entry.target.classList.add('visible');
        observer.unobserve(entry.target);
      }
    });
  }, { threshold: 0.15 });
  targets.forEach(el => observer.observe(el));
})();
"#;
