use leptos::prelude::*;

#[component]
pub fn Footer(site_name: String) -> impl IntoView {
    let copyright = format!("(c) 2025 {}. Built for founders, by founders.", site_name);
    view! {
        <footer class="footer">
            <div class="container">
                <span class="footer-title">{site_name}</span>
                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
