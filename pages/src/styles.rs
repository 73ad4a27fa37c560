//! CSS for both views.
//!
//! Everything is inlined into each page so the generated site has no asset
//! pipeline. Entrance animations only apply under `body.motion`; pages
//! rendered with [`crate::Motion::Static`] show all content immediately.

/// Complete stylesheet.
pub const SITE_CSS: &str = r#"
:root {
    --bg: #0b0d12;
    --bg-raised: #141821;
    --bg-card: #1a1f2b;
    --border: #262c3a;
    --text: #e6e8ee;
    --text-dim: #9aa1b2;
    --brand: #5b8cff;
    --brand-strong: #3d6ff0;
    --radius: 14px;
    --shadow: 0 18px 48px rgba(0, 0, 0, 0.45);
    --font: "Inter", -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
}

* { box-sizing: border-box; }

html, body {
    margin: 0;
    padding: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font);
    line-height: 1.6;
}

a { color: inherit; text-decoration: none; }

.container {
    max-width: 1120px;
    margin: 0 auto;
    padding: 0 24px;
}

/* Navigation */
.nav {
    position: sticky;
    top: 0;
    z-index: 20;
    background: rgba(11, 13, 18, 0.85);
    backdrop-filter: blur(10px);
    border-bottom: 1px solid var(--border);
}
.nav-inner { display: flex; align-items: center; justify-content: space-between; height: 64px; }
.nav-brand { display: flex; align-items: center; gap: 10px; font-weight: 700; }
.nav-logo {
    display: inline-flex; align-items: center; justify-content: center;
    width: 32px; height: 32px; border-radius: 8px;
    background: var(--brand); color: #fff;
}
.nav-links { display: flex; align-items: center; gap: 24px; }
.nav-link { color: var(--text-dim); font-size: 14px; }
.nav-link:hover { color: var(--text); }
.nav-cta {
    padding: 8px 16px; border-radius: 999px;
    background: var(--brand); color: #fff; font-size: 14px; font-weight: 600;
}

/* Buttons */
.btn {
    display: inline-flex; align-items: center; gap: 8px;
    padding: 14px 26px; border-radius: 999px;
    font-weight: 600; transition: transform 0.15s ease, background 0.15s ease;
}
.btn:hover { transform: translateY(-2px); }
.btn-primary { background: var(--brand); color: #fff; }
.btn-primary:hover { background: var(--brand-strong); }
.btn-secondary { border: 1px solid var(--border); background: var(--bg-raised); }

/* Hero */
.hero { padding: 120px 0 96px; text-align: center; }
.hero-badge {
    display: inline-flex; align-items: center; gap: 8px;
    padding: 6px 14px; border-radius: 999px;
    border: 1px solid var(--border); color: var(--text-dim); font-size: 13px;
}
.hero-badge-dot { width: 8px; height: 8px; border-radius: 50%; background: #3ddc97; }
.hero-title { font-size: clamp(36px, 6vw, 64px); line-height: 1.1; margin: 24px 0; }
.hero-title-accent { color: var(--brand); }
.hero-description { max-width: 640px; margin: 0 auto 36px; color: var(--text-dim); font-size: 18px; }
.hero-actions, .cta-actions { display: flex; justify-content: center; gap: 16px; flex-wrap: wrap; }

/* Sections */
.about, .features, .process, .cheat-sheet { padding: 88px 0; }
.section-header { text-align: center; margin-bottom: 48px; }
.section-eyebrow {
    color: var(--brand); text-transform: uppercase;
    letter-spacing: 0.12em; font-size: 12px; font-weight: 700;
}
.section-title { font-size: clamp(26px, 4vw, 40px); margin: 8px 0 0; }

.about-grid, .features-grid {
    display: grid; gap: 20px;
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
}
.highlight-card {
    padding: 28px; border-radius: var(--radius);
    background: var(--bg-card); border: 1px solid var(--border);
}
.highlight-icon { font-family: monospace; color: var(--brand); font-weight: 700; }
.highlight-title { margin: 12px 0 8px; }
.highlight-body { margin: 0; color: var(--text-dim); }

/* Process */
.process-steps {
    list-style: none; margin: 0; padding: 0;
    display: grid; gap: 20px;
    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
}
.process-step { padding: 28px; border-radius: var(--radius); background: var(--bg-raised); }
.step-number {
    display: inline-flex; align-items: center; justify-content: center;
    width: 36px; height: 36px; border-radius: 50%;
    background: var(--brand); color: #fff; font-weight: 700;
}
.step-title { margin: 16px 0 8px; }
.step-body { margin: 0; color: var(--text-dim); }

/* Call to action */
.cta {
    padding: 96px 0; text-align: center;
    background: linear-gradient(135deg, rgba(91, 140, 255, 0.18), rgba(61, 220, 151, 0.12));
}
.cta-title { font-size: clamp(28px, 4vw, 44px); margin: 0 0 12px; }
.cta-description { color: var(--text-dim); margin: 0 0 32px; }

/* Cheat sheet */
.page-header { padding: 96px 0 24px; text-align: center; }
.page-title { font-size: clamp(30px, 5vw, 52px); margin: 8px 0; }
.page-description { color: var(--text-dim); }
.topic-grid {
    display: grid; gap: 20px;
    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
}
.topic-card {
    display: block; padding: 28px; border-radius: var(--radius);
    background: var(--bg-card); border: 1px solid var(--border);
    transition: transform 0.15s ease, border-color 0.15s ease;
}
.topic-card:hover, .topic-card.selected { transform: translateY(-4px); border-color: var(--accent); }
.topic-icon {
    display: inline-flex; padding: 10px; border-radius: 12px;
    color: var(--accent); background: var(--accent-soft);
}
.topic-title { margin: 16px 0 8px; }
.topic-summary { margin: 0 0 16px; color: var(--text-dim); }
.topic-more { color: var(--accent); font-size: 14px; font-weight: 600; }

.accent-blue { --accent: #5b8cff; --accent-soft: rgba(91, 140, 255, 0.14); }
.accent-green { --accent: #3ddc97; --accent-soft: rgba(61, 220, 151, 0.14); }
.accent-purple { --accent: #a77bff; --accent-soft: rgba(167, 123, 255, 0.14); }
.accent-orange { --accent: #ff9f43; --accent-soft: rgba(255, 159, 67, 0.14); }
.accent-pink { --accent: #ff6b9a; --accent-soft: rgba(255, 107, 154, 0.14); }
.accent-teal { --accent: #2ed3d3; --accent-soft: rgba(46, 211, 211, 0.14); }

/* Detail overlay */
.detail-overlay {
    position: fixed; inset: 0; z-index: 50;
    display: flex; align-items: center; justify-content: center; padding: 24px;
}
.overlay-backdrop { position: absolute; inset: 0; background: rgba(0, 0, 0, 0.65); }
.overlay-dialog {
    position: relative; width: 100%; max-width: 560px; max-height: 90vh; overflow-y: auto;
    padding: 32px; border-radius: var(--radius);
    background: var(--bg-raised); border: 1px solid var(--border); box-shadow: var(--shadow);
}
.overlay-header { display: flex; align-items: center; gap: 12px; }
.overlay-icon { color: var(--accent); display: inline-flex; }
.overlay-title { flex: 1; margin: 0; }
.overlay-close {
    display: inline-flex; padding: 6px; border-radius: 8px; color: var(--text-dim);
}
.overlay-close:hover { background: var(--bg-card); color: var(--text); }
.overlay-summary { color: var(--text-dim); }
.overlay-heading {
    margin: 24px 0 12px; font-size: 13px;
    text-transform: uppercase; letter-spacing: 0.1em; color: var(--text-dim);
}
.detail-tips, .detail-checklist { list-style: none; margin: 0; padding: 0; display: grid; gap: 10px; }
.detail-tip { display: flex; gap: 12px; }
.tip-index {
    flex: none; display: inline-flex; align-items: center; justify-content: center;
    width: 24px; height: 24px; border-radius: 50%;
    background: var(--bg-card); font-size: 13px; font-weight: 700;
}
.checklist-row { display: flex; align-items: center; gap: 10px; }
.checklist-box { color: var(--text-dim); }

/* Footer */
.footer { padding: 48px 0; border-top: 1px solid var(--border); text-align: center; }
.footer-title { font-weight: 700; }
.footer-copyright { color: var(--text-dim); font-size: 13px; }

/* Entrance animations */
body.motion .reveal {
    opacity: 0;
    transform: translateY(24px);
    transition: opacity 0.6s ease, transform 0.6s ease;
}
body.motion .reveal.visible { opacity: 1; transform: none; }

@media (prefers-reduced-motion: reduce) {
    body.motion .reveal { opacity: 1; transform: none; transition: none; }
}

@media (max-width: 720px) {
    .nav-link { display: none; }
    .hero { padding: 88px 0 64px; }
}
"#;

/// Content-Security-Policy for generated pages. Only inline style and the
/// inline motion script are allowed.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none';";
