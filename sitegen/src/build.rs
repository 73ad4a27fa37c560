//! Static site output.
//!
//! Layout of a built site:
//!
//! ```text
//! <out>/index.html                 landing page
//! <out>/catalog.json               cheat sheet topics
//! <out>/cheatsheet/index.html      cheat sheet, nothing selected
//! <out>/cheatsheet/<slug>.html     cheat sheet with <slug> in the overlay
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use seedline_pages::{
    ContentCatalog, RenderOptions, Selection, render_cheat_sheet, render_landing,
};
use serde::Serialize;
use tracing::{debug, info};

/// Directory holding the cheat sheet pages, relative to the site root.
pub const CHEAT_SHEET_DIR: &str = "cheatsheet";

/// What a build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub pages: Vec<PathBuf>,
}

/// Render every page plus `catalog.json` into `out_dir`.
///
/// The catalog is validated first; nothing is written when it fails.
pub fn build_site(
    catalog: &ContentCatalog,
    options: &RenderOptions,
    out_dir: &Path,
) -> Result<BuildReport> {
    catalog.validate().context("catalog failed validation")?;

    let sheet_dir = out_dir.join(CHEAT_SHEET_DIR);
    fs::create_dir_all(&sheet_dir)
        .with_context(|| format!("failed to create {}", sheet_dir.display()))?;

    let mut pages = Vec::with_capacity(catalog.len() + 2);

    pages.push(write_page(&out_dir.join("index.html"), &render_landing(options))?);

    let mut states = vec![Selection::Hidden];
    states.extend(catalog.entries().iter().map(Selection::Visible));
    for selection in states {
        let path = sheet_dir.join(selection.page_href());
        let html = render_cheat_sheet(catalog, selection, options);
        pages.push(write_page(&path, &html)?);
    }

    let catalog_path = out_dir.join("catalog.json");
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(&catalog_path, json)
        .with_context(|| format!("failed to write {}", catalog_path.display()))?;
    debug!("wrote {}", catalog_path.display());

    info!("Built {} pages into {}", pages.len(), out_dir.display());

    Ok(BuildReport {
        out_dir: out_dir.to_path_buf(),
        pages,
    })
}

fn write_page(path: &Path, html: &str) -> Result<PathBuf> {
    fs::write(path, html).with_context(|| format!("failed to write {}", path.display()))?;
    debug!("wrote {} ({} bytes)", path.display(), html.len());
    Ok(path.to_path_buf())
}

/// One line of `sitegen topics`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicSummary {
    pub title: &'static str,
    pub slug: String,
    pub tips: usize,
    pub checklist: usize,
}

pub fn topic_summaries(catalog: &ContentCatalog) -> Vec<TopicSummary> {
    catalog
        .entries()
        .iter()
        .map(|entry| TopicSummary {
            title: entry.title,
            slug: entry.slug(),
            tips: entry.detail.tips.len(),
            checklist: entry.detail.checklist.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedline_pages::catalog::{AccentStyle, TopicDetail, TopicEntry, TopicIcon};
    use tempfile::TempDir;

    static CLASHING: &[TopicEntry] = &[
        TopicEntry {
            title: "Cap Tables",
            summary: "",
            icon: TopicIcon::ChartPie,
            accent: AccentStyle::Orange,
            detail: TopicDetail {
                tips: &["one"],
                checklist: &[],
            },
        },
        TopicEntry {
            title: "Cap Tables",
            summary: "",
            icon: TopicIcon::ChartPie,
            accent: AccentStyle::Orange,
            detail: TopicDetail {
                tips: &["two"],
                checklist: &[],
            },
        },
    ];

    #[test]
    fn writes_one_page_per_state() {
        let dir = TempDir::new().unwrap();
        let catalog = ContentCatalog::standard();
        let report = build_site(&catalog, &RenderOptions::default(), dir.path()).unwrap();

        assert_eq!(report.pages.len(), catalog.len() + 2);
        assert!(dir.path().join("index.html").is_file());
        assert!(dir.path().join("catalog.json").is_file());
        assert!(dir.path().join("cheatsheet/index.html").is_file());
        for entry in catalog.entries() {
            let page = dir.path().join(CHEAT_SHEET_DIR).join(format!("{}.html", entry.slug()));
            let html = fs::read_to_string(&page).unwrap();
            assert!(html.contains(r#"class="detail-overlay""#));
            assert!(html.contains(&format!(r#"data-topic="{}""#, entry.title)));
        }
    }

    #[test]
    fn index_page_has_no_overlay() {
        let dir = TempDir::new().unwrap();
        build_site(&ContentCatalog::standard(), &RenderOptions::default(), dir.path()).unwrap();
        let html = fs::read_to_string(dir.path().join("cheatsheet/index.html")).unwrap();
        assert!(!html.contains(r#"class="detail-overlay""#));
    }

    #[test]
    fn invalid_catalog_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("site");
        let err = build_site(&ContentCatalog::new(CLASHING), &RenderOptions::default(), &out)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("duplicate topic 'Cap Tables'"));
        assert!(!out.exists());
    }

    #[test]
    fn summaries_follow_catalog() {
        let summaries = topic_summaries(&ContentCatalog::standard());
        assert_eq!(summaries[0].slug, "pitching-perfect");
        assert_eq!(summaries[0].checklist, 5);
        assert_eq!(summaries[2].title, "KPI Mastery");
        assert_eq!(summaries[2].tips, 3);
    }
}
