//! Configuration file support for sitegen.
//!
//! Loads optional `sitegen.toml` from the working directory.
//!
//! ```toml
//! [site]
//! name = "Seedline"
//!
//! [output]
//! dir = "dist"
//!
//! [motion]
//! enabled = true
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use seedline_pages::{Motion, RenderOptions};
use tracing::warn;

use crate::cli::PageArgs;

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "sitegen.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site: SiteSection,
    pub output: OutputSection,
    pub motion: MotionSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Brand shown in titles, navigation and footer
    pub name: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: RenderOptions::default().site_name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Directory `build` writes into
    pub dir: PathBuf,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("dist"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionSection {
    /// Include the entrance-animation script
    pub enabled: bool,
}

impl Default for MotionSection {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl SiteConfig {
    /// Load from `path`, or from `./sitegen.toml` when no path is given.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(path: Option<&Path>) -> Self {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load_from_path(Path::new(CONFIG_FILE)),
        }
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Render options with command-line overrides applied on top.
    pub fn render_options(&self, args: &PageArgs) -> RenderOptions {
        let motion = if args.no_motion || !self.motion.enabled {
            Motion::Static
        } else {
            Motion::Animated
        };
        RenderOptions {
            site_name: args
                .site_name
                .clone()
                .unwrap_or_else(|| self.site.name.clone()),
            motion,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load_from_path(&dir.path().join("nope.toml"));
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.name, "Seedline");
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert!(config.motion.enabled);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[site]\nname = \"Runway\"\n");
        let config = SiteConfig::load_from_path(&path);
        assert_eq!(config.site.name, "Runway");
        assert_eq!(config.output.dir, PathBuf::from("dist"));
        assert!(config.motion.enabled);
    }

    #[test]
    fn invalid_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[site\nname = ");
        assert_eq!(SiteConfig::load_from_path(&path), SiteConfig::default());
    }

    #[test]
    fn flags_override_file() {
        let config = SiteConfig {
            site: SiteSection {
                name: "Runway".into(),
            },
            ..Default::default()
        };
        let args = PageArgs {
            site_name: Some("Harbor".into()),
            no_motion: true,
            ..Default::default()
        };
        let options = config.render_options(&args);
        assert_eq!(options.site_name, "Harbor");
        assert_eq!(options.motion, Motion::Static);
    }

    #[test]
    fn motion_disabled_in_file() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "[motion]\nenabled = false\n");
        let config = SiteConfig::load_from_path(&path);
        let options = config.render_options(&PageArgs::default());
        assert_eq!(options.motion, Motion::Static);
        assert_eq!(options.site_name, "Seedline");
    }
}
