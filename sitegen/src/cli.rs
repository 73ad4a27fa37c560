//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "sitegen")]
#[command(about = "Render the Seedline landing page and founder cheat sheet to static HTML")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write every page and catalog.json to the output directory
    Build(BuildArgs),
    /// Print a single page to stdout
    Render(RenderArgs),
    /// List cheat sheet topics
    Topics {
        /// Emit JSON instead of one line per topic
        #[arg(long)]
        json: bool,
    },
}

/// Flags shared by commands that render pages.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Config file (default: ./sitegen.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Brand name, overrides [site].name
    #[arg(long)]
    pub site_name: Option<String>,

    /// Leave out the entrance-animation script
    #[arg(long)]
    pub no_motion: bool,
}

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Output directory, overrides [output].dir
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Which view to render
    #[arg(value_enum)]
    pub view: View,

    /// Topic to open in the detail overlay (title or slug; cheatsheet only)
    #[arg(long)]
    pub topic: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Landing,
    Cheatsheet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_render_with_topic() {
        let cli = Cli::parse_from([
            "sitegen",
            "render",
            "cheatsheet",
            "--topic",
            "kpi-mastery",
            "--no-motion",
        ]);
        let Command::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.view, View::Cheatsheet);
        assert_eq!(args.topic.as_deref(), Some("kpi-mastery"));
        assert!(args.page.no_motion);
    }

    #[test]
    fn log_level_is_global() {
        let cli = Cli::parse_from(["sitegen", "topics", "--log-level", "debug"]);
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn verifies_command_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
