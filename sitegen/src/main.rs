//! # sitegen
//!
//! Static site generator for the Seedline landing page and founder cheat sheet.
//!
//! ## Usage
//!
//! ```bash
//! # Full site into ./dist (or [output].dir from sitegen.toml)
//! sitegen build
//!
//! # One page to stdout
//! sitegen render cheatsheet --topic "Pitching Perfect"
//!
//! # Catalog overview
//! sitegen topics --json
//! ```

mod build;
mod cli;
mod config;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use seedline_pages::{ContentCatalog, Selection, render_cheat_sheet, render_landing};
use tracing::{debug, info};

use build::{build_site, topic_summaries};
use cli::{BuildArgs, Cli, Command, PageArgs, RenderArgs, View};
use config::SiteConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries rendered pages and JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[sitegen] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let catalog = ContentCatalog::standard();
    match cli.command {
        Command::Build(args) => run_build(&catalog, args),
        Command::Render(args) => run_render(&catalog, args),
        Command::Topics { json } => run_topics(&catalog, json),
    }
}

fn load_config(args: &PageArgs) -> Result<SiteConfig> {
    if let Some(path) = &args.config {
        if !path.exists() {
            bail!("config file {} does not exist", path.display());
        }
    }
    let config = SiteConfig::load(args.config.as_deref());
    debug!("config: {:?}", config);
    Ok(config)
}

fn run_build(catalog: &ContentCatalog, args: BuildArgs) -> Result<()> {
    let config = load_config(&args.page)?;
    let options = config.render_options(&args.page);
    let out_dir = args.out.unwrap_or_else(|| config.output.dir.clone());

    info!("Building {} site into {}", options.site_name, out_dir.display());
    let report = build_site(catalog, &options, &out_dir)?;
    for page in &report.pages {
        println!("{}", page.display());
    }
    Ok(())
}

fn run_render(catalog: &ContentCatalog, args: RenderArgs) -> Result<()> {
    let config = load_config(&args.page)?;
    let options = config.render_options(&args.page);

    let html = match args.view {
        View::Landing => {
            if args.topic.is_some() {
                bail!("--topic only applies to the cheatsheet view");
            }
            render_landing(&options)
        }
        View::Cheatsheet => {
            let selection = match args.topic.as_deref() {
                Some(key) => Selection::Visible(catalog.resolve(key)?),
                None => Selection::Hidden,
            };
            render_cheat_sheet(catalog, selection, &options)
        }
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", html).context("failed to write page to stdout")?;
    Ok(())
}

fn run_topics(catalog: &ContentCatalog, json: bool) -> Result<()> {
    let summaries = topic_summaries(catalog);
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &summaries)?;
        writeln!(stdout)?;
    } else {
        for topic in summaries {
            writeln!(
                stdout,
                "{} ({}) - {} tips, {} checklist items",
                topic.title, topic.slug, topic.tips, topic.checklist
            )?;
        }
    }
    Ok(())
}
