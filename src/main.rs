//! sitemapgen - writes sitemap.xml for a small static site.

mod cli;
mod config;
mod generator;
mod logger;
mod page;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use config::SitemapConfig;
use generator::sitemap::build_sitemap;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SitemapConfig::load(&cli)?;
    debug!("config"; "domain {}, {} page(s), output {}",
        config.base_url(), config.pages.len(), config.output.display());

    build_sitemap(&config, config.lastmod())?;
    Ok(())
}
