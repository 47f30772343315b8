//! Command-line interface definitions.

use crate::utils::date::SitemapDate;
use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Generate sitemap.xml for a static site.
///
/// With no arguments, writes `sitemap.xml` for the built-in page list into
/// the current directory, stamped with today's date.
#[derive(Parser, Debug, Clone, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Load domain, pages and notes settings from a TOML file
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Output file path (default: sitemap.xml)
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Site origin prefixed to every page path (e.g. https://example.com)
    #[arg(short = 'D', long, value_hint = clap::ValueHint::Url)]
    pub domain: Option<String>,

    /// Use this date (YYYY-MM-DD) for <lastmod> instead of today
    #[arg(short, long)]
    pub date: Option<SitemapDate>,

    /// Also list every .html file found under this directory
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub notes: Option<PathBuf>,

    /// Strip indentation and line breaks from the output
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Whether any option supplies user input that needs validating.
    pub const fn has_overrides(&self) -> bool {
        self.config.is_some() || self.domain.is_some() || self.notes.is_some()
    }
}
