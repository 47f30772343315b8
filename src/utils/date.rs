//! Calendar date used for `<lastmod>`.
//!
//! The sitemap stamps every URL with the same day, taken from the local
//! clock at invocation time (or pinned with `--date`).
//!
//! # Examples
//!
//! ```ignore
//! let today = SitemapDate::today();
//! let pinned = SitemapDate::parse("2024-01-15").unwrap();
//! assert_eq!(pinned.to_string(), "2024-01-15");
//! ```

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::fmt;
use std::str::FromStr;

const FORMAT: &str = "%Y-%m-%d";

/// A calendar day rendered as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SitemapDate(NaiveDate);

impl SitemapDate {
    /// Local calendar date at the moment of the call.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parse strictly from "YYYY-MM-DD".
    pub fn parse(s: &str) -> Option<Self> {
        // chrono accepts unpadded fields, so enforce the fixed width first
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }
        NaiveDate::parse_from_str(s, FORMAT).ok().map(Self)
    }
}

impl FromStr for SitemapDate {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s).with_context(|| format!("invalid date '{s}', expected YYYY-MM-DD"))
    }
}

impl fmt::Display for SitemapDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}
