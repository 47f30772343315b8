//! Page descriptors listed in the sitemap.
//!
//! - [`PageEntry`]: one page (path, crawl priority, update frequency)
//! - [`ChangeFreq`]: the `<changefreq>` vocabulary from sitemaps.org
//! - [`Priority`]: the `<priority>` text, rendered exactly as written
//! - [`notes`]: optional discovery of extra pages from a notes directory

pub mod notes;

use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Crawl priority, kept as the author wrote it (`"1.0"` stays `"1.0"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Priority(Cow<'static, str>);

impl Priority {
    pub const fn new(value: &'static str) -> Self {
        Self(Cow::Borrowed(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if the text is a plain decimal (`1`, `0.75`).
    ///
    /// Signs, exponents, bare dots and surrounding spaces are rejected: the
    /// text is emitted verbatim.
    pub fn value(&self) -> Option<f32> {
        let (int, frac) = match self.0.split_once('.') {
            Some((int, frac)) => (int, Some(frac)),
            None => (&*self.0, None),
        };
        let digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
        if !digits(int) || frac.is_some_and(|f| !digits(f)) {
            return None;
        }
        self.0.parse().ok()
    }

    /// Whether the value is a plain decimal in `[0.0, 1.0]`.
    pub fn is_valid(&self) -> bool {
        self.value().is_some_and(|v| (0.0..=1.0).contains(&v))
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self(Cow::Owned(value))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageEntry {
    /// Site-relative URL, starting with `/`.
    pub path: Cow<'static, str>,
    pub priority: Priority,
    pub changefreq: ChangeFreq,
}

impl PageEntry {
    pub const fn new(path: &'static str, priority: &'static str, changefreq: ChangeFreq) -> Self {
        Self {
            path: Cow::Borrowed(path),
            priority: Priority::new(priority),
            changefreq,
        }
    }

    /// Build an entry with an owned path (discovered at runtime).
    pub fn owned(path: String, priority: Priority, changefreq: ChangeFreq) -> Self {
        Self {
            path: Cow::Owned(path),
            priority,
            changefreq,
        }
    }
}
