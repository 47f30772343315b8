//! `[notes]` configuration.

use crate::page::{ChangeFreq, Priority};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional scan of a directory of `.html` notes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NotesConfig {
    /// Directory to scan. Scanning is off when unset.
    pub dir: Option<PathBuf>,
    /// URL path the notes live under. Defaults to the directory name.
    pub url_prefix: Option<String>,
    pub priority: Priority,
    pub changefreq: ChangeFreq,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            dir: None,
            url_prefix: None,
            priority: Priority::new("0.6"),
            changefreq: ChangeFreq::Monthly,
        }
    }
}

impl NotesConfig {
    pub const fn is_enabled(&self) -> bool {
        self.dir.is_some()
    }

    /// Resolve the URL prefix, without surrounding slashes.
    pub fn url_prefix(&self, dir: &Path) -> String {
        match &self.url_prefix {
            Some(prefix) => prefix.trim_matches('/').to_string(),
            None => dir
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default(),
        }
    }
}
