//! Discovery of note pages.
//!
//! When `[notes] dir` (or `--notes`) is set, every `.html` file below that
//! directory becomes an extra sitemap entry:
//!
//! ```text
//! notes/                      /notes/rust/ownership.html
//! ├── rust/                   /notes/todo.html
//! │   └── ownership.html
//! └── todo.html
//! ```
//!
//! Entries come back in sorted path order so repeated runs render the
//! same document.

use super::{ChangeFreq, PageEntry, Priority};
use crate::{config::NotesConfig, debug};
use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// Characters left as-is inside a path segment.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Scan the configured notes directory. Returns nothing when disabled.
pub fn collect_notes(notes: &NotesConfig) -> Result<Vec<PageEntry>> {
    let Some(dir) = notes.dir.as_deref() else {
        return Ok(Vec::new());
    };

    if !dir.is_dir() {
        bail!("notes directory '{}' does not exist", dir.display());
    }

    let walked = WalkDir::new(dir)
        .sort(true)
        .into_iter()
        .map(|entry| entry.map(|e| e.file_type().is_file().then(|| e.path())));
    let entries = html_entries(dir, walked, notes)?;

    debug!("notes"; "found {} page(s) in {}", entries.len(), dir.display());
    Ok(entries)
}

/// Turn walked files into entries, stopping at the first unreadable one.
///
/// `walked` yields `Some(path)` for files and `None` for anything else.
fn html_entries<E>(
    dir: &Path,
    walked: impl IntoIterator<Item = Result<Option<PathBuf>, E>>,
    notes: &NotesConfig,
) -> Result<Vec<PageEntry>>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let prefix = notes.url_prefix(dir);
    let mut entries = Vec::new();

    for file in walked {
        let file = file
            .with_context(|| format!("failed to read notes directory '{}'", dir.display()))?;
        let Some(path) = file.filter(|path| is_html(path)) else {
            continue;
        };
        let Ok(relative) = path.strip_prefix(dir) else {
            continue;
        };
        entries.push(note_entry(
            &prefix,
            relative,
            notes.priority.clone(),
            notes.changefreq,
        ));
    }

    Ok(entries)
}

/// Append `extra` to `pages`, skipping paths already present.
pub fn append_unique(pages: &mut Vec<PageEntry>, extra: Vec<PageEntry>) {
    let mut seen: FxHashSet<String> = pages.iter().map(|p| p.path.to_string()).collect();

    for entry in extra {
        if seen.insert(entry.path.to_string()) {
            pages.push(entry);
        } else {
            debug!("notes"; "skipping duplicate {}", entry.path);
        }
    }
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

fn note_entry(
    prefix: &str,
    relative: &Path,
    priority: Priority,
    changefreq: ChangeFreq,
) -> PageEntry {
    let mut url = String::new();
    let segments = prefix
        .split('/')
        .map(str::to_owned)
        .chain(
            relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned()),
        )
        .filter(|segment| !segment.is_empty());

    for segment in segments {
        url.push('/');
        url.extend(utf8_percent_encode(&segment, SEGMENT));
    }

    PageEntry::owned(url, priority, changefreq)
}
