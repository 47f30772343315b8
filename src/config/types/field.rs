//! Type-safe config field path.

/// A dotted path naming a config field, e.g. `notes.priority`.
///
/// Diagnostics carry one so the user knows which key to fix.
///
/// ```ignore
/// diag.error(SitemapConfig::FIELDS.domain, "invalid URL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
