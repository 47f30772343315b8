//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing every configured page for search
//! engine indexing. Rendering is pure; the file write is the only effect.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!     <url>
//!         <loc>https://example.com/</loc>
//!         <lastmod>2025-01-01</lastmod>
//!         <changefreq>weekly</changefreq>
//!         <priority>1.0</priority>
//!     </url>
//! </urlset>
//! ```

use crate::{
    config::SitemapConfig,
    debug,
    generator::minify_xml,
    page::{
        ChangeFreq, PageEntry, Priority,
        notes::{append_unique, collect_notes},
    },
    status,
    utils::date::SitemapDate,
};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Collect pages, render, and write the sitemap.
///
/// Returns the path written.
pub fn build_sitemap(config: &SitemapConfig, today: SitemapDate) -> Result<PathBuf> {
    let pages = collect_pages(config)?;
    let xml = render(config, &pages, today);

    write_sitemap(&config.output, &xml)?;

    let name = config
        .output
        .file_name()
        .unwrap_or_default()
        .to_string_lossy();
    status!("✅"; "{} generated ({} urls)", name, pages.len());
    status!("📅"; "lastmod: {}", today);

    Ok(config.output.clone())
}

/// Configured pages followed by any discovered notes.
pub fn collect_pages(config: &SitemapConfig) -> Result<Vec<PageEntry>> {
    let mut pages = config.pages.clone();

    if config.notes.is_enabled() {
        let notes = collect_notes(&config.notes).context("Failed to scan notes directory")?;
        append_unique(&mut pages, notes);
    }

    Ok(pages)
}

/// Render the sitemap document for `pages` as of `today`.
pub fn render(config: &SitemapConfig, pages: &[PageEntry], today: SitemapDate) -> String {
    let xml = Sitemap::build(config.base_url(), pages, today).into_xml();
    if config.minify {
        minify_xml(&xml)
    } else {
        xml
    }
}

/// Write the document, replacing any existing file.
///
/// Parent directories are not created.
pub fn write_sitemap(path: &Path, xml: &str) -> Result<()> {
    fs::write(path, xml)
        .with_context(|| format!("Failed to write sitemap to {}", path.display()))?;
    debug!("sitemap"; "wrote {} bytes to {}", xml.len(), path.display());
    Ok(())
}

struct Sitemap {
    urls: Vec<UrlEntry>,
}

struct UrlEntry {
    loc: String,
    lastmod: SitemapDate,
    changefreq: ChangeFreq,
    priority: Priority,
}

impl Sitemap {
    fn build(base_url: &str, pages: &[PageEntry], today: SitemapDate) -> Self {
        let urls = pages
            .iter()
            .map(|page| UrlEntry {
                loc: format!("{}{}", base_url, page.path),
                lastmod: today,
                changefreq: page.changefreq,
                priority: page.priority.clone(),
            })
            .collect();

        Self { urls }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(128 + self.urls.len() * 192);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("    <url>\n        <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n        <lastmod>");
            xml.push_str(&entry.lastmod.to_string());
            xml.push_str("</lastmod>\n        <changefreq>");
            xml.push_str(entry.changefreq.as_str());
            xml.push_str("</changefreq>\n        <priority>");
            xml.push_str(&escape_xml(entry.priority.as_str()));
            xml.push_str("</priority>\n    </url>\n");
        }

        xml.push_str("</urlset>");
        xml
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
