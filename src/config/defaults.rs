//! Built-in site description used when no config file is given.

use crate::page::{ChangeFreq, PageEntry};

/// Site origin, without a trailing slash.
pub const DOMAIN: &str = "https://thunder.github.io";

/// Output file, relative to the working directory.
pub const OUTPUT: &str = "sitemap.xml";

/// Pages in output order.
pub const STATIC_PAGES: &[PageEntry] = &[
    PageEntry::new("/", "1.0", ChangeFreq::Weekly),
    PageEntry::new("/notes.html", "0.9", ChangeFreq::Daily),
    PageEntry::new("/write.html", "0.8", ChangeFreq::Weekly),
    PageEntry::new("/profile.html", "0.7", ChangeFreq::Monthly),
];
