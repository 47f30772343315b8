//! Output generators.
//!
//! - **Sitemap**: search engine indexing (`sitemap.xml`)

pub mod sitemap;

/// Minify XML by trimming every line and joining them.
///
/// Only safe for documents whose text content never spans lines, which
/// holds for generated sitemaps.
pub fn minify_xml(xml: &str) -> String {
    xml.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minify_xml_basic() {
        let xml = r#"<?xml version="1.0"?>
<root>
    <item>Hello</item>
</root>"#;

        assert_eq!(
            minify_xml(xml),
            r#"<?xml version="1.0"?><root><item>Hello</item></root>"#
        );
    }

    #[test]
    fn test_minify_xml_keeps_inner_spaces() {
        assert_eq!(minify_xml("  <tag>  content  </tag>  "), "<tag>  content  </tag>");
    }

    #[test]
    fn test_minify_xml_removes_empty_lines() {
        assert_eq!(minify_xml("<root>\n\n  <item/>\n\n</root>"), "<root><item/></root>");
    }
}
