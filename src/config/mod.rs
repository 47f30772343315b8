//! Sitemap configuration.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── defaults       # Built-in DOMAIN and STATIC_PAGES
//! ├── notes          # [notes] section
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # SitemapConfig (this file)
//! ```
//!
//! Without `--config` the built-in values are used as-is. A TOML file, when
//! given, overrides them:
//!
//! ```toml
//! domain = "https://example.com"
//! output = "public/sitemap.xml"
//! minify = false
//!
//! [[pages]]
//! path = "/"
//! priority = "1.0"
//! changefreq = "weekly"
//!
//! [notes]
//! dir = "notes"
//! ```
//!
//! CLI flags win over both.

pub mod defaults;
mod notes;
pub mod types;

pub use notes::NotesConfig;
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{cli::Cli, log, page::PageEntry, utils::date::SitemapDate};
use anyhow::Result;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Everything the generator needs for one run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Site origin, e.g. `https://example.com`.
    pub domain: String,

    /// Where to write the sitemap.
    pub output: PathBuf,

    /// Strip indentation and line breaks.
    pub minify: bool,

    /// Pages in output order.
    pub pages: Vec<PageEntry>,

    /// Optional notes directory scan.
    pub notes: NotesConfig,

    /// Pinned `<lastmod>` (internal use only, set from `--date`)
    #[serde(skip)]
    pub date: Option<SitemapDate>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            domain: defaults::DOMAIN.to_string(),
            output: PathBuf::from(defaults::OUTPUT),
            minify: false,
            pages: defaults::STATIC_PAGES.to_vec(),
            notes: NotesConfig::default(),
            date: None,
        }
    }
}

/// Field paths used in diagnostics.
pub struct SitemapConfigFields {
    pub domain: FieldPath,
    pub output: FieldPath,
    pub pages_path: FieldPath,
    pub pages_priority: FieldPath,
    pub notes_dir: FieldPath,
    pub notes_priority: FieldPath,
}

impl SitemapConfig {
    pub const FIELDS: SitemapConfigFields = SitemapConfigFields {
        domain: FieldPath::new("domain"),
        output: FieldPath::new("output"),
        pages_path: FieldPath::new("pages.path"),
        pages_priority: FieldPath::new("pages.priority"),
        notes_dir: FieldPath::new("notes.dir"),
        notes_priority: FieldPath::new("notes.priority"),
    };

    /// Build the configuration for this invocation.
    ///
    /// Only input the user supplied (config file, CLI overrides) is
    /// validated; the built-in table is trusted.
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        config.apply_cli(cli);

        if cli.has_overrides() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Relative paths inside the file resolve against the file's directory.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        let root = path.parent().unwrap_or_else(|| Path::new(""));
        config.normalize_paths(root);
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Parse)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    fn normalize_paths(&mut self, root: &Path) {
        if self.output.is_relative() {
            self.output = root.join(&self.output);
        }
        if let Some(dir) = &self.notes.dir
            && dir.is_relative()
        {
            self.notes.dir = Some(root.join(dir));
        }
    }

    /// Apply CLI overrides on top of the loaded values.
    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(output) = &cli.output {
            self.output = output.clone();
        }
        if let Some(domain) = &cli.domain {
            self.domain = domain.clone();
        }
        if let Some(dir) = &cli.notes {
            self.notes.dir = Some(dir.clone());
        }
        if let Some(minify) = cli.minify {
            self.minify = minify;
        }
        if cli.date.is_some() {
            self.date = cli.date;
        }
    }

    /// Domain without trailing slash, ready to prefix page paths.
    pub fn base_url(&self) -> &str {
        self.domain.trim_end_matches('/')
    }

    /// The `<lastmod>` date for this run.
    pub fn lastmod(&self) -> SitemapDate {
        self.date.unwrap_or_else(SitemapDate::today)
    }

    /// Validate the configuration, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.validate_domain(&mut diag);
        // a broken domain would make every <loc> fail too
        let check_locs = diag.errors().is_empty();
        self.validate_pages(&mut diag, check_locs);

        if self.output.as_os_str().is_empty() {
            diag.error(Self::FIELDS.output, "output path is empty");
        }

        if !self.notes.priority.is_valid() {
            diag.error_with_hint(
                Self::FIELDS.notes_priority,
                format!("priority '{}' is not a decimal in 0.0..=1.0", self.notes.priority),
                "use a value like \"0.6\"",
            );
        }
        if let Some(dir) = &self.notes.dir
            && !dir.is_dir()
        {
            diag.error(
                Self::FIELDS.notes_dir,
                format!("'{}' is not a directory", dir.display()),
            );
        }

        diag.into_result()
            .map_err(|diag| ConfigError::Invalid(diag).into())
    }

    fn validate_domain(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.domain) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELDS.domain,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELDS.domain,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
                if parsed.query().is_some() || parsed.fragment().is_some() {
                    diag.error_with_hint(
                        Self::FIELDS.domain,
                        "URL must not contain a query or fragment",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.domain,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }

    fn validate_pages(&self, diag: &mut ConfigDiagnostics, check_locs: bool) {
        let mut seen = FxHashSet::default();

        for (i, page) in self.pages.iter().enumerate() {
            if !page.path.starts_with('/') {
                diag.error_with_hint(
                    Self::FIELDS.pages_path,
                    format!("pages[{i}]: path '{}' must start with '/'", page.path),
                    format!("use \"/{}\"", page.path),
                );
            } else if check_locs {
                let loc = format!("{}{}", self.base_url(), page.path);
                match url::Url::parse(&loc) {
                    // the parser silently encodes spaces and rewrites `\`,
                    // but <loc> is emitted as written
                    Ok(parsed) if parsed.as_str() != loc => diag.error_with_hint(
                        Self::FIELDS.pages_path,
                        format!("pages[{i}]: '{loc}' is not a well-formed URL"),
                        format!("write it as \"{}\"", parsed.as_str()),
                    ),
                    Ok(_) => {}
                    Err(e) => diag.error(
                        Self::FIELDS.pages_path,
                        format!("pages[{i}]: '{loc}' is not a valid URL: {e}"),
                    ),
                }
            }

            if !seen.insert(&*page.path) {
                diag.error(
                    Self::FIELDS.pages_path,
                    format!("pages[{i}]: path '{}' is listed more than once", page.path),
                );
            }

            if !page.priority.is_valid() {
                diag.error_with_hint(
                    Self::FIELDS.pages_priority,
                    format!(
                        "pages[{i}]: priority '{}' is not a decimal in 0.0..=1.0",
                        page.priority
                    ),
                    "use a value like \"0.8\"",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::ChangeFreq;
    use tempfile::TempDir;

    fn parse(content: &str) -> SitemapConfig {
        let (config, ignored) = SitemapConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty(), "unexpected unknown fields: {ignored:?}");
        config
    }

    fn diagnostics(config: &SitemapConfig) -> Vec<String> {
        let err = config.validate().unwrap_err();
        match err.downcast::<ConfigError>().unwrap() {
            ConfigError::Invalid(diag) => {
                diag.errors().iter().map(|d| d.message.clone()).collect()
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_default_uses_builtin_table() {
        let config = SitemapConfig::default();
        assert_eq!(config.domain, defaults::DOMAIN);
        assert_eq!(config.output, PathBuf::from("sitemap.xml"));
        assert_eq!(config.pages.len(), defaults::STATIC_PAGES.len());
        assert!(!config.minify);
        assert!(!config.notes.is_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_without_arguments() {
        let config = SitemapConfig::load(&Cli::default()).unwrap();
        assert_eq!(config.domain, defaults::DOMAIN);
        assert_eq!(config.pages, defaults::STATIC_PAGES.to_vec());
        assert!(config.date.is_none());
    }

    #[test]
    fn test_parse_replaces_pages() {
        let config = parse(
            r#"
            domain = "https://example.com"
            minify = true

            [[pages]]
            path = "/"
            priority = "1.0"
            changefreq = "weekly"

            [notes]
            priority = "0.4"
            changefreq = "yearly"
            "#,
        );

        assert_eq!(config.domain, "https://example.com");
        assert!(config.minify);
        assert_eq!(config.output, PathBuf::from("sitemap.xml"));
        assert_eq!(config.pages, vec![PageEntry::new("/", "1.0", ChangeFreq::Weekly)]);
        assert_eq!(config.notes.priority.as_str(), "0.4");
        assert_eq!(config.notes.changefreq, ChangeFreq::Yearly);
    }

    #[test]
    fn test_parse_partial_keeps_defaults() {
        let config = parse(r#"output = "out/sitemap.xml""#);
        assert_eq!(config.domain, defaults::DOMAIN);
        assert_eq!(config.pages.len(), defaults::STATIC_PAGES.len());
        assert_eq!(config.output, PathBuf::from("out/sitemap.xml"));
    }

    #[test]
    fn test_parse_with_ignored_reports_unknown() {
        let (config, ignored) = SitemapConfig::parse_with_ignored(
            r#"
            domain = "https://example.com"
            domian = "typo"
            "#,
        )
        .unwrap();
        assert_eq!(config.domain, "https://example.com");
        assert_eq!(ignored, vec!["domian".to_string()]);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(SitemapConfig::parse_with_ignored("domain = ").is_err());
    }

    #[test]
    fn test_load_from_file_resolves_relative_paths() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("notes")).unwrap();
        let path = tmp.path().join("sitemap.toml");
        std::fs::write(
            &path,
            r#"
            domain = "https://example.com"
            output = "public/sitemap.xml"

            [notes]
            dir = "notes"
            "#,
        )
        .unwrap();

        let cli = Cli {
            config: Some(path),
            ..Cli::default()
        };
        let config = SitemapConfig::load(&cli).unwrap();

        assert_eq!(config.output, tmp.path().join("public/sitemap.xml"));
        assert_eq!(config.notes.dir, Some(tmp.path().join("notes")));
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/sitemap.toml")),
            ..Cli::default()
        };
        let err = SitemapConfig::load(&cli).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Read(..))
        ));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli {
            output: Some(PathBuf::from("out.xml")),
            domain: Some("https://example.org/".into()),
            minify: Some(true),
            date: SitemapDate::parse("2024-01-15"),
            ..Cli::default()
        };
        let config = SitemapConfig::load(&cli).unwrap();

        assert_eq!(config.output, PathBuf::from("out.xml"));
        assert_eq!(config.base_url(), "https://example.org");
        assert!(config.minify);
        assert_eq!(config.lastmod().to_string(), "2024-01-15");
    }

    #[test]
    fn test_validate_rejects_bad_domain() {
        let mut config = SitemapConfig::default();

        config.domain = "ftp://example.com".into();
        assert!(diagnostics(&config)[0].contains("scheme 'ftp'"));

        config.domain = "not a url".into();
        assert_eq!(diagnostics(&config).len(), 1);
        assert!(diagnostics(&config)[0].contains("invalid URL"));

        config.domain = "https://example.com/?q=1".into();
        assert!(diagnostics(&config)[0].contains("query or fragment"));
    }

    #[test]
    fn test_validate_allows_path_prefix() {
        let config = SitemapConfig {
            domain: "https://user.github.io/project".into(),
            ..SitemapConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_all_page_problems() {
        let config = SitemapConfig {
            pages: vec![
                PageEntry::new("/", "1.0", ChangeFreq::Weekly),
                PageEntry::new("about.html", "0.5", ChangeFreq::Monthly),
                PageEntry::new("/", "2.0", ChangeFreq::Daily),
            ],
            ..SitemapConfig::default()
        };

        let messages = diagnostics(&config);
        assert_eq!(messages.len(), 3);
        assert!(messages[0].contains("must start with '/'"));
        assert!(messages[1].contains("more than once"));
        assert!(messages[2].contains("priority '2.0'"));
    }

    #[test]
    fn test_validate_rejects_locs_the_parser_would_rewrite() {
        let config = SitemapConfig {
            domain: "https://example.com".into(),
            pages: vec![
                PageEntry::new("/a b.html", "1e0", ChangeFreq::Weekly),
                PageEntry::new("/c\\d.html", "+.5", ChangeFreq::Weekly),
                PageEntry::new("/a%20b.html", "0.5", ChangeFreq::Weekly),
            ],
            ..SitemapConfig::default()
        };

        let messages = diagnostics(&config);
        assert_eq!(messages.len(), 4, "{messages:?}");
        assert!(messages[0].contains("'https://example.com/a b.html' is not a well-formed URL"));
        assert!(messages[1].contains("priority '1e0'"));
        assert!(messages[2].contains("is not a well-formed URL"));
        assert!(messages[3].contains("priority '+.5'"));
    }

    #[test]
    fn test_well_formed_hint_shows_encoded_form() {
        let config = SitemapConfig {
            domain: "https://example.com".into(),
            pages: vec![PageEntry::new("/a b.html", "0.5", ChangeFreq::Weekly)],
            ..SitemapConfig::default()
        };

        let err = config.validate().unwrap_err();
        let Some(ConfigError::Invalid(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics");
        };
        assert_eq!(
            diag.errors()[0].hint.as_deref(),
            Some("write it as \"https://example.com/a%20b.html\"")
        );
    }

    #[test]
    fn test_validate_notes() {
        let config = SitemapConfig {
            notes: NotesConfig {
                dir: Some(PathBuf::from("/nonexistent/notes")),
                priority: "high".to_string().into(),
                ..NotesConfig::default()
            },
            ..SitemapConfig::default()
        };

        let messages = diagnostics(&config);
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("priority 'high'"));
        assert!(messages[1].contains("not a directory"));
    }
}
