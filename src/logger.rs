//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro that only prints when `--verbose` is set
//! - `status!` macro for user-facing result lines led by a symbol
//!
//! # Example
//!
//! ```ignore
//! log!("sitemap"; "wrote {} urls", count);
//! debug!("notes"; "skipping {}", path);
//! status!("✅"; "sitemap.xml generated");
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::{
    io::{IsTerminal, Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Print a result line that starts with `symbol` instead of a module tag
///
/// # Usage
/// ```ignore
/// status!("📅"; "lastmod: {}", date);
/// ```
#[macro_export]
macro_rules! status {
    ($symbol:expr; $($arg:tt)*) => {{
        $crate::logger::status($symbol, &format!($($arg)*))
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    emit(&format_line(&colorize_prefix(module), message));
}

/// Print `symbol message`
#[inline]
pub fn status(symbol: &str, message: &str) {
    emit(&format_line(symbol, message));
}

fn emit(line: &str) {
    let mut stdout = stdout().lock();
    let clear = stdout.is_terminal();
    write_line(&mut stdout, line, clear);
}

/// Write one line, first erasing the rest of the terminal row when `clear`.
fn write_line(out: &mut impl Write, line: &str, clear: bool) {
    if clear {
        execute!(out, Clear(ClearType::UntilNewLine)).ok();
    }
    writeln!(out, "{line}").ok();
    out.flush().ok();
}

#[inline]
fn format_line(prefix: &str, message: &str) -> String {
    format!("{prefix} {message}")
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "sitemap" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "warning" | "hint" => prefix.bright_magenta().bold().to_string(),
        _ => prefix.bright_yellow().bold().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_toggle() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }

    #[test]
    fn test_prefix_contains_module_name() {
        assert!(colorize_prefix("sitemap").contains("[sitemap]"));
        assert!(colorize_prefix("Error").contains("[Error]"));
        assert_ne!(colorize_prefix("error"), colorize_prefix("sitemap"));
    }

    #[test]
    fn test_format_line() {
        assert_eq!(format_line("[notes]", "found 3 pages"), "[notes] found 3 pages");
        assert_eq!(format_line("📅", "lastmod: 2024-01-15"), "📅 lastmod: 2024-01-15");
    }

    #[test]
    fn test_piped_output_has_no_escape_codes() {
        let mut out = Vec::new();
        write_line(&mut out, "✅ sitemap.xml generated (4 urls)", false);
        assert_eq!(out, "✅ sitemap.xml generated (4 urls)\n".as_bytes());
    }

    #[cfg(unix)]
    #[test]
    fn test_terminal_output_clears_row() {
        let mut out = Vec::new();
        write_line(&mut out, "done", true);
        assert_eq!(out, b"\x1b[Kdone\n");
    }
}
