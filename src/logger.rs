//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, shown only with `--verbose`
//!
//! Everything goes to stderr: stdout is reserved for exported config.
//!
//! # Example
//!
//! ```ignore
//! log!("export"; "wrote {}", path.display());
//! debug!("config"; "loading {}", path.display());
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream, Style};
use std::{
    fmt,
    io::{self, IsTerminal, Write, stderr},
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

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stderr = stderr().lock();
    let terminal = stderr.is_terminal();
    write_line(&mut stderr, terminal, &prefix, message).ok();
}

/// Write one log line; the line clear is only emitted on a terminal.
fn write_line(
    out: &mut impl Write,
    terminal: bool,
    prefix: &str,
    message: &str,
) -> io::Result<()> {
    if terminal {
        execute!(out, Clear(ClearType::UntilNewLine))?;
    }
    writeln!(out, "{prefix} {message}")?;
    out.flush()
}

/// Render `value` in `style` if stderr takes colors.
///
/// Honours `--color` through `owo_colors::set_override`; with `auto` the
/// decision follows terminal detection on stderr.
pub fn paint<T: fmt::Display>(value: T, style: Style) -> String {
    value
        .if_supports_color(Stream::Stderr, |v| v.style(style))
        .to_string()
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let style = match module_lower {
        "error" => Style::new().bright_red(),
        "warning" => Style::new().yellow(),
        "check" | "export" => Style::new().bright_green(),
        "init" => Style::new().bright_blue(),
        _ => Style::new().bright_yellow(),
    };
    paint(format!("[{module}]"), style.bold())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_without_color() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("export", "export"), "[export]");
        assert_eq!(colorize_prefix("Error", "error"), "[Error]");
    }

    #[test]
    fn test_paint_without_color() {
        owo_colors::set_override(false);
        assert_eq!(paint("routes", Style::new().red().bold()), "routes");
        assert_eq!(paint(3, Style::new().dimmed()), "3");
    }

    #[test]
    fn test_line_clear_only_on_terminal() {
        let mut piped = Vec::new();
        write_line(&mut piped, false, "[export]", "wrote config.json").unwrap();
        assert_eq!(piped, b"[export] wrote config.json\n");

        let mut tty = Vec::new();
        write_line(&mut tty, true, "[export]", "wrote config.json").unwrap();
        assert!(tty.starts_with(b"\x1b[K"));
        assert!(tty.ends_with(b"[export] wrote config.json\n"));
    }

    #[test]
    fn test_verbose_flag() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}
