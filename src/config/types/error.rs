//! Configuration error types.

use super::FieldPath;
use crate::logger::paint;
use owo_colors::Style;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "theme.nav[0].link")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}{}{}",
            paint("[", Style::new().dimmed()),
            paint(self.field.as_str(), Style::new().cyan()),
            paint("]", Style::new().dimmed())
        )?;
        write!(f, "{} {}", paint("→", Style::new().red()), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", paint("hint:", Style::new().yellow()), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Collected warnings (suspicious but usable values).
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push(ConfigDiagnostic::new(field, message));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }
        crate::log!("warning"; "suspicious config values:");
        for warning in &self.warnings {
            eprintln!("- {}: {}", warning.field.as_str(), warning.message);
        }
    }

    /// Move all errors into the warning list.
    ///
    /// Used by `check --warn-only`, where problems are reported but not fatal.
    pub fn downgrade_errors(&mut self) {
        self.warnings.append(&mut self.errors);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}\n",
            paint("config validation failed:", Style::new().red().bold())
        )?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                paint("found", Style::new().dimmed()),
                paint(self.errors.len(), Style::new().red().bold()),
                paint("errors", Style::new().dimmed())
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("sitecfg.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("sitecfg.toml"));
    }

    #[test]
    fn test_diagnostics_display_lists_every_error() {
        owo_colors::set_override(false);
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.title"), "title is empty");
        diag.error_with_hint(
            FieldPath::new("theme.nav").index(0).field("link"),
            "link is empty",
            "use a route like \"/about\"",
        );

        let display = diag.to_string();
        assert!(display.contains("[site.title]"));
        assert!(display.contains("[theme.nav[0].link]"));
        assert!(display.contains("hint: use a route"));
        assert!(display.contains("found 2 errors"));
    }

    #[test]
    fn test_downgrade_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.title"), "title is empty");
        diag.warn(FieldPath::new("theme.social_links"), "duplicate icon");
        assert!(!diag.is_empty());

        diag.downgrade_errors();
        assert!(diag.is_empty());
        assert_eq!(diag.warnings().len(), 2);
        assert!(diag.into_result().is_ok());
    }
}
