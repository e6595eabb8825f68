//! Structured error handling for the kickoff CLI.
//!
//! Provides user-friendly messages, actionable suggestions, proper
//! error chaining, and exit-code mapping. The single place errors
//! become user output is `handle_error` in `main.rs`.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use kickoff_core::error::ScaffoldError;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// All errors the CLI can surface.
#[derive(Debug, Error)]
pub enum CliError {
    /// Project name validation failed.
    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// A configuration or preferences file could not be read, parsed,
    /// or written.
    #[error("configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A fatal error propagated from the scaffold core.
    ///
    /// Wrapped here so the CLI can attach suggestions drawn from the
    /// core error without touching core internals.
    #[error("scaffolding failed: {0}")]
    Scaffold(#[from] ScaffoldError),

    /// An I/O operation failed outside the scaffold core.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Operation cancelled by user.
    #[error("operation cancelled")]
    Cancelled,
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { reason, .. } => vec![
                format!("Project names must be plain folder names: {reason}"),
                "Example: kickoff new my-site".into(),
            ],
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "Check the file printed by 'kickoff config path'".into(),
                "Run 'kickoff init --force' to restore a default config".into(),
            ],
            Self::Scaffold(err) => err.suggestions(),
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions and available disk space".into(),
            ],
            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],
        }
    }

    /// Error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::Cancelled => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Scaffold(err) => match err {
                ScaffoldError::ParentNotDirectory { .. }
                | ScaffoldError::DirectoryCreateFailed { .. } => ErrorCategory::UserError,
                ScaffoldError::TemplateListFailed { .. } => ErrorCategory::NotFound,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut out = String::new();

        out.push_str(&format!(
            "\n{} {}\n",
            "\u{2717}".red().bold(), // ✗
            "Error:".red().bold()
        ));
        out.push_str(&format!("  {}\n", self.to_string().red()));

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                out.push_str(&format!("  {} {}\n", "\u{2192}".dimmed(), err.to_string().dimmed()));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                out.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose {
            out.push_str(&format!(
                "\n{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        out
    }

    /// Plain-text version of [`Self::format_colored`] without ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error at the severity matching its category.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("user error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("internal error: {}", self),
        }
        if let Some(source) = self.source() {
            tracing::debug!("caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, bad paths, cancellation).
    UserError,
    /// Resource not found (template directory).
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn scaffold_err(code: io::ErrorKind) -> CliError {
        CliError::Scaffold(ScaffoldError::ParentNotDirectory {
            path: "/nope".into(),
            code,
        })
    }

    #[test]
    fn parent_not_directory_is_user_error() {
        assert_eq!(scaffold_err(io::ErrorKind::NotFound).exit_code(), 2);
    }

    #[test]
    fn template_list_failure_is_not_found() {
        let err = CliError::Scaffold(ScaffoldError::TemplateListFailed {
            path: "/templates".into(),
            code: io::ErrorKind::NotFound,
        });
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn config_error_exit_code() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn io_error_is_internal() {
        let err = CliError::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn format_plain_contains_error_and_suggestions() {
        let err = scaffold_err(io::ErrorKind::NotFound);
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("/nope"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = CliError::Cancelled.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn scaffold_suggestions_pass_through() {
        let err = CliError::Scaffold(ScaffoldError::TemplateListFailed {
            path: "/templates".into(),
            code: io::ErrorKind::NotFound,
        });
        assert!(err.suggestions().iter().any(|s| s.contains("kickoff init")));
    }
}
