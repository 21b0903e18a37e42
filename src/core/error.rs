//! Error handling for variant artifact resolution
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** for the conditions callers branch on
//! 2. **User-friendly messages** with suggestions for CLI users
//!
//! # Architecture
//!
//! - [`ResolveError`] - failures raised by the resolution core itself
//! - [`SelectionError`] - failures raised by the bundled artifact selector
//! - [`ConfigError`] - settings and component descriptor loading failures
//! - [`ErrorContext`] - wrapper adding details and suggestions for display
//!
//! Errors raised by an artifact selector are passed through the core as
//! [`anyhow::Error`] without being wrapped, so callers can downcast them to
//! whatever type the selector produced.
//!
//! # Examples
//!
//! ```rust,no_run
//! use variant_resolve::core::{ResolveError, user_friendly_error};
//!
//! let error = ResolveError::ArtifactNotFound {
//!     variant: "runtimeElements".to_string(),
//!     artifact: "lib-docs.zip".to_string(),
//! };
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display(); // Shows colored error with a suggestion
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the resolution core.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// No artifact with the requested name exists in the prepared configuration.
    ///
    /// This is the NOT_FOUND condition of single-artifact lookup; an absent
    /// artifact is never reported as an empty value.
    #[error("Artifact '{artifact}' not found in variant '{variant}'")]
    ArtifactNotFound {
        /// Variant that was searched
        variant: String,
        /// Display form of the requested artifact name
        artifact: String,
    },

    /// The variant does not belong to the component it was requested from.
    #[error("Variant '{variant}' is not declared by component '{component}'")]
    UnknownVariant {
        /// Component the request was made against
        component: String,
        /// Identity of the requested variant
        variant: String,
    },

    /// Preparing a variant for artifact resolution failed.
    ///
    /// Nothing is cached for a failed preparation; the next request retries.
    #[error("Failed to prepare variant '{variant}' for artifact resolution")]
    PreparationFailed {
        /// Identity of the variant being prepared
        variant: String,
        /// The underlying failure
        #[source]
        source: anyhow::Error,
    },
}

impl ResolveError {
    /// Whether this is the NOT_FOUND condition of single-artifact lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ArtifactNotFound { .. })
    }
}

/// Failures raised by [`crate::selector::AttributeMatchingSelector`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No candidate variant is compatible with the requested attribute overrides.
    #[error("No variant of '{component}' matches the requested attributes {overrides}")]
    NoMatchingVariant {
        /// Component whose variants were searched
        component: String,
        /// Display form of the requested overrides
        overrides: String,
    },
}

/// Failures loading settings files and component descriptors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read {}", path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for the expected structure.
    #[error("Invalid syntax in {}", path.display())]
    Parse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying TOML error
        #[source]
        source: toml::de::Error,
    },

    /// The file parsed but its content is inconsistent.
    #[error("Invalid configuration: {reason}")]
    Invalid {
        /// What is wrong with the content
        reason: String,
    },
}

/// An error together with optional details and a suggestion for the user.
#[derive(Debug)]
pub struct ErrorContext {
    /// The full error message, including its cause chain
    pub message: String,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no details or suggestion.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: error in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.message);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a suggestion where one is known.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let mut message = error.to_string();
    for cause in error.chain().skip(1) {
        message.push_str(&format!("\n  caused by: {cause}"));
    }
    let context = ErrorContext::new(message);

    if let Some(resolve_error) = error.downcast_ref::<ResolveError>() {
        return match resolve_error {
            ResolveError::ArtifactNotFound { .. } => context.with_suggestion(
                "Run the 'artifacts' command to list the artifacts of this variant",
            ),
            ResolveError::UnknownVariant { .. } => context.with_suggestion(
                "Check the variant name against the configurations in the descriptor",
            ),
            ResolveError::PreparationFailed { .. } => context
                .with_details("Preparation failures are not cached; the next request retries"),
        };
    }

    if error.downcast_ref::<SelectionError>().is_some() {
        return context.with_suggestion(
            "Relax the --attribute overrides or enable selection.lenient_overrides",
        );
    }

    if let Some(config_error) = error.downcast_ref::<ConfigError>() {
        return match config_error {
            ConfigError::Io { .. } => {
                context.with_suggestion("Check that the file exists and is readable")
            }
            ConfigError::Parse { .. } => context
                .with_suggestion("Check the TOML syntax. Verify quotes, brackets, and table names"),
            ConfigError::Invalid { .. } => context,
        };
    }

    context
}
