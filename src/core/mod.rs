//! Core error types shared by every layer of the crate.
//!
//! The resolution core returns [`ResolveError`] for the conditions callers
//! branch on (most importantly the NOT_FOUND condition of single-artifact
//! lookup), and passes errors produced by an artifact selector through as
//! [`anyhow::Error`] unchanged. [`user_friendly_error`] turns any of these into
//! an [`ErrorContext`] for terminal display.

pub mod error;

pub use error::{ConfigError, ErrorContext, ResolveError, SelectionError, user_friendly_error};
