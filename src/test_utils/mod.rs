//! Test utilities for variant resolution
//!
//! This module provides helpers shared by unit and integration tests:
//! - [`ComponentBuilder`] for in-memory components with counted, optionally
//!   failing preparation
//! - Descriptor and settings fixtures written to temporary directories
//! - One-time tracing initialization
//!
//! # Example
//!
//! ```rust,ignore
//! use variant_resolve::model::ArtifactName;
//! use variant_resolve::resolver::ComponentResolveState;
//! use variant_resolve::test_utils::ComponentBuilder;
//!
//! let component = ComponentBuilder::project(":lib")
//!     .configuration("runtimeElements")
//!     .artifact(ArtifactName::jar("lib"))
//!     .build();
//! let state = ComponentResolveState::new(component);
//! ```

pub mod builder;
pub mod fixtures;

pub use builder::ComponentBuilder;
pub use fixtures::{DescriptorFixture, SettingsFixture};

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise
/// `RUST_LOG` if set, otherwise leaves logging off.
///
/// ```bash
/// RUST_LOG=variant_cache=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true) // Show targets like "variant_cache"
            .with_thread_ids(false)
            .try_init();
    });
}
