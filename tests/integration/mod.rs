//! Integration test suite for variant-resolve
//!
//! These tests exercise the public API end to end: component resolve state,
//! the variant cache under concurrency, artifact lookup and selection, and the
//! `variant-resolve` binary.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! RUST_LOG=variant_cache=debug cargo test --test integration -- --nocapture
//! ```
//!
//! # Test Organization
//!
//! - **aggregation**: candidate universe with and without graph traversal variants
//! - **cli**: the `variant-resolve` binary
//! - **concurrency**: many callers racing for the same variant
//! - **copy**: identity-preserving copies with artifact transforms
//! - **lookup**: single artifact lookup and NOT_FOUND
//! - **resolve_state**: cache identity and failure handling
//! - **selection**: artifact-set resolution through the default selector
//! - **settings**: settings and descriptor loading

mod aggregation;
mod cli;
mod concurrency;
mod copy;
mod lookup;
mod resolve_state;
mod settings;
