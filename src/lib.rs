//! variant-resolve - variant-aware artifact resolution
//!
//! After dependency graph resolution has picked a variant (a named,
//! attribute-tagged usage such as "runtime" or "api") of each component, the
//! artifacts of that variant still have to be determined. This crate provides
//! that layer:
//!
//! - a per-component resolve state whose cache prepares each variant at most
//!   once and shares the result between threads
//! - per-variant artifact listing, single-artifact lookup and artifact-set
//!   selection through a pluggable selector
//! - a variant aggregator that widens the selector's choice to every physical
//!   variant the component publishes for graph traversal
//!
//! # Architecture Overview
//!
//! ```text
//! ComponentResolveState ──► VariantStateCache (DashMap, construct once)
//!                                │
//!                                ▼
//!                     VariantArtifactResolveState
//!                     ├── artifacts() / resolve_artifact()
//!                     └── resolve_artifacts() ──► ArtifactSelector
//!                                                   ▲
//!                               aggregator::candidate_variants (lazy)
//! ```
//!
//! # Core Modules
//!
//! - [`model`] - Identifiers, attributes, artifacts, variants and component metadata
//! - [`cache`] - Concurrent construct-once cache of prepared state
//! - [`resolver`] - Component and variant resolve state, variant aggregation
//! - [`selector`] - The artifact selector boundary, exclusions and a default selector
//! - [`config`] - Resolution settings and TOML component descriptors
//! - [`core`] - Error types and user-facing error formatting
//! - [`cli`] - The `variant-resolve` command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use variant_resolve::config::{ComponentDescriptor, ResolutionSettings};
//! use variant_resolve::model::{ArtifactName, ImmutableAttributes};
//! use variant_resolve::resolver::ComponentResolveState;
//! use variant_resolve::selector::{AttributeMatchingSelector, ExcludeSpec};
//!
//! # fn main() -> anyhow::Result<()> {
//! let settings = ResolutionSettings::load_or_default(None)?;
//! let descriptor = ComponentDescriptor::load("lib.toml".as_ref())?;
//! let state = ComponentResolveState::with_settings(descriptor.into_component(), &settings.cache);
//!
//! let variant = Arc::clone(state.metadata().configuration("runtimeElements").unwrap());
//! let handle = state.prepare_for_artifact_resolution(&variant)?;
//!
//! let jar = handle.resolve_artifact(&ArtifactName::jar("lib"))?;
//! println!("{}", jar.name());
//!
//! let selector = AttributeMatchingSelector::from_settings(&settings.selection);
//! let resolved = handle.resolve_artifacts(
//!     &selector,
//!     &ExcludeSpec::Nothing,
//!     &ImmutableAttributes::empty(),
//! )?;
//! println!("{} artifact(s)", resolved.artifacts().len());
//! # Ok(())
//! # }
//! ```
//!
//! # Logging
//!
//! The crate logs through `tracing` with the targets `variant_cache`,
//! `variant`, `aggregator`, `selector` and `config`:
//!
//! ```bash
//! RUST_LOG=variant_cache=debug,selector=trace variant-resolve resolve lib.toml --variant runtimeElements
//! ```

pub mod cache;
pub mod cli;
pub mod config;
pub mod core;
pub mod model;
pub mod resolver;
pub mod selector;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
