//! Variant-aware artifact resolution for resolved components.
//!
//! Once dependency graph resolution has selected a variant of a component, this
//! module turns that selection into artifacts. It is made of three parts:
//!
//! - [`ComponentResolveState`]: the per-component entry point. All variant
//!   requests go through its cache, which builds each variant's state at most
//!   once and hands the same instance to every caller.
//! - [`VariantArtifactResolveState`]: the per-variant handle. Lists the
//!   variant's artifacts, looks up a single artifact by name, and runs artifact
//!   selection through an [`ArtifactSelector`](crate::selector::ArtifactSelector).
//! - [`aggregator`]: decides which physical variants the selector may choose
//!   from. When the component publishes graph traversal variants that is all
//!   of their physical variants, otherwise only the selected configuration's.
//!
//! # Concurrency
//!
//! A [`ComponentResolveState`] is shared between resolution threads. Variant
//! preparation runs under the cache entry's lock, so racing callers for the
//! same variant wait for the first one and then see its result. Artifact
//! selection runs on the returned handle with no cache lock held.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use variant_resolve::config::ComponentDescriptor;
//! use variant_resolve::model::ImmutableAttributes;
//! use variant_resolve::resolver::ComponentResolveState;
//! use variant_resolve::selector::{AttributeMatchingSelector, ExcludeSpec};
//!
//! # fn main() -> anyhow::Result<()> {
//! let descriptor = ComponentDescriptor::load("lib.toml".as_ref())?;
//! let state = ComponentResolveState::new(descriptor.into_component());
//! let variant = Arc::clone(state.metadata().configuration("runtimeElements").unwrap());
//!
//! let handle = state.prepare_for_artifact_resolution(&variant)?;
//! let resolved = handle.resolve_artifacts(
//!     &AttributeMatchingSelector::new(),
//!     &ExcludeSpec::Nothing,
//!     &ImmutableAttributes::of([("docs", "sources")]),
//! )?;
//! for artifact in resolved.artifacts() {
//!     println!("{}", artifact.name());
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregator;
mod component_state;
mod variant_state;

pub use component_state::{ComponentResolveState, VariantStateCache};
pub use variant_state::VariantArtifactResolveState;
