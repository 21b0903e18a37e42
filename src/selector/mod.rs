//! The artifact selection boundary.
//!
//! [`ArtifactSelector`] is the contract between the resolution core and the
//! artifact transfer subsystem: given a component, a lazily computed candidate
//! universe, the configuration's own variants, exclusions and attribute
//! overrides, it produces a [`ResolvedArtifactSet`]. File transfer and
//! physical deduplication happen behind this trait, never in the core.
//!
//! [`AttributeMatchingSelector`] is an in-process implementation that selects
//! physical variants by attribute overrides and applies exclusions. It does no
//! I/O and is what the CLI uses.

mod artifact_set;
mod attribute_selector;
mod exclude;

pub use artifact_set::{ResolvedArtifactSet, ResolvedVariant, ResolvedVariantCache};
pub use attribute_selector::AttributeMatchingSelector;
pub use exclude::ExcludeSpec;

use crate::core::ResolveError;
use crate::model::{ImmutableAttributes, LocalComponentMetadata, VariantSet};

/// Lazily computes the candidate universe; only called if the selector needs it.
pub type VariantSupplier<'a> = &'a dyn Fn() -> Result<VariantSet, ResolveError>;

/// Turns a candidate variant universe into a resolved artifact set.
///
/// Implementations may block on I/O and are called concurrently for different
/// variants; the resolution core never holds a lock while calling them. Errors
/// are returned to the caller of the core unchanged.
pub trait ArtifactSelector: Send + Sync {
    /// Select and resolve artifacts.
    ///
    /// - `scratch` is fresh for this call and dropped afterwards.
    /// - `all_variants` yields the candidate universe built by the aggregator.
    /// - `declared_variants` are the target configuration's own physical variants.
    fn resolve_artifacts(
        &self,
        component: &LocalComponentMetadata,
        scratch: &mut ResolvedVariantCache,
        all_variants: VariantSupplier<'_>,
        declared_variants: &VariantSet,
        exclusions: &ExcludeSpec,
        overrides: &ImmutableAttributes,
    ) -> anyhow::Result<ResolvedArtifactSet>;
}
