//! Per-variant artifact resolution state.

use super::aggregator::candidate_variants;
use crate::core::ResolveError;
use crate::model::{
    ArtifactName, ComponentArtifactMetadata, ImmutableAttributes, LocalComponentMetadata,
    LocalConfigurationMetadata, VariantMetadata,
};
use crate::selector::{ArtifactSelector, ExcludeSpec, ResolvedArtifactSet, ResolvedVariantCache};
use std::sync::Arc;

/// Artifact resolution state for one graph-selected variant of a component.
///
/// Built once per (component, variant) by the component's cache, after the
/// variant has been prepared. Serves both as the variant's artifact-graph
/// metadata ([`artifacts`](Self::artifacts)) and as the handle for artifact
/// lookups and selections.
#[derive(Debug)]
pub struct VariantArtifactResolveState {
    component: Arc<LocalComponentMetadata>,
    variant: Arc<VariantMetadata>,
    configuration: Arc<LocalConfigurationMetadata>,
}

impl VariantArtifactResolveState {
    /// Prepare `variant` and build its state.
    ///
    /// # Errors
    ///
    /// [`ResolveError::PreparationFailed`] if the variant cannot be prepared.
    pub(crate) fn prepare(
        component: Arc<LocalComponentMetadata>,
        variant: Arc<VariantMetadata>,
    ) -> Result<Self, ResolveError> {
        let configuration = variant.prepare_to_resolve_artifacts()?;
        Ok(Self {
            component,
            variant,
            configuration,
        })
    }

    /// The graph-selected variant.
    pub fn variant(&self) -> &Arc<VariantMetadata> {
        &self.variant
    }

    /// The variant's prepared configuration.
    pub fn configuration(&self) -> &Arc<LocalConfigurationMetadata> {
        &self.configuration
    }

    /// The variant's artifacts, in declaration order.
    pub fn artifacts(&self) -> &[ComponentArtifactMetadata] {
        self.configuration.artifacts()
    }

    /// Look up one artifact by name.
    ///
    /// # Errors
    ///
    /// [`ResolveError::ArtifactNotFound`] if the configuration has no artifact
    /// with exactly this name.
    pub fn resolve_artifact(
        &self,
        name: &ArtifactName,
    ) -> Result<&ComponentArtifactMetadata, ResolveError> {
        self.configuration.artifact(name).ok_or_else(|| ResolveError::ArtifactNotFound {
            variant: self.variant.id().to_string(),
            artifact: name.to_string(),
        })
    }

    /// Resolve the variant's artifact set through `selector`.
    ///
    /// The candidate universe is handed to the selector as a supplier and only
    /// computed if the selector asks for it. The selector gets a scratch cache
    /// that lives for this call only. Its errors are returned unchanged.
    ///
    /// # Errors
    ///
    /// Whatever the selector returns.
    pub fn resolve_artifacts<S>(
        &self,
        selector: &S,
        exclusions: &ExcludeSpec,
        overrides: &ImmutableAttributes,
    ) -> anyhow::Result<ResolvedArtifactSet>
    where
        S: ArtifactSelector + ?Sized,
    {
        let mut scratch = ResolvedVariantCache::new();
        let all_variants = || candidate_variants(&self.component, &self.configuration);
        selector.resolve_artifacts(
            &self.component,
            &mut scratch,
            &all_variants,
            self.configuration.variants(),
            exclusions,
            overrides,
        )
    }
}
