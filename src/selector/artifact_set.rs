//! Results of one artifact selection call.

use crate::model::{
    ComponentArtifactId, ComponentArtifactMetadata, ImmutableAttributes, VariantResolveId,
    VariantResolveMetadata,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

/// A selected physical variant with its effective attributes and surviving artifacts.
#[derive(Debug, Clone)]
pub struct ResolvedVariant {
    variant: Arc<VariantResolveMetadata>,
    attributes: ImmutableAttributes,
    artifacts: Vec<ComponentArtifactMetadata>,
}

impl ResolvedVariant {
    /// Create a resolved variant.
    pub fn new(
        variant: Arc<VariantResolveMetadata>,
        attributes: ImmutableAttributes,
        artifacts: Vec<ComponentArtifactMetadata>,
    ) -> Self {
        Self {
            variant,
            attributes,
            artifacts,
        }
    }

    /// The physical variant this was resolved from.
    pub fn variant(&self) -> &Arc<VariantResolveMetadata> {
        &self.variant
    }

    /// Variant attributes overlaid with the call's overrides.
    pub fn attributes(&self) -> &ImmutableAttributes {
        &self.attributes
    }

    /// Artifacts left after exclusions, in declaration order.
    pub fn artifacts(&self) -> &[ComponentArtifactMetadata] {
        &self.artifacts
    }
}

/// Scratch cache of resolved variants, scoped to a single selection call.
///
/// A fresh cache is created for every call: selection may depend on the
/// call's overrides and exclusions, so results are never shared between calls.
#[derive(Debug, Default)]
pub struct ResolvedVariantCache {
    resolved: HashMap<VariantResolveId, Arc<ResolvedVariant>>,
}

impl ResolvedVariantCache {
    /// An empty scratch cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the resolved form of `variant`, resolving it with `resolve` on first request.
    pub fn get_or_resolve<F>(
        &mut self,
        variant: &Arc<VariantResolveMetadata>,
        resolve: F,
    ) -> Arc<ResolvedVariant>
    where
        F: FnOnce() -> ResolvedVariant,
    {
        Arc::clone(self.resolved.entry(variant.id().clone()).or_insert_with(|| Arc::new(resolve())))
    }

    /// Number of variants resolved so far.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    /// Whether nothing has been resolved.
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

/// The lazy, deduplicated output of one selection call.
///
/// The flattened artifact list is computed on first access and keeps the
/// first occurrence of each artifact identity.
#[derive(Debug, Default)]
pub struct ResolvedArtifactSet {
    variants: Vec<Arc<ResolvedVariant>>,
    artifacts: OnceLock<Vec<ComponentArtifactMetadata>>,
}

impl ResolvedArtifactSet {
    /// A set with no variants.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A set over the given resolved variants.
    pub fn new(variants: Vec<Arc<ResolvedVariant>>) -> Self {
        Self {
            variants,
            artifacts: OnceLock::new(),
        }
    }

    /// Resolved variants in selection order.
    pub fn variants(&self) -> &[Arc<ResolvedVariant>] {
        &self.variants
    }

    /// Deduplicated artifacts across all variants.
    pub fn artifacts(&self) -> &[ComponentArtifactMetadata] {
        self.artifacts.get_or_init(|| {
            let mut seen: HashSet<ComponentArtifactId> = HashSet::new();
            let artifacts: Vec<ComponentArtifactMetadata> = self
                .variants
                .iter()
                .flat_map(|variant| variant.artifacts())
                .filter(|artifact| seen.insert(artifact.id()))
                .cloned()
                .collect();
            tracing::trace!(
                target: "selector",
                "flattened {} variant(s) into {} artifact(s)",
                self.variants.len(),
                artifacts.len()
            );
            artifacts
        })
    }

    /// Whether the set holds no artifacts.
    pub fn is_empty(&self) -> bool {
        self.artifacts().is_empty()
    }
}
