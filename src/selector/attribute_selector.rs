//! Attribute-override driven selection of physical variants.

use super::artifact_set::{ResolvedArtifactSet, ResolvedVariant, ResolvedVariantCache};
use super::exclude::ExcludeSpec;
use super::{ArtifactSelector, VariantSupplier};
use crate::config::SelectionSettings;
use crate::core::SelectionError;
use crate::model::{
    ImmutableAttributes, LocalComponentMetadata, ModuleVersionId, VariantResolveMetadata,
    VariantSet,
};
use std::sync::Arc;

/// Selects physical variants by attribute overrides.
///
/// - Without overrides, the configuration's own variants are selected and the
///   candidate universe is never computed.
/// - With overrides, every candidate whose attributes do not contradict them is
///   eligible, and the candidates matching the most override keys win.
/// - Overrides whose keys no candidate carries keep the declared variants.
/// - If no candidate is eligible the call fails with
///   [`SelectionError::NoMatchingVariant`], unless lenient mode falls back to
///   the declared variants.
#[derive(Debug, Clone, Default)]
pub struct AttributeMatchingSelector {
    lenient_overrides: bool,
}

impl AttributeMatchingSelector {
    /// A strict selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// A selector configured from settings.
    pub fn from_settings(settings: &SelectionSettings) -> Self {
        Self {
            lenient_overrides: settings.lenient_overrides,
        }
    }

    /// Whether unmatched overrides fall back to the declared variants.
    pub fn is_lenient(&self) -> bool {
        self.lenient_overrides
    }

    fn best_matches(
        candidates: &VariantSet,
        declared_variants: &VariantSet,
        overrides: &ImmutableAttributes,
    ) -> Vec<Arc<VariantResolveMetadata>> {
        let compatible: Vec<(usize, &Arc<VariantResolveMetadata>)> = candidates
            .iter()
            .filter(|variant| variant.attributes().is_compatible_with(overrides))
            .map(|variant| (variant.attributes().matching_keys(overrides), variant))
            .collect();

        let best = compatible.iter().map(|(score, _)| *score).max().unwrap_or(0);
        if best == 0 {
            // No candidate carries any override key; nothing sets a sibling apart.
            return declared_variants
                .iter()
                .filter(|variant| variant.attributes().is_compatible_with(overrides))
                .cloned()
                .collect();
        }
        compatible
            .into_iter()
            .filter(|(score, _)| *score == best)
            .map(|(_, variant)| Arc::clone(variant))
            .collect()
    }
}

fn resolve_variant(
    module: &ModuleVersionId,
    variant: &Arc<VariantResolveMetadata>,
    exclusions: &ExcludeSpec,
    overrides: &ImmutableAttributes,
) -> ResolvedVariant {
    let artifacts = variant
        .artifacts()
        .iter()
        .filter(|artifact| {
            let excluded = exclusions.excludes_artifact(module, artifact.name());
            if excluded {
                tracing::trace!(target: "selector", "excluding {}", artifact.name());
            }
            !excluded
        })
        .cloned()
        .collect();
    ResolvedVariant::new(Arc::clone(variant), variant.attributes().overlay(overrides), artifacts)
}

impl ArtifactSelector for AttributeMatchingSelector {
    fn resolve_artifacts(
        &self,
        component: &LocalComponentMetadata,
        scratch: &mut ResolvedVariantCache,
        all_variants: VariantSupplier<'_>,
        declared_variants: &VariantSet,
        exclusions: &ExcludeSpec,
        overrides: &ImmutableAttributes,
    ) -> anyhow::Result<ResolvedArtifactSet> {
        let module = component.module_version_id();
        if exclusions.excludes_module(module) {
            tracing::debug!(target: "selector", "{} excluded by {}", module, exclusions);
            return Ok(ResolvedArtifactSet::empty());
        }

        let selected: Vec<Arc<VariantResolveMetadata>> = if overrides.is_empty() {
            declared_variants.iter().cloned().collect()
        } else {
            let candidates = all_variants()?;
            let matches = Self::best_matches(&candidates, declared_variants, overrides);
            tracing::debug!(
                target: "selector",
                "{} of {} candidate variant(s) of {} match {}",
                matches.len(),
                candidates.len(),
                component.component_id(),
                overrides
            );
            if !matches.is_empty() {
                matches
            } else if self.lenient_overrides {
                tracing::warn!(
                    target: "selector",
                    "No variant of {} matches {}; using the declared variants",
                    component.component_id(),
                    overrides
                );
                declared_variants.iter().cloned().collect()
            } else {
                return Err(SelectionError::NoMatchingVariant {
                    component: component.component_id().to_string(),
                    overrides: overrides.to_string(),
                }
                .into());
            }
        };

        let variants = selected
            .iter()
            .map(|variant| {
                scratch.get_or_resolve(variant, || {
                    resolve_variant(module, variant, exclusions, overrides)
                })
            })
            .collect();
        Ok(ResolvedArtifactSet::new(variants))
    }
}
