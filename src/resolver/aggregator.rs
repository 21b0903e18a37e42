//! Builds the candidate variant universe offered to artifact selection.
//!
//! Graph-level selection picks one configuration per component, but the
//! component may publish further physical variants (classifiers, secondary
//! artifacts) on sibling graph traversal variants. When that enumeration is
//! published, the universe is the union of every sibling's physical variants;
//! otherwise it is the target configuration's own variants. This is the only
//! place that branches on [`GraphTraversalVariants`].

use crate::core::ResolveError;
use crate::model::{
    GraphTraversalVariants, LocalComponentMetadata, LocalConfigurationMetadata, VariantSet,
};

/// Compute the candidate universe for artifact selection from `configuration`.
///
/// When graph traversal variants are present, each is prepared (memoized) and
/// the union of their physical variants is returned. The target
/// configuration's own variants are part of the result only if the target is
/// itself one of the graph traversal variants.
///
/// # Errors
///
/// [`ResolveError::PreparationFailed`] if a sibling variant fails to prepare.
pub fn candidate_variants(
    component: &LocalComponentMetadata,
    configuration: &LocalConfigurationMetadata,
) -> Result<VariantSet, ResolveError> {
    match component.variants_for_graph_traversal() {
        GraphTraversalVariants::Present(variants) => {
            let mut universe = VariantSet::new();
            for variant in variants {
                let prepared = variant.prepare_to_resolve_artifacts()?;
                universe.extend(prepared.variants().iter().cloned());
            }
            tracing::debug!(
                target: "aggregator",
                "{} graph traversal variant(s) of {} offer {} physical variant(s)",
                variants.len(),
                component.component_id(),
                universe.len()
            );
            Ok(universe)
        }
        GraphTraversalVariants::Absent => {
            tracing::trace!(
                target: "aggregator",
                "{} has no graph traversal variants; using '{}' only",
                component.component_id(),
                configuration.name()
            );
            Ok(configuration.variants().clone())
        }
    }
}
