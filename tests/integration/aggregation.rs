//! Candidate universe offered to artifact selection.

use std::sync::Arc;
use variant_resolve::model::{ArtifactName, ImmutableAttributes, VariantResolveId};
use variant_resolve::resolver::{ComponentResolveState, aggregator};
use variant_resolve::selector::{AttributeMatchingSelector, ExcludeSpec};
use variant_resolve::test_utils::ComponentBuilder;

fn ids(set: &variant_resolve::model::VariantSet) -> Vec<String> {
    set.ids().map(VariantResolveId::to_string).collect()
}

#[test]
fn test_without_graph_variants_only_own_variants_are_offered() {
    let component = ComponentBuilder::project(":lib")
        .configuration("A")
        .variant("x", &[], vec![ArtifactName::jar("x")])
        .configuration("B")
        .variant("z", &[], vec![ArtifactName::jar("z")])
        .build();
    let state = ComponentResolveState::new(component);
    let a = Arc::clone(state.metadata().configuration("A").unwrap());

    let handle = state.prepare_for_artifact_resolution(&a).unwrap();
    let candidates =
        aggregator::candidate_variants(state.metadata(), handle.configuration()).unwrap();

    assert_eq!(ids(&candidates), vec!["A/x"]);
}

#[test]
fn test_graph_variants_widen_the_universe() {
    let component = ComponentBuilder::project(":lib")
        .configuration("A")
        .variant("x", &[], vec![ArtifactName::jar("x")])
        .variant("y", &[], vec![ArtifactName::jar("y")])
        .configuration("B")
        .variant("z", &[], vec![ArtifactName::jar("z")])
        .graph_variants(&["A", "B"])
        .build();
    let state = ComponentResolveState::new(component);
    let a = Arc::clone(state.metadata().configuration("A").unwrap());

    let handle = state.prepare_for_artifact_resolution(&a).unwrap();
    let candidates =
        aggregator::candidate_variants(state.metadata(), handle.configuration()).unwrap();

    assert_eq!(ids(&candidates), vec!["A/x", "A/y", "B/z"]);
    // Only the requested variant gets a cache entry; siblings are prepared but not wrapped.
    assert_eq!(state.cached_variant_count(), 1);
}

#[test]
fn test_selector_sees_sibling_variant_only_with_graph_variants() {
    let build = |graph: bool| {
        let builder = ComponentBuilder::project(":lib")
            .configuration("runtimeElements")
            .attribute("category", "library")
            .artifact(ArtifactName::jar("lib"))
            .configuration("sourcesElements")
            .attribute("category", "documentation")
            .artifact(ArtifactName::jar("lib").with_classifier("sources"));
        if graph {
            builder.graph_variants(&["runtimeElements", "sourcesElements"]).build()
        } else {
            builder.build()
        }
    };
    let overrides = ImmutableAttributes::of([("category", "documentation")]);
    let selector = AttributeMatchingSelector::new();

    let widened = ComponentResolveState::new(build(true));
    let runtime = Arc::clone(widened.metadata().configuration("runtimeElements").unwrap());
    let resolved = widened
        .prepare_for_artifact_resolution(&runtime)
        .unwrap()
        .resolve_artifacts(&selector, &ExcludeSpec::Nothing, &overrides)
        .unwrap();
    assert_eq!(resolved.artifacts()[0].name().to_string(), "lib-sources.jar");

    let narrow = ComponentResolveState::new(build(false));
    let runtime = Arc::clone(narrow.metadata().configuration("runtimeElements").unwrap());
    let result = narrow
        .prepare_for_artifact_resolution(&runtime)
        .unwrap()
        .resolve_artifacts(&selector, &ExcludeSpec::Nothing, &overrides);
    assert!(result.is_err());
}

#[test]
fn test_sibling_preparation_failure_surfaces_from_selection() {
    let component = ComponentBuilder::project(":lib")
        .configuration("runtimeElements")
        .artifact(ArtifactName::jar("lib"))
        .configuration("sourcesElements")
        .failing(1)
        .graph_variants(&["runtimeElements", "sourcesElements"])
        .build();
    let state = ComponentResolveState::new(component);
    let runtime = Arc::clone(state.metadata().configuration("runtimeElements").unwrap());
    let handle = state.prepare_for_artifact_resolution(&runtime).unwrap();
    let overrides = ImmutableAttributes::of([("docs", "sources")]);

    let err = handle
        .resolve_artifacts(&AttributeMatchingSelector::new(), &ExcludeSpec::Nothing, &overrides)
        .unwrap_err();
    assert!(err.downcast_ref::<variant_resolve::core::ResolveError>().is_some());

    // The failure was not memoized: the next call prepares the sibling successfully.
    let candidates =
        aggregator::candidate_variants(state.metadata(), handle.configuration()).unwrap();
    assert_eq!(candidates.len(), 2);
}
