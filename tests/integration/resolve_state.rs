//! Cache identity and failure handling of component resolve state.

use std::sync::Arc;
use std::sync::atomic::Ordering;
use variant_resolve::core::ResolveError;
use variant_resolve::model::ArtifactName;
use variant_resolve::resolver::ComponentResolveState;
use variant_resolve::test_utils::{ComponentBuilder, init_test_logging};

#[test]
fn test_distinct_variants_get_distinct_states() {
    init_test_logging(None);
    let component = ComponentBuilder::project(":lib")
        .configuration("apiElements")
        .artifact(ArtifactName::jar("lib-api"))
        .configuration("runtimeElements")
        .artifact(ArtifactName::jar("lib"))
        .build();
    let state = ComponentResolveState::new(component);
    let api = Arc::clone(state.metadata().configuration("apiElements").unwrap());
    let runtime = Arc::clone(state.metadata().configuration("runtimeElements").unwrap());

    let api_state = state.resolve_artifacts_for(&api).unwrap();
    let runtime_state = state.resolve_artifacts_for(&runtime).unwrap();

    assert!(!Arc::ptr_eq(&api_state, &runtime_state));
    assert_eq!(api_state.artifacts()[0].name(), &ArtifactName::jar("lib-api"));
    assert_eq!(runtime_state.artifacts()[0].name(), &ArtifactName::jar("lib"));
}

#[test]
fn test_both_entry_points_share_one_state() {
    let (component, preparations) = ComponentBuilder::project(":lib")
        .configuration("runtimeElements")
        .artifact(ArtifactName::jar("lib"))
        .build_counted();
    let state = ComponentResolveState::new(component);
    let runtime = Arc::clone(&state.metadata().configurations()[0]);

    let graph_view = state.resolve_artifacts_for(&runtime).unwrap();
    let handle = state.prepare_for_artifact_resolution(&runtime).unwrap();
    let again = state.resolve_artifacts_for(&runtime).unwrap();

    assert!(Arc::ptr_eq(&graph_view, &handle));
    assert!(Arc::ptr_eq(&handle, &again));
    assert_eq!(state.cached_variant_count(), 1);
    assert_eq!(preparations.load(Ordering::SeqCst), 1);
}

#[test]
fn test_failed_preparation_is_retried_and_then_cached() {
    let (component, preparations) = ComponentBuilder::project(":lib")
        .configuration("runtimeElements")
        .artifact(ArtifactName::jar("lib"))
        .failing(1)
        .build_counted();
    let state = ComponentResolveState::new(component);
    let runtime = Arc::clone(&state.metadata().configurations()[0]);

    let err = state.prepare_for_artifact_resolution(&runtime).unwrap_err();
    assert!(matches!(err, ResolveError::PreparationFailed { .. }));
    assert_eq!(state.cached_variant_count(), 0);

    let handle = state.prepare_for_artifact_resolution(&runtime).unwrap();
    assert_eq!(handle.artifacts().len(), 1);
    assert_eq!(state.cached_variant_count(), 1);

    let again = state.resolve_artifacts_for(&runtime).unwrap();
    assert!(Arc::ptr_eq(&handle, &again));
    assert_eq!(preparations.load(Ordering::SeqCst), 2);
}

#[test]
fn test_variant_of_another_component_is_rejected() {
    let ours = ComponentResolveState::new(
        ComponentBuilder::project(":lib").configuration("runtimeElements").build(),
    );
    let theirs = ComponentBuilder::project(":app").configuration("debugElements").build();

    let err = ours.resolve_artifacts_for(&theirs.configurations()[0]).unwrap_err();

    assert!(matches!(err, ResolveError::UnknownVariant { .. }));
    assert!(err.to_string().contains("debugElements"));
}

#[test]
fn test_module_version_id_is_reported() {
    let state = ComponentResolveState::new(ComponentBuilder::project(":lib").build());
    assert_eq!(state.module_version_id().to_string(), "org.example:lib:1.0");
}
