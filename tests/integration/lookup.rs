//! Single artifact lookup.

use std::sync::Arc;
use variant_resolve::core::{ResolveError, user_friendly_error};
use variant_resolve::model::ArtifactName;
use variant_resolve::resolver::ComponentResolveState;
use variant_resolve::test_utils::ComponentBuilder;

fn state() -> ComponentResolveState {
    ComponentResolveState::new(
        ComponentBuilder::project(":lib")
            .configuration("runtimeElements")
            .artifact(ArtifactName::jar("jar"))
            .artifact(ArtifactName::jar("lib").with_classifier("sources"))
            .build(),
    )
}

#[test]
fn test_declared_artifact_is_found() {
    let state = state();
    let runtime = Arc::clone(&state.metadata().configurations()[0]);
    let handle = state.prepare_for_artifact_resolution(&runtime).unwrap();

    let artifact = handle.resolve_artifact(&ArtifactName::jar("jar")).unwrap();

    assert_eq!(artifact.name(), &ArtifactName::jar("jar"));
    assert_eq!(artifact.component_id(), state.metadata().component_id());
}

#[test]
fn test_missing_artifact_is_not_found() {
    let state = state();
    let runtime = Arc::clone(&state.metadata().configurations()[0]);
    let handle = state.prepare_for_artifact_resolution(&runtime).unwrap();

    let err = handle.resolve_artifact(&ArtifactName::jar("docs")).unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(
        &err,
        ResolveError::ArtifactNotFound { variant, artifact }
            if variant == "runtimeElements" && artifact == "docs.jar"
    ));

    let context = user_friendly_error(err.into());
    assert!(context.suggestion.is_some());
}

#[test]
fn test_lookup_matches_the_full_name() {
    let state = state();
    let runtime = Arc::clone(&state.metadata().configurations()[0]);
    let handle = state.prepare_for_artifact_resolution(&runtime).unwrap();

    assert!(handle.resolve_artifact(&ArtifactName::jar("lib")).is_err());
    assert!(handle.resolve_artifact(&ArtifactName::jar("lib").with_classifier("sources")).is_ok());
    assert!(handle.resolve_artifact(&ArtifactName::jar("jar").with_kind("zip")).is_err());
}
