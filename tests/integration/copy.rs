//! Identity-preserving copies with artifact transforms.

use std::path::PathBuf;
use std::sync::Arc;
use variant_resolve::model::{
    ArtifactName, ArtifactTransformer, ComponentArtifactMetadata, ComponentId, ModuleVersionId,
};
use variant_resolve::resolver::ComponentResolveState;
use variant_resolve::test_utils::ComponentBuilder;

fn original() -> ComponentResolveState {
    ComponentResolveState::new(
        ComponentBuilder::project(":lib")
            .configuration("runtimeElements")
            .artifact(ArtifactName::jar("lib"))
            .variant("classes", &[("artifactType", "classes")], vec![ArtifactName::jar("lib")])
            .build(),
    )
}

#[test]
fn test_identity_copy_keeps_artifacts_and_reports_new_id() {
    let state = original();
    let new_id = ComponentId::module(ModuleVersionId::new("org.example", "lib", "1.0"));
    let identity: ArtifactTransformer = Arc::new(|a: ComponentArtifactMetadata| a);

    let copied = ComponentResolveState::new(state.copy(new_id.clone(), identity));

    assert_eq!(copied.metadata().component_id(), &new_id);
    assert_eq!(copied.module_version_id(), state.module_version_id());

    let runtime = Arc::clone(&copied.metadata().configurations()[0]);
    let handle = copied.prepare_for_artifact_resolution(&runtime).unwrap();
    let source = state
        .prepare_for_artifact_resolution(&state.metadata().configurations()[0])
        .unwrap();
    assert_eq!(handle.artifacts(), source.artifacts());
}

#[test]
fn test_transform_applies_to_configuration_and_physical_variants() {
    let state = original();
    let included = ComponentId::project(":included", ":lib");
    let target = included.clone();
    let transformer: ArtifactTransformer = Arc::new(move |a: ComponentArtifactMetadata| {
        let file = PathBuf::from("included/build/libs").join(a.name().to_string());
        a.with_component(target.clone()).with_file(file)
    });

    let copied = ComponentResolveState::new(state.copy(included.clone(), transformer));
    let runtime = Arc::clone(&copied.metadata().configurations()[0]);
    let handle = copied.prepare_for_artifact_resolution(&runtime).unwrap();

    let artifact = handle.resolve_artifact(&ArtifactName::jar("lib")).unwrap();
    assert_eq!(artifact.component_id(), &included);
    assert_eq!(artifact.file(), Some(&PathBuf::from("included/build/libs/lib.jar")));

    let physical = handle.configuration().variants().iter().next().unwrap();
    assert_eq!(physical.artifacts()[0].component_id(), &included);
}

#[test]
fn test_copy_does_not_touch_the_original() {
    let state = original();
    let runtime = Arc::clone(&state.metadata().configurations()[0]);
    let before = state.prepare_for_artifact_resolution(&runtime).unwrap();

    let transformer: ArtifactTransformer =
        Arc::new(|a: ComponentArtifactMetadata| a.with_file(PathBuf::from("elsewhere.jar")));
    let _copy = state.copy(ComponentId::project(":", ":other"), transformer);

    let after = state.prepare_for_artifact_resolution(&runtime).unwrap();
    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.artifacts()[0].file(), None);
    assert_eq!(state.metadata().component_id(), &ComponentId::project(":", ":lib"));
}
