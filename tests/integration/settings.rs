//! Settings and descriptor loading.

use std::sync::Arc;
use tempfile::TempDir;
use variant_resolve::config::{ComponentDescriptor, ResolutionSettings};
use variant_resolve::core::{ConfigError, user_friendly_error};
use variant_resolve::model::{ArtifactName, ComponentId};
use variant_resolve::resolver::ComponentResolveState;
use variant_resolve::test_utils::{DescriptorFixture, SettingsFixture};

#[test]
fn test_settings_file_is_loaded() {
    let temp = TempDir::new().unwrap();
    let path = SettingsFixture::lenient().write_to(temp.path()).unwrap();

    let settings = ResolutionSettings::load(&path).unwrap();

    assert!(settings.selection.lenient_overrides);
    assert_eq!(settings.cache.initial_capacity, 8);
}

#[test]
fn test_invalid_shard_amount_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = SettingsFixture::invalid_shards().write_to(temp.path()).unwrap();

    let err = ResolutionSettings::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
}

#[test]
fn test_missing_settings_file_reports_io_error() {
    let temp = TempDir::new().unwrap();
    let err = ResolutionSettings::load(&temp.path().join("absent.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(user_friendly_error(err.into()).suggestion.is_some());
}

#[test]
fn test_descriptor_round_trips_into_resolvable_component() {
    let temp = TempDir::new().unwrap();
    let path = DescriptorFixture::basic().write_to(temp.path()).unwrap();

    let descriptor = ComponentDescriptor::load(&path).unwrap();
    assert_eq!(descriptor.component_id(), ComponentId::project(":", ":lib"));

    let state = ComponentResolveState::new(descriptor.into_component());
    let runtime = Arc::clone(state.metadata().configuration("runtimeElements").unwrap());
    let handle = state.prepare_for_artifact_resolution(&runtime).unwrap();

    let jar = handle.resolve_artifact(&ArtifactName::jar("lib")).unwrap();
    let file = jar.file().map(|f| f.to_string_lossy().into_owned());
    assert_eq!(file.as_deref(), Some("build/libs/lib.jar"));
    assert_eq!(handle.configuration().variants().len(), 1);
}

#[test]
fn test_invalid_descriptors_are_rejected() {
    let temp = TempDir::new().unwrap();

    let syntax = DescriptorFixture::invalid_syntax().write_to(temp.path()).unwrap();
    let err = ComponentDescriptor::load(&syntax).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));

    let graph = DescriptorFixture::unknown_graph_variant().write_to(temp.path()).unwrap();
    let err = ComponentDescriptor::load(&graph).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("javadocElements"));
}
