//! Prepared, resolution-ready form of a variant.

use super::artifact::{ArtifactName, ComponentArtifactMetadata};
use super::attributes::ImmutableAttributes;
use super::physical::VariantSet;
use std::sync::Arc;

/// A configuration: the resolution-ready form of a graph-level variant.
///
/// Owns the ordered artifact list and the set of physical variants the
/// configuration publishes.
#[derive(Debug, Clone)]
pub struct LocalConfigurationMetadata {
    name: String,
    attributes: ImmutableAttributes,
    artifacts: Vec<ComponentArtifactMetadata>,
    variants: VariantSet,
}

impl LocalConfigurationMetadata {
    /// Create a prepared configuration.
    pub fn new(
        name: impl Into<String>,
        attributes: ImmutableAttributes,
        artifacts: Vec<ComponentArtifactMetadata>,
        variants: VariantSet,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            artifacts,
            variants,
        }
    }

    /// Configuration name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attributes of the configuration.
    pub fn attributes(&self) -> &ImmutableAttributes {
        &self.attributes
    }

    /// Artifacts in declaration order.
    pub fn artifacts(&self) -> &[ComponentArtifactMetadata] {
        &self.artifacts
    }

    /// Physical variants published by this configuration.
    pub fn variants(&self) -> &VariantSet {
        &self.variants
    }

    /// Find the artifact with exactly this name.
    pub fn artifact(&self, name: &ArtifactName) -> Option<&ComponentArtifactMetadata> {
        self.artifacts.iter().find(|artifact| artifact.name() == name)
    }

    /// Return a copy whose artifacts, including those of every physical
    /// variant, have been passed through `transform`.
    pub fn map_artifacts<F>(&self, transform: F) -> Self
    where
        F: Fn(ComponentArtifactMetadata) -> ComponentArtifactMetadata,
    {
        let artifacts = self.artifacts.iter().cloned().map(&transform).collect();
        let variants = self
            .variants
            .iter()
            .map(|variant| Arc::new(variant.map_artifacts(&transform)))
            .collect();
        Self {
            name: self.name.clone(),
            attributes: self.attributes.clone(),
            artifacts,
            variants,
        }
    }
}
