//! Declarative component descriptors.
//!
//! A descriptor describes a component's configurations, their artifacts and
//! physical variants in TOML. [`ComponentDescriptor::into_component`] turns it
//! into [`LocalComponentMetadata`] whose variants prepare themselves from the
//! declaration on first use.
//!
//! ```toml
//! graph-variants = ["runtimeElements", "sourcesElements"]   # optional
//!
//! [component]
//! group = "org.example"
//! name = "lib"
//! version = "1.0"
//! project = ":lib"                  # omit for a published module component
//!
//! [[configurations]]
//! name = "runtimeElements"
//! attributes = { usage = "runtime" }
//!
//! [[configurations.artifacts]]
//! name = "lib"
//! type = "jar"
//! extension = "jar"
//! file = "build/libs/lib.jar"
//!
//! [[configurations.variants]]
//! name = "classes"
//! attributes = { artifactType = "classes" }
//! artifacts = [{ name = "main", type = "classes", extension = "" }]
//! ```
//!
//! A configuration that declares no `variants` publishes one implicit physical
//! variant carrying the configuration's own attributes and artifacts.

use super::parser::parse_config;
use crate::core::ConfigError;
use crate::model::{
    ArtifactName, ComponentArtifactMetadata, ComponentId, GraphTraversalVariants,
    ImmutableAttributes, LocalComponentMetadata, LocalConfigurationMetadata, ModuleVersionId,
    PrepareConfiguration, VariantMetadata, VariantResolveId, VariantResolveMetadata, VariantSet,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Root of a component descriptor file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ComponentDescriptor {
    /// Identity of the component
    pub component: ComponentDeclaration,
    /// Names of configurations forming the graph traversal enumeration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_variants: Option<Vec<String>>,
    /// Declared configurations
    #[serde(default)]
    pub configurations: Vec<ConfigurationDeclaration>,
}

/// Identity section of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentDeclaration {
    /// Module group
    pub group: String,
    /// Module name
    pub name: String,
    /// Module version
    pub version: String,
    /// Project path, for components built by the current build
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    /// Build path of the producing build; defaults to the root build `:`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub build: Option<String>,
    /// Component-level attributes
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// One declared configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigurationDeclaration {
    /// Configuration name, unique within the component
    pub name: String,
    /// Graph-level attributes
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Artifacts of the configuration
    #[serde(default)]
    pub artifacts: Vec<ArtifactDeclaration>,
    /// Physical variants; empty means one implicit variant
    #[serde(default)]
    pub variants: Vec<PhysicalVariantDeclaration>,
}

/// One declared physical variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhysicalVariantDeclaration {
    /// Variant name, unique within its configuration
    pub name: String,
    /// Attributes of the variant
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
    /// Artifacts of the variant
    #[serde(default)]
    pub artifacts: Vec<ArtifactDeclaration>,
}

/// One declared artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArtifactDeclaration {
    /// Base name
    pub name: String,
    /// Artifact type; defaults to `jar`
    #[serde(rename = "type", default = "default_artifact_type")]
    pub kind: String,
    /// Extension; defaults to the type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    /// Optional classifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
    /// Build-relative file location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

fn default_artifact_type() -> String {
    "jar".to_string()
}

impl ArtifactDeclaration {
    /// The artifact name this declaration describes.
    pub fn artifact_name(&self) -> ArtifactName {
        let extension = self.extension.clone().unwrap_or_else(|| self.kind.clone());
        ArtifactName::new(&self.name, &self.kind, extension, self.classifier.clone())
    }

    fn to_metadata(&self, component: &ComponentId) -> ComponentArtifactMetadata {
        ComponentArtifactMetadata::new(component.clone(), self.artifact_name(), self.file.clone())
    }
}

impl ComponentDescriptor {
    /// Read and validate a descriptor file.
    ///
    /// # Errors
    ///
    /// Any [`ConfigError`] from reading, parsing or validating the file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let descriptor: Self = parse_config(path)?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Parse and validate a descriptor from a TOML string.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] or [`ConfigError::Invalid`].
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let descriptor: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        descriptor.validate()?;
        Ok(descriptor)
    }

    /// Check name uniqueness and graph variant references.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Invalid`] describing the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = HashSet::new();
        for configuration in &self.configurations {
            if !names.insert(configuration.name.as_str()) {
                return Err(invalid(format!("duplicate configuration '{}'", configuration.name)));
            }
            let mut variant_names = HashSet::new();
            for variant in &configuration.variants {
                if !variant_names.insert(variant.name.as_str()) {
                    return Err(invalid(format!(
                        "duplicate variant '{}' in configuration '{}'",
                        variant.name, configuration.name
                    )));
                }
            }
        }

        for name in self.graph_variants.iter().flatten() {
            if !names.contains(name.as_str()) {
                return Err(invalid(format!(
                    "graph variant '{name}' does not name a declared configuration"
                )));
            }
        }
        Ok(())
    }

    /// Identity of the described component.
    pub fn component_id(&self) -> ComponentId {
        match &self.component.project {
            Some(project) => ComponentId::project(
                self.component.build.clone().unwrap_or_else(|| ":".to_string()),
                project,
            ),
            None => ComponentId::module(self.module_version_id()),
        }
    }

    /// Module coordinate of the described component.
    pub fn module_version_id(&self) -> ModuleVersionId {
        ModuleVersionId::new(&self.component.group, &self.component.name, &self.component.version)
    }

    /// Build component metadata whose variants prepare from this descriptor.
    pub fn into_component(self) -> LocalComponentMetadata {
        let component_id = self.component_id();
        let module_version_id = self.module_version_id();
        let attributes = ImmutableAttributes::from(self.component.attributes);

        let configurations: Vec<Arc<VariantMetadata>> = self
            .configurations
            .into_iter()
            .map(|declaration| {
                let attributes = ImmutableAttributes::from(declaration.attributes.clone());
                let name = declaration.name.clone();
                let preparer = DeclaredConfiguration {
                    component: component_id.clone(),
                    declaration,
                };
                Arc::new(VariantMetadata::new(name, attributes, Arc::new(preparer)))
            })
            .collect();

        let graph_variants = match self.graph_variants {
            Some(names) => GraphTraversalVariants::Present(
                names
                    .iter()
                    .filter_map(|name| configurations.iter().find(|c| c.name() == name))
                    .cloned()
                    .collect(),
            ),
            None => GraphTraversalVariants::Absent,
        };

        LocalComponentMetadata::new(
            module_version_id,
            component_id,
            attributes,
            configurations,
            graph_variants,
        )
    }
}

fn invalid(reason: String) -> ConfigError {
    ConfigError::Invalid {
        reason,
    }
}

/// Prepares a configuration from its declaration.
struct DeclaredConfiguration {
    component: ComponentId,
    declaration: ConfigurationDeclaration,
}

impl PrepareConfiguration for DeclaredConfiguration {
    fn prepare(&self, variant: &VariantMetadata) -> anyhow::Result<LocalConfigurationMetadata> {
        let declaration = &self.declaration;
        let artifacts: Vec<ComponentArtifactMetadata> =
            declaration.artifacts.iter().map(|a| a.to_metadata(&self.component)).collect();

        let variants: VariantSet = if declaration.variants.is_empty() {
            std::iter::once(Arc::new(VariantResolveMetadata::new(
                VariantResolveId::new(&declaration.name),
                &declaration.name,
                variant.attributes().clone(),
                artifacts.clone(),
            )))
            .collect()
        } else {
            declaration
                .variants
                .iter()
                .map(|physical| {
                    Arc::new(VariantResolveMetadata::new(
                        VariantResolveId::new(format!("{}/{}", declaration.name, physical.name)),
                        format!("{} {}", declaration.name, physical.name),
                        variant.attributes().overlay(&ImmutableAttributes::from(
                            physical.attributes.clone(),
                        )),
                        physical.artifacts.iter().map(|a| a.to_metadata(&self.component)).collect(),
                    ))
                })
                .collect()
        };

        Ok(LocalConfigurationMetadata::new(
            &declaration.name,
            variant.attributes().clone(),
            artifacts,
            variants,
        ))
    }
}
