//! Artifact names and per-component artifact metadata.

use super::identifiers::ComponentId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The name of one physical artifact: `name`, type, extension and optional classifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactName {
    /// Base name of the artifact
    pub name: String,
    /// Artifact type, e.g. `jar` or `source`
    #[serde(rename = "type")]
    pub kind: String,
    /// File extension, without the leading dot
    pub extension: String,
    /// Optional classifier distinguishing secondary artifacts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classifier: Option<String>,
}

impl ArtifactName {
    /// Create a fully specified artifact name.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        extension: impl Into<String>,
        classifier: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            extension: extension.into(),
            classifier,
        }
    }

    /// A `jar` artifact with no classifier.
    ///
    /// ```
    /// use variant_resolve::model::ArtifactName;
    ///
    /// let name = ArtifactName::jar("lib");
    /// assert_eq!(name.to_string(), "lib.jar");
    /// ```
    pub fn jar(name: impl Into<String>) -> Self {
        Self::new(name, "jar", "jar", None)
    }

    /// Return a copy with the given classifier.
    pub fn with_classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = Some(classifier.into());
        self
    }

    /// Return a copy with the given type.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.classifier {
            Some(classifier) => write!(f, "{}-{}.{}", self.name, classifier, self.extension),
            None => write!(f, "{}.{}", self.name, self.extension),
        }
    }
}

/// Identity of a component artifact; the unit of deduplication in resolved sets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentArtifactId {
    /// Owning component
    pub component: ComponentId,
    /// Artifact name within the component
    pub name: ArtifactName,
}

impl fmt::Display for ComponentArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.component)
    }
}

/// Metadata for one artifact published by a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentArtifactMetadata {
    component: ComponentId,
    name: ArtifactName,
    file: Option<PathBuf>,
}

impl ComponentArtifactMetadata {
    /// Describe an artifact of `component`.
    pub fn new(component: ComponentId, name: ArtifactName, file: Option<PathBuf>) -> Self {
        Self {
            component,
            name,
            file,
        }
    }

    /// The owning component.
    pub fn component_id(&self) -> &ComponentId {
        &self.component
    }

    /// The artifact's name.
    pub fn name(&self) -> &ArtifactName {
        &self.name
    }

    /// Build-relative location of the file, when known before transfer.
    pub fn file(&self) -> Option<&PathBuf> {
        self.file.as_ref()
    }

    /// Deduplication identity.
    pub fn id(&self) -> ComponentArtifactId {
        ComponentArtifactId {
            component: self.component.clone(),
            name: self.name.clone(),
        }
    }

    /// Return a copy owned by `component`.
    pub fn with_component(mut self, component: ComponentId) -> Self {
        self.component = component;
        self
    }

    /// Return a copy pointing at `file`.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }
}
