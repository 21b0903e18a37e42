//! Identifiers for components, module versions and variants.
//!
//! A [`ModuleVersionId`] names a published module coordinate (`group:name:version`),
//! while a [`ComponentId`] names the component a resolution session is working
//! with. The two diverge for project components, which are identified by their
//! location in the build rather than by their publication coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `group:name:version` module coordinate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ModuleVersionId {
    /// Organisation or group the module belongs to
    pub group: String,
    /// Module name within the group
    pub name: String,
    /// Published version string
    pub version: String,
}

impl ModuleVersionId {
    /// Create a new module coordinate.
    pub fn new(
        group: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Whether this coordinate has the given group and name, ignoring version.
    pub fn matches_module(&self, group: &str, name: &str) -> bool {
        self.group == group && self.name == name
    }
}

impl fmt::Display for ModuleVersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.name, self.version)
    }
}

impl FromStr for ModuleVersionId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        match parts.as_slice() {
            [group, name, version]
                if !group.is_empty() && !name.is_empty() && !version.is_empty() =>
            {
                Ok(Self::new(*group, *name, *version))
            }
            _ => Err(format!("expected 'group:name:version', got '{s}'")),
        }
    }
}

/// Identity of a component participating in resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ComponentId {
    /// A component produced by a project in the current build.
    Project {
        /// Path of the (possibly included) build, `:` for the root build
        build_path: String,
        /// Path of the project within that build, e.g. `:lib`
        project_path: String,
    },
    /// A component published under a module coordinate.
    Module {
        /// The published coordinate
        #[serde(flatten)]
        id: ModuleVersionId,
    },
}

impl ComponentId {
    /// Identify a project component.
    pub fn project(build_path: impl Into<String>, project_path: impl Into<String>) -> Self {
        Self::Project {
            build_path: build_path.into(),
            project_path: project_path.into(),
        }
    }

    /// Identify a published module component.
    pub fn module(id: ModuleVersionId) -> Self {
        Self::Module {
            id,
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Project {
                build_path,
                project_path,
            } if build_path == ":" => write!(f, "project {project_path}"),
            Self::Project {
                build_path,
                project_path,
            } => write!(f, "project {build_path}{project_path}"),
            Self::Module {
                id,
            } => write!(f, "{id}"),
        }
    }
}

/// Identity of a graph-level variant, unique within its component.
///
/// This is the key of the per-component variant state cache, so it must stay
/// stable for as long as the owning component state lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariantId(String);

impl VariantId {
    /// Create a variant identity from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
