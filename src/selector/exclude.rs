//! Exclusion rules applied while selecting artifacts.
//!
//! An [`ExcludeSpec`] is a predicate over module identity and artifact name.
//! Module-level rules remove a component's artifacts wholesale; artifact-level
//! rules remove individual artifacts.

use crate::model::{ArtifactName, ModuleVersionId};
use std::fmt;
use std::str::FromStr;

/// A rule set filtering modules and artifacts out of a resolved set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExcludeSpec {
    /// Excludes nothing.
    #[default]
    Nothing,
    /// Excludes everything.
    Everything,
    /// Excludes every module of a group.
    Group(String),
    /// Excludes every module with this name, in any group.
    Module(String),
    /// Excludes one module.
    ModuleId {
        /// Group of the excluded module
        group: String,
        /// Name of the excluded module
        name: String,
    },
    /// Excludes artifacts by name, optionally narrowed by type and extension.
    Artifact {
        /// Artifact base name
        name: String,
        /// Only artifacts of this type, if set
        kind: Option<String>,
        /// Only artifacts with this extension, if set
        extension: Option<String>,
    },
    /// Excludes what any member excludes.
    AnyOf(Vec<ExcludeSpec>),
    /// Excludes what every member excludes. Empty excludes nothing.
    AllOf(Vec<ExcludeSpec>),
}

impl ExcludeSpec {
    /// Exclude artifacts with this base name regardless of type or extension.
    pub fn artifact(name: impl Into<String>) -> Self {
        Self::Artifact {
            name: name.into(),
            kind: None,
            extension: None,
        }
    }

    /// Combine rules so that anything one of them excludes is excluded.
    ///
    /// `Nothing` members are dropped and an `Everything` member absorbs the rest.
    pub fn any_of(specs: impl IntoIterator<Item = ExcludeSpec>) -> Self {
        let mut members = Vec::new();
        for spec in specs {
            match spec {
                Self::Nothing => {}
                Self::Everything => return Self::Everything,
                Self::AnyOf(nested) => members.extend(nested),
                other => members.push(other),
            }
        }
        match members.len() {
            0 => Self::Nothing,
            1 => members.remove(0),
            _ => Self::AnyOf(members),
        }
    }

    /// Whether the whole module is excluded.
    pub fn excludes_module(&self, module: &ModuleVersionId) -> bool {
        match self {
            Self::Nothing => false,
            Self::Everything => true,
            Self::Group(group) => module.group == *group,
            Self::Module(name) => module.name == *name,
            Self::ModuleId {
                group,
                name,
            } => module.matches_module(group, name),
            Self::Artifact { .. } => false,
            Self::AnyOf(specs) => specs.iter().any(|s| s.excludes_module(module)),
            Self::AllOf(specs) => {
                !specs.is_empty() && specs.iter().all(|s| s.excludes_module(module))
            }
        }
    }

    /// Whether one artifact of `module` is excluded.
    pub fn excludes_artifact(&self, module: &ModuleVersionId, artifact: &ArtifactName) -> bool {
        match self {
            Self::Artifact {
                name,
                kind,
                extension,
            } => {
                artifact.name == *name
                    && kind.as_ref().is_none_or(|k| *k == artifact.kind)
                    && extension.as_ref().is_none_or(|e| *e == artifact.extension)
            }
            Self::AnyOf(specs) => specs.iter().any(|s| s.excludes_artifact(module, artifact)),
            Self::AllOf(specs) => {
                !specs.is_empty() && specs.iter().all(|s| s.excludes_artifact(module, artifact))
            }
            module_level => module_level.excludes_module(module),
        }
    }
}

impl FromStr for ExcludeSpec {
    type Err = String;

    /// Parse `group`, `group:name` or `:name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            None if !s.is_empty() => Ok(Self::Group(s.to_string())),
            Some(("", name)) if !name.is_empty() => Ok(Self::Module(name.to_string())),
            Some((group, name)) if !group.is_empty() && !name.is_empty() && !name.contains(':') => {
                Ok(Self::ModuleId {
                    group: group.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(format!("expected 'group', 'group:name' or ':name', got '{s}'")),
        }
    }
}

impl fmt::Display for ExcludeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => f.write_str("nothing"),
            Self::Everything => f.write_str("everything"),
            Self::Group(group) => write!(f, "group {group}"),
            Self::Module(name) => write!(f, "module {name}"),
            Self::ModuleId {
                group,
                name,
            } => write!(f, "module {group}:{name}"),
            Self::Artifact {
                name,
                ..
            } => write!(f, "artifact {name}"),
            Self::AnyOf(specs) | Self::AllOf(specs) => {
                let joiner = if matches!(self, Self::AnyOf(_)) { " or " } else { " and " };
                let parts: Vec<String> = specs.iter().map(ToString::to_string).collect();
                write!(f, "({})", parts.join(joiner))
            }
        }
    }
}
