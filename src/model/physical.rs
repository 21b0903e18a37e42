//! Physical variants: the finest-grained unit artifact selection chooses between.
//!
//! One configuration may publish several physical variants, e.g. the compiled
//! classes and the sources of the same library. Artifact selection (by
//! classifier, capability or attribute override) picks among these.

use super::artifact::ComponentArtifactMetadata;
use super::attributes::ImmutableAttributes;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Stable identifier of a physical variant within a component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariantResolveId(String);

impl VariantResolveId {
    /// Create an identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VariantResolveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One physical variant: an attribute-tagged, ordered list of artifacts.
///
/// Equality, hashing and ordering use the identifier only.
#[derive(Debug, Clone)]
pub struct VariantResolveMetadata {
    id: VariantResolveId,
    display_name: String,
    attributes: ImmutableAttributes,
    artifacts: Vec<ComponentArtifactMetadata>,
}

impl VariantResolveMetadata {
    /// Create a physical variant.
    pub fn new(
        id: VariantResolveId,
        display_name: impl Into<String>,
        attributes: ImmutableAttributes,
        artifacts: Vec<ComponentArtifactMetadata>,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            attributes,
            artifacts,
        }
    }

    /// Identifier, unique within the owning component.
    pub fn id(&self) -> &VariantResolveId {
        &self.id
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Attributes of this variant.
    pub fn attributes(&self) -> &ImmutableAttributes {
        &self.attributes
    }

    /// Artifacts in declaration order.
    pub fn artifacts(&self) -> &[ComponentArtifactMetadata] {
        &self.artifacts
    }

    /// Return a copy whose artifacts have been passed through `transform`.
    pub fn map_artifacts<F>(&self, transform: F) -> Self
    where
        F: Fn(ComponentArtifactMetadata) -> ComponentArtifactMetadata,
    {
        Self {
            id: self.id.clone(),
            display_name: self.display_name.clone(),
            attributes: self.attributes.clone(),
            artifacts: self.artifacts.iter().cloned().map(transform).collect(),
        }
    }
}

impl PartialEq for VariantResolveMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for VariantResolveMetadata {}

impl Hash for VariantResolveMetadata {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for VariantResolveMetadata {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VariantResolveMetadata {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// An ordered, deduplicated set of physical variants keyed by identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantSet {
    variants: BTreeMap<VariantResolveId, Arc<VariantResolveMetadata>>,
}

impl VariantSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variant. Returns `false` if a variant with the same id was present.
    pub fn insert(&mut self, variant: Arc<VariantResolveMetadata>) -> bool {
        let id = variant.id().clone();
        if self.variants.contains_key(&id) {
            return false;
        }
        self.variants.insert(id, variant);
        true
    }

    /// Return the union of `self` and `other`; `self`'s entries win on id clashes.
    pub fn union(&self, other: &VariantSet) -> VariantSet {
        let mut merged = self.clone();
        merged.extend(other.iter().cloned());
        merged
    }

    /// Whether a variant with `id` is present.
    pub fn contains(&self, id: &VariantResolveId) -> bool {
        self.variants.contains_key(id)
    }

    /// Look up a variant by id.
    pub fn get(&self, id: &VariantResolveId) -> Option<&Arc<VariantResolveMetadata>> {
        self.variants.get(id)
    }

    /// Number of variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterate in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<VariantResolveMetadata>> {
        self.variants.values()
    }

    /// Identifiers in order.
    pub fn ids(&self) -> impl Iterator<Item = &VariantResolveId> {
        self.variants.keys()
    }
}

impl Extend<Arc<VariantResolveMetadata>> for VariantSet {
    fn extend<T: IntoIterator<Item = Arc<VariantResolveMetadata>>>(&mut self, iter: T) {
        for variant in iter {
            self.insert(variant);
        }
    }
}

impl FromIterator<Arc<VariantResolveMetadata>> for VariantSet {
    fn from_iter<T: IntoIterator<Item = Arc<VariantResolveMetadata>>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
