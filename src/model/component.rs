//! Component metadata and identity-preserving copies.

use super::artifact::ComponentArtifactMetadata;
use super::attributes::ImmutableAttributes;
use super::configuration::LocalConfigurationMetadata;
use super::identifiers::{ComponentId, ModuleVersionId, VariantId};
use super::variant::{PrepareConfiguration, VariantMetadata};
use std::collections::HashMap;
use std::sync::Arc;

/// Function applied to every artifact when deriving a component with
/// [`LocalComponentMetadata::copy`].
pub type ArtifactTransformer =
    Arc<dyn Fn(ComponentArtifactMetadata) -> ComponentArtifactMetadata + Send + Sync>;

/// The component-wide variant enumeration used to widen artifact selection.
///
/// Graph-level selection picks one configuration per component, but a
/// component may spread its physical variants across several sibling
/// variants. When that enumeration is published, artifact selection sees all
/// of it.
#[derive(Debug, Clone, Default)]
pub enum GraphTraversalVariants {
    /// The component publishes a graph traversal enumeration.
    Present(Vec<Arc<VariantMetadata>>),
    /// It does not; selection is limited to the chosen configuration.
    #[default]
    Absent,
}

impl GraphTraversalVariants {
    /// Whether an enumeration is published.
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}

/// A resolved component: its identity, configurations and optional graph traversal variants.
#[derive(Debug, Clone)]
pub struct LocalComponentMetadata {
    module_version_id: ModuleVersionId,
    component_id: ComponentId,
    attributes: ImmutableAttributes,
    configurations: Vec<Arc<VariantMetadata>>,
    graph_variants: GraphTraversalVariants,
}

impl LocalComponentMetadata {
    /// Create component metadata.
    pub fn new(
        module_version_id: ModuleVersionId,
        component_id: ComponentId,
        attributes: ImmutableAttributes,
        configurations: Vec<Arc<VariantMetadata>>,
        graph_variants: GraphTraversalVariants,
    ) -> Self {
        Self {
            module_version_id,
            component_id,
            attributes,
            configurations,
            graph_variants,
        }
    }

    /// The component's module coordinate.
    pub fn module_version_id(&self) -> &ModuleVersionId {
        &self.module_version_id
    }

    /// The component's identity.
    pub fn component_id(&self) -> &ComponentId {
        &self.component_id
    }

    /// Component-level attributes.
    pub fn attributes(&self) -> &ImmutableAttributes {
        &self.attributes
    }

    /// Declared configurations in declaration order.
    pub fn configurations(&self) -> &[Arc<VariantMetadata>] {
        &self.configurations
    }

    /// Look up a declared configuration by name.
    pub fn configuration(&self, name: &str) -> Option<&Arc<VariantMetadata>> {
        self.configurations.iter().find(|c| c.name() == name)
    }

    /// The graph traversal enumeration, if published.
    pub fn variants_for_graph_traversal(&self) -> &GraphTraversalVariants {
        &self.graph_variants
    }

    /// Find a variant of this component by identity, searching configurations
    /// first and graph traversal variants second.
    pub fn variant(&self, id: &VariantId) -> Option<&Arc<VariantMetadata>> {
        self.configurations.iter().find(|v| v.id() == id).or_else(|| match &self.graph_variants {
            GraphTraversalVariants::Present(variants) => variants.iter().find(|v| v.id() == id),
            GraphTraversalVariants::Absent => None,
        })
    }

    /// Derive a component with a new identity whose artifacts pass through `transformer`.
    ///
    /// The receiver is not modified. Copied variants keep their identities and
    /// prepare lazily by transforming the source variant's (memoized)
    /// configuration, so nothing is re-resolved up front. A variant that is both
    /// a configuration and a graph traversal variant maps to a single copy.
    pub fn copy(&self, component_id: ComponentId, transformer: ArtifactTransformer) -> Self {
        let mut copied: HashMap<VariantId, Arc<VariantMetadata>> = HashMap::new();
        let mut copy_variant = |source: &Arc<VariantMetadata>| {
            Arc::clone(
                copied
                    .entry(source.id().clone())
                    .or_insert_with(|| transformed_variant(source, &transformer)),
            )
        };

        let configurations = self.configurations.iter().map(&mut copy_variant).collect();
        let graph_variants = match &self.graph_variants {
            GraphTraversalVariants::Present(variants) => {
                GraphTraversalVariants::Present(variants.iter().map(&mut copy_variant).collect())
            }
            GraphTraversalVariants::Absent => GraphTraversalVariants::Absent,
        };

        Self {
            module_version_id: self.module_version_id.clone(),
            component_id,
            attributes: self.attributes.clone(),
            configurations,
            graph_variants,
        }
    }
}

fn transformed_variant(
    source: &Arc<VariantMetadata>,
    transformer: &ArtifactTransformer,
) -> Arc<VariantMetadata> {
    let preparer = TransformedPreparation {
        source: Arc::clone(source),
        transformer: Arc::clone(transformer),
    };
    Arc::new(VariantMetadata::with_id(
        source.id().clone(),
        source.name(),
        source.attributes().clone(),
        Arc::new(preparer),
    ))
}

/// Prepares a copied variant from its source variant.
struct TransformedPreparation {
    source: Arc<VariantMetadata>,
    transformer: ArtifactTransformer,
}

impl PrepareConfiguration for TransformedPreparation {
    fn prepare(&self, _variant: &VariantMetadata) -> anyhow::Result<LocalConfigurationMetadata> {
        let configuration = self.source.prepare_to_resolve_artifacts()?;
        Ok(configuration.map_artifacts(|artifact| (self.transformer)(artifact)))
    }
}
