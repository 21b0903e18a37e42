//! Programmatic builder for test components
//!
//! [`ComponentBuilder`] assembles a [`LocalComponentMetadata`] whose variants
//! prepare from in-memory declarations. Unlike descriptor-backed components it
//! can count preparations and inject preparation failures.

use crate::model::{
    ArtifactName, ComponentArtifactMetadata, ComponentId, GraphTraversalVariants,
    ImmutableAttributes, LocalComponentMetadata, LocalConfigurationMetadata, ModuleVersionId,
    VariantMetadata, VariantResolveId, VariantResolveMetadata, VariantSet,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Debug)]
struct PhysicalSpec {
    name: String,
    attributes: Vec<(String, String)>,
    artifacts: Vec<ArtifactName>,
}

#[derive(Clone, Debug)]
struct ConfigurationSpec {
    name: String,
    attributes: Vec<(String, String)>,
    artifacts: Vec<ArtifactName>,
    variants: Vec<PhysicalSpec>,
    failures: usize,
}

/// Builder for test components.
///
/// Methods that describe artifacts, variants or failures apply to the most
/// recently added configuration.
///
/// # Example
///
/// ```rust,ignore
/// let sources = ArtifactName::jar("lib").with_classifier("sources");
/// let (component, preparations) = ComponentBuilder::project(":lib")
///     .configuration("runtimeElements")
///     .artifact(ArtifactName::jar("lib"))
///     .configuration("sourcesElements")
///     .variant("sources", &[("docs", "sources")], vec![sources])
///     .graph_variants(&["runtimeElements", "sourcesElements"])
///     .build_counted();
/// ```
#[derive(Debug)]
pub struct ComponentBuilder {
    module: ModuleVersionId,
    component_id: ComponentId,
    configurations: Vec<ConfigurationSpec>,
    graph_variants: Option<Vec<String>>,
}

impl ComponentBuilder {
    /// Start a project component `org.example:<name>:1.0` in the root build.
    pub fn project(project_path: &str) -> Self {
        let name = project_path.trim_start_matches(':').replace(':', "-");
        Self {
            module: ModuleVersionId::new("org.example", name, "1.0"),
            component_id: ComponentId::project(":", project_path),
            configurations: Vec::new(),
            graph_variants: None,
        }
    }

    /// Add a configuration.
    pub fn configuration(mut self, name: &str) -> Self {
        self.configurations.push(ConfigurationSpec {
            name: name.to_string(),
            attributes: Vec::new(),
            artifacts: Vec::new(),
            variants: Vec::new(),
            failures: 0,
        });
        self
    }

    /// Set an attribute on the current configuration.
    pub fn attribute(mut self, key: &str, value: &str) -> Self {
        if let Some(configuration) = self.configurations.last_mut() {
            configuration.attributes.extend(owned_pairs(&[(key, value)]));
        }
        self
    }

    /// Add an artifact to the current configuration.
    pub fn artifact(mut self, name: ArtifactName) -> Self {
        if let Some(configuration) = self.configurations.last_mut() {
            configuration.artifacts.push(name);
        }
        self
    }

    /// Add a physical variant to the current configuration.
    pub fn variant(
        mut self,
        name: &str,
        attributes: &[(&str, &str)],
        artifacts: Vec<ArtifactName>,
    ) -> Self {
        if let Some(configuration) = self.configurations.last_mut() {
            configuration.variants.push(PhysicalSpec {
                name: name.to_string(),
                attributes: owned_pairs(attributes),
                artifacts,
            });
        }
        self
    }

    /// Make the current configuration's first `times` preparations fail.
    pub fn failing(mut self, times: usize) -> Self {
        if let Some(configuration) = self.configurations.last_mut() {
            configuration.failures = times;
        }
        self
    }

    /// Publish the named configurations as graph traversal variants.
    pub fn graph_variants(mut self, names: &[&str]) -> Self {
        self.graph_variants = Some(names.iter().map(|name| name.to_string()).collect());
        self
    }

    /// Build the component.
    pub fn build(self) -> LocalComponentMetadata {
        self.build_counted().0
    }

    /// Build the component and a counter of preparation attempts across all its variants.
    pub fn build_counted(self) -> (LocalComponentMetadata, Arc<AtomicUsize>) {
        let attempts = Arc::new(AtomicUsize::new(0));
        let configurations: Vec<Arc<VariantMetadata>> = self
            .configurations
            .iter()
            .map(|spec| self.variant_for(spec, Arc::clone(&attempts)))
            .collect();

        let graph_variants = match &self.graph_variants {
            Some(names) => GraphTraversalVariants::Present(
                names
                    .iter()
                    .filter_map(|name| configurations.iter().find(|c| c.name() == name).cloned())
                    .collect(),
            ),
            None => GraphTraversalVariants::Absent,
        };

        let component = LocalComponentMetadata::new(
            self.module,
            self.component_id,
            ImmutableAttributes::empty(),
            configurations,
            graph_variants,
        );
        (component, attempts)
    }

    fn variant_for(
        &self,
        spec: &ConfigurationSpec,
        attempts: Arc<AtomicUsize>,
    ) -> Arc<VariantMetadata> {
        let owner = self.component_id.clone();
        let declared = spec.clone();
        let remaining_failures = AtomicUsize::new(spec.failures);

        let preparer = move |variant: &VariantMetadata| {
            attempts.fetch_add(1, Ordering::SeqCst);
            let failing = remaining_failures
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| left.checked_sub(1))
                .is_ok();
            if failing {
                anyhow::bail!("injected preparation failure for '{}'", variant.name());
            }
            Ok(prepare(&owner, &declared))
        };

        Arc::new(VariantMetadata::new(
            &spec.name,
            ImmutableAttributes::of(spec.attributes.clone()),
            Arc::new(preparer),
        ))
    }
}

fn owned_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn prepare(owner: &ComponentId, spec: &ConfigurationSpec) -> LocalConfigurationMetadata {
    let to_metadata =
        |name: &ArtifactName| ComponentArtifactMetadata::new(owner.clone(), name.clone(), None);
    let attributes = ImmutableAttributes::of(spec.attributes.clone());
    let artifacts: Vec<ComponentArtifactMetadata> =
        spec.artifacts.iter().map(to_metadata).collect();

    let variants: VariantSet = if spec.variants.is_empty() {
        [Arc::new(VariantResolveMetadata::new(
            VariantResolveId::new(&spec.name),
            &spec.name,
            attributes.clone(),
            artifacts.clone(),
        ))]
        .into_iter()
        .collect()
    } else {
        spec.variants
            .iter()
            .map(|physical| {
                let overrides = ImmutableAttributes::of(physical.attributes.clone());
                Arc::new(VariantResolveMetadata::new(
                    VariantResolveId::new(format!("{}/{}", spec.name, physical.name)),
                    &physical.name,
                    attributes.overlay(&overrides),
                    physical.artifacts.iter().map(to_metadata).collect(),
                ))
            })
            .collect()
    };

    LocalConfigurationMetadata::new(&spec.name, attributes, artifacts, variants)
}
