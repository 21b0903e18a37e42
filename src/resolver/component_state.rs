//! Per-component entry point for variant artifact resolution.

use super::variant_state::VariantArtifactResolveState;
use crate::cache::PreparedStateCache;
use crate::config::CacheSettings;
use crate::core::ResolveError;
use crate::model::{
    ArtifactTransformer, ComponentId, LocalComponentMetadata, ModuleVersionId, VariantId,
    VariantMetadata,
};
use std::sync::Arc;

/// Cache of per-variant states, keyed by variant identity.
pub type VariantStateCache = PreparedStateCache<VariantId, VariantArtifactResolveState>;

/// Resolution state for one component.
///
/// Every variant request is routed through a [`VariantStateCache`], so each
/// variant of the component is prepared and wrapped at most once for the
/// lifetime of this value, and every caller observes the same
/// [`VariantArtifactResolveState`]. The state is `Send + Sync` and meant to be
/// shared between resolution threads.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use variant_resolve::config::ComponentDescriptor;
/// use variant_resolve::resolver::ComponentResolveState;
///
/// let descriptor = ComponentDescriptor::from_toml_str(r#"
/// [component]
/// group = "org.example"
/// name = "lib"
/// version = "1.0"
///
/// [[configurations]]
/// name = "runtimeElements"
///
/// [[configurations.artifacts]]
/// name = "lib"
/// "#).unwrap();
///
/// let state = ComponentResolveState::new(descriptor.into_component());
/// let variant = Arc::clone(state.metadata().configuration("runtimeElements").unwrap());
///
/// let first = state.prepare_for_artifact_resolution(&variant).unwrap();
/// let second = state.resolve_artifacts_for(&variant).unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// assert_eq!(first.artifacts().len(), 1);
/// ```
#[derive(Debug)]
pub struct ComponentResolveState {
    metadata: Arc<LocalComponentMetadata>,
    variants: VariantStateCache,
}

impl ComponentResolveState {
    /// Create resolution state for `metadata` with default cache sizing.
    pub fn new(metadata: impl Into<Arc<LocalComponentMetadata>>) -> Self {
        Self {
            metadata: metadata.into(),
            variants: VariantStateCache::new(),
        }
    }

    /// Create resolution state with a cache sized by `settings`.
    pub fn with_settings(
        metadata: impl Into<Arc<LocalComponentMetadata>>,
        settings: &CacheSettings,
    ) -> Self {
        Self {
            metadata: metadata.into(),
            variants: VariantStateCache::with_settings(settings),
        }
    }

    /// The component's module coordinate.
    pub fn module_version_id(&self) -> &ModuleVersionId {
        self.metadata.module_version_id()
    }

    /// The component's metadata.
    pub fn metadata(&self) -> &Arc<LocalComponentMetadata> {
        &self.metadata
    }

    /// Derive component metadata with a new identity and transformed artifacts.
    ///
    /// See [`LocalComponentMetadata::copy`]. This state and its cache are not
    /// affected; wrap the result in a new [`ComponentResolveState`] to resolve it.
    pub fn copy(
        &self,
        component_id: ComponentId,
        transformer: ArtifactTransformer,
    ) -> LocalComponentMetadata {
        tracing::debug!(
            target: "variant_cache",
            "copying {} as {}",
            self.metadata.component_id(),
            component_id
        );
        self.metadata.copy(component_id, transformer)
    }

    /// The artifact-graph view of `variant`, preparing it on first request.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::UnknownVariant`] if the variant is not declared by
    ///   this component
    /// - [`ResolveError::PreparationFailed`] if preparation fails; nothing is
    ///   cached and a later call retries
    pub fn resolve_artifacts_for(
        &self,
        variant: &VariantMetadata,
    ) -> Result<Arc<VariantArtifactResolveState>, ResolveError> {
        self.state_for(variant)
    }

    /// The resolution handle for `variant`, preparing it on first request.
    ///
    /// Returns the same instance as [`resolve_artifacts_for`](Self::resolve_artifacts_for).
    ///
    /// # Errors
    ///
    /// Same as [`resolve_artifacts_for`](Self::resolve_artifacts_for).
    pub fn prepare_for_artifact_resolution(
        &self,
        variant: &VariantMetadata,
    ) -> Result<Arc<VariantArtifactResolveState>, ResolveError> {
        self.state_for(variant)
    }

    /// Number of variant states published so far.
    pub fn cached_variant_count(&self) -> usize {
        self.variants.len()
    }

    fn state_for(
        &self,
        variant: &VariantMetadata,
    ) -> Result<Arc<VariantArtifactResolveState>, ResolveError> {
        let owned = self.metadata.variant(variant.id()).ok_or_else(|| {
            ResolveError::UnknownVariant {
                component: self.metadata.component_id().to_string(),
                variant: variant.id().to_string(),
            }
        })?;

        self.variants.get_or_try_insert_with(owned.id().clone(), || {
            VariantArtifactResolveState::prepare(Arc::clone(&self.metadata), Arc::clone(owned))
        })
    }
}
