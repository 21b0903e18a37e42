//! Graph-level variant metadata with memoized preparation.
//!
//! A [`VariantMetadata`] is what graph resolution selects: a named,
//! attribute-tagged usage of a component. Turning it into a
//! [`LocalConfigurationMetadata`] is expensive, so the result is memoized inside
//! the variant. The memo is guarded by the variant's own mutex, independent of
//! any cache the variant is stored in, and only successful preparations are
//! remembered: a failure leaves the memo empty so the next call retries.

use super::attributes::ImmutableAttributes;
use super::configuration::LocalConfigurationMetadata;
use super::identifiers::VariantId;
use crate::core::ResolveError;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

/// Strategy that turns a variant into its prepared configuration.
///
/// Implementations may be called more than once for the same variant (for
/// instance after a failure) and must produce equivalent results each time.
/// They must not call back into the component state that owns the variant.
pub trait PrepareConfiguration: Send + Sync {
    /// Build the prepared configuration for `variant`.
    fn prepare(&self, variant: &VariantMetadata) -> anyhow::Result<LocalConfigurationMetadata>;
}

impl<F> PrepareConfiguration for F
where
    F: Fn(&VariantMetadata) -> anyhow::Result<LocalConfigurationMetadata> + Send + Sync,
{
    fn prepare(&self, variant: &VariantMetadata) -> anyhow::Result<LocalConfigurationMetadata> {
        self(variant)
    }
}

/// A graph-level variant of a component.
pub struct VariantMetadata {
    id: VariantId,
    name: String,
    attributes: ImmutableAttributes,
    preparer: Arc<dyn PrepareConfiguration>,
    prepared: Mutex<Option<Arc<LocalConfigurationMetadata>>>,
}

impl VariantMetadata {
    /// Create a variant whose identity is its name.
    pub fn new(
        name: impl Into<String>,
        attributes: ImmutableAttributes,
        preparer: Arc<dyn PrepareConfiguration>,
    ) -> Self {
        let name = name.into();
        Self::with_id(VariantId::new(name.clone()), name, attributes, preparer)
    }

    /// Create a variant with an explicit identity.
    pub fn with_id(
        id: VariantId,
        name: impl Into<String>,
        attributes: ImmutableAttributes,
        preparer: Arc<dyn PrepareConfiguration>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            attributes,
            preparer,
            prepared: Mutex::new(None),
        }
    }

    /// Identity, unique within the owning component.
    pub fn id(&self) -> &VariantId {
        &self.id
    }

    /// Variant name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Graph-level attributes.
    pub fn attributes(&self) -> &ImmutableAttributes {
        &self.attributes
    }

    /// Whether a successful preparation has been memoized.
    pub fn is_prepared(&self) -> bool {
        self.prepared.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }

    /// Prepare this variant for artifact resolution.
    ///
    /// The first successful call runs the preparation strategy; later calls
    /// return the memoized configuration. Concurrent callers for the same
    /// variant wait for the one running the strategy.
    pub fn prepare_to_resolve_artifacts(
        &self,
    ) -> Result<Arc<LocalConfigurationMetadata>, ResolveError> {
        // The memo is only ever replaced wholesale, so a poisoned lock still holds a valid value.
        let mut prepared = self.prepared.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(configuration) = prepared.as_ref() {
            return Ok(Arc::clone(configuration));
        }

        tracing::debug!(target: "variant", "preparing variant '{}'", self.id);
        let configuration = self.preparer.prepare(self).map_err(|source| {
            ResolveError::PreparationFailed {
                variant: self.id.to_string(),
                source,
            }
        })?;
        let configuration = Arc::new(configuration);
        *prepared = Some(Arc::clone(&configuration));
        Ok(configuration)
    }
}

impl fmt::Debug for VariantMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariantMetadata")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("attributes", &self.attributes)
            .field("prepared", &self.is_prepared())
            .finish_non_exhaustive()
    }
}
