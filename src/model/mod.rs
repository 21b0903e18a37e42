//! Component, variant and artifact metadata.
//!
//! Everything in this module is immutable once built, with one exception:
//! [`VariantMetadata`] memoizes its prepared [`LocalConfigurationMetadata`].
//!
//! - [`identifiers`] - module coordinates, component and variant identities
//! - [`attributes`] - immutable attribute containers and overlays
//! - [`artifact`] - artifact names and per-component artifact metadata
//! - [`physical`] - physical variants and ordered variant sets
//! - [`configuration`] - the prepared form of a variant
//! - [`variant`] - graph-level variants and their preparation strategies
//! - [`component`] - component metadata and identity-preserving copies

pub mod artifact;
pub mod attributes;
pub mod component;
pub mod configuration;
pub mod identifiers;
pub mod physical;
pub mod variant;

pub use artifact::{ArtifactName, ComponentArtifactId, ComponentArtifactMetadata};
pub use attributes::ImmutableAttributes;
pub use component::{ArtifactTransformer, GraphTraversalVariants, LocalComponentMetadata};
pub use configuration::LocalConfigurationMetadata;
pub use identifiers::{ComponentId, ModuleVersionId, VariantId};
pub use physical::{VariantResolveId, VariantResolveMetadata, VariantSet};
pub use variant::{PrepareConfiguration, VariantMetadata};
