//! Configuration for variant artifact resolution.
//!
//! Two kinds of TOML file feed the crate:
//!
//! 1. **Settings** ([`ResolutionSettings`]) - cache sizing and selector
//!    behaviour. Optional; every value has a default.
//! 2. **Component descriptors** ([`ComponentDescriptor`]) - a declarative
//!    description of a component's configurations, artifacts and physical
//!    variants, turned into [`crate::model::LocalComponentMetadata`].
//!
//! # Modules
//!
//! - `parser` - generic TOML parsing with file context in errors
//! - `settings` - resolution settings and their validation
//! - `descriptor` - component descriptors and declaration-backed preparation

mod descriptor;
mod parser;
mod settings;

pub use descriptor::{
    ArtifactDeclaration, ComponentDeclaration, ComponentDescriptor, ConfigurationDeclaration,
    PhysicalVariantDeclaration,
};
pub use parser::parse_config;
pub use settings::{CONFIG_ENV_VAR, CacheSettings, ResolutionSettings, SelectionSettings};
