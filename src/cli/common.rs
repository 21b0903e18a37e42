//! Common utilities and traits for CLI commands

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::{ComponentDescriptor, ResolutionSettings};
use crate::model::{ComponentArtifactMetadata, VariantMetadata};
use crate::resolver::ComponentResolveState;

/// Common trait for CLI command execution pattern
pub trait CommandExecutor: Sized {
    /// Arguments locating the descriptor and variant
    fn target(&self) -> &VariantArgs;

    /// Load the descriptor named by [`target`](Self::target) and run the command
    fn execute(self, settings: &ResolutionSettings) -> Result<()> {
        let context = CommandContext::load(self.target(), settings)?;
        self.execute_with_context(&context)
    }

    /// Run the command against a loaded component
    fn execute_with_context(self, context: &CommandContext) -> Result<()>;
}

/// Arguments shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct VariantArgs {
    /// Path to the component descriptor (TOML)
    pub descriptor: PathBuf,

    /// Name of the graph-selected variant (configuration)
    #[arg(long)]
    pub variant: String,

    /// Output format (text, json)
    #[arg(short = 'f', long, default_value = "text")]
    pub format: String,
}

impl VariantArgs {
    /// Reject unsupported output formats.
    pub fn validate(&self) -> Result<()> {
        match self.format.as_str() {
            "text" | "json" => Ok(()),
            _ => Err(anyhow::anyhow!(
                "Invalid format '{}'. Valid formats are: text, json",
                self.format
            )),
        }
    }

    /// Whether JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

/// A loaded component with the variant a command operates on
pub struct CommandContext {
    /// Path the descriptor was read from
    pub descriptor_path: PathBuf,
    /// Effective settings
    pub settings: ResolutionSettings,
    /// Resolution state of the described component
    pub state: ComponentResolveState,
    /// The selected variant
    pub variant: Arc<VariantMetadata>,
}

impl CommandContext {
    /// Load the descriptor and locate the requested variant.
    pub fn load(args: &VariantArgs, settings: &ResolutionSettings) -> Result<Self> {
        args.validate()?;
        let descriptor = load_descriptor(&args.descriptor)?;
        let state =
            ComponentResolveState::with_settings(descriptor.into_component(), &settings.cache);

        let variant = state.metadata().configuration(&args.variant).cloned().ok_or_else(|| {
            let known: Vec<&str> =
                state.metadata().configurations().iter().map(|c| c.name()).collect();
            anyhow::anyhow!(
                "Variant '{}' is not declared in {} (declared: {})",
                args.variant,
                args.descriptor.display(),
                known.join(", ")
            )
        })?;

        Ok(Self {
            descriptor_path: args.descriptor.clone(),
            settings: settings.clone(),
            state,
            variant,
        })
    }
}

fn load_descriptor(path: &Path) -> Result<ComponentDescriptor> {
    if !path.exists() {
        return Err(anyhow::anyhow!("Descriptor file {} not found", path.display()));
    }
    ComponentDescriptor::load(path)
        .with_context(|| format!("Failed to load component descriptor {}", path.display()))
}

/// JSON form of an artifact.
pub fn artifact_json(artifact: &ComponentArtifactMetadata) -> serde_json::Value {
    let name = artifact.name();
    let mut obj = serde_json::json!({
        "component": artifact.component_id().to_string(),
        "name": name.name,
        "type": name.kind,
        "extension": name.extension,
        "file_name": name.to_string(),
    });
    if let Some(ref classifier) = name.classifier {
        obj["classifier"] = serde_json::Value::String(classifier.clone());
    }
    if let Some(file) = artifact.file() {
        obj["file"] = serde_json::Value::String(file.display().to_string());
    }
    obj
}

/// Print an artifact as one line of text.
pub fn print_artifact(artifact: &ComponentArtifactMetadata) {
    match artifact.file() {
        Some(file) => println!(
            "  {} {}",
            artifact.name().to_string().green(),
            format!("({})", file.display()).dimmed()
        ),
        None => println!("  {}", artifact.name().to_string().green()),
    }
}

/// Print a JSON value.
pub fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
