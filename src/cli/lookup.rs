//! Look up a single artifact by name.

use anyhow::Result;
use clap::Args;

use super::common::{
    CommandContext, CommandExecutor, VariantArgs, artifact_json, print_artifact, print_json,
};
use crate::model::ArtifactName;

/// Find one artifact of the variant by exact name.
///
/// Fails when no artifact matches; an absent artifact is never printed as empty output.
#[derive(Args, Debug)]
pub struct LookupCommand {
    #[command(flatten)]
    target: VariantArgs,

    /// Artifact base name
    #[arg(long)]
    artifact: String,

    /// Artifact classifier
    #[arg(long)]
    classifier: Option<String>,

    /// Artifact type
    #[arg(long = "type", default_value = "jar")]
    kind: String,

    /// Artifact extension; defaults to the type
    #[arg(long)]
    extension: Option<String>,
}

impl LookupCommand {
    fn artifact_name(&self) -> ArtifactName {
        let extension = self.extension.clone().unwrap_or_else(|| self.kind.clone());
        ArtifactName::new(&self.artifact, &self.kind, extension, self.classifier.clone())
    }
}

impl CommandExecutor for LookupCommand {
    fn target(&self) -> &VariantArgs {
        &self.target
    }

    fn execute_with_context(self, context: &CommandContext) -> Result<()> {
        let handle = context.state.prepare_for_artifact_resolution(&context.variant)?;
        let artifact = handle.resolve_artifact(&self.artifact_name())?;

        if self.target.is_json() {
            return print_json(&artifact_json(artifact));
        }
        print_artifact(artifact);
        Ok(())
    }
}
