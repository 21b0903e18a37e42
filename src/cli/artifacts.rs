//! List the artifacts of a prepared variant.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{
    CommandContext, CommandExecutor, VariantArgs, artifact_json, print_artifact, print_json,
};

/// Print every artifact of the variant's prepared configuration, in declaration order.
#[derive(Args, Debug)]
pub struct ArtifactsCommand {
    #[command(flatten)]
    target: VariantArgs,
}

impl CommandExecutor for ArtifactsCommand {
    fn target(&self) -> &VariantArgs {
        &self.target
    }

    fn execute_with_context(self, context: &CommandContext) -> Result<()> {
        let handle = context.state.resolve_artifacts_for(&context.variant)?;
        let artifacts = handle.artifacts();

        if self.target.is_json() {
            let items: Vec<serde_json::Value> = artifacts.iter().map(artifact_json).collect();
            return print_json(&serde_json::Value::Array(items));
        }

        println!(
            "{} {} ({})",
            "Artifacts of".bold(),
            context.variant.name().cyan(),
            context.state.metadata().component_id()
        );
        for artifact in artifacts {
            print_artifact(artifact);
        }
        println!("{}: {} artifact(s)", "Total".green().bold(), artifacts.len());
        Ok(())
    }
}
