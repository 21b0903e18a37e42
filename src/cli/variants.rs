//! Show the candidate physical variants offered to artifact selection.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{CommandContext, CommandExecutor, VariantArgs, print_json};
use crate::resolver::aggregator;

/// Print the candidate universe for the variant.
///
/// For a component publishing graph traversal variants this is every physical
/// variant of every graph traversal variant; otherwise it is the variant's own.
#[derive(Args, Debug)]
pub struct VariantsCommand {
    #[command(flatten)]
    target: VariantArgs,
}

impl CommandExecutor for VariantsCommand {
    fn target(&self) -> &VariantArgs {
        &self.target
    }

    fn execute_with_context(self, context: &CommandContext) -> Result<()> {
        let handle = context.state.prepare_for_artifact_resolution(&context.variant)?;
        let component = context.state.metadata();
        let candidates = aggregator::candidate_variants(component, handle.configuration())?;
        let graph_traversal = component.variants_for_graph_traversal().is_present();

        if self.target.is_json() {
            let items: Vec<serde_json::Value> = candidates
                .iter()
                .map(|variant| {
                    serde_json::json!({
                        "id": variant.id().to_string(),
                        "name": variant.display_name(),
                        "attributes": variant.attributes().to_string(),
                        "artifacts": variant.artifacts().len(),
                    })
                })
                .collect();
            return print_json(&serde_json::json!({
                "graph_traversal": graph_traversal,
                "candidates": items,
            }));
        }

        let scope = if graph_traversal {
            "graph traversal variants"
        } else {
            "own variants"
        };
        println!(
            "{} {} ({})",
            "Candidates for".bold(),
            context.variant.name().cyan(),
            scope
        );
        for variant in candidates.iter() {
            println!(
                "  {} {}",
                variant.id().to_string().green(),
                variant.attributes().to_string().dimmed()
            );
        }
        println!("{}: {} variant(s)", "Total".green().bold(), candidates.len());
        Ok(())
    }
}
