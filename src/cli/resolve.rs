//! Resolve a variant's artifact set through the attribute-matching selector.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::common::{
    CommandContext, CommandExecutor, VariantArgs, artifact_json, print_artifact, print_json,
};
use crate::model::ImmutableAttributes;
use crate::selector::{AttributeMatchingSelector, ExcludeSpec};

/// Select physical variants by attribute overrides and print their artifacts.
///
/// # Examples
///
/// ```bash
/// # The variant's own artifacts
/// variant-resolve resolve lib.toml --variant runtimeElements
///
/// # Pick the sources variant published alongside it
/// variant-resolve resolve lib.toml --variant runtimeElements --attribute docs=sources
///
/// # Drop an artifact, or a whole module
/// variant-resolve resolve lib.toml --variant runtimeElements --exclude-artifact lib
/// variant-resolve resolve lib.toml --variant runtimeElements --exclude org.example:lib
/// ```
#[derive(Args, Debug)]
pub struct ResolveCommand {
    #[command(flatten)]
    target: VariantArgs,

    /// Attribute override as key=value (repeatable)
    #[arg(long = "attribute", value_parser = parse_attribute)]
    attributes: Vec<(String, String)>,

    /// Module exclusion as group, group:name or :name (repeatable)
    #[arg(long = "exclude")]
    excludes: Vec<ExcludeSpec>,

    /// Artifact name to exclude (repeatable)
    #[arg(long = "exclude-artifact")]
    excluded_artifacts: Vec<String>,

    /// Fall back to the variant's own physical variants when no candidate matches
    #[arg(long)]
    lenient: bool,
}

fn parse_attribute(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.trim().to_string()))
        }
        _ => Err(format!("expected key=value, got '{s}'")),
    }
}

impl ResolveCommand {
    fn exclusions(&self) -> ExcludeSpec {
        ExcludeSpec::any_of(
            self.excludes
                .iter()
                .cloned()
                .chain(self.excluded_artifacts.iter().map(ExcludeSpec::artifact)),
        )
    }

    fn overrides(&self) -> ImmutableAttributes {
        ImmutableAttributes::of(self.attributes.iter().cloned())
    }
}

impl CommandExecutor for ResolveCommand {
    fn target(&self) -> &VariantArgs {
        &self.target
    }

    fn execute_with_context(self, context: &CommandContext) -> Result<()> {
        let mut selection = context.settings.selection.clone();
        selection.lenient_overrides |= self.lenient;
        let selector = AttributeMatchingSelector::from_settings(&selection);

        let handle = context.state.prepare_for_artifact_resolution(&context.variant)?;
        let resolved = handle.resolve_artifacts(&selector, &self.exclusions(), &self.overrides())?;

        if self.target.is_json() {
            let variants: Vec<serde_json::Value> = resolved
                .variants()
                .iter()
                .map(|variant| {
                    let attributes: serde_json::Map<String, serde_json::Value> = variant
                        .attributes()
                        .iter()
                        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
                        .collect();
                    let artifacts: Vec<_> = variant.artifacts().iter().map(artifact_json).collect();
                    serde_json::json!({
                        "id": variant.variant().id().to_string(),
                        "name": variant.variant().display_name(),
                        "attributes": attributes,
                        "artifacts": artifacts,
                    })
                })
                .collect();
            let artifacts: Vec<serde_json::Value> =
                resolved.artifacts().iter().map(artifact_json).collect();
            return print_json(&serde_json::json!({
                "variants": variants,
                "artifacts": artifacts,
            }));
        }

        for variant in resolved.variants() {
            println!(
                "{} {}",
                variant.variant().display_name().cyan().bold(),
                variant.attributes().to_string().dimmed()
            );
            for artifact in variant.artifacts() {
                print_artifact(artifact);
            }
        }
        println!("{}: {} artifact(s)", "Total".green().bold(), resolved.artifacts().len());
        Ok(())
    }
}
