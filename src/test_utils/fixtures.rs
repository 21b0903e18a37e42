//! Test fixtures for component descriptors and settings files

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Test fixture for component descriptor files
#[derive(Clone, Debug)]
pub struct DescriptorFixture {
    pub content: String,
    pub name: String,
}

impl DescriptorFixture {
    /// Project component with a single runtime configuration
    pub fn basic() -> Self {
        Self {
            name: "basic".to_string(),
            content: r#"
[component]
group = "org.example"
name = "lib"
version = "1.0"
project = ":lib"

[[configurations]]
name = "runtimeElements"
attributes = { usage = "runtime" }

[[configurations.artifacts]]
name = "lib"
file = "build/libs/lib.jar"

[[configurations]]
name = "apiElements"
attributes = { usage = "api" }

[[configurations.artifacts]]
name = "lib-api"
"#
            .trim()
            .to_string(),
        }
    }

    /// Component publishing runtime and sources variants for graph traversal
    pub fn with_graph_variants() -> Self {
        Self {
            name: "with_graph_variants".to_string(),
            content: r#"
graph-variants = ["runtimeElements", "sourcesElements"]

[component]
group = "org.example"
name = "lib"
version = "1.0"

[[configurations]]
name = "runtimeElements"
attributes = { category = "library", usage = "runtime" }

[[configurations.artifacts]]
name = "lib"

[[configurations]]
name = "sourcesElements"
attributes = { category = "documentation", docs = "sources" }

[[configurations.artifacts]]
name = "lib"
classifier = "sources"
"#
            .trim()
            .to_string(),
        }
    }

    /// Descriptor with invalid TOML syntax
    pub fn invalid_syntax() -> Self {
        Self {
            name: "invalid_syntax".to_string(),
            content: r#"
[component
group = "org.example"
"#
            .trim()
            .to_string(),
        }
    }

    /// Descriptor naming a graph variant that is not declared
    pub fn unknown_graph_variant() -> Self {
        Self {
            name: "unknown_graph_variant".to_string(),
            content: r#"
graph-variants = ["runtimeElements", "javadocElements"]

[component]
group = "org.example"
name = "lib"
version = "1.0"

[[configurations]]
name = "runtimeElements"
"#
            .trim()
            .to_string(),
        }
    }

    /// Write the descriptor to `<dir>/<name>.toml`.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(format!("{}.toml", self.name));
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write descriptor fixture {}", path.display()))?;
        Ok(path)
    }
}

/// Test fixture for resolution settings files
#[derive(Clone, Debug)]
pub struct SettingsFixture {
    pub content: String,
}

impl SettingsFixture {
    /// Settings enabling lenient override matching
    pub fn lenient() -> Self {
        Self {
            content: r#"
[selection]
lenient_overrides = true
"#
            .trim()
            .to_string(),
        }
    }

    /// Settings with a shard amount DashMap rejects
    pub fn invalid_shards() -> Self {
        Self {
            content: r#"
[cache]
shard_amount = 3
"#
            .trim()
            .to_string(),
        }
    }

    /// Write the settings to `<dir>/resolve.toml`.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join("resolve.toml");
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write settings fixture {}", path.display()))?;
        Ok(path)
    }
}
