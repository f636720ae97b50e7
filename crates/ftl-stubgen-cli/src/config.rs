//! stubgen.toml parsing and validation

use anyhow::{Context, Result};
use ftl_stubgen::GeneratorConfig;
use ftl_stubgen::naming::is_package_name;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// stubgen.toml structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StubgenConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Directory generated units are written under
    #[serde(default)]
    pub directory: Option<PathBuf>,

    /// Leave files alone when their content would not change
    #[serde(default = "default_skip_unchanged")]
    pub skip_unchanged: bool,
}

fn default_skip_unchanged() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            directory: None,
            skip_unchanged: default_skip_unchanged(),
        }
    }
}

impl StubgenConfig {
    /// Load config from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

        Self::from_str(&content)
    }

    /// Parse config from string
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Validate the config
    pub fn validate(&self) -> Result<()> {
        let prefix = &self.generator.package_prefix;
        if prefix.is_empty() {
            anyhow::bail!("Package prefix cannot be empty");
        }
        if !is_package_name(prefix) {
            anyhow::bail!("Package prefix '{}' is not a dotted identifier", prefix);
        }

        if let Some(directory) = &self.output.directory
            && directory.as_os_str().is_empty()
        {
            anyhow::bail!("Output directory cannot be empty");
        }

        Ok(())
    }
}
