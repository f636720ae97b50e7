//! Generator configuration

use serde::{Deserialize, Serialize};

/// How the generator treats references to other declarations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReferencePolicy {
    /// Assume an upstream pass already validated every reference
    #[default]
    Trust,

    /// Fail with `UnresolvedReference` when a reference does not resolve
    Validate,
}

/// Configuration for a generator run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Package prefix for generated units; module `payments` lands in `<prefix>.payments`
    pub package_prefix: String,

    /// Provenance header placed at the top of every unit, one comment line per line
    pub header: String,

    /// Reference handling
    pub reference_policy: ReferencePolicy,
}

fn default_package_prefix() -> String {
    "ftl".to_string()
}

fn default_header() -> String {
    "Code generated by FTL-Plugin, do not edit.".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_prefix: default_package_prefix(),
            header: default_header(),
            reference_policy: ReferencePolicy::default(),
        }
    }
}

impl GeneratorConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference_policy(mut self, policy: ReferencePolicy) -> Self {
        self.reference_policy = policy;
        self
    }

    pub fn with_package_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.package_prefix = prefix.into();
        self
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Package that holds the generated unit for `module`
    pub fn package_for(&self, module: &str) -> String {
        if self.package_prefix.is_empty() {
            module.to_string()
        } else {
            format!("{}.{}", self.package_prefix, module)
        }
    }
}
