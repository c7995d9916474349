//! Registry configuration
//!
//! The set of namespaces to register is read from a JSON file:
//!
//! ```json
//! { "namespaces": ["auth", "bank", "tax"], "consensus_namespace": "baseapp" }
//! ```
//!
//! `consensus_namespace` is optional and defaults to `baseapp`.

mod errors;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::migration::{
    migrate_with_consensus_namespace, MigrationReport, MigrationResult, SchemaBuilderTable,
    CONSENSUS_NAMESPACE,
};
use crate::subspace::Registry;

pub use errors::{ConfigError, ConfigResult};

/// Namespaces known to the host application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Namespaces to register, in registration order (required)
    pub namespaces: Vec<String>,

    /// Namespace of the consensus parameters subspace
    #[serde(default = "default_consensus_namespace")]
    pub consensus_namespace: String,
}

fn default_consensus_namespace() -> String {
    CONSENSUS_NAMESPACE.to_string()
}

impl RegistryConfig {
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            namespaces: namespaces.into_iter().map(Into::into).collect(),
            consensus_namespace: default_consensus_namespace(),
        }
    }

    /// Loads and validates a configuration file.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_json(&content)?;
        info!(
            path = %path.display(),
            namespaces = config.namespaces.len(),
            "CONFIG_LOADED"
        );
        Ok(config)
    }

    /// Parses and validates a configuration document.
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: RegistryConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects blank or duplicate namespaces.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.consensus_namespace.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "consensus_namespace must not be blank".into(),
            ));
        }

        let mut seen = HashSet::with_capacity(self.namespaces.len());
        for namespace in &self.namespaces {
            if namespace.trim().is_empty() {
                return Err(ConfigError::Invalid("namespace must not be blank".into()));
            }
            if !seen.insert(namespace.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate namespace '{}'",
                    namespace
                )));
            }
        }

        Ok(())
    }

    /// Creates a registry holding one unbound subspace per namespace.
    pub fn build_registry(&self) -> Registry {
        Registry::with_namespaces(self.namespaces.iter().cloned())
    }

    /// Runs the migration pass using the configured consensus namespace.
    pub fn migrate(
        &self,
        registry: &mut Registry,
        table: &SchemaBuilderTable,
    ) -> MigrationResult<MigrationReport> {
        migrate_with_consensus_namespace(registry, table, &self.consensus_namespace)
    }
}
