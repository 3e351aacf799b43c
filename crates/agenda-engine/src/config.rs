//! Configuration loading for agenda decks and card catalogs.
//!
//! A config file selects which registered cards make up the deck, fixes the
//! shuffle seed, and may add data-driven cards to the catalog:
//!
//! ```yaml
//! deck:
//!   seed: 42
//!   exclude: ["Shard of the Throne"]
//! catalog:
//!   - kind: directive
//!     name: Colonial Redistribution
//!     description: Redistribute a planet
//!     outcomes: [Elect Player]
//! ```
//!
//! `AGENDA_DECK_SEED` overrides `deck.seed` when set.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::definitions::CardDefinition;
use crate::error::AgendaError;
use crate::registry::AgendaCardRegistry;

/// Environment variable overriding [`DeckConfig::seed`].
pub const DECK_SEED_ENV: &str = "AGENDA_DECK_SEED";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level agenda configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaConfig {
    /// Deck composition and seed.
    #[serde(default)]
    pub deck: DeckConfig,

    /// Extra cards registered alongside the built-in catalog.
    #[serde(default)]
    pub catalog: Vec<CardDefinition>,
}

/// Which cards the deck holds and how it shuffles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    /// Seed for deterministic shuffles.
    pub seed: u64,
    /// Cards to build the deck from. Empty means every registered card.
    pub include: Vec<String>,
    /// Cards left out of the deck.
    pub exclude: Vec<String>,
}

impl AgendaConfig {
    /// Load configuration from a YAML file and apply environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.deck.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string and apply environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.deck.apply_env_overrides();
        Ok(config)
    }

    /// Register every catalog entry.
    ///
    /// Stops at the first registration failure, e.g. a name that clashes
    /// with a card already in `registry`.
    pub fn register_catalog(&self, registry: &mut AgendaCardRegistry) -> Result<(), AgendaError> {
        for def in &self.catalog {
            registry.register_card(def.clone().into_card())?;
        }
        Ok(())
    }
}

impl DeckConfig {
    /// Override settings from environment variables.
    ///
    /// Reads `AGENDA_DECK_SEED`. An unparsable value is ignored with a
    /// warning.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(val) = lookup(DECK_SEED_ENV) {
            match val.trim().parse::<u64>() {
                Ok(seed) => self.seed = seed,
                Err(err) => tracing::warn!(value = %val, "ignoring {DECK_SEED_ENV}: {err}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_yaml() {
        let yaml = r"
deck:
  seed: 123
  include: [Fleet Regulations, Core Mining]
  exclude: [Core Mining]
catalog:
  - kind: law
    name: Homeland Defense Act
    description: No limit on PDS units
";
        let config = AgendaConfig::parse(yaml);
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert_eq!(config.deck.include.len(), 2);
        assert_eq!(config.deck.exclude, vec!["Core Mining"]);
        assert_eq!(config.catalog.len(), 1);
        assert_eq!(config.catalog.first().map(CardDefinition::name), Some("Homeland Defense Act"));
    }

    #[test]
    fn parse_empty_yaml_uses_defaults() {
        let config = AgendaConfig::parse("{}");
        assert!(config.is_ok());
        let config = config.unwrap_or_default();
        assert!(config.deck.include.is_empty());
        assert!(config.catalog.is_empty());
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let result = AgendaConfig::parse("deck: [not, a, map");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = AgendaConfig::from_file(Path::new("/nonexistent/agenda.yaml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn seed_override_parses_or_is_ignored() {
        let mut deck = DeckConfig {
            seed: 1,
            ..DeckConfig::default()
        };
        deck.apply_overrides(|_| Some(String::from(" 77 ")));
        assert_eq!(deck.seed, 77);

        deck.apply_overrides(|_| Some(String::from("seventy")));
        assert_eq!(deck.seed, 77);

        deck.apply_overrides(|_| None);
        assert_eq!(deck.seed, 77);
    }

    #[test]
    fn catalog_registration_reports_clashes() {
        let yaml = r"
catalog:
  - kind: directive
    name: Twin
    description: first
  - kind: directive
    name: Twin
    description: second
";
        let config = AgendaConfig::parse(yaml).unwrap_or_default();
        let mut registry = AgendaCardRegistry::new();
        let result = config.register_catalog(&mut registry);
        assert!(matches!(result, Err(AgendaError::DuplicateRegistration(_))));
        assert_eq!(registry.len(), 1);
    }
}
