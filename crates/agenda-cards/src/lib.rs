//! The standard agenda card catalog.
//!
//! Cards are plain [`CardDefinition`] data registered into an
//! [`AgendaCardRegistry`]; the engine has no knowledge of any specific card.
//!
//! ```text
//! standard_registry_with(&config) -> build_deck(&registry, &config) -> AgendaState::new
//! ```

pub mod attachments;
pub mod directives;
pub mod laws;

use agenda_engine::{AgendaCardRegistry, AgendaConfig, AgendaDeck, AgendaError, CardDefinition};

/// Every standard card definition: laws, then directives, then attachments.
pub fn standard_definitions() -> Vec<CardDefinition> {
    let laws = laws::standard_laws().into_iter().map(CardDefinition::from);
    let directives = directives::standard_directives()
        .into_iter()
        .map(CardDefinition::from);
    let attachments = attachments::standard_attachments()
        .into_iter()
        .map(CardDefinition::from);
    laws.chain(directives).chain(attachments).collect()
}

/// Register every standard card.
///
/// Fails on the first name already present in `registry`.
pub fn register_standard_cards(registry: &mut AgendaCardRegistry) -> Result<(), AgendaError> {
    let definitions = standard_definitions();
    let count = definitions.len();
    for def in definitions {
        registry.register_card(def.into_card())?;
    }
    tracing::info!(cards = count, "standard agenda cards registered");
    Ok(())
}

/// A registry holding exactly the standard cards.
pub fn standard_registry() -> Result<AgendaCardRegistry, AgendaError> {
    let mut registry = AgendaCardRegistry::new();
    register_standard_cards(&mut registry)?;
    Ok(registry)
}

/// The standard cards plus the config's extra catalog entries.
pub fn standard_registry_with(config: &AgendaConfig) -> Result<AgendaCardRegistry, AgendaError> {
    let mut registry = standard_registry()?;
    config.register_catalog(&mut registry)?;
    Ok(registry)
}

/// Build a shuffled deck from `registry` as `config` selects.
pub fn build_deck(
    registry: &AgendaCardRegistry,
    config: &AgendaConfig,
) -> Result<AgendaDeck, AgendaError> {
    AgendaDeck::from_config(registry, &config.deck)
}
