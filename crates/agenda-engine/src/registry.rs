//! Name-keyed store of agenda card instances.
//!
//! A registry is built explicitly at startup and passed to the deck builder
//! and to snapshot restore. There is no process-wide registry.

use std::collections::BTreeMap;

use crate::card::AgendaCardRef;
use crate::error::AgendaError;
use crate::validation::{validate_card_name, validate_outcome_set};

/// Every card the game may put into a deck, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct AgendaCardRegistry {
    cards: BTreeMap<String, AgendaCardRef>,
}

impl AgendaCardRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            cards: BTreeMap::new(),
        }
    }

    /// Register a card under its name.
    ///
    /// Fails on a blank name, an empty outcome set, or a name that is already
    /// registered. The registry is unchanged on failure.
    pub fn register_card(&mut self, card: AgendaCardRef) -> Result<(), AgendaError> {
        validate_card_name(card.name())?;
        validate_outcome_set(card.name(), &card.voting_outcomes())?;
        if self.cards.contains_key(card.name()) {
            return Err(AgendaError::DuplicateRegistration(card.name().to_owned()));
        }
        tracing::debug!(card = card.name(), kind = %card.agenda_type(), "agenda card registered");
        self.cards.insert(card.name().to_owned(), card);
        Ok(())
    }

    /// The card registered under `name`.
    pub fn get_card(&self, name: &str) -> Option<&AgendaCardRef> {
        self.cards.get(name)
    }

    /// Like [`get_card`](Self::get_card), but fails with
    /// [`AgendaError::UnknownCard`].
    pub fn require_card(&self, name: &str) -> Result<&AgendaCardRef, AgendaError> {
        self.get_card(name)
            .ok_or_else(|| AgendaError::UnknownCard(name.to_owned()))
    }

    /// Every registered card, in name order.
    pub fn get_all_cards(&self) -> Vec<AgendaCardRef> {
        self.cards.values().cloned().collect()
    }

    /// Every registered card name, in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.cards.keys().map(String::as_str)
    }

    /// Remove the card registered under `name`.
    ///
    /// Returns `true` if a card was removed.
    pub fn unregister_card(&mut self, name: &str) -> bool {
        self.cards.remove(name).is_some()
    }

    /// Remove every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Number of registered cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards are registered.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
