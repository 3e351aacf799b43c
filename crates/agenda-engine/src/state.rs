//! The engine's whole mutable state, saved and restored as one unit.

use agenda_types::AgendaStateSnapshot;

use crate::attachment::{PlanetAttachmentManager, PlanetLookup};
use crate::deck::AgendaDeck;
use crate::error::AgendaError;
use crate::law::LawManager;
use crate::registry::AgendaCardRegistry;
use crate::resolver::AgendaEffectResolver;

/// Deck, laws, and attachments for one game.
#[derive(Debug, Clone)]
pub struct AgendaState {
    /// The agenda deck.
    pub deck: AgendaDeck,
    /// Laws in play.
    pub laws: LawManager,
    /// Planet attachments in play.
    pub attachments: PlanetAttachmentManager,
}

impl AgendaState {
    /// Start a game with `deck` and nothing in play.
    pub const fn new(deck: AgendaDeck) -> Self {
        Self {
            deck,
            laws: LawManager::new(),
            attachments: PlanetAttachmentManager::new(),
        }
    }

    /// A resolver borrowing this state's managers.
    pub fn resolver<'a>(&'a mut self, planets: &'a dyn PlanetLookup) -> AgendaEffectResolver<'a> {
        AgendaEffectResolver::new(&mut self.laws, &mut self.attachments, planets)
    }

    /// Capture the full state.
    pub fn snapshot(&self) -> AgendaStateSnapshot {
        AgendaStateSnapshot {
            deck: self.deck.snapshot(),
            active_laws: self.laws.snapshot(),
            attachments: self.attachments.snapshot(),
        }
    }

    /// Rebuild state from a snapshot, resolving card names in `registry`.
    pub fn restore(
        snapshot: &AgendaStateSnapshot,
        registry: &AgendaCardRegistry,
    ) -> Result<Self, AgendaError> {
        Ok(Self {
            deck: AgendaDeck::restore(&snapshot.deck, registry)?,
            laws: LawManager::restore(&snapshot.active_laws, registry)?,
            attachments: PlanetAttachmentManager::restore(&snapshot.attachments, registry)?,
        })
    }

    /// Encode the state as JSON.
    pub fn to_json(&self) -> Result<String, AgendaError> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Decode state from JSON produced by [`to_json`](Self::to_json).
    pub fn from_json(json: &str, registry: &AgendaCardRegistry) -> Result<Self, AgendaError> {
        let snapshot: AgendaStateSnapshot = serde_json::from_str(json)?;
        Self::restore(&snapshot, registry)
    }
}
