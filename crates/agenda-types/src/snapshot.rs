//! Persistence records for agenda state.
//!
//! Cards are referenced by name; restoring a snapshot resolves each name
//! against the card registry. Every collection keeps its in-memory order so a
//! restored state behaves exactly like the one that was saved.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The agenda deck's partitions plus the state that drives future shuffles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    /// Seed every shuffle is derived from.
    pub seed: u64,
    /// Number of shuffles performed so far.
    pub shuffle_count: u64,
    /// Draw pile, bottom first (the last entry is the top card).
    pub draw_pile: Vec<String>,
    /// Discard pile, oldest first.
    pub discard_pile: Vec<String>,
    /// Cards drawn and not yet discarded or removed, in draw order.
    pub in_play: Vec<String>,
    /// Cards removed from the game, by name.
    pub removed_from_game: Vec<String>,
}

/// A persisted active law.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveLawRecord {
    /// Name of the law card.
    pub card_name: String,
    /// Round the law was enacted in.
    pub enacted_round: u32,
    /// Human-readable effect text.
    pub effect_description: String,
    /// Elected player, planet, or other target.
    pub elected_target: Option<String>,
}

/// A persisted planet attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetAttachmentRecord {
    /// Name of the attached card.
    pub card_name: String,
    /// Planet the card is attached to.
    pub planet_id: String,
    /// Effects the attachment grants.
    pub effects: BTreeMap<String, i32>,
}

/// Everything the agenda engine needs to resume a game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaStateSnapshot {
    /// Deck partitions.
    pub deck: DeckSnapshot,
    /// Active laws in enactment order.
    pub active_laws: Vec<ActiveLawRecord>,
    /// Planet attachments in attachment order.
    pub attachments: Vec<PlanetAttachmentRecord>,
}
