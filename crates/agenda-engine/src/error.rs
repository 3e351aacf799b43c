//! Error types for the `agenda-engine` crate.
//!
//! Two classes of failure share [`AgendaError`]:
//!
//! - Live-game failures (illegal outcomes, missing election targets, failed
//!   attachments) which the resolver turns into a failed
//!   [`AgendaResolutionResult`](agenda_types::AgendaResolutionResult) so play
//!   can continue.
//! - Structural failures (duplicate registration, unknown cards in a snapshot,
//!   an exhausted deck) which are returned to the caller at the point of
//!   detection.

use agenda_types::AgendaType;

/// Errors raised while building, drawing from, or resolving agendas.
#[derive(Debug, thiserror::Error)]
pub enum AgendaError {
    /// A card was constructed or registered with a blank name.
    #[error("agenda card name must not be empty")]
    EmptyCardName,

    /// A card declared no voting outcomes.
    #[error("agenda card {card} declares no voting outcomes")]
    NoVotingOutcomes {
        /// The offending card.
        card: String,
    },

    /// The outcome is not one of the card's voting outcomes.
    #[error("invalid outcome {outcome:?} for {card}; legal outcomes: {legal}")]
    InvalidOutcome {
        /// The card being resolved.
        card: String,
        /// The rejected outcome.
        outcome: String,
        /// The card's legal outcomes, comma separated.
        legal: String,
    },

    /// An election outcome arrived without an elected target.
    #[error("outcome {outcome:?} for {card} requires an elected target")]
    MissingElectionTarget {
        /// The card being resolved.
        card: String,
        /// The election outcome.
        outcome: String,
    },

    /// An active law was requested for an outcome that does not enact it.
    #[error("outcome {outcome:?} does not enact {card}")]
    NotEnactingOutcome {
        /// The law card.
        card: String,
        /// The non-enacting outcome.
        outcome: String,
    },

    /// An `Elect Law` target does not name an active law.
    #[error("elected law {0:?} is not in play")]
    LawNotActive(String),

    /// A card with this name is already registered.
    #[error("agenda card already registered: {0}")]
    DuplicateRegistration(String),

    /// No card with this name is registered.
    #[error("unknown agenda card: {0}")]
    UnknownCard(String),

    /// A card of the wrong kind was supplied.
    #[error("agenda card {card} is not a {expected}")]
    CardKindMismatch {
        /// The card.
        card: String,
        /// The kind the operation needed.
        expected: AgendaType,
    },

    /// Both the draw pile and the discard pile are empty.
    #[error("agenda deck is empty: no cards in draw or discard pile")]
    DeckEmpty,

    /// Every remaining card discarded itself on reveal.
    #[error("no revealable agenda: {discarded} card(s) discarded on reveal")]
    NoRevealableCard {
        /// How many cards were discarded while searching.
        discarded: usize,
    },

    /// The same card name appears twice in one deck.
    #[error("agenda card appears more than once in the deck: {0}")]
    DuplicateDeckCard(String),

    /// The card was never part of this deck.
    #[error("agenda card is not part of this deck: {0}")]
    CardNotInDeck(String),

    /// The card has been removed from the game and cannot return.
    #[error("agenda card has been removed from the game: {0}")]
    CardRemovedFromGame(String),

    /// An elected planet is unknown to the planet lookup.
    #[error("planet not found: {0}")]
    PlanetNotFound(String),

    /// A planet attachment was rejected.
    #[error("attachment error: {source}")]
    Attachment {
        /// The underlying attachment error.
        #[from]
        source: AttachmentError,
    },

    /// State could not be encoded or decoded as JSON.
    #[error("snapshot serialization failed: {source}")]
    Serialization {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}

/// Errors raised by planet attachment rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AttachmentError {
    /// The card's eligibility predicate rejected the planet.
    #[error("{card} cannot be attached to planet {planet}")]
    NotEligible {
        /// The attachable card.
        card: String,
        /// The rejected planet.
        planet: String,
    },

    /// The card is already attached to this planet.
    #[error("{card} is already attached to planet {planet}")]
    AlreadyAttached {
        /// The attachable card.
        card: String,
        /// The planet holding it.
        planet: String,
    },

    /// The card is attached to a different planet.
    #[error("{card} is already attached to planet {planet}; detach it first")]
    AlreadyAttachedElsewhere {
        /// The attachable card.
        card: String,
        /// The planet currently holding it.
        planet: String,
    },

    /// The card is not a planet-attachable directive.
    #[error("{0} is not a planet-attachable card")]
    NotAttachable(String),
}
