//! Shared value types for the agenda resolution engine.
//!
//! Everything in this crate is plain data: it carries no behavior beyond
//! constructors and small queries, and every type is serializable so the
//! surrounding game can persist it alongside its own state.
//!
//! # Modules
//!
//! - [`enums`] -- Agenda types, planet traits, attachment types, election kinds
//! - [`structs`] -- Vote results, game context, resolution results, planets
//! - [`snapshot`] -- Persistence records for the deck, laws, and attachments

pub mod enums;
pub mod snapshot;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{AgendaType, AttachmentType, ElectionKind, PlanetTrait};
pub use snapshot::{ActiveLawRecord, AgendaStateSnapshot, DeckSnapshot, PlanetAttachmentRecord};
pub use structs::{
    AgendaResolutionResult, GameContext, GameEffect, Planet, PlanetStats, VoteResult,
};

/// The outcome that enacts a standard law or passes a standard directive.
pub const OUTCOME_FOR: &str = "For";

/// The outcome that rejects a standard law or directive.
pub const OUTCOME_AGAINST: &str = "Against";

/// Prefix shared by every election-style outcome (`Elect Player`, ...).
pub const ELECT_PREFIX: &str = "Elect ";
