//! Agenda deck, law tracking, planet attachments, and outcome resolution.
//!
//! The engine takes a revealed agenda card and a settled vote and turns them
//! into game state: laws that stay in play, directives that fire once, and
//! attachments that modify planets. It never runs the vote itself and never
//! touches player or planet data it does not own.
//!
//! # Architecture
//!
//! - [`card`] -- The card traits and the closed [`AgendaCardRef`] variant set.
//! - [`definitions`] -- Data-driven cards built from YAML or code.
//! - [`registry`] -- Name-keyed store of cards available to the deck.
//! - [`deck`] -- Draw, discard, and removal with deterministic shuffles.
//! - [`law`] -- Active laws with replace-on-conflict enactment.
//! - [`attachment`] -- Cards bound to planets and their derived stats.
//! - [`resolver`] -- Vote-to-effect orchestration over the managers.
//! - [`validation`] -- Outcome, target, and name checks.
//! - [`config`] -- YAML deck configuration.
//! - [`state`] -- Whole-engine snapshots.
//!
//! # Flow
//!
//! ```text
//! deck.reveal_next -> vote (external) -> resolver.resolve_agenda
//!     Law       -> create_active_law -> LawManager::enact_law
//!     Directive -> execute_immediate_effect -> managers
//! ```
//!
//! The engine is single-threaded and deterministic: the same seed, cards,
//! and votes always produce the same state.

pub mod attachment;
pub mod card;
pub mod config;
pub mod deck;
pub mod definitions;
pub mod error;
pub mod law;
pub mod registry;
pub mod resolver;
pub mod state;
pub mod validation;

pub use attachment::{PlanetAttachment, PlanetAttachmentManager, PlanetLookup};
pub use card::{
    AgendaCard, AgendaCardRef, DirectiveCard, DirectiveEffect, LawCard, PlanetAttachableCard,
    create_active_law,
};
pub use config::{AgendaConfig, ConfigError, DeckConfig};
pub use deck::{AgendaDeck, DeckIntegrity, Reveal};
pub use definitions::{
    CardDefinition, ConflictRule, DirectiveDefinition, EffectTemplate, LawDefinition, LawScope,
    PlanetAttachmentDefinition,
};
pub use error::{AgendaError, AttachmentError};
pub use law::{ActiveLaw, LawManager};
pub use registry::AgendaCardRegistry;
pub use resolver::{AgendaEffectResolver, ResolutionOutcome};
pub use state::AgendaState;
