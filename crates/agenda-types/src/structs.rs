//! Core value structs exchanged between the engine and its collaborators.
//!
//! [`VoteResult`] and [`GameContext`] flow into the engine from the voting
//! subsystem and the phase controller. [`AgendaResolutionResult`] and
//! [`GameEffect`] flow back out. [`Planet`] is the minimal planet handle the
//! attachment rules query.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::enums::PlanetTrait;

// ---------------------------------------------------------------------------
// VoteResult
// ---------------------------------------------------------------------------

/// The settled outcome of a vote, produced by the voting subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteResult {
    /// The winning outcome, e.g. `For` or `Elect Player`.
    pub outcome: String,
    /// The chosen player, planet, or law for election outcomes.
    pub elected_target: Option<String>,
}

impl VoteResult {
    /// A vote that settled on `outcome` with no elected target.
    pub fn new(outcome: impl Into<String>) -> Self {
        Self {
            outcome: outcome.into(),
            elected_target: None,
        }
    }

    /// An election vote that settled on `outcome` choosing `target`.
    pub fn elect(outcome: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            outcome: outcome.into(),
            elected_target: Some(target.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// GameContext
// ---------------------------------------------------------------------------

/// The situation an agenda is resolved in or a law is queried against.
///
/// `resolution_order` carries the player order the surrounding game uses for
/// simultaneous effects (speaker first, then clockwise during the agenda
/// phase). The engine fans per-player effects out in exactly this order and
/// never re-derives it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameContext {
    /// What is happening, e.g. `agenda_phase`, `production`, `tactical_action`.
    pub action_type: String,
    /// The acting player, if any.
    pub player_id: Option<String>,
    /// The system the action happens in, if any.
    pub system_id: Option<String>,
    /// Free-form key/value data for card-specific predicates.
    pub additional_data: BTreeMap<String, String>,
    /// The current game round, stamped onto enacted laws.
    pub round: u32,
    /// Player order for simultaneous per-player effects.
    pub resolution_order: Vec<String>,
}

impl GameContext {
    /// A context for the given action type with everything else empty.
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
            ..Self::default()
        }
    }

    /// Set the acting player.
    #[must_use]
    pub fn with_player(mut self, player_id: impl Into<String>) -> Self {
        self.player_id = Some(player_id.into());
        self
    }

    /// Set the system the action happens in.
    #[must_use]
    pub fn with_system(mut self, system_id: impl Into<String>) -> Self {
        self.system_id = Some(system_id.into());
        self
    }

    /// Add a free-form data entry.
    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_data.insert(key.into(), value.into());
        self
    }

    /// Set the current round.
    #[must_use]
    pub fn in_round(mut self, round: u32) -> Self {
        self.round = round;
        self
    }

    /// Set the player order for simultaneous effects.
    #[must_use]
    pub fn with_resolution_order<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.resolution_order = players.into_iter().map(Into::into).collect();
        self
    }
}

// ---------------------------------------------------------------------------
// AgendaResolutionResult
// ---------------------------------------------------------------------------

/// The outcome of resolving one agenda.
///
/// `law_enacted` and `directive_executed` are never both set. A successful
/// result with neither flag set means the vote went against a law, so nothing
/// entered play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgendaResolutionResult {
    /// Whether the resolution completed.
    pub success: bool,
    /// Whether a law was enacted.
    pub law_enacted: bool,
    /// Whether a directive's immediate effect was executed.
    pub directive_executed: bool,
    /// Human-readable summary.
    pub description: String,
    /// The elected target, for election outcomes.
    pub elected_target: Option<String>,
    /// Problems encountered while resolving.
    pub errors: Vec<String>,
}

impl AgendaResolutionResult {
    /// A successful resolution that enacts a law.
    pub fn law_enacted(description: impl Into<String>, elected_target: Option<String>) -> Self {
        Self {
            success: true,
            law_enacted: true,
            directive_executed: false,
            description: description.into(),
            elected_target,
            errors: Vec::new(),
        }
    }

    /// A successful resolution that executes a directive.
    pub fn directive_executed(
        description: impl Into<String>,
        elected_target: Option<String>,
    ) -> Self {
        Self {
            success: true,
            law_enacted: false,
            directive_executed: true,
            description: description.into(),
            elected_target,
            errors: Vec::new(),
        }
    }

    /// A successful resolution where the vote rejected a law.
    pub fn rejected(description: impl Into<String>) -> Self {
        Self {
            success: true,
            law_enacted: false,
            directive_executed: false,
            description: description.into(),
            elected_target: None,
            errors: Vec::new(),
        }
    }

    /// A failed resolution carrying one error message.
    pub fn failure(description: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            law_enacted: false,
            directive_executed: false,
            description: description.into(),
            elected_target: None,
            errors: vec![error.into()],
        }
    }

    /// Turn this result into a failure, recording `error`.
    ///
    /// Clears both effect flags since nothing took effect.
    #[must_use]
    pub fn into_failure(mut self, error: impl Into<String>) -> Self {
        self.success = false;
        self.law_enacted = false;
        self.directive_executed = false;
        self.errors.push(error.into());
        self
    }
}

// ---------------------------------------------------------------------------
// GameEffect
// ---------------------------------------------------------------------------

/// A directive effect addressed to the surrounding game's own data model.
///
/// The engine does not model trade goods, units, or victory points; it hands
/// such effects back to the caller in resolution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEffect {
    /// Effect key, e.g. `gain_trade_goods`.
    pub kind: String,
    /// The affected player, or `None` for a global effect.
    pub player_id: Option<String>,
    /// Effect magnitude.
    pub amount: i32,
}

// ---------------------------------------------------------------------------
// Planet
// ---------------------------------------------------------------------------

/// The minimal planet view attachment rules need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    /// Planet identifier.
    pub id: String,
    /// Printed resource value.
    pub resources: i32,
    /// Printed influence value.
    pub influence: i32,
    /// Planet traits.
    pub traits: BTreeSet<PlanetTrait>,
    /// Whether this is a player's home planet.
    pub home_planet: bool,
}

impl Planet {
    /// A non-home planet with no traits.
    pub fn new(id: impl Into<String>, resources: i32, influence: i32) -> Self {
        Self {
            id: id.into(),
            resources,
            influence,
            traits: BTreeSet::new(),
            home_planet: false,
        }
    }

    /// Add a trait.
    #[must_use]
    pub fn with_trait(mut self, planet_trait: PlanetTrait) -> Self {
        self.traits.insert(planet_trait);
        self
    }

    /// Mark as a home planet.
    #[must_use]
    pub fn home(mut self) -> Self {
        self.home_planet = true;
        self
    }

    /// Whether the planet carries the given trait.
    pub fn has_trait(&self, planet_trait: PlanetTrait) -> bool {
        self.traits.contains(&planet_trait)
    }
}

/// A planet's values after attachment bonuses are added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetStats {
    /// Planet identifier.
    pub planet_id: String,
    /// Printed resources plus every `resources` bonus.
    pub resources: i32,
    /// Printed influence plus every `influence` bonus.
    pub influence: i32,
    /// Every other effect key, summed across attachments.
    pub extra: BTreeMap<String, i32>,
}
