//! The agenda card hierarchy.
//!
//! Cards come in a closed set of three shapes, captured by [`AgendaCardRef`]:
//!
//! | Variant | Trait | Agenda type |
//! |---------|-------|-------------|
//! | `Law` | [`LawCard`] | [`AgendaType::Law`] |
//! | `Directive` | [`DirectiveCard`] | [`AgendaType::Directive`] |
//! | `PlanetAttachable` | [`PlanetAttachableCard`] | [`AgendaType::Directive`] |
//!
//! The traits describe behavior only. Cards never touch engine state: a law
//! card produces an [`ActiveLaw`] that the [`LawManager`] stores, and a
//! directive returns [`DirectiveEffect`] commands that the resolver applies
//! through the managers.
//!
//! [`LawManager`]: crate::law::LawManager

use std::collections::BTreeMap;
use std::sync::Arc;

use agenda_types::{
    AgendaResolutionResult, AgendaType, AttachmentType, ElectionKind, GameContext, GameEffect,
    OUTCOME_AGAINST, OUTCOME_FOR, Planet, VoteResult,
};

use crate::error::AgendaError;
use crate::law::{ActiveLaw, LawManager};
use crate::validation::{validate_election_target, validate_outcome};

// ---------------------------------------------------------------------------
// Base contract
// ---------------------------------------------------------------------------

/// Behavior shared by every agenda card.
pub trait AgendaCard: core::fmt::Debug + Send + Sync {
    /// The card's unique name.
    fn name(&self) -> &str;

    /// The outcomes a vote on this card may settle on.
    ///
    /// This is also the legal-outcome set used for validation.
    fn voting_outcomes(&self) -> Vec<String> {
        vec![OUTCOME_FOR.to_owned(), OUTCOME_AGAINST.to_owned()]
    }

    /// Describe what resolving `outcome` does.
    ///
    /// Must reject any outcome outside [`voting_outcomes`] with
    /// [`AgendaError::InvalidOutcome`] and must not mutate engine state.
    ///
    /// [`voting_outcomes`]: AgendaCard::voting_outcomes
    fn resolve_outcome(
        &self,
        outcome: &str,
        vote: &VoteResult,
        context: &GameContext,
    ) -> Result<AgendaResolutionResult, AgendaError>;
}

// ---------------------------------------------------------------------------
// Laws
// ---------------------------------------------------------------------------

/// An agenda whose enactment creates a persistent [`ActiveLaw`].
pub trait LawCard: AgendaCard {
    /// The outcome that puts this law into play.
    ///
    /// `For` by convention; a law with a single (election) outcome is enacted
    /// by that outcome.
    fn enacting_outcome(&self) -> String {
        default_enacting_outcome(self.voting_outcomes())
    }

    /// The game mechanics this law touches, for diagnostics.
    fn law_effects(&self) -> Vec<String>;

    /// Human-readable effect text for an enacted instance.
    fn effect_description(&self, elected_target: Option<&str>) -> String;

    /// Whether enacting this law supersedes `other`.
    fn conflicts_with_law(&self, _other: &ActiveLaw) -> bool {
        false
    }

    /// The conflict group this law belongs to, if any.
    fn conflict_group(&self) -> Option<&str> {
        None
    }

    /// Whether an enacted instance of this law applies to `context`.
    fn applies_to_context(&self, _law: &ActiveLaw, _context: &GameContext) -> bool {
        true
    }
}

/// `For` unless the card has exactly one outcome, in which case that one.
pub fn default_enacting_outcome(mut outcomes: Vec<String>) -> String {
    if outcomes.len() == 1 {
        if let Some(only) = outcomes.pop() {
            return only;
        }
    }
    OUTCOME_FOR.to_owned()
}

/// Build the [`ActiveLaw`] a law card puts into play.
///
/// Rejects outcomes that are illegal for the card or that do not enact it,
/// and election outcomes without a target.
pub fn create_active_law(
    card: &Arc<dyn LawCard>,
    outcome: &str,
    elected_target: Option<&str>,
    enacted_round: u32,
) -> Result<ActiveLaw, AgendaError> {
    validate_outcome(card.name(), &card.voting_outcomes(), outcome)?;
    if outcome != card.enacting_outcome() {
        return Err(AgendaError::NotEnactingOutcome {
            card: card.name().to_owned(),
            outcome: outcome.to_owned(),
        });
    }
    validate_election_target(card.name(), outcome, elected_target)?;

    // Non-election laws carry no target even if the vote supplied one.
    let target = ElectionKind::from_outcome(outcome)
        .and(elected_target)
        .map(str::to_owned);
    let description = card.effect_description(target.as_deref());
    Ok(ActiveLaw::new(
        Arc::clone(card),
        enacted_round,
        description,
        target,
    ))
}

// ---------------------------------------------------------------------------
// Directives
// ---------------------------------------------------------------------------

/// A command a directive asks the engine to carry out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveEffect {
    /// Remove the named law from play.
    RepealLaw(String),
    /// Remove every law from play.
    RepealAllLaws,
    /// Attach the resolving card to the named planet.
    AttachToPlanet(String),
    /// An effect on the surrounding game, handed back to the caller.
    Game(GameEffect),
}

/// An agenda whose resolution applies a one-shot effect.
pub trait DirectiveCard: AgendaCard {
    /// Whether the card cancels itself when revealed.
    ///
    /// Evaluated before voting. When `true` the caller discards the card and
    /// reveals another instead of voting.
    fn should_discard_on_reveal(&self, _context: &GameContext, _laws: &LawManager) -> bool {
        false
    }

    /// The effects resolving `outcome` produces.
    ///
    /// Runs exactly once per resolution and must not mutate engine state;
    /// the resolver applies the returned commands.
    fn execute_immediate_effect(
        &self,
        outcome: &str,
        vote: &VoteResult,
        context: &GameContext,
    ) -> Result<Vec<DirectiveEffect>, AgendaError>;
}

/// A directive that attaches itself to a planet and grants ongoing effects.
pub trait PlanetAttachableCard: DirectiveCard {
    /// The kind of effect the attachment grants.
    fn attachment_type(&self) -> AttachmentType;

    /// Effects added to the planet's derived stats, e.g. `resource_bonus -> 2`.
    fn planet_effects(&self) -> BTreeMap<String, i32>;

    /// Whether the card may attach to `planet`.
    fn can_attach_to_planet(&self, _planet: &Planet) -> bool {
        true
    }
}

// ---------------------------------------------------------------------------
// AgendaCardRef
// ---------------------------------------------------------------------------

/// A shared handle to a card of one of the three agenda shapes.
///
/// Cloning is cheap; every clone points at the same immutable card.
#[derive(Debug, Clone)]
pub enum AgendaCardRef {
    /// A law card.
    Law(Arc<dyn LawCard>),
    /// A plain directive card.
    Directive(Arc<dyn DirectiveCard>),
    /// A directive that attaches to a planet.
    PlanetAttachable(Arc<dyn PlanetAttachableCard>),
}

impl AgendaCardRef {
    /// Wrap a law card.
    pub fn law(card: impl LawCard + 'static) -> Self {
        Self::Law(Arc::new(card))
    }

    /// Wrap a directive card.
    pub fn directive(card: impl DirectiveCard + 'static) -> Self {
        Self::Directive(Arc::new(card))
    }

    /// Wrap a planet-attachable card.
    pub fn planet_attachable(card: impl PlanetAttachableCard + 'static) -> Self {
        Self::PlanetAttachable(Arc::new(card))
    }

    /// The card's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Law(card) => card.name(),
            Self::Directive(card) => card.name(),
            Self::PlanetAttachable(card) => card.name(),
        }
    }

    /// The card's agenda type, fixed by its variant.
    pub const fn agenda_type(&self) -> AgendaType {
        match self {
            Self::Law(_) => AgendaType::Law,
            Self::Directive(_) | Self::PlanetAttachable(_) => AgendaType::Directive,
        }
    }

    /// The card's legal voting outcomes.
    pub fn voting_outcomes(&self) -> Vec<String> {
        match self {
            Self::Law(card) => card.voting_outcomes(),
            Self::Directive(card) => card.voting_outcomes(),
            Self::PlanetAttachable(card) => card.voting_outcomes(),
        }
    }

    /// Dispatch to the card's [`AgendaCard::resolve_outcome`].
    pub fn resolve_outcome(
        &self,
        outcome: &str,
        vote: &VoteResult,
        context: &GameContext,
    ) -> Result<AgendaResolutionResult, AgendaError> {
        match self {
            Self::Law(card) => card.resolve_outcome(outcome, vote, context),
            Self::Directive(card) => card.resolve_outcome(outcome, vote, context),
            Self::PlanetAttachable(card) => card.resolve_outcome(outcome, vote, context),
        }
    }

    /// Whether the card cancels itself on reveal. Laws never do.
    pub fn should_discard_on_reveal(&self, context: &GameContext, laws: &LawManager) -> bool {
        match self {
            Self::Law(_) => false,
            Self::Directive(card) => card.should_discard_on_reveal(context, laws),
            Self::PlanetAttachable(card) => card.should_discard_on_reveal(context, laws),
        }
    }

    /// Dispatch to the card's [`DirectiveCard::execute_immediate_effect`].
    ///
    /// Fails with [`AgendaError::CardKindMismatch`] for laws.
    pub fn execute_immediate_effect(
        &self,
        outcome: &str,
        vote: &VoteResult,
        context: &GameContext,
    ) -> Result<Vec<DirectiveEffect>, AgendaError> {
        match self {
            Self::Law(card) => Err(AgendaError::CardKindMismatch {
                card: card.name().to_owned(),
                expected: AgendaType::Directive,
            }),
            Self::Directive(card) => card.execute_immediate_effect(outcome, vote, context),
            Self::PlanetAttachable(card) => card.execute_immediate_effect(outcome, vote, context),
        }
    }

    /// The law card, if this is one.
    pub const fn as_law(&self) -> Option<&Arc<dyn LawCard>> {
        match self {
            Self::Law(card) => Some(card),
            Self::Directive(_) | Self::PlanetAttachable(_) => None,
        }
    }

    /// The planet-attachable card, if this is one.
    pub const fn as_planet_attachable(&self) -> Option<&Arc<dyn PlanetAttachableCard>> {
        match self {
            Self::PlanetAttachable(card) => Some(card),
            Self::Law(_) | Self::Directive(_) => None,
        }
    }
}
