//! Data-driven agenda cards.
//!
//! Card content is data: a [`CardDefinition`] read from YAML (or built in
//! code) becomes an [`AgendaCardRef`] without any per-card Rust type. The
//! definitions implement the card traits generically:
//!
//! - [`LawDefinition`] carries its conflict rule and applicability scope.
//! - [`DirectiveDefinition`] maps each outcome to a list of
//!   [`EffectTemplate`]s that expand into [`DirectiveEffect`]s.
//! - [`PlanetAttachmentDefinition`] carries planet effects and eligibility.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use agenda_types::{
    AgendaResolutionResult, AttachmentType, ElectionKind, GameContext, GameEffect,
    OUTCOME_AGAINST, OUTCOME_FOR, Planet, PlanetTrait, VoteResult,
};

use crate::card::{
    AgendaCard, AgendaCardRef, DirectiveCard, DirectiveEffect, LawCard, PlanetAttachableCard,
};
use crate::error::AgendaError;
use crate::law::{ActiveLaw, LawManager};
use crate::validation::{validate_election_target, validate_outcome};

/// Placeholder in description text replaced by the elected target.
pub const TARGET_PLACEHOLDER: &str = "{target}";

fn default_outcomes() -> Vec<String> {
    vec![OUTCOME_FOR.to_owned(), OUTCOME_AGAINST.to_owned()]
}

fn default_planet_outcomes() -> Vec<String> {
    vec![String::from("Elect Planet")]
}

fn fill_target(text: &str, target: Option<&str>) -> String {
    text.replace(TARGET_PLACEHOLDER, target.unwrap_or("no one"))
}

// ---------------------------------------------------------------------------
// Laws
// ---------------------------------------------------------------------------

/// Which active laws an incoming law supersedes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum ConflictRule {
    /// Never supersedes anything.
    #[default]
    None,
    /// Supersedes an earlier enactment of the same card.
    SameName,
    /// Supersedes every law whose name shares the prefix, when this law's
    /// name has it too.
    NamePrefix(String),
    /// Supersedes every law in the named conflict group.
    Group(String),
}

/// Where an enacted law applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LawScope {
    /// Action types the law applies to. Empty means every action.
    pub action_types: Vec<String>,
    /// Only applies when the acting player is the elected target.
    pub elected_player_only: bool,
}

impl LawScope {
    fn applies(&self, law: &ActiveLaw, context: &GameContext) -> bool {
        let action_matches =
            self.action_types.is_empty() || self.action_types.contains(&context.action_type);
        let player_matches = !self.elected_player_only
            || (context.player_id.is_some()
                && context.player_id.as_deref() == law.elected_target());
        action_matches && player_matches
    }
}

/// A law card described as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawDefinition {
    /// Card name.
    pub name: String,
    /// Effect text. `{target}` is replaced by the elected target.
    pub description: String,
    /// Voting outcomes.
    #[serde(default = "default_outcomes")]
    pub outcomes: Vec<String>,
    /// Outcome that enacts the law. Defaults to `For`, or the sole outcome.
    #[serde(default)]
    pub enacting_outcome: Option<String>,
    /// Game mechanics the law touches.
    #[serde(default)]
    pub effects: Vec<String>,
    /// Which laws this one supersedes.
    #[serde(default)]
    pub conflict: ConflictRule,
    /// The conflict group this law belongs to.
    #[serde(default)]
    pub conflict_group: Option<String>,
    /// Where the law applies.
    #[serde(default)]
    pub scope: LawScope,
}

impl LawDefinition {
    /// A For/Against law with no conflicts that applies everywhere.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            outcomes: default_outcomes(),
            enacting_outcome: None,
            effects: Vec::new(),
            conflict: ConflictRule::None,
            conflict_group: None,
            scope: LawScope::default(),
        }
    }

    /// Replace the voting outcomes.
    #[must_use]
    pub fn with_outcomes<I, S>(mut self, outcomes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outcomes = outcomes.into_iter().map(Into::into).collect();
        self
    }

    /// Record the mechanics the law touches.
    #[must_use]
    pub fn with_effects<I, S>(mut self, effects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.effects = effects.into_iter().map(Into::into).collect();
        self
    }

    /// Set the conflict rule.
    #[must_use]
    pub fn with_conflict(mut self, rule: ConflictRule) -> Self {
        self.conflict = rule;
        self
    }

    /// Join a conflict group and supersede its other members.
    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        self.conflict = ConflictRule::Group(group.clone());
        self.conflict_group = Some(group);
        self
    }

    /// Limit the law to one action type. Repeatable.
    #[must_use]
    pub fn scoped_to(mut self, action_type: impl Into<String>) -> Self {
        self.scope.action_types.push(action_type.into());
        self
    }

    /// Limit the law to actions by the elected player.
    #[must_use]
    pub fn elected_player_only(mut self) -> Self {
        self.scope.elected_player_only = true;
        self
    }
}

impl AgendaCard for LawDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn voting_outcomes(&self) -> Vec<String> {
        self.outcomes.clone()
    }

    fn resolve_outcome(
        &self,
        outcome: &str,
        vote: &VoteResult,
        _context: &GameContext,
    ) -> Result<AgendaResolutionResult, AgendaError> {
        validate_outcome(&self.name, &self.outcomes, outcome)?;
        if outcome != self.enacting_outcome() {
            return Ok(AgendaResolutionResult::rejected(format!(
                "{} rejected ({outcome})",
                self.name
            )));
        }
        let target = vote.elected_target.as_deref();
        validate_election_target(&self.name, outcome, target)?;
        let target = ElectionKind::from_outcome(outcome).and(target);
        Ok(AgendaResolutionResult::law_enacted(
            self.effect_description(target),
            target.map(str::to_owned),
        ))
    }
}

impl LawCard for LawDefinition {
    fn enacting_outcome(&self) -> String {
        self.enacting_outcome
            .clone()
            .unwrap_or_else(|| crate::card::default_enacting_outcome(self.outcomes.clone()))
    }

    fn law_effects(&self) -> Vec<String> {
        self.effects.clone()
    }

    fn effect_description(&self, elected_target: Option<&str>) -> String {
        fill_target(&self.description, elected_target)
    }

    fn conflicts_with_law(&self, other: &ActiveLaw) -> bool {
        match &self.conflict {
            ConflictRule::None => false,
            ConflictRule::SameName => other.name() == self.name,
            ConflictRule::NamePrefix(prefix) => {
                self.name.starts_with(prefix.as_str()) && other.name().starts_with(prefix.as_str())
            }
            ConflictRule::Group(group) => {
                other.card().conflict_group() == Some(group.as_str())
            }
        }
    }

    fn conflict_group(&self) -> Option<&str> {
        self.conflict_group.as_deref()
    }

    fn applies_to_context(&self, law: &ActiveLaw, context: &GameContext) -> bool {
        self.scope.applies(law, context)
    }
}

// ---------------------------------------------------------------------------
// Directives
// ---------------------------------------------------------------------------

/// One effect of a directive outcome, expanded against the vote and context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum EffectTemplate {
    /// Repeal the law named by the elected target.
    RepealElectedLaw,
    /// Repeal every active law.
    RepealAllLaws,
    /// A game effect for every player, in resolution order.
    EachPlayer {
        /// Effect kind understood by the surrounding game.
        kind: String,
        /// Signed magnitude.
        amount: i32,
    },
    /// A game effect for the elected player.
    ElectedPlayer {
        /// Effect kind understood by the surrounding game.
        kind: String,
        /// Signed magnitude.
        amount: i32,
    },
    /// A game effect not tied to a player.
    Global {
        /// Effect kind understood by the surrounding game.
        kind: String,
        /// Signed magnitude.
        amount: i32,
    },
}

impl EffectTemplate {
    fn expand(
        &self,
        card: &str,
        outcome: &str,
        vote: &VoteResult,
        context: &GameContext,
        out: &mut Vec<DirectiveEffect>,
    ) -> Result<(), AgendaError> {
        let elected = || {
            vote.elected_target
                .clone()
                .ok_or_else(|| AgendaError::MissingElectionTarget {
                    card: card.to_owned(),
                    outcome: outcome.to_owned(),
                })
        };
        match self {
            Self::RepealElectedLaw => out.push(DirectiveEffect::RepealLaw(elected()?)),
            Self::RepealAllLaws => out.push(DirectiveEffect::RepealAllLaws),
            Self::EachPlayer { kind, amount } => {
                out.extend(context.resolution_order.iter().map(|player| {
                    DirectiveEffect::Game(GameEffect {
                        kind: kind.clone(),
                        player_id: Some(player.clone()),
                        amount: *amount,
                    })
                }));
            }
            Self::ElectedPlayer { kind, amount } => {
                out.push(DirectiveEffect::Game(GameEffect {
                    kind: kind.clone(),
                    player_id: Some(elected()?),
                    amount: *amount,
                }));
            }
            Self::Global { kind, amount } => {
                out.push(DirectiveEffect::Game(GameEffect {
                    kind: kind.clone(),
                    player_id: None,
                    amount: *amount,
                }));
            }
        }
        Ok(())
    }
}

/// A one-shot directive described as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectiveDefinition {
    /// Card name.
    pub name: String,
    /// Card text.
    pub description: String,
    /// Voting outcomes.
    #[serde(default = "default_outcomes")]
    pub outcomes: Vec<String>,
    /// Effects per outcome. Outcomes without an entry do nothing.
    #[serde(default)]
    pub effects: BTreeMap<String, Vec<EffectTemplate>>,
    /// Cancel on reveal while no laws are in play.
    #[serde(default)]
    pub discard_when_no_laws: bool,
}

impl DirectiveDefinition {
    /// A For/Against directive with no effects.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            outcomes: default_outcomes(),
            effects: BTreeMap::new(),
            discard_when_no_laws: false,
        }
    }

    /// Replace the voting outcomes.
    #[must_use]
    pub fn with_outcomes<I, S>(mut self, outcomes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outcomes = outcomes.into_iter().map(Into::into).collect();
        self
    }

    /// Add an effect to an outcome.
    #[must_use]
    pub fn on(mut self, outcome: impl Into<String>, effect: EffectTemplate) -> Self {
        self.effects.entry(outcome.into()).or_default().push(effect);
        self
    }

    /// Cancel the card on reveal while no laws are in play.
    #[must_use]
    pub fn discard_when_no_laws(mut self) -> Self {
        self.discard_when_no_laws = true;
        self
    }
}

impl AgendaCard for DirectiveDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn voting_outcomes(&self) -> Vec<String> {
        self.outcomes.clone()
    }

    fn resolve_outcome(
        &self,
        outcome: &str,
        vote: &VoteResult,
        _context: &GameContext,
    ) -> Result<AgendaResolutionResult, AgendaError> {
        validate_outcome(&self.name, &self.outcomes, outcome)?;
        validate_election_target(&self.name, outcome, vote.elected_target.as_deref())?;
        let target = ElectionKind::from_outcome(outcome).and(vote.elected_target.clone());
        Ok(AgendaResolutionResult::directive_executed(
            format!("{}: {outcome}", self.name),
            target,
        ))
    }
}

impl DirectiveCard for DirectiveDefinition {
    fn should_discard_on_reveal(&self, _context: &GameContext, laws: &LawManager) -> bool {
        self.discard_when_no_laws && laws.is_empty()
    }

    fn execute_immediate_effect(
        &self,
        outcome: &str,
        vote: &VoteResult,
        context: &GameContext,
    ) -> Result<Vec<DirectiveEffect>, AgendaError> {
        validate_outcome(&self.name, &self.outcomes, outcome)?;
        let mut out = Vec::new();
        for template in self.effects.get(outcome).into_iter().flatten() {
            template.expand(&self.name, outcome, vote, context, &mut out)?;
        }
        Ok(out)
    }
}

// ---------------------------------------------------------------------------
// Planet attachments
// ---------------------------------------------------------------------------

/// A planet-attachable directive described as data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetAttachmentDefinition {
    /// Card name.
    pub name: String,
    /// Card text.
    pub description: String,
    /// Kind of ongoing effect.
    pub attachment_type: AttachmentType,
    /// Voting outcomes. Defaults to `Elect Planet`.
    #[serde(default = "default_planet_outcomes")]
    pub outcomes: Vec<String>,
    /// Effects added to the planet, e.g. `resource_bonus: 2`.
    #[serde(default)]
    pub planet_effects: BTreeMap<String, i32>,
    /// Traits that make a planet eligible. Empty means any planet.
    #[serde(default)]
    pub eligible_traits: BTreeSet<PlanetTrait>,
    /// Home planets are never eligible.
    #[serde(default)]
    pub exclude_home_planets: bool,
}

impl PlanetAttachmentDefinition {
    /// An `Elect Planet` attachment with no effects, eligible everywhere.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        attachment_type: AttachmentType,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            attachment_type,
            outcomes: default_planet_outcomes(),
            planet_effects: BTreeMap::new(),
            eligible_traits: BTreeSet::new(),
            exclude_home_planets: false,
        }
    }

    /// Replace the voting outcomes.
    #[must_use]
    pub fn with_outcomes<I, S>(mut self, outcomes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.outcomes = outcomes.into_iter().map(Into::into).collect();
        self
    }

    /// Add a planet effect.
    #[must_use]
    pub fn with_effect(mut self, key: impl Into<String>, value: i32) -> Self {
        self.planet_effects.insert(key.into(), value);
        self
    }

    /// Make planets with this trait eligible. Repeatable.
    #[must_use]
    pub fn eligible(mut self, planet_trait: PlanetTrait) -> Self {
        self.eligible_traits.insert(planet_trait);
        self
    }

    /// Refuse home planets.
    #[must_use]
    pub fn exclude_home_planets(mut self) -> Self {
        self.exclude_home_planets = true;
        self
    }
}

impl AgendaCard for PlanetAttachmentDefinition {
    fn name(&self) -> &str {
        &self.name
    }

    fn voting_outcomes(&self) -> Vec<String> {
        self.outcomes.clone()
    }

    fn resolve_outcome(
        &self,
        outcome: &str,
        vote: &VoteResult,
        _context: &GameContext,
    ) -> Result<AgendaResolutionResult, AgendaError> {
        validate_outcome(&self.name, &self.outcomes, outcome)?;
        validate_election_target(&self.name, outcome, vote.elected_target.as_deref())?;
        let target = ElectionKind::from_outcome(outcome).and(vote.elected_target.clone());
        let description = target.as_deref().map_or_else(
            || format!("{}: {outcome}", self.name),
            |planet| format!("{} attached to {planet}", self.name),
        );
        Ok(AgendaResolutionResult::directive_executed(description, target))
    }
}

impl DirectiveCard for PlanetAttachmentDefinition {
    fn execute_immediate_effect(
        &self,
        outcome: &str,
        vote: &VoteResult,
        _context: &GameContext,
    ) -> Result<Vec<DirectiveEffect>, AgendaError> {
        validate_outcome(&self.name, &self.outcomes, outcome)?;
        if ElectionKind::from_outcome(outcome) != Some(ElectionKind::Planet) {
            return Ok(Vec::new());
        }
        let planet = vote
            .elected_target
            .clone()
            .ok_or_else(|| AgendaError::MissingElectionTarget {
                card: self.name.clone(),
                outcome: outcome.to_owned(),
            })?;
        Ok(vec![DirectiveEffect::AttachToPlanet(planet)])
    }
}

impl PlanetAttachableCard for PlanetAttachmentDefinition {
    fn attachment_type(&self) -> AttachmentType {
        self.attachment_type
    }

    fn planet_effects(&self) -> BTreeMap<String, i32> {
        self.planet_effects.clone()
    }

    fn can_attach_to_planet(&self, planet: &Planet) -> bool {
        if self.exclude_home_planets && planet.home_planet {
            return false;
        }
        self.eligible_traits.is_empty()
            || self.eligible_traits.iter().any(|t| planet.has_trait(*t))
    }
}

// ---------------------------------------------------------------------------
// CardDefinition
// ---------------------------------------------------------------------------

/// Any data-driven card, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardDefinition {
    /// A law.
    Law(LawDefinition),
    /// A one-shot directive.
    Directive(DirectiveDefinition),
    /// A planet-attachable directive.
    PlanetAttachable(PlanetAttachmentDefinition),
}

impl CardDefinition {
    /// The card's name.
    pub fn name(&self) -> &str {
        match self {
            Self::Law(def) => &def.name,
            Self::Directive(def) => &def.name,
            Self::PlanetAttachable(def) => &def.name,
        }
    }

    /// Turn the definition into a playable card.
    pub fn into_card(self) -> AgendaCardRef {
        match self {
            Self::Law(def) => AgendaCardRef::law(def),
            Self::Directive(def) => AgendaCardRef::directive(def),
            Self::PlanetAttachable(def) => AgendaCardRef::planet_attachable(def),
        }
    }
}

impl From<LawDefinition> for CardDefinition {
    fn from(def: LawDefinition) -> Self {
        Self::Law(def)
    }
}

impl From<DirectiveDefinition> for CardDefinition {
    fn from(def: DirectiveDefinition) -> Self {
        Self::Directive(def)
    }
}

impl From<PlanetAttachmentDefinition> for CardDefinition {
    fn from(def: PlanetAttachmentDefinition) -> Self {
        Self::PlanetAttachable(def)
    }
}
