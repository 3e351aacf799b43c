//! Turning a vote into game state changes.
//!
//! [`AgendaEffectResolver`] borrows the law and attachment managers for the
//! duration of one resolution. It owns no state of its own.
//!
//! Resolution order:
//!
//! 1. Validate the vote (legal outcome, election target, `Elect Law`
//!    targets in play).
//! 2. Ask the card to describe the outcome.
//! 3. Laws: build the [`ActiveLaw`](crate::law::ActiveLaw) and enact it.
//!    Directives: collect the card's [`DirectiveEffect`]s, validate every
//!    one, then apply them all.
//!
//! Any failure before step 3 applies anything comes back as a failed
//! [`AgendaResolutionResult`]; the managers are left untouched.

use std::sync::Arc;

use agenda_types::{
    AgendaResolutionResult, ElectionKind, GameContext, GameEffect, Planet, VoteResult,
};

use crate::attachment::{PlanetAttachmentManager, PlanetLookup};
use crate::card::{AgendaCardRef, DirectiveEffect, PlanetAttachableCard, create_active_law};
use crate::error::{AgendaError, AttachmentError};
use crate::law::{ActiveLaw, LawManager};
use crate::validation::validate_vote;

/// Everything one resolution changed.
#[derive(Debug, Clone)]
pub struct ResolutionOutcome {
    /// The result reported to the caller.
    pub result: AgendaResolutionResult,
    /// Laws superseded by a newly enacted law. Their cards belong on the
    /// discard pile.
    pub superseded_laws: Vec<ActiveLaw>,
    /// Laws repealed by a directive. Their cards belong on the discard pile.
    pub repealed_laws: Vec<ActiveLaw>,
    /// Effects for the surrounding game to apply, in resolution order.
    pub game_effects: Vec<GameEffect>,
}

impl ResolutionOutcome {
    fn with_result(result: AgendaResolutionResult) -> Self {
        Self {
            result,
            superseded_laws: Vec::new(),
            repealed_laws: Vec::new(),
            game_effects: Vec::new(),
        }
    }
}

/// A directive effect that passed validation.
enum PlannedEffect {
    Repeal(String),
    RepealAll,
    Attach(Arc<dyn PlanetAttachableCard>, Planet),
    Game(GameEffect),
}

/// Resolves agenda outcomes against the law and attachment managers.
pub struct AgendaEffectResolver<'a> {
    laws: &'a mut LawManager,
    attachments: &'a mut PlanetAttachmentManager,
    planets: &'a dyn PlanetLookup,
}

impl<'a> AgendaEffectResolver<'a> {
    /// Borrow the managers and planet lookup for resolution.
    pub fn new(
        laws: &'a mut LawManager,
        attachments: &'a mut PlanetAttachmentManager,
        planets: &'a dyn PlanetLookup,
    ) -> Self {
        Self {
            laws,
            attachments,
            planets,
        }
    }

    /// Whether `card` cancels itself on reveal given the laws in play.
    pub fn should_discard_on_reveal(&self, card: &AgendaCardRef, context: &GameContext) -> bool {
        card.should_discard_on_reveal(context, self.laws)
    }

    /// Resolve a vote and report the result.
    ///
    /// Never fails: validation and application errors are reported through
    /// [`AgendaResolutionResult::errors`] with `success == false`.
    pub fn resolve_agenda_outcome(
        &mut self,
        card: &AgendaCardRef,
        vote: &VoteResult,
        context: &GameContext,
    ) -> AgendaResolutionResult {
        self.resolve_agenda(card, vote, context).result
    }

    /// Resolve a vote and report everything it changed.
    pub fn resolve_agenda(
        &mut self,
        card: &AgendaCardRef,
        vote: &VoteResult,
        context: &GameContext,
    ) -> ResolutionOutcome {
        match self.try_resolve(card, vote, context) {
            Ok(outcome) => outcome,
            Err(err) => {
                log_failure(card, vote, &err);
                ResolutionOutcome::with_result(AgendaResolutionResult::failure(
                    format!("{} could not be resolved", card.name()),
                    err.to_string(),
                ))
            }
        }
    }

    fn try_resolve(
        &mut self,
        card: &AgendaCardRef,
        vote: &VoteResult,
        context: &GameContext,
    ) -> Result<ResolutionOutcome, AgendaError> {
        validate_vote(card, vote)?;
        if ElectionKind::from_outcome(&vote.outcome) == Some(ElectionKind::Law) {
            let target = vote.elected_target.as_deref().unwrap_or_default();
            if !self.laws.is_law_active(target) {
                return Err(AgendaError::LawNotActive(target.to_owned()));
            }
        }

        let mut result = card.resolve_outcome(&vote.outcome, vote, context)?;

        match card {
            AgendaCardRef::Law(law_card) => {
                if vote.outcome != law_card.enacting_outcome() {
                    result.law_enacted = false;
                    result.directive_executed = false;
                    tracing::info!(card = card.name(), outcome = %vote.outcome, "law rejected");
                    return Ok(ResolutionOutcome::with_result(result));
                }
                let law = match create_active_law(
                    law_card,
                    &vote.outcome,
                    vote.elected_target.as_deref(),
                    context.round,
                ) {
                    Ok(law) => law,
                    Err(err) => return Ok(annotate_failure(card, vote, result, &err)),
                };
                result.success = true;
                result.law_enacted = true;
                result.directive_executed = false;
                result.elected_target = law.elected_target().map(str::to_owned);
                let superseded_laws = self.laws.enact_law(law);
                Ok(ResolutionOutcome {
                    result,
                    superseded_laws,
                    repealed_laws: Vec::new(),
                    game_effects: Vec::new(),
                })
            }
            AgendaCardRef::Directive(_) | AgendaCardRef::PlanetAttachable(_) => {
                let applied = card
                    .execute_immediate_effect(&vote.outcome, vote, context)
                    .and_then(|effects| self.plan(card, effects))
                    .and_then(|plan| self.apply(plan));
                let (repealed_laws, game_effects) = match applied {
                    Ok(changes) => changes,
                    Err(err) => return Ok(annotate_failure(card, vote, result, &err)),
                };
                result.success = true;
                result.law_enacted = false;
                result.directive_executed = true;
                tracing::info!(
                    card = card.name(),
                    outcome = %vote.outcome,
                    repealed = repealed_laws.len(),
                    game_effects = game_effects.len(),
                    "directive executed"
                );
                Ok(ResolutionOutcome {
                    result,
                    superseded_laws: Vec::new(),
                    repealed_laws,
                    game_effects,
                })
            }
        }
    }

    /// Check every effect against current state without changing anything.
    fn plan(
        &self,
        card: &AgendaCardRef,
        effects: Vec<DirectiveEffect>,
    ) -> Result<Vec<PlannedEffect>, AgendaError> {
        let mut plan = Vec::with_capacity(effects.len());
        let mut attaching: Option<String> = None;

        for effect in effects {
            let planned = match effect {
                DirectiveEffect::RepealLaw(name) => {
                    if !self.laws.is_law_active(&name) {
                        return Err(AgendaError::LawNotActive(name));
                    }
                    PlannedEffect::Repeal(name)
                }
                DirectiveEffect::RepealAllLaws => PlannedEffect::RepealAll,
                DirectiveEffect::AttachToPlanet(planet_id) => {
                    let attachable = card
                        .as_planet_attachable()
                        .ok_or_else(|| AttachmentError::NotAttachable(card.name().to_owned()))?;
                    if let Some(previous) = &attaching {
                        let card = card.name().to_owned();
                        let planet = previous.clone();
                        let err = if *previous == planet_id {
                            AttachmentError::AlreadyAttached { card, planet }
                        } else {
                            AttachmentError::AlreadyAttachedElsewhere { card, planet }
                        };
                        return Err(err.into());
                    }
                    let planet = self
                        .planets
                        .planet(&planet_id)
                        .ok_or_else(|| AgendaError::PlanetNotFound(planet_id.clone()))?;
                    self.attachments.check_attachment(attachable, planet)?;
                    attaching = Some(planet_id);
                    PlannedEffect::Attach(Arc::clone(attachable), planet.clone())
                }
                DirectiveEffect::Game(game) => PlannedEffect::Game(game),
            };
            plan.push(planned);
        }
        Ok(plan)
    }

    fn apply(
        &mut self,
        plan: Vec<PlannedEffect>,
    ) -> Result<(Vec<ActiveLaw>, Vec<GameEffect>), AgendaError> {
        let mut repealed = Vec::new();
        let mut game_effects = Vec::new();

        for effect in plan {
            match effect {
                PlannedEffect::Repeal(name) => {
                    if let Some(law) = self.laws.take_law(&name) {
                        tracing::info!(law = law.name(), "law repealed");
                        repealed.push(law);
                    }
                }
                PlannedEffect::RepealAll => {
                    let all = self.laws.take_all_laws();
                    tracing::info!(count = all.len(), "all laws repealed");
                    repealed.extend(all);
                }
                PlannedEffect::Attach(card, planet) => {
                    self.attachments.attach_card_to_planet(card, &planet)?;
                }
                PlannedEffect::Game(game) => game_effects.push(game),
            }
        }
        Ok((repealed, game_effects))
    }
}

fn log_failure(card: &AgendaCardRef, vote: &VoteResult, err: &AgendaError) {
    tracing::warn!(
        card = card.name(),
        outcome = %vote.outcome,
        "agenda resolution failed: {err}"
    );
}

/// Record `err` on `result` and report nothing changed.
fn annotate_failure(
    card: &AgendaCardRef,
    vote: &VoteResult,
    result: AgendaResolutionResult,
    err: &AgendaError,
) -> ResolutionOutcome {
    log_failure(card, vote, err);
    ResolutionOutcome::with_result(result.into_failure(err.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use agenda_types::{AttachmentType, PlanetTrait};

    use super::*;
    use crate::attachment::RESOURCE_BONUS;
    use crate::definitions::{
        ConflictRule, DirectiveDefinition, EffectTemplate, LawDefinition,
        PlanetAttachmentDefinition,
    };

    struct Table {
        laws: LawManager,
        attachments: PlanetAttachmentManager,
        planets: BTreeMap<String, Planet>,
    }

    impl Table {
        fn new() -> Self {
            let planets = [
                Planet::new("quann", 2, 1).with_trait(PlanetTrait::Cultural),
                Planet::new("arinam", 1, 2).with_trait(PlanetTrait::Industrial),
                Planet::new("jord", 4, 2).home(),
            ]
            .into_iter()
            .map(|p| (p.id.clone(), p))
            .collect();
            Self {
                laws: LawManager::new(),
                attachments: PlanetAttachmentManager::new(),
                planets,
            }
        }

        fn resolve(&mut self, card: &AgendaCardRef, vote: &VoteResult) -> ResolutionOutcome {
            let context = GameContext::new("agenda")
                .in_round(2)
                .with_resolution_order(["P1", "P2", "P3"]);
            AgendaEffectResolver::new(&mut self.laws, &mut self.attachments, &self.planets)
                .resolve_agenda(card, vote, &context)
        }
    }

    fn fleet_regulations() -> AgendaCardRef {
        AgendaCardRef::law(
            LawDefinition::new(
                "Fleet Regulations",
                "Each player cannot have more than 4 fleet tokens",
            )
            .with_effects(["fleet_pool"]),
        )
    }

    fn minister_of_commerce() -> AgendaCardRef {
        AgendaCardRef::law(
            LawDefinition::new("Minister of Commerce", "{target} gains trade goods on replenish")
                .with_outcomes(["Elect Player"])
                .with_conflict(ConflictRule::NamePrefix(String::from("Minister of"))),
        )
    }

    fn core_mining() -> AgendaCardRef {
        AgendaCardRef::planet_attachable(
            PlanetAttachmentDefinition::new("Core Mining", "", AttachmentType::ResourceBonus)
                .with_effect(RESOURCE_BONUS, 2)
                .eligible(PlanetTrait::Industrial)
                .exclude_home_planets(),
        )
    }

    // -----------------------------------------------------------------------
    // Laws
    // -----------------------------------------------------------------------

    #[test]
    fn law_for_is_enacted() {
        let mut table = Table::new();
        let outcome = table.resolve(&fleet_regulations(), &VoteResult::new("For"));

        assert!(outcome.result.success);
        assert!(outcome.result.law_enacted);
        assert!(!outcome.result.directive_executed);
        assert_eq!(table.laws.len(), 1);
        assert!(table.laws.is_law_active("Fleet Regulations"));
        assert_eq!(
            table.laws.get_law("Fleet Regulations").map(ActiveLaw::enacted_round),
            Some(2)
        );
    }

    #[test]
    fn law_against_enacts_nothing() {
        let mut table = Table::new();
        let outcome = table.resolve(&fleet_regulations(), &VoteResult::new("Against"));

        assert!(outcome.result.success);
        assert!(!outcome.result.law_enacted);
        assert!(!outcome.result.directive_executed);
        assert!(table.laws.is_empty());
    }

    #[test]
    fn second_minister_election_replaces_first() {
        let mut table = Table::new();
        let minister = minister_of_commerce();

        let first = table.resolve(&minister, &VoteResult::elect("Elect Player", "P1"));
        assert!(first.result.law_enacted);
        let second = table.resolve(&minister, &VoteResult::elect("Elect Player", "P2"));
        assert!(second.result.law_enacted);
        assert_eq!(second.superseded_laws.len(), 1);

        let ministers: Vec<&ActiveLaw> = table
            .laws
            .get_active_laws()
            .iter()
            .filter(|l| l.name() == "Minister of Commerce")
            .collect();
        assert_eq!(ministers.len(), 1);
        assert_eq!(ministers.first().and_then(|l| l.elected_target()), Some("P2"));
        assert_eq!(second.result.elected_target.as_deref(), Some("P2"));
    }

    #[test]
    fn election_without_target_fails_cleanly() {
        let mut table = Table::new();
        let outcome = table.resolve(&minister_of_commerce(), &VoteResult::new("Elect Player"));

        assert!(!outcome.result.success);
        assert!(!outcome.result.law_enacted);
        assert!(!outcome.result.errors.is_empty());
        assert!(table.laws.is_empty());
    }

    #[test]
    fn illegal_outcome_mutates_nothing() {
        let mut table = Table::new();
        let _ = table.resolve(&fleet_regulations(), &VoteResult::new("For"));
        let before = table.laws.snapshot();

        let outcome = table.resolve(&fleet_regulations(), &VoteResult::new("Abstain"));
        assert!(!outcome.result.success);
        assert!(!outcome.result.law_enacted);
        assert!(!outcome.result.directive_executed);
        assert_eq!(table.laws.snapshot(), before);
    }

    #[test]
    fn illegal_directive_outcomes_leave_laws_and_attachments_alone() {
        let mut table = Table::new();
        let _ = table.resolve(&fleet_regulations(), &VoteResult::new("For"));
        let _ = table.resolve(&core_mining(), &VoteResult::elect("Elect Planet", "arinam"));
        let laws_before = table.laws.snapshot();
        let attachments_before = table.attachments.snapshot();
        assert_eq!(laws_before.len(), 1);
        assert_eq!(attachments_before.len(), 1);

        let abolishment = AgendaCardRef::directive(
            DirectiveDefinition::new("Judicial Abolishment", "")
                .with_outcomes(["Elect Law"])
                .on("Elect Law", EffectTemplate::RepealElectedLaw),
        );
        let second_mining = AgendaCardRef::planet_attachable(
            PlanetAttachmentDefinition::new("Deep Mining", "", AttachmentType::ResourceBonus)
                .with_effect(RESOURCE_BONUS, 1),
        );
        let illegal = [
            (core_mining(), VoteResult::elect("For", "arinam")),
            (second_mining, VoteResult::elect("For", "quann")),
            (abolishment.clone(), VoteResult::new("Against")),
            (abolishment, VoteResult::elect("Abstain", "Fleet Regulations")),
        ];

        for (card, vote) in &illegal {
            let outcome = table.resolve(card, vote);
            assert!(!outcome.result.success, "{} {}", card.name(), vote.outcome);
            assert!(!outcome.result.directive_executed);
            assert_eq!(outcome.result.errors.len(), 1);
            assert!(outcome.result.description.contains("could not be resolved"));
            assert!(outcome.repealed_laws.is_empty());
            assert!(outcome.game_effects.is_empty());
            assert_eq!(table.laws.snapshot(), laws_before);
            assert_eq!(table.attachments.snapshot(), attachments_before);
        }
    }

    // -----------------------------------------------------------------------
    // Directives
    // -----------------------------------------------------------------------

    #[test]
    fn repeal_directive_returns_repealed_law() {
        let mut table = Table::new();
        let _ = table.resolve(&fleet_regulations(), &VoteResult::new("For"));

        let abolishment = AgendaCardRef::directive(
            DirectiveDefinition::new("Judicial Abolishment", "")
                .with_outcomes(["Elect Law"])
                .on("Elect Law", EffectTemplate::RepealElectedLaw)
                .discard_when_no_laws(),
        );
        let outcome = table.resolve(
            &abolishment,
            &VoteResult::elect("Elect Law", "Fleet Regulations"),
        );

        assert!(outcome.result.directive_executed);
        assert!(!outcome.result.law_enacted);
        assert_eq!(outcome.repealed_laws.len(), 1);
        assert!(table.laws.is_empty());
    }

    #[test]
    fn elected_law_must_be_active() {
        let mut table = Table::new();
        let abolishment = AgendaCardRef::directive(
            DirectiveDefinition::new("Judicial Abolishment", "")
                .with_outcomes(["Elect Law"])
                .on("Elect Law", EffectTemplate::RepealElectedLaw),
        );
        let outcome = table.resolve(
            &abolishment,
            &VoteResult::elect("Elect Law", "Fleet Regulations"),
        );
        assert!(!outcome.result.success);
        assert!(!outcome.result.directive_executed);
    }

    #[test]
    fn game_effects_fan_out_in_resolution_order() {
        let mut table = Table::new();
        let arms = AgendaCardRef::directive(
            DirectiveDefinition::new("Arms Reduction", "")
                .on(
                    "For",
                    EffectTemplate::EachPlayer {
                        kind: String::from("destroy_excess_dreadnoughts"),
                        amount: 2,
                    },
                )
                .on(
                    "Against",
                    EffectTemplate::Global {
                        kind: String::from("exhaust_technology_planets"),
                        amount: 1,
                    },
                ),
        );

        let outcome = table.resolve(&arms, &VoteResult::new("For"));
        let players: Vec<Option<&str>> = outcome
            .game_effects
            .iter()
            .map(|e| e.player_id.as_deref())
            .collect();
        assert_eq!(players, vec![Some("P1"), Some("P2"), Some("P3")]);

        let against = table.resolve(&arms, &VoteResult::new("Against"));
        assert_eq!(against.game_effects.len(), 1);
        assert!(against.result.directive_executed);
    }

    // -----------------------------------------------------------------------
    // Attachments
    // -----------------------------------------------------------------------

    #[test]
    fn attachable_directive_attaches_to_elected_planet() {
        let mut table = Table::new();
        let outcome = table.resolve(&core_mining(), &VoteResult::elect("Elect Planet", "arinam"));

        assert!(outcome.result.success);
        assert!(outcome.result.directive_executed);
        let arinam = table.planets.get("arinam").cloned();
        let stats = arinam.map(|p| table.attachments.derived_stats(&p));
        assert_eq!(stats.map(|s| s.resources), Some(3));
    }

    #[test]
    fn ineligible_planet_fails_without_mutation() {
        let mut table = Table::new();
        let outcome = table.resolve(&core_mining(), &VoteResult::elect("Elect Planet", "quann"));
        assert!(!outcome.result.success);
        assert!(!outcome.result.errors.is_empty());
        assert!(table.attachments.is_empty());

        let home = table.resolve(&core_mining(), &VoteResult::elect("Elect Planet", "jord"));
        assert!(!home.result.success);
        assert!(table.attachments.is_empty());
    }

    #[test]
    fn unknown_planet_fails() {
        let mut table = Table::new();
        let outcome = table.resolve(&core_mining(), &VoteResult::elect("Elect Planet", "nowhere"));
        assert!(!outcome.result.success);
        assert!(table.attachments.is_empty());
    }

    #[test]
    fn reattaching_same_card_fails() {
        let mut table = Table::new();
        let mining = core_mining();
        let first = table.resolve(&mining, &VoteResult::elect("Elect Planet", "arinam"));
        assert!(first.result.success);
        let again = table.resolve(&mining, &VoteResult::elect("Elect Planet", "arinam"));
        assert!(!again.result.success);
        assert_eq!(table.attachments.len(), 1);
    }

    #[test]
    fn discard_on_reveal_sees_laws() {
        let mut table = Table::new();
        let abolishment = AgendaCardRef::directive(
            DirectiveDefinition::new("Judicial Abolishment", "")
                .with_outcomes(["Elect Law"])
                .discard_when_no_laws(),
        );
        let context = GameContext::new("agenda");
        let resolver =
            AgendaEffectResolver::new(&mut table.laws, &mut table.attachments, &table.planets);
        assert!(resolver.should_discard_on_reveal(&abolishment, &context));
    }
}
