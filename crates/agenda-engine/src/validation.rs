//! Validation checks shared by cards, the registry, and the resolver.
//!
//! Every check here is pure: it inspects its arguments and returns an
//! [`AgendaError`] describing the first problem found.

use agenda_types::{ElectionKind, VoteResult};

use crate::card::AgendaCardRef;
use crate::error::AgendaError;

/// Reject blank card names.
pub fn validate_card_name(name: &str) -> Result<(), AgendaError> {
    if name.trim().is_empty() {
        return Err(AgendaError::EmptyCardName);
    }
    Ok(())
}

/// Reject a card without voting outcomes.
pub fn validate_outcome_set(card: &str, outcomes: &[String]) -> Result<(), AgendaError> {
    if outcomes.is_empty() {
        return Err(AgendaError::NoVotingOutcomes {
            card: card.to_owned(),
        });
    }
    Ok(())
}

/// Reject an outcome that is not in `legal`.
pub fn validate_outcome(card: &str, legal: &[String], outcome: &str) -> Result<(), AgendaError> {
    if legal.iter().any(|o| o == outcome) {
        return Ok(());
    }
    Err(AgendaError::InvalidOutcome {
        card: card.to_owned(),
        outcome: outcome.to_owned(),
        legal: legal.join(", "),
    })
}

/// Reject an election outcome without a usable target.
///
/// Non-election outcomes pass regardless of `target`.
pub fn validate_election_target(
    card: &str,
    outcome: &str,
    target: Option<&str>,
) -> Result<(), AgendaError> {
    if ElectionKind::from_outcome(outcome).is_none() {
        return Ok(());
    }
    match target {
        Some(t) if !t.trim().is_empty() => Ok(()),
        Some(_) | None => Err(AgendaError::MissingElectionTarget {
            card: card.to_owned(),
            outcome: outcome.to_owned(),
        }),
    }
}

/// Check a vote against a card: legal outcome and, for elections, a target.
pub fn validate_vote(card: &AgendaCardRef, vote: &VoteResult) -> Result<(), AgendaError> {
    validate_outcome(card.name(), &card.voting_outcomes(), &vote.outcome)?;
    validate_election_target(card.name(), &vote.outcome, vote.elected_target.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcomes(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn blank_names_are_rejected() {
        assert!(matches!(validate_card_name(""), Err(AgendaError::EmptyCardName)));
        assert!(matches!(validate_card_name("   "), Err(AgendaError::EmptyCardName)));
        assert!(validate_card_name("Fleet Regulations").is_ok());
    }

    #[test]
    fn empty_outcome_sets_are_rejected() {
        assert!(matches!(
            validate_outcome_set("Nothing", &[]),
            Err(AgendaError::NoVotingOutcomes { .. })
        ));
    }

    #[test]
    fn outcome_must_be_declared() {
        let legal = outcomes(&["For", "Against"]);
        assert!(validate_outcome("Law", &legal, "For").is_ok());

        let err = validate_outcome("Law", &legal, "Abstain").err();
        match err {
            Some(AgendaError::InvalidOutcome { legal, outcome, .. }) => {
                assert_eq!(legal, "For, Against");
                assert_eq!(outcome, "Abstain");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn outcome_match_is_case_sensitive() {
        let legal = outcomes(&["For", "Against"]);
        assert!(validate_outcome("Law", &legal, "for").is_err());
    }

    #[test]
    fn election_outcomes_need_non_blank_target() {
        assert!(validate_election_target("Minister", "Elect Player", Some("P1")).is_ok());
        assert!(validate_election_target("Minister", "Elect Player", None).is_err());
        assert!(validate_election_target("Minister", "Elect Player", Some(" ")).is_err());
        assert!(validate_election_target("Law", "For", None).is_ok());
    }
}
