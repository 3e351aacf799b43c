//! Enumeration types for the agenda resolution engine.

use serde::{Deserialize, Serialize};

use crate::ELECT_PREFIX;

// ---------------------------------------------------------------------------
// AgendaType
// ---------------------------------------------------------------------------

/// The lifetime class of an agenda card's effect.
///
/// Fixed per card variant: a law card is always [`AgendaType::Law`] and every
/// directive (including planet-attachable directives) is always
/// [`AgendaType::Directive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgendaType {
    /// Enactment creates a persistent effect that stays in play.
    Law,
    /// Resolution applies a one-shot effect.
    Directive,
}

impl core::fmt::Display for AgendaType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Law => write!(f, "Law"),
            Self::Directive => write!(f, "Directive"),
        }
    }
}

// ---------------------------------------------------------------------------
// PlanetTrait
// ---------------------------------------------------------------------------

/// Planet classification used by attachment eligibility checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlanetTrait {
    /// Cultural planet.
    Cultural,
    /// Hazardous planet.
    Hazardous,
    /// Industrial planet.
    Industrial,
}

// ---------------------------------------------------------------------------
// AttachmentType
// ---------------------------------------------------------------------------

/// What kind of ongoing effect an attached agenda card grants its planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttachmentType {
    /// Raises the planet's resource value.
    ResourceBonus,
    /// Raises the planet's influence value.
    InfluenceBonus,
    /// Raises both resource and influence values.
    Hybrid,
    /// Restricts what may happen on or to the planet.
    Restriction,
    /// Grants the planet a technology specialty.
    TechnologySpecialty,
}

// ---------------------------------------------------------------------------
// ElectionKind
// ---------------------------------------------------------------------------

/// The kind of thing an election-style outcome chooses.
///
/// Election outcomes are the ones spelled `Elect <something>`; they carry
/// their choice in [`VoteResult::elected_target`](crate::VoteResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ElectionKind {
    /// A player is elected.
    Player,
    /// A planet is elected.
    Planet,
    /// An active law is elected.
    Law,
    /// Any other election (secret objectives, strategy cards, ...).
    Other,
}

impl ElectionKind {
    /// Classify an outcome string.
    ///
    /// Returns `None` for outcomes that are not elections (`For`, `Against`,
    /// custom outcomes).
    pub fn from_outcome(outcome: &str) -> Option<Self> {
        let subject = outcome.strip_prefix(ELECT_PREFIX)?;
        let kind = if subject == "Player" {
            Self::Player
        } else if subject.ends_with("Planet") {
            Self::Planet
        } else if subject == "Law" {
            Self::Law
        } else {
            Self::Other
        };
        Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn election_kind_classifies_outcomes() {
        assert_eq!(ElectionKind::from_outcome("Elect Player"), Some(ElectionKind::Player));
        assert_eq!(
            ElectionKind::from_outcome("Elect Cultural Planet"),
            Some(ElectionKind::Planet)
        );
        assert_eq!(ElectionKind::from_outcome("Elect Law"), Some(ElectionKind::Law));
        assert_eq!(
            ElectionKind::from_outcome("Elect Secret Objective"),
            Some(ElectionKind::Other)
        );
        assert_eq!(ElectionKind::from_outcome("For"), None);
        assert_eq!(ElectionKind::from_outcome("Elector"), None);
    }

    #[test]
    fn agenda_type_displays_plain_name() {
        assert_eq!(AgendaType::Law.to_string(), "Law");
        assert_eq!(AgendaType::Directive.to_string(), "Directive");
    }
}
