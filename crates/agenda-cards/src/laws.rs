//! Standard law cards.
//!
//! Every minister is its own conflict target: re-electing a minister
//! replaces the previous holder, while different ministers coexist.

use agenda_engine::{ConflictRule, LawDefinition};

/// Fleet Regulations.
pub const FLEET_REGULATIONS: &str = "Fleet Regulations";
/// Anti-Intellectual Revolution.
pub const ANTI_INTELLECTUAL_REVOLUTION: &str = "Anti-Intellectual Revolution";
/// Minister of Commerce.
pub const MINISTER_OF_COMMERCE: &str = "Minister of Commerce";
/// Minister of War.
pub const MINISTER_OF_WAR: &str = "Minister of War";
/// Minister of Sciences.
pub const MINISTER_OF_SCIENCES: &str = "Minister of Sciences";
/// Executive Sanctions.
pub const EXECUTIVE_SANCTIONS: &str = "Executive Sanctions";
/// Shard of the Throne.
pub const SHARD_OF_THE_THRONE: &str = "Shard of the Throne";

const ELECT_PLAYER: &str = "Elect Player";

fn minister(name: &str, description: &str, action_type: &str) -> LawDefinition {
    LawDefinition::new(name, description)
        .with_outcomes([ELECT_PLAYER])
        .with_conflict(ConflictRule::SameName)
        .scoped_to(action_type)
        .elected_player_only()
}

/// Every standard law, in catalog order.
pub fn standard_laws() -> Vec<LawDefinition> {
    vec![
        LawDefinition::new(
            FLEET_REGULATIONS,
            "Each player cannot have more than 4 tokens in their fleet pool",
        )
        .with_effects(["fleet_pool"])
        .with_conflict(ConflictRule::SameName)
        .scoped_to("fleet_pool"),
        LawDefinition::new(
            ANTI_INTELLECTUAL_REVOLUTION,
            "After a player researches a technology, they must destroy 1 of their \
             non-fighter ships",
        )
        .with_effects(["research_technology", "unit_destruction"])
        .with_conflict(ConflictRule::SameName)
        .scoped_to("research_technology"),
        minister(
            MINISTER_OF_COMMERCE,
            "After {target} replenishes commodities, they gain 1 trade good for each neighbor",
            "replenish_commodities",
        )
        .with_effects(["trade_goods"]),
        minister(
            MINISTER_OF_WAR,
            "{target} may remove 1 of their command tokens from the game board",
            "tactical_action",
        )
        .with_effects(["command_tokens"]),
        minister(
            MINISTER_OF_SCIENCES,
            "When {target} resolves a technology primary ability, they do not spend resources",
            "research_technology",
        )
        .with_effects(["research_technology", "resources"]),
        LawDefinition::new(
            EXECUTIVE_SANCTIONS,
            "Each player can have a maximum of 3 action cards in their hand",
        )
        .with_effects(["action_card_limit"])
        .with_conflict(ConflictRule::SameName)
        .scoped_to("draw_action_card"),
        LawDefinition::new(
            SHARD_OF_THE_THRONE,
            "{target} gains 1 victory point while holding this card",
        )
        .with_outcomes([ELECT_PLAYER])
        .with_effects(["victory_points"])
        .with_conflict(ConflictRule::SameName),
    ]
}

#[cfg(test)]
mod tests {
    use agenda_engine::LawCard;

    use super::*;

    #[test]
    fn ministers_are_elections() {
        for law in standard_laws()
            .iter()
            .filter(|l| l.name.starts_with("Minister of"))
        {
            assert_eq!(law.enacting_outcome(), ELECT_PLAYER);
            assert!(law.scope.elected_player_only);
            assert_eq!(law.conflict, ConflictRule::SameName);
        }
    }

    #[test]
    fn for_against_laws_enact_on_for() {
        let laws = standard_laws();
        let fleet = laws.iter().find(|l| l.name == FLEET_REGULATIONS);
        assert_eq!(fleet.map(LawCard::enacting_outcome).as_deref(), Some("For"));
    }
}
