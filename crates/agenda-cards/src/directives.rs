//! Standard one-shot directives.

use agenda_engine::{DirectiveDefinition, EffectTemplate};

/// New Constitution.
pub const NEW_CONSTITUTION: &str = "New Constitution";
/// Judicial Abolishment.
pub const JUDICIAL_ABOLISHMENT: &str = "Judicial Abolishment";
/// Economic Equality.
pub const ECONOMIC_EQUALITY: &str = "Economic Equality";
/// Incentive Program.
pub const INCENTIVE_PROGRAM: &str = "Incentive Program";
/// Arms Reduction.
pub const ARMS_REDUCTION: &str = "Arms Reduction";

fn each_player(kind: &str, amount: i32) -> EffectTemplate {
    EffectTemplate::EachPlayer {
        kind: kind.to_owned(),
        amount,
    }
}

fn global(kind: &str, amount: i32) -> EffectTemplate {
    EffectTemplate::Global {
        kind: kind.to_owned(),
        amount,
    }
}

/// Every standard directive, in catalog order.
pub fn standard_directives() -> Vec<DirectiveDefinition> {
    vec![
        DirectiveDefinition::new(
            NEW_CONSTITUTION,
            "For: discard all laws in play. At the start of the next round, each player \
             exhausts each planet in their home system.",
        )
        .on("For", EffectTemplate::RepealAllLaws)
        .on("For", each_player("exhaust_home_planets", 1))
        .discard_when_no_laws(),
        DirectiveDefinition::new(JUDICIAL_ABOLISHMENT, "Discard the elected law from play.")
            .with_outcomes(["Elect Law"])
            .on("Elect Law", EffectTemplate::RepealElectedLaw)
            .discard_when_no_laws(),
        DirectiveDefinition::new(
            ECONOMIC_EQUALITY,
            "For: each player returns all of their trade goods, then gains 5 trade goods. \
             Against: each player returns all of their trade goods.",
        )
        .on("For", each_player("set_trade_goods", 5))
        .on("Against", each_player("set_trade_goods", 0)),
        DirectiveDefinition::new(
            INCENTIVE_PROGRAM,
            "For: draw and reveal 1 stage I public objective. \
             Against: draw and reveal 1 stage II public objective.",
        )
        .on("For", global("reveal_stage_one_objective", 1))
        .on("Against", global("reveal_stage_two_objective", 1)),
        DirectiveDefinition::new(
            ARMS_REDUCTION,
            "For: each player destroys all but 2 of their dreadnoughts and all but 4 of their \
             cruisers. Against: at the start of the next round, each player exhausts each planet \
             with a technology specialty.",
        )
        .on("For", each_player("limit_dreadnoughts", 2))
        .on("For", each_player("limit_cruisers", 4))
        .on("Against", global("exhaust_technology_specialty_planets", 1)),
    ]
}
