//! Standard planet-attachable directives.

use agenda_engine::PlanetAttachmentDefinition;
use agenda_engine::attachment::{INFLUENCE_BONUS, RESOURCE_BONUS};
use agenda_types::{AttachmentType, PlanetTrait};

/// Core Mining.
pub const CORE_MINING: &str = "Core Mining";
/// Senate Sanctuary.
pub const SENATE_SANCTUARY: &str = "Senate Sanctuary";
/// Terraforming Initiative.
pub const TERRAFORMING_INITIATIVE: &str = "Terraforming Initiative";
/// Demilitarized Zone.
pub const DEMILITARIZED_ZONE: &str = "Demilitarized Zone";
/// Research Team: Biotic.
pub const RESEARCH_TEAM_BIOTIC: &str = "Research Team: Biotic";

/// Every standard attachment, in catalog order.
pub fn standard_attachments() -> Vec<PlanetAttachmentDefinition> {
    vec![
        PlanetAttachmentDefinition::new(
            CORE_MINING,
            "Destroy 1 infantry on the elected planet. Its resource value is increased by 2.",
            AttachmentType::ResourceBonus,
        )
        .with_outcomes(["Elect Hazardous or Industrial Planet"])
        .with_effect(RESOURCE_BONUS, 2)
        .with_effect("infantry_destroyed", 1)
        .eligible(PlanetTrait::Hazardous)
        .eligible(PlanetTrait::Industrial)
        .exclude_home_planets(),
        PlanetAttachmentDefinition::new(
            SENATE_SANCTUARY,
            "The influence value of the elected planet is increased by 2.",
            AttachmentType::InfluenceBonus,
        )
        .with_outcomes(["Elect Cultural Planet"])
        .with_effect(INFLUENCE_BONUS, 2)
        .eligible(PlanetTrait::Cultural)
        .exclude_home_planets(),
        PlanetAttachmentDefinition::new(
            TERRAFORMING_INITIATIVE,
            "The resource and influence values of the elected planet are increased by 1.",
            AttachmentType::Hybrid,
        )
        .with_outcomes(["Elect Hazardous Planet"])
        .with_effect(RESOURCE_BONUS, 1)
        .with_effect(INFLUENCE_BONUS, 1)
        .eligible(PlanetTrait::Hazardous)
        .exclude_home_planets(),
        PlanetAttachmentDefinition::new(
            DEMILITARIZED_ZONE,
            "Destroy all units on the elected planet. Units cannot be landed, produced, or \
             placed on it.",
            AttachmentType::Restriction,
        )
        .with_outcomes(["Elect Cultural Planet"])
        .with_effect("demilitarized", 1)
        .eligible(PlanetTrait::Cultural)
        .exclude_home_planets(),
        PlanetAttachmentDefinition::new(
            RESEARCH_TEAM_BIOTIC,
            "The elected planet gains a biotic technology specialty.",
            AttachmentType::TechnologySpecialty,
        )
        .with_outcomes(["Elect Industrial Planet"])
        .with_effect("biotic_specialty", 1)
        .eligible(PlanetTrait::Industrial)
        .exclude_home_planets(),
    ]
}
