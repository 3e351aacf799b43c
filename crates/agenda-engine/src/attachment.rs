//! Planet attachments granted by planet-attachable directives.
//!
//! An attachment binds one card to one planet. A planet may carry several
//! different cards, but never the same card twice, and a card sits on at
//! most one planet at a time.
//!
//! Attachment effects are additive: [`PlanetAttachmentManager::derived_stats`]
//! adds every attachment's bonuses on top of the planet's printed values and
//! never overwrites them.

use std::collections::BTreeMap;
use std::sync::Arc;

use agenda_types::{AgendaType, Planet, PlanetAttachmentRecord, PlanetStats};

use crate::card::PlanetAttachableCard;
use crate::error::{AgendaError, AttachmentError};
use crate::registry::AgendaCardRegistry;

/// Effect key added to a planet's resource value.
pub const RESOURCE_BONUS: &str = "resource_bonus";

/// Effect key added to a planet's influence value.
pub const INFLUENCE_BONUS: &str = "influence_bonus";

// ---------------------------------------------------------------------------
// PlanetLookup
// ---------------------------------------------------------------------------

/// Read-only access to the surrounding game's planets.
pub trait PlanetLookup {
    /// The planet with this id, if it exists.
    fn planet(&self, planet_id: &str) -> Option<&Planet>;
}

impl PlanetLookup for BTreeMap<String, Planet> {
    fn planet(&self, planet_id: &str) -> Option<&Planet> {
        self.get(planet_id)
    }
}

impl PlanetLookup for [Planet] {
    fn planet(&self, planet_id: &str) -> Option<&Planet> {
        self.iter().find(|p| p.id == planet_id)
    }
}

impl PlanetLookup for Vec<Planet> {
    fn planet(&self, planet_id: &str) -> Option<&Planet> {
        self.as_slice().planet(planet_id)
    }
}

// ---------------------------------------------------------------------------
// PlanetAttachment
// ---------------------------------------------------------------------------

/// One card attached to one planet.
#[derive(Debug, Clone)]
pub struct PlanetAttachment {
    card: Arc<dyn PlanetAttachableCard>,
    planet_id: String,
    effects: BTreeMap<String, i32>,
}

impl PlanetAttachment {
    /// The attached card.
    pub const fn card(&self) -> &Arc<dyn PlanetAttachableCard> {
        &self.card
    }

    /// The attached card's name.
    pub fn card_name(&self) -> &str {
        self.card.name()
    }

    /// The planet holding the card.
    pub fn planet_id(&self) -> &str {
        &self.planet_id
    }

    /// The effects the attachment grants.
    pub const fn effects(&self) -> &BTreeMap<String, i32> {
        &self.effects
    }

    /// The persistence record for this attachment.
    pub fn to_record(&self) -> PlanetAttachmentRecord {
        PlanetAttachmentRecord {
            card_name: self.card_name().to_owned(),
            planet_id: self.planet_id.clone(),
            effects: self.effects.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// PlanetAttachmentManager
// ---------------------------------------------------------------------------

/// Every planet attachment in play, in attachment order.
#[derive(Debug, Clone, Default)]
pub struct PlanetAttachmentManager {
    attachments: Vec<PlanetAttachment>,
}

impl PlanetAttachmentManager {
    /// Create a manager with no attachments.
    pub const fn new() -> Self {
        Self {
            attachments: Vec::new(),
        }
    }

    /// Check whether `card` could attach to `planet` without attaching it.
    pub fn check_attachment(
        &self,
        card: &Arc<dyn PlanetAttachableCard>,
        planet: &Planet,
    ) -> Result<(), AttachmentError> {
        if let Some(existing) = self.attachment_for_card(card.name()) {
            if existing.planet_id == planet.id {
                return Err(AttachmentError::AlreadyAttached {
                    card: card.name().to_owned(),
                    planet: planet.id.clone(),
                });
            }
            return Err(AttachmentError::AlreadyAttachedElsewhere {
                card: card.name().to_owned(),
                planet: existing.planet_id.clone(),
            });
        }
        if !card.can_attach_to_planet(planet) {
            return Err(AttachmentError::NotEligible {
                card: card.name().to_owned(),
                planet: planet.id.clone(),
            });
        }
        Ok(())
    }

    /// Attach `card` to `planet`, recording the card's planet effects.
    pub fn attach_card_to_planet(
        &mut self,
        card: Arc<dyn PlanetAttachableCard>,
        planet: &Planet,
    ) -> Result<(), AttachmentError> {
        if let Err(err) = self.check_attachment(&card, planet) {
            tracing::warn!(card = card.name(), planet = %planet.id, "attachment rejected: {err}");
            return Err(err);
        }
        let effects = card.planet_effects();
        tracing::info!(
            card = card.name(),
            planet = %planet.id,
            effects = ?effects,
            "card attached to planet"
        );
        self.attachments.push(PlanetAttachment {
            card,
            planet_id: planet.id.clone(),
            effects,
        });
        Ok(())
    }

    /// The cards attached to a planet, in attachment order.
    pub fn get_attachments_for_planet(
        &self,
        planet_id: &str,
    ) -> Vec<&Arc<dyn PlanetAttachableCard>> {
        self.attachments
            .iter()
            .filter(|a| a.planet_id == planet_id)
            .map(PlanetAttachment::card)
            .collect()
    }

    /// Where a card is attached, if anywhere.
    pub fn attachment_for_card(&self, card_name: &str) -> Option<&PlanetAttachment> {
        self.attachments.iter().find(|a| a.card_name() == card_name)
    }

    /// Detach a card from a planet.
    ///
    /// Returns `true` if the attachment existed.
    pub fn remove_attachment(&mut self, planet_id: &str, card_name: &str) -> bool {
        let Some(index) = self
            .attachments
            .iter()
            .position(|a| a.planet_id == planet_id && a.card_name() == card_name)
        else {
            return false;
        };
        self.attachments.remove(index);
        tracing::info!(card = card_name, planet = planet_id, "attachment removed");
        true
    }

    /// Sum of every attachment effect on a planet, per key.
    pub fn planet_effects(&self, planet_id: &str) -> BTreeMap<String, i32> {
        let mut totals: BTreeMap<String, i32> = BTreeMap::new();
        for attachment in self.attachments.iter().filter(|a| a.planet_id == planet_id) {
            for (key, value) in &attachment.effects {
                let total = totals.entry(key.clone()).or_insert(0);
                *total = total.saturating_add(*value);
            }
        }
        totals
    }

    /// The planet's values with every attachment bonus added.
    pub fn derived_stats(&self, planet: &Planet) -> PlanetStats {
        let mut extra = self.planet_effects(&planet.id);
        let resource_bonus = extra.remove(RESOURCE_BONUS).unwrap_or(0);
        let influence_bonus = extra.remove(INFLUENCE_BONUS).unwrap_or(0);
        PlanetStats {
            planet_id: planet.id.clone(),
            resources: planet.resources.saturating_add(resource_bonus),
            influence: planet.influence.saturating_add(influence_bonus),
            extra,
        }
    }

    /// Every attachment, in attachment order.
    pub fn attachments(&self) -> &[PlanetAttachment] {
        &self.attachments
    }

    /// Number of attachments.
    pub fn len(&self) -> usize {
        self.attachments.len()
    }

    /// Whether there are no attachments.
    pub fn is_empty(&self) -> bool {
        self.attachments.is_empty()
    }

    /// Remove every attachment.
    pub fn clear(&mut self) {
        self.attachments.clear();
    }

    /// Persistence records for every attachment.
    pub fn snapshot(&self) -> Vec<PlanetAttachmentRecord> {
        self.attachments.iter().map(PlanetAttachment::to_record).collect()
    }

    /// Rebuild a manager from persisted records.
    ///
    /// Effects are restored from the record, not re-read from the card, so a
    /// save keeps the bonuses that were granted at attachment time.
    pub fn restore(
        records: &[PlanetAttachmentRecord],
        registry: &AgendaCardRegistry,
    ) -> Result<Self, AgendaError> {
        let mut attachments = Vec::with_capacity(records.len());
        for record in records {
            let card = registry
                .get_card(&record.card_name)
                .ok_or_else(|| AgendaError::UnknownCard(record.card_name.clone()))?;
            let attachable =
                card.as_planet_attachable()
                    .ok_or_else(|| AgendaError::CardKindMismatch {
                        card: record.card_name.clone(),
                        expected: AgendaType::Directive,
                    })?;
            attachments.push(PlanetAttachment {
                card: Arc::clone(attachable),
                planet_id: record.planet_id.clone(),
                effects: record.effects.clone(),
            });
        }
        Ok(Self { attachments })
    }
}
