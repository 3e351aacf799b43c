//! Active law tracking.
//!
//! The [`LawManager`] owns every [`ActiveLaw`] in play. Enactment follows a
//! replace-on-conflict policy: any active law the incoming law's card
//! conflicts with is superseded (removed) before the new law is stored, so a
//! conflict group never holds more than one law.

use std::sync::Arc;

use agenda_types::{ActiveLawRecord, AgendaType, GameContext};

use crate::card::LawCard;
use crate::error::AgendaError;
use crate::registry::AgendaCardRegistry;

// ---------------------------------------------------------------------------
// ActiveLaw
// ---------------------------------------------------------------------------

/// A law currently in effect.
#[derive(Debug, Clone)]
pub struct ActiveLaw {
    /// The card that created this law.
    card: Arc<dyn LawCard>,
    /// Round the law was enacted in.
    enacted_round: u32,
    /// Human-readable effect text.
    effect_description: String,
    /// Elected player, planet, or other target.
    elected_target: Option<String>,
}

impl ActiveLaw {
    /// Create an active law record.
    ///
    /// Prefer [`create_active_law`](crate::card::create_active_law), which
    /// validates the outcome and election target first.
    pub fn new(
        card: Arc<dyn LawCard>,
        enacted_round: u32,
        effect_description: impl Into<String>,
        elected_target: Option<String>,
    ) -> Self {
        Self {
            card,
            enacted_round,
            effect_description: effect_description.into(),
            elected_target,
        }
    }

    /// The card that created this law.
    pub const fn card(&self) -> &Arc<dyn LawCard> {
        &self.card
    }

    /// The law card's name.
    pub fn name(&self) -> &str {
        self.card.name()
    }

    /// Round the law was enacted in.
    pub const fn enacted_round(&self) -> u32 {
        self.enacted_round
    }

    /// Human-readable effect text.
    pub fn effect_description(&self) -> &str {
        &self.effect_description
    }

    /// Elected target, for election laws.
    pub fn elected_target(&self) -> Option<&str> {
        self.elected_target.as_deref()
    }

    /// Whether this law applies to `context`, per its card.
    pub fn applies_to_context(&self, context: &GameContext) -> bool {
        self.card.applies_to_context(self, context)
    }

    /// The persistence record for this law.
    pub fn to_record(&self) -> ActiveLawRecord {
        ActiveLawRecord {
            card_name: self.name().to_owned(),
            enacted_round: self.enacted_round,
            effect_description: self.effect_description.clone(),
            elected_target: self.elected_target.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// LawManager
// ---------------------------------------------------------------------------

/// The set of laws currently in play, in enactment order.
#[derive(Debug, Clone, Default)]
pub struct LawManager {
    laws: Vec<ActiveLaw>,
}

impl LawManager {
    /// Create a manager with no laws in play.
    pub const fn new() -> Self {
        Self { laws: Vec::new() }
    }

    /// Put `law` into play, superseding every law its card conflicts with.
    ///
    /// Returns the superseded laws so the caller can discard their cards.
    pub fn enact_law(&mut self, law: ActiveLaw) -> Vec<ActiveLaw> {
        let (superseded, kept): (Vec<ActiveLaw>, Vec<ActiveLaw>) =
            core::mem::take(&mut self.laws)
                .into_iter()
                .partition(|active| law.card().conflicts_with_law(active));
        self.laws = kept;

        for old in &superseded {
            tracing::info!(
                law = old.name(),
                elected_target = old.elected_target(),
                superseded_by = law.name(),
                "law superseded"
            );
        }
        tracing::info!(
            law = law.name(),
            elected_target = law.elected_target(),
            round = law.enacted_round(),
            "law enacted"
        );

        self.laws.push(law);
        superseded
    }

    /// Every law in play, in enactment order.
    pub fn get_active_laws(&self) -> &[ActiveLaw] {
        &self.laws
    }

    /// The laws that apply to `context`.
    pub fn get_laws_affecting_context(&self, context: &GameContext) -> Vec<&ActiveLaw> {
        self.laws
            .iter()
            .filter(|law| law.applies_to_context(context))
            .collect()
    }

    /// The active law with this card name, if any.
    pub fn get_law(&self, name: &str) -> Option<&ActiveLaw> {
        self.laws.iter().find(|law| law.name() == name)
    }

    /// Whether a law with this card name is in play.
    pub fn is_law_active(&self, name: &str) -> bool {
        self.get_law(name).is_some()
    }

    /// Remove the law with this card name.
    ///
    /// Returns `true` if a law was found and removed.
    pub fn remove_law(&mut self, name: &str) -> bool {
        self.take_law(name).is_some()
    }

    /// Remove and return the law with this card name.
    pub fn take_law(&mut self, name: &str) -> Option<ActiveLaw> {
        let index = self.laws.iter().position(|law| law.name() == name)?;
        let law = self.laws.remove(index);
        tracing::info!(law = law.name(), "law removed");
        Some(law)
    }

    /// Remove every law.
    pub fn clear_all_laws(&mut self) {
        self.laws.clear();
    }

    /// Remove and return every law, in enactment order.
    pub fn take_all_laws(&mut self) -> Vec<ActiveLaw> {
        core::mem::take(&mut self.laws)
    }

    /// Number of laws in play.
    pub fn len(&self) -> usize {
        self.laws.len()
    }

    /// Whether no laws are in play.
    pub fn is_empty(&self) -> bool {
        self.laws.is_empty()
    }

    /// Persistence records for every law, in enactment order.
    pub fn snapshot(&self) -> Vec<ActiveLawRecord> {
        self.laws.iter().map(ActiveLaw::to_record).collect()
    }

    /// Rebuild a manager from persisted records.
    ///
    /// Records are restored verbatim; no conflict resolution runs, since the
    /// saved set was already conflict-free.
    pub fn restore(
        records: &[ActiveLawRecord],
        registry: &AgendaCardRegistry,
    ) -> Result<Self, AgendaError> {
        let mut laws = Vec::with_capacity(records.len());
        for record in records {
            let card = registry
                .get_card(&record.card_name)
                .ok_or_else(|| AgendaError::UnknownCard(record.card_name.clone()))?;
            let law_card = card.as_law().ok_or_else(|| AgendaError::CardKindMismatch {
                card: record.card_name.clone(),
                expected: AgendaType::Law,
            })?;
            laws.push(ActiveLaw::new(
                Arc::clone(law_card),
                record.enacted_round,
                record.effect_description.clone(),
                record.elected_target.clone(),
            ));
        }
        Ok(Self { laws })
    }
}
