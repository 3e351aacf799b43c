//! The agenda deck.
//!
//! Every card the deck was built with lives in exactly one of four
//! partitions:
//!
//! | Partition | Meaning |
//! |-----------|---------|
//! | draw pile | face down, top card is the last element |
//! | in play | drawn and held by the caller |
//! | discard pile | resolved or cancelled, returns on reshuffle |
//! | removed from game | gone for good |
//!
//! Shuffles are deterministic: shuffle number `n` of a deck seeded with `s`
//! always produces the same permutation, so a deck restored from a
//! [`DeckSnapshot`] draws the same future cards as the deck that was saved.

use std::collections::{BTreeMap, BTreeSet};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use agenda_types::{DeckSnapshot, GameContext};

use crate::card::AgendaCardRef;
use crate::config::DeckConfig;
use crate::error::AgendaError;
use crate::law::LawManager;
use crate::registry::AgendaCardRegistry;

/// Odd constant spreading successive shuffle counts across the seed space.
const SHUFFLE_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// Outcome of a deck integrity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeckIntegrity {
    /// Every card is in exactly one partition.
    Intact,
    /// The partitions no longer match the deck's card set.
    Anomaly {
        /// Cards found in no partition.
        missing: Vec<String>,
        /// Cards found in more than one partition, or twice in one.
        duplicated: Vec<String>,
        /// Cards found in a partition that the deck was never built with.
        unexpected: Vec<String>,
    },
}

/// A card revealed for voting.
#[derive(Debug, Clone)]
pub struct Reveal {
    /// The card now in play.
    pub card: AgendaCardRef,
    /// Cards that cancelled themselves on reveal, in reveal order.
    pub discarded_on_reveal: Vec<String>,
}

// ---------------------------------------------------------------------------
// AgendaDeck
// ---------------------------------------------------------------------------

/// A shuffled agenda deck with draw, discard, and removal partitions.
#[derive(Debug, Clone)]
pub struct AgendaDeck {
    seed: u64,
    shuffle_count: u64,
    cards: BTreeMap<String, AgendaCardRef>,
    draw_pile: Vec<AgendaCardRef>,
    discard_pile: Vec<AgendaCardRef>,
    in_play: Vec<AgendaCardRef>,
    removed_from_game: Vec<AgendaCardRef>,
}

impl AgendaDeck {
    /// Build a deck from `cards` and shuffle it.
    ///
    /// Fails with [`AgendaError::DuplicateDeckCard`] if two cards share a
    /// name.
    pub fn new(cards: Vec<AgendaCardRef>, seed: u64) -> Result<Self, AgendaError> {
        let mut by_name = BTreeMap::new();
        for card in &cards {
            if by_name
                .insert(card.name().to_owned(), card.clone())
                .is_some()
            {
                return Err(AgendaError::DuplicateDeckCard(card.name().to_owned()));
            }
        }

        let mut deck = Self {
            seed,
            shuffle_count: 0,
            cards: by_name,
            draw_pile: cards,
            discard_pile: Vec::new(),
            in_play: Vec::new(),
            removed_from_game: Vec::new(),
        };
        deck.shuffle();
        tracing::debug!(cards = deck.total_cards(), seed, "agenda deck built");
        Ok(deck)
    }

    /// Build a deck from registered cards, honoring the config's include and
    /// exclude lists.
    ///
    /// An empty include list means every registered card. Naming an
    /// unregistered card in the include list fails with
    /// [`AgendaError::UnknownCard`].
    pub fn from_config(
        registry: &AgendaCardRegistry,
        config: &DeckConfig,
    ) -> Result<Self, AgendaError> {
        let candidates = if config.include.is_empty() {
            registry.get_all_cards()
        } else {
            config
                .include
                .iter()
                .map(|name| registry.require_card(name).cloned())
                .collect::<Result<Vec<_>, _>>()?
        };
        let excluded: BTreeSet<&str> = config.exclude.iter().map(String::as_str).collect();
        let cards = candidates
            .into_iter()
            .filter(|card| !excluded.contains(card.name()))
            .collect();
        Self::new(cards, config.seed)
    }

    /// Shuffle the draw pile.
    pub fn shuffle(&mut self) {
        let mut rng = StdRng::seed_from_u64(self.shuffle_seed());
        self.draw_pile.shuffle(&mut rng);
        self.shuffle_count = self.shuffle_count.wrapping_add(1);
        tracing::debug!(
            shuffle = self.shuffle_count,
            draw_pile = self.draw_pile.len(),
            "agenda deck shuffled"
        );
    }

    /// Seed for the next shuffle, derived from the deck seed and how many
    /// shuffles came before.
    const fn shuffle_seed(&self) -> u64 {
        self.seed ^ self.shuffle_count.wrapping_mul(SHUFFLE_MIX)
    }

    /// Draw the top card and put it in play.
    ///
    /// An empty draw pile is replenished from the discard pile and
    /// shuffled first. Fails with [`AgendaError::DeckEmpty`] if both piles
    /// are empty.
    pub fn draw_top_card(&mut self) -> Result<AgendaCardRef, AgendaError> {
        if self.draw_pile.is_empty() {
            if self.discard_pile.is_empty() {
                return Err(AgendaError::DeckEmpty);
            }
            tracing::debug!(
                cards = self.discard_pile.len(),
                "reshuffling discard pile into draw pile"
            );
            self.draw_pile = core::mem::take(&mut self.discard_pile);
            self.shuffle();
        }
        let card = self.draw_pile.pop().ok_or(AgendaError::DeckEmpty)?;
        tracing::debug!(card = card.name(), remaining = self.draw_pile.len(), "agenda drawn");
        self.in_play.push(card.clone());
        Ok(card)
    }

    /// Draw until a card that does not cancel itself on reveal turns up.
    ///
    /// Cancelled cards go to the discard pile and may come back through a
    /// reshuffle; a card cancelled twice is only reported once. The search
    /// gives up with [`AgendaError::NoRevealableCard`] once every drawable
    /// card has cancelled itself.
    pub fn reveal_next(
        &mut self,
        context: &GameContext,
        laws: &LawManager,
    ) -> Result<Reveal, AgendaError> {
        let drawable = self.draw_pile.len().saturating_add(self.discard_pile.len());
        let mut cancelled = BTreeSet::new();
        let mut discarded_on_reveal = Vec::new();

        // One pass over the current draw pile, then one over the reshuffled
        // whole, reaches every drawable card.
        for _ in 0..drawable.saturating_mul(2) {
            let card = self.draw_top_card()?;
            if !card.should_discard_on_reveal(context, laws) {
                return Ok(Reveal {
                    card,
                    discarded_on_reveal,
                });
            }
            self.discard_card(&card)?;
            if cancelled.insert(card.name().to_owned()) {
                tracing::info!(card = card.name(), "agenda discarded on reveal");
                discarded_on_reveal.push(card.name().to_owned());
            }
            if cancelled.len() >= drawable {
                break;
            }
        }

        if discarded_on_reveal.is_empty() {
            return Err(AgendaError::DeckEmpty);
        }
        Err(AgendaError::NoRevealableCard {
            discarded: discarded_on_reveal.len(),
        })
    }

    /// Put a card on the discard pile.
    ///
    /// The card leaves whichever partition holds it. Discarding a card that
    /// is already discarded changes nothing.
    pub fn discard_card(&mut self, card: &AgendaCardRef) -> Result<(), AgendaError> {
        let name = card.name();
        self.check_member(name)?;
        if self.removed_from_game.iter().any(|c| c.name() == name) {
            return Err(AgendaError::CardRemovedFromGame(name.to_owned()));
        }
        if self.discard_pile.iter().any(|c| c.name() == name) {
            return Ok(());
        }
        let taken = self.take_from_partitions(name)?;
        self.discard_pile.push(taken);
        Ok(())
    }

    /// Remove a card from the game permanently.
    ///
    /// The card leaves whichever partition holds it and never returns to
    /// the draw or discard pile. Removing it twice changes nothing.
    pub fn remove_from_game(&mut self, card: &AgendaCardRef) -> Result<(), AgendaError> {
        let name = card.name();
        self.check_member(name)?;
        if self.removed_from_game.iter().any(|c| c.name() == name) {
            return Ok(());
        }
        let taken = self.take_from_partitions(name)?;
        tracing::info!(card = name, "agenda removed from game");
        self.removed_from_game.push(taken);
        Ok(())
    }

    fn check_member(&self, name: &str) -> Result<(), AgendaError> {
        if self.cards.contains_key(name) {
            Ok(())
        } else {
            Err(AgendaError::CardNotInDeck(name.to_owned()))
        }
    }

    /// Pull a card out of the in-play, draw, or discard partition.
    fn take_from_partitions(&mut self, name: &str) -> Result<AgendaCardRef, AgendaError> {
        for pile in [
            &mut self.in_play,
            &mut self.draw_pile,
            &mut self.discard_pile,
        ] {
            if let Some(index) = pile.iter().position(|c| c.name() == name) {
                return Ok(pile.remove(index));
            }
        }
        Err(AgendaError::CardNotInDeck(name.to_owned()))
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// The card the next draw returns, without drawing it.
    ///
    /// `None` when the draw pile is empty, even if a reshuffle would refill
    /// it.
    pub fn peek_top_card(&self) -> Option<&AgendaCardRef> {
        self.draw_pile.last()
    }

    /// Cards left in the draw pile.
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Cards in the discard pile.
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// The discard pile, oldest first.
    pub fn discard_pile(&self) -> &[AgendaCardRef] {
        &self.discard_pile
    }

    /// Cards drawn and not yet discarded or removed, in draw order.
    pub fn in_play(&self) -> &[AgendaCardRef] {
        &self.in_play
    }

    /// Cards removed from the game.
    pub fn removed_from_game(&self) -> &[AgendaCardRef] {
        &self.removed_from_game
    }

    /// Number of cards the deck was built with.
    pub fn total_cards(&self) -> usize {
        self.cards.len()
    }

    /// The seed every shuffle derives from.
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffles performed so far, including the one at construction.
    pub const fn shuffle_count(&self) -> u64 {
        self.shuffle_count
    }

    /// Check that every card sits in exactly one partition.
    pub fn verify_integrity(&self) -> DeckIntegrity {
        let mut seen: BTreeMap<&str, usize> = BTreeMap::new();
        for card in self
            .draw_pile
            .iter()
            .chain(&self.discard_pile)
            .chain(&self.in_play)
            .chain(&self.removed_from_game)
        {
            let count = seen.entry(card.name()).or_insert(0);
            *count = count.saturating_add(1);
        }

        let missing: Vec<String> = self
            .cards
            .keys()
            .filter(|name| !seen.contains_key(name.as_str()))
            .cloned()
            .collect();
        let duplicated: Vec<String> = seen
            .iter()
            .filter(|&(_, &count)| count > 1)
            .map(|(name, _)| (*name).to_owned())
            .collect();
        let unexpected: Vec<String> = seen
            .keys()
            .filter(|name| !self.cards.contains_key(**name))
            .map(|name| (*name).to_owned())
            .collect();

        if missing.is_empty() && duplicated.is_empty() && unexpected.is_empty() {
            DeckIntegrity::Intact
        } else {
            tracing::warn!(
                missing = missing.len(),
                duplicated = duplicated.len(),
                unexpected = unexpected.len(),
                "agenda deck integrity anomaly"
            );
            DeckIntegrity::Anomaly {
                missing,
                duplicated,
                unexpected,
            }
        }
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Capture the deck's partitions and shuffle state.
    pub fn snapshot(&self) -> DeckSnapshot {
        fn names(pile: &[AgendaCardRef]) -> Vec<String> {
            pile.iter().map(|c| c.name().to_owned()).collect()
        }
        DeckSnapshot {
            seed: self.seed,
            shuffle_count: self.shuffle_count,
            draw_pile: names(&self.draw_pile),
            discard_pile: names(&self.discard_pile),
            in_play: names(&self.in_play),
            removed_from_game: names(&self.removed_from_game),
        }
    }

    /// Rebuild a deck from a snapshot without reshuffling.
    ///
    /// The deck's card set is the union of the snapshot's partitions.
    pub fn restore(
        snapshot: &DeckSnapshot,
        registry: &AgendaCardRegistry,
    ) -> Result<Self, AgendaError> {
        let mut cards = BTreeMap::new();
        let mut resolve = |names: &[String]| -> Result<Vec<AgendaCardRef>, AgendaError> {
            names
                .iter()
                .map(|name| {
                    let card = registry.require_card(name)?.clone();
                    if cards.insert(name.clone(), card.clone()).is_some() {
                        return Err(AgendaError::DuplicateDeckCard(name.clone()));
                    }
                    Ok(card)
                })
                .collect()
        };
        let draw_pile = resolve(&snapshot.draw_pile)?;
        let discard_pile = resolve(&snapshot.discard_pile)?;
        let in_play = resolve(&snapshot.in_play)?;
        let removed_from_game = resolve(&snapshot.removed_from_game)?;

        Ok(Self {
            seed: snapshot.seed,
            shuffle_count: snapshot.shuffle_count,
            cards,
            draw_pile,
            discard_pile,
            in_play,
            removed_from_game,
        })
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;
    use rand::rngs::SmallRng;

    use agenda_types::{AgendaResolutionResult, VoteResult};

    use super::*;
    use crate::card::{AgendaCard, DirectiveCard, DirectiveEffect};

    #[derive(Debug)]
    struct Stub {
        name: String,
        cancels: bool,
    }

    impl AgendaCard for Stub {
        fn name(&self) -> &str {
            &self.name
        }

        fn resolve_outcome(
            &self,
            outcome: &str,
            _vote: &VoteResult,
            _context: &GameContext,
        ) -> Result<AgendaResolutionResult, AgendaError> {
            Ok(AgendaResolutionResult::directive_executed(outcome, None))
        }
    }

    impl DirectiveCard for Stub {
        fn should_discard_on_reveal(&self, _context: &GameContext, _laws: &LawManager) -> bool {
            self.cancels
        }

        fn execute_immediate_effect(
            &self,
            _outcome: &str,
            _vote: &VoteResult,
            _context: &GameContext,
        ) -> Result<Vec<DirectiveEffect>, AgendaError> {
            Ok(Vec::new())
        }
    }

    fn card(name: &str) -> AgendaCardRef {
        AgendaCardRef::directive(Stub {
            name: name.to_owned(),
            cancels: false,
        })
    }

    fn cancelling(name: &str) -> AgendaCardRef {
        AgendaCardRef::directive(Stub {
            name: name.to_owned(),
            cancels: true,
        })
    }

    fn deck_of(count: usize, seed: u64) -> AgendaDeck {
        let cards = (0..count).map(|i| card(&format!("card-{i}"))).collect();
        AgendaDeck::new(cards, seed).unwrap_or_else(|e| panic!("deck build failed: {e}"))
    }

    fn draw_names(deck: &mut AgendaDeck, count: usize) -> Vec<String> {
        (0..count)
            .filter_map(|_| deck.draw_top_card().ok())
            .map(|c| c.name().to_owned())
            .collect()
    }

    // -----------------------------------------------------------------------
    // Drawing
    // -----------------------------------------------------------------------

    #[test]
    fn drawing_whole_deck_leaves_piles_empty() {
        let mut deck = deck_of(2, 7);
        let first = deck.draw_top_card();
        let second = deck.draw_top_card();

        assert!(first.is_ok());
        assert!(second.is_ok());
        assert_eq!(deck.draw_pile_len(), 0);
        assert_eq!(deck.discard_pile_len(), 0);
        assert_eq!(deck.in_play().len(), 2);
        assert_eq!(deck.verify_integrity(), DeckIntegrity::Intact);
    }

    #[test]
    fn draw_from_exhausted_deck_fails() {
        let mut deck = deck_of(0, 1);
        assert!(matches!(deck.draw_top_card(), Err(AgendaError::DeckEmpty)));

        let mut deck = deck_of(1, 1);
        assert!(deck.draw_top_card().is_ok());
        assert!(matches!(deck.draw_top_card(), Err(AgendaError::DeckEmpty)));
    }

    #[test]
    fn empty_draw_pile_reshuffles_exactly_the_discard_pile() {
        let mut deck = deck_of(4, 11);
        let drawn: Vec<AgendaCardRef> = (0..4).filter_map(|_| deck.draw_top_card().ok()).collect();
        assert_eq!(drawn.len(), 4);

        // Discard two, keep two in play.
        let discarded: BTreeSet<String> = drawn
            .iter()
            .take(2)
            .map(|c| c.name().to_owned())
            .collect();
        for c in drawn.iter().take(2) {
            assert!(deck.discard_card(c).is_ok());
        }

        let shuffles_before = deck.shuffle_count();
        let redrawn = deck.draw_top_card().map(|c| c.name().to_owned()).ok();
        assert!(redrawn.as_ref().is_some_and(|n| discarded.contains(n)));
        assert_eq!(deck.shuffle_count(), shuffles_before.saturating_add(1));
        assert_eq!(deck.draw_pile_len(), 1);
        assert_eq!(deck.discard_pile_len(), 0);
        assert_eq!(deck.in_play().len(), 3);
    }

    #[test]
    fn peek_matches_next_draw() {
        let mut deck = deck_of(5, 3);
        let peeked = deck.peek_top_card().map(|c| c.name().to_owned());
        let drawn = deck.draw_top_card().map(|c| c.name().to_owned()).ok();
        assert_eq!(peeked, drawn);
    }

    // -----------------------------------------------------------------------
    // Discard and removal
    // -----------------------------------------------------------------------

    #[test]
    fn removed_cards_never_return() {
        let mut deck = deck_of(3, 5);
        let gone = deck.draw_top_card().ok();
        let gone_name = gone.as_ref().map(|c| c.name().to_owned());
        if let Some(card) = &gone {
            assert!(deck.remove_from_game(card).is_ok());
            assert!(matches!(
                deck.discard_card(card),
                Err(AgendaError::CardRemovedFromGame(_))
            ));
        }

        // Cycle the deck many times; the removed card must never be drawn.
        for _ in 0..20 {
            let Ok(next) = deck.draw_top_card() else {
                break;
            };
            assert_ne!(Some(next.name().to_owned()), gone_name);
            assert!(deck.discard_card(&next).is_ok());
        }
        assert_eq!(deck.removed_from_game().len(), 1);
    }

    #[test]
    fn foreign_card_is_rejected() {
        let mut deck = deck_of(2, 5);
        let stranger = card("Stranger");
        assert!(matches!(
            deck.discard_card(&stranger),
            Err(AgendaError::CardNotInDeck(_))
        ));
        assert!(matches!(
            deck.remove_from_game(&stranger),
            Err(AgendaError::CardNotInDeck(_))
        ));
    }

    #[test]
    fn duplicate_card_names_are_rejected() {
        let result = AgendaDeck::new(vec![card("Twin"), card("Twin")], 0);
        assert!(matches!(result, Err(AgendaError::DuplicateDeckCard(_))));
    }

    #[test]
    fn discard_is_idempotent() {
        let mut deck = deck_of(2, 9);
        let drawn = deck.draw_top_card().ok();
        if let Some(c) = &drawn {
            assert!(deck.discard_card(c).is_ok());
            assert!(deck.discard_card(c).is_ok());
        }
        assert_eq!(deck.discard_pile_len(), 1);
        assert_eq!(deck.verify_integrity(), DeckIntegrity::Intact);
    }

    // -----------------------------------------------------------------------
    // Conservation
    // -----------------------------------------------------------------------

    #[test]
    fn random_operation_sequences_conserve_cards() {
        for seed in 0..30_u64 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut deck = deck_of(8, seed);

            for _ in 0..200 {
                let op: u32 = rng.random_range(0..5);
                match op {
                    0 | 1 => {
                        let _ = deck.draw_top_card();
                    }
                    2 if !deck.in_play().is_empty() => {
                        let idx = rng.random_range(0..deck.in_play().len());
                        if let Some(c) = deck.in_play().get(idx).cloned() {
                            assert!(deck.discard_card(&c).is_ok());
                        }
                    }
                    3 if rng.random_range(0..10_u32) == 0 => {
                        if let Some(c) = deck.in_play().first().cloned() {
                            assert!(deck.remove_from_game(&c).is_ok());
                        }
                    }
                    _ => deck.shuffle(),
                }

                assert_eq!(deck.verify_integrity(), DeckIntegrity::Intact);
                let held = deck.draw_pile_len()
                    + deck.discard_pile_len()
                    + deck.in_play().len()
                    + deck.removed_from_game().len();
                assert_eq!(held, 8);
            }
        }
    }

    // -----------------------------------------------------------------------
    // Determinism and persistence
    // -----------------------------------------------------------------------

    #[test]
    fn same_seed_same_order() {
        let mut a = deck_of(10, 42);
        let mut b = deck_of(10, 42);
        assert_eq!(draw_names(&mut a, 10), draw_names(&mut b, 10));
    }

    #[test]
    fn restored_deck_draws_the_same_future() {
        let mut registry = AgendaCardRegistry::new();
        let cards: Vec<AgendaCardRef> = (0..6).map(|i| card(&format!("card-{i}"))).collect();
        for c in &cards {
            assert!(registry.register_card(c.clone()).is_ok());
        }
        let mut deck = AgendaDeck::new(cards, 99).unwrap_or_else(|e| panic!("{e}"));

        // Move some cards around so every partition is populated.
        let drawn: Vec<AgendaCardRef> = (0..4).filter_map(|_| deck.draw_top_card().ok()).collect();
        if let Some(c) = drawn.first() {
            assert!(deck.discard_card(c).is_ok());
        }
        if let Some(c) = drawn.get(1) {
            assert!(deck.remove_from_game(c).is_ok());
        }

        let snapshot = deck.snapshot();
        let mut restored =
            AgendaDeck::restore(&snapshot, &registry).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(restored.snapshot(), snapshot);

        // Drawing past the reshuffle must match too.
        assert_eq!(draw_names(&mut deck, 3), draw_names(&mut restored, 3));
        assert_eq!(deck.snapshot(), restored.snapshot());
    }

    #[test]
    fn restore_rejects_unknown_cards() {
        let registry = AgendaCardRegistry::new();
        let snapshot = DeckSnapshot {
            draw_pile: vec![String::from("Ghost")],
            ..DeckSnapshot::default()
        };
        assert!(matches!(
            AgendaDeck::restore(&snapshot, &registry),
            Err(AgendaError::UnknownCard(_))
        ));
    }

    // -----------------------------------------------------------------------
    // Reveal
    // -----------------------------------------------------------------------

    #[test]
    fn reveal_skips_cancelling_cards() {
        let mut deck = AgendaDeck::new(vec![cancelling("Void"), card("Real")], 0)
            .unwrap_or_else(|e| panic!("{e}"));
        let reveal = deck.reveal_next(&GameContext::default(), &LawManager::new());
        let reveal = reveal.unwrap_or_else(|e| panic!("{e}"));

        assert_eq!(reveal.card.name(), "Real");
        assert!(reveal.discarded_on_reveal.len() <= 1);
        assert_eq!(deck.verify_integrity(), DeckIntegrity::Intact);
    }

    #[test]
    fn reveal_finds_discarded_card_past_a_recycled_cancel() {
        for seed in 0..64_u64 {
            let mut deck = AgendaDeck::new(vec![cancelling("Void"), card("Real")], seed)
                .unwrap_or_else(|e| panic!("{e}"));
            let real = deck
                .draw_pile
                .iter()
                .find(|c| c.name() == "Real")
                .cloned()
                .unwrap_or_else(|| panic!("Real not in draw pile"));
            assert!(deck.discard_card(&real).is_ok());

            let reveal = deck
                .reveal_next(&GameContext::default(), &LawManager::new())
                .unwrap_or_else(|e| panic!("seed {seed}: {e}"));

            assert_eq!(reveal.card.name(), "Real", "seed {seed}");
            assert_eq!(reveal.discarded_on_reveal, vec![String::from("Void")]);
            assert_eq!(deck.verify_integrity(), DeckIntegrity::Intact);
        }
    }

    #[test]
    fn reveal_gives_up_when_everything_cancels() {
        let mut deck = AgendaDeck::new(vec![cancelling("A"), cancelling("B")], 0)
            .unwrap_or_else(|e| panic!("{e}"));
        let result = deck.reveal_next(&GameContext::default(), &LawManager::new());
        assert!(matches!(
            result,
            Err(AgendaError::NoRevealableCard { discarded: 2 })
        ));
        assert_eq!(deck.discard_pile_len(), 2);
    }
}
