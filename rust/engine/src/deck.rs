use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A shuffled 52-card deck with a deterministic RNG stream.
///
/// Each engine owns its own deck, so shuffles in different rooms draw
/// from independent RNG streams. Seeding makes whole matches replayable.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    /// Deck with an OS-entropy seed; the common case for live rooms.
    pub fn new() -> Self {
        Self::with_rng(ChaCha20Rng::from_os_rng())
    }

    /// Deterministic deck for replay and tests. The same seed produces the
    /// same sequence of shuffles.
    pub fn new_with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha20Rng::seed_from_u64(seed))
    }

    fn with_rng(rng: ChaCha20Rng) -> Self {
        // Initial order is fixed until shuffle is called
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Rebuilds a full 52-card deck and shuffles it. Called once per hand so
    /// cards dealt within a hand are drawn without replacement.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_shuffle() {
        let mut a = Deck::new_with_seed(7);
        let mut b = Deck::new_with_seed(7);
        a.shuffle();
        b.shuffle();
        for _ in 0..52 {
            assert_eq!(a.deal_card(), b.deal_card());
        }
    }

    #[test]
    fn deal_stops_at_52() {
        let mut deck = Deck::new_with_seed(1);
        deck.shuffle();
        for _ in 0..52 {
            assert!(deck.deal_card().is_some());
        }
        assert_eq!(deck.deal_card(), None);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn shuffle_restores_full_deck() {
        let mut deck = Deck::new_with_seed(3);
        deck.shuffle();
        deck.deal_card();
        deck.deal_card();
        assert_eq!(deck.remaining(), 50);
        deck.shuffle();
        assert_eq!(deck.remaining(), 52);
    }
}
