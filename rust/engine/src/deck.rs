use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};

/// A 52-card dealing sequence with a seeded RNG.
///
/// The deck is created (or `reset`) with all 52 unique cards, shuffled once
/// per hand, and drawn from until dealing is complete. `shuffle` produces a
/// uniformly random permutation (`SliceRandom::shuffle` is Fisher-Yates).
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Repopulate with all 52 cards and shuffle.
    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    /// Remove and return the next card, or `None` when the deck is out.
    ///
    /// An empty deck is a recoverable signal, not a panic; under normal
    /// 4-seat dealing it never happens, but callers must tolerate it.
    pub fn draw(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Repopulate without reshuffling.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
