use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;

/// Number of decks a casino shoe holds unless configured otherwise.
pub const DEFAULT_DECKS: u8 = 6;

/// A dealing shoe of one or more standard 52-card decks.
///
/// Cards are dealt positionally from a shuffled vector; [`Shoe::shuffle`]
/// rebuilds the full shoe before shuffling, so a shoe never runs down
/// across rounds unless the caller keeps dealing without reshuffling.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    position: usize,
    decks: u8,
    rng: ChaCha20Rng,
}

impl Shoe {
    /// Create a shoe seeded from OS entropy.
    pub fn new(decks: u8) -> Self {
        Self::from_rng(decks, ChaCha20Rng::from_os_rng())
    }

    /// Create a shoe with a fixed seed for reproducible dealing.
    pub fn with_seed(decks: u8, seed: u64) -> Self {
        Self::from_rng(decks, ChaCha20Rng::seed_from_u64(seed))
    }

    fn from_rng(decks: u8, rng: ChaCha20Rng) -> Self {
        let decks = decks.max(1);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: build_cards(decks),
            position: 0,
            decks,
            rng,
        }
    }

    /// Rebuild the full shoe and Fisher–Yates shuffle it.
    pub fn shuffle(&mut self) {
        self.cards = build_cards(self.decks);
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

    /// Deal `n` cards, failing if the shoe cannot supply them all.
    pub fn deal_many(&mut self, n: usize) -> Result<Vec<Card>, EngineError> {
        if self.remaining() < n {
            return Err(EngineError::InsufficientCards {
                requested: n,
                remaining: self.remaining(),
            });
        }
        Ok((0..n).filter_map(|_| self.deal_card()).collect())
    }

    /// Restore the unshuffled full shoe.
    pub fn reset(&mut self) {
        self.cards = build_cards(self.decks);
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }

    pub fn decks(&self) -> u8 {
        self.decks
    }
}

fn build_cards(decks: u8) -> Vec<Card> {
    let mut v = Vec::with_capacity(52 * decks as usize);
    for _ in 0..decks {
        v.extend(full_deck());
    }
    v
}
