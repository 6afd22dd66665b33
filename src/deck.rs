use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::cards::{Card, Hand, HAND_SIZE};
use crate::config::DealerConfig;

/// A shuffled 52 card deck that deals hands for the evaluator.
///
/// Drawing from an empty deck shuffles a fresh full deck.
pub struct Deck {
    cards: Vec<Card>,
    rng: StdRng,
}

impl Deck {
    pub fn new(config: &DealerConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut deck = Self {
            cards: Vec::new(),
            rng,
        };
        deck.shuffle();
        deck
    }

    /// Refills the deck with all 52 cards and shuffles it.
    #[instrument(skip(self))]
    pub fn shuffle(&mut self) {
        self.cards = Card::all_cards();
        self.cards.shuffle(&mut self.rng);
        debug!(remaining = self.cards.len(), "Shuffled deck");
    }

    pub fn draw(&mut self) -> Card {
        loop {
            if let Some(card) = self.cards.pop() {
                return card;
            }
            self.shuffle();
        }
    }

    pub fn deal_hand(&mut self) -> Hand {
        let cards: [Card; HAND_SIZE] = std::array::from_fn(|_| self.draw());
        Hand::from(cards)
    }

    /// Takes cards that are already in play out of the deck.
    pub fn remove(&mut self, cards: &[Card]) {
        self.cards.retain(|card| !cards.contains(card));
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    fn seeded(seed: u64) -> Deck {
        Deck::new(&DealerConfig { seed: Some(seed) })
    }

    #[test]
    fn test_new_deck_has_every_card_once() {
        let mut deck = seeded(7);
        assert_eq!(deck.remaining(), 52);

        let mut drawn: Vec<Card> = (0..52).map(|_| deck.draw()).collect();
        drawn.sort();
        drawn.dedup();
        assert_eq!(drawn.len(), 52);
        assert_eq!(deck.remaining(), 0);
    }

    #[test]
    fn test_draw_from_empty_deck_reshuffles() {
        let mut deck = seeded(7);
        for _ in 0..52 {
            deck.draw();
        }

        deck.draw();
        assert_eq!(deck.remaining(), 51);
    }

    #[test]
    fn test_seeded_deals_are_reproducible() {
        let mut first = seeded(42);
        let mut second = seeded(42);

        for _ in 0..3 {
            assert_eq!(first.deal_hand(), second.deal_hand());
        }
    }

    #[test]
    fn test_deal_hand() {
        let mut deck = seeded(1);
        let hand = deck.deal_hand();

        assert_eq!(hand.cards().len(), 5);
        assert_eq!(deck.remaining(), 47);
    }

    #[test]
    fn test_remove() {
        let mut deck = seeded(3);
        let ace = Card::new(Rank::Ace, Suit::Spades);
        deck.remove(&[ace, Card::new(Rank::Two, Suit::Hearts)]);

        assert_eq!(deck.remaining(), 50);
        assert!((0..50).map(|_| deck.draw()).all(|card| card != ace));
    }
}
