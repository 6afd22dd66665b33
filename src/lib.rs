// Five card poker hand evaluator.
// Classifies a hand into one of the ten poker categories and orders hands,
// the deck and config modules deal the hands the evaluator consumes.

pub mod cards;
pub mod config;
pub mod deck;

pub use cards::{
    compare_cards, compare_hands, Card, Hand, HandCategory, HandError, Rank, Suit, HAND_SIZE,
};
pub use config::DealerConfig;
pub use deck::Deck;
