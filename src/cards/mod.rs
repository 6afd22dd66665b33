pub mod basic;
pub mod hands;


pub use basic::{Card, Rank, Suit};
pub use hands::{compare_cards, compare_hands, Hand, HandCategory, HandError, HAND_SIZE};
