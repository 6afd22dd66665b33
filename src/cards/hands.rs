use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

use strum_macros::EnumIter;
use thiserror::Error;
use tracing::{debug, trace, warn};

use super::basic::{Card, Rank};

/// Number of cards in an evaluated hand.
pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandError {
    #[error("Invalid hand size: expected 5 cards, got {0}")]
    InvalidHandSize(usize),
    #[error("Invalid card: {0:?}")]
    InvalidCard(String),
}

/// The ten poker categories, weakest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum HandCategory {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl HandCategory {
    /// Strength of the category, 1 for high card up to 10 for a royal flush.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }

    /// Whether hands of this category are built around a repeated rank.
    pub fn has_repeated_group(&self) -> bool {
        matches!(
            self,
            HandCategory::Pair
                | HandCategory::TwoPair
                | HandCategory::ThreeOfAKind
                | HandCategory::FullHouse
                | HandCategory::FourOfAKind
        )
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A five card poker hand.
///
/// The cards are kept in the order they were supplied and the rank counts are
/// computed once on construction. Cards are not checked against a deck, a hand
/// holding the same card twice is still classified from its ranks and suits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    rank_counts: HashMap<Rank, usize>,
}

impl Hand {
    /// Creates a hand, rejecting anything that is not exactly five cards.
    pub fn new(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] = cards
            .try_into()
            .map_err(|_| HandError::InvalidHandSize(cards.len()))?;
        Ok(Self::from(cards))
    }

    /// Parses a whitespace or comma separated list of cards, e.g. `"TH AH QH KH JH"`.
    pub fn from_string(s: &str) -> Result<Self, HandError> {
        let cards = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(Card::from_string)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(&cards)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn rank_counts(&self) -> &HashMap<Rank, usize> {
        &self.rank_counts
    }

    pub fn highest_card(&self) -> Card {
        self.cards.iter().copied().fold(self.cards[0], Card::max)
    }

    pub fn lowest_card(&self) -> Card {
        self.cards.iter().copied().fold(self.cards[0], Card::min)
    }

    /// The rank repeated the most times, the higher rank when two groups have
    /// the same size. None when no rank repeats.
    pub fn dominant_group(&self) -> Option<Rank> {
        self.rank_counts
            .iter()
            .filter(|(_, &count)| count > 1)
            .max_by_key(|(&rank, &count)| (count, rank))
            .map(|(&rank, _)| rank)
    }

    /// Classifies the hand, testing categories from the strongest down and
    /// returning the first that matches.
    pub fn classify(&self) -> HandCategory {
        let category = if self.is_flush() && self.is_straight() {
            // Ace is always high so only T-J-Q-K-A starts at ten.
            if self.lowest_card().rank == Rank::Ten {
                HandCategory::RoyalFlush
            } else {
                HandCategory::StraightFlush
            }
        } else if self.n_of_a_kind(4) {
            HandCategory::FourOfAKind
        } else if self.n_of_a_kind(3) && self.n_of_a_kind(2) {
            HandCategory::FullHouse
        } else if self.is_flush() {
            HandCategory::Flush
        } else if self.is_straight() {
            HandCategory::Straight
        } else if self.n_of_a_kind(3) {
            HandCategory::ThreeOfAKind
        } else if self.groups_of(2) == 2 {
            HandCategory::TwoPair
        } else if self.n_of_a_kind(2) {
            HandCategory::Pair
        } else {
            HandCategory::HighCard
        };

        trace!(hand = %self, category = %category, "Classified hand");
        category
    }

    /// Orders two hands by category, then by the rank of the dominant group,
    /// then by the single highest card.
    ///
    /// Only one kicker is looked at: two pairs of kings with different side
    /// cards are equal unless the highest card differs.
    pub fn compare(&self, other: &Hand) -> Ordering {
        let (category, other_category) = (self.classify(), other.classify());

        let ordering = category.cmp(&other_category).then_with(|| {
            let grouped = category.has_repeated_group() && !self.is_flush() && !other.is_flush();
            let by_group = if grouped {
                self.dominant_group().cmp(&other.dominant_group())
            } else {
                Ordering::Equal
            };

            by_group.then_with(|| {
                self.highest_card()
                    .value()
                    .cmp(&other.highest_card().value())
            })
        });

        debug!(
            hand = %self,
            category = %category,
            other_hand = %other,
            other_category = %other_category,
            ordering = ?ordering,
            "Compared hands"
        );
        ordering
    }

    pub fn is_flush(&self) -> bool {
        let suit = self.cards[0].suit;
        self.cards.iter().all(|card| card.suit == suit)
    }

    /// Five distinct ranks spanning exactly five values. A-2-3-4-5 does not count.
    pub fn is_straight(&self) -> bool {
        if self.rank_counts.values().any(|&count| count > 1) {
            return false;
        }
        self.highest_card().value() == self.lowest_card().value() + 4
    }

    /// Exactly one rank appears `n` times.
    fn n_of_a_kind(&self, n: usize) -> bool {
        self.groups_of(n) == 1
    }

    fn groups_of(&self, n: usize) -> usize {
        self.rank_counts.values().filter(|&&count| count == n).count()
    }

    fn count_ranks(cards: &[Card]) -> HashMap<Rank, usize> {
        let mut counts = HashMap::new();
        for card in cards {
            *counts.entry(card.rank).or_insert(0) += 1;
        }
        counts
    }

    fn has_duplicates(cards: &[Card]) -> bool {
        cards
            .iter()
            .enumerate()
            .any(|(i, card)| cards[i + 1..].contains(card))
    }
}

impl From<[Card; HAND_SIZE]> for Hand {
    fn from(cards: [Card; HAND_SIZE]) -> Self {
        if Self::has_duplicates(&cards) {
            warn!(
                cards = ?cards,
                "Hand holds the same card more than once, evaluating it anyway"
            );
        }

        let rank_counts = Self::count_ranks(&cards);
        Self { cards, rank_counts }
    }
}

impl TryFrom<Vec<Card>> for Hand {
    type Error = HandError;

    fn try_from(cards: Vec<Card>) -> Result<Self, Self::Error> {
        Self::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

/// Compares two hands, see [`Hand::compare`].
pub fn compare_hands(hand: &Hand, other: &Hand) -> Ordering {
    hand.compare(other)
}

/// Builds two hands from raw cards and compares them.
/// Fails if either side is not exactly five cards.
pub fn compare_cards(cards: &[Card], other_cards: &[Card]) -> Result<Ordering, HandError> {
    let hand = Hand::new(cards)?;
    let other_hand = Hand::new(other_cards)?;
    Ok(hand.compare(&other_hand))
}
