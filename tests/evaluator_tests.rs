use std::cmp::Ordering;

use pokerhand::{
    compare_hands, Card, DealerConfig, Deck, Hand, HandCategory, HandError, Rank, Suit,
};
use rstest::rstest;
use strum::IntoEnumIterator;

fn hand(cards: &[(Rank, Suit)]) -> Hand {
    let cards: Vec<Card> = cards
        .iter()
        .map(|&(rank, suit)| Card::new(rank, suit))
        .collect();
    Hand::new(&cards).unwrap()
}

#[test]
fn test_straight_beats_three_of_a_kind() {
    let three_of_a_kind = hand(&[
        (Rank::Three, Suit::Hearts),
        (Rank::Three, Suit::Clubs),
        (Rank::Five, Suit::Diamonds),
        (Rank::Ten, Suit::Spades),
        (Rank::Three, Suit::Diamonds),
    ]);
    let straight = hand(&[
        (Rank::Ten, Suit::Hearts),
        (Rank::Jack, Suit::Clubs),
        (Rank::Queen, Suit::Diamonds),
        (Rank::King, Suit::Spades),
        (Rank::Ace, Suit::Diamonds),
    ]);

    assert_eq!(three_of_a_kind.classify(), HandCategory::ThreeOfAKind);
    assert_eq!(straight.classify(), HandCategory::Straight);
    assert_eq!(compare_hands(&straight, &three_of_a_kind), Ordering::Greater);
    assert_eq!(compare_hands(&three_of_a_kind, &straight), Ordering::Less);
}

#[rstest]
#[case(Rank::Ten, HandCategory::RoyalFlush)]
#[case(Rank::Nine, HandCategory::StraightFlush)]
#[case(Rank::Two, HandCategory::StraightFlush)]
fn test_royal_flush_boundary(#[case] low: Rank, #[case] expected: HandCategory) {
    let cards: Vec<Card> = Rank::iter()
        .filter(|rank| (low.value()..low.value() + 5).contains(&rank.value()))
        .map(|rank| Card::new(rank, Suit::Spades))
        .collect();

    assert_eq!(Hand::new(&cards).unwrap().classify(), expected);
}

#[test]
fn test_malformed_hand_is_rejected() {
    let cards = [
        Card::new(Rank::Two, Suit::Hearts),
        Card::new(Rank::Ten, Suit::Clubs),
        Card::new(Rank::Five, Suit::Diamonds),
    ];

    let err = Hand::new(&cards).unwrap_err();
    assert_eq!(err, HandError::InvalidHandSize(3));
    assert_eq!(err.to_string(), "Invalid hand size: expected 5 cards, got 3");
}

#[test]
fn test_dealt_hands_are_ordered_consistently() {
    let mut deck = Deck::new(&DealerConfig { seed: Some(2024) });
    let hands: Vec<Hand> = (0..30).map(|_| deck.deal_hand()).collect();

    for a in &hands {
        assert_eq!(a.classify(), a.classify());
        assert_eq!(compare_hands(a, a), Ordering::Equal);
        for b in &hands {
            assert_eq!(compare_hands(a, b), compare_hands(b, a).reverse());
            if a.classify() > b.classify() {
                assert_eq!(compare_hands(a, b), Ordering::Greater);
            }
        }
    }
}

#[test]
fn test_category_serializes_by_name() {
    let json = serde_json::to_string(&HandCategory::FullHouse).unwrap();
    assert_eq!(json, "\"FullHouse\"");

    let card: Card = serde_json::from_str(r#"{"rank":"Ace","suit":"Spades"}"#).unwrap();
    assert_eq!(card, Card::new(Rank::Ace, Suit::Spades));
}
