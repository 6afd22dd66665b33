use std::cmp::Ordering;

use anyhow::{bail, Context, Result};
use clap::Parser;
use pokerhand::{Card, DealerConfig, Deck, Hand, HandCategory};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Deals or reads two five card hands and shows which one wins.
#[derive(Debug, Parser)]
struct Cli {
    /// Shuffle seed, overrides POKER_SEED.
    #[clap(long, short)]
    seed: Option<u64>,
    /// A hand such as "TH AH QH KH JH", may be given twice.
    #[clap(long = "hand")]
    hands: Vec<String>,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct HandReport {
    cards: Vec<Card>,
    category: HandCategory,
}

#[derive(serde::Serialize)]
struct Report {
    hands: Vec<HandReport>,
    /// 1 or 2, None on a split pot.
    winner: Option<usize>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokerhand=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if cli.hands.len() > 2 {
        bail!("at most two hands can be compared, got {}", cli.hands.len());
    }

    let config = DealerConfig::new().with_seed(cli.seed);
    let mut deck = Deck::new(&config);

    let mut hands = cli
        .hands
        .iter()
        .map(|s| Hand::from_string(s).with_context(|| format!("invalid hand {s:?}")))
        .collect::<Result<Vec<_>>>()?;

    for hand in &hands {
        deck.remove(hand.cards());
    }
    while hands.len() < 2 {
        hands.push(deck.deal_hand());
    }

    let winner = match hands[0].compare(&hands[1]) {
        Ordering::Greater => Some(1),
        Ordering::Less => Some(2),
        Ordering::Equal => None,
    };
    info!(winner = ?winner, "Evaluated hands");

    if cli.json {
        let report = Report {
            hands: hands
                .iter()
                .map(|hand| HandReport {
                    cards: hand.cards().to_vec(),
                    category: hand.classify(),
                })
                .collect(),
            winner,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for (i, hand) in hands.iter().enumerate() {
        println!("Hand {}: {}", i + 1, hand.classify());
        for card in hand.cards() {
            println!("  {} of {}", card.rank.name(), card.suit.name());
        }
    }

    match winner {
        Some(n) => println!("Hand {n} wins"),
        None => println!("Split pot"),
    }

    Ok(())
}
