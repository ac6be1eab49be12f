//! Shared fixtures: a realistic shape catalogue, hand builders, seeded games.

#![allow(dead_code)]

use doudizhu_judger::cards::{Card, Deal, Rank, RankCounts, Suit};
use doudizhu_judger::core::{GameRng, Player, PlayerId};
use doudizhu_judger::shapes::{CardShape, ShapeCatalogue};

/// Ranks that may appear in chains (3 through A).
const CHAIN_RANKS: usize = 12;

/// Regular ranks (no jokers).
const REGULAR_RANKS: usize = 13;

fn token(parts: &[(Rank, u8)]) -> String {
    parts
        .iter()
        .flat_map(|&(rank, n)| std::iter::repeat(rank).take(n as usize))
        .collect::<RankCounts>()
        .to_string()
}

/// Catalogue of the common shape families: solos, pairs, trios, trios with a
/// solo or pair kicker, bombs, the rocket, and solo/pair/trio chains.
pub fn standard_catalogue() -> ShapeCatalogue {
    let mut tokens: Vec<String> = Vec::new();
    let regular = &Rank::ALL[..REGULAR_RANKS];

    for rank in Rank::ALL {
        tokens.push(token(&[(rank, 1)]));
    }
    for &rank in regular {
        tokens.push(token(&[(rank, 2)]));
        tokens.push(token(&[(rank, 3)]));
        tokens.push(token(&[(rank, 4)]));
    }
    tokens.push(token(&[(Rank::BlackJoker, 1), (Rank::RedJoker, 1)]));

    for &trio in regular {
        for kicker in Rank::ALL.into_iter().filter(|&k| k != trio) {
            tokens.push(token(&[(trio, 3), (kicker, 1)]));
        }
        for &kicker in regular.iter().filter(|&&k| k != trio) {
            tokens.push(token(&[(trio, 3), (kicker, 2)]));
        }
    }

    for (width, min_len, max_len) in [(1u8, 5, 12), (2, 3, 10), (3, 2, 6)] {
        for len in min_len..=max_len {
            for start in 0..=(CHAIN_RANKS - len) {
                let parts: Vec<_> = Rank::ALL[start..start + len]
                    .iter()
                    .map(|&r| (r, width))
                    .collect();
                tokens.push(token(&parts));
            }
        }
    }

    ShapeCatalogue::from_tokens(tokens).expect("standard catalogue is well formed")
}

/// Build cards from rank codes, giving repeated ranks distinct suits.
pub fn hand(ranks: &str) -> Vec<Card> {
    let mut seen = [0usize; Rank::COUNT];
    ranks
        .chars()
        .map(|c| {
            let rank = Rank::from_code(c).expect("valid rank code");
            let n = seen[rank.index()];
            seen[rank.index()] += 1;
            if rank.is_joker() {
                Card::new(rank, Suit::Joker)
            } else {
                Card::new(rank, Suit::REGULAR[n])
            }
        })
        .collect()
}

/// Parse a shape token.
pub fn shape(token: &str) -> CardShape {
    CardShape::parse(token).expect("valid shape token")
}

/// Deal a seeded game with `landlord` holding the bottom cards.
pub fn seeded_players(seed: u64, landlord: PlayerId) -> Vec<Player> {
    let hands = Deal::shuffled(&mut GameRng::new(seed)).with_landlord(landlord);
    hands
        .into_inner()
        .into_iter()
        .zip(PlayerId::all())
        .map(|(cards, id)| Player::new(id, cards))
        .collect()
}

/// Catalogue shapes contained in `cards`, sorted by token.
pub fn contained_tokens(catalogue: &ShapeCatalogue, cards: &[Card]) -> Vec<String> {
    let hand = RankCounts::from_cards(cards);
    let mut tokens: Vec<_> = catalogue
        .iter()
        .filter(|s| hand.contains(s.counts()))
        .map(|s| s.token().to_string())
        .collect();
    tokens.sort();
    tokens
}

/// Tokens of a playable set, sorted.
pub fn sorted_tokens<'a>(shapes: impl IntoIterator<Item = &'a CardShape>) -> Vec<String> {
    let mut tokens: Vec<_> = shapes.into_iter().map(|s| s.token().to_string()).collect();
    tokens.sort();
    tokens
}

/// Route tracing output through the test harness. Honors `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
