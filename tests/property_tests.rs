//! Property tests over random seeded games with interleaved plays and undos.
//!
//! After every operation each seat's playable set must equal the catalogue
//! shapes contained in that seat's hand, the fast-path and rescan trackers
//! must agree, prunes must never grow a set, and an undo must return the set
//! it was taken from.

mod common;

use std::sync::OnceLock;

use common::{contained_tokens, seeded_players, sorted_tokens, standard_catalogue};
use doudizhu_judger::cards::Card;
use doudizhu_judger::core::{HandView, JudgerConfig, JudgerError, PlayerId};
use doudizhu_judger::judger::{PlayableSet, PlayableTracker};
use doudizhu_judger::shapes::{RankCounting, ShapeCatalogue};
use proptest::prelude::*;

fn catalogue() -> ShapeCatalogue {
    static CATALOGUE: OnceLock<ShapeCatalogue> = OnceLock::new();
    CATALOGUE.get_or_init(standard_catalogue).clone()
}

#[derive(Clone, Debug)]
enum Step {
    /// Play the n-th playable shape (mod count) for the seat to move.
    Play(usize),
    /// Take back the most recent play.
    Undo,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => any::<usize>().prop_map(Step::Play),
        1 => Just(Step::Undo),
    ]
}

struct Played {
    seat: usize,
    cards: Vec<Card>,
    before: PlayableSet,
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_sets_stay_exact_through_play_and_undo(
        seed in any::<u64>(),
        landlord in 0u8..3,
        steps in prop::collection::vec(step(), 1..60),
    ) {
        let catalogue = catalogue();
        let mut players = seeded_players(seed, PlayerId::new(landlord));
        let mut fast = PlayableTracker::new(catalogue.clone(), &players);
        let mut slow = PlayableTracker::with_config(
            JudgerConfig::new().full_rescan(),
            catalogue.clone(),
            RankCounting,
            &players,
        );
        let mut history: Vec<Played> = Vec::new();
        let mut turn = 0usize;

        for step in steps {
            match step {
                Step::Play(n) => {
                    let seat = turn % 3;
                    turn += 1;
                    let mut options: Vec<_> = fast.playable(&players[seat]).iter().cloned().collect();
                    if options.is_empty() {
                        continue;
                    }
                    options.sort();
                    let choice = &options[n % options.len()];

                    let before = fast.playable(&players[seat]).clone();
                    let cards = players[seat].play(choice).expect("playable shape is held");
                    let after = fast.calc_playable(&players[seat]).clone();
                    slow.calc_playable(&players[seat]);

                    prop_assert!(after.is_subset(&before));
                    history.push(Played { seat, cards, before });
                }
                Step::Undo => {
                    let Some(played) = history.pop() else {
                        continue;
                    };
                    turn = turn.saturating_sub(1);
                    let id = players[played.seat].player_id();
                    players[played.seat].receive(played.cards);
                    fast.restore_playable(id).unwrap();
                    slow.restore_playable(id).unwrap();

                    prop_assert_eq!(fast.playable_for(id), &played.before);
                }
            }

            for player in &players {
                let id = player.player_id();
                let expected = contained_tokens(&catalogue, player.current_hand());
                prop_assert_eq!(sorted_tokens(fast.playable(player)), expected);
                prop_assert_eq!(fast.playable_for(id), slow.playable_for(id));
            }
        }

        // Drain every undo log; one more restore per seat must fail.
        while let Some(played) = history.pop() {
            let id = players[played.seat].player_id();
            players[played.seat].receive(played.cards);
            fast.restore_playable(id).unwrap();
        }
        for player in &players {
            let id = player.player_id();
            prop_assert_eq!(fast.undo_depth(id), 0);
            prop_assert_eq!(
                fast.restore_playable(id),
                Err(JudgerError::EmptyUndoLog { player: id })
            );
        }
    }

    #[test]
    fn prop_prune_then_restore_is_identity(
        seed in any::<u64>(),
        picks in prop::collection::vec(any::<usize>(), 1..20),
    ) {
        let catalogue = catalogue();
        let mut players = seeded_players(seed, PlayerId::new(0));
        let mut tracker = PlayableTracker::new(catalogue, &players);

        for (turn, pick) in picks.into_iter().enumerate() {
            let seat = turn % 3;
            let id = players[seat].player_id();
            let mut options: Vec<_> = tracker.playable(&players[seat]).iter().cloned().collect();
            if options.is_empty() {
                continue;
            }
            options.sort();
            let choice = options[pick % options.len()].clone();

            let snapshot = tracker.clone();
            let cards = players[seat].play(&choice).unwrap();
            tracker.calc_playable(&players[seat]);
            players[seat].receive(cards.clone());
            tracker.restore_playable(id).unwrap();

            for p in PlayerId::all() {
                prop_assert_eq!(tracker.playable_for(p), snapshot.playable_for(p));
                prop_assert_eq!(tracker.singles_remaining(p), snapshot.singles_remaining(p));
                prop_assert_eq!(tracker.undo_depth(p), snapshot.undo_depth(p));
            }

            // Commit the play for the next round
            let again = players[seat].play(&choice).unwrap();
            prop_assert_eq!(again.len(), cards.len());
            tracker.calc_playable(&players[seat]);
        }
    }
}
