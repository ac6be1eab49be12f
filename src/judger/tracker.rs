//! Playable-set tracker.
//!
//! Maintains, per player, the set of catalogue shapes their hand can still
//! form. The set is built once from the starting hands, pruned after every
//! play, and restored from the undo log when a play is taken back.
//!
//! ## Pruning
//!
//! Hands only shrink between restores, so a prune only ever removes shapes.
//! With the fast path enabled the player's singles cursor is consulted first:
//! if it finds a rank the hand no longer holds, every shape using that rank is
//! dropped without a containment check. Shapes that fail containment for any
//! other reason are dropped in the same pass, so both paths yield the same set.
//!
//! ## Undo
//!
//! A prune pushes the removed shapes together with the cursor position it
//! started from. A restore re-inserts those shapes and rewinds the cursor, so
//! prune followed by restore is an exact inverse.
//!
//! ## Cloning
//!
//! Playable sets and undo logs are persistent (`im`) collections and the
//! catalogue is shared behind an `Arc`; cloning a tracker is O(1) and the
//! clone evolves independently.

use tracing::{debug, instrument, warn};

use super::cursor::SinglesCursor;
use super::undo::{RemovalRecord, UndoLog};
use crate::cards::Rank;
use crate::core::{HandView, JudgerConfig, JudgerError, PlayerId, Seats};
use crate::shapes::{CardShape, RankCounting, ShapeCatalogue, ShapeContainment};

/// Set of shapes a player can currently form.
pub type PlayableSet = im::HashSet<CardShape>;

/// Everything the tracker owns for one seat.
#[derive(Clone, Debug)]
struct SeatState {
    playable: PlayableSet,
    undo: UndoLog,
    cursor: SinglesCursor,
}

/// Incrementally maintained playable shapes for all three seats.
///
/// ## Example
///
/// ```
/// use doudizhu_judger::cards::{Card, Rank, Suit};
/// use doudizhu_judger::core::{HandView, Player, PlayerId};
/// use doudizhu_judger::judger::PlayableTracker;
/// use doudizhu_judger::shapes::ShapeCatalogue;
///
/// let catalogue = ShapeCatalogue::from_tokens(["3", "4", "33", "34"]).unwrap();
/// let mut player = Player::new(
///     PlayerId::new(0),
///     vec![
///         Card::new(Rank::Three, Suit::Spades),
///         Card::new(Rank::Three, Suit::Hearts),
///         Card::new(Rank::Four, Suit::Clubs),
///     ],
/// );
///
/// let mut tracker = PlayableTracker::new(catalogue.clone(), [&player]);
/// assert_eq!(tracker.playable(&player).len(), 4);
///
/// // Play the 4
/// let played = player.play(catalogue.get("4").unwrap()).unwrap();
/// let playable = tracker.calc_playable(&player);
/// assert!(playable.contains("33"));
/// assert!(!playable.contains("34"));
///
/// // Take it back
/// player.receive(played);
/// tracker.restore_playable(player.player_id()).unwrap();
/// assert_eq!(tracker.playable(&player).len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct PlayableTracker<C: ShapeContainment = RankCounting> {
    config: JudgerConfig,
    catalogue: ShapeCatalogue,
    containment: C,
    seats: Seats<SeatState>,
}

impl PlayableTracker<RankCounting> {
    /// Build playable sets for `players` with the default configuration.
    pub fn new<I>(catalogue: ShapeCatalogue, players: I) -> Self
    where
        I: IntoIterator,
        I::Item: HandView,
    {
        Self::with_config(JudgerConfig::default(), catalogue, RankCounting, players)
    }
}

impl<C: ShapeContainment> PlayableTracker<C> {
    /// Build playable sets for `players`.
    ///
    /// Each listed player's set is the subset of the catalogue contained in
    /// their current hand. Seats not listed start with an empty set.
    #[instrument(skip_all, fields(shapes = catalogue.len()))]
    pub fn with_config<I>(
        config: JudgerConfig,
        catalogue: ShapeCatalogue,
        containment: C,
        players: I,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: HandView,
    {
        let mut seats = Seats::new(|_| SeatState {
            playable: PlayableSet::new(),
            undo: UndoLog::new(),
            cursor: SinglesCursor::new(config.singles.clone()),
        });

        for player in players {
            let hand = containment.canonical(player.current_hand());
            let playable: PlayableSet = catalogue
                .iter()
                .filter(|shape| containment.contains(&hand, shape))
                .cloned()
                .collect();
            let singles = config
                .singles
                .iter()
                .copied()
                .filter(|&rank| containment.holds(&hand, rank))
                .collect();
            debug!(
                player = %player.player_id(),
                playable = playable.len(),
                "initialized playable shapes"
            );

            let seat = &mut seats[player.player_id()];
            seat.playable = playable;
            seat.cursor = SinglesCursor::new(singles);
            seat.undo = UndoLog::new();
        }

        Self {
            config,
            catalogue,
            containment,
            seats,
        }
    }

    /// Recompute a player's playable set after their hand shrank.
    ///
    /// Removed shapes are pushed onto the player's undo log as one record.
    /// Only this player's state changes.
    #[instrument(skip_all, fields(player = %player.player_id()))]
    pub fn calc_playable<P: HandView + ?Sized>(&mut self, player: &P) -> &PlayableSet {
        let id = player.player_id();
        let containment = &self.containment;
        let hand = containment.canonical(player.current_hand());
        let seat = &mut self.seats[id];

        let cursor_before = seat.cursor.position();
        let missed = if self.config.miss_fast_path {
            seat.cursor.consume_miss(|rank| containment.holds(&hand, rank))
        } else {
            None
        };

        let removed: Vec<CardShape> = seat
            .playable
            .iter()
            .filter(|shape| !Self::still_playable(containment, &hand, shape, missed))
            .cloned()
            .collect();
        for shape in &removed {
            seat.playable.remove(shape);
        }

        debug!(
            missed = ?missed,
            removed = removed.len(),
            remaining = seat.playable.len(),
            "pruned playable shapes"
        );
        seat.undo.push(RemovalRecord::new(removed, cursor_before));

        &seat.playable
    }

    fn still_playable(
        containment: &C,
        hand: &C::Hand,
        shape: &CardShape,
        missed: Option<Rank>,
    ) -> bool {
        if missed.is_some_and(|rank| shape.uses(rank)) {
            return false;
        }
        containment.contains(hand, shape)
    }

    /// Undo the most recent prune for `player`.
    ///
    /// Re-inserts the removed shapes and rewinds the singles cursor. Fails if
    /// no prune is left to undo.
    #[instrument(skip(self))]
    pub fn restore_playable(&mut self, player: PlayerId) -> Result<(), JudgerError> {
        let seat = &mut self.seats[player];
        let Some(record) = seat.undo.pop() else {
            warn!("restore with empty undo log");
            return Err(JudgerError::EmptyUndoLog { player });
        };

        seat.playable.extend(record.removed().iter().cloned());
        seat.cursor.rewind(record.cursor_before());
        debug!(
            restored = record.removed().len(),
            playable = seat.playable.len(),
            "restored playable shapes"
        );
        Ok(())
    }

    /// Current playable set for a player.
    #[must_use]
    pub fn playable<P: HandView + ?Sized>(&self, player: &P) -> &PlayableSet {
        self.playable_for(player.player_id())
    }

    /// Current playable set for a seat.
    #[must_use]
    pub fn playable_for(&self, player: PlayerId) -> &PlayableSet {
        &self.seats[player].playable
    }

    /// Number of prunes for `player` not yet restored.
    #[must_use]
    pub fn undo_depth(&self, player: PlayerId) -> usize {
        self.seats[player].undo.len()
    }

    /// The record the next restore for `player` would apply.
    #[must_use]
    pub fn last_removal(&self, player: PlayerId) -> Option<&RemovalRecord> {
        self.seats[player].undo.last()
    }

    /// Ranks left on a player's singles cursor.
    #[must_use]
    pub fn singles_remaining(&self, player: PlayerId) -> &[Rank] {
        self.seats[player].cursor.remaining()
    }

    #[must_use]
    pub fn catalogue(&self) -> &ShapeCatalogue {
        &self.catalogue
    }

    #[must_use]
    pub fn config(&self) -> &JudgerConfig {
        &self.config
    }
}
