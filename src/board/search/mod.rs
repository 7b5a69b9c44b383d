//! Move selection.
//!
//! Six strategies share one entry point, `find_best_move`:
//! - Random pick
//! - Greedy one-ply
//! - Two-ply minimax (nested loops)
//! - Recursive minimax
//! - Negamax, with and without alpha-beta pruning
//!
//! Every strategy makes and undoes moves on the caller's `GameState` and
//! leaves it as it found it. Ties are broken by shuffling with the supplied
//! RNG, and the stop flag is checked before each sibling move.

mod config;
mod greedy;
mod minimax;
mod negamax;
mod random;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;

use log::{debug, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::StrategyError;
use super::{GameState, Move, CHECKMATE};
pub use config::{SearchConfig, Strategy, DEFAULT_DEPTH};

/// Bound on every score; wider than a checkmate.
pub const INFINITY: i32 = CHECKMATE + 1;

/// Score (when the strategy produces one) and chosen move.
type SearchOutcome = (Option<i32>, Option<Move>);

/// Result of one move decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The chosen move; `None` only when there were no legal moves
    pub best_move: Option<Move>,
    /// Score from the side to move's point of view (None for random picks)
    pub score: Option<i32>,
    /// Positions visited
    pub nodes: u64,
    pub strategy: Strategy,
    /// Set when the strategy came back empty-handed and a random move was used
    pub used_fallback: bool,
}

/// Positions visited, accumulated per strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NodeCounters {
    counts: [u64; 6],
}

impl NodeCounters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &SearchResult) {
        let slot = &mut self.counts[usize::from(result.strategy.id())];
        *slot = slot.saturating_add(result.nodes);
    }

    #[must_use]
    pub fn get(&self, strategy: Strategy) -> u64 {
        self.counts[usize::from(strategy.id())]
    }

    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn reset(&mut self) {
        self.counts = [0; 6];
    }
}

/// State threaded through one search.
pub(crate) struct SearchContext<'a, R: Rng + ?Sized> {
    pub state: &'a mut GameState,
    pub rng: &'a mut R,
    pub stop: &'a AtomicBool,
    pub nodes: u64,
}

impl<R: Rng + ?Sized> SearchContext<'_, R> {
    #[inline]
    fn should_stop(&self) -> bool {
        self.stop.load(Ordering::Relaxed)
    }

    fn shuffle(&mut self, moves: &mut [Move]) {
        moves.shuffle(&mut *self.rng);
    }
}

/// Pick a move for the side to move.
///
/// `legal_moves` must be the result of `state.generate_moves()` for the
/// current position. The state is mutated during the search and restored
/// before returning. If the strategy yields no move while `legal_moves` is
/// non-empty (for instance because `stop` was raised), a random legal move
/// is returned instead and `used_fallback` is set.
pub fn find_best_move<R: Rng + ?Sized>(
    state: &mut GameState,
    legal_moves: &[Move],
    config: &SearchConfig,
    rng: &mut R,
    stop: &AtomicBool,
) -> SearchResult {
    let strategy = config.strategy;
    let depth = config.depth.max(1);
    let sign = state.side_to_move().sign();

    let mut ctx = SearchContext {
        state,
        rng,
        stop,
        nodes: 0,
    };

    let (score, best_move) = if legal_moves.is_empty() {
        (None, None)
    } else {
        match strategy {
            Strategy::Random => random::find_random_move(&mut ctx, legal_moves),
            Strategy::Greedy => greedy::find_greedy_move(&mut ctx, legal_moves),
            Strategy::MinimaxIterative => {
                minimax::find_minimax_move_iterative(&mut ctx, legal_moves)
            }
            Strategy::Minimax => {
                let white = ctx.state.white_to_move();
                let (score, mv) = minimax::minimax(&mut ctx, legal_moves.to_vec(), depth, white);
                (mv.map(|_| sign * score), mv)
            }
            Strategy::Negamax => {
                let (score, mv) = negamax::negamax(&mut ctx, legal_moves.to_vec(), depth, sign);
                (mv.map(|_| score), mv)
            }
            Strategy::NegamaxAlphaBeta => {
                let (score, mv) = negamax::negamax_alphabeta(
                    &mut ctx,
                    legal_moves.to_vec(),
                    depth,
                    -INFINITY,
                    INFINITY,
                    sign,
                );
                (mv.map(|_| score), mv)
            }
        }
    };

    let mut result = SearchResult {
        best_move,
        score,
        nodes: ctx.nodes,
        strategy,
        used_fallback: false,
    };

    if result.best_move.is_none() && !legal_moves.is_empty() {
        warn!("{strategy} returned no move; falling back to a random move");
        let (_, fallback) = random::find_random_move(&mut ctx, legal_moves);
        result.best_move = fallback;
        result.score = None;
        result.nodes = ctx.nodes;
        result.used_fallback = true;
    }

    debug!(
        "{} depth {}: nodes {} score {:?} move {}",
        strategy,
        depth,
        result.nodes,
        result.score,
        result
            .best_move
            .map_or_else(|| "none".to_string(), |m| m.to_string())
    );
    result
}

/// Pick a move by numeric strategy id and send it down `result`.
///
/// Sends `None` when there are no legal moves. Runs at the default depth
/// with no way to cancel. A dropped receiver is not an error.
pub fn send_best_move<R: Rng + ?Sized>(
    state: &mut GameState,
    legal_moves: &[Move],
    strategy_id: u8,
    rng: &mut R,
    result: &Sender<Option<Move>>,
) -> Result<SearchResult, StrategyError> {
    let config = SearchConfig::strategy(Strategy::try_from(strategy_id)?);
    let stop = AtomicBool::new(false);
    let outcome = find_best_move(state, legal_moves, &config, rng, &stop);
    if result.send(outcome.best_move).is_err() {
        debug!("result receiver dropped before the move was sent");
    }
    Ok(outcome)
}
