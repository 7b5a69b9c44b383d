use rand::seq::SliceRandom;
use rand::Rng;

use super::{SearchContext, SearchOutcome};
use crate::board::Move;

/// Uniform pick over the legal moves.
pub(super) fn find_random_move<R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, R>,
    moves: &[Move],
) -> SearchOutcome {
    ctx.nodes += 1;
    (None, moves.choose(&mut *ctx.rng).copied())
}
