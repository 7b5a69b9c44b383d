use rand::Rng;

use super::{SearchContext, SearchOutcome, INFINITY};
use crate::board::Move;

/// One-ply search: the move whose resulting position scores best for the mover.
pub(super) fn find_greedy_move<R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, R>,
    moves: &[Move],
) -> SearchOutcome {
    let sign = ctx.state.side_to_move().sign();
    let mut moves = moves.to_vec();
    ctx.shuffle(&mut moves);

    let mut best_score = -INFINITY;
    let mut best_move = None;
    for m in &moves {
        if ctx.should_stop() {
            break;
        }
        ctx.nodes += 1;
        ctx.state.make_move(m);
        // Sets the terminal flags the evaluator reads.
        ctx.state.generate_moves();
        let score = sign * ctx.state.evaluate();
        ctx.state.undo_move();

        if score > best_score {
            best_score = score;
            best_move = Some(*m);
        }
    }
    (best_move.map(|_| best_score), best_move)
}
