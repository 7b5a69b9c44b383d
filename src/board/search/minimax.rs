use rand::Rng;

use super::{SearchContext, SearchOutcome, INFINITY};
use crate::board::{Move, CHECKMATE, STALEMATE};

/// Fixed two-ply minimax written as two nested loops.
///
/// For every candidate the opponent's best reply is scored from the
/// opponent's side; the candidate that leaves the opponent the lowest such
/// score wins. The returned score is from the mover's side.
pub(super) fn find_minimax_move_iterative<R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, R>,
    moves: &[Move],
) -> SearchOutcome {
    let sign = ctx.state.side_to_move().sign();
    let mut moves = moves.to_vec();
    ctx.shuffle(&mut moves);

    let mut best_opponent_score = INFINITY;
    let mut best_move = None;
    for m in &moves {
        if ctx.should_stop() {
            break;
        }
        ctx.nodes += 1;
        ctx.state.make_move(m);
        let replies = ctx.state.generate_moves();

        let opponent_score = if ctx.state.is_checkmate() {
            Some(-CHECKMATE)
        } else if ctx.state.is_stalemate() {
            Some(STALEMATE)
        } else {
            best_reply_score(ctx, &replies, -sign)
        };
        ctx.state.undo_move();

        let Some(opponent_score) = opponent_score else {
            break;
        };
        if opponent_score < best_opponent_score {
            best_opponent_score = opponent_score;
            best_move = Some(*m);
        }
    }
    (best_move.map(|_| -best_opponent_score), best_move)
}

/// Best score among `replies` for the side making them (`sign` is that
/// side's sign). `None` if the stop flag cut the scan short.
fn best_reply_score<R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, R>,
    replies: &[Move],
    sign: i32,
) -> Option<i32> {
    let mut max_score = -INFINITY;
    for reply in replies {
        if ctx.should_stop() {
            return None;
        }
        ctx.nodes += 1;
        ctx.state.make_move(reply);
        ctx.state.generate_moves();
        let score = sign * ctx.state.evaluate();
        ctx.state.undo_move();
        max_score = max_score.max(score);
    }
    Some(max_score)
}

/// Depth-limited minimax alternating max (White) and min (Black).
///
/// Scores are from White's side. `moves` must be the legal moves of the
/// current position; a leaf is reached at depth zero or when there are none.
pub(super) fn minimax<R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, R>,
    mut moves: Vec<Move>,
    depth: u32,
    white_to_move: bool,
) -> (i32, Option<Move>) {
    ctx.nodes += 1;
    if depth == 0 || moves.is_empty() {
        return (ctx.state.evaluate(), None);
    }
    ctx.shuffle(&mut moves);

    let mut best_score = if white_to_move { -INFINITY } else { INFINITY };
    let mut best_move = None;
    for m in &moves {
        if ctx.should_stop() {
            break;
        }
        ctx.state.make_move(m);
        let replies = ctx.state.generate_moves();
        let (score, _) = minimax(ctx, replies, depth - 1, !white_to_move);
        ctx.state.undo_move();
        if ctx.should_stop() {
            break;
        }

        let improves = if white_to_move {
            score > best_score
        } else {
            score < best_score
        };
        if improves {
            best_score = score;
            best_move = Some(*m);
        }
    }
    (best_score, best_move)
}
