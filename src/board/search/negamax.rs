use rand::Rng;

use super::{SearchContext, INFINITY};
use crate::board::Move;

/// Negamax: every node maximises for its own side to move.
///
/// `sign` is +1 when White is to move and -1 otherwise, so `sign * evaluate()`
/// is the leaf score for the side to move.
pub(super) fn negamax<R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, R>,
    mut moves: Vec<Move>,
    depth: u32,
    sign: i32,
) -> (i32, Option<Move>) {
    ctx.nodes += 1;
    if depth == 0 || moves.is_empty() {
        return (sign * ctx.state.evaluate(), None);
    }
    ctx.shuffle(&mut moves);

    let mut best_score = -INFINITY;
    let mut best_move = None;
    for m in &moves {
        if ctx.should_stop() {
            break;
        }
        ctx.state.make_move(m);
        let replies = ctx.state.generate_moves();
        let (child, _) = negamax(ctx, replies, depth - 1, -sign);
        ctx.state.undo_move();
        // A child cut short by the stop flag has no usable score.
        if ctx.should_stop() {
            break;
        }

        let score = -child;
        if score > best_score {
            best_score = score;
            best_move = Some(*m);
        }
    }
    (best_score, best_move)
}

/// Negamax with an (alpha, beta) window.
///
/// Fail-soft: the returned score may fall outside the window. Siblings are
/// skipped once `alpha >= beta`. Called with the full window it returns the
/// same root score as `negamax`.
pub(super) fn negamax_alphabeta<R: Rng + ?Sized>(
    ctx: &mut SearchContext<'_, R>,
    mut moves: Vec<Move>,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    sign: i32,
) -> (i32, Option<Move>) {
    ctx.nodes += 1;
    if depth == 0 || moves.is_empty() {
        return (sign * ctx.state.evaluate(), None);
    }
    ctx.shuffle(&mut moves);

    let mut best_score = -INFINITY;
    let mut best_move = None;
    for m in &moves {
        if ctx.should_stop() {
            break;
        }
        ctx.state.make_move(m);
        let replies = ctx.state.generate_moves();
        let (child, _) = negamax_alphabeta(ctx, replies, depth - 1, -beta, -alpha, -sign);
        ctx.state.undo_move();
        // A child cut short by the stop flag has no usable score.
        if ctx.should_stop() {
            break;
        }

        let score = -child;
        if score > best_score {
            best_score = score;
            best_move = Some(*m);
        }
        alpha = alpha.max(best_score);
        if alpha >= beta {
            break;
        }
    }
    (best_score, best_move)
}
