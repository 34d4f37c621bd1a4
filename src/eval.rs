//! Static position estimators.
//!
//! Two tiers score a board from one side's perspective without further
//! search:
//!
//! - [`Basic`] - piece counting, plus win/loss/immobility sentinels in the
//!   midgame.
//! - [`Improved`] - a linear combination of structural features (mills,
//!   potential mills, double mills, blocked pieces, center control, safe
//!   pieces, threats, vulnerability, strength).
//!
//! The weights are part of the observable behavior: they define the
//! heuristic's personality and the test suite pins them. Feature counts are
//! computed fresh on every call; search depth is shallow by construction,
//! so no caching is needed.

use crate::board::{Board, Cell, Player};
use crate::constants::{
    BOARD_POINTS, CENTER_POINTS, DOUBLE_MILL_WEIGHT, LOSING_PIECES, LOSS_SCORE, MILL_WEIGHT,
    NEIGHBORS, PIECE_WEIGHT, WIN_SCORE,
};
use crate::movegen::generate_slide;

/// Estimator tier selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tier {
    Basic,
    Improved,
}

impl Tier {
    /// The estimator implementing this tier.
    pub fn evaluator(self) -> &'static dyn Evaluator {
        match self {
            Tier::Basic => &Basic,
            Tier::Improved => &Improved,
        }
    }
}

/// A static estimator: scores a board from `side`'s perspective, positive
/// meaning `side` is ahead.
pub trait Evaluator {
    /// Score a placement-phase board.
    fn opening(&self, board: &Board, side: Player) -> i32;

    /// Score a sliding/flying-phase board.
    fn midgame(&self, board: &Board, side: Player) -> i32;
}

/// Piece counting only.
pub struct Basic;

impl Evaluator for Basic {
    fn opening(&self, board: &Board, side: Player) -> i32 {
        piece_difference(board, side)
    }

    fn midgame(&self, board: &Board, side: Player) -> i32 {
        let opponent = side.opponent();
        if board.count(opponent) <= LOSING_PIECES {
            return WIN_SCORE;
        }
        if board.count(side) <= LOSING_PIECES {
            return LOSS_SCORE;
        }
        // Opponent mobility is measured with slides only; a flying
        // opponent's hops are not counted. Kept as-is and pinned by a
        // regression test.
        let opponent_moves = generate_slide(board, opponent).len() as i32;
        if opponent_moves == 0 {
            return WIN_SCORE;
        }
        PIECE_WEIGHT * piece_difference(board, side) - opponent_moves
    }
}

/// Multi-feature linear combination.
pub struct Improved;

impl Evaluator for Improved {
    fn opening(&self, board: &Board, side: Player) -> i32 {
        let opponent = side.opponent();
        piece_difference(board, side)
            + MILL_WEIGHT * (count_mills(board, side) - count_mills(board, opponent))
            + (count_potential_mills(board, side) - count_potential_mills(board, opponent))
            + (count_center_control(board, side) - count_center_control(board, opponent))
            - (count_threats(board, side) - count_threats(board, opponent))
            + (count_strength(board, side) - count_strength(board, opponent))
    }

    fn midgame(&self, board: &Board, side: Player) -> i32 {
        let opponent = side.opponent();
        let opponent_moves = generate_slide(board, opponent).len() as i32;
        PIECE_WEIGHT * piece_difference(board, side) - opponent_moves
            + MILL_WEIGHT * (count_mills(board, side) - count_mills(board, opponent))
            + (count_potential_mills(board, side) - count_potential_mills(board, opponent))
            + DOUBLE_MILL_WEIGHT
                * (count_double_mills(board, side) - count_double_mills(board, opponent))
            - (count_blocked_pieces(board, side) - count_blocked_pieces(board, opponent))
            + (count_center_control(board, side) - count_center_control(board, opponent))
            + (count_safe_pieces(board, side) - count_safe_pieces(board, opponent))
            - (count_threats(board, side) - count_threats(board, opponent))
            - (count_vulnerability(board, side) - count_vulnerability(board, opponent))
            + (count_strength(board, side) - count_strength(board, opponent))
    }
}

fn piece_difference(board: &Board, side: Player) -> i32 {
    board.count(side) as i32 - board.count(side.opponent()) as i32
}

/// Closed mills `player` owns. Each mill is seen once per member cell, so
/// the milled-cell count is divided by 3.
fn count_mills(board: &Board, player: Player) -> i32 {
    let piece = player.cell();
    let milled = (0..BOARD_POINTS)
        .filter(|&i| board.get(i) == piece && board.in_mill(i))
        .count() as i32;
    milled / 3
}

/// Own cells with exactly two own neighbors: one empty neighbor away from a
/// line. Whether the third line member is actually fillable in one move is
/// not verified.
fn count_potential_mills(board: &Board, player: Player) -> i32 {
    let piece = player.cell();
    (0..BOARD_POINTS)
        .filter(|&i| board.get(i) == piece && board.adjacent_count(i, player) == 2)
        .count() as i32
}

/// Own cells bridging two closed mills: exactly two neighbors that are own
/// pieces sitting in closed mills.
fn count_double_mills(board: &Board, player: Player) -> i32 {
    let piece = player.cell();
    (0..BOARD_POINTS)
        .filter(|&i| {
            board.get(i) == piece
                && NEIGHBORS[i]
                    .iter()
                    .filter(|&&j| board.get(j) == piece && board.in_mill(j))
                    .count()
                    == 2
        })
        .count() as i32
}

/// Own pieces with no slide available to the side as a whole. The side's
/// full slide list is rebuilt for every piece, so a side with zero mobility
/// reports every piece as blocked rather than capping at one; the count
/// scales with piece count. Pinned by a regression test.
fn count_blocked_pieces(board: &Board, player: Player) -> i32 {
    let piece = player.cell();
    let mut blocked = 0;
    for i in 0..BOARD_POINTS {
        if board.get(i) == piece && generate_slide(board, player).is_empty() {
            blocked += 1;
        }
    }
    blocked
}

/// Own pieces on the four cross points.
fn count_center_control(board: &Board, player: Player) -> i32 {
    let piece = player.cell();
    CENTER_POINTS
        .iter()
        .filter(|&&i| board.get(i) == piece)
        .count() as i32
}

/// Whether the piece at `index` is a legal capture target: any piece
/// outside a mill, or a milled piece when every piece of that side is
/// milled.
fn can_be_removed(board: &Board, index: usize) -> bool {
    let piece = board.get(index);
    if board.in_mill(index) {
        (0..BOARD_POINTS)
            .filter(|&j| board.get(j) == piece)
            .all(|j| board.in_mill(j))
    } else {
        true
    }
}

/// Own pieces in a closed mill, or shielded because the whole side is
/// milled.
fn count_safe_pieces(board: &Board, player: Player) -> i32 {
    let piece = player.cell();
    (0..BOARD_POINTS)
        .filter(|&i| {
            board.get(i) == piece && (board.in_mill(i) || !can_be_removed(board, i))
        })
        .count() as i32
}

/// Own pieces with an empty neighbor where an opponent placement would
/// close an opponent mill. The probed piece itself stays on the board: this
/// flags an adjacency hazard, not the loss of the threatened cell.
fn count_threats(board: &Board, player: Player) -> i32 {
    let piece = player.cell();
    let hazard = player.opponent().cell();
    (0..BOARD_POINTS)
        .filter(|&i| {
            board.get(i) == piece
                && NEIGHBORS[i].iter().any(|&j| {
                    board.get(j) == Cell::Empty && board.with(j, hazard).in_mill(j)
                })
        })
        .count() as i32
}

/// Exposure of `player`'s non-milled pieces: each contributes its count of
/// adjacent opponent pieces.
fn count_vulnerability(board: &Board, player: Player) -> i32 {
    let piece = player.cell();
    let opponent = player.opponent();
    (0..BOARD_POINTS)
        .filter(|&i| board.get(i) == piece && !board.in_mill(i))
        .map(|i| board.adjacent_count(i, opponent) as i32)
        .sum()
}

/// Mutual support of `player`'s pieces: each contributes its count of
/// adjacent own pieces.
fn count_strength(board: &Board, player: Player) -> i32 {
    let piece = player.cell();
    (0..BOARD_POINTS)
        .filter(|&i| board.get(i) == piece)
        .map(|i| board.adjacent_count(i, player) as i32)
        .sum()
}
