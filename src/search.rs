//! Minimax and Alpha-Beta game-tree search.
//!
//! A search is configured by a [`SearchConfig`]: game phase, algorithm, the
//! side the engine plays, and the estimator tier. Maximizing nodes move the
//! configured side, minimizing nodes its opponent; leaves are scored from
//! the configured side's perspective. Both algorithms return the same
//! `(score, best)` pair for every position (pruning is an optimization,
//! not a behavior change), and ties keep the earliest successor in the move
//! generator's fixed order, so repeated runs are reproducible.
//!
//! Each invocation owns its evaluation counter and hands it back in
//! [`SearchOutcome::evaluations`]; there is no ambient state, so callers
//! that want a running total compose outcomes explicitly.

use crate::board::{Board, Player};
use crate::constants::FLYING_PIECES;
use crate::eval::{Evaluator, Tier};
use crate::movegen::{generate_add, generate_midgame};

/// Game stage the engine searches.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Pieces are still being placed; every ply is a placement.
    Opening,
    /// Placement is complete; pieces slide, or hop when down to 3.
    Midgame,
}

/// Search algorithm selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Algorithm {
    Minimax,
    AlphaBeta,
}

/// Full search configuration: phase x algorithm x side x estimator tier.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub phase: Phase,
    pub algorithm: Algorithm,
    pub side: Player,
    pub tier: Tier,
}

impl SearchConfig {
    /// Parse an engine command name.
    ///
    /// The grammar is `("MiniMax" | "AB") ("Opening" | "Game") ["Black"]
    /// ["Improved"]`, e.g. `MiniMaxOpening`, `ABGame`,
    /// `MiniMaxGameBlack`, `ABOpeningBlackImproved`. Returns `None` for
    /// anything else.
    pub fn parse(name: &str) -> Option<SearchConfig> {
        let (algorithm, rest) = if let Some(rest) = name.strip_prefix("MiniMax") {
            (Algorithm::Minimax, rest)
        } else if let Some(rest) = name.strip_prefix("AB") {
            (Algorithm::AlphaBeta, rest)
        } else {
            return None;
        };
        let (phase, rest) = if let Some(rest) = rest.strip_prefix("Opening") {
            (Phase::Opening, rest)
        } else if let Some(rest) = rest.strip_prefix("Game") {
            (Phase::Midgame, rest)
        } else {
            return None;
        };
        let (side, rest) = match rest.strip_prefix("Black") {
            Some(rest) => (Player::Black, rest),
            None => (Player::White, rest),
        };
        let (tier, rest) = match rest.strip_prefix("Improved") {
            Some(rest) => (Tier::Improved, rest),
            None => (Tier::Basic, rest),
        };
        rest.is_empty().then_some(SearchConfig {
            phase,
            algorithm,
            side,
            tier,
        })
    }
}

/// Result of one search invocation.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Score of the chosen line from the configured side's perspective.
    /// `i32::MIN` / `i32::MAX` when no legal ply exists at the root.
    pub score: i32,
    /// Successor chosen at the root, or the input board itself at depth 0.
    /// `None` exactly when the side to move has no legal ply: a terminal
    /// game state, not an error.
    pub best: Option<Board>,
    /// Static evaluations performed during this invocation.
    pub evaluations: u64,
}

/// Run one search. Negative depths behave as depth 0: the board is scored
/// immediately and returned unchanged as the best move.
pub fn run_search(board: &Board, depth: i32, config: SearchConfig) -> SearchOutcome {
    let mut searcher = Searcher {
        config,
        evaluator: config.tier.evaluator(),
        evaluations: 0,
    };
    let depth = depth.max(0);
    let (score, best) = match config.algorithm {
        Algorithm::Minimax => searcher.minimax(board, depth, true),
        Algorithm::AlphaBeta => searcher.alpha_beta(board, depth, i32::MIN, i32::MAX, true),
    };
    SearchOutcome {
        score,
        best,
        evaluations: searcher.evaluations,
    }
}

struct Searcher<'a> {
    config: SearchConfig,
    evaluator: &'a dyn Evaluator,
    evaluations: u64,
}

impl Searcher<'_> {
    fn acting_player(&self, maximizing: bool) -> Player {
        if maximizing {
            self.config.side
        } else {
            self.config.side.opponent()
        }
    }

    /// Score a horizon board from the configured side's perspective,
    /// counting the call.
    fn evaluate(&mut self, board: &Board) -> i32 {
        self.evaluations += 1;
        let side = self.config.side;
        match self.config.phase {
            Phase::Opening => self.evaluator.opening(board, side),
            // Once the side is down to its last three pieces the midgame
            // features stop applying and leaves fall back to the opening
            // estimator.
            Phase::Midgame => {
                if board.count(side) > FLYING_PIECES {
                    self.evaluator.midgame(board, side)
                } else {
                    self.evaluator.opening(board, side)
                }
            }
        }
    }

    fn successors(&self, board: &Board, maximizing: bool) -> Vec<Board> {
        let mover = self.acting_player(maximizing);
        match self.config.phase {
            Phase::Opening => generate_add(board, mover),
            Phase::Midgame => generate_midgame(board, mover),
        }
    }

    fn minimax(&mut self, board: &Board, depth: i32, maximizing: bool) -> (i32, Option<Board>) {
        if depth == 0 {
            // The horizon node made no move: it returns its own board.
            return (self.evaluate(board), Some(*board));
        }

        let successors = self.successors(board, maximizing);
        let mut best = None;

        if maximizing {
            let mut max_eval = i32::MIN;
            for successor in successors {
                let (value, _) = self.minimax(&successor, depth - 1, false);
                if value > max_eval {
                    max_eval = value;
                    best = Some(successor);
                }
            }
            (max_eval, best)
        } else {
            let mut min_eval = i32::MAX;
            for successor in successors {
                let (value, _) = self.minimax(&successor, depth - 1, true);
                if value < min_eval {
                    min_eval = value;
                    best = Some(successor);
                }
            }
            (min_eval, best)
        }
    }

    fn alpha_beta(
        &mut self,
        board: &Board,
        depth: i32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (i32, Option<Board>) {
        if depth == 0 {
            return (self.evaluate(board), Some(*board));
        }

        let successors = self.successors(board, maximizing);
        let mut best = None;

        if maximizing {
            let mut max_eval = i32::MIN;
            for successor in successors {
                let (value, _) = self.alpha_beta(&successor, depth - 1, alpha, beta, false);
                if value > max_eval {
                    max_eval = value;
                    best = Some(successor);
                }
                alpha = alpha.max(value);
                if beta <= alpha {
                    // Cutoff keeps this node's best-so-far.
                    break;
                }
            }
            (max_eval, best)
        } else {
            let mut min_eval = i32::MAX;
            for successor in successors {
                let (value, _) = self.alpha_beta(&successor, depth - 1, alpha, beta, true);
                if value < min_eval {
                    min_eval = value;
                    best = Some(successor);
                }
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
            (min_eval, best)
        }
    }
}
