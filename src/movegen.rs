//! Successor generation for the three move kinds and the mill-capture
//! sub-step.
//!
//! Each generator is a pure function from a board and the acting player to
//! the list of boards reachable by one legal ply. Closing a mill branches
//! into [`generate_remove`] for every capture option instead of yielding
//! the moving board itself.
//!
//! Successors are produced in board-index order: ascending source point,
//! then ascending target point. The search engine's tie-break keeps the
//! earliest-generated successor, so this ordering is part of the observable
//! behavior.

use crate::board::{Board, Cell, Player};
use crate::constants::{BOARD_POINTS, FLYING_PIECES, NEIGHBORS};

/// Boards reachable by capturing one opponent piece after `player` closed a
/// mill.
///
/// The capture pool is every opponent piece that is not part of a closed
/// mill. If every opponent piece is mill-protected, the pool falls back to
/// all opponent pieces; without the fallback a fully-milled opponent could
/// never be captured from.
pub fn generate_remove(board: &Board, player: Player) -> Vec<Board> {
    let target = player.opponent().cell();
    let mut removals = Vec::new();
    for i in 0..BOARD_POINTS {
        if board.get(i) == target && !board.in_mill(i) {
            removals.push(board.with(i, Cell::Empty));
        }
    }
    if removals.is_empty() {
        for i in 0..BOARD_POINTS {
            if board.get(i) == target {
                removals.push(board.with(i, Cell::Empty));
            }
        }
    }
    removals
}

/// Boards reachable by placing one new `player` piece (placement phase).
pub fn generate_add(board: &Board, player: Player) -> Vec<Board> {
    let mut successors = Vec::new();
    for i in 0..BOARD_POINTS {
        if board.get(i) == Cell::Empty {
            let placed = board.with(i, player.cell());
            if placed.in_mill(i) {
                successors.extend(generate_remove(&placed, player));
            } else {
                successors.push(placed);
            }
        }
    }
    successors
}

/// Boards reachable by sliding one `player` piece to an adjacent empty
/// point.
pub fn generate_slide(board: &Board, player: Player) -> Vec<Board> {
    let piece = player.cell();
    let mut successors = Vec::new();
    for src in 0..BOARD_POINTS {
        if board.get(src) != piece {
            continue;
        }
        for &dst in NEIGHBORS[src] {
            if board.get(dst) == Cell::Empty {
                let moved = board.with(src, Cell::Empty).with(dst, piece);
                if moved.in_mill(dst) {
                    successors.extend(generate_remove(&moved, player));
                } else {
                    successors.push(moved);
                }
            }
        }
    }
    successors
}

/// Boards reachable by hopping one `player` piece to any empty point
/// (flying phase, acting side down to 3 pieces).
pub fn generate_hop(board: &Board, player: Player) -> Vec<Board> {
    let piece = player.cell();
    let mut successors = Vec::new();
    for src in 0..BOARD_POINTS {
        if board.get(src) != piece {
            continue;
        }
        for dst in 0..BOARD_POINTS {
            if board.get(dst) == Cell::Empty {
                let moved = board.with(src, Cell::Empty).with(dst, piece);
                if moved.in_mill(dst) {
                    successors.extend(generate_remove(&moved, player));
                } else {
                    successors.push(moved);
                }
            }
        }
    }
    successors
}

/// Midgame/endgame plies for `player`: hops when the side is down to
/// exactly 3 pieces, slides otherwise.
pub fn generate_midgame(board: &Board, player: Player) -> Vec<Board> {
    if board.count(player) == FLYING_PIECES {
        generate_hop(board, player)
    } else {
        generate_slide(board, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(text: &str) -> Board {
        text.parse().unwrap()
    }

    #[test]
    fn add_on_empty_board_yields_every_point() {
        let successors = generate_add(&Board::empty(), Player::White);
        assert_eq!(successors.len(), BOARD_POINTS);
        // Ascending placement order: first successor places at point 0.
        assert_eq!(
            successors[0].to_string(),
            "Wxxxxxxxxxxxxxxxxxxxxxx"
        );
        assert_eq!(
            successors[22].to_string(),
            "xxxxxxxxxxxxxxxxxxxxxxW"
        );
    }

    #[test]
    fn add_closing_mill_branches_into_removals() {
        // White on 0 and 1; placing at 2 closes the 0-1-2 line. Black has
        // two unprotected pieces, so that placement yields two capture
        // boards instead of one placement board.
        let start = board("WWxxxxxxxxxBBxxxxxxxxxx");
        let successors = generate_add(&start, Player::White);
        let milled: Vec<&Board> = successors
            .iter()
            .filter(|b| b.get(2) == Cell::White)
            .collect();
        assert_eq!(milled.len(), 2);
        assert!(milled.iter().all(|b| b.count(Player::Black) == 1));
    }

    #[test]
    fn slide_moves_to_adjacent_empty_points_only() {
        // Lone white piece at point 0: neighbors 1, 3, 8.
        let start = board("Wxxxxxxxxxxxxxxxxxxxxxx");
        let successors = generate_slide(&start, Player::White);
        let targets: Vec<String> = successors.iter().map(|b| b.to_string()).collect();
        assert_eq!(
            targets,
            vec![
                "xWxxxxxxxxxxxxxxxxxxxxx".to_string(),
                "xxxWxxxxxxxxxxxxxxxxxxx".to_string(),
                "xxxxxxxxWxxxxxxxxxxxxxx".to_string(),
            ]
        );
    }

    #[test]
    fn slide_is_blocked_by_occupied_neighbors() {
        // White at 0, its neighbors 1 and 3 occupied; only 8 remains.
        let start = board("WWxWxxxxxxxxxxxxxxxxxxx");
        let successors = generate_slide(&start, Player::White);
        let from_zero: Vec<&Board> = successors
            .iter()
            .filter(|b| b.get(0) == Cell::Empty)
            .collect();
        assert_eq!(from_zero.len(), 1);
        assert_eq!(from_zero[0].get(8), Cell::White);
    }

    #[test]
    fn hop_reaches_every_empty_point() {
        let start = board("Wxxxxxxxxxxxxxxxxxxxxxx");
        let successors = generate_hop(&start, Player::White);
        assert_eq!(successors.len(), 22);
    }

    #[test]
    fn remove_skips_milled_pieces() {
        // Black mill on 0-1-2 plus a loose black piece at 4: only the loose
        // piece is capturable.
        let start = board("BBBxBxxxxxxxxxxxxxxxxxx");
        let removals = generate_remove(&start, Player::White);
        assert_eq!(removals.len(), 1);
        assert_eq!(removals[0].get(4), Cell::Empty);
    }

    #[test]
    fn remove_falls_back_to_milled_pieces() {
        // Every black piece sits in the 0-1-2 mill, so the pool widens to
        // all of them.
        let start = board("BBBxxxxxxxxxxxxxxxxxxxx");
        let removals = generate_remove(&start, Player::White);
        assert_eq!(removals.len(), 3);
    }

    #[test]
    fn generators_are_player_symmetric() {
        let start = board("WxWBxxxBxxxxxxxxxxxxxxx");
        let white = generate_slide(&start, Player::White);
        let black: Vec<Board> = generate_slide(&start.invert(), Player::White)
            .into_iter()
            .map(Board::invert)
            .collect();
        let direct = generate_slide(&start, Player::Black);
        assert_eq!(black, direct);
        assert_ne!(white, direct);
    }

    #[test]
    fn midgame_switches_to_hops_at_three_pieces() {
        let three = board("WxWxWxxxxxxxxxxxxxxxxxx");
        assert_eq!(
            generate_midgame(&three, Player::White),
            generate_hop(&three, Player::White)
        );
        let four = board("WxWxWxWxxxxxxxxxxxxxxxx");
        assert_eq!(
            generate_midgame(&four, Player::White),
            generate_slide(&four, Player::White)
        );
    }
}
