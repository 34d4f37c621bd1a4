//! Constants for board geometry, mill topology, and evaluation weights.
//!
//! The board is the 23-point mill variant: three nested squares joined at
//! the midpoints of their sides, with diagonal connectors through the
//! corners. The inner square has no bottom midpoint, which is why there are
//! 23 points rather than 24. Points are indexed bottom-left to top-right:
//!
//! ```text
//! 20----------21----------22
//! | \         |         / |
//! |   17------18------19  |
//! |   | \     |     / |   |
//! |   |   14--15--16  |   |
//! |   |   |       |   |   |
//! 8---9---10      11--12--13
//! |   |   |       |   |   |
//! |   |   6-------7   |   |
//! |   | /           \ |   |
//! |   3-------4-------5   |
//! | /                   \ |
//! 0-----------1-----------2
//! ```
//!
//! The adjacency and mill-line tables below are fixed data for this graph,
//! not derived at runtime; the test suite validates them line by line.

// =============================================================================
// Board Geometry
// =============================================================================

/// Number of points on the board.
pub const BOARD_POINTS: usize = 23;

/// A side that is reduced to this many pieces may hop to any empty point.
pub const FLYING_PIECES: usize = 3;

/// A side with this many pieces or fewer can no longer form a mill and has
/// lost the game.
pub const LOSING_PIECES: usize = 2;

/// The four cross points where the square midlines meet. Occupying them is
/// rewarded by the improved estimators.
pub const CENTER_POINTS: [usize; 4] = [4, 10, 13, 19];

/// Adjacent points for each board point (2 to 4 neighbors, ascending).
pub static NEIGHBORS: [&[usize]; BOARD_POINTS] = [
    &[1, 3, 8],        // 0
    &[0, 2, 4],        // 1
    &[1, 5, 13],       // 2
    &[0, 4, 6, 9],     // 3
    &[1, 3, 5],        // 4
    &[2, 4, 7, 12],    // 5
    &[3, 7, 10],       // 6
    &[5, 6, 11],       // 7
    &[0, 9, 20],       // 8
    &[3, 8, 10, 17],   // 9
    &[6, 9, 14],       // 10
    &[7, 12, 16],      // 11
    &[5, 11, 13, 19],  // 12
    &[2, 12, 22],      // 13
    &[10, 15, 17],     // 14
    &[14, 16, 18],     // 15
    &[11, 15, 19],     // 16
    &[9, 14, 18, 20],  // 17
    &[15, 17, 21],     // 18
    &[12, 16, 22],     // 19
    &[8, 17, 21],      // 20
    &[18, 20, 22],     // 21
    &[13, 19, 21],     // 22
];

/// Mill lines through each point, given as the other two members of each
/// 3-in-a-row line. Corner and junction points sit on up to three lines.
pub static MILL_LINES: [&[[usize; 2]]; BOARD_POINTS] = [
    &[[1, 2], [3, 6], [8, 20]],     // 0
    &[[0, 2]],                      // 1
    &[[0, 1], [5, 7], [13, 22]],    // 2
    &[[0, 6], [4, 5], [9, 17]],     // 3
    &[[3, 5]],                      // 4
    &[[2, 7], [3, 4], [12, 19]],    // 5
    &[[0, 3], [10, 14]],            // 6
    &[[2, 5], [11, 16]],            // 7
    &[[0, 20], [9, 10]],            // 8
    &[[8, 10], [3, 17]],            // 9
    &[[8, 9], [6, 14]],             // 10
    &[[7, 16], [12, 13]],           // 11
    &[[11, 13], [5, 19]],           // 12
    &[[11, 12], [2, 22]],           // 13
    &[[6, 10], [15, 16], [17, 20]], // 14
    &[[14, 16], [18, 21]],          // 15
    &[[14, 15], [19, 22], [7, 11]], // 16
    &[[3, 9], [18, 19], [14, 20]],  // 17
    &[[15, 21], [17, 19]],          // 18
    &[[17, 18], [5, 12], [16, 22]], // 19
    &[[0, 8], [21, 22], [14, 17]],  // 20
    &[[20, 22], [15, 18]],          // 21
    &[[20, 21], [16, 19], [2, 13]], // 22
];

// =============================================================================
// Evaluation Scores and Weights
// =============================================================================

/// Sentinel score for a forced win in the basic midgame/endgame estimator.
pub const WIN_SCORE: i32 = 10_000;

/// Sentinel score for a forced loss in the basic midgame/endgame estimator.
pub const LOSS_SCORE: i32 = -10_000;

/// Weight on the raw piece difference in the midgame/endgame estimators.
/// Material dominates; mobility and structure only break ties.
pub const PIECE_WEIGHT: i32 = 1000;

/// Weight on the closed-mill count difference in the improved estimators.
pub const MILL_WEIGHT: i32 = 2;

/// Weight on the double-mill count difference in the improved midgame
/// estimator.
pub const DOUBLE_MILL_WEIGHT: i32 = 2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbor_table_is_symmetric() {
        for (i, neighbors) in NEIGHBORS.iter().enumerate() {
            for &j in *neighbors {
                assert!(
                    NEIGHBORS[j].contains(&i),
                    "point {j} is missing back-edge to {i}"
                );
            }
        }
    }

    #[test]
    fn neighbor_lists_are_ascending() {
        for neighbors in NEIGHBORS {
            let mut sorted = neighbors.to_vec();
            sorted.sort_unstable();
            assert_eq!(sorted, neighbors.to_vec());
        }
    }

    #[test]
    fn mill_lines_are_consistent_across_members() {
        // Every line listed for point i must also be listed for both of its
        // other members.
        for (i, lines) in MILL_LINES.iter().enumerate() {
            for &[a, b] in *lines {
                let mut triple = [i, a, b];
                triple.sort_unstable();
                for &member in &triple {
                    let found = MILL_LINES[member].iter().any(|&[x, y]| {
                        let mut other = [member, x, y];
                        other.sort_unstable();
                        other == triple
                    });
                    assert!(found, "line {triple:?} missing at point {member}");
                }
            }
        }
    }

    #[test]
    fn mill_table_has_18_distinct_lines() {
        let mut lines = Vec::new();
        for (i, point_lines) in MILL_LINES.iter().enumerate() {
            for &[a, b] in *point_lines {
                let mut triple = [i, a, b];
                triple.sort_unstable();
                if !lines.contains(&triple) {
                    lines.push(triple);
                }
            }
        }
        assert_eq!(lines.len(), 18);
    }
}
