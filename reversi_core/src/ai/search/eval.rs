use core::cmp::Ordering;

use crate::engine::state::GameState;
use crate::engine::topology::Topology;
use crate::engine::types::Color;

/// `color` 視点の評価値。
///
/// - 終局：勝ちなら `+終局値`、負けなら `-終局値`、引き分けなら 0
/// - 非終局：石差
///
/// 終局値はマス数で、非終局の石差より常に大きい。
pub(super) fn value<T: Topology>(state: &GameState<T>, color: Color) -> i32 {
    let diff = diff_i32(state.score(color), state.score(color.opponent()));
    if !state.is_over() {
        return diff;
    }

    let terminal = terminal_value(state.topology());
    match diff.cmp(&0) {
        Ordering::Greater => terminal,
        Ordering::Less => terminal.wrapping_neg(),
        Ordering::Equal => 0,
    }
}

/// 終局時の評価値の大きさ（マス数）。
fn terminal_value<T: Topology>(topology: &T) -> i32 {
    i32::try_from(topology.cell_count()).unwrap_or(i32::MAX)
}

/// `u32` 同士の差を `i32` として返す。
fn diff_i32(lhs: u32, rhs: u32) -> i32 {
    let ai = i32::try_from(lhs).unwrap_or(i32::MAX);
    let bi = i32::try_from(rhs).unwrap_or(i32::MAX);
    ai.wrapping_sub(bi)
}
