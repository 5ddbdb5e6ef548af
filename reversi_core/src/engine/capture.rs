//! 反転判定・反転処理。
//!
//! 着手マスから各方向へ1マスずつ進み、相手の石が連続した先に自分の石があれば
//! その間の相手の石を挟める。盤外・空きマスに達した場合（開いた列）や、
//! 最初の隣が空き・自分の石の場合、その方向は 0 になる。
//! 形状（`Topology`）が与える方向と隣接関係だけを使うので、六角形盤・正方形盤で共通。

use alloc::collections::BTreeMap;

use crate::engine::board::Board;
use crate::engine::state::PlayError;
use crate::engine::topology::Topology;
use crate::engine::types::Color;

/// 着手の評価結果（方向→挟める石数、0 はその方向に挟めないことを表す）。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Captures<D: Ord> {
    /// 方向ごとの挟める石数。
    runs: BTreeMap<D, u32>,
}

impl<D: Copy + Ord> Captures<D> {
    /// 指定方向で挟める石数を返す。
    #[inline]
    #[must_use]
    pub fn get(&self, direction: D) -> u32 {
        self.runs.get(&direction).copied().unwrap_or(u32::MIN)
    }

    /// いずれかの方向で石を挟めるかどうかを返す。
    #[inline]
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.runs.values().any(|&count| count > u32::MIN)
    }

    /// (方向, 石数) を方向順に返す。
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (D, u32)> + '_ {
        self.runs.iter().map(|(&direction, &count)| (direction, count))
    }

    /// 全方向の合計で挟める石数を返す。
    #[inline]
    #[must_use]
    pub fn total(&self) -> u32 {
        self.runs
            .values()
            .fold(u32::MIN, |acc, &count| acc.saturating_add(count))
    }
}

/// 着手を適用し、挟んだ石を反転させる。
///
/// # Errors
///
/// - `PlayError::InvalidCoordinate`: 盤外の座標
/// - `PlayError::OccupiedCell`: 着手マスが空きでない
/// - `PlayError::IllegalMove`: どの方向にも挟めない
///
/// エラーの場合、盤面は変更されない。
#[inline]
pub fn apply_move<T: Topology>(
    board: &mut Board<T>,
    coord: T::Coord,
    color: Color,
) -> Result<Captures<T::Direction>, PlayError> {
    match board.get(coord) {
        None => return Err(PlayError::InvalidCoordinate),
        Some(Some(_)) => return Err(PlayError::OccupiedCell),
        Some(None) => {}
    }

    let captures = match evaluate_move(board, coord, color) {
        Ok(value) => value,
        Err(err) => return Err(err),
    };
    if !captures.is_legal() {
        return Err(PlayError::IllegalMove);
    }

    let topology = board.topology().clone();
    let _: bool = board.set(coord, Some(color));
    for (direction, count) in captures.iter() {
        let mut current = coord;
        for _ in u32::MIN..count {
            current = match topology.neighbor(current, direction) {
                Some(next) => next,
                None => break,
            };
            let _: bool = board.set(current, Some(color));
        }
    }

    Ok(captures)
}

/// 着手を評価し、方向ごとに挟める石数を返す。
///
/// 着手マスが埋まっている場合は全方向 0 を返す。
///
/// # Errors
///
/// 盤外の座標の場合、`PlayError::InvalidCoordinate` を返す。
#[inline]
pub fn evaluate_move<T: Topology>(
    board: &Board<T>,
    coord: T::Coord,
    color: Color,
) -> Result<Captures<T::Direction>, PlayError> {
    let occupied = match board.get(coord) {
        Some(cell) => cell.is_some(),
        None => return Err(PlayError::InvalidCoordinate),
    };

    let topology = board.topology();
    let runs = topology
        .directions()
        .iter()
        .map(|&direction| {
            let count = if occupied {
                u32::MIN
            } else {
                run_length(board, coord, direction, color)
            };
            (direction, count)
        })
        .collect();

    Ok(Captures { runs })
}

/// 指定マスへの着手が合法かどうかを返す（盤外なら `false`）。
#[inline]
#[must_use]
pub fn is_legal<T: Topology>(board: &Board<T>, coord: T::Coord, color: Color) -> bool {
    if board.get(coord) != Some(None) {
        return false;
    }

    let topology = board.topology();
    topology
        .directions()
        .iter()
        .any(|&direction| run_length(board, coord, direction, color) > u32::MIN)
}

/// 合法手と評価結果を正規順で返す。
#[inline]
#[must_use]
pub fn legal_moves<T: Topology>(
    board: &Board<T>,
    color: Color,
) -> Vec<(T::Coord, Captures<T::Direction>)> {
    board
        .empty_cells()
        .filter_map(|coord| match evaluate_move(board, coord, color) {
            Ok(captures) if captures.is_legal() => Some((coord, captures)),
            Ok(_) | Err(_) => None,
        })
        .collect()
}

/// 1方向について挟める石数を返す。
fn run_length<T: Topology>(
    board: &Board<T>,
    start: T::Coord,
    direction: T::Direction,
    color: Color,
) -> u32 {
    let topology = board.topology();
    let mut count = u32::MIN;
    let mut current = start;

    loop {
        current = match topology.neighbor(current, direction) {
            Some(next) => next,
            None => return u32::MIN,
        };

        match board.get(current) {
            Some(Some(found)) if found == color => return count,
            Some(Some(_)) => count = count.saturating_add(1),
            Some(None) | None => return u32::MIN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_move, evaluate_move, is_legal, legal_moves};
    use crate::engine::board::Board;
    use crate::engine::config::Setup;
    use crate::engine::state::PlayError;
    use crate::engine::topology::hex::{HexCoord, HexDirection, HexTopology};
    use crate::engine::topology::square::{SquareCoord, SquareDirection, SquareTopology};
    use crate::engine::types::Color;

    fn standard_hex(size: u8) -> Board<HexTopology> {
        let topology = HexTopology::new(size).unwrap_or_else(|_| HexTopology::smallest());
        Board::from_setup(topology, &Setup::Standard).unwrap_or_else(|_| Board::empty(topology))
    }

    fn square_with(discs: Vec<(SquareCoord, Color)>) -> Board<SquareTopology> {
        let topology = SquareTopology::new(8).unwrap_or_else(|_| SquareTopology::smallest());
        Board::from_setup(topology, &Setup::Custom(discs)).unwrap_or_else(|_| Board::empty(topology))
    }

    #[test]
    fn left_of_northwest_white_captures_one_disc() {
        let board = standard_hex(6);
        let target = HexCoord::new(-1, -1);
        let captures = evaluate_move(&board, target, Color::Black);
        assert!(captures.is_ok());
        let captures = captures.unwrap_or_else(|_| unreachable!());

        assert_eq!(captures.total(), 1);
        for (direction, count) in captures.iter() {
            let expected = u32::from(direction == HexDirection::Right);
            assert_eq!(count, expected, "direction {direction:?}");
        }
    }

    #[test]
    fn apply_move_flips_exactly_the_counted_run() {
        let mut board = standard_hex(6);
        let result = apply_move(&mut board, HexCoord::new(-1, -1), Color::Black);
        assert!(result.is_ok());
        assert_eq!(board.get(HexCoord::new(-1, -1)), Some(Some(Color::Black)));
        assert_eq!(board.get(HexCoord::new(-1, 0)), Some(Some(Color::Black)));
        assert_eq!(board.count(Color::Black), 5);
        assert_eq!(board.count(Color::White), 2);
    }

    #[test]
    fn open_ended_run_captures_nothing() {
        // 黒 [白 白] 空き：閉じていない列は挟めない。
        let board = square_with(vec![
            (SquareCoord::new(0, -2), Color::White),
            (SquareCoord::new(0, -1), Color::White),
        ]);
        let captures = evaluate_move(&board, SquareCoord::new(0, -3), Color::Black);
        assert!(captures.is_ok());
        let captures = captures.unwrap_or_else(|_| unreachable!());
        assert_eq!(captures.get(SquareDirection::East), 0);
        assert!(!captures.is_legal());
    }

    #[test]
    fn run_reaching_the_edge_captures_nothing() {
        let board = square_with(vec![
            (SquareCoord::new(-3, 0), Color::White),
            (SquareCoord::new(-4, 0), Color::White),
        ]);
        assert!(!is_legal(&board, SquareCoord::new(-2, 0), Color::Black));
    }

    #[test]
    fn long_runs_in_several_directions_are_all_flipped() {
        let board = square_with(vec![
            (SquareCoord::new(0, 1), Color::White),
            (SquareCoord::new(0, 2), Color::White),
            (SquareCoord::new(0, 3), Color::Black),
            (SquareCoord::new(1, 0), Color::White),
            (SquareCoord::new(2, 0), Color::Black),
            (SquareCoord::new(-1, -1), Color::Black),
        ]);
        let mut board = board;
        let result = apply_move(&mut board, SquareCoord::new(0, 0), Color::Black);
        assert!(result.is_ok());
        let captures = result.unwrap_or_else(|_| unreachable!());
        assert_eq!(captures.get(SquareDirection::East), 2);
        assert_eq!(captures.get(SquareDirection::South), 1);
        assert_eq!(captures.get(SquareDirection::NorthWest), 0);
        assert_eq!(captures.total(), 3);
        assert_eq!(board.count(Color::White), 0);
        assert_eq!(board.count(Color::Black), 7);
    }

    #[test]
    fn illegal_or_occupied_placements_leave_the_board_untouched() {
        let mut board = standard_hex(6);
        let before = board.clone();

        assert_eq!(
            apply_move(&mut board, HexCoord::new(0, 0), Color::Black).err(),
            Some(PlayError::IllegalMove)
        );
        assert_eq!(
            apply_move(&mut board, HexCoord::new(-1, 0), Color::Black).err(),
            Some(PlayError::OccupiedCell)
        );
        assert_eq!(
            apply_move(&mut board, HexCoord::new(9, 0), Color::Black).err(),
            Some(PlayError::InvalidCoordinate)
        );
        assert_eq!(board, before);
    }

    #[test]
    fn occupied_cells_report_zero_in_every_direction() {
        let board = standard_hex(6);
        let captures = evaluate_move(&board, HexCoord::new(0, 1), Color::Black);
        assert!(captures.is_ok_and(|value| value.total() == 0));
    }

    #[test]
    fn legal_moves_are_in_canonical_order() {
        let board = standard_hex(6);
        let moves = legal_moves(&board, Color::Black);
        assert!(!moves.is_empty());
        let coords: Vec<HexCoord> = moves.iter().map(|&(coord, _)| coord).collect();
        let mut sorted = coords.clone();
        sorted.sort_unstable();
        assert_eq!(coords, sorted);
        assert!(moves.iter().all(|(_, captures)| captures.is_legal()));
    }

    #[test]
    fn empty_board_has_no_legal_moves() {
        let topology = HexTopology::new(4).unwrap_or_else(|_| HexTopology::smallest());
        let board = Board::empty(topology);
        assert!(legal_moves(&board, Color::Black).is_empty());
        assert!(legal_moves(&board, Color::White).is_empty());
    }
}
