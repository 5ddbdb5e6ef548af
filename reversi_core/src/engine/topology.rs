use core::fmt::Debug;
use core::hash::Hash;

use crate::engine::types::Color;

/// 六角形盤（キューブ座標）。
pub mod hex;
/// 正方形盤（中心を原点とする座標）。
pub mod square;

/// 盤の形状。
///
/// 有効な座標の集合・方向・角・外部向け座標との変換を定める。
/// 六角形盤と正方形盤はそれぞれ独立にこのトレイトを実装し、`Board` に合成される。
pub trait Topology: Clone + Debug + Eq {
    /// マスの座標。`Ord` は正規順（行の昇順、次に列の昇順）。
    type Coord: Copy + Debug + Eq + Hash + Ord + 'static;
    /// 1マス分の移動方向。
    type Direction: Copy + Debug + Eq + Hash + Ord + 'static;

    /// マス数を返す。
    fn cell_count(&self) -> usize;

    /// 全マスの座標を正規順で返す。
    fn cells(&self) -> Vec<Self::Coord>;

    /// 盤上の座標かどうかを返す。
    fn contains(&self, coord: Self::Coord) -> bool;

    /// 角のマスを正規順で返す。
    fn corners(&self) -> Vec<Self::Coord>;

    /// 方向の集合を固定の走査順で返す。
    fn directions(&self) -> &'static [Self::Direction];

    /// 外部向けの 0 始まり (行番号, 列番号) から座標を求める。
    fn from_offset(&self, row_index: usize, col_index: usize) -> Option<Self::Coord>;

    /// 初期配置を返す。
    fn initial_discs(&self) -> Vec<(Self::Coord, Color)>;

    /// `coord` から `direction` へ1マス進んだ座標を返す（盤外なら `None`）。
    fn neighbor(&self, coord: Self::Coord, direction: Self::Direction) -> Option<Self::Coord>;

    /// 盤の大きさを返す。
    fn size(&self) -> u8;

    /// 座標を外部向けの 0 始まり (行番号, 列番号) に変換する。
    fn to_offset(&self, coord: Self::Coord) -> Option<(usize, usize)>;
}

/// `coord` が角に隣接（1方向1マス）しているかどうかを返す。
#[inline]
#[must_use]
pub fn is_next_to_corner<T: Topology>(topology: &T, coord: T::Coord) -> bool {
    let corners = topology.corners();
    topology.directions().iter().any(|&direction| {
        topology
            .neighbor(coord, direction)
            .is_some_and(|next| corners.contains(&next))
    })
}

/// `coord` が角かどうかを返す。
#[inline]
#[must_use]
pub fn is_corner<T: Topology>(topology: &T, coord: T::Coord) -> bool {
    topology.corners().contains(&coord)
}
