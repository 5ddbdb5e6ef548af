use crate::ai::types::Fallible;
use crate::engine::state::GameState;
use crate::engine::topology::{self, Topology};
use crate::engine::types::Color;

/// 反転数が最大の合法手を選ぶ。
///
/// 同数の場合は正規順で最小の座標（行が小さい方、次に列が小さい方）を選ぶ。
#[derive(Copy, Clone, Debug, Default)]
#[non_exhaustive]
pub struct MaxCapture;

impl<T: Topology> Fallible<T> for MaxCapture {
    #[inline]
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Option<T::Coord> {
        max_capture(
            state
                .legal_moves(color)
                .into_iter()
                .map(|(coord, captures)| (coord, captures.total())),
        )
    }
}

/// 角が合法手なら角を選び、そうでなければ `fallback` に任せる。
///
/// 合法な角が複数ある場合は正規順で最初の角を選ぶ。
#[derive(Clone, Debug, Default)]
pub struct PreferCorners<S> {
    /// 角を選べないときの方策。
    fallback: S,
}

impl<S> PreferCorners<S> {
    /// `fallback` を指定して生成する。
    #[inline]
    #[must_use]
    pub const fn new(fallback: S) -> Self {
        Self { fallback }
    }
}

impl<T: Topology, S: Fallible<T>> Fallible<T> for PreferCorners<S> {
    #[inline]
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Option<T::Coord> {
        let corner = state
            .topology()
            .corners()
            .into_iter()
            .find(|&coord| state.is_legal(coord, color));

        match corner {
            Some(coord) => Some(coord),
            // 合法な角が無いので、合法手はすべて角以外になる。
            None => self.fallback.choose(state, color),
        }
    }
}

/// 角の隣を避け、残りの合法手から反転数が最大のものを選ぶ。
///
/// 角の隣以外に合法手が無ければ `None`（`Fallback` で別の方策と組み合わせる）。
#[derive(Copy, Clone, Debug, Default)]
#[non_exhaustive]
pub struct AvoidNearCorners;

impl<T: Topology> Fallible<T> for AvoidNearCorners {
    #[inline]
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Option<T::Coord> {
        let topology = state.topology();
        max_capture(
            state
                .legal_moves(color)
                .into_iter()
                .filter(|&(coord, _)| !topology::is_next_to_corner(topology, coord))
                .map(|(coord, captures)| (coord, captures.total())),
        )
    }
}

/// (座標, 反転数) のうち反転数が最大のものを返す（同数なら先に現れた方）。
fn max_capture<C, I: Iterator<Item = (C, u32)>>(candidates: I) -> Option<C> {
    let mut best: Option<(C, u32)> = None;
    for (coord, count) in candidates {
        if best.as_ref().is_none_or(|&(_, best_count)| count > best_count) {
            best = Some((coord, count));
        }
    }
    best.map(|(coord, _)| coord)
}
