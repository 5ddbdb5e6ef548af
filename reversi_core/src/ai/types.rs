use crate::engine::state::GameState;
use crate::engine::topology::Topology;
use crate::engine::types::{Color, Move};

/// 必ず手を返す方策が手を選べなかった理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum StrategyError {
    /// 合法手が無い。
    #[error("no legal move is available")]
    NoLegalMove,
}

/// 手を選べないこともある方策。
///
/// 合法手が無い場合はエラーではなく `None` を返す（フォールバックやパス判定に使う）。
/// 実装は `state` を読むだけで変更しない。
pub trait Fallible<T: Topology> {
    /// `color` の次の着手を選ぶ。
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Option<T::Coord>;
}

/// 必ず手を返す方策。
pub trait Infallible<T: Topology> {
    /// `color` の次の着手を選ぶ。
    ///
    /// # Errors
    ///
    /// 手を選べない場合、`StrategyError::NoLegalMove` を返す。
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Result<T::Coord, StrategyError>;
}

impl<T: Topology, S: Fallible<T> + ?Sized> Fallible<T> for Box<S> {
    #[inline]
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Option<T::Coord> {
        (**self).choose(state, color)
    }
}

impl<T: Topology, S: Fallible<T> + ?Sized> Fallible<T> for &mut S {
    #[inline]
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Option<T::Coord> {
        (**self).choose(state, color)
    }
}

impl<T: Topology, S: Infallible<T> + ?Sized> Infallible<T> for Box<S> {
    #[inline]
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Result<T::Coord, StrategyError> {
        (**self).choose(state, color)
    }
}

/// 方策の選択結果を1手（手が無ければパス）に変換する。
#[inline]
pub fn select_move<T, S>(strategy: &mut S, state: &GameState<T>, color: Color) -> Move<T::Coord>
where
    T: Topology,
    S: Fallible<T> + ?Sized,
{
    strategy
        .choose(state, color)
        .map_or(Move::Pass, Move::Place)
}
