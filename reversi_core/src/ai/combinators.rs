use crate::ai::types::{Fallible, Infallible, StrategyError};
use crate::engine::state::GameState;
use crate::engine::topology::Topology;
use crate::engine::types::Color;

/// 手を選べないこともある方策を、必ず手を返す方策として扱う。
///
/// 内側の方策が `None` を返した場合は `StrategyError::NoLegalMove` になる。
#[derive(Clone, Debug, Default)]
pub struct AsComplete<F> {
    /// 内側の方策。
    inner: F,
}

impl<F> AsComplete<F> {
    /// 内側の方策を取り出す。
    #[inline]
    pub fn into_inner(self) -> F {
        self.inner
    }

    /// `inner` を包む。
    #[inline]
    #[must_use]
    pub const fn new(inner: F) -> Self {
        Self { inner }
    }
}

impl<T: Topology, F: Fallible<T>> Infallible<T> for AsComplete<F> {
    #[inline]
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Result<T::Coord, StrategyError> {
        self.inner
            .choose(state, color)
            .ok_or(StrategyError::NoLegalMove)
    }
}

/// `first` が手を選べなければ `second` を試す。
///
/// 入れ子にすれば何段でも予備の方策を連ねられる。
#[derive(Clone, Debug, Default)]
pub struct Fallback<A, B> {
    /// 最初に試す方策。
    first: A,
    /// `first` が手を選べなかったときの方策。
    second: B,
}

impl<A, B> Fallback<A, B> {
    /// 方策を組み合わせる。
    #[inline]
    #[must_use]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T: Topology, A: Fallible<T>, B: Fallible<T>> Fallible<T> for Fallback<A, B> {
    #[inline]
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Option<T::Coord> {
        match self.first.choose(state, color) {
            Some(coord) => Some(coord),
            None => self.second.choose(state, color),
        }
    }
}
