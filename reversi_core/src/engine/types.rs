/// 手番（石の色）。
///
/// 盤面上のマスは `Option<Color>` で表し、`None` が空きマスを表す。
/// UI 側の「選択中」などの一時状態はここに含めない。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Color {
    /// 先手。
    Black,
    /// 後手。
    White,
}

impl Color {
    /// 両プレイヤーの色（先手→後手の順）。
    pub const BOTH: [Self; 2] = [Self::Black, Self::White];

    /// 相手側の色を返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }
}

/// 1手（打つ/パス）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Move<C> {
    /// パス。
    Pass,
    /// 指定マスへ着手。
    Place(C),
}
