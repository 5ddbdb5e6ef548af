use alloc::collections::BTreeMap;

use crate::engine::config::{ConfigError, Setup};
use crate::engine::topology::Topology;
use crate::engine::types::Color;

/// 盤面（座標→石）。
///
/// 座標の集合は生成時に固定され、以後変化するのは各マスの石だけ。
/// `Clone` は構造的に独立したコピーを返す。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board<T: Topology> {
    /// 各マスの石（`None` は空き）。正規順で並ぶ。
    cells: BTreeMap<T::Coord, Option<Color>>,
    /// 盤の形状。
    topology: T,
}

impl<T: Topology> Board<T> {
    /// 指定色の石数を返す。
    #[inline]
    #[must_use]
    pub fn count(&self, color: Color) -> u32 {
        let count = self
            .cells
            .values()
            .filter(|&&cell| cell == Some(color))
            .count();
        u32::try_from(count).unwrap_or(u32::MAX)
    }

    /// 全マス空きの盤を生成する。
    #[inline]
    #[must_use]
    pub fn empty(topology: T) -> Self {
        let cells = topology
            .cells()
            .into_iter()
            .map(|coord| (coord, None))
            .collect();
        Self { cells, topology }
    }

    /// 空きマスの座標を正規順で返す。
    #[inline]
    pub fn empty_cells(&self) -> impl Iterator<Item = T::Coord> + '_ {
        self.cells
            .iter()
            .filter(|&(_, cell)| cell.is_none())
            .map(|(&coord, _)| coord)
    }

    /// 初期配置から盤を生成する。
    ///
    /// # Errors
    ///
    /// `Setup::Custom` に盤外の座標が含まれる場合、`ConfigError::SetupOutsideBoard` を返す。
    #[inline]
    pub fn from_setup(topology: T, setup: &Setup<T::Coord>) -> Result<Self, ConfigError> {
        let mut board = Self::empty(topology);
        let discs = match *setup {
            Setup::Custom(ref discs) => discs.clone(),
            Setup::Empty => Vec::new(),
            Setup::Standard => board.topology.initial_discs(),
        };

        for (coord, color) in discs {
            if !board.set(coord, Some(color)) {
                return Err(ConfigError::SetupOutsideBoard);
            }
        }

        Ok(board)
    }

    /// 指定マスの状態を返す。
    ///
    /// 盤外なら `None`、空きなら `Some(None)`。
    #[inline]
    #[must_use]
    pub fn get(&self, coord: T::Coord) -> Option<Option<Color>> {
        self.cells.get(&coord).copied()
    }

    /// 全マスを正規順で返す。
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (T::Coord, Option<Color>)> + '_ {
        self.cells.iter().map(|(&coord, &cell)| (coord, cell))
    }

    /// 指定マスの石を置き換える（盤外なら何もせず `false`）。
    pub(crate) fn set(&mut self, coord: T::Coord, cell: Option<Color>) -> bool {
        match self.cells.get_mut(&coord) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// 盤の形状を返す。
    #[inline]
    #[must_use]
    pub const fn topology(&self) -> &T {
        &self.topology
    }
}
