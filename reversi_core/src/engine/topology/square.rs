use core::cmp::Ordering;

use crate::engine::config::ConfigError;
use crate::engine::topology::Topology;
use crate::engine::types::Color;

/// 盤の最小サイズ。
const MIN_SIZE: u8 = 2;

/// 正方形盤のマス（中心を原点とする）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct SquareCoord {
    /// 列（左が負）。
    col: i32,
    /// 行（上が負）。
    row: i32,
}

impl SquareCoord {
    /// 列を返す。
    #[inline]
    #[must_use]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// (row, col) から生成する。
    #[inline]
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { col, row }
    }

    /// 行を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }
}

impl Ord for SquareCoord {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.col.cmp(&other.col))
    }
}

impl PartialOrd for SquareCoord {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 正方形盤の8方向。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum SquareDirection {
    /// 東。
    East,
    /// 北。
    North,
    /// 北東。
    NorthEast,
    /// 北西。
    NorthWest,
    /// 南。
    South,
    /// 南東。
    SouthEast,
    /// 南西。
    SouthWest,
    /// 西。
    West,
}

impl SquareDirection {
    /// 走査順（北から時計回り）に並べた全方向。
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// (Δrow, Δcol) を返す。
    #[inline]
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::East => (0_i32, 1_i32),
            Self::North => (-1_i32, 0_i32),
            Self::NorthEast => (-1_i32, 1_i32),
            Self::NorthWest => (-1_i32, -1_i32),
            Self::South => (1_i32, 0_i32),
            Self::SouthEast => (1_i32, 1_i32),
            Self::SouthWest => (1_i32, -1_i32),
            Self::West => (0_i32, -1_i32),
        }
    }
}

/// 一辺 `size` マス（偶数）の正方形盤。
///
/// 行・列はともに `-size/2 ..= size/2 - 1`。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SquareTopology {
    /// `size / 2`。
    half: i32,
    /// 一辺のマス数。
    size: u8,
}

impl SquareTopology {
    /// 行・列の最大値を返す。
    const fn high(self) -> i32 {
        self.half.wrapping_sub(1)
    }

    /// 行・列の最小値を返す。
    const fn low(self) -> i32 {
        self.half.wrapping_neg()
    }

    /// 一辺 `size` マスの盤を生成する。
    ///
    /// # Errors
    ///
    /// `size` が 2 未満、または奇数の場合、`ConfigError::InvalidSize` を返す。
    #[inline]
    pub fn new(size: u8) -> Result<Self, ConfigError> {
        if size < MIN_SIZE {
            return Err(ConfigError::InvalidSize {
                reason: "square boards need at least 2 cells per side",
                size,
            });
        }
        if !size.is_multiple_of(2) {
            return Err(ConfigError::InvalidSize {
                reason: "square boards need an even side length",
                size,
            });
        }

        Ok(Self {
            half: i32::from(size.wrapping_shr(1)),
            size,
        })
    }

    /// 最小（2x2）の盤を返す。
    #[inline]
    #[must_use]
    pub const fn smallest() -> Self {
        Self {
            half: 1_i32,
            size: MIN_SIZE,
        }
    }
}

impl Topology for SquareTopology {
    type Coord = SquareCoord;
    type Direction = SquareDirection;

    #[inline]
    fn cell_count(&self) -> usize {
        let size = usize::from(self.size);
        size.saturating_mul(size)
    }

    #[inline]
    fn cells(&self) -> Vec<SquareCoord> {
        let mut cells = Vec::with_capacity(self.cell_count());
        for row in self.low()..=self.high() {
            for col in self.low()..=self.high() {
                cells.push(SquareCoord::new(row, col));
            }
        }
        cells
    }

    #[inline]
    fn contains(&self, coord: SquareCoord) -> bool {
        let range = self.low()..=self.high();
        range.contains(&coord.row) && range.contains(&coord.col)
    }

    #[inline]
    fn corners(&self) -> Vec<SquareCoord> {
        let (low, high) = (self.low(), self.high());
        vec![
            SquareCoord::new(low, low),
            SquareCoord::new(low, high),
            SquareCoord::new(high, low),
            SquareCoord::new(high, high),
        ]
    }

    #[inline]
    fn directions(&self) -> &'static [SquareDirection] {
        &SquareDirection::ALL
    }

    #[inline]
    fn from_offset(&self, row_index: usize, col_index: usize) -> Option<SquareCoord> {
        let row = i32::try_from(row_index).ok().and_then(|value| value.checked_sub(self.half));
        let col = i32::try_from(col_index).ok().and_then(|value| value.checked_sub(self.half));
        let coord = match (row, col) {
            (Some(row_value), Some(col_value)) => SquareCoord::new(row_value, col_value),
            (None, _) | (_, None) => return None,
        };
        self.contains(coord).then_some(coord)
    }

    #[inline]
    fn initial_discs(&self) -> Vec<(SquareCoord, Color)> {
        vec![
            (SquareCoord::new(-1_i32, -1_i32), Color::White),
            (SquareCoord::new(-1_i32, 0_i32), Color::Black),
            (SquareCoord::new(0_i32, -1_i32), Color::Black),
            (SquareCoord::new(0_i32, 0_i32), Color::White),
        ]
    }

    #[inline]
    fn neighbor(&self, coord: SquareCoord, direction: SquareDirection) -> Option<SquareCoord> {
        let (d_row, d_col) = direction.offset();
        let next = match (coord.row.checked_add(d_row), coord.col.checked_add(d_col)) {
            (Some(row), Some(col)) => SquareCoord::new(row, col),
            (None, _) | (_, None) => return None,
        };
        self.contains(next).then_some(next)
    }

    #[inline]
    fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    fn to_offset(&self, coord: SquareCoord) -> Option<(usize, usize)> {
        if !self.contains(coord) {
            return None;
        }

        let row_index = usize::try_from(coord.row.wrapping_add(self.half));
        let col_index = usize::try_from(coord.col.wrapping_add(self.half));
        match (row_index, col_index) {
            (Ok(row_value), Ok(col_value)) => Some((row_value, col_value)),
            (Err(_), _) | (_, Err(_)) => None,
        }
    }
}
