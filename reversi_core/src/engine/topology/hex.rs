use core::cmp::Ordering;

use crate::engine::config::ConfigError;
use crate::engine::topology::Topology;
use crate::engine::types::Color;

/// 盤の最小サイズ（一辺のマス数）。
const MIN_SIZE: u8 = 2;

/// 六角形盤のマス。
///
/// `row` と `left_col` の2軸を保持し、3軸目 `right_col` は
/// `-row - left_col` として導出する（3軸の和は常に 0）。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct HexCoord {
    /// 左下がりの列。
    left_col: i32,
    /// 行（上が負）。
    row: i32,
}

impl HexCoord {
    /// キューブ座標 (row, `left_col`, `right_col`) から生成する。
    ///
    /// 3軸の和が 0 でない場合は `None`。
    #[inline]
    #[must_use]
    pub const fn from_cube(row: i32, left_col: i32, right_col: i32) -> Option<Self> {
        let sum = match row.checked_add(left_col) {
            Some(value) => value,
            None => return None,
        };
        match sum.checked_add(right_col) {
            Some(0_i32) => Some(Self { left_col, row }),
            Some(_) | None => None,
        }
    }

    /// 左下がりの列を返す。
    #[inline]
    #[must_use]
    pub const fn left_col(self) -> i32 {
        self.left_col
    }

    /// (row, `left_col`) から生成する。
    #[inline]
    #[must_use]
    pub const fn new(row: i32, left_col: i32) -> Self {
        Self { left_col, row }
    }

    /// 右下がりの列（導出軸）を返す。
    #[inline]
    #[must_use]
    pub const fn right_col(self) -> i32 {
        self.row.wrapping_neg().wrapping_sub(self.left_col)
    }

    /// 行を返す。
    #[inline]
    #[must_use]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// キューブ座標 (row, `left_col`, `right_col`) を返す。
    #[inline]
    #[must_use]
    pub const fn to_cube(self) -> (i32, i32, i32) {
        (self.row, self.left_col, self.right_col())
    }
}

impl Ord for HexCoord {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.row
            .cmp(&other.row)
            .then_with(|| self.left_col.cmp(&other.left_col))
    }
}

impl PartialOrd for HexCoord {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// 六角形盤の6方向。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum HexDirection {
    /// 左（同じ行）。
    Left,
    /// 左下。
    LowerLeft,
    /// 右下。
    LowerRight,
    /// 右（同じ行）。
    Right,
    /// 左上。
    UpperLeft,
    /// 右上。
    UpperRight,
}

impl HexDirection {
    /// 走査順に並べた全方向。
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::UpperLeft,
        Self::UpperRight,
        Self::LowerLeft,
        Self::LowerRight,
    ];

    /// (Δrow, Δ`left_col`) を返す。
    #[inline]
    #[must_use]
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Self::Left => (0_i32, -1_i32),
            Self::LowerLeft => (1_i32, -1_i32),
            Self::LowerRight => (1_i32, 0_i32),
            Self::Right => (0_i32, 1_i32),
            Self::UpperLeft => (-1_i32, 0_i32),
            Self::UpperRight => (-1_i32, 1_i32),
        }
    }
}

/// 一辺 `size` マスの正六角形盤。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct HexTopology {
    /// 中心から角までの距離（`size - 1`）。
    radius: i32,
    /// 一辺のマス数。
    size: u8,
}

impl HexTopology {
    /// 行 `row` で有効な `left_col` の範囲を返す。
    fn left_col_range(self, row: i32) -> (i32, i32) {
        let low = self.radius.wrapping_neg().max(self.radius.wrapping_neg().wrapping_sub(row));
        let high = self.radius.min(self.radius.wrapping_sub(row));
        (low, high)
    }

    /// 一辺 `size` マスの盤を生成する。
    ///
    /// # Errors
    ///
    /// `size` が 2 未満の場合、`ConfigError::InvalidSize` を返す。
    #[inline]
    pub fn new(size: u8) -> Result<Self, ConfigError> {
        if size < MIN_SIZE {
            return Err(ConfigError::InvalidSize {
                reason: "hex boards need at least 2 cells per side",
                size,
            });
        }

        Ok(Self {
            radius: i32::from(size.wrapping_sub(1)),
            size,
        })
    }

    /// 最小（一辺2マス）の盤を返す。
    #[inline]
    #[must_use]
    pub const fn smallest() -> Self {
        Self {
            radius: 1_i32,
            size: MIN_SIZE,
        }
    }
}

impl Topology for HexTopology {
    type Coord = HexCoord;
    type Direction = HexDirection;

    #[inline]
    fn cell_count(&self) -> usize {
        // 3n^2 - 3n + 1
        let size = usize::from(self.size);
        size.saturating_mul(size)
            .saturating_sub(size)
            .saturating_mul(3)
            .saturating_add(1)
    }

    #[inline]
    fn cells(&self) -> Vec<HexCoord> {
        let mut cells = Vec::with_capacity(self.cell_count());
        for row in self.radius.wrapping_neg()..=self.radius {
            let (low, high) = self.left_col_range(row);
            for left_col in low..=high {
                cells.push(HexCoord::new(row, left_col));
            }
        }
        cells
    }

    #[inline]
    fn contains(&self, coord: HexCoord) -> bool {
        let radius = self.radius.unsigned_abs();
        coord.row.unsigned_abs() <= radius
            && coord.left_col.unsigned_abs() <= radius
            && coord.right_col().unsigned_abs() <= radius
    }

    #[inline]
    fn corners(&self) -> Vec<HexCoord> {
        let radius = self.radius;
        let neg = radius.wrapping_neg();
        vec![
            HexCoord::new(neg, 0_i32),
            HexCoord::new(neg, radius),
            HexCoord::new(0_i32, neg),
            HexCoord::new(0_i32, radius),
            HexCoord::new(radius, neg),
            HexCoord::new(radius, 0_i32),
        ]
    }

    #[inline]
    fn directions(&self) -> &'static [HexDirection] {
        &HexDirection::ALL
    }

    #[inline]
    fn from_offset(&self, row_index: usize, col_index: usize) -> Option<HexCoord> {
        let row = match i32::try_from(row_index) {
            Ok(value) => value.checked_sub(self.radius),
            Err(_err) => None,
        };
        let row = row.filter(|&value| value.unsigned_abs() <= self.radius.unsigned_abs());
        let (row, col) = match (row, i32::try_from(col_index)) {
            (Some(row_value), Ok(col_value)) => (row_value, col_value),
            (None, _) | (_, Err(_)) => return None,
        };

        let (low, _high) = self.left_col_range(row);
        let coord = match low.checked_add(col) {
            Some(left_col) => HexCoord::new(row, left_col),
            None => return None,
        };
        self.contains(coord).then_some(coord)
    }

    #[inline]
    fn initial_discs(&self) -> Vec<(HexCoord, Color)> {
        // 中心の周囲6マスを、左上の白から時計回りに交互に置く。
        vec![
            (HexCoord::new(-1_i32, 0_i32), Color::White),
            (HexCoord::new(-1_i32, 1_i32), Color::Black),
            (HexCoord::new(0_i32, 1_i32), Color::White),
            (HexCoord::new(1_i32, 0_i32), Color::Black),
            (HexCoord::new(1_i32, -1_i32), Color::White),
            (HexCoord::new(0_i32, -1_i32), Color::Black),
        ]
    }

    #[inline]
    fn neighbor(&self, coord: HexCoord, direction: HexDirection) -> Option<HexCoord> {
        let (d_row, d_left) = direction.offset();
        let next = match (coord.row.checked_add(d_row), coord.left_col.checked_add(d_left)) {
            (Some(row), Some(left_col)) => HexCoord::new(row, left_col),
            (None, _) | (_, None) => return None,
        };
        self.contains(next).then_some(next)
    }

    #[inline]
    fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    fn to_offset(&self, coord: HexCoord) -> Option<(usize, usize)> {
        if !self.contains(coord) {
            return None;
        }

        let (low, _high) = self.left_col_range(coord.row);
        let row_index = usize::try_from(coord.row.wrapping_add(self.radius));
        let col_index = usize::try_from(coord.left_col.wrapping_sub(low));
        match (row_index, col_index) {
            (Ok(row_value), Ok(col_value)) => Some((row_value, col_value)),
            (Err(_), _) | (_, Err(_)) => None,
        }
    }
}
