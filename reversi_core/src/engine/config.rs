use crate::engine::topology::Topology;
use crate::engine::types::Color;

/// ゲーム生成時の設定エラー。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// 盤のサイズが形状の条件を満たさない。
    #[error("invalid board size {size}: {reason}")]
    InvalidSize {
        /// 満たしていない条件。
        reason: &'static str,
        /// 指定されたサイズ。
        size: u8,
    },
    /// 初期配置に盤外の座標が含まれている。
    #[error("initial setup places a disc outside the board")]
    SetupOutsideBoard,
}

/// 初期配置。
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Setup<C> {
    /// 任意の配置（同じマスが複数回現れた場合は後勝ち）。
    Custom(Vec<(C, Color)>),
    /// 全マス空き。
    Empty,
    /// 形状ごとの標準配置。
    Standard,
}

/// ゲーム生成の設定（盤の形状とサイズ、初期配置、開始済みかどうか）。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameConfig<T: Topology> {
    /// 初期配置。
    setup: Setup<T::Coord>,
    /// 生成直後に開始するかどうか。
    started: bool,
    /// 盤の形状（サイズを含む）。
    topology: T,
}

impl<T: Topology> GameConfig<T> {
    /// 設定を生成する。
    #[inline]
    #[must_use]
    pub const fn new(topology: T, setup: Setup<T::Coord>, started: bool) -> Self {
        Self {
            setup,
            started,
            topology,
        }
    }

    /// 初期配置を返す。
    #[inline]
    #[must_use]
    pub const fn setup(&self) -> &Setup<T::Coord> {
        &self.setup
    }

    /// 標準配置・未開始の設定を返す。
    #[inline]
    #[must_use]
    pub const fn standard(topology: T) -> Self {
        Self::new(topology, Setup::Standard, false)
    }

    /// 生成直後に開始するかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn started(&self) -> bool {
        self.started
    }

    /// 盤の形状を返す。
    #[inline]
    #[must_use]
    pub const fn topology(&self) -> &T {
        &self.topology
    }
}
