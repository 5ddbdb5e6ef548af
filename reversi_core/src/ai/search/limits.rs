use crate::engine::types::Color;

use super::DEFAULT_DEPTH;

/// 探索の制限。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct SearchLimits {
    /// 探索の最大深さ（ply）。
    max_depth: u8,
    /// 探索のノード上限。
    node_budget: u64,
}

impl Default for SearchLimits {
    #[inline]
    fn default() -> Self {
        Self::with_depth(DEFAULT_DEPTH)
    }
}

impl SearchLimits {
    /// 探索の最大深さ（ply）を返す。
    #[inline]
    #[must_use]
    pub const fn max_depth(&self) -> u8 {
        self.max_depth
    }

    /// 探索制限を生成する。
    ///
    /// - `max_depth`: 探索の最大深さ（ply、0 は 1 として扱う）
    /// - `node_budget`: 探索のノード上限（`u64::MAX` で無制限扱い）
    #[inline]
    #[must_use]
    pub const fn new(max_depth: u8, node_budget: u64) -> Self {
        Self {
            max_depth,
            node_budget,
        }
    }

    /// 探索のノード上限を返す。
    #[inline]
    #[must_use]
    pub const fn node_budget(&self) -> u64 {
        self.node_budget
    }

    /// ノード上限なしで `max_depth` まで探索する制限。
    #[inline]
    #[must_use]
    pub const fn with_depth(max_depth: u8) -> Self {
        Self::new(max_depth, u64::MAX)
    }
}

/// 探索統計。
#[derive(Default, Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct SearchStats {
    /// 枝刈りした回数。
    cutoffs: u64,
    /// 探索したノード数。
    nodes: u64,
}

impl SearchStats {
    /// 枝刈りした回数を返す。
    #[inline]
    #[must_use]
    pub const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// 枝刈りの回数を加算する。
    pub(super) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// 探索ノード数を加算する。
    pub(super) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 統計を 0 で初期化する。
    pub(super) const fn new() -> Self {
        Self {
            cutoffs: u64::MIN,
            nodes: u64::MIN,
        }
    }

    /// 探索したノード数を返す。
    #[inline]
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// ノード上限により探索を中断する。
#[derive(Debug, Clone, Copy)]
pub(super) struct SearchAbort;

/// 探索実行に必要な共有コンテキスト。
pub(super) struct SearchContext {
    /// 探索制限。
    limits: SearchLimits,
    /// 評価の基準となる（ルートで手を選ぶ）色。
    maximizer: Color,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 探索制限を返す。
    pub(super) const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// 評価の基準となる色を返す。
    pub(super) const fn maximizer(&self) -> Color {
        self.maximizer
    }

    /// 探索コンテキストを生成する。
    pub(super) const fn new(limits: SearchLimits, maximizer: Color) -> Self {
        Self {
            limits,
            maximizer,
            stats: SearchStats::new(),
        }
    }

    /// 探索統計を返す。
    pub(super) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(super) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
