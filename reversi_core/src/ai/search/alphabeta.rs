use crate::ai::types::Fallible;
use crate::engine::state::GameState;
use crate::engine::topology::Topology;
use crate::engine::types::Color;

use super::eval::value;
use super::limits::{SearchAbort, SearchContext, SearchLimits, SearchStats};
use super::{SearchNode, child_state, iterative_deepening, visit};

/// アルファベータ探索を行う方策。
///
/// ルートで選ぶ手は同じ深さの `Minimax` と一致する（枝刈りで結果は変わらない）。
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct AlphaBeta {
    /// 直前の探索の統計。
    last_stats: SearchStats,
    /// 探索の制限。
    limits: SearchLimits,
}

impl AlphaBeta {
    /// 直前の探索の統計を返す。
    #[inline]
    #[must_use]
    pub const fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// 探索の制限を返す。
    #[inline]
    #[must_use]
    pub const fn limits(&self) -> SearchLimits {
        self.limits
    }

    /// `depth` を指定して初期化する（ノード上限なし）。
    #[inline]
    #[must_use]
    pub const fn new(depth: u8) -> Self {
        Self::with_limits(SearchLimits::with_depth(depth))
    }

    /// 探索の制限を指定して初期化する。
    #[inline]
    #[must_use]
    pub const fn with_limits(limits: SearchLimits) -> Self {
        Self {
            last_stats: SearchStats::new(),
            limits,
        }
    }
}

impl<T: Topology> Fallible<T> for AlphaBeta {
    #[inline]
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Option<T::Coord> {
        let (coord, stats) = iterative_deepening(state, color, self.limits, |root, depth, ctx| {
            best(root, depth, color, i32::MIN, i32::MAX, ctx)
        });
        self.last_stats = stats;
        tracing::debug!(
            ?color,
            ?coord,
            nodes = stats.nodes(),
            cutoffs = stats.cutoffs(),
            "alphabeta"
        );
        coord
    }
}

/// `color`（評価の基準側）が最大化する手番の探索。
///
/// - `alpha`: 最大化側がすでに確保した下限
/// - `beta`: 最小化側がすでに確保した上限
pub(super) fn best<T: Topology>(
    state: &GameState<T>,
    depth: u8,
    color: Color,
    mut alpha: i32,
    beta: i32,
    ctx: &mut SearchContext,
) -> Result<SearchNode<T::Coord>, SearchAbort> {
    if let Err(abort) = visit(ctx) {
        return Err(abort);
    }
    if depth == u8::MIN || state.is_over() {
        return Ok(SearchNode::leaf(value(state, ctx.maximizer())));
    }

    let mut chosen: Option<SearchNode<T::Coord>> = None;
    for (coord, _captures) in state.legal_moves(color) {
        let Some(child) = child_state(state, coord, color) else {
            continue;
        };
        let reply = match opponent_best(
            &child,
            depth.wrapping_sub(1),
            color.opponent(),
            alpha,
            beta,
            ctx,
        ) {
            Ok(node) => node,
            Err(abort) => return Err(abort),
        };
        if chosen.is_none_or(|node| reply.value > node.value) {
            chosen = Some(SearchNode {
                coord: Some(coord),
                value: reply.value,
            });
        }
        if reply.value > alpha {
            alpha = reply.value;
        }
        if alpha >= beta {
            ctx.stats_mut().inc_cutoffs();
            break;
        }
    }

    Ok(chosen.unwrap_or_else(|| SearchNode::leaf(value(state, ctx.maximizer()))))
}

/// 相手（評価の基準側の反対）が最小化する手番の探索。
pub(super) fn opponent_best<T: Topology>(
    state: &GameState<T>,
    depth: u8,
    color: Color,
    alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext,
) -> Result<SearchNode<T::Coord>, SearchAbort> {
    if let Err(abort) = visit(ctx) {
        return Err(abort);
    }
    if depth == u8::MIN || state.is_over() {
        return Ok(SearchNode::leaf(value(state, ctx.maximizer())));
    }

    let mut chosen: Option<SearchNode<T::Coord>> = None;
    for (coord, _captures) in state.legal_moves(color) {
        let Some(child) = child_state(state, coord, color) else {
            continue;
        };
        let reply = match best(
            &child,
            depth.wrapping_sub(1),
            color.opponent(),
            alpha,
            beta,
            ctx,
        ) {
            Ok(node) => node,
            Err(abort) => return Err(abort),
        };
        if chosen.is_none_or(|node| reply.value < node.value) {
            chosen = Some(SearchNode {
                coord: Some(coord),
                value: reply.value,
            });
        }
        if reply.value < beta {
            beta = reply.value;
        }
        if alpha >= beta {
            ctx.stats_mut().inc_cutoffs();
            break;
        }
    }

    Ok(chosen.unwrap_or_else(|| SearchNode::leaf(value(state, ctx.maximizer()))))
}
