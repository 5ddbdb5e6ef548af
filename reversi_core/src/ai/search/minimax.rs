use crate::ai::types::Fallible;
use crate::engine::state::GameState;
use crate::engine::topology::Topology;
use crate::engine::types::Color;

use super::eval::value;
use super::limits::{SearchAbort, SearchContext, SearchLimits, SearchStats};
use super::{SearchNode, child_state, iterative_deepening, visit};

/// 枝刈りなしのミニマックス探索を行う方策。
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Minimax {
    /// 直前の探索の統計。
    last_stats: SearchStats,
    /// 探索の制限。
    limits: SearchLimits,
}

impl Minimax {
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

impl<T: Topology> Fallible<T> for Minimax {
    #[inline]
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Option<T::Coord> {
        let (coord, stats) = iterative_deepening(state, color, self.limits, |root, depth, ctx| {
            best(root, depth, color, ctx)
        });
        self.last_stats = stats;
        tracing::debug!(?color, ?coord, nodes = stats.nodes(), "minimax");
        coord
    }
}

/// `color`（評価の基準側）が最大化する手番の探索。
pub(super) fn best<T: Topology>(
    state: &GameState<T>,
    depth: u8,
    color: Color,
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
        let reply = match opponent_best(&child, depth.wrapping_sub(1), color.opponent(), ctx) {
            Ok(node) => node,
            Err(abort) => return Err(abort),
        };
        if chosen.is_none_or(|node| reply.value > node.value) {
            chosen = Some(SearchNode {
                coord: Some(coord),
                value: reply.value,
            });
        }
    }

    Ok(chosen.unwrap_or_else(|| SearchNode::leaf(value(state, ctx.maximizer()))))
}

/// 相手（評価の基準側の反対）が最小化する手番の探索。
pub(super) fn opponent_best<T: Topology>(
    state: &GameState<T>,
    depth: u8,
    color: Color,
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
        let reply = match best(&child, depth.wrapping_sub(1), color.opponent(), ctx) {
            Ok(node) => node,
            Err(abort) => return Err(abort),
        };
        if chosen.is_none_or(|node| reply.value < node.value) {
            chosen = Some(SearchNode {
                coord: Some(coord),
                value: reply.value,
            });
        }
    }

    Ok(chosen.unwrap_or_else(|| SearchNode::leaf(value(state, ctx.maximizer()))))
}
