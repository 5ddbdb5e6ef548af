use crate::engine::state::GameState;
use crate::engine::topology::Topology;
use crate::engine::types::Color;

use self::limits::{SearchAbort, SearchContext, SearchLimits, SearchStats};

/// アルファベータ探索。
pub mod alphabeta;
/// 評価関数。
mod eval;
/// 探索の制限・統計。
pub mod limits;
/// ミニマックス探索。
pub mod minimax;

/// 既定の探索深さ。
pub const DEFAULT_DEPTH: u8 = 5;

/// 探索の1ノードの結果。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct SearchNode<C> {
    /// 選んだ着手（葉ノードでは `None`）。
    pub coord: Option<C>,
    /// 探索した側から見た評価値。
    pub value: i32,
}

impl<C> SearchNode<C> {
    /// 着手なしの葉ノード。
    #[inline]
    #[must_use]
    pub const fn leaf(value: i32) -> Self {
        Self { coord: None, value }
    }
}

/// 探索深さを正規化する（0の場合は1にする）。
#[inline]
const fn normalize_depth(depth: u8) -> u8 {
    if depth == u8::MIN {
        u8::MIN.wrapping_add(1)
    } else {
        depth
    }
}

/// `color` が `coord` に打った後の局面を返す（打てなければ `None`）。
///
/// コピーの手番が `color` とずれていればコピー上でパスして合わせる。
fn child_state<T: Topology>(
    state: &GameState<T>,
    coord: T::Coord,
    color: Color,
) -> Option<GameState<T>> {
    let mut child = state.deep_copy_as(color);
    match child.place(coord, color) {
        Ok(_captures) => Some(child),
        Err(_err) => None,
    }
}

/// 1ノード分の探索を数え、ノード上限に達したら中断する。
fn visit(ctx: &mut SearchContext) -> Result<(), SearchAbort> {
    ctx.stats_mut().inc_nodes();
    if ctx.stats().nodes() > ctx.limits().node_budget() {
        return Err(SearchAbort);
    }
    Ok(())
}

/// 反復深化でルート探索を行い、最後に完了した深さの最善手を返す。
///
/// 最初の深さすら完了しなかった場合は正規順で最初の合法手を返す。
fn iterative_deepening<T, F>(
    state: &GameState<T>,
    color: Color,
    limits: SearchLimits,
    mut search_at: F,
) -> (Option<T::Coord>, SearchStats)
where
    T: Topology,
    F: FnMut(&GameState<T>, u8, &mut SearchContext) -> Result<SearchNode<T::Coord>, SearchAbort>,
{
    let legal_moves = state.legal_moves(color);
    if state.is_over() || legal_moves.is_empty() {
        return (None, SearchStats::default());
    }

    let mut best = legal_moves.first().map(|&(coord, _)| coord);
    let mut ctx = SearchContext::new(limits, color);

    for depth in 1..=normalize_depth(limits.max_depth()) {
        match search_at(state, depth, &mut ctx) {
            Ok(node) => {
                if node.coord.is_some() {
                    best = node.coord;
                }
                tracing::trace!(depth, value = node.value, coord = ?node.coord, "iteration");
            }
            Err(SearchAbort) => {
                tracing::debug!(depth, nodes = ctx.stats().nodes(), "node budget exhausted");
                break;
            }
        }
    }

    (best, ctx.stats())
}
