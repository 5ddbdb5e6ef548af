/// 手選択の合成（フォールバック、必ず手を返す形への変換）。
pub mod combinators;
/// 盤面を読まずに現局面だけで選ぶ方策（最大反転、角優先、角の隣回避）。
pub mod greedy;
/// 合法手からランダムに1手選ぶAI。
pub mod random;
/// ミニマックス・アルファベータ探索AI。
pub mod search;
pub mod types;

pub type AlphaBeta = search::alphabeta::AlphaBeta;
pub type AsComplete<F> = combinators::AsComplete<F>;
pub type AvoidNearCorners = greedy::AvoidNearCorners;
pub type Fallback<A, B> = combinators::Fallback<A, B>;
pub type MaxCapture = greedy::MaxCapture;
pub type Minimax = search::minimax::Minimax;
pub type PreferCorners<S> = greedy::PreferCorners<S>;
pub type RandomMove = random::RandomMove;
pub type SearchLimits = search::limits::SearchLimits;
pub type SearchStats = search::limits::SearchStats;
pub type StrategyError = types::StrategyError;
