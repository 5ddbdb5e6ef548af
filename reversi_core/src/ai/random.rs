use crate::ai::types::Fallible;
use crate::engine::state::GameState;
use crate::engine::topology::Topology;
use crate::engine::types::Color;

/// 64-bit 線形合同法 (LCG) の簡易 RNG。
/// - rand クレート不使用
/// - `seed` で決定的に再現可能
#[derive(Debug, Clone, Copy)]
struct Lcg64 {
    /// 内部状態。
    state: u64,
}

impl Lcg64 {
    /// LCG の内部状態を `seed` から初期化する。
    #[inline]
    const fn new(seed: u64) -> Self {
        // seed が 0 でも動くように軽く攪拌（任意）
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    /// 次の u32 を生成する（上位 32bit を返す）。
    #[inline]
    fn next_u32(&mut self) -> u32 {
        // 2^64 mod の LCG: state = state * A + C
        // よく使われる定数（PCG 系で採用される LCG 定数）
        const LCG_MULTIPLIER: u64 = 6_364_136_223_846_793_005;
        const LCG_INCREMENT: u64 = 1_442_695_040_888_963_407;

        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);

        u32::try_from(self.state >> 32).unwrap_or(u32::MAX)
    }
}

/// 合法手からランダムに1手を選択する方策。
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct RandomMove {
    /// 乱数生成器。
    rng: Lcg64,
}

impl RandomMove {
    /// `seed` を用いて初期化する。
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            rng: Lcg64::new(seed),
        }
    }
}

impl<T: Topology> Fallible<T> for RandomMove {
    #[inline]
    fn choose(&mut self, state: &GameState<T>, color: Color) -> Option<T::Coord> {
        let moves = state.legal_moves(color);
        if moves.is_empty() {
            return None;
        }

        let index = choose_index(moves.len(), self.rng.next_u32());
        moves.get(index).map(|&(coord, _)| coord)
    }
}

/// `0..len` から `random` に基づき1つ選択して返す（乗算による範囲縮小）。
fn choose_index(len: usize, random: u32) -> usize {
    let len_u64 = u64::try_from(len).unwrap_or(u64::MAX);
    let product = u64::from(random).wrapping_mul(len_u64);
    let high_u64 = product.wrapping_shr(32);
    usize::try_from(high_u64).unwrap_or(usize::MIN)
}
