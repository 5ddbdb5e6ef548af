//! `reversi_core::ai::search` の性能計測（アルファベータとミニマックスの1手選択）。

use core::hint::black_box;
use criterion::BenchmarkId;
use criterion::Criterion;
use reversi_core::ai::types::Fallible as _;
use reversi_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 8x8 の初期局面を返す。
fn square_initial() -> Option<engine::GameState<engine::SquareTopology>> {
    let topology = match engine::SquareTopology::new(8) {
        Ok(value) => value,
        Err(_err) => return None,
    };
    let config = engine::GameConfig::new(topology, engine::Setup::Standard, true);
    engine::GameState::new(&config).ok()
}

/// 深さごとにアルファベータとミニマックスを計測する。
fn bench_search(criterion: &mut Criterion) {
    let Some(state) = square_initial() else {
        return;
    };
    let mut group = criterion.benchmark_group("ai/search/square8");
    group.sample_size(10);

    for depth in 1_u8..=4 {
        group.bench_with_input(BenchmarkId::new("alphabeta", depth), &depth, |bench, &d| {
            bench.iter(|| black_box(ai::AlphaBeta::new(d).choose(&state, engine::Color::Black)));
        });
        group.bench_with_input(BenchmarkId::new("minimax", depth), &depth, |bench, &d| {
            bench.iter(|| black_box(ai::Minimax::new(d).choose(&state, engine::Color::Black)));
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_search(&mut criterion);
    criterion.final_summary();
}
