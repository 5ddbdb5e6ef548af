//! `reversi_core::ai::random` の性能計測（1手選択）。

use criterion::BatchSize;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::black_box;
use reversi_core::ai::types::{Fallible as _, select_move};
use reversi_core::{ai, engine};

/// `cargo bench` の引数を取り込みつつ `Criterion` を生成する。
fn criterion_configured() -> Criterion {
    let base = Criterion::default();
    base.configure_from_args()
}

/// 指定手数だけ進めた局面を返す（途中で終局した場合はその時点で止める）。
fn state_after_plies(plies: u16) -> Option<engine::GameState<engine::HexTopology>> {
    let topology = match engine::HexTopology::new(6) {
        Ok(value) => value,
        Err(_err) => return None,
    };
    let config = engine::GameConfig::new(topology, engine::Setup::Standard, true);
    let mut state = match engine::GameState::new(&config) {
        Ok(value) => value,
        Err(_err) => return None,
    };
    let mut black_agent = ai::RandomMove::new(u64::MIN);
    let mut white_agent = ai::RandomMove::new(u64::MIN.wrapping_add(1));

    for _turn in u16::MIN..plies {
        let Some(color) = state.turn() else {
            break;
        };
        let mv = match color {
            engine::Color::Black => select_move(&mut black_agent, &state, color),
            engine::Color::White => select_move(&mut white_agent, &state, color),
            _ => engine::Move::Pass,
        };

        let status = match state.play(color, mv) {
            Ok(value) => value,
            Err(_err) => break,
        };

        if let engine::GameStatus::GameOver { .. } = status {
            break;
        }
    }

    Some(state)
}

/// ベンチ用に代表局面をいくつか用意する。
fn state_samples() -> Vec<engine::GameState<engine::HexTopology>> {
    [0, 8, 24]
        .into_iter()
        .filter_map(state_after_plies)
        .collect()
}

/// `RandomMove::choose` を計測する。
fn bench_choose(criterion: &mut Criterion) {
    let samples = state_samples();
    let mut group = criterion.benchmark_group("ai/random/choose");

    for (index, state) in samples.iter().enumerate() {
        let Some(color) = state.turn() else {
            continue;
        };
        let bench_id = BenchmarkId::new("hex6", index);
        group.bench_with_input(bench_id, state, |bench, input| {
            bench.iter_batched(
                || ai::RandomMove::new(u64::MIN),
                |mut agent| black_box(agent.choose(input, color)),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

/// ベンチマークのエントリーポイント。
fn main() {
    let mut criterion = criterion_configured();
    bench_choose(&mut criterion);
    criterion.final_summary();
}
