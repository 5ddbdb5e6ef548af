//! 結合テスト: CPU同士の対戦が六角形盤・正方形盤の両方で終局まで進むことを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use reversi_core::ai::types::{Fallible, select_move};
    use reversi_core::{ai, engine};

    /// 1ゲームの結果。
    struct Outcome {
        /// 通知されたイベント数（開始と終局を含む）。
        events: usize,
        /// 終局時の状態。
        status: engine::GameStatus,
        /// 終局が通知されたかどうか。
        ended_notified: bool,
    }

    /// テスト用の JSON ログを有効にする（2回目以降は何もしない）。
    fn init_tracing() {
        let _: Result<(), _> = tracing_subscriber::fmt()
            .json()
            .with_test_writer()
            .try_init();
    }

    /// 2つの方策で対戦させ、結果を返す。
    fn play_out<T, B, W>(topology: T, mut black_agent: B, mut white_agent: W) -> Outcome
    where
        T: engine::topology::Topology,
        B: Fallible<T>,
        W: Fallible<T>,
    {
        init_tracing();

        let config = engine::GameConfig::standard(topology);
        let mut game = match engine::Game::new(&config) {
            Ok(value) => value,
            Err(err) => panic!("standard setup must be valid, got={err:?}"),
        };

        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        game.subscribe(move |event: &engine::GameEvent<T::Coord>| {
            sink.borrow_mut().push(*event);
        });

        let start_result = game.start();
        assert!(start_result.is_ok(), "start must succeed, got={start_result:?}");

        let cell_count = game.state().topology().cell_count();
        // 1マスにつき1手 + パスの余裕を見て回す。
        let turn_limit = cell_count.saturating_mul(2);

        for _turn in 0..turn_limit {
            let Some(color) = game.state().turn() else {
                break;
            };
            let snapshot = game.snapshot();

            let mv = match color {
                engine::Color::Black => select_move(&mut black_agent, &snapshot, color),
                engine::Color::White => select_move(&mut white_agent, &snapshot, color),
                _ => engine::Move::Pass,
            };

            let play_result = game.play(color, mv);
            assert!(
                play_result.is_ok(),
                "play must succeed, got={play_result:?} mv={mv:?}"
            );

            if matches!(play_result, Ok(engine::GameStatus::GameOver { .. })) {
                break;
            }
        }

        let status = game.state().status();
        let recorded = events.borrow();
        Outcome {
            events: recorded.len(),
            status,
            ended_notified: recorded
                .iter()
                .any(|event| matches!(event, engine::GameEvent::Ended { .. })),
        }
    }

    /// 終局していて、石数がマス数を超えていないことを確認する。
    fn assert_finished(outcome: &Outcome, cell_count: usize) {
        let engine::GameStatus::GameOver { black, white } = outcome.status else {
            panic!(
                "game did not finish within turn limit, status={:?}",
                outcome.status
            );
        };

        let total = black.checked_add(white);
        assert!(total.is_some(), "black+white must not overflow");
        let total = usize::try_from(total.unwrap_or(u32::MAX)).unwrap_or(usize::MAX);
        assert!(
            total <= cell_count,
            "total discs must be <= {cell_count}, got={total}"
        );
        assert!(outcome.ended_notified, "Ended event must be delivered");
        // 開始・終局と、少なくとも2回のパス。
        assert!(outcome.events >= 4, "events={}", outcome.events);
    }

    /// 六角形盤で `random` 同士が終局まで進む。
    #[test]
    fn hex_random_vs_random_finishes() {
        for (seed_black, seed_white) in [(u64::MIN, u64::MIN.wrapping_add(1)), (42, 4242)] {
            let topology = engine::HexTopology::new(6)
                .unwrap_or_else(|err| panic!("size 6 must be valid, got={err:?}"));
            let outcome = play_out(
                topology,
                ai::RandomMove::new(seed_black),
                ai::RandomMove::new(seed_white),
            );
            assert_finished(&outcome, 91);
        }
    }

    /// 六角形盤で貪欲法の連鎖とアルファベータが終局まで進む。
    #[test]
    fn hex_greedy_chain_vs_alphabeta_finishes() {
        let topology = engine::HexTopology::new(4)
            .unwrap_or_else(|err| panic!("size 4 must be valid, got={err:?}"));
        let greedy = ai::PreferCorners::new(ai::Fallback::new(
            ai::AvoidNearCorners::default(),
            ai::MaxCapture::default(),
        ));
        let outcome = play_out(topology, greedy, ai::AlphaBeta::new(2));
        assert_finished(&outcome, 37);
    }

    /// 正方形盤で `random` とアルファベータが終局まで進む。
    #[test]
    fn square_random_vs_alphabeta_finishes() {
        let topology = engine::SquareTopology::new(6)
            .unwrap_or_else(|err| panic!("size 6 must be valid, got={err:?}"));
        let outcome = play_out(topology, ai::RandomMove::new(7), ai::AlphaBeta::new(3));
        assert_finished(&outcome, 36);
    }

    /// 正方形盤でミニマックスと最大反転が終局まで進む。
    #[test]
    fn square_minimax_vs_max_capture_finishes() {
        let topology = engine::SquareTopology::new(8)
            .unwrap_or_else(|err| panic!("size 8 must be valid, got={err:?}"));
        let outcome = play_out(topology, ai::Minimax::new(1), ai::MaxCapture::default());
        assert_finished(&outcome, 64);
    }

    /// 動的ディスパッチの方策でも対戦できる。
    #[test]
    fn boxed_strategies_play_a_full_game() {
        let topology = engine::SquareTopology::new(4)
            .unwrap_or_else(|err| panic!("size 4 must be valid, got={err:?}"));
        let black: Box<dyn Fallible<engine::SquareTopology>> = Box::new(ai::RandomMove::new(3));
        let white: Box<dyn Fallible<engine::SquareTopology>> =
            Box::new(ai::AlphaBeta::with_limits(ai::SearchLimits::new(4, 500)));
        let outcome = play_out(topology, black, white);
        assert_finished(&outcome, 16);
    }
}
