use core::fmt;

use crate::engine::capture::Captures;
use crate::engine::config::{ConfigError, GameConfig};
use crate::engine::state::{GameState, PlayError, Status};
use crate::engine::topology::Topology;
use crate::engine::types::{Color, Move};

/// 状態変更の通知内容。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum GameEvent<C> {
    /// 終局した（引き分けなら `winner` は `None`）。
    Ended {
        /// 勝者。
        winner: Option<Color>,
    },
    /// パスした。
    Passed {
        /// パスした色。
        color: Color,
    },
    /// 着手した。
    Placed {
        /// 反転した石数。
        captured: u32,
        /// 着手した色。
        color: Color,
        /// 着手マス。
        coord: C,
    },
    /// 開始した。
    Started {
        /// 最初の手番。
        turn: Color,
    },
}

/// 状態変更の通知を受け取るリスナー。
///
/// 通知の届け先（UI の再描画など）は外部の責務。
pub trait Listener<C> {
    /// 変更が成功するたびに呼ばれる。
    fn on_event(&mut self, event: &GameEvent<C>);
}

impl<C, F: FnMut(&GameEvent<C>)> Listener<C> for F {
    #[inline]
    fn on_event(&mut self, event: &GameEvent<C>) {
        self(event);
    }
}

/// リスナーへ変更を通知するゲーム。
///
/// 状態そのものは `GameState` が持ち、`snapshot` で得られるコピーにリスナーは含まれない。
pub struct Game<T: Topology> {
    /// 登録されたリスナー。
    listeners: Vec<Box<dyn Listener<T::Coord>>>,
    /// ゲームの状態。
    state: GameState<T>,
}

impl<T: Topology> Game<T> {
    /// 設定からゲームを生成する。
    ///
    /// # Errors
    ///
    /// 初期配置が盤外を含む場合、`ConfigError::SetupOutsideBoard` を返す。
    #[inline]
    pub fn new(config: &GameConfig<T>) -> Result<Self, ConfigError> {
        GameState::new(config).map(|state| Self {
            listeners: Vec::new(),
            state,
        })
    }

    /// 全リスナーへ通知する。
    fn notify(&mut self, event: &GameEvent<T::Coord>) {
        for listener in &mut self.listeners {
            listener.on_event(event);
        }
    }

    /// 終局していれば終局を通知する。
    fn notify_if_ended(&mut self) {
        if let Ok(winner) = self.state.winner() {
            tracing::debug!(?winner, "game over");
            self.notify(&GameEvent::Ended { winner });
        }
    }

    /// パスを適用し、リスナーへ通知する。
    ///
    /// # Errors
    ///
    /// `GameState::pass` と同じ条件でエラーを返す。
    #[inline]
    pub fn pass(&mut self, color: Color) -> Result<Status, PlayError> {
        let status = match self.state.pass(color) {
            Ok(value) => value,
            Err(err) => return Err(err),
        };

        self.notify(&GameEvent::Passed { color });
        self.notify_if_ended();
        Ok(status)
    }

    /// 着手を適用し、リスナーへ通知する。
    ///
    /// # Errors
    ///
    /// `GameState::place` と同じ条件でエラーを返す。
    #[inline]
    pub fn place(
        &mut self,
        coord: T::Coord,
        color: Color,
    ) -> Result<Captures<T::Direction>, PlayError> {
        let captures = match self.state.place(coord, color) {
            Ok(value) => value,
            Err(err) => return Err(err),
        };

        self.notify(&GameEvent::Placed {
            captured: captures.total(),
            color,
            coord,
        });
        Ok(captures)
    }

    /// 1手（打つ/パス）を適用し、リスナーへ通知する。
    ///
    /// # Errors
    ///
    /// `GameState::play` と同じ条件でエラーを返す。
    #[inline]
    pub fn play(&mut self, color: Color, mv: Move<T::Coord>) -> Result<Status, PlayError> {
        match mv {
            Move::Pass => self.pass(color),
            Move::Place(coord) => match self.place(coord, color) {
                Ok(_captures) => Ok(self.state.status()),
                Err(err) => Err(err),
            },
        }
    }

    /// 現在の状態の独立したコピーを返す。
    #[inline]
    #[must_use]
    pub fn snapshot(&self) -> GameState<T> {
        self.state.clone()
    }

    /// ゲームを開始し、リスナーへ通知する。
    ///
    /// # Errors
    ///
    /// `GameState::start` と同じ条件でエラーを返す。
    #[inline]
    pub fn start(&mut self) -> Result<(), PlayError> {
        if let Err(err) = self.state.start() {
            return Err(err);
        }

        if let Some(turn) = self.state.turn() {
            self.notify(&GameEvent::Started { turn });
        }
        Ok(())
    }

    /// 現在の状態への参照を返す（問い合わせ用）。
    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState<T> {
        &self.state
    }

    /// リスナーを登録する。
    #[inline]
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: Listener<T::Coord> + 'static,
    {
        self.listeners.push(Box::new(listener));
    }
}

impl<T: Topology> fmt::Debug for Game<T> {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Game")
            .field("listeners", &self.listeners.len())
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::RefCell;

    use super::{Game, GameEvent};
    use crate::engine::config::{GameConfig, Setup};
    use crate::engine::state::PlayError;
    use crate::engine::topology::hex::{HexCoord, HexTopology};
    use crate::engine::types::{Color, Move};

    type Log = Rc<RefCell<Vec<GameEvent<HexCoord>>>>;

    fn observed_game() -> (Game<HexTopology>, Log) {
        let topology = HexTopology::new(6).unwrap_or_else(|_| HexTopology::smallest());
        let config = GameConfig::new(topology, Setup::Standard, false);
        let mut game = Game::new(&config).unwrap_or_else(|_| unreachable!());
        let log: Log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        game.subscribe(move |event: &GameEvent<HexCoord>| sink.borrow_mut().push(*event));
        (game, log)
    }

    #[test]
    fn every_successful_mutation_is_notified() {
        let (mut game, log) = observed_game();

        assert!(game.start().is_ok());
        assert!(game.place(HexCoord::new(-1, -1), Color::Black).is_ok());
        assert!(game.play(Color::White, Move::Pass).is_ok());
        assert!(game.pass(Color::Black).is_ok());

        assert_eq!(
            *log.borrow(),
            vec![
                GameEvent::Started { turn: Color::Black },
                GameEvent::Placed {
                    captured: 1,
                    color: Color::Black,
                    coord: HexCoord::new(-1, -1),
                },
                GameEvent::Passed { color: Color::White },
                GameEvent::Passed { color: Color::Black },
                GameEvent::Ended {
                    winner: Some(Color::Black),
                },
            ]
        );
    }

    #[test]
    fn failed_mutations_are_not_notified() {
        let (mut game, log) = observed_game();

        assert_eq!(game.pass(Color::Black), Err(PlayError::NotStarted));
        assert!(game.start().is_ok());
        assert_eq!(game.start(), Err(PlayError::AlreadyStarted));
        assert_eq!(
            game.place(HexCoord::new(0, 0), Color::Black).err(),
            Some(PlayError::IllegalMove)
        );

        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn snapshots_do_not_affect_the_live_game() {
        let (mut game, log) = observed_game();
        assert!(game.start().is_ok());

        let mut snapshot = game.snapshot();
        assert!(snapshot.place(HexCoord::new(-1, -1), Color::Black).is_ok());

        assert_eq!(game.state().color_at(HexCoord::new(-1, -1)), Ok(None));
        assert_eq!(game.state().turn(), Some(Color::Black));
        assert_eq!(log.borrow().len(), 1);
    }
}
