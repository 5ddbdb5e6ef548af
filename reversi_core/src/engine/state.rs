use core::cmp::Ordering;

use crate::engine::board::Board;
use crate::engine::capture::{self, Captures};
use crate::engine::config::{ConfigError, GameConfig};
use crate::engine::topology::Topology;
use crate::engine::types::{Color, Move};

/// 終局となる連続パス回数。
const MAX_PASSES: u8 = 2;

/// 先手の色。
const FIRST_TURN: Color = Color::Black;

/// ゲームの状態。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Status {
    /// 手番側に合法手が無い（パスが必要だが終局ではない）。
    Blocked,
    /// 終局（2連続パス）。
    GameOver {
        /// 黒の石数。
        black: u32,
        /// 白の石数。
        white: u32,
    },
    /// 進行中。
    InProgress,
    /// 未開始。
    NotStarted,
}

/// 手の適用や問い合わせに失敗した理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum PlayError {
    /// すでに開始している。
    #[error("the game has already started")]
    AlreadyStarted,
    /// すでに終局している。
    #[error("the game is over")]
    GameOver,
    /// どの方向にも石を挟めない。
    #[error("the placement captures nothing")]
    IllegalMove,
    /// 盤外の座標。
    #[error("the coordinate is not on the board")]
    InvalidCoordinate,
    /// 開始前。
    #[error("the game has not started")]
    NotStarted,
    /// 着手マスが空きでない。
    #[error("the cell is already occupied")]
    OccupiedCell,
    /// 手番ではない。
    #[error("it is not this player's turn")]
    OutOfTurn,
    /// 終局前に勝者を問い合わせた。
    #[error("the winner is only known once the game is over")]
    WinnerQueriedBeforeEnd,
}

/// 1ゲームの進行を管理する構造体。
///
/// `Clone` は独立したディープコピーを返す（探索用のシミュレーションで使う）。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameState<T: Topology> {
    /// 盤面。
    board: Board<T>,
    /// 連続パス回数（0..=2）。
    pass_count: u8,
    /// 開始済みかどうか。
    started: bool,
    /// 手番（開始前は `None`）。
    turn: Option<Color>,
}

impl<T: Topology> GameState<T> {
    /// 盤面のコピーを返す。
    #[inline]
    #[must_use]
    pub fn board(&self) -> Board<T> {
        self.board.clone()
    }

    /// 手番・進行状態を検査する。
    fn check_turn(&self, color: Color) -> Result<(), PlayError> {
        if !self.started {
            return Err(PlayError::NotStarted);
        }
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if self.turn != Some(color) {
            return Err(PlayError::OutOfTurn);
        }
        Ok(())
    }

    /// 指定マスの石を返す（空きなら `None`）。
    ///
    /// # Errors
    ///
    /// 盤外の座標の場合、`PlayError::InvalidCoordinate` を返す。
    #[inline]
    pub fn color_at(&self, coord: T::Coord) -> Result<Option<Color>, PlayError> {
        self.board.get(coord).ok_or(PlayError::InvalidCoordinate)
    }

    /// `color` 視点で探索に使う独立したコピーを返す。
    ///
    /// 進行中で手番が `color` と異なる場合、コピー上で手番側のパスを適用して
    /// 手番を `color` に合わせる。元の状態は変更しない。
    #[inline]
    #[must_use]
    pub fn deep_copy_as(&self, color: Color) -> Self {
        let mut copy = self.clone();
        if let Some(turn) = copy.turn
            && turn != color
            && copy.started
            && !copy.is_over()
        {
            let _: Result<Status, PlayError> = copy.pass(turn);
        }
        copy
    }

    /// 着手を評価し、方向ごとに挟める石数を返す。
    ///
    /// # Errors
    ///
    /// 盤外の座標の場合、`PlayError::InvalidCoordinate` を返す。
    #[inline]
    pub fn evaluate_move(
        &self,
        coord: T::Coord,
        color: Color,
    ) -> Result<Captures<T::Direction>, PlayError> {
        capture::evaluate_move(&self.board, coord, color)
    }

    /// 指定色に合法手があるかどうかを返す。
    #[inline]
    #[must_use]
    pub fn has_legal_move(&self, color: Color) -> bool {
        self.board
            .empty_cells()
            .any(|coord| capture::is_legal(&self.board, coord, color))
    }

    /// 手番側に合法手が無い（パスするしかない）かどうかを返す。
    ///
    /// # Errors
    ///
    /// 開始前の場合、`PlayError::NotStarted` を返す。
    #[inline]
    pub fn has_to_pass(&self) -> Result<bool, PlayError> {
        match self.turn {
            Some(turn) => Ok(!self.has_legal_move(turn)),
            None => Err(PlayError::NotStarted),
        }
    }

    /// 指定マスへの着手が合法かどうかを返す（盤外・埋まっているマスは `false`）。
    #[inline]
    #[must_use]
    pub fn is_legal(&self, coord: T::Coord, color: Color) -> bool {
        capture::is_legal(&self.board, coord, color)
    }

    /// 終局しているかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.pass_count >= MAX_PASSES
    }

    /// 開始済みかどうかを返す。
    #[inline]
    #[must_use]
    pub const fn is_started(&self) -> bool {
        self.started
    }

    /// 指定色の合法手と評価結果を正規順で返す。
    #[inline]
    #[must_use]
    pub fn legal_moves(&self, color: Color) -> Vec<(T::Coord, Captures<T::Direction>)> {
        capture::legal_moves(&self.board, color)
    }

    /// 設定からゲームを生成する。
    ///
    /// # Errors
    ///
    /// 初期配置が盤外を含む場合、`ConfigError::SetupOutsideBoard` を返す。
    #[inline]
    pub fn new(config: &GameConfig<T>) -> Result<Self, ConfigError> {
        let board = match Board::from_setup(config.topology().clone(), config.setup()) {
            Ok(value) => value,
            Err(err) => return Err(err),
        };

        let mut state = Self {
            board,
            pass_count: u8::MIN,
            started: false,
            turn: None,
        };
        if config.started() {
            let _: Result<(), PlayError> = state.start();
        }

        Ok(state)
    }

    /// パスを適用する。
    ///
    /// 合法手があってもパスはできる。
    ///
    /// # Errors
    ///
    /// - `PlayError::NotStarted`: 開始前
    /// - `PlayError::GameOver`: すでに終局している
    /// - `PlayError::OutOfTurn`: `color` が手番でない
    #[inline]
    pub fn pass(&mut self, color: Color) -> Result<Status, PlayError> {
        if let Err(err) = self.check_turn(color) {
            return Err(err);
        }

        self.pass_count = self.pass_count.saturating_add(1).min(MAX_PASSES);
        self.turn = Some(color.opponent());
        tracing::debug!(?color, pass_count = self.pass_count, "pass");

        Ok(self.status())
    }

    /// 連続パス回数を返す。
    #[inline]
    #[must_use]
    pub const fn pass_count(&self) -> u8 {
        self.pass_count
    }

    /// 手番側に合法手が無い場合、パスを自動適用する。
    ///
    /// - 開始前・終局後は何もしない（`false`）。
    /// - 合法手がある場合は何もしない（`false`）。
    /// - パスを適用できた場合は `true`。
    #[inline]
    pub fn pass_if_needed(&mut self) -> bool {
        let turn = match self.turn {
            Some(value) if !self.is_over() => value,
            Some(_) | None => return false,
        };

        if self.has_legal_move(turn) {
            return false;
        }

        self.pass(turn).is_ok()
    }

    /// 着手を適用し、挟んだ石を反転させる。
    ///
    /// # Errors
    ///
    /// 次の場合にエラーを返し、状態は変更しない：
    /// - `PlayError::NotStarted`: 開始前
    /// - `PlayError::GameOver`: すでに終局している
    /// - `PlayError::OutOfTurn`: `color` が手番でない
    /// - `PlayError::InvalidCoordinate`: 盤外の座標
    /// - `PlayError::OccupiedCell`: 着手マスが空きでない
    /// - `PlayError::IllegalMove`: どの方向にも挟めない
    #[inline]
    pub fn place(
        &mut self,
        coord: T::Coord,
        color: Color,
    ) -> Result<Captures<T::Direction>, PlayError> {
        if let Err(err) = self.check_turn(color) {
            return Err(err);
        }

        let captures = match capture::apply_move(&mut self.board, coord, color) {
            Ok(value) => value,
            Err(err) => return Err(err),
        };

        self.pass_count = u8::MIN;
        self.turn = Some(color.opponent());
        tracing::debug!(?color, ?coord, captured = captures.total(), "place");

        Ok(captures)
    }

    /// 1手（打つ/パス）を適用する。
    ///
    /// # Errors
    ///
    /// `place` / `pass` と同じ条件でエラーを返す。
    #[inline]
    pub fn play(&mut self, color: Color, mv: Move<T::Coord>) -> Result<Status, PlayError> {
        match mv {
            Move::Pass => self.pass(color),
            Move::Place(coord) => match self.place(coord, color) {
                Ok(_captures) => Ok(self.status()),
                Err(err) => Err(err),
            },
        }
    }

    /// 指定色の石数を返す。
    #[inline]
    #[must_use]
    pub fn score(&self, color: Color) -> u32 {
        self.board.count(color)
    }

    /// 盤の大きさを返す。
    #[inline]
    #[must_use]
    pub fn size(&self) -> u8 {
        self.board.topology().size()
    }

    /// ゲームを開始し、先手に手番を与える。
    ///
    /// # Errors
    ///
    /// - `PlayError::AlreadyStarted`: すでに開始している
    /// - `PlayError::GameOver`: すでに終局している
    #[inline]
    pub fn start(&mut self) -> Result<(), PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if self.started {
            return Err(PlayError::AlreadyStarted);
        }

        self.started = true;
        self.turn = Some(FIRST_TURN);
        tracing::debug!(size = self.size(), turn = ?FIRST_TURN, "game started");

        Ok(())
    }

    /// 現在のゲーム状態を返す。
    #[inline]
    #[must_use]
    pub fn status(&self) -> Status {
        if self.is_over() {
            return Status::GameOver {
                black: self.score(Color::Black),
                white: self.score(Color::White),
            };
        }

        match self.turn {
            None => Status::NotStarted,
            Some(turn) if self.has_legal_move(turn) => Status::InProgress,
            Some(_) => Status::Blocked,
        }
    }

    /// 盤の形状を返す。
    #[inline]
    #[must_use]
    pub const fn topology(&self) -> &T {
        self.board.topology()
    }

    /// 手番を返す（開始前は `None`）。
    #[inline]
    #[must_use]
    pub const fn turn(&self) -> Option<Color> {
        self.turn
    }

    /// 勝者を返す（引き分けなら `None`）。
    ///
    /// # Errors
    ///
    /// 終局前の場合、`PlayError::WinnerQueriedBeforeEnd` を返す。
    #[inline]
    pub fn winner(&self) -> Result<Option<Color>, PlayError> {
        if !self.is_over() {
            return Err(PlayError::WinnerQueriedBeforeEnd);
        }

        let black = self.score(Color::Black);
        let white = self.score(Color::White);
        Ok(match black.cmp(&white) {
            Ordering::Greater => Some(Color::Black),
            Ordering::Less => Some(Color::White),
            Ordering::Equal => None,
        })
    }
}
