/// 盤面（座標→石）の実装。
pub mod board;
/// 反転判定・反転処理（トポロジー非依存）。
pub mod capture;
/// ゲーム生成時の設定。
pub mod config;
/// 変更通知（リスナー）付きのゲーム。
pub mod game;
/// ゲーム進行（手番、パス、終局判定など）の実装。
pub mod state;
/// 盤の形状（六角形/正方形）。
pub mod topology;
pub mod types;

pub type Board<T> = board::Board<T>;
pub type Captures<D> = capture::Captures<D>;
pub type Color = types::Color;
pub type ConfigError = config::ConfigError;
pub type Game<T> = game::Game<T>;
pub type GameConfig<T> = config::GameConfig<T>;
pub type GameEvent<C> = game::GameEvent<C>;
pub type GameState<T> = state::GameState<T>;
pub type GameStatus = state::Status;
pub type HexCoord = topology::hex::HexCoord;
pub type HexDirection = topology::hex::HexDirection;
pub type HexTopology = topology::hex::HexTopology;
pub type Move<C> = types::Move<C>;
pub type PlayError = state::PlayError;
pub type Setup<C> = config::Setup<C>;
pub type SquareCoord = topology::square::SquareCoord;
pub type SquareDirection = topology::square::SquareDirection;
pub type SquareTopology = topology::square::SquareTopology;
