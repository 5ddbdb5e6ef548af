//! Reversi (Othello) core logic on hexagonal and square boards.
//!
//! このクレートは盤の形状・反転判定・ゲーム進行を管理する `engine` と、
//! 手を選択する `ai`（貪欲法、ミニマックス、アルファベータ）を提供します。
//! 描画・入力・コントローラーは利用側（UI）の責務です。

#![forbid(unsafe_code)]

extern crate alloc;

/// ゲームルール・盤面・進行を提供するモジュール。
pub mod engine;

/// AI（手選択アルゴリズム）を提供するモジュール。
pub mod ai;
