// src/systems/mod.rs
//! GameState を進めるシステムたち。配る・動かす・勝利判定・スコア計算。

pub mod deal_system;
pub mod move_card_system;
pub mod scoring_system;
pub mod win_condition_system;

pub use deal_system::{init, init_with_rng};
pub use move_card_system::{execute_move, play_move};
pub use scoring_system::{apply_bonus_score, apply_time_penalty, finish_session};
pub use win_condition_system::detect_game_win;
