// src/lib.rs
//! クロンダイク・ソリティアの移動ルールチェックと、ゲーム状態の管理！🃏
//!
//! 流れはこんな感じ:
//! 1. UI がプレイヤーの入力をトークンに分割する (このクレートの外)
//! 2. `check_player_input` で構文チェック
//! 3. `deck_level_checks` → `card_level_checks` でルールチェック
//! 4. `execute_move` で移動して、`detect_game_win` で勝利判定
//! 5. 終わったら `apply_time_penalty` か `apply_bonus_score`
//!
//! 描画や入力の受け取りは UI 側の仕事。このクレートはログを `log` に出すだけで、
//! ロガーの初期化もしないよ。

pub mod components;
pub mod config;
pub mod error;
pub mod logic;
pub mod systems;

// よく使う型と関数はここから直接使えるようにしておく
pub use crate::components::card::{Card, Rank, Suit};
pub use crate::components::deck::{Deck, DeckType};
pub use crate::components::game_state::{DeckId, GameState};
pub use crate::error::{CardError, MoveError};
pub use crate::logic::rules::{
    card_level_checks, check_column_move, check_player_input, check_stack_move,
    deck_level_checks, opposing_color, red_suit, DestinationLocator, MoveCommand, SourceLocator,
};
pub use crate::systems::{
    apply_bonus_score, apply_time_penalty, detect_game_win, execute_move, finish_session, init,
    init_with_rng, play_move,
};
