//! ゲームの勝利条件判定ロジックを定義するよ。

use crate::components::game_state::GameState;

/// 裏向きのカードが全部の列から無くなって、山札も空ならクリア！
/// (ここまで来たら残りは全部組札に積めるからね)
pub fn check_win_condition(game_state: &GameState) -> bool {
    let no_invisible_cards = game_state
        .columns
        .values()
        .all(|column| column.invisible_cards() == 0);
    no_invisible_cards && game_state.stock.is_empty()
}
