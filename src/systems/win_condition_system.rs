// src/systems/win_condition_system.rs

use log::info;

use crate::components::game_state::GameState;
use crate::logic::rules::check_win_condition;

/// 勝利条件をチェックして、満たしてたら `game_won` を立てるよ！🏆
///
/// 条件を満たしてない時は何もしない (一度立てたフラグを下ろすこともしない)。
/// 何回呼んでも大丈夫。
pub fn detect_game_win(game_state: &mut GameState) {
    if game_state.game_won {
        return;
    }
    if check_win_condition(game_state) {
        info!("[Win] All cards revealed and stock is empty, game won!");
        game_state.game_won = true;
    }
}
