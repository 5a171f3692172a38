// src/systems/move_card_system.rs
//! チェックを通った移動を、実際に GameState に反映するシステムだよ。

use log::{debug, info};

use crate::components::deck::{Deck, DeckType};
use crate::components::game_state::GameState;
use crate::error::MoveError;
use crate::logic::rules::{
    card_level_checks, check_player_input, deck_level_checks, MoveCommand, SourceLocator,
};
use crate::systems::win_condition_system::detect_game_win;

/// トークンに分割済みの入力から1手進める。
///
/// 構文チェック → デッキレベル → カードレベル → 移動 → 勝利判定、の順番。
pub fn play_move<S: AsRef<str>>(game_state: &mut GameState, input: &[S]) -> Result<(), MoveError> {
    let command = check_player_input(input)?;
    execute_move(game_state, &command)
}

/// 移動元の何枚目のカードを動かすのかを決める。
///
/// 山札と組札は一番上 (空なら 0、空かどうかはデッキレベルのチェックで弾く)。
/// 場札は指定された行。存在しない行はここでエラーにする。
fn resolve_source_index(source_deck: &Deck, source: SourceLocator) -> Result<usize, MoveError> {
    match source {
        SourceLocator::Stock | SourceLocator::Stack(_) => Ok(source_deck.len().saturating_sub(1)),
        SourceLocator::Column { row, .. } => {
            if !source_deck.is_empty() && row >= source_deck.len() {
                return Err(MoveError::NoSuchCard);
            }
            Ok(row)
        }
    }
}

/// 構文チェック済みの移動を実行する。
///
/// 途中でエラーになったら GameState は一切変わらないよ。
pub fn execute_move(game_state: &mut GameState, command: &MoveCommand) -> Result<(), MoveError> {
    let source_id = command.source.deck_id();
    let destination_id = command.destination.deck_id();

    // --- 1. チェック (読むだけ) ---
    let source_card_index = {
        let source_deck = game_state.deck(source_id).ok_or(MoveError::NoSuchCard)?;
        let destination_deck = game_state.deck(destination_id).ok_or(MoveError::NoSuchCard)?;

        let index = resolve_source_index(source_deck, command.source)?;
        deck_level_checks(source_deck, index, destination_deck)?;
        let card_to_add = source_deck.get(index).ok_or(MoveError::NoSuchCard)?;
        card_level_checks(destination_deck, card_to_add)?;
        index
    };

    // --- 2. 移動 ---
    // source と destination は別のデッキ (同じならデッキレベルで弾かれてる)
    let Some(source_deck) = game_state.deck_mut(source_id) else {
        return Err(MoveError::NoSuchCard);
    };
    let moved_cards = source_deck.take_from(source_card_index);
    if source_deck.deck_type() == DeckType::Column && source_deck.reveal_top_card() {
        debug!("[Move] Revealed a card in {:?}", source_id);
    }

    let Some(destination_deck) = game_state.deck_mut(destination_id) else {
        return Err(MoveError::NoSuchCard);
    };
    info!(
        "[Move] {} card(s) from {:?} to {:?}",
        moved_cards.len(),
        source_id,
        destination_id
    );
    destination_deck.extend(moved_cards);

    // --- 3. 勝利判定 ---
    detect_game_win(game_state);
    Ok(())
}
