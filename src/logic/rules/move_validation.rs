// src/logic/rules/move_validation.rs
//! カード移動の全体的な妥当性チェックを行う。
//!
//! どのチェックもデッキを書き換えない。最初に引っかかったルールだけを返すよ。

use log::debug;

use crate::components::card::Card;
use crate::components::deck::{Deck, DeckType};
use crate::error::MoveError;
use crate::logic::rules::{common, foundation, tableau};

/// カードの中身を見ないで、デッキの種類・位置・空かどうかだけでチェックする。
///
/// 構文チェック (`check_player_input`) は通ってる前提。
/// チェックの順番は変えちゃダメ！
pub fn deck_level_checks(
    source_deck: &Deck,
    source_card_index: usize,
    destination_deck: &Deck,
) -> Result<(), MoveError> {
    debug!(
        "[Deck Check] {:?}[{}] -> {:?}",
        source_deck.deck_type(),
        source_card_index,
        destination_deck.deck_type()
    );

    if source_card_index < source_deck.invisible_cards() {
        return Err(MoveError::InvisibleCard);
    }
    // 同じインスタンスかどうかで比べる (中身が同じ別のデッキは OK)
    if std::ptr::eq(source_deck, destination_deck) {
        return Err(MoveError::SameDeck);
    }
    if source_deck.is_empty() {
        return Err(MoveError::EmptySource);
    }
    if destination_deck.deck_type() == DeckType::Stock {
        return Err(MoveError::StockDestination);
    }
    if destination_deck.deck_type() == DeckType::Stack
        && source_card_index != source_deck.len() - 1
    {
        return Err(MoveError::MultipleCardsToStack);
    }
    Ok(())
}

/// 移動するカード (複数枚なら一番下の1枚) と移動先の一番上のカードを比べるチェック。
///
/// `deck_level_checks` が通ってる前提だよ。
/// Joker はデッキの種類に関係なく `InvalidOperation`。
pub fn card_level_checks(target_deck: &Deck, card_to_add: Card) -> Result<(), MoveError> {
    if let Err(err) = common::ensure_not_joker(card_to_add) {
        debug!("[Card Check] {} is not a playable card", card_to_add);
        return Err(err.into());
    }
    let top_card = target_deck.top();

    match target_deck.deck_type() {
        DeckType::Stack => foundation::check_stack_move(top_card, card_to_add),
        DeckType::Column => tableau::check_column_move(top_card, card_to_add),
        DeckType::Stock | DeckType::Waste => {
            debug!("[Card Check] Moving to {:?} is not allowed.", target_deck.deck_type());
            Err(MoveError::NotStackOrColumn)
        }
    }
}
