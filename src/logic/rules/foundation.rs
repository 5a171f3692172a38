//! 組札 (Stack pile) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::error::MoveError;
use super::common::ensure_not_joker;

/// 組札の一番上 (`top_card`) に `card_to_add` を置けるかチェックする。
///
/// - 空の組札: A しか置けない
/// - それ以外: 同じスートで、ランクがちょうど1つ上のカードだけ
///
/// A → 2 も「1つ上」の普通のケースとして扱うよ。
/// Joker は空の組札にも置けない (`InvalidOperation`)。
pub fn check_stack_move(top_card: Option<Card>, card_to_add: Card) -> Result<(), MoveError> {
    debug!("[Stack Rule] Checking {} onto {:?}", card_to_add, top_card);
    ensure_not_joker(card_to_add)?;

    let Some(top_card) = top_card else {
        if card_to_add.rank != Rank::Ace {
            debug!("[Stack Rule]  - Empty stack pile needs an Ace");
            return Err(MoveError::AceMustStartStack);
        }
        return Ok(());
    };

    if card_to_add.rank.ordinal() != top_card.rank.ordinal() + 1 {
        debug!("[Stack Rule]  - Rank sequence broken");
        return Err(MoveError::StackRankSequence);
    }
    if card_to_add.suit != top_card.suit {
        debug!("[Stack Rule]  - Suit mismatch");
        return Err(MoveError::StackSuitMismatch);
    }
    Ok(())
}
