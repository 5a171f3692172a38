//! 場札 (Column) へのカード移動ルールを定義するよ。

use log::debug;

use crate::components::card::{Card, Rank};
use crate::error::MoveError;
// 共通ヘルパーを使うためにインポート
use super::common::{ensure_not_joker, opposing_color};

/// 場札の一番上 (`top_card`) に `card_to_add` を置けるかチェックする。
///
/// - 空の列: K しか置けない
/// - それ以外: 色が交互で、ランクがちょうど1つ下
pub fn check_column_move(top_card: Option<Card>, card_to_add: Card) -> Result<(), MoveError> {
    ensure_not_joker(card_to_add)?;

    let Some(top_card) = top_card else {
        debug!("[Column Rule] Moving {} onto empty column", card_to_add);
        if card_to_add.rank != Rank::King {
            return Err(MoveError::KingMustStartColumn);
        }
        return Ok(());
    };

    // 一番上が Joker だったらここで InvalidOperation になる
    let colors_different = opposing_color(top_card, card_to_add)?;
    let rank_is_one_less = card_to_add.rank.ordinal() + 1 == top_card.rank.ordinal();

    debug!(
        "[Column Rule] Moving {} onto {}. Colors different: {}. Rank is one less: {}.",
        card_to_add, top_card, colors_different, rank_is_one_less
    );

    if !colors_different {
        return Err(MoveError::ColumnColorMismatch);
    }
    if !rank_is_one_less {
        return Err(MoveError::ColumnRankSequence);
    }
    Ok(())
}
