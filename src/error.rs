// src/error.rs
//! エラー型をまとめるよ。
//!
//! - `MoveError`: プレイヤーの移動が不正だった時のエラー。メッセージはそのままユーザーに見せる用！
//! - `CardError`: Joker の色を聞いた、みたいな「呼び出し側のバグ」。ユーザーには見せない。

use thiserror::Error;

/// カードの分類で起きる不正操作。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Method red_suit() should not be used with Jokers")]
    JokerColor,
}

/// 移動のチェックで見つかったルール違反。
///
/// 文字列はフロントエンドにそのまま表示されるので、勝手に文言を変えないこと！
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("{reason}\n{help}")]
    Syntax { reason: String, help: &'static str },

    #[error("There is no card at that position")]
    NoSuchCard,

    // --- デッキレベル ---
    #[error("You can't move an invisible card")]
    InvisibleCard,
    #[error("Move source and destination can't be the same")]
    SameDeck,
    #[error("You can't move a card from an empty deck")]
    EmptySource,
    #[error("You can't move cards to the stock")]
    StockDestination,
    #[error("You can't move more than 1 card at a time to a Stack Pile")]
    MultipleCardsToStack,

    // --- カードレベル ---
    #[error("Target deck is neither Stack nor Column.")]
    NotStackOrColumn,
    #[error("An Ace has to be the first card of a Stack pile")]
    AceMustStartStack,
    #[error("Stack piles can only hold cards increasing in rank from Ace to King")]
    StackRankSequence,
    #[error("Stack piles can only contain same-suit cards")]
    StackSuitMismatch,
    #[error("A King has to be the first card in a Column")]
    KingMustStartColumn,
    #[error("Column cards have to alternate colors")]
    ColumnColorMismatch,
    #[error("Columns hold alternating-color cards of decreasing rank from King to Ace")]
    ColumnRankSequence,

    /// ルール違反じゃなくてバグ。ユーザーに見せる前に `is_rule_violation` で弾いてね。
    #[error(transparent)]
    InvalidOperation(#[from] CardError),
}

impl MoveError {
    /// プレイヤーに見せていいエラーなら true。
    pub fn is_rule_violation(&self) -> bool {
        !matches!(self, MoveError::InvalidOperation(_))
    }

    pub(crate) fn syntax(reason: impl Into<String>) -> Self {
        MoveError::Syntax { reason: reason.into(), help: crate::config::layout::HELP_TEXT }
    }
}
