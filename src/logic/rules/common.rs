//! ルール判定で共通して使うヘルパー関数や型を置くよ。

use crate::components::card::{Card, Suit};
use crate::error::CardError;

/// カードの色（赤か黒か）を表すヘルパーenumだよ。
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CardColor {
    Red,
    Black,
}

impl CardColor {
    /// スートからカードの色を取得する関数。Joker には色がないのでエラー！
    pub fn from_suit(suit: Suit) -> Result<Self, CardError> {
        match suit {
            Suit::Heart | Suit::Diamond => Ok(CardColor::Red),
            Suit::Club | Suit::Spade => Ok(CardColor::Black),
            Suit::Joker => Err(CardError::JokerColor),
        }
    }
}

/// Joker じゃなければ Ok。Joker はどのデッキにも置けないので、色を聞いた時と同じエラーで弾くよ。
pub fn ensure_not_joker(card: Card) -> Result<(), CardError> {
    CardColor::from_suit(card.suit).map(|_| ())
}

/// カードが赤いスート (ダイヤかハート) なら true。
pub fn red_suit(card: Card) -> Result<bool, CardError> {
    Ok(CardColor::from_suit(card.suit)? == CardColor::Red)
}

/// 2枚のカードの色が違う (赤と黒) なら true。同じスート・同じ色なら false。
pub fn opposing_color(card1: Card, card2: Card) -> Result<bool, CardError> {
    Ok(red_suit(card1)? != red_suit(card2)?)
}
