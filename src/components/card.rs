// src/components/card.rs

// serde を使う宣言！カード情報をフロントエンドに渡す時に使うよ！
use serde::{Deserialize, Serialize};
use std::fmt;

/// カードのスート（マーク）を表す列挙型だよ！❤️♦️♣️♠️
///
/// Joker も一応定義しておくけど、通常のプレイでは絶対に使わないよ。
/// Joker には色がないので、色の判定に渡すとエラーになる！(`logic::rules::common` 参照)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Club,    // ♣️
    Spade,   // ♠️
    Diamond, // ♦️
    Heart,   // ❤️
    Joker,
}

/// カードのランク（数字）を表す列挙型だよ！ A, 2, 3, ..., K
///
/// PartialOrd, Ord も付けてるから、ランクの大小比較 (`<`, `>`) もできる！👍
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace = 1, // A は 1 として扱うよ
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,  // 11
    Queen, // 12
    King,  // 13
}

impl Rank {
    /// ランクの序数 (A=1 ... K=13) を返すよ。並び順のチェックはこれで比較する。
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// プレイで使う4スート (Joker は含まない！)
pub const ALL_SUITS: [Suit; 4] = [Suit::Club, Suit::Spade, Suit::Diamond, Suit::Heart];

/// 全13ランク、A から K の順番。
pub const ALL_RANKS: [Rank; 13] = [
    Rank::Ace,
    Rank::Two,
    Rank::Three,
    Rank::Four,
    Rank::Five,
    Rank::Six,
    Rank::Seven,
    Rank::Eight,
    Rank::Nine,
    Rank::Ten,
    Rank::Jack,
    Rank::Queen,
    Rank::King,
];

/// カードそのものを表す構造体だよ！🃏
///
/// 一度作ったら中身は変わらないので Copy にしてる。
/// 表向き/裏向きはカード自身じゃなくて、デッキの `invisible_cards` で管理するよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} of {:?}", self.rank, self.suit)
    }
}
