// src/components/deck.rs

use serde::{Deserialize, Serialize};
use log::warn;

use crate::components::card::Card;

/// デッキの種類を示す Enum だよ。
/// どのルールが適用されるかはこれで決まる！
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DeckType {
    /// 山札 (Stock)。移動先には絶対になれない。
    Stock,
    /// 捨て札 (Waste)。全部表向き。
    Waste,
    /// 組札 (Stack pile)。スートごとに A から K まで積む。
    Stack,
    /// 場札 (Column)。裏向きと表向きのカードが混ざってる。
    Column,
}

/// カードの並び + デッキの種類 + 裏向きカードの枚数。
///
/// インデックス 0 が一番下 (一番奥) で、最後の要素が一番上のカードだよ。
/// 先頭から `invisible_cards` 枚は裏向きで、移動元として選べない。
///
/// `invisible_cards <= len()` は常に守る！
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    deck_type: DeckType,
    cards: Vec<Card>,
    invisible_cards: usize,
}

impl Deck {
    /// 空のデッキを作るよ。
    pub fn new(deck_type: DeckType) -> Self {
        Self { deck_type, cards: Vec::new(), invisible_cards: 0 }
    }

    /// カードが入った状態のデッキを作る (テストや配る時に便利！)
    pub fn with_cards(deck_type: DeckType, cards: Vec<Card>, invisible_cards: usize) -> Self {
        let mut deck = Self { deck_type, cards, invisible_cards: 0 };
        deck.set_invisible_cards(invisible_cards);
        deck
    }

    pub fn deck_type(&self) -> DeckType {
        self.deck_type
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Card> {
        self.cards.get(index).copied()
    }

    /// 一番上のカード。空なら None。
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub fn invisible_cards(&self) -> usize {
        self.invisible_cards
    }

    /// 裏向きカードの枚数をセットする。デッキの枚数を超える値は切り詰めるよ。
    pub fn set_invisible_cards(&mut self, invisible_cards: usize) {
        if invisible_cards > self.cards.len() {
            warn!(
                "[Deck] invisible_cards {} exceeds deck size {}, clamping",
                invisible_cards,
                self.cards.len()
            );
        }
        self.invisible_cards = invisible_cards.min(self.cards.len());
    }

    /// 一番上にカードを1枚積む。
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// 一番上にカードをまとめて積む (順番はそのまま)。
    pub fn extend(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }

    /// `index` から上のカードを全部取り出す。
    ///
    /// 取り出した後に `invisible_cards` が枚数を超えないように合わせるよ。
    pub fn take_from(&mut self, index: usize) -> Vec<Card> {
        let index = index.min(self.cards.len());
        let taken = self.cards.split_off(index);
        self.invisible_cards = self.invisible_cards.min(self.cards.len());
        taken
    }

    /// 表向きのカードが無くなって裏向きだけが残ってたら、一番上を表にする。
    /// めくったら true。
    pub fn reveal_top_card(&mut self) -> bool {
        if !self.cards.is_empty() && self.invisible_cards == self.cards.len() {
            self.invisible_cards -= 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn cards(n: usize) -> Vec<Card> {
        crate::components::card::ALL_RANKS
            .iter()
            .take(n)
            .map(|&rank| Card::new(rank, Suit::Heart))
            .collect()
    }

    #[test]
    fn new_deck_is_empty() {
        let deck = Deck::new(DeckType::Column);
        assert!(deck.is_empty());
        assert_eq!(deck.top(), None);
        assert_eq!(deck.invisible_cards(), 0);
        assert_eq!(deck.deck_type(), DeckType::Column);
    }

    #[test]
    fn invisible_cards_are_clamped_to_size() {
        let mut deck = Deck::with_cards(DeckType::Column, cards(3), 5);
        assert_eq!(deck.invisible_cards(), 3);

        deck.set_invisible_cards(1);
        assert_eq!(deck.invisible_cards(), 1);
    }

    #[test]
    fn take_from_splits_off_the_run() {
        let mut deck = Deck::with_cards(DeckType::Column, cards(5), 2);
        let taken = deck.take_from(3);

        assert_eq!(
            taken,
            vec![Card::new(Rank::Four, Suit::Heart), Card::new(Rank::Five, Suit::Heart)]
        );
        assert_eq!(deck.len(), 3);
        assert_eq!(deck.invisible_cards(), 2);
    }

    #[test]
    fn reveal_only_when_visible_part_is_gone() {
        let mut deck = Deck::with_cards(DeckType::Column, cards(3), 2);
        assert!(!deck.reveal_top_card(), "表向きが残ってるならめくらない");

        deck.take_from(2);
        assert!(deck.reveal_top_card());
        assert_eq!(deck.invisible_cards(), 1);

        let mut empty = Deck::new(DeckType::Column);
        assert!(!empty.reveal_top_card());
    }
}
