// src/logic/deck.rs

use crate::components::card::{Card, ALL_RANKS, ALL_SUITS};
use rand::seq::SliceRandom;
use rand::Rng;

/// 標準的な52枚のカードデッキ（Joker なし）を生成する関数だよ！🃏
///
/// スート順 → ランク順に並んでる。シャッフルは `shuffle_deck` で！
pub fn create_standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52); // 52枚入る容量を確保しておくと効率的！

    for &suit in ALL_SUITS.iter() {
        for &rank in ALL_RANKS.iter() {
            deck.push(Card::new(rank, suit));
        }
    }
    deck
}

/// カードデッキをシャッフルする関数だよ。
///
/// 乱数生成器は外から渡す。テストでは seed 固定の `StdRng` を渡せば毎回同じ並びになる！
pub fn shuffle_deck<R: Rng + ?Sized>(deck: &mut [Card], rng: &mut R) {
    deck.shuffle(rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Suit;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn deck_creation() {
        let deck = create_standard_deck();

        // 1. カードが52枚あるかチェック！
        assert_eq!(deck.len(), 52);

        // 2. 重複がないかチェック！
        let unique_cards: HashSet<Card> = deck.iter().copied().collect();
        assert_eq!(unique_cards.len(), 52, "デッキに重複したカードが見つかりました！");

        // 3. Joker が混ざってないかチェック！
        assert!(deck.iter().all(|card| card.suit != Suit::Joker));
    }

    #[test]
    fn shuffle_is_reproducible_with_seed() {
        let mut first = create_standard_deck();
        let mut second = create_standard_deck();
        shuffle_deck(&mut first, &mut StdRng::seed_from_u64(7));
        shuffle_deck(&mut second, &mut StdRng::seed_from_u64(7));

        assert_eq!(first, second, "同じ seed なら同じ並びのはず");
        assert_ne!(first, create_standard_deck(), "シャッフルしても順番が変わってない (稀に起こりうる)");
    }
}
