// src/systems/deal_system.rs

use chrono::Utc;
use log::{debug, info};
use rand::Rng;

use crate::components::deck::{Deck, DeckType};
use crate::components::game_state::GameState;
use crate::config::layout::{COLUMN_COUNT, COLUMN_HEADERS};
use crate::logic::deck::{create_standard_deck, shuffle_deck};

/// 新しいゲームを始めるよ！ 乱数は `thread_rng` を使う。
pub fn init() -> GameState {
    init_with_rng(&mut rand::thread_rng())
}

/// ゲームの初期カード配置を実行する関数だよ！ 🎉
///
/// # 処理の流れ
/// 1. 52枚のデッキを作ってシャッフルする。
/// 2. 場札 (Column) `i` 列目に、デッキの先頭から `i + 1` 枚配る。
///    最初の `i` 枚は裏向き、最後に配った1枚だけ表向き。
/// 3. 残りの先頭1枚を山札 (Stock) に置く。
/// 4. 残り全部を捨て札 (Waste) に、順番そのままで置く。
/// 5. 開始時刻を記録する。
///
/// 組札 (Stack pile) 4つは空っぽのまま。
pub fn init_with_rng<R: Rng + ?Sized>(rng: &mut R) -> GameState {
    let mut base_deck = create_standard_deck();
    shuffle_deck(&mut base_deck, rng);
    debug!("[Deal] Shuffled {} cards", base_deck.len());

    let mut game_state = GameState::new(Utc::now());

    // `into_iter()` は base_deck の所有権を奪うから、ここから先は card_iterator だけを使う
    let mut card_iterator = base_deck.into_iter();

    for (column_index, &header) in COLUMN_HEADERS.iter().enumerate() {
        let cards: Vec<_> = card_iterator.by_ref().take(column_index + 1).collect();
        let column = Deck::with_cards(DeckType::Column, cards, column_index);
        game_state.columns.insert(header.to_string(), column);
    }

    if let Some(card) = card_iterator.next() {
        game_state.stock.push(card);
    }
    game_state.waste.extend(card_iterator.collect());

    // 1 + 2 + ... + 7 枚
    let dealt_to_columns = COLUMN_COUNT * (COLUMN_COUNT + 1) / 2;
    info!(
        "[Deal] New game dealt: columns {} card(s), stock {} card(s), waste {} card(s)",
        dealt_to_columns,
        game_state.stock.len(),
        game_state.waste.len()
    );
    game_state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::Card;
    use crate::config::layout::{COLUMN_COUNT, DECK_SIZE, STACK_HEADERS};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_initial_deal() {
        let state = init_with_rng(&mut StdRng::seed_from_u64(42));

        for (i, header) in COLUMN_HEADERS.iter().enumerate() {
            let column = state.column(header).expect("列が見つかりません！");
            assert_eq!(column.len(), i + 1, "列 {} の枚数が違います", header);
            assert_eq!(column.invisible_cards(), i, "列 {} の裏向き枚数が違います", header);
            assert_eq!(column.deck_type(), DeckType::Column);
        }
        for header in STACK_HEADERS {
            assert!(state.stack_pile(header).unwrap().is_empty(), "組札は空のはず");
        }
        assert_eq!(state.columns.len(), COLUMN_COUNT);
        let in_columns: usize = state.columns.values().map(|column| column.len()).sum();
        assert_eq!(in_columns, 28);
        assert_eq!(state.stock.len(), 1);
        assert_eq!(state.waste.len(), 23);
        assert_eq!(state.waste.invisible_cards(), 0, "捨て札は全部表向き");
        assert_eq!(state.card_count(), DECK_SIZE);
        assert_eq!(state.time_score, 0);
        assert!(state.end_time.is_none());
        assert!(!state.game_won);
    }

    #[test]
    fn every_card_is_dealt_exactly_once() {
        let state = init();

        let mut seen: HashSet<Card> = HashSet::new();
        let all_decks = state
            .columns
            .values()
            .chain(state.stack_piles.values())
            .chain([&state.stock, &state.waste]);
        for deck in all_decks {
            for &card in deck.cards() {
                assert!(seen.insert(card), "重複発見！ {:?}", card);
            }
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn same_seed_same_deal() {
        let first = init_with_rng(&mut StdRng::seed_from_u64(2024));
        let second = init_with_rng(&mut StdRng::seed_from_u64(2024));

        assert_eq!(first.columns, second.columns);
        assert_eq!(first.stock, second.stock);
        assert_eq!(first.waste, second.waste);
    }

    #[test]
    fn deal_order_follows_the_shuffled_deck() {
        let mut expected = create_standard_deck();
        shuffle_deck(&mut expected, &mut StdRng::seed_from_u64(3));
        let state = init_with_rng(&mut StdRng::seed_from_u64(3));

        // A列 = 1枚目, B列 = 2,3枚目, ... G列 = 22..28枚目, 山札 = 29枚目
        assert_eq!(state.column("A").unwrap().cards(), &expected[0..1]);
        assert_eq!(state.column("B").unwrap().cards(), &expected[1..3]);
        assert_eq!(state.column("G").unwrap().cards(), &expected[21..28]);
        assert_eq!(state.stock.cards(), &expected[28..29]);
        assert_eq!(state.waste.cards(), &expected[29..]);
    }
}
