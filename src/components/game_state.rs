// src/components/game_state.rs

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
// serde を使う宣言！フロントエンドに状態をまるごと渡す時に使うよ！
use serde::{Deserialize, Serialize};

use crate::components::deck::{Deck, DeckType};
use crate::config::layout::{COLUMN_HEADERS, STACK_HEADERS};

/// GameState の中のデッキを指すID。ヘッダー文字列の代わりにインデックスで持つよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckId {
    Stock,
    Waste,
    /// 組札 0-3 (SA-SD)
    Stack(usize),
    /// 場札 0-6 (A-G)
    Column(usize),
}

/// 1回のゲームセッションの状態まるごと！
///
/// セッションごとに1つだけ作って、`&mut` で渡して書き換えていく。
/// グローバルな状態は持たないよ。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// 組札。キーは `STACK_HEADERS` ("SA" .. "SD")
    pub stack_piles: BTreeMap<String, Deck>,
    /// 場札。キーは `COLUMN_HEADERS` ("A" .. "G")
    pub columns: BTreeMap<String, Deck>,
    pub stock: Deck,
    pub waste: Deck,
    pub start_time: DateTime<Utc>,
    /// セッション終了時に呼び出し側がセットする
    pub end_time: Option<DateTime<Utc>>,
    pub time_score: i64,
    pub game_won: bool,
}

impl GameState {
    /// 全部空っぽの状態を作る。カードを配るのは `systems::deal_system::init` の仕事。
    pub fn new(start_time: DateTime<Utc>) -> Self {
        let stack_piles = STACK_HEADERS
            .iter()
            .map(|&header| (header.to_string(), Deck::new(DeckType::Stack)))
            .collect();
        let columns = COLUMN_HEADERS
            .iter()
            .map(|&header| (header.to_string(), Deck::new(DeckType::Column)))
            .collect();

        Self {
            stack_piles,
            columns,
            stock: Deck::new(DeckType::Stock),
            waste: Deck::new(DeckType::Waste),
            start_time,
            end_time: None,
            time_score: 0,
            game_won: false,
        }
    }

    pub fn stack_pile(&self, header: &str) -> Option<&Deck> {
        self.stack_piles.get(header)
    }

    pub fn column(&self, header: &str) -> Option<&Deck> {
        self.columns.get(header)
    }

    pub fn column_mut(&mut self, header: &str) -> Option<&mut Deck> {
        self.columns.get_mut(header)
    }

    pub fn deck(&self, id: DeckId) -> Option<&Deck> {
        match id {
            DeckId::Stock => Some(&self.stock),
            DeckId::Waste => Some(&self.waste),
            DeckId::Stack(index) => self.stack_piles.get(*STACK_HEADERS.get(index)?),
            DeckId::Column(index) => self.columns.get(*COLUMN_HEADERS.get(index)?),
        }
    }

    pub fn deck_mut(&mut self, id: DeckId) -> Option<&mut Deck> {
        match id {
            DeckId::Stock => Some(&mut self.stock),
            DeckId::Waste => Some(&mut self.waste),
            DeckId::Stack(index) => self.stack_piles.get_mut(*STACK_HEADERS.get(index)?),
            DeckId::Column(index) => self.columns.get_mut(*COLUMN_HEADERS.get(index)?),
        }
    }

    /// 全部のデッキのカード枚数の合計。いつでも 52 のはず！
    pub fn card_count(&self) -> usize {
        self.stack_piles.values().map(Deck::len).sum::<usize>()
            + self.columns.values().map(Deck::len).sum::<usize>()
            + self.stock.len()
            + self.waste.len()
    }

    /// 開始から終了までの経過秒数 (端数切り捨て)。終了時刻が無ければ None。
    pub fn elapsed_seconds(&self) -> Option<i64> {
        self.end_time.map(|end| (end - self.start_time).num_seconds())
    }

    /// 状態を JSON にする。描画側に渡す用だよ。
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// --- テスト ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Card, Rank, Suit};
    use chrono::Duration;

    #[test]
    fn new_state_has_all_headers() {
        let state = GameState::new(Utc::now());

        assert_eq!(state.stack_piles.len(), 4);
        assert_eq!(state.columns.len(), 7);
        for header in STACK_HEADERS {
            assert_eq!(state.stack_pile(header).map(Deck::deck_type), Some(DeckType::Stack));
        }
        for header in COLUMN_HEADERS {
            assert_eq!(state.column(header).map(Deck::deck_type), Some(DeckType::Column));
        }
        assert_eq!(state.card_count(), 0);
        assert!(!state.game_won);
    }

    #[test]
    fn deck_id_maps_to_headers() {
        let mut state = GameState::new(Utc::now());
        state.column_mut("C").unwrap().push(Card::new(Rank::King, Suit::Club));

        assert_eq!(state.deck(DeckId::Column(2)).unwrap().len(), 1);
        assert_eq!(state.deck(DeckId::Stack(3)).unwrap().deck_type(), DeckType::Stack);
        assert!(state.deck(DeckId::Column(7)).is_none());
        assert!(state.deck_mut(DeckId::Stack(4)).is_none());
    }

    #[test]
    fn elapsed_seconds_truncates() {
        let start = Utc::now();
        let mut state = GameState::new(start);
        assert_eq!(state.elapsed_seconds(), None);

        state.end_time = Some(start + Duration::milliseconds(41_900));
        assert_eq!(state.elapsed_seconds(), Some(41));
    }

    #[test]
    fn json_snapshot_round_trips() {
        let mut state = GameState::new(Utc::now());
        state.waste.push(Card::new(Rank::Queen, Suit::Heart));

        let json = state.to_json().unwrap();
        assert!(json.contains("\"game_won\":false"));
        let restored: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, state);
    }
}
