// src/logic/rules/input.rs
//! プレイヤーの移動コマンドの構文チェックだよ。
//!
//! 入力はもうトークンに分割されて大文字になってる前提 (分割するのは UI 側の仕事)。
//! ここでは本物のデッキは見ない！ 文字列の形だけをチェックするよ。

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::components::game_state::DeckId;
use crate::config::layout::{
    COLUMN_HEADERS, MAX_ROW_DIGITS, MOVE_MARKER, STACK_HEADERS, STOCK_MARKER,
};
use crate::error::MoveError;

/// 移動元の場所。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceLocator {
    /// 山札の一番上
    Stock,
    /// 組札 (0-3) の一番上
    Stack(usize),
    /// 場札 `column` (0-6) の `row` 番目 (0 が一番下) から上ぜんぶ
    Column { column: usize, row: usize },
}

/// 移動先の場所。場札は列だけ指定する (カードは必ず一番上に積まれるので)。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DestinationLocator {
    /// 構文としては OK だけど、デッキレベルのチェックで必ず弾かれる
    Stock,
    Stack(usize),
    Column(usize),
}

/// 構文チェックを通った移動コマンド。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveCommand {
    pub source: SourceLocator,
    pub destination: DestinationLocator,
}

impl SourceLocator {
    pub fn deck_id(&self) -> DeckId {
        match *self {
            SourceLocator::Stock => DeckId::Stock,
            SourceLocator::Stack(index) => DeckId::Stack(index),
            SourceLocator::Column { column, .. } => DeckId::Column(column),
        }
    }
}

impl DestinationLocator {
    pub fn deck_id(&self) -> DeckId {
        match *self {
            DestinationLocator::Stock => DeckId::Stock,
            DestinationLocator::Stack(index) => DeckId::Stack(index),
            DestinationLocator::Column(index) => DeckId::Column(index),
        }
    }
}

/// 移動コマンド `M <source> <destination>` の構文をチェックする。
///
/// OK ならパースした `MoveCommand` を返すよ。NG ならヘルプ付きの `MoveError::Syntax`。
pub fn check_player_input<S: AsRef<str>>(input: &[S]) -> Result<MoveCommand, MoveError> {
    let Some((marker, source, destination)) = input.iter().map(AsRef::as_ref).collect_tuple()
    else {
        return Err(MoveError::syntax(format!(
            "A move consists of 3 parts, but {} were given",
            input.len()
        )));
    };

    if marker != MOVE_MARKER {
        return Err(MoveError::syntax(format!("Unknown command: {}", marker)));
    }
    let source = parse_source(source)
        .ok_or_else(|| MoveError::syntax(format!("Invalid move source: {}", source)))?;
    let destination = parse_destination(destination)
        .ok_or_else(|| MoveError::syntax(format!("Invalid move destination: {}", destination)))?;

    debug!("[Input] Parsed move {:?} -> {:?}", source, destination);
    Ok(MoveCommand { source, destination })
}

fn stack_index(token: &str) -> Option<usize> {
    STACK_HEADERS.iter().position(|&header| header == token)
}

fn column_index(token: &str) -> Option<usize> {
    COLUMN_HEADERS.iter().position(|&header| header == token)
}

fn parse_source(token: &str) -> Option<SourceLocator> {
    if token == STOCK_MARKER {
        return Some(SourceLocator::Stock);
    }
    if let Some(index) = stack_index(token) {
        return Some(SourceLocator::Stack(index));
    }

    // 列の座標: ヘッダー + 1〜2桁の数字 (例: "C4")
    let split = token.find(|c: char| c.is_ascii_digit())?;
    let (header, row) = token.split_at(split);
    let column = column_index(header)?;
    if row.len() > MAX_ROW_DIGITS || !row.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let row = row.parse().ok()?;
    Some(SourceLocator::Column { column, row })
}

fn parse_destination(token: &str) -> Option<DestinationLocator> {
    if token == STOCK_MARKER {
        return Some(DestinationLocator::Stock);
    }
    stack_index(token)
        .map(DestinationLocator::Stack)
        .or_else(|| column_index(token).map(DestinationLocator::Column))
}
