// src/logic/mod.rs
//! ゲームのロジック (デッキ生成とルール判定) をまとめるよ。

pub mod deck;
pub mod rules;
