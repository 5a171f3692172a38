// src/config/scoring.rs
//! スコア計算の定数だよ。

/// 何秒ごとにペナルティを与えるか
pub const PENALTY_INTERVAL_SECS: i64 = 10;
/// 1回あたりのペナルティ点数
pub const PENALTY_POINTS: i64 = 2;
/// これより長くかかった時だけボーナスが出る (秒)
pub const BONUS_THRESHOLD_SECS: i64 = 30;
/// ボーナス = BONUS_NUMERATOR / 経過秒数
pub const BONUS_NUMERATOR: i64 = 700_000;
