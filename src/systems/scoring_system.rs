// src/systems/scoring_system.rs
//! 経過時間からスコアを計算するよ。⏱️

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::components::game_state::GameState;
use crate::config::scoring::{
    BONUS_NUMERATOR, BONUS_THRESHOLD_SECS, PENALTY_INTERVAL_SECS, PENALTY_POINTS,
};

/// 開始から終了までの秒数。終了時刻が入ってなかったら今の時刻で代用する。
fn game_time_seconds(game_state: &GameState) -> i64 {
    game_state.elapsed_seconds().unwrap_or_else(|| {
        warn!("[Scoring] end_time is not set, using the current time");
        (Utc::now() - game_state.start_time).num_seconds()
    })
}

/// 時間ペナルティ: 10秒ごとに 2点マイナス。
pub fn apply_time_penalty(game_state: &mut GameState) {
    let seconds = game_time_seconds(game_state);
    let penalty = seconds / PENALTY_INTERVAL_SECS * PENALTY_POINTS;
    game_state.time_score -= penalty;
    info!(
        "[Scoring] Time penalty -{} after {}s, score is now {}",
        penalty, seconds, game_state.time_score
    );
}

/// クリアした時のボーナス: 30秒より長くかかったら 700000 / 秒数。
///
/// ボーナスはスコアに足すんじゃなくて、スコアを置き換える！
/// (先にかかったペナルティは消える)
pub fn apply_bonus_score(game_state: &mut GameState) {
    let seconds = game_time_seconds(game_state);
    let bonus = if seconds > BONUS_THRESHOLD_SECS {
        BONUS_NUMERATOR / seconds
    } else {
        0
    };
    game_state.time_score = bonus;
    info!("[Scoring] Bonus {} after {}s", bonus, seconds);
}

/// セッションを終わらせる。終了時刻を記録して、勝ってたらボーナス、負けてたらペナルティ。
pub fn finish_session(game_state: &mut GameState, now: DateTime<Utc>) {
    game_state.end_time = Some(now);
    if game_state.game_won {
        apply_bonus_score(game_state);
    } else {
        apply_time_penalty(game_state);
    }
}
