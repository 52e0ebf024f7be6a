//! 思考ログ出力。
//!
//! `log` ファサードに対して出力するだけなので、ロガーを設置するかどうかは
//! バイナリ側の判断となる(設置しなければ何も出力されない)。

use log::info;

use crate::position::Position;
use crate::shogi::*;

/// 思考開始ログを出力する。
pub fn log_think_start(ply: u32, side_to_move: Side) {
    info!(
        "# ------------------------------ {} 手目 {} 思考開始 ------------------------------",
        ply, side_to_move
    );
}

/// 思考対象の局面をログ出力する。
pub fn log_position(pos: &Position) {
    info!("{}", pos);
}

/// 探索結果をログ出力する。
pub fn log_search_result(score: i32, best_move: Option<Move>) {
    match best_move {
        Some(mv) => info!("探索結果: {} (評価値 {})", mv, score),
        None => info!("探索結果: 指し手なし (評価値 {})", score),
    }
}

/// 思考終了ログを出力する。
pub fn log_think_end() {
    info!("# ------------------------------ 思考終了 ------------------------------");
    info!("");
}
