//! perft: 指し手生成の検証用ノードカウンタ。

use crate::movegen::generate_moves;
use crate::position::Position;

/// 指定した深さの perft を行い、末端ノード数を返す。
///
/// 勝敗が決した局面(玉が取られた局面)はそれ以上展開せず、1 ノードと数える。
/// 探索と同じく局面の複製に指し手を適用するので、`pos` は変化しない。
pub fn perft(pos: &Position, depth: u32) -> u64 {
    if depth == 0 || pos.is_over() {
        return 1;
    }

    let mvs = generate_moves(pos);
    if mvs.is_empty() {
        return 1;
    }

    let mut count = 0;

    for mv in mvs {
        let mut pos_child = pos.clone();
        pos_child.do_move(mv);
        count += perft(&pos_child, depth - 1);
    }

    count
}
