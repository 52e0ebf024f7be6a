//! 思考エンジン。固定深さのミニマックス探索にアルファベータ枝刈りを加えたもの。

use crate::evaluate::evaluate;
use crate::movegen::generate_moves;
use crate::mylog::*;
use crate::position::Position;
use crate::shogi::*;
use crate::util;

/// 既定の探索深さ。
pub const DEFAULT_DEPTH: u32 = 3;

/// 評価値の番兵。どの局面の静的評価値よりも絶対値が大きい。
const SCORE_INF: i32 = 999999;

/// 探索結果。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SearchResult {
    /// ミニマックス評価値。先手有利が正。
    pub score: i32,

    /// 最善手。末端ノード、終局局面、合法手なしの場合は `None`。
    pub best_move: Option<Move>,
}

impl SearchResult {
    fn leaf(score: i32) -> Self {
        Self {
            score,
            best_move: None,
        }
    }
}

/// 手番側の最善手を返す(ルート呼び出し)。思考ログを出力する。
///
/// 合法手が存在しない場合は `None` を返す。
pub fn search_best_move(pos: &Position, depth: u32) -> Option<Move> {
    log_think_start(pos.ply(), pos.side_to_move());
    log_position(pos);

    let maximizing = pos.side_to_move() == SENTE;
    let result = search(pos, depth, -SCORE_INF, SCORE_INF, maximizing);

    log_search_result(result.score, result.best_move);
    log_think_end();

    result.best_move
}

/// アルファベータ枝刈り付きミニマックス探索。
///
/// `maximizing` が真なら評価値を最大化、偽なら最小化する。
/// 手番が先手のノードでは `maximizing == true` で呼ぶこと(評価値は先手有利が正のため)。
///
/// 以下のいずれかの場合は現局面の静的評価値を返し、指し手は生成しない:
///
/// * `depth == 0`
/// * 勝敗が決している(玉が取られている)
/// * 合法手が存在しない
///
/// 候補手は局面の複製に適用して評価するため、呼び出し前後で `pos` は変化しない。
/// 同評価値の候補が複数ある場合、先に生成されたものが選ばれる。
pub fn search(pos: &Position, depth: u32, alpha: i32, beta: i32, maximizing: bool) -> SearchResult {
    if depth == 0 || pos.is_over() {
        return SearchResult::leaf(evaluate(pos));
    }

    let mvs = generate_moves(pos);
    if mvs.is_empty() {
        return SearchResult::leaf(evaluate(pos));
    }

    let mut alpha = alpha;
    let mut beta = beta;
    let mut best_move = None;

    if maximizing {
        let mut score_max = -SCORE_INF;

        for mv in mvs {
            let mut pos_child = pos.clone();
            pos_child.do_move(mv);
            let score = search(&pos_child, depth - 1, alpha, beta, false).score;

            if util::chmax(&mut score_max, score) {
                best_move = Some(mv);
            }

            util::chmax(&mut alpha, score);
            if beta <= alpha {
                break;
            }
        }

        SearchResult {
            score: score_max,
            best_move,
        }
    } else {
        let mut score_min = SCORE_INF;

        for mv in mvs {
            let mut pos_child = pos.clone();
            pos_child.do_move(mv);
            let score = search(&pos_child, depth - 1, alpha, beta, true).score;

            if util::chmin(&mut score_min, score) {
                best_move = Some(mv);
            }

            util::chmin(&mut beta, score);
            if beta <= alpha {
                break;
            }
        }

        SearchResult {
            score: score_min,
            best_move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(unused_imports)]
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn test_search_depth_zero() {
        // 深さ 0 では静的評価値のみを返し、指し手は生成しない。
        let pos = Position::startpos();

        let result = search(&pos, 0, -SCORE_INF, SCORE_INF, true);

        assert_eq!(result.score, evaluate(&pos));
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_search_terminal_position() {
        // 勝敗が決した局面では深さが残っていても指し手を生成しない。
        let mut board = Board::empty();
        board[SQ_15] = S_KING;
        board[SQ_33] = S_GOLD;
        let pos = Position::new(SENTE, board, Hands::empty());

        assert!(pos.is_over());

        let result = search(&pos, 3, -SCORE_INF, SCORE_INF, true);

        assert_eq!(result.score, evaluate(&pos));
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_search_finds_king_capture() {
        // 深さ 1 で敵玉を取る手を選ぶ。
        let mut board = Board::empty();
        board[SQ_15] = S_KING;
        board[SQ_33] = G_KING;
        board[SQ_31] = S_ROOK;
        let pos = Position::new(SENTE, board, Hands::empty());

        let result = search(&pos, 1, -SCORE_INF, SCORE_INF, true);

        assert_eq!(result.best_move, Some(Move::new_walk(SQ_31, SQ_33)));
    }

    #[test]
    fn test_search_own_king_captured() {
        // 手番側の玉が既に取られた局面でも静的評価値のみを返す。
        let mut board = Board::empty();
        board[SQ_51] = G_KING;
        let pos = Position::new(SENTE, board, Hands::empty());

        let result = search(&pos, 3, -SCORE_INF, SCORE_INF, true);

        assert_eq!(result.score, evaluate(&pos));
        assert_eq!(result.best_move, None);
    }

    #[test]
    fn test_search_deterministic() {
        let pos = Position::startpos();

        let r1 = search(&pos, 3, -SCORE_INF, SCORE_INF, true);
        let r2 = search(&pos, 3, -SCORE_INF, SCORE_INF, true);

        assert_eq!(r1, r2);
    }

    /// 枝刈りなしの素朴なミニマックス。枝刈りが結果を変えないことの検証用。
    fn minimax_plain(pos: &Position, depth: u32, maximizing: bool) -> i32 {
        if depth == 0 || pos.is_over() {
            return evaluate(pos);
        }

        let mvs = generate_moves(pos);
        if mvs.is_empty() {
            return evaluate(pos);
        }

        let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };

        for mv in mvs {
            let mut pos_child = pos.clone();
            pos_child.do_move(mv);
            let score = minimax_plain(&pos_child, depth - 1, !maximizing);

            if maximizing {
                util::chmax(&mut best, score);
            } else {
                util::chmin(&mut best, score);
            }
        }

        best
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax() {
        // アルファベータ枝刈りは探索量を減らすだけで、評価値は変えない。
        let pos = Position::startpos();

        for depth in 0..=3 {
            let pruned = search(&pos, depth, -SCORE_INF, SCORE_INF, true);
            let plain = minimax_plain(&pos, depth, true);
            assert_eq!(pruned.score, plain, "depth {}", depth);
        }
    }

    #[test]
    fn test_alpha_beta_matches_plain_minimax_midgame() {
        // 駒取りが発生する局面でも一致する。
        let mut board = Board::empty();
        board[SQ_15] = S_KING;
        board[SQ_51] = G_KING;
        board[SQ_33] = S_ROOK;
        board[SQ_13] = G_BISHOP;
        board[SQ_42] = G_PAWN;
        let mut hands = Hands::empty();
        hands[SENTE][PAWN] = 1;
        hands[GOTE][SILVER] = 1;

        for side in Side::iter() {
            let pos = Position::new(side, board.clone(), hands);
            let maximizing = side == SENTE;

            for depth in 0..=3 {
                let pruned = search(&pos, depth, -SCORE_INF, SCORE_INF, maximizing);
                let plain = minimax_plain(&pos, depth, maximizing);
                assert_eq!(pruned.score, plain, "side {:?}, depth {}", side, depth);
            }
        }
    }

    #[test]
    fn test_search_leaves_position_unchanged() {
        let pos = Position::startpos();
        let pos_orig = pos.clone();

        search(&pos, 2, -SCORE_INF, SCORE_INF, true);

        assert_eq!(pos, pos_orig);
    }
}
