#[allow(unused_imports)]
use pretty_assertions::{assert_eq, assert_ne};

use minishogi::*;

const SCORE_INF: i32 = 999999;

#[test]
fn test_depth_zero_returns_static_evaluation() {
    for pos in sample_positions() {
        let maximizing = pos.side_to_move() == SENTE;
        let result = search(&pos, 0, -SCORE_INF, SCORE_INF, maximizing);

        assert_eq!(result.score, evaluate(&pos));
        assert_eq!(result.best_move, None);
    }
}

#[test]
fn test_search_returns_legal_move() {
    for pos in sample_positions() {
        let mvs = generate_moves(&pos);
        let best = search_best_move(&pos, 2);

        match best {
            Some(mv) => assert!(mvs.contains(&mv), "{}", mv),
            None => assert!(mvs.is_empty() || pos.is_over()),
        }
    }
}

#[test]
fn test_alpha_beta_equals_plain_minimax() {
    // 枝刈りは探索量を減らすだけで、ミニマックス値そのものは変えない。
    for pos in sample_positions() {
        let maximizing = pos.side_to_move() == SENTE;

        for depth in 0..=3 {
            let pruned = search(&pos, depth, -SCORE_INF, SCORE_INF, maximizing);
            let plain = minimax_plain(&pos, depth, maximizing);

            assert_eq!(pruned.score, plain, "depth {}", depth);
        }
    }
}

#[test]
fn test_search_is_deterministic() {
    let pos = Position::startpos();

    assert_eq!(search_best_move(&pos, 3), search_best_move(&pos, 3));
}

#[test]
fn test_search_prefers_free_capture() {
    // 後手の飛がただで取れる局面。深さ 2 でも取りを選ぶ。
    let mut board = Board::empty();
    board[SQ_15] = S_KING;
    board[SQ_51] = G_KING;
    board[SQ_33] = S_GOLD;
    board[SQ_32] = G_ROOK;
    let pos = Position::new(SENTE, board, Hands::empty());

    let best = search_best_move(&pos, 2).unwrap();

    assert_eq!(best, Move::new_walk(SQ_33, SQ_32));
}

#[test]
fn test_search_avoids_losing_king() {
    // 先手玉に飛の当たりがかかっている。深さ 2 の先手は玉を逃がすか飛を除去する。
    let mut board = Board::empty();
    board[SQ_13] = S_KING;
    board[SQ_51] = G_KING;
    board[SQ_11] = G_ROOK;
    let pos = Position::new(SENTE, board, Hands::empty());

    let best = search_best_move(&pos, 2).unwrap();

    let mut pos_after = pos.clone();
    pos_after.do_move(best);

    // 直後に玉を取られる手は選ばれない。
    let result = search(&pos_after, 1, -SCORE_INF, SCORE_INF, false);
    let mut pos_reply = pos_after.clone();
    if let Some(reply) = result.best_move {
        pos_reply.do_move(reply);
    }
    assert!(pos_reply.has_king(SENTE), "{}", best);
}

#[test]
fn test_search_terminal_returns_no_move() {
    let mut board = Board::empty();
    board[SQ_15] = S_KING;
    let pos = Position::new(GOTE, board, Hands::empty());

    assert!(pos.is_over());
    assert_eq!(search_best_move(&pos, 3), None);
}

/// 枝刈りなしの素朴なミニマックス(検証用)。
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
            best = best.max(score);
        } else {
            best = best.min(score);
        }
    }

    best
}

/// テスト対象の局面群。初期局面と、駒取り、駒打ちが絡む中盤風の局面。
fn sample_positions() -> Vec<Position> {
    let mut positions = vec![Position::startpos()];

    {
        let mut board = Board::empty();
        board[SQ_15] = S_KING;
        board[SQ_51] = G_KING;
        board[SQ_33] = S_ROOK;
        board[SQ_13] = G_BISHOP;
        board[SQ_42] = G_PAWN;
        let mut hands = Hands::empty();
        hands[SENTE][PAWN] = 1;
        hands[GOTE][SILVER] = 1;
        positions.push(Position::new(SENTE, board, hands));
    }

    {
        let mut board = Board::empty();
        board[SQ_25] = S_KING;
        board[SQ_41] = G_KING;
        board[SQ_22] = S_PRO_PAWN;
        board[SQ_44] = G_DRAGON;
        let mut hands = Hands::empty();
        hands[GOTE][GOLD] = 1;
        positions.push(Position::new(GOTE, board, hands));
    }

    positions
}
