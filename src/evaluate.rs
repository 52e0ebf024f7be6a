//! 局面の静的評価。駒の価値のみを数える素朴な評価関数。

use crate::position::Position;
use crate::shogi::*;

/// 駒種の基本価値を返す。
pub const fn piece_price(pk: PieceKind) -> i32 {
    const TABLE: [i32; 15] = [
        0,     // NO_PIECE_KIND
        100,   // PAWN
        0,     // (2)
        0,     // (3)
        500,   // SILVER
        800,   // BISHOP
        900,   // ROOK
        600,   // GOLD
        10000, // KING
        600,   // PRO_PAWN
        0,     // (10)
        0,     // (11)
        600,   // PRO_SILVER
        1000,  // HORSE
        1100,  // DRAGON
    ];

    debug_assert!(pk.is_valid());

    TABLE[pk.inner() as usize]
}

/// 手駒としての駒種の価値を返す。基本価値の 8 割(整数演算)。
pub const fn hand_price(pk: PieceKind) -> i32 {
    piece_price(pk) * 8 / 10
}

/// 局面の静的評価値を返す。先手有利が正、後手有利が負。
///
/// 盤上の駒は基本価値、手駒は 8 割の価値で数える。
/// 局面を変更しない純粋な関数である。
pub fn evaluate(pos: &Position) -> i32 {
    let mut score = 0;

    for sq in Square::iter() {
        let pc = pos.board()[sq];
        if pc == NO_PIECE {
            continue;
        }

        if pc.side() == SENTE {
            score += piece_price(pc.kind());
        } else {
            score -= piece_price(pc.kind());
        }
    }

    // 玉を取る指し手を許しているため、手駒には玉も含まれうる。
    for pk in Hand::PKS {
        score += (pos.hand(SENTE)[pk] as i32) * hand_price(pk);
        score -= (pos.hand(GOTE)[pk] as i32) * hand_price(pk);
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(unused_imports)]
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn test_piece_price() {
        assert_eq!(piece_price(PAWN), 100);
        assert_eq!(piece_price(SILVER), 500);
        assert_eq!(piece_price(GOLD), 600);
        assert_eq!(piece_price(BISHOP), 800);
        assert_eq!(piece_price(ROOK), 900);
        assert_eq!(piece_price(KING), 10000);
        assert_eq!(piece_price(PRO_PAWN), 600);
        assert_eq!(piece_price(PRO_SILVER), 600);
        assert_eq!(piece_price(HORSE), 1000);
        assert_eq!(piece_price(DRAGON), 1100);
    }

    #[test]
    fn test_hand_price() {
        assert_eq!(hand_price(PAWN), 80);
        assert_eq!(hand_price(ROOK), 720);
    }

    #[test]
    fn test_evaluate_startpos() {
        // 初期配置は点対称なので評価値は 0。
        let pos = Position::startpos();

        assert_eq!(evaluate(&pos), 0);
    }

    #[test]
    fn test_evaluate_board_material() {
        let mut board = Board::empty();
        board[SQ_15] = S_KING;
        board[SQ_51] = G_KING;
        board[SQ_33] = S_ROOK;
        let pos = Position::new(SENTE, board, Hands::empty());

        assert_eq!(evaluate(&pos), 900);
    }

    #[test]
    fn test_evaluate_hand_discount() {
        // 手駒は盤上より価値が低い(8 割)。
        let mut board = Board::empty();
        board[SQ_15] = S_KING;
        board[SQ_51] = G_KING;
        let mut hands = Hands::empty();
        hands[SENTE][ROOK] = 1;
        hands[GOTE][PAWN] = 2;
        let pos = Position::new(SENTE, board, hands);

        assert_eq!(evaluate(&pos), 720 - 160);
    }

    #[test]
    fn test_evaluate_capture_swing() {
        // 駒取りの前後で評価値が動くことを確認する。
        let mut board = Board::empty();
        board[SQ_15] = S_KING;
        board[SQ_51] = G_KING;
        board[SQ_33] = S_ROOK;
        board[SQ_31] = G_GOLD;
        let mut pos = Position::new(SENTE, board, Hands::empty());

        assert_eq!(evaluate(&pos), 900 - 600);

        // 飛が金を取って成る。盤上の金(-600)が消え、手駒の金(+480)と龍(+1100)を得る。
        pos.do_move(Move::new_walk_promotion(SQ_33, SQ_31));

        assert_eq!(evaluate(&pos), 1100 + 480);
    }
}
