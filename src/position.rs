use crate::shogi::*;

/// 局面。
///
/// 盤面、両陣営の手駒、手番、手数のみを持つ。差分更新が必要になるほどの
/// 盤面サイズではないので、補助データ構造は一切持たない。
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    board: Board,
    hands: Hands,
    side_to_move: Side,
    ply: u32, // 常に 1 から始まるものとする。
}

impl Position {
    /// 手番、盤面、両陣営の手駒を指定して局面を作る。
    /// 合法性チェックは一切行わない。
    pub fn new(side_to_move: Side, board: Board, hands: Hands) -> Self {
        Self {
            board,
            hands,
            side_to_move,
            ply: 1,
        }
    }

    /// 平手初期局面を作る。
    pub fn startpos() -> Self {
        Self::new(SENTE, Board::startpos(), Hands::empty())
    }

    /// 手番を返す。
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// 手数を返す。初期局面の手数は 1。
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// 盤面を返す。
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 両陣営の手駒を返す。
    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    /// 指定した陣営の手駒を返す。
    pub fn hand(&self, side: Side) -> &Hand {
        &self.hands[side]
    }

    /// 指定した陣営の玉が盤上にあるかどうかを返す。
    pub fn has_king(&self, side: Side) -> bool {
        let king = Piece::new(side, KING);

        Square::iter().any(|sq| self.board[sq] == king)
    }

    /// 勝利が確定した陣営を返す。
    ///
    /// 敵玉を取った時点で勝ちとなる。詰み判定は行わない。
    /// 玉が双方とも盤上にある場合は `None` を返す。
    pub fn winner(&self) -> Option<Side> {
        match (self.has_king(SENTE), self.has_king(GOTE)) {
            (true, false) => Some(SENTE),
            (false, true) => Some(GOTE),
            _ => None,
        }
    }

    /// 対局が終了しているかどうかを返す。
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// 局面を 1 手進め、指し手の記録を返す。
    ///
    /// `mv` は有効かつ疑似合法でなければならない。
    /// 着手後、手番が相手側に移り、手数が 1 増える。
    pub fn do_move(&mut self, mv: Move) -> MoveRecord {
        debug_assert!(mv.is_valid());

        let record = if mv.is_drop() {
            self.do_move_drop(mv)
        } else {
            self.do_move_walk(mv)
        };

        self.side_to_move = self.side_to_move.inv();
        self.ply += 1;

        record
    }

    /// 盤上の駒を動かす指し手を実行する。
    fn do_move_walk(&mut self, mv: Move) -> MoveRecord {
        let us = self.side_to_move;
        let src = mv.src();
        let dst = mv.dst();

        let pc_src = self.board[src];
        debug_assert!(pc_src.is_piece());
        debug_assert_eq!(pc_src.side(), us);
        debug_assert!(!mv.is_promotion() || pc_src.is_promotable());

        // 駒取りなら取った駒を成らざる状態で手駒に加える。
        // 玉を取る指し手も許され、取った玉はそのまま手駒に数えられる。
        let pc_captured = self.board[dst];
        if pc_captured != NO_PIECE {
            debug_assert!(pc_captured.is_piece());
            debug_assert_eq!(pc_captured.side(), us.inv());

            self.hands[us][pc_captured.to_raw_kind()] += 1;
        }

        let pc_dst = if mv.is_promotion() {
            pc_src.to_promoted()
        } else {
            pc_src
        };

        self.board[src] = NO_PIECE;
        self.board[dst] = pc_dst;

        MoveRecord::from_move_walk(mv, pc_src, pc_captured)
    }

    /// 駒打ちの指し手を実行する。
    fn do_move_drop(&mut self, mv: Move) -> MoveRecord {
        let us = self.side_to_move;
        let pk = mv.dropped_piece_kind();
        let dst = mv.dst();

        debug_assert_eq!(self.board[dst], NO_PIECE);
        debug_assert!(self.hands[us][pk] > 0);

        self.hands[us][pk] -= 1;

        let pc = Piece::new(us, pk);
        self.board[dst] = pc;

        MoveRecord::from_move_drop(mv, pc)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "後手の持駒:{}", self.hands[GOTE])?;
        write!(f, "{}", self.board)?;
        writeln!(f, "先手の持駒:{}", self.hands[SENTE])?;
        writeln!(f, "手数={} {}番", self.ply, self.side_to_move)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(unused_imports)]
    use pretty_assertions::{assert_eq, assert_ne};

    #[test]
    fn test_startpos() {
        let pos = Position::startpos();

        assert_eq!(pos.side_to_move(), SENTE);
        assert_eq!(pos.ply(), 1);
        assert!(pos.hand(SENTE).is_empty());
        assert!(pos.hand(GOTE).is_empty());
        assert!(pos.has_king(SENTE));
        assert!(pos.has_king(GOTE));
        assert_eq!(pos.winner(), None);
        assert!(!pos.is_over());
    }

    #[test]
    fn test_do_move_walk() {
        let mut pos = Position::startpos();

        let record = pos.do_move(Move::new_walk(SQ_14, SQ_13));

        assert_eq!(record.piece_moved(), S_PAWN);
        assert!(!record.is_capture());
        assert_eq!(pos.board()[SQ_14], NO_PIECE);
        assert_eq!(pos.board()[SQ_13], S_PAWN);
        assert_eq!(pos.side_to_move(), GOTE);
        assert_eq!(pos.ply(), 2);
    }

    #[test]
    fn test_do_move_capture_demotes() {
        // ４四に後手の馬、５五に先手の飛を置き、馬で飛を取る。
        let mut board = Board::empty();
        board[SQ_15] = S_KING;
        board[SQ_51] = G_KING;
        board[SQ_44] = G_HORSE;
        board[SQ_55] = S_ROOK;
        let mut pos = Position::new(GOTE, board, Hands::empty());

        let record = pos.do_move(Move::new_walk(SQ_44, SQ_55));

        assert_eq!(record.piece_captured(), S_ROOK);
        assert!(record.is_capture());
        assert_eq!(pos.board()[SQ_55], G_HORSE);
        // 取った飛は成らざる状態で手駒に入る。
        assert_eq!(pos.hand(GOTE)[ROOK], 1);
    }

    #[test]
    fn test_do_move_drop() {
        let mut board = Board::empty();
        board[SQ_15] = S_KING;
        board[SQ_51] = G_KING;
        let mut hands = Hands::empty();
        hands[SENTE][GOLD] = 1;
        let mut pos = Position::new(SENTE, board, hands);

        let record = pos.do_move(Move::new_drop(GOLD, SQ_33));

        assert_eq!(record.piece_moved(), S_GOLD);
        assert!(record.is_drop());
        assert_eq!(pos.board()[SQ_33], S_GOLD);
        assert_eq!(pos.hand(SENTE)[GOLD], 0);
    }

    #[test]
    fn test_do_move_promotion() {
        let mut board = Board::empty();
        board[SQ_15] = S_KING;
        board[SQ_51] = G_KING;
        board[SQ_32] = S_PAWN;
        let mut pos = Position::new(SENTE, board, Hands::empty());

        pos.do_move(Move::new_walk_promotion(SQ_32, SQ_31));

        assert_eq!(pos.board()[SQ_31], S_PRO_PAWN);
    }

    #[test]
    fn test_winner_by_king_capture() {
        let mut board = Board::empty();
        board[SQ_15] = S_KING;
        board[SQ_33] = G_KING;
        board[SQ_22] = S_HORSE;
        let mut pos = Position::new(SENTE, board, Hands::empty());

        assert_eq!(pos.winner(), None);

        pos.do_move(Move::new_walk(SQ_22, SQ_33));

        assert_eq!(pos.winner(), Some(SENTE));
        assert!(pos.is_over());
        // 取った玉も手駒に数えられる。
        assert_eq!(pos.hand(SENTE)[KING], 1);
    }
}
