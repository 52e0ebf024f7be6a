//! 指し手生成。
//!
//! 生成されるのは疑似合法手である。通常の将棋でいう自殺手や王手放置も含まれるが、
//! この 5五将棋は玉を取った時点で勝ちとするルールなので、これらも単に合法手として扱う。

use arrayvec::ArrayVec;

use crate::position::Position;
use crate::shogi::*;

/// 指し手配列。
///
/// 5x5 盤では駒打ちが最大 5 種 x 23 マス、盤上の駒の移動が成り変化を含めても
/// 駒あたり高々 24 通りなので、256 あれば十分足りる。
pub type MoveArray = ArrayVec<Move, 256>;

/// 指定した局面における手番側の全ての疑似合法手を生成する。
///
/// 盤上の駒の移動、駒打ちの順に生成する。同一の移動先について成りと不成の
/// 両方が可能な場合、成りを先に生成する。
///
/// 合法手が存在しない場合は空の配列を返す(エラーとはしない)。
pub fn generate_moves(pos: &Position) -> MoveArray {
    let mut mvs = MoveArray::new();

    generate_moves_walk(pos, &mut mvs);
    generate_moves_drop(pos, &mut mvs);

    mvs
}

/// 盤上の駒を動かす指し手を生成する。
#[inline]
fn generate_moves_walk(pos: &Position, mvs: &mut MoveArray) {
    let us = pos.side_to_move();

    for src in Square::iter() {
        let pc = pos.board()[src];
        if pc == NO_PIECE || pc.side() != us {
            continue;
        }

        let cap = MoveCapability::from_piece(pc);

        // 1 マスだけ進める方向。
        cap.steps.for_each(|dir| {
            if let Some(dst) = src.add_direction(dir) {
                if can_land(pos, us, dst) {
                    push_walk(us, pc, src, dst, mvs);
                }
            }
        });

        // 他の駒に当たるまで何マスでも進める方向。
        // 最初に当たった駒が敵駒ならそのマスまで、自駒なら手前までが移動先となる。
        cap.slides.for_each(|dir| {
            let mut cur = src;
            while let Some(dst) = cur.add_direction(dir) {
                let pc_dst = pos.board()[dst];
                if pc_dst != NO_PIECE && pc_dst.side() == us {
                    break;
                }

                push_walk(us, pc, src, dst, mvs);

                if pc_dst != NO_PIECE {
                    break;
                }
                cur = dst;
            }
        });
    }
}

/// 移動先が確定した駒について指し手を push する。
///
/// 成れる駒が敵陣に入る場合、成りと不成の両方を生成する(成りが先)。
/// 敵陣一段目への不成の歩も生成される点に注意(原作ルール通り)。
#[inline]
fn push_walk(us: Side, pc: Piece, src: Square, dst: Square, mvs: &mut MoveArray) {
    if pc.is_promotable() && dst.is_promotion_zone(us) {
        mvs.push(Move::new_walk_promotion(src, dst));
    }
    mvs.push(Move::new_walk(src, dst));
}

/// 指定したマスに手番側の駒が移動できるかどうかを返す(空白または敵駒なら可)。
#[inline]
fn can_land(pos: &Position, us: Side, dst: Square) -> bool {
    let pc = pos.board()[dst];

    pc == NO_PIECE || pc.side() != us
}

/// 駒打ちの指し手を生成する。
///
/// 手駒の駒種を `PieceKind` の昇順に(歩、銀、角、飛、金の順)、
/// 移動先をマスの昇順に走査する。
#[inline]
fn generate_moves_drop(pos: &Position, mvs: &mut MoveArray) {
    let us = pos.side_to_move();
    let hand = pos.hand(us);

    for pk in PieceKind::iter_hand() {
        if hand[pk] == 0 {
            continue;
        }

        for dst in Square::iter() {
            if pos.board()[dst] != NO_PIECE {
                continue;
            }

            // 歩は二歩と敵陣一段目(行き所のないマス)を弾く。
            if pk == PAWN {
                if has_own_pawn_in_col(pos, us, dst.col()) {
                    continue;
                }
                if dst.is_promotion_zone(us) {
                    continue;
                }
            }

            mvs.push(Move::new_drop(pk, dst));
        }
    }
}

/// 指定した筋に手番側の不成の歩があるかどうかを返す。
#[inline]
fn has_own_pawn_in_col(pos: &Position, us: Side, col: Col) -> bool {
    let pawn = Piece::new(us, PAWN);

    Row::iter().any(|row| pos.board()[Square::from_col_row(col, row)] == pawn)
}
