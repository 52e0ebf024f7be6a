//! 指し手入力のパース。
//!
//! 受理する文法は以下の 2 種類(いずれも筋、段とも 1 始まりの数字):
//!
//! * 盤上の駒の移動: 「移動元の筋、段、移動先の筋、段」の 4 桁。例: `5133`
//! * 駒打ち: 駒種 1 文字(p=歩, s=銀, g=金, b=角, r=飛)と移動先の筋、段。例: `s42`
//!
//! 成りフラグはここでは立てない。成るかどうかの確認はドライバ側の責務とする。

use anyhow::{bail, ensure, Context as _};

use crate::shogi::*;

/// 指し手文字列をパースする。
///
/// 構文と盤面範囲のみをチェックする。合法手かどうかの判定は行わない。
pub fn parse_move(s: &str) -> anyhow::Result<Move> {
    let s = s.trim();
    let chars: Vec<char> = s.chars().collect();

    match *chars.as_slice() {
        [sc, sr, dc, dr] => parse_move_walk(s, sc, sr, dc, dr),
        [pk, c, r] => parse_move_drop(pk, c, r),
        _ => bail!("指し手は 4 桁の数字または駒種 1 文字+2 桁の数字: {}", s),
    }
}

/// 盤上の駒の移動をパースする。例: `5133`
fn parse_move_walk(s: &str, sc: char, sr: char, dc: char, dr: char) -> anyhow::Result<Move> {
    let src_col = parse_col(sc).context("移動元の筋が不正")?;
    let src_row = parse_row(sr).context("移動元の段が不正")?;
    let dst_col = parse_col(dc).context("移動先の筋が不正")?;
    let dst_row = parse_row(dr).context("移動先の段が不正")?;

    let src = Square::from_col_row(src_col, src_row);
    let dst = Square::from_col_row(dst_col, dst_row);
    ensure!(src != dst, "移動元と移動先が同じ: {}", s);

    Ok(Move::new_walk(src, dst))
}

/// 駒打ちをパースする。例: `s42`
fn parse_move_drop(pk: char, c: char, r: char) -> anyhow::Result<Move> {
    let pk = parse_piece_kind(pk).context("駒種が不正")?;
    let col = parse_col(c).context("移動先の筋が不正")?;
    let row = parse_row(r).context("移動先の段が不正")?;

    Ok(Move::new_drop(pk, Square::from_col_row(col, row)))
}

fn parse_col(c: char) -> anyhow::Result<Col> {
    ensure!(('1'..='5').contains(&c), "筋は 1-5: {}", c);

    Ok(Col::from_inner(c as i32 - '1' as i32))
}

fn parse_row(c: char) -> anyhow::Result<Row> {
    ensure!(('1'..='5').contains(&c), "段は 1-5: {}", c);

    Ok(Row::from_inner(c as i32 - '1' as i32))
}

fn parse_piece_kind(c: char) -> anyhow::Result<PieceKind> {
    let pk = match c.to_ascii_lowercase() {
        'p' => PAWN,
        's' => SILVER,
        'g' => GOLD,
        'b' => BISHOP,
        'r' => ROOK,
        _ => bail!("駒種は p, s, g, b, r のいずれか: {}", c),
    };

    Ok(pk)
}
