//! 5五将棋の基本要素たち。
//!
//! 駒などは enum ではなく、いわゆる newtype で表現する。
//! 成駒を容易に求められるように駒の内部値を割り当てたりするので、
//! enum だと内部値との相互変換が面倒だし、諸々の最適化がうまくかかるかどうかも怪しいため。
//!
//! 盤面は 5x5 で、香と桂は存在しない。駒種の内部値は本将棋用の割り当てを踏襲するため、
//! 香、桂に相当する 2, 3, 10, 11 は欠番となる。
//!
//! 筋、段、マスの内部値は以下のように割り当てている:
//!
//! * 筋は１筋, ２筋, ..., ５筋の順。指し手入力の数字と一致させるため、筋は盤面の左から数える。
//! * 段は一段目, 二段目, ..., 五段目の順(上から)。
//! * マスは１一, １二, ..., ５五の順。

use std::iter::FusedIterator;

/// 陣営。
///
/// 先手が `SENTE`、後手が `GOTE`。先手は盤面下側に陣取り、上へ向かって進む。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Side(u32);

pub const SENTE: Side = Side(0);
pub const GOTE: Side = Side(1);

impl Side {
    /// 有効値かどうかを返す。
    pub const fn is_valid(self) -> bool {
        self.0 == SENTE.0 || self.0 == GOTE.0
    }

    /// 敵陣営を返す。
    pub const fn inv(self) -> Side {
        Self(self.0 ^ 1)
    }

    /// 陣営を昇順に列挙する。(`SENTE`、`GOTE` の順)
    pub fn iter(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [SENTE, GOTE].into_iter()
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> u32 {
        self.0
    }
}

impl From<Side> for u32 {
    fn from(side: Side) -> Self {
        side.0
    }
}

impl From<Side> for usize {
    fn from(side: Side) -> Self {
        debug_assert!(side.is_valid());

        side.0 as Self
    }
}

impl std::fmt::Debug for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            SENTE => write!(f, "SENTE"),
            GOTE => write!(f, "GOTE"),
            _ => write!(f, "Side({})", self.0),
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            SENTE => write!(f, "先手"),
            GOTE => write!(f, "後手"),
            side => write!(f, "無効な陣営({})", side.0),
        }
    }
}

/// 盤面の筋。たとえば `COL_3` は３筋。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Col(i32);

pub const COL_1: Col = Col(0);
pub const COL_2: Col = Col(1);
pub const COL_3: Col = Col(2);
pub const COL_4: Col = Col(3);
pub const COL_5: Col = Col(4);

impl Col {
    /// 内部値を指定して筋を作る。盤面外の値を渡してはならない。
    pub const fn from_inner(inner: i32) -> Self {
        let this = Self(inner);
        debug_assert!(this.is_on_board());

        this
    }

    /// 筋が盤面内かどうかを返す。
    pub const fn is_on_board(self) -> bool {
        COL_1.0 <= self.0 && self.0 <= COL_5.0
    }

    /// 全ての筋を昇順に列挙する。(`COL_1`, `COL_2`, ..., `COL_5` の順)
    pub fn iter(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [COL_1, COL_2, COL_3, COL_4, COL_5].into_iter()
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> i32 {
        self.0
    }
}

impl std::ops::Sub<Self> for Col {
    type Output = i32;

    fn sub(self, rhs: Self) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::Add<i32> for Col {
    type Output = Col;

    fn add(self, rhs: i32) -> Col {
        Col(self.0 + rhs)
    }
}

impl std::ops::AddAssign<i32> for Col {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub<i32> for Col {
    type Output = Col;

    fn sub(self, rhs: i32) -> Col {
        Col(self.0 - rhs)
    }
}

impl std::ops::SubAssign<i32> for Col {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

impl From<Col> for i32 {
    fn from(col: Col) -> Self {
        col.0
    }
}

impl From<Col> for usize {
    fn from(col: Col) -> Self {
        debug_assert!(col.is_on_board());

        col.0 as Self
    }
}

impl std::fmt::Debug for Col {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            COL_1 => write!(f, "COL_1"),
            COL_2 => write!(f, "COL_2"),
            COL_3 => write!(f, "COL_3"),
            COL_4 => write!(f, "COL_4"),
            COL_5 => write!(f, "COL_5"),
            _ => write!(f, "Col({})", self.0),
        }
    }
}

impl std::fmt::Display for Col {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            COL_1 => write!(f, "１"),
            COL_2 => write!(f, "２"),
            COL_3 => write!(f, "３"),
            COL_4 => write!(f, "４"),
            COL_5 => write!(f, "５"),
            col => write!(f, "無効な筋({})", col.0),
        }
    }
}

/// 盤面の段。たとえば `ROW_3` は三段目。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Row(i32);

pub const ROW_1: Row = Row(0);
pub const ROW_2: Row = Row(1);
pub const ROW_3: Row = Row(2);
pub const ROW_4: Row = Row(3);
pub const ROW_5: Row = Row(4);

impl Row {
    /// 内部値を指定して段を作る。盤面外の値を渡してはならない。
    pub const fn from_inner(inner: i32) -> Self {
        let this = Self(inner);
        debug_assert!(this.is_on_board());

        this
    }

    /// 段が盤面内かどうかを返す。
    pub const fn is_on_board(self) -> bool {
        ROW_1.0 <= self.0 && self.0 <= ROW_5.0
    }

    /// 段が指定した陣営にとって敵陣かどうかを返す。
    ///
    /// 5五将棋の敵陣は各陣営とも最奥の一段のみ。
    pub const fn is_promotion_zone(self, side: Side) -> bool {
        if side.0 == SENTE.0 {
            self.0 == ROW_1.0
        } else {
            self.0 == ROW_5.0
        }
    }

    /// 全ての段を昇順に列挙する。(`ROW_1`, `ROW_2`, ..., `ROW_5` の順)
    pub fn iter(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [ROW_1, ROW_2, ROW_3, ROW_4, ROW_5].into_iter()
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> i32 {
        self.0
    }
}

impl std::ops::Sub<Self> for Row {
    type Output = i32;

    fn sub(self, rhs: Self) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::Add<i32> for Row {
    type Output = Row;

    fn add(self, rhs: i32) -> Row {
        Row(self.0 + rhs)
    }
}

impl std::ops::AddAssign<i32> for Row {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub<i32> for Row {
    type Output = Row;

    fn sub(self, rhs: i32) -> Row {
        Row(self.0 - rhs)
    }
}

impl std::ops::SubAssign<i32> for Row {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

impl From<Row> for i32 {
    fn from(row: Row) -> Self {
        row.0
    }
}

impl From<Row> for usize {
    fn from(row: Row) -> Self {
        debug_assert!(row.is_on_board());

        row.0 as Self
    }
}

impl std::fmt::Debug for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ROW_1 => write!(f, "ROW_1"),
            ROW_2 => write!(f, "ROW_2"),
            ROW_3 => write!(f, "ROW_3"),
            ROW_4 => write!(f, "ROW_4"),
            ROW_5 => write!(f, "ROW_5"),
            _ => write!(f, "Row({})", self.0),
        }
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            ROW_1 => write!(f, "一"),
            ROW_2 => write!(f, "二"),
            ROW_3 => write!(f, "三"),
            ROW_4 => write!(f, "四"),
            ROW_5 => write!(f, "五"),
            row => write!(f, "無効な段({})", row.0),
        }
    }
}

/// 盤面のマス。たとえば `SQ_42` は４二。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Square(i32);

pub const SQ_11: Square = Square::from_col_row(COL_1, ROW_1);
pub const SQ_12: Square = Square::from_col_row(COL_1, ROW_2);
pub const SQ_13: Square = Square::from_col_row(COL_1, ROW_3);
pub const SQ_14: Square = Square::from_col_row(COL_1, ROW_4);
pub const SQ_15: Square = Square::from_col_row(COL_1, ROW_5);
pub const SQ_21: Square = Square::from_col_row(COL_2, ROW_1);
pub const SQ_22: Square = Square::from_col_row(COL_2, ROW_2);
pub const SQ_23: Square = Square::from_col_row(COL_2, ROW_3);
pub const SQ_24: Square = Square::from_col_row(COL_2, ROW_4);
pub const SQ_25: Square = Square::from_col_row(COL_2, ROW_5);
pub const SQ_31: Square = Square::from_col_row(COL_3, ROW_1);
pub const SQ_32: Square = Square::from_col_row(COL_3, ROW_2);
pub const SQ_33: Square = Square::from_col_row(COL_3, ROW_3);
pub const SQ_34: Square = Square::from_col_row(COL_3, ROW_4);
pub const SQ_35: Square = Square::from_col_row(COL_3, ROW_5);
pub const SQ_41: Square = Square::from_col_row(COL_4, ROW_1);
pub const SQ_42: Square = Square::from_col_row(COL_4, ROW_2);
pub const SQ_43: Square = Square::from_col_row(COL_4, ROW_3);
pub const SQ_44: Square = Square::from_col_row(COL_4, ROW_4);
pub const SQ_45: Square = Square::from_col_row(COL_4, ROW_5);
pub const SQ_51: Square = Square::from_col_row(COL_5, ROW_1);
pub const SQ_52: Square = Square::from_col_row(COL_5, ROW_2);
pub const SQ_53: Square = Square::from_col_row(COL_5, ROW_3);
pub const SQ_54: Square = Square::from_col_row(COL_5, ROW_4);
pub const SQ_55: Square = Square::from_col_row(COL_5, ROW_5);

impl Square {
    /// 内部値を指定してマスを作る。盤面外の値を渡してはならない。
    pub const fn from_inner(inner: i32) -> Self {
        let this = Self(inner);
        debug_assert!(this.is_on_board());

        this
    }

    /// 筋と段を指定してマスを作る。盤面外の筋、段を渡してはならない。
    pub const fn from_col_row(col: Col, row: Row) -> Self {
        debug_assert!(col.is_on_board());
        debug_assert!(row.is_on_board());

        Self(5 * col.0 + row.0)
    }

    /// マスが盤面内かどうかを返す。
    pub const fn is_on_board(self) -> bool {
        SQ_11.0 <= self.0 && self.0 <= SQ_55.0
    }

    /// マスの属する筋を返す。
    pub const fn col(self) -> Col {
        #[rustfmt::skip]
        const TABLE: [Col; 25] = [
            COL_1, COL_1, COL_1, COL_1, COL_1,
            COL_2, COL_2, COL_2, COL_2, COL_2,
            COL_3, COL_3, COL_3, COL_3, COL_3,
            COL_4, COL_4, COL_4, COL_4, COL_4,
            COL_5, COL_5, COL_5, COL_5, COL_5,
        ];

        debug_assert!(self.is_on_board());

        TABLE[self.0 as usize]
    }

    /// マスの属する段を返す。
    pub const fn row(self) -> Row {
        #[rustfmt::skip]
        const TABLE: [Row; 25] = [
            ROW_1, ROW_2, ROW_3, ROW_4, ROW_5,
            ROW_1, ROW_2, ROW_3, ROW_4, ROW_5,
            ROW_1, ROW_2, ROW_3, ROW_4, ROW_5,
            ROW_1, ROW_2, ROW_3, ROW_4, ROW_5,
            ROW_1, ROW_2, ROW_3, ROW_4, ROW_5,
        ];

        debug_assert!(self.is_on_board());

        TABLE[self.0 as usize]
    }

    /// マスが指定した陣営にとって敵陣かどうかを返す。
    pub const fn is_promotion_zone(self, side: Side) -> bool {
        self.row().is_promotion_zone(side)
    }

    /// 指定した方向に 1 マス進んだマスを返す。盤面外に出る場合は `None` を返す。
    pub fn add_direction(self, dir: Direction) -> Option<Square> {
        let col = self.col() + dir.col_delta();
        let row = self.row() + dir.row_delta();

        (col.is_on_board() && row.is_on_board()).then(|| Self::from_col_row(col, row))
    }

    /// 全マスを昇順に列挙する。(`SQ_11`, `SQ_12`, ..., `SQ_55` の順)
    pub fn iter(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        // ExactSizeIterator にするため、配列をベタ書きする。
        #[rustfmt::skip]
        const SQS: [Square; 25] = [
            SQ_11, SQ_12, SQ_13, SQ_14, SQ_15,
            SQ_21, SQ_22, SQ_23, SQ_24, SQ_25,
            SQ_31, SQ_32, SQ_33, SQ_34, SQ_35,
            SQ_41, SQ_42, SQ_43, SQ_44, SQ_45,
            SQ_51, SQ_52, SQ_53, SQ_54, SQ_55,
        ];

        SQS.into_iter()
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> i32 {
        self.0
    }
}

impl std::ops::Sub<Self> for Square {
    type Output = i32;

    fn sub(self, rhs: Self) -> i32 {
        self.0 - rhs.0
    }
}

impl From<Square> for i32 {
    fn from(sq: Square) -> Self {
        sq.0
    }
}

impl From<Square> for u32 {
    fn from(sq: Square) -> Self {
        debug_assert!(sq.is_on_board());

        sq.0 as Self
    }
}

impl From<Square> for usize {
    fn from(sq: Square) -> Self {
        debug_assert!(sq.is_on_board());

        sq.0 as Self
    }
}

impl std::fmt::Debug for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            SQ_11 => write!(f, "SQ_11"),
            SQ_12 => write!(f, "SQ_12"),
            SQ_13 => write!(f, "SQ_13"),
            SQ_14 => write!(f, "SQ_14"),
            SQ_15 => write!(f, "SQ_15"),
            SQ_21 => write!(f, "SQ_21"),
            SQ_22 => write!(f, "SQ_22"),
            SQ_23 => write!(f, "SQ_23"),
            SQ_24 => write!(f, "SQ_24"),
            SQ_25 => write!(f, "SQ_25"),
            SQ_31 => write!(f, "SQ_31"),
            SQ_32 => write!(f, "SQ_32"),
            SQ_33 => write!(f, "SQ_33"),
            SQ_34 => write!(f, "SQ_34"),
            SQ_35 => write!(f, "SQ_35"),
            SQ_41 => write!(f, "SQ_41"),
            SQ_42 => write!(f, "SQ_42"),
            SQ_43 => write!(f, "SQ_43"),
            SQ_44 => write!(f, "SQ_44"),
            SQ_45 => write!(f, "SQ_45"),
            SQ_51 => write!(f, "SQ_51"),
            SQ_52 => write!(f, "SQ_52"),
            SQ_53 => write!(f, "SQ_53"),
            SQ_54 => write!(f, "SQ_54"),
            SQ_55 => write!(f, "SQ_55"),
            _ => write!(f, "Square({})", self.0),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if !self.is_on_board() {
            return write!(f, "無効なマス({})", self.0);
        }

        write!(f, "{}{}", self.col(), self.row())
    }
}

/// 方向。盤面を正面から見たときの向きで呼ぶ(`U` が上、つまり後手陣方向)。
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Direction(u32);

impl Direction {
    pub const RU: Direction = Direction(0);
    pub const R: Direction = Direction(1);
    pub const RD: Direction = Direction(2);
    pub const U: Direction = Direction(3);
    pub const D: Direction = Direction(4);
    pub const LU: Direction = Direction(5);
    pub const L: Direction = Direction(6);
    pub const LD: Direction = Direction(7);

    /// 内部値を指定して方向を作る。無効値を渡してはならない。
    pub const fn from_inner(inner: u32) -> Self {
        let this = Self(inner);
        debug_assert!(this.is_valid());

        this
    }

    /// 有効値かどうかを返す。
    pub const fn is_valid(self) -> bool {
        Self::RU.0 <= self.0 && self.0 <= Self::LD.0
    }

    /// 方向を筋の差分値に変換する。右向きが正。
    pub const fn col_delta(self) -> i32 {
        const TABLE: [i32; 8] = [1, 1, 1, 0, 0, -1, -1, -1];

        TABLE[self.0 as usize]
    }

    /// 方向を段の差分値に変換する。下向きが正。
    pub const fn row_delta(self) -> i32 {
        const TABLE: [i32; 8] = [-1, 0, 1, -1, 1, -1, 0, 1];

        TABLE[self.0 as usize]
    }
}

impl From<Direction> for u32 {
    fn from(dir: Direction) -> Self {
        dir.0
    }
}

impl From<Direction> for usize {
    fn from(dir: Direction) -> Self {
        debug_assert!(dir.is_valid());

        dir.0 as Self
    }
}

impl std::fmt::Debug for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            Self::RU => write!(f, "Direction::RU"),
            Self::R => write!(f, "Direction::R"),
            Self::RD => write!(f, "Direction::RD"),
            Self::U => write!(f, "Direction::U"),
            Self::D => write!(f, "Direction::D"),
            Self::LU => write!(f, "Direction::LU"),
            Self::L => write!(f, "Direction::L"),
            Self::LD => write!(f, "Direction::LD"),
            _ => write!(f, "Direction({})", self.0),
        }
    }
}

/// 8 方向の集合。
///
/// * bit0: RU
/// * bit1: R
/// * bit2: RD
/// * bit3: U
/// * bit4: D
/// * bit5: LU
/// * bit6: L
/// * bit7: LD
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const RU: DirectionSet = DirectionSet(1 << 0);
    pub const R: DirectionSet = DirectionSet(1 << 1);
    pub const RD: DirectionSet = DirectionSet(1 << 2);
    pub const U: DirectionSet = DirectionSet(1 << 3);
    pub const D: DirectionSet = DirectionSet(1 << 4);
    pub const LU: DirectionSet = DirectionSet(1 << 5);
    pub const L: DirectionSet = DirectionSet(1 << 6);
    pub const LD: DirectionSet = DirectionSet(1 << 7);

    /// 空の(どの方向も含まない) `DirectionSet` を作る。
    pub const fn empty() -> Self {
        Self(0)
    }

    /// 全ての方向を含む `DirectionSet` を作る。
    pub const fn all() -> Self {
        Self(0xFF)
    }

    /// 単一の方向のみを含む `DirectionSet` を返す。(`const` 文脈で必要)
    const fn from_direction(dir: Direction) -> Self {
        Self(1 << dir.0)
    }

    /// `self` が空かどうかを返す。
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// `self` と `other` の共通部分が空かどうかを返す。
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.and(other).is_empty()
    }

    /// 指定した方向を含むかどうかを返す。
    pub const fn contains(self, dir: Direction) -> bool {
        (self.0 & (1 << dir.0)) != 0
    }

    /// 含まれる方向のうち、内部値が最小のものを得る。`self` は空であってはならない。
    pub fn get_least(self) -> Direction {
        debug_assert!(!self.is_empty());

        Direction(self.0.trailing_zeros())
    }

    /// 含まれる方向のうち、内部値が最小のものを pop する。`self` は空であってはならない。
    pub fn pop_least(&mut self) -> Direction {
        let dir = self.get_least();
        self.0 &= self.0 - 1;

        dir
    }

    /// 含まれる全ての方向について `f` を呼ぶ。
    pub fn for_each<F>(self, mut f: F)
    where
        F: FnMut(Direction),
    {
        let mut dirs = self;
        while !dirs.is_empty() {
            let dir = dirs.pop_least();
            f(dir);
        }
    }

    /// NOT 演算。`const` 文脈で使えるのが `!` 演算子との違い。
    pub const fn not(self) -> Self {
        Self(!self.0)
    }

    /// AND 演算。`const` 文脈で使えるのが `&` 演算子との違い。
    pub const fn and(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }

    /// OR 演算。`const` 文脈で使えるのが '|' 演算子との違い。
    pub const fn or(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> u8 {
        self.0
    }
}

impl From<Direction> for DirectionSet {
    /// 単一の方向のみを含む `DirectionSet` を返す。
    fn from(dir: Direction) -> Self {
        Self::from_direction(dir)
    }
}

impl std::ops::Not for DirectionSet {
    type Output = Self;

    fn not(self) -> Self {
        self.not()
    }
}

impl std::ops::BitAnd for DirectionSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.and(rhs)
    }
}

impl std::ops::BitAndAssign for DirectionSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl std::ops::BitOr for DirectionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.or(rhs)
    }
}

impl std::ops::BitOrAssign for DirectionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl From<DirectionSet> for u8 {
    fn from(dirs: DirectionSet) -> Self {
        dirs.0
    }
}

impl std::fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        const TABLE: [(DirectionSet, &str); 8] = [
            (DirectionSet::RU, "DirectionSet::RU"),
            (DirectionSet::R, "DirectionSet::R"),
            (DirectionSet::RD, "DirectionSet::RD"),
            (DirectionSet::U, "DirectionSet::U"),
            (DirectionSet::D, "DirectionSet::D"),
            (DirectionSet::LU, "DirectionSet::LU"),
            (DirectionSet::L, "DirectionSet::L"),
            (DirectionSet::LD, "DirectionSet::LD"),
        ];

        if self.is_empty() {
            return write!(f, "DirectionSet({})", self.0);
        }

        let mut first = true;
        let mut write_name = move |f: &mut std::fmt::Formatter, name: &str| -> std::fmt::Result {
            if !first {
                f.write_str(" | ")?;
            }
            f.write_str(name)?;
            first = false;
            Ok(())
        };

        for (dirs, name) in TABLE {
            if !self.is_disjoint(dirs) {
                write_name(f, name)?;
            }
        }

        Ok(())
    }
}

/// 駒種(陣営の区別なし)。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct PieceKind(u32);

// PieceKind の内部値はやねうら王を踏襲している。
// 値 (1 << 3) を OR することで成駒になる。香、桂の値は欠番。

pub const NO_PIECE_KIND: PieceKind = PieceKind(0);
pub const PAWN: PieceKind = PieceKind(1);
pub const SILVER: PieceKind = PieceKind(4);
pub const BISHOP: PieceKind = PieceKind(5);
pub const ROOK: PieceKind = PieceKind(6);
pub const GOLD: PieceKind = PieceKind(7);
pub const KING: PieceKind = PieceKind(8);
pub const PRO_PAWN: PieceKind = PieceKind(9);
pub const PRO_SILVER: PieceKind = PieceKind(12);
pub const HORSE: PieceKind = PieceKind(13);
pub const DRAGON: PieceKind = PieceKind(14);

impl PieceKind {
    /// 有効値かどうかを返す。`NO_PIECE_KIND` も有効とみなす。
    pub const fn is_valid(self) -> bool {
        self.0 == NO_PIECE_KIND.0 || self.is_piece()
    }

    /// 有効値かつ実際の駒かどうかを返す。`NO_PIECE_KIND` は実際の駒ではない。
    pub const fn is_piece(self) -> bool {
        // 香、桂が欠番のため値域が途切れることに注意。
        self.0 == PAWN.0
            || (SILVER.0 <= self.0 && self.0 <= KING.0)
            || self.0 == PRO_PAWN.0
            || (PRO_SILVER.0 <= self.0 && self.0 <= DRAGON.0)
    }

    /// 成れる駒種かどうかを返す。
    pub const fn is_promotable(self) -> bool {
        self.0 == PAWN.0 || (SILVER.0 <= self.0 && self.0 <= ROOK.0)
    }

    /// 成駒かどうかを返す。
    pub const fn is_promoted(self) -> bool {
        self.0 == PRO_PAWN.0 || (PRO_SILVER.0 <= self.0 && self.0 <= DRAGON.0)
    }

    /// 手駒となりうる駒種かどうかを返す。
    pub const fn is_hand(self) -> bool {
        self.0 == PAWN.0 || (SILVER.0 <= self.0 && self.0 <= GOLD.0)
    }

    /// 成った駒種を返す。`self` は成れる駒種でなければならない。
    pub const fn to_promoted(self) -> Self {
        debug_assert!(self.is_promotable());

        Self(self.0 | (1 << 3))
    }

    /// 成っていない駒種を返す。`self` は玉であってはならない。
    pub const fn to_raw(self) -> Self {
        debug_assert!(self.0 != KING.0);

        Self(self.0 & 7)
    }

    /// 実際の駒である駒種を昇順に列挙する。
    pub fn iter_piece(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [
            PAWN, SILVER, BISHOP, ROOK, GOLD, KING, PRO_PAWN, PRO_SILVER, HORSE, DRAGON,
        ]
        .into_iter()
    }

    /// 手駒となりうる駒種を昇順に列挙する。
    pub fn iter_hand(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [PAWN, SILVER, BISHOP, ROOK, GOLD].into_iter()
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> u32 {
        self.0
    }
}

impl From<PieceKind> for u32 {
    fn from(pk: PieceKind) -> Self {
        pk.0
    }
}

impl From<PieceKind> for usize {
    fn from(pk: PieceKind) -> Self {
        debug_assert!(pk.is_valid());

        pk.0 as Self
    }
}

impl std::fmt::Debug for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            NO_PIECE_KIND => write!(f, "NO_PIECE_KIND"),
            PAWN => write!(f, "PAWN"),
            SILVER => write!(f, "SILVER"),
            BISHOP => write!(f, "BISHOP"),
            ROOK => write!(f, "ROOK"),
            GOLD => write!(f, "GOLD"),
            KING => write!(f, "KING"),
            PRO_PAWN => write!(f, "PRO_PAWN"),
            PRO_SILVER => write!(f, "PRO_SILVER"),
            HORSE => write!(f, "HORSE"),
            DRAGON => write!(f, "DRAGON"),
            _ => write!(f, "PieceKind({})", self.0),
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            NO_PIECE_KIND => write!(f, "・"),
            PAWN => write!(f, "歩"),
            SILVER => write!(f, "銀"),
            BISHOP => write!(f, "角"),
            ROOK => write!(f, "飛"),
            GOLD => write!(f, "金"),
            KING => write!(f, "玉"),
            PRO_PAWN => write!(f, "と"),
            PRO_SILVER => write!(f, "全"),
            HORSE => write!(f, "馬"),
            DRAGON => write!(f, "龍"),
            _ => write!(f, "無効な駒種({})", self.0),
        }
    }
}

/// 駒(陣営の区別あり)。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Piece(u32);

// Piece の内部値もやねうら王を踏襲している。
// SENTE の駒に (1 << 4) を OR することで GOTE の駒になる。

pub const NO_PIECE: Piece = Piece(0);
pub const S_PAWN: Piece = Piece(1);
pub const S_SILVER: Piece = Piece(4);
pub const S_BISHOP: Piece = Piece(5);
pub const S_ROOK: Piece = Piece(6);
pub const S_GOLD: Piece = Piece(7);
pub const S_KING: Piece = Piece(8);
pub const S_PRO_PAWN: Piece = Piece(9);
pub const S_PRO_SILVER: Piece = Piece(12);
pub const S_HORSE: Piece = Piece(13);
pub const S_DRAGON: Piece = Piece(14);
pub const G_PAWN: Piece = Piece(17);
pub const G_SILVER: Piece = Piece(20);
pub const G_BISHOP: Piece = Piece(21);
pub const G_ROOK: Piece = Piece(22);
pub const G_GOLD: Piece = Piece(23);
pub const G_KING: Piece = Piece(24);
pub const G_PRO_PAWN: Piece = Piece(25);
pub const G_PRO_SILVER: Piece = Piece(28);
pub const G_HORSE: Piece = Piece(29);
pub const G_DRAGON: Piece = Piece(30);

impl Piece {
    /// 陣営と駒種を指定して駒を作る。`pk` は実際の駒でなければならない。
    pub const fn new(side: Side, pk: PieceKind) -> Self {
        debug_assert!(pk.is_piece());

        Self((side.0 << 4) | pk.0)
    }

    /// 有効値かどうかを返す。`NO_PIECE` も有効とみなす。
    pub const fn is_valid(self) -> bool {
        self.0 == NO_PIECE.0 || self.is_piece()
    }

    /// 有効値かつ実際の駒かどうかを返す。`NO_PIECE` は実際の駒ではない。
    pub const fn is_piece(self) -> bool {
        (self.0 >> 4) <= 1 && self.kind().is_piece()
    }

    /// 成れる駒かどうかを返す。
    pub const fn is_promotable(self) -> bool {
        self.kind().is_promotable()
    }

    /// 成駒かどうかを返す。
    pub const fn is_promoted(self) -> bool {
        self.kind().is_promoted()
    }

    /// 所属陣営を返す。`self` は実際の駒でなければならない。
    pub const fn side(self) -> Side {
        debug_assert!(self.is_piece());

        Side((self.0 >> 4) & 1)
    }

    /// 駒種を返す。
    pub const fn kind(self) -> PieceKind {
        PieceKind(self.0 & 0xF)
    }

    /// 成った駒を返す。`self` は成れる駒でなければならない。
    pub const fn to_promoted(self) -> Self {
        debug_assert!(self.is_promotable());

        Self(self.0 | (1 << 3))
    }

    /// 成っていない駒種を返す。玉はそのまま玉となる。
    ///
    /// 玉の内部値は成りビットが立った値なので、単純なマスク演算では扱えない。
    pub const fn to_raw_kind(self) -> PieceKind {
        if self.kind().0 == KING.0 {
            KING
        } else {
            PieceKind(self.0 & 7)
        }
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> u32 {
        self.0
    }
}

impl From<Piece> for u32 {
    fn from(pc: Piece) -> Self {
        pc.0
    }
}

impl std::fmt::Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            NO_PIECE => write!(f, "NO_PIECE"),
            S_PAWN => write!(f, "S_PAWN"),
            S_SILVER => write!(f, "S_SILVER"),
            S_BISHOP => write!(f, "S_BISHOP"),
            S_ROOK => write!(f, "S_ROOK"),
            S_GOLD => write!(f, "S_GOLD"),
            S_KING => write!(f, "S_KING"),
            S_PRO_PAWN => write!(f, "S_PRO_PAWN"),
            S_PRO_SILVER => write!(f, "S_PRO_SILVER"),
            S_HORSE => write!(f, "S_HORSE"),
            S_DRAGON => write!(f, "S_DRAGON"),
            G_PAWN => write!(f, "G_PAWN"),
            G_SILVER => write!(f, "G_SILVER"),
            G_BISHOP => write!(f, "G_BISHOP"),
            G_ROOK => write!(f, "G_ROOK"),
            G_GOLD => write!(f, "G_GOLD"),
            G_KING => write!(f, "G_KING"),
            G_PRO_PAWN => write!(f, "G_PRO_PAWN"),
            G_PRO_SILVER => write!(f, "G_PRO_SILVER"),
            G_HORSE => write!(f, "G_HORSE"),
            G_DRAGON => write!(f, "G_DRAGON"),
            _ => write!(f, "Piece({})", self.0),
        }
    }
}

/// 駒の移動能力。
///
/// `steps` は 1 マスだけ進める方向の集合、`slides` は他の駒に当たるまで
/// 何マスでも進める方向の集合。馬、龍は両方を併せ持つ。
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MoveCapability {
    pub steps: DirectionSet,
    pub slides: DirectionSet,
}

impl MoveCapability {
    const fn new(steps: DirectionSet, slides: DirectionSet) -> Self {
        Self { steps, slides }
    }

    const fn none() -> Self {
        Self::new(DirectionSet::empty(), DirectionSet::empty())
    }

    /// 指定した駒の移動能力を返す。
    pub const fn from_piece(pc: Piece) -> Self {
        const BISHOP_DIRS: DirectionSet = DirectionSet::RU
            .or(DirectionSet::RD)
            .or(DirectionSet::LU)
            .or(DirectionSet::LD);
        const ROOK_DIRS: DirectionSet = DirectionSet::R
            .or(DirectionSet::U)
            .or(DirectionSet::D)
            .or(DirectionSet::L);
        const S_SILVER_DIRS: DirectionSet = DirectionSet::RU
            .or(DirectionSet::RD)
            .or(DirectionSet::U)
            .or(DirectionSet::LU)
            .or(DirectionSet::LD);
        const S_GOLD_DIRS: DirectionSet = DirectionSet::RU
            .or(DirectionSet::R)
            .or(DirectionSet::U)
            .or(DirectionSet::D)
            .or(DirectionSet::LU)
            .or(DirectionSet::L);
        const G_SILVER_DIRS: DirectionSet = DirectionSet::RU
            .or(DirectionSet::RD)
            .or(DirectionSet::D)
            .or(DirectionSet::LU)
            .or(DirectionSet::LD);
        const G_GOLD_DIRS: DirectionSet = DirectionSet::R
            .or(DirectionSet::RD)
            .or(DirectionSet::U)
            .or(DirectionSet::D)
            .or(DirectionSet::L)
            .or(DirectionSet::LD);

        const TABLE: [MoveCapability; 32] = [
            MoveCapability::none(), // NO_PIECE
            MoveCapability::new(DirectionSet::U, DirectionSet::empty()), // S_PAWN
            MoveCapability::none(), // (2)
            MoveCapability::none(), // (3)
            MoveCapability::new(S_SILVER_DIRS, DirectionSet::empty()), // S_SILVER
            MoveCapability::new(DirectionSet::empty(), BISHOP_DIRS), // S_BISHOP
            MoveCapability::new(DirectionSet::empty(), ROOK_DIRS), // S_ROOK
            MoveCapability::new(S_GOLD_DIRS, DirectionSet::empty()), // S_GOLD
            MoveCapability::new(DirectionSet::all(), DirectionSet::empty()), // S_KING
            MoveCapability::new(S_GOLD_DIRS, DirectionSet::empty()), // S_PRO_PAWN
            MoveCapability::none(), // (10)
            MoveCapability::none(), // (11)
            MoveCapability::new(S_GOLD_DIRS, DirectionSet::empty()), // S_PRO_SILVER
            MoveCapability::new(ROOK_DIRS, BISHOP_DIRS), // S_HORSE
            MoveCapability::new(BISHOP_DIRS, ROOK_DIRS), // S_DRAGON
            MoveCapability::none(), // (15)
            MoveCapability::none(), // (16)
            MoveCapability::new(DirectionSet::D, DirectionSet::empty()), // G_PAWN
            MoveCapability::none(), // (18)
            MoveCapability::none(), // (19)
            MoveCapability::new(G_SILVER_DIRS, DirectionSet::empty()), // G_SILVER
            MoveCapability::new(DirectionSet::empty(), BISHOP_DIRS), // G_BISHOP
            MoveCapability::new(DirectionSet::empty(), ROOK_DIRS), // G_ROOK
            MoveCapability::new(G_GOLD_DIRS, DirectionSet::empty()), // G_GOLD
            MoveCapability::new(DirectionSet::all(), DirectionSet::empty()), // G_KING
            MoveCapability::new(G_GOLD_DIRS, DirectionSet::empty()), // G_PRO_PAWN
            MoveCapability::none(), // (26)
            MoveCapability::none(), // (27)
            MoveCapability::new(G_GOLD_DIRS, DirectionSet::empty()), // G_PRO_SILVER
            MoveCapability::new(ROOK_DIRS, BISHOP_DIRS), // G_HORSE
            MoveCapability::new(BISHOP_DIRS, ROOK_DIRS), // G_DRAGON
            MoveCapability::none(), // (31)
        ];

        TABLE[pc.inner() as usize]
    }
}

/// 指し手。
///
/// `u32` に pack されている。ビットレイアウトはやねうら王を踏襲したもの:
///
/// * bit0-6:   移動先
/// * bit7-13:  移動元(駒打ちなら打った駒種)
/// * bit14:    駒打ちか
/// * bit15:    成りか
///
/// 5x5 盤ならもっと切り詰められるが、フィールド幅を変える意義もないのでそのままとする。
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Move(u32);

impl Move {
    const FLAG_DROP: u32 = 1 << 14;
    const FLAG_PROMOTION: u32 = 1 << 15;

    /// 盤上の駒を動かして成らない指し手を作る。
    ///
    /// `src` と `dst` は相異なる盤面内のマスでなければならない。
    pub const fn new_walk(src: Square, dst: Square) -> Self {
        debug_assert!(src.0 != dst.0);
        debug_assert!(src.is_on_board());
        debug_assert!(dst.is_on_board());

        Self((dst.0 as u32) | ((src.0 as u32) << 7))
    }

    /// 盤上の駒を動かして成る指し手を作る。
    ///
    /// `src` と `dst` は相異なる盤面内のマスでなければならない。
    pub const fn new_walk_promotion(src: Square, dst: Square) -> Self {
        debug_assert!(src.0 != dst.0);
        debug_assert!(src.is_on_board());
        debug_assert!(dst.is_on_board());

        Self((dst.0 as u32) | ((src.0 as u32) << 7) | Self::FLAG_PROMOTION)
    }

    /// 駒打ちの指し手を作る。
    ///
    /// `pk` は手駒となりうる駒種でなければならない。
    /// `dst` は盤面内のマスでなければならない。
    pub const fn new_drop(pk: PieceKind, dst: Square) -> Self {
        debug_assert!(pk.is_hand());
        debug_assert!(dst.is_on_board());

        Self((dst.0 as u32) | (pk.0 << 7) | Self::FLAG_DROP)
    }

    /// 指し手が有効かどうかを返す。盤面は考慮しない。
    ///
    /// 有効な指し手の定義は以下の通り:
    ///
    /// * 駒打ちフラグと成りフラグが同時に立っていない。
    /// * 盤上の駒を動かす場合、移動元と移動先が相異なる盤面内のマスである。
    /// * 駒打ちの場合、駒種が手駒となりうるものであり、かつ移動先が盤面内のマスである。
    pub const fn is_valid(self) -> bool {
        if self.is_drop() && self.is_promotion() {
            return false;
        }

        let dst = self.dst();

        if self.is_drop() {
            let pk = self.dropped_piece_kind();
            pk.is_hand() && dst.is_on_board()
        } else {
            let src = self.src();
            src.0 != dst.0 && src.is_on_board() && dst.is_on_board()
        }
    }

    /// 駒打ちかどうかを返す。
    pub const fn is_drop(self) -> bool {
        (self.0 & Self::FLAG_DROP) != 0
    }

    /// 成りかどうかを返す。
    pub const fn is_promotion(self) -> bool {
        (self.0 & Self::FLAG_PROMOTION) != 0
    }

    /// 移動先を返す。
    pub const fn dst(self) -> Square {
        Square((self.0 & 0x7F) as i32)
    }

    /// 移動元を返す。`self` は盤上の駒を動かす指し手でなければならない。
    pub const fn src(self) -> Square {
        debug_assert!(!self.is_drop());

        Square(((self.0 >> 7) & 0x7F) as i32)
    }

    /// 打った駒種を返す。`self` は駒打ちでなければならない。
    pub const fn dropped_piece_kind(self) -> PieceKind {
        debug_assert!(self.is_drop());

        PieceKind((self.0 >> 7) & 0x7F)
    }
}

impl std::fmt::Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        #[allow(dead_code)]
        #[derive(Debug)]
        enum MoveDebug {
            Walk {
                src: Square,
                dst: Square,
                promo: bool,
            },
            Drop {
                pk: PieceKind,
                dst: Square,
            },
        }

        if !self.is_valid() {
            return write!(f, "Move({})", self.0);
        }

        let mv_dbg = if self.is_drop() {
            MoveDebug::Drop {
                pk: self.dropped_piece_kind(),
                dst: self.dst(),
            }
        } else {
            MoveDebug::Walk {
                src: self.src(),
                dst: self.dst(),
                promo: self.is_promotion(),
            }
        };

        write!(f, "{:?}", mv_dbg)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if !self.is_valid() {
            return write!(f, "無効な指し手({})", self.0);
        }

        if self.is_drop() {
            write!(f, "{}{}打", self.dst(), self.dropped_piece_kind())?;
        } else {
            write!(f, "{}{}", self.src(), self.dst())?;
            if self.is_promotion() {
                f.write_str("成")?;
            }
        }

        Ok(())
    }
}

/// 局面を動かした際の記録付き指し手。
///
/// `u32` に pack されている。ビットレイアウトは `Move` のそれを拡張したもの:
///
/// * bit0-6:   移動先
/// * bit7-13:  移動元(駒打ちなら打った駒種)
/// * bit14:    駒打ちか
/// * bit15:    成りか
/// * bit16-20: 動かした駒(陣営の区別あり。駒打ちの場合は打った駒)
/// * bit21-25: 捕獲した駒(陣営の区別あり。駒取りでない場合 `NO_PIECE`, 即ち 0)
///
/// 指し手の読み上げに必要な着手前の情報を全て持つ。
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct MoveRecord(u32);

impl MoveRecord {
    /// 駒を動かす指し手から `MoveRecord` を作る。
    ///
    /// 駒取りでない場合、`pc_captured` には `NO_PIECE` を渡す。
    pub const fn from_move_walk(mv: Move, pc_src: Piece, pc_captured: Piece) -> Self {
        debug_assert!(!mv.is_drop());
        debug_assert!(pc_src.is_piece());
        debug_assert!(pc_captured.is_valid());

        Self(mv.0 | (pc_src.0 << 16) | (pc_captured.0 << 21))
    }

    /// 駒打ちの指し手から `MoveRecord` を作る。
    pub const fn from_move_drop(mv: Move, pc: Piece) -> Self {
        debug_assert!(mv.is_drop());
        debug_assert!(pc.is_piece());

        Self(mv.0 | (pc.0 << 16))
    }

    /// 駒打ちかどうかを返す。
    pub const fn is_drop(self) -> bool {
        (self.0 & Move::FLAG_DROP) != 0
    }

    /// 成りかどうかを返す。
    pub const fn is_promotion(self) -> bool {
        (self.0 & Move::FLAG_PROMOTION) != 0
    }

    /// 駒取りかどうかを返す。
    pub const fn is_capture(self) -> bool {
        self.piece_captured().0 != NO_PIECE.0
    }

    /// 移動先を返す。
    pub const fn dst(self) -> Square {
        Square((self.0 & 0x7F) as i32)
    }

    /// 移動元を返す。`self` は盤上の駒を動かす指し手でなければならない。
    pub const fn src(self) -> Square {
        debug_assert!(!self.is_drop());

        Square(((self.0 >> 7) & 0x7F) as i32)
    }

    /// 動かした駒(駒打ちなら打った駒)を着手前の状態で返す。
    pub const fn piece_moved(self) -> Piece {
        Piece((self.0 >> 16) & 0x1F)
    }

    /// 捕獲した駒を返す。駒取りでない場合 `NO_PIECE` を返す。
    pub const fn piece_captured(self) -> Piece {
        Piece((self.0 >> 21) & 0x1F)
    }
}

impl From<MoveRecord> for Move {
    fn from(record: MoveRecord) -> Self {
        Self(record.0 & 0xFFFF)
    }
}

impl std::fmt::Debug for MoveRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("MoveRecord")
            .field("mv", &Move::from(*self))
            .field("piece_moved", &self.piece_moved())
            .field("piece_captured", &self.piece_captured())
            .finish()
    }
}

impl std::fmt::Display for MoveRecord {
    /// 棋譜風の表記で出力する。例: 「１四銀成」「３三歩打」
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.dst(), self.piece_moved().kind())?;

        if self.is_drop() {
            f.write_str("打")?;
        } else if self.is_promotion() {
            f.write_str("成")?;
        }

        Ok(())
    }
}

/// 盤面。
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Board([Piece; 25]);

impl Board {
    /// 空の盤面を返す。
    pub const fn empty() -> Self {
        Self([NO_PIECE; 25])
    }

    /// 平手初期盤面を返す。
    ///
    /// 後手が一段目に飛、角、銀、金、玉を左から並べ、歩を玉の前に置く。
    /// 先手はその点対称。
    pub const fn startpos() -> Self {
        #[rustfmt::skip]
        const INNER: [Piece; 25] = [
            G_ROOK,   NO_PIECE, NO_PIECE, S_PAWN,   S_KING,
            G_BISHOP, NO_PIECE, NO_PIECE, NO_PIECE, S_GOLD,
            G_SILVER, NO_PIECE, NO_PIECE, NO_PIECE, S_SILVER,
            G_GOLD,   NO_PIECE, NO_PIECE, NO_PIECE, S_BISHOP,
            G_KING,   G_PAWN,   NO_PIECE, NO_PIECE, S_ROOK,
        ];

        Self(INNER)
    }
}

impl std::ops::Index<Square> for Board {
    type Output = Piece;

    fn index(&self, sq: Square) -> &Self::Output {
        unsafe { self.0.get_unchecked(usize::from(sq)) }
    }
}

impl std::ops::IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        unsafe { self.0.get_unchecked_mut(usize::from(sq)) }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for col in Col::iter() {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;

        for row in Row::iter() {
            for col in Col::iter() {
                let sq = Square::from_col_row(col, row);
                let pc = self[sq];
                if pc == NO_PIECE || pc.side() == SENTE {
                    f.write_str(" ")?;
                } else {
                    f.write_str("v")?;
                }
                write!(f, "{}", pc.kind())?;
            }
            writeln!(f, " {}", row)?;
        }

        Ok(())
    }
}

/// 手駒。
///
/// 駒種ごとの枚数を単純な配列で持つ。
///
/// 玉を取った時点で勝ちとするルールなので、取った玉も手駒として数える。
/// もちろん玉を打つことはできない。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Hand([u32; 9]);

impl Hand {
    /// 手駒として現れうる全駒種。(打てるのは玉以外)
    pub const PKS: [PieceKind; 6] = [PAWN, SILVER, BISHOP, ROOK, GOLD, KING];

    /// 空の手駒を返す。
    pub const fn empty() -> Self {
        Self([0; 9])
    }

    /// 手駒が空かどうかを返す。
    pub fn is_empty(&self) -> bool {
        Self::PKS.into_iter().all(|pk| self[pk] == 0)
    }
}

impl std::ops::Index<PieceKind> for Hand {
    type Output = u32;

    /// 手駒として現れない駒種を渡してはならない。
    fn index(&self, pk: PieceKind) -> &Self::Output {
        debug_assert!(pk.is_hand() || pk == KING);

        &self.0[usize::from(pk)]
    }
}

impl std::ops::IndexMut<PieceKind> for Hand {
    /// 手駒として現れない駒種を渡してはならない。
    fn index_mut(&mut self, pk: PieceKind) -> &mut Self::Output {
        debug_assert!(pk.is_hand() || pk == KING);

        &mut self.0[usize::from(pk)]
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        const PKS: [PieceKind; 6] = [KING, ROOK, BISHOP, GOLD, SILVER, PAWN];

        for pk in PKS {
            let n = self[pk];
            if n == 0 {
                continue;
            }

            write!(f, "{}", pk)?;
            if n >= 2 {
                write!(f, "{}", n)?;
            }
        }

        Ok(())
    }
}

/// 両陣営の手駒。`Side` でインデックスアクセスできる。
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Hands([Hand; 2]);

impl Hands {
    /// 両陣営とも空の手駒を返す。
    pub const fn empty() -> Self {
        Self([Hand::empty(); 2])
    }
}

impl From<[Hand; 2]> for Hands {
    fn from(inner: [Hand; 2]) -> Self {
        Self(inner)
    }
}

impl std::ops::Index<Side> for Hands {
    type Output = Hand;

    fn index(&self, side: Side) -> &Self::Output {
        unsafe { self.0.get_unchecked(usize::from(side)) }
    }
}

impl std::ops::IndexMut<Side> for Hands {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        unsafe { self.0.get_unchecked_mut(usize::from(side)) }
    }
}
