mod engine;
mod evaluate;
mod movegen;
pub mod mylog;
mod notation;
mod perft;
mod position;
mod shogi;
mod util;

pub use self::engine::*;
pub use self::evaluate::*;
pub use self::movegen::*;
pub use self::notation::*;
pub use self::perft::*;
pub use self::position::*;
pub use self::shogi::*;
