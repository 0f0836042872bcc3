mod ctype;
mod helper;
pub mod dispatch;

pub use ctype::*;
pub use helper::*;
pub(crate) use dispatch::dispatch_float;
