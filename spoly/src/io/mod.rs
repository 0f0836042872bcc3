mod err;
mod read;
mod write;

pub use err::*;
pub use read::*;
pub use write::*;
