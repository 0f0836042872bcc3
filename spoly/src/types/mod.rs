mod term;
mod poly;

pub use term::{Term, MAX_DEG};
pub use poly::Poly;
