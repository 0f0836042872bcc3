use std::fmt::Display;
use crate::Coeff;
use crate::util::format::fmt_mono;

// Largest degree the reader accepts. Any two such degrees add
// without overflow, so products of read polynomials always exist.
pub const MAX_DEG: usize = i32::MAX as usize;

// A single term `coeff · x^deg`.

#[derive(Clone, Copy, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Term<R>
where R: Coeff {
    pub coeff: R,
    pub deg: usize
}

impl<R> Term<R>
where R: Coeff {
    pub fn new(coeff: R, deg: usize) -> Self {
        Self { coeff, deg }
    }

    pub fn is_zero(&self) -> bool {
        self.coeff.is_zero()
    }

    pub fn eval(&self, x: &R) -> R {
        self.coeff * num_traits::pow(*x, self.deg)
    }
}

impl<R> From<(R, usize)> for Term<R>
where R: Coeff {
    fn from(pair: (R, usize)) -> Self {
        Self::new(pair.0, pair.1)
    }
}

// `3`, `2x`, `4x^5`
impl<R> Display for Term<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.deg == 0 {
            write!(f, "{}", self.coeff)
        } else {
            let x = fmt_mono("x", self.deg, false);
            write!(f, "{}{x}", self.coeff)
        }
    }
}
