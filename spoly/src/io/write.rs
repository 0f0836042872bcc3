use itertools::Itertools;
use crate::{Coeff, Poly};

// `4x^5 + -2x^3 + 2x + 3`, or `0` for the zero polynomial.
pub fn write_poly<R>(p: &Poly<R>) -> String
where R: Coeff {
    if p.nterms() == 0 {
        return "0".to_string()
    }
    p.terms_desc().join(" + ")
}

// The line format accepted by `read_poly`.
pub fn write_lines<R>(p: &Poly<R>) -> String
where R: Coeff {
    p.terms_desc().map(|t| format!("{} {}", t.coeff, t.deg)).join("\n")
}
