use std::fmt::{Debug, Display};
use std::str::FromStr;
use num_traits::{Float, NumAssign};

// Coefficients of a polynomial.
// Any IEEE float qualifies; in practice `f32` and `f64`.

pub trait Coeff:
    Float +
    NumAssign +
    Default +
    Send +
    Sync +
    Display +
    Debug +
    FromStr +
    'static
{
    fn math_symbol() -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<T> Coeff for T where T:
    Float +
    NumAssign +
    Default +
    Send +
    Sync +
    Display +
    Debug +
    FromStr +
    'static
{}
