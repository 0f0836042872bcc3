use std::fmt::{Display, Debug};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign, Mul, MulAssign, Neg};
use std::str::FromStr;
use ahash::AHashMap;
use auto_impl_ops::auto_ops;
use delegate::delegate;
use itertools::{EitherOrBoth, Itertools};
use log::trace;
use num_traits::{Zero, One, Pow};

use crate::Coeff;
use crate::io::{read_poly, ReadError};
use crate::util::format::{lc, fmt_mono};
use super::Term;

// A polynomial in one variable `x`, stored as its non-zero terms
// in strictly descending degree. Every constructor and operation
// keeps this form, so structural equality is term-for-term equality.

#[derive(Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(from = "Vec<Term<R>>", into = "Vec<Term<R>>"))]
pub struct Poly<R>
where R: Coeff {
    terms: Vec<Term<R>>
}

impl<R> Poly<R>
where R: Coeff {
    // `terms` must already be in normal form.
    pub(crate) fn from_desc(terms: Vec<Term<R>>) -> Self {
        debug_assert!(Self::is_normal(&terms));
        Self { terms }
    }

    fn is_normal(terms: &[Term<R>]) -> bool {
        terms.iter().all(|t| !t.is_zero()) &&
        terms.iter().tuple_windows().all(|(s, t)| s.deg > t.deg)
    }

    // Collapses (deg, coeff) pairs with distinct degrees into normal form.
    fn collapse<I>(iter: I) -> Self
    where I: IntoIterator<Item = (usize, R)> {
        let terms = iter.into_iter()
            .filter(|(_, r)| !r.is_zero())
            .sorted_unstable_by(|(i, _), (j, _)| j.cmp(i))
            .map(|(d, r)| Term::new(r, d))
            .collect();
        Self::from_desc(terms)
    }

    fn acc_map() -> AHashMap<usize, R> {
        let hasher = ahash::RandomState::with_seeds(0, 0, 0, 0);
        AHashMap::with_hasher(hasher)
    }

    pub fn mono(deg: usize, r: R) -> Self {
        Self::from(Term::new(r, deg))
    }

    pub fn from_const(r: R) -> Self {
        Self::mono(0, r)
    }

    pub fn variable() -> Self {
        Self::mono(1, R::one())
    }

    delegate! {
        to self.terms {
            #[call(len)] pub fn nterms(&self) -> usize;
            #[call(first)] pub fn lead_term(&self) -> Option<&Term<R>>;
        }
    }

    // (deg, coeff) pairs, highest degree first.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &R)> {
        self.terms.iter().map(|t| (t.deg, &t.coeff))
    }

    pub fn terms_desc(&self) -> impl Iterator<Item = &Term<R>> {
        self.terms.iter()
    }

    pub fn coeff(&self, deg: usize) -> R {
        match self.terms.binary_search_by(|t| deg.cmp(&t.deg)) {
            Ok(i) => self.terms[i].coeff,
            Err(_) => R::zero()
        }
    }

    pub fn const_term(&self) -> R {
        self.coeff(0)
    }

    pub fn is_const(&self) -> bool {
        self.terms.iter().all(|t| t.deg == 0)
    }

    // `None` for the zero polynomial.
    pub fn deg(&self) -> Option<usize> {
        self.lead_term().map(|t| t.deg)
    }

    pub fn lead_coeff(&self) -> R {
        self.lead_term().map(|t| t.coeff).unwrap_or(R::zero())
    }

    pub fn eval(&self, x: &R) -> R {
        self.terms.iter().fold(R::zero(), |acc, t| acc + t.eval(x))
    }

    pub fn map_coeffs<F>(&self, f: F) -> Self
    where F: Fn(&R) -> R {
        let terms = self.terms.iter()
            .map(|t| Term::new(f(&t.coeff), t.deg))
            .filter(|t| !t.is_zero())
            .collect();
        Self::from_desc(terms)
    }
}

impl<R> Poly<R>
where R: Coeff {
    // `None` if the product degree does not fit in `usize`.
    pub fn checked_mul(&self, rhs: &Self) -> Option<Self> {
        let (Some(d), Some(e)) = (self.deg(), rhs.deg()) else {
            return Some(Self::zero())
        };
        d.checked_add(e)?;
        Some(self.cross(rhs))
    }

    // Products are accumulated per degree during the cross pass,
    // then sorted once. Degree sums are bounded by `deg + rhs.deg`.
    fn cross(&self, rhs: &Self) -> Self {
        let mut acc = Self::acc_map();
        acc.reserve(self.nterms() + rhs.nterms());

        for s in self.terms.iter() {
            for t in rhs.terms.iter() {
                *acc.entry(s.deg + t.deg).or_insert_with(R::zero) += s.coeff * t.coeff;
            }
        }

        trace!("mul: {} x {} terms, {} degrees", self.nterms(), rhs.nterms(), acc.len());

        Self::collapse(acc)
    }
}

impl<R> From<Term<R>> for Poly<R>
where R: Coeff {
    fn from(t: Term<R>) -> Self {
        Self::from_iter([(t.deg, t.coeff)])
    }
}

impl<R> From<Vec<Term<R>>> for Poly<R>
where R: Coeff {
    fn from(terms: Vec<Term<R>>) -> Self {
        terms.into_iter().map(|t| (t.deg, t.coeff)).collect()
    }
}

impl<R> From<Poly<R>> for Vec<Term<R>>
where R: Coeff {
    fn from(p: Poly<R>) -> Self {
        p.terms
    }
}

// Like degrees are summed; the input may come in any order.
impl<R> FromIterator<(usize, R)> for Poly<R>
where R: Coeff {
    fn from_iter<T: IntoIterator<Item = (usize, R)>>(iter: T) -> Self {
        let mut acc = Self::acc_map();
        for (d, r) in iter {
            *acc.entry(d).or_insert_with(R::zero) += r;
        }
        Self::collapse(acc)
    }
}

impl<R> IntoIterator for Poly<R>
where R: Coeff {
    type Item = Term<R>;
    type IntoIter = std::vec::IntoIter<Term<R>>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<R> FromStr for Poly<R>
where R: Coeff {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        read_poly(s.as_bytes())
    }
}

impl<R> Display for Poly<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms = self.terms.iter().map(|t|
            (fmt_mono("x", t.deg, true), t.coeff)
        );
        f.write_str(&lc(terms))
    }
}

impl<R> Debug for Poly<R>
where R: Coeff {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl<R> Zero for Poly<R>
where R: Coeff {
    fn zero() -> Self {
        Self::from_desc(vec![])
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<R> One for Poly<R>
where R: Coeff {
    fn one() -> Self {
        Self::from_const(R::one())
    }

    fn is_one(&self) -> bool {
        self.is_const() && self.const_term().is_one()
    }
}

impl<R> Neg for Poly<R>
where R: Coeff {
    type Output = Self;
    fn neg(self) -> Self::Output {
        -&self
    }
}

impl<R> Neg for &Poly<R>
where R: Coeff {
    type Output = Poly<R>;
    fn neg(self) -> Self::Output {
        self.map_coeffs(|r| -*r)
    }
}

// Merge of the two descending sequences.
#[auto_ops]
impl<R> Add for &Poly<R>
where R: Coeff {
    type Output = Poly<R>;

    fn add(self, rhs: Self) -> Self::Output {
        let terms = self.terms.iter()
            .merge_join_by(rhs.terms.iter(), |s, t| t.deg.cmp(&s.deg))
            .filter_map(|e| match e {
                EitherOrBoth::Both(s, t) => {
                    let c = s.coeff + t.coeff;
                    if c.is_zero() {
                        None
                    } else {
                        Some(Term::new(c, s.deg))
                    }
                },
                EitherOrBoth::Left(s) => Some(*s),
                EitherOrBoth::Right(t) => Some(*t)
            })
            .collect();

        Poly::from_desc(terms)
    }
}

#[auto_ops]
impl<R> Sub for &Poly<R>
where R: Coeff {
    type Output = Poly<R>;

    fn sub(self, rhs: Self) -> Self::Output {
        self + &(-rhs)
    }
}

// Panics if the product degree exceeds `usize::MAX`;
// see `Poly::checked_mul`.
#[auto_ops]
impl<R> Mul for &Poly<R>
where R: Coeff {
    type Output = Poly<R>;

    fn mul(self, rhs: Self) -> Self::Output {
        let Some(res) = self.checked_mul(rhs) else {
            panic!("degree overflow: deg {:?} * deg {:?}", self.deg(), rhs.deg())
        };
        res
    }
}

#[auto_ops]
impl<R> MulAssign<&R> for Poly<R>
where R: Coeff {
    fn mul_assign(&mut self, rhs: &R) {
        *self = self.map_coeffs(|r| *r * *rhs)
    }
}

impl<R> Pow<usize> for &Poly<R>
where R: Coeff {
    type Output = Poly<R>;
    fn pow(self, n: usize) -> Self::Output {
        (0..n).fold(Poly::one(), |res, _| &res * self)
    }
}

impl<R> Sum for Poly<R>
where R: Coeff {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |res, p| res + p)
    }
}

impl<'a, R> Sum<&'a Poly<R>> for Poly<R>
where R: Coeff {
    fn sum<I: Iterator<Item = &'a Poly<R>>>(iter: I) -> Self {
        iter.fold(Self::zero(), |res, p| res + p)
    }
}
