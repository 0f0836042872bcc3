use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;
use itertools::Itertools;
use log::{debug, info};

use crate::{Coeff, Poly, Term, MAX_DEG};
use super::ReadError;

// Reads a polynomial stored one term per line:
//
//      4 5
//     -2 3
//      2 1
//      3 0
//
// i.e. `4x^5 - 2x^3 + 2x + 3`. Degrees must strictly descend.
// Blank lines are skipped, zero terms are dropped.
// Degrees are bounded by `MAX_DEG`.
pub fn read_poly<R, B>(reader: B) -> Result<Poly<R>, ReadError>
where R: Coeff, B: BufRead {
    let mut terms: Vec<Term<R>> = vec![];
    let mut prev: Option<usize> = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let n = i + 1;

        if line.trim().is_empty() {
            continue
        }

        let t = parse_term::<R>(&line).map_err(|reason|
            ReadError::malformed(n, reason)
        )?;

        if let Some(p) = prev {
            if t.deg >= p {
                let reason = format!("degree {} does not descend from {}", t.deg, p);
                return Err(ReadError::malformed(n, reason))
            }
        }
        prev = Some(t.deg);

        if t.is_zero() {
            debug!("line {n}: dropped zero term of degree {}", t.deg);
            continue
        }

        terms.push(t);
    }

    Ok(Poly::from_desc(terms))
}

pub fn load_poly<R, P>(path: P) -> Result<Poly<R>, ReadError>
where R: Coeff, P: AsRef<Path> {
    let path = path.as_ref();
    info!("load: {}", path.display());

    let file = File::open(path)?;
    read_poly(BufReader::new(file))
}

fn parse_term<R>(line: &str) -> Result<Term<R>, String>
where R: Coeff {
    let fields = line.split_whitespace().collect_vec();
    let [c, d] = fields.as_slice() else {
        return Err(format!("expected `<coeff> <degree>`, found {} field(s)", fields.len()))
    };

    let Ok(coeff) = R::from_str(c) else {
        return Err(format!("cannot parse coefficient '{c}'"))
    };
    if !coeff.is_finite() {
        return Err(format!("coefficient '{c}' is not finite"))
    }

    let Ok(deg) = d.parse::<usize>() else {
        return Err(format!("cannot parse degree '{d}'"))
    };
    if deg > MAX_DEG {
        return Err(format!("degree {deg} exceeds {MAX_DEG}"))
    }

    Ok(Term::new(coeff, deg))
}
