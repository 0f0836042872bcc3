use std::fmt::Display;
use itertools::Itertools;

// Renders `Σ r·x` from (x, r) pairs, taken in the given order.
// Unit coefficients are elided and signs are folded into the separators.
pub fn lc<X, R, S>(mut terms: S) -> String
where
    X: Display,
    R: Display,
    S: Iterator<Item = (X, R)>
{
    let mut res: Vec<String> = vec![];

    if let Some((x, r)) = terms.next() {
        let r = r.to_string();
        let x = x.to_string();

        let term = if r == "1" {
            x
        } else if r == "-1" {
            if x == "1" { r } else { format!("-{x}") }
        } else if x == "1" {
            r
        } else {
            format!("{r}{x}")
        };

        res.push(term)
    };

    for (x, r) in terms {
        let r = r.to_string();
        let x = x.to_string();

        let (op, r) = if let Some(r) = r.strip_prefix('-') {
            ("-", r.to_owned())
        } else {
            ("+", r)
        };

        let term = if x == "1" {
            r
        } else if r == "1" {
            x
        } else {
            format!("{r}{x}")
        };

        res.push(op.to_string());
        res.push(term);
    }

    if res.is_empty() {
        "0".to_string()
    } else {
        res.join(" ")
    }
}

// x^d with the exponent in unicode superscripts, or as `x^d`.
pub fn fmt_mono(x: &str, d: usize, unicode: bool) -> String {
    match d {
        0 => "1".to_string(),
        1 => x.to_string(),
        _ if unicode => format!("{x}{}", superscript(d)),
        _ => format!("{x}^{d}")
    }
}

pub fn superscript(i: usize) -> String {
    i.to_string().chars().map(|c| {
        match c {
            '1' => '\u{00B9}',
            '2' => '\u{00B2}',
            '3' => '\u{00B3}',
            _ => {
                let d = c as u32 - '0' as u32;
                char::from_u32('\u{2070}' as u32 + d).unwrap_or(c)
            }
        }
    }).collect()
}

pub fn table<S, I, J, I1, I2, D, F>(head: S, rows: I1, cols: I2, entry: F) -> String
where
    S: Display,
    I: Display,
    J: Display,
    I1: Iterator<Item = I>,
    I2: Iterator<Item = J>,
    D: Display,
    F: Fn(&I, &J) -> D
{
    use prettytable::*;

    let rows = rows.collect_vec();
    let cols = cols.collect_vec();

    fn row<I>(head: String, cols: I) -> Row
    where I: Iterator<Item = String> {
        let mut cells = vec![Cell::new(head.as_str())];
        cells.extend(cols.map(|str| Cell::new(str.as_str())));
        Row::new(cells)
    }

    let mut table = Table::new();

    table.set_format(*format::consts::FORMAT_CLEAN);
    table.set_titles(row(
        head.to_string(),
        cols.iter().map(|j| j.to_string())
    ));

    for i in rows.iter() {
        table.add_row(row(
            i.to_string(),
            cols.iter().map(|j| format!("{}", entry(i, j)))
        ));
    }

    table.to_string()
}
