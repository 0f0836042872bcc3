use std::str::FromStr;
use serde::Serialize;
use spoly::{Coeff, Poly};
use spoly::io::{read_poly, write_lines, write_poly};
use crate::app::err::*;
use super::Format;

pub fn measure<F, Res>(proc: F) -> (Res, std::time::Duration)
where F: FnOnce() -> Res {
    let start = std::time::Instant::now();
    let res = proc();
    let time = start.elapsed();
    (res, time)
}

pub fn guard_panic<F, R>(f: F) -> Result<R, Box<dyn std::error::Error>>
where F: FnOnce() -> Result<R, Box<dyn std::error::Error>> + std::panic::UnwindSafe {
    std::panic::catch_unwind(|| {
        f()
    }).unwrap_or_else(|e| {
        let info = match e.downcast::<String>() {
            Ok(v) => *v,
            Err(e) => match e.downcast::<&str>() {
                Ok(v) => v.to_string(),
                _ => "Unknown Source of Error".to_owned()
            }
        };
        err!("panic: {info}")
    })
}

// `-` reads from stdin, anything else is a file path.
pub fn load_poly<R>(input: &str) -> Result<Poly<R>, Box<dyn std::error::Error>>
where R: Coeff {
    let res = if input == "-" {
        read_poly(std::io::stdin().lock())
    } else {
        spoly::io::load_poly(input)
    };

    match res {
        Ok(p) => Ok(p),
        Err(e) => err!("{input}: {e}")
    }
}

pub fn parse_value<R>(s: &str) -> Result<R, Box<dyn std::error::Error>>
where R: Coeff {
    let Ok(x) = R::from_str(s) else {
        return err!("cannot parse '{}' as {}.", s, R::math_symbol())
    };
    Ok(x)
}

pub fn fmt_poly<R>(p: &Poly<R>, format: Format) -> Result<String, Box<dyn std::error::Error>>
where R: Coeff + Serialize {
    let res = match format {
        Format::Text    => write_poly(p),
        Format::Unicode => p.to_string(),
        Format::Lines   => write_lines(p),
        Format::Json    => serde_json::to_string(p)?
    };
    Ok(res)
}

pub fn csv_writer(path: &String) -> Result<csv::Writer<std::fs::File>, Box<dyn std::error::Error>> {
    use std::fs::OpenOptions;

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let wtr = csv::Writer::from_writer(file);

    Ok(wtr)
}
