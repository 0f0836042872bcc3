use std::marker::PhantomData;
use log::info;
use serde::Serialize;
use spoly::Coeff;
use crate::app::utils::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_float!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub poly: String,

    #[arg(short = 't', long, default_value = "f64")]
    pub c_type: CType,

    #[arg(short, long, default_value = "text")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

pub struct App<R>
where R: Coeff + Serialize {
    args: Args,
    _coeff: PhantomData<R>
}

impl<R> App<R>
where R: Coeff + Serialize {
    pub fn new(args: Args) -> Self {
        App { args, _coeff: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        let p = load_poly::<R>(&self.args.poly)?;
        info!("{}: deg = {:?}, nterms = {}", self.args.poly, p.deg(), p.nterms());

        fmt_poly(&p, self.args.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::cmd::data;

    #[test]
    fn show() {
        let args = Args {
            poly: data("p1.txt"),
            ..Default::default()
        };
        let res = dispatch(&args);
        assert_eq!(res.ok(), Some("4x^5 + -2x^3 + 2x + 3".to_string()));
    }

    #[test]
    fn show_unicode_f32() {
        let args = Args {
            poly: data("p1.txt"),
            c_type: CType::F32,
            format: Format::Unicode,
            ..Default::default()
        };
        let res = dispatch(&args);
        assert_eq!(res.ok(), Some("4x⁵ - 2x³ + 2x + 3".to_string()));
    }

    #[test]
    fn show_empty() {
        let args = Args {
            poly: data("zero.txt"),
            ..Default::default()
        };
        let res = dispatch(&args);
        assert_eq!(res.ok(), Some("0".to_string()));
    }

    #[test]
    fn show_malformed() {
        let args = Args {
            poly: data("malformed.txt"),
            ..Default::default()
        };
        let res = dispatch(&args);
        assert!(res.is_err());
    }
}
