use std::marker::PhantomData;
use derive_more::Display;
use log::info;
use serde::Serialize;
use spoly::Coeff;
use crate::app::utils::*;
use crate::app::err::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Display)]
pub enum Op {
    #[display("+")] Add,
    #[display("*")] Mul
}

pub fn dispatch(args: &Args, op: Op) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_float!(App, args, op)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub p: String,
    pub q: String,

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
    op: Op,
    _coeff: PhantomData<R>
}

impl<R> App<R>
where R: Coeff + Serialize {
    pub fn new(args: Args, op: Op) -> Self {
        App { args, op, _coeff: PhantomData }
    }

    pub fn run(&mut self) -> Result<String, Box<dyn std::error::Error>> {
        ensure!(
            self.args.p != "-" || self.args.q != "-",
            "at most one polynomial can be read from stdin."
        );

        let p = load_poly::<R>(&self.args.p)?;
        let q = load_poly::<R>(&self.args.q)?;

        let r = match self.op {
            Op::Add => &p + &q,
            Op::Mul => &p * &q,
        };

        info!("({p}) {} ({q}) = {r}", self.op);

        fmt_poly(&r, self.args.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::cmd::data;

    fn args(p: &str, q: &str) -> Args {
        Args {
            p: data(p),
            q: data(q),
            ..Default::default()
        }
    }

    #[test]
    fn add() {
        let res = dispatch(&args("p1.txt", "p2.txt"), Op::Add);
        assert_eq!(res.ok(), Some("4x^5 + -1x^3 + 2x".to_string()));
    }

    #[test]
    fn add_cancel() {
        let res = dispatch(&args("p1.txt", "p1_neg.txt"), Op::Add);
        assert_eq!(res.ok(), Some("0".to_string()));
    }

    #[test]
    fn mul() {
        let res = dispatch(&args("x_plus_1.txt", "x_minus_1.txt"), Op::Mul);
        assert_eq!(res.ok(), Some("1x^2 + -1".to_string()));
    }

    #[test]
    fn mul_zero() {
        let res = dispatch(&args("p1.txt", "zero.txt"), Op::Mul);
        assert_eq!(res.ok(), Some("0".to_string()));
    }

    #[test]
    fn mul_json() {
        let args = Args {
            format: Format::Json,
            ..args("x_plus_1.txt", "x_minus_1.txt")
        };
        let res = dispatch(&args, Op::Mul);
        assert_eq!(res.ok(), Some(r#"[{"coeff":1.0,"deg":2},{"coeff":-1.0,"deg":0}]"#.to_string()));
    }

    #[test]
    fn both_stdin() {
        let args = Args {
            p: "-".to_string(),
            q: "-".to_string(),
            ..Default::default()
        };
        let res = dispatch(&args, Op::Add);
        assert!(res.is_err());
    }

    #[test]
    fn malformed() {
        let res = dispatch(&args("p1.txt", "malformed.txt"), Op::Add);
        let e = res.unwrap_err().to_string();
        assert!(e.contains("malformed input at line 2"));
    }
}
