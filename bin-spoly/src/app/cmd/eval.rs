use std::marker::PhantomData;
use derive_more::Display;
use itertools::Itertools;
use log::info;
use serde::Serialize;
use spoly::Coeff;
use spoly::util::format::table;
use crate::app::utils::*;
use crate::app::err::*;

pub fn dispatch(args: &Args) -> Result<String, Box<dyn std::error::Error>> {
    dispatch_float!(App, args)
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub poly: String,

    #[arg(short = 'x', long = "at", required = true, allow_negative_numbers = true)]
    pub xs: Vec<String>,

    #[arg(short, long)]
    pub output: Option<String>,

    #[arg(short = 't', long, default_value = "f64")]
    pub c_type: CType,

    #[arg(short, long, default_value = "text")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

// A table row: displays as its point, carries its value.
#[derive(Display)]
#[display("{_0}")]
struct Point<R>(R, R)
where R: Coeff;

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
        ensure!(!self.args.xs.is_empty(), "no point to evaluate at.");

        let p = load_poly::<R>(&self.args.poly)?;
        let xs: Vec<R> = self.args.xs.iter().map(|s| parse_value::<R>(s)).try_collect()?;

        let values = xs.iter().map(|x| (*x, p.eval(x))).collect_vec();

        for (x, v) in values.iter() {
            info!("p({x}) = {v}");
        }

        if let Some(path) = &self.args.output {
            self.write_csv(path, &values)?;
        }

        self.format(&values)
    }

    fn format(&self, values: &[(R, R)]) -> Result<String, Box<dyn std::error::Error>> {
        if self.args.format == Format::Json {
            return Ok(serde_json::to_string(values)?)
        }

        if let [(_, v)] = values {
            return Ok(v.to_string())
        }

        let rows = values.iter().map(|&(x, v)| Point(x, v));
        let res = table("x", rows, ["p(x)"].iter(), |pt, _| pt.1);
        Ok(res.trim_end().to_string())
    }

    fn write_csv(&self, path: &String, values: &[(R, R)]) -> Result<(), Box<dyn std::error::Error>> {
        info!("write: {path}");

        let mut wtr = csv_writer(path)?;
        wtr.write_record(["x", "value"])?;
        for (x, v) in values {
            wtr.write_record([x.to_string(), v.to_string()])?;
        }
        wtr.flush()?;

        Ok(())
    }
}
