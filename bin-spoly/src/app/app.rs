use log::{debug, info};
use clap::{Parser, Subcommand};

use super::cmd::{arith, eval, show};
use super::cmd::arith::Op;
use super::utils::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    Show(show::Args),
    Add(arith::Args),
    Mul(arith::Args),
    Eval(eval::Args),
}

impl CliArgs {
    fn log_level(&self) -> log::LevelFilter {
        let level = match &self.command {
            Cmd::Show(args) => args.log,
            Cmd::Add(args)  => args.log,
            Cmd::Mul(args)  => args.log,
            Cmd::Eval(args) => args.log,
        };
        spoly::util::log::level_filter(level)
    }
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        App { args }
    }

    pub fn new_with(args: CliArgs) -> Self {
        App { args }
    }

    pub fn run(&self) -> Result<String, Box<dyn std::error::Error>> {
        self.init_logger();

        info!("args: {:?}", self.args);

        let (res, time) = measure(||
            self.dispatch()
        );

        info!("time: {:?}", time);

        res
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        if spoly::util::log::init_simple_logger(l).is_err() {
            debug!("logger already initialized.");
        }
    }

    fn dispatch(&self) -> Result<String, Box<dyn std::error::Error>> {
        guard_panic(||
            match &self.args.command {
                Cmd::Show(args) => show::dispatch(args),
                Cmd::Add(args)  => arith::dispatch(args, Op::Add),
                Cmd::Mul(args)  => arith::dispatch(args, Op::Mul),
                Cmd::Eval(args) => eval::dispatch(args),
            }
        )
    }
}
