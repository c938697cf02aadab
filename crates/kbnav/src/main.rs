//! Kbnav inspects the keyboard navigability of HTML documents.

use std::process::ExitCode;

use clap::Parser;

use crate::args::{Args, Command, RunCommand};

mod args;

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Order(args) => args.run(),
        Command::Check(args) => args.run(),
    }
}
