use std::io::{self, BufRead, Write};

use autocase::Case;
use clap::Parser;
use miette::{IntoDiagnostic, Result};

#[derive(Debug, Parser)]
#[clap(about, version)]
pub struct Args {
    /// The identifiers to convert. If none are given, identifiers are read from standard input, one per line.
    #[clap(value_name = "IDENT")]
    idents: Vec<String>,
    /// The case to convert identifiers to.
    #[clap(
        short = 't',
        long = "to",
        value_name = "CASE",
        required_unless_present = "detect"
    )]
    to: Option<Case>,
    /// Print the detected case of each identifier instead of converting it.
    #[clap(short = 'd', long = "detect", conflicts_with = "to")]
    detect: bool,
}

impl Args {
    fn process(&self, ident: &str) -> String {
        match (self.detect, self.to) {
            (false, Some(case)) => case.convert(ident).into_owned(),
            _ => match Case::classify(ident) {
                Some(case) => case.name().to_owned(),
                None => "unrecognized".to_owned(),
            },
        }
    }
}

pub fn main() -> Result<()> {
    miette::set_panic_hook();
    env_logger::init();

    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.idents.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.into_diagnostic()?;
            writeln!(out, "{}", args.process(&line)).into_diagnostic()?;
        }
    } else {
        for ident in &args.idents {
            writeln!(out, "{}", args.process(ident)).into_diagnostic()?;
        }
    }
    out.flush().into_diagnostic()
}
