use std::process::ExitCode;

use clap::Parser;
use transverse_hfk_cli::{run, Opts};

fn main() -> ExitCode {
    let opts = Opts::parse();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("transverseHFK: {err:#}");
            ExitCode::FAILURE
        }
    }
}
