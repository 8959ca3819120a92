//! Command line front end for [`transverse_hfk`], factored out of `main.rs`
//! so that `xtask` can generate a man page from [`Opts`] via `clap_mangen`
//! without linking the binary.

use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use transverse_hfk::{printing, Grid, GridError, LiftGrid, LiftState, State, Verbosity};

/// A program to calculate the Legendrian/Transverse knot invariants via the
/// algorithm described in "Transverse knots distinguished by Knot Floer
/// Homology" by L. Ng, P. S. Ozsvath, and D. P. Thurston. If the number of
/// sheets is not equal to 1 it instead calculates the theta invariant for
/// the n-fold cyclic cover.
#[derive(Parser)]
#[command(name = "thfk", version = git_version::git_version!(fallback = env!("CARGO_PKG_VERSION")))]
pub struct Opts {
    /// ArcIndex of the grid.
    #[arg(short = 'i', long = "index", value_name = "ARC_INDEX")]
    arc_index: usize,
    /// List of Xs, e.g. `[1,2,3]`.
    #[arg(short = 'X', long = "Xs", value_name = "XS", value_parser = parse_permutation)]
    xs: Vec<u8>,
    /// List of Os, e.g. `[2,3,1]`.
    #[arg(short = 'O', long = "Os", value_name = "OS", value_parser = parse_permutation)]
    os: Vec<u8>,
    /// Number of sheets for the cyclic branched cover. 1 selects the
    /// single-sheet path.
    #[arg(short = 'n', long = "sheets", value_name = "SHEETS", default_value_t = 1)]
    sheets: i64,
    /// Maximum time to run, in seconds.
    #[arg(short = 't', long = "timeout", value_name = "SECONDS")]
    timeout: Option<u64>,
    /// Produce verbose output.
    #[arg(short = 'v', long = "verbose", group = "verbosity")]
    verbose: bool,
    /// Produce some extraneous output.
    #[arg(short = 'q', long = "quiet", group = "verbosity")]
    quiet: bool,
    /// Don't produce any extraneous output.
    #[arg(short = 's', long = "silent", group = "verbosity")]
    silent: bool,
}

/// Parses `[a,b,c,...]` with integers in `[1,N]`, comma-separated, no
/// trailing data after `]`.
fn parse_permutation(s: &str) -> Result<Vec<u8>, String> {
    let inner = s
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| format!("`{s}` is not of the form [a,b,c,...]"))?;

    if inner.is_empty() {
        return Err(format!("`{s}` is not of the form [a,b,c,...]"));
    }

    inner
        .split(',')
        .map(|tok| {
            tok.trim()
                .parse::<u8>()
                .map_err(|_| format!("`{tok}` in `{s}` is not a valid column value"))
        })
        .collect()
}

fn verbosity_of(opts: &Opts) -> Verbosity {
    if opts.verbose {
        Verbosity::Verbose
    } else if opts.silent {
        Verbosity::Silent
    } else {
        // Quiet is both the explicit `-q` choice and the default.
        Verbosity::Quiet
    }
}

/// Parses `argv`-derived options and runs the decision procedure they
/// describe, writing to `out`. Split from `main` so integration tests (and
/// potential embedders) can drive it without a child process.
pub fn run(opts: Opts) -> Result<()> {
    if opts.arc_index < 2 {
        bail!(GridError::ArcIndexTooSmall(opts.arc_index));
    }
    if opts.xs.len() != opts.arc_index {
        bail!(GridError::LengthMismatch(opts.xs.len(), opts.arc_index));
    }
    if opts.os.len() != opts.arc_index {
        bail!(GridError::LengthMismatch(opts.os.len(), opts.arc_index));
    }

    let verbosity = verbosity_of(&opts);
    let _timeout_guard = opts.timeout.map(spawn_timeout);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opts.sheets > 1 {
        return run_lift(&opts, verbosity, &mut out);
    }

    run_single_sheet(&opts, verbosity, &mut out)
}

/// Spawns a background thread that terminates the whole process after
/// `seconds` (the core never observes cancellation, only the CLI does). The
/// returned `JoinHandle` is dropped, detaching the thread; it is never
/// joined because a clean exit races it harmlessly.
fn spawn_timeout(seconds: u64) -> thread::JoinHandle<()> {
    let (_tx, rx) = mpsc::channel::<()>();
    thread::spawn(move || {
        if rx.recv_timeout(Duration::from_secs(seconds)).is_err() {
            println!("Timeout reached. Terminating");
            std::process::exit(0);
        }
    })
}

fn run_single_sheet(opts: &Opts, verbosity: Verbosity, out: &mut dyn Write) -> Result<()> {
    let grid = Grid::new(opts.xs.clone(), opts.os.clone())
        .map_err(|e| anyhow!(e))
        .context("Invalid grid")?;
    let ll = grid.ll();
    let ur = grid.ur();

    if verbosity.at_least(Verbosity::Quiet) {
        printing::print_grid(&grid, out)?;
    }

    report(&grid, "LL", &ll, verbosity, out, |g, s, sink| {
        transverse_hfk::null_homologous_d0q(g, s, sink)
    })?;
    report(&grid, "UR", &ur, verbosity, out, |g, s, sink| {
        transverse_hfk::null_homologous_d0q(g, s, sink)
    })?;
    report(&grid, "D1[LL]", &ll, verbosity, out, |g, s, sink| {
        transverse_hfk::null_homologous_d1q(g, s, sink)
    })?;
    report(&grid, "D1[UR]", &ur, verbosity, out, |g, s, sink| {
        transverse_hfk::null_homologous_d1q(g, s, sink)
    })?;

    Ok(())
}

fn report(
    grid: &Grid,
    label: &str,
    state: &State,
    verbosity: Verbosity,
    out: &mut dyn Write,
    decide: impl FnOnce(&Grid, &State, &mut dyn transverse_hfk::verbosity::ProgressSink) -> bool,
) -> Result<()> {
    if verbosity.at_least(Verbosity::Quiet) {
        writeln!(out, "\nCalculating graph for {label} invariant")?;
        printing::print_state(grid, state, out)?;
    }

    let mut sink = progress_sink(verbosity, out);
    let ans = decide(grid, state, &mut *sink);
    let verdict = if ans { "" } else { "NOT " };
    writeln!(out, "{label} is {verdict}null-homologous")?;
    Ok(())
}

fn run_lift(opts: &Opts, verbosity: Verbosity, out: &mut dyn Write) -> Result<()> {
    let grid = LiftGrid::new(opts.xs.clone(), opts.os.clone(), opts.sheets)
        .map_err(|e| anyhow!(e))
        .context("Invalid grid")?;
    let ur: LiftState = grid.ur();

    if verbosity.at_least(Verbosity::Quiet) {
        writeln!(out, "Calculating graph for lifted invariant.")?;
    }

    let mut sink = progress_sink(verbosity, out);
    let ans = transverse_hfk::null_homologous_lift(&grid, &ur, &mut *sink);
    let verdict = if ans { "" } else { "NOT " };
    writeln!(out, "theta_{} is {verdict}null-homologous", opts.sheets)?;
    Ok(())
}

fn progress_sink<'a>(
    verbosity: Verbosity,
    out: &'a mut dyn Write,
) -> Box<dyn transverse_hfk::verbosity::ProgressSink + 'a> {
    if verbosity.at_least(Verbosity::Verbose) {
        Box::new(transverse_hfk::verbosity::WriteSink { out })
    } else {
        Box::new(transverse_hfk::verbosity::NullSink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_permutation_accepts_well_formed_input() {
        assert_eq!(parse_permutation("[1,2,3]").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn parse_permutation_rejects_missing_brackets() {
        assert!(parse_permutation("1,2,3").is_err());
    }

    #[test]
    fn parse_permutation_rejects_trailing_garbage() {
        assert!(parse_permutation("[1,2,3]x").is_err());
    }

    #[test]
    fn parse_permutation_rejects_non_integer_tokens() {
        assert!(parse_permutation("[1,a,3]").is_err());
    }
}
