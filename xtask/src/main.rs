//! Cargo applet for repository maintenance tasks, invoked as `cargo xtask
//! <task>`: a thin dispatcher over `std::env::args`, `anyhow` for fallible
//! setup, and a single task (man-page generation) driven from the CLI
//! crate's `clap::Command`.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::CommandFactory;
use transverse_hfk_cli::Opts;

fn main() -> Result<()> {
    let task = env::args().nth(1);

    match task.as_deref() {
        Some("man") => generate_man_page(),
        Some(other) => bail!("unknown xtask `{other}`; available tasks: man"),
        None => bail!("usage: cargo xtask <task>; available tasks: man"),
    }
}

/// Renders `thfk`'s man page to `target/man/thfk.1`, the way a packaging
/// step would pick it up before installation.
fn generate_man_page() -> Result<()> {
    let command = Opts::command();
    let man = clap_mangen::Man::new(command);

    let mut buffer = Vec::new();
    man.render(&mut buffer)
        .context("failed to render the man page")?;

    let out_dir = workspace_root()?.join("target").join("man");
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let out_path = out_dir.join("thfk.1");
    fs::write(&out_path, buffer)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    println!("wrote {}", out_path.display());
    Ok(())
}

fn workspace_root() -> Result<PathBuf> {
    let manifest_dir =
        env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR is not set")?;
    Ok(PathBuf::from(manifest_dir)
        .parent()
        .context("xtask has no parent directory")?
        .to_path_buf())
}
