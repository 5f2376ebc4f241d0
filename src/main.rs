use std::env;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use log::{debug, info};

use filehound::prelude::*;

fn main() -> ExitCode {
    human_panic::setup_panic!();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let message = format!("error: {e:#}");
            let colored_message = format!("{} {e:#}", "error:".red().bold());
            eprintln!("{}", format_message(&message, &colored_message));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let matches = get_matches();

    init_logger(get_verbosity(&matches), get_log_file(&matches).as_deref())?;

    let config = resolve_search_config(&matches)?;
    debug!("Effective search profile: {config:?}");

    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let query = config.into_query(&cwd)?;
    info!("Searching {}", query.root().display());

    let files = query.find();
    info!("{} files found", files.len());

    match write_results(&files, get_output_mode(&matches)) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write results"),
    }
}

fn write_results(files: &[PathBuf], mode: OutputMode) -> io::Result<()> {
    let mut out = io::stdout().lock();

    match mode {
        OutputMode::Count => writeln!(out, "{}", files.len())?,
        OutputMode::Lines => write_paths(&mut out, files, b'\n')?,
        OutputMode::Nul => write_paths(&mut out, files, b'\0')?,
    }

    out.flush()
}

// Paths are written as raw bytes so names that are not valid UTF-8 survive
fn write_paths(out: &mut impl Write, files: &[PathBuf], terminator: u8) -> io::Result<()> {
    for file in files {
        out.write_all(file.as_os_str().as_encoded_bytes())?;
        out.write_all(&[terminator])?;
    }
    Ok(())
}
