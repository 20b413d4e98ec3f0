//! Main entry point for the munzip CLI application.
//!
//! Dispatches the two recognized invocations (`-l` list, `-x` extract)
//! and maps every failure to exit status 1 with a single diagnostic on
//! stderr.

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use munzip::{Action, Cli, LocalFileReader, ZipArchive};

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    let Some(action) = cli.action() else {
        let _ = writeln!(std::io::stderr(), "{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    };

    match run(action) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("munzip: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(action: Action<'_>) -> Result<()> {
    match action {
        Action::List { archive } => list(Path::new(archive)),
        Action::Extract {
            archive,
            entry,
            output,
        } => extract(Path::new(archive), entry, Path::new(output)),
    }
}

fn open_archive(path: &Path) -> Result<ZipArchive<LocalFileReader>> {
    let reader = LocalFileReader::new(path)
        .with_context(|| format!("cannot open archive {}", path.display()))?;
    ZipArchive::open(reader).with_context(|| format!("cannot read archive {}", path.display()))
}

/// Print each entry's stored name, one per line, in directory order.
///
/// Names are written as raw bytes so entries that are not valid UTF-8
/// are reproduced exactly.
fn list(path: &Path) -> Result<()> {
    let archive = open_archive(path)?;

    let stdout = std::io::stdout().lock();
    let mut out = std::io::BufWriter::new(stdout);
    for entry in archive.entries() {
        out.write_all(entry.name_bytes())?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    Ok(())
}

/// Locate one entry and extract it to `output`.
///
/// The entry is located before any output is created, so a missing
/// entry never touches the output path.
fn extract(path: &Path, entry_name: &str, output: &Path) -> Result<()> {
    let archive = open_archive(path)?;

    let entry = archive
        .find(entry_name)
        .with_context(|| format!("in archive {}", path.display()))?;

    archive.extract_to_file(entry, output).with_context(|| {
        format!(
            "cannot extract {entry_name} from {} to {}",
            path.display(),
            output.display()
        )
    })?;

    Ok(())
}
