//! Main entry point for the runlink CLI application.
//!
//! This binary restores one symbolic-link archive entry from a payload file,
//! reporting the outcome and the CRC-32 of the link target.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use runlink::{
    ArchiveEntryHeader, Cli, CrcCheck, EntryKind, ErrorRegister, LinkEntryExtractor, Severity,
    StreamCursor,
};

/// Application entry point.
///
/// The exit status follows the job's error register: 0 when everything was
/// fine, 1 for warnings (a link could not be created), 2 for errors (CRC
/// mismatch or an unreadable payload).
fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    let register = ErrorRegister::new();
    if let Err(e) = run(&cli, &register) {
        tracing::error!("{e:#}");
        register.raise_at_least(Severity::Error);
    }

    ExitCode::from(register.current().exit_code() as u8)
}

/// Install a stderr subscriber; `RUST_LOG` wins over `-q`/`-v`.
fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Restore the link described by the command line.
///
/// # Arguments
///
/// * `cli` - Parsed command-line arguments
/// * `register` - Severity register for this run
///
/// # Returns
///
/// Returns `Ok(())` whenever the payload could be read, even if the link was
/// skipped or could not be created; those cases are reflected in `register`.
fn run(cli: &Cli, register: &ErrorRegister) -> Result<()> {
    let archive = cli.archive_name();

    let declared_size = match cli.declared_size {
        Some(size) => size,
        None => decoded_len(cli)?,
    };

    let mut header = ArchiveEntryHeader::new(&cli.entry, EntryKind::Symlink, declared_size);
    if let Some(crc) = cli.recorded_crc {
        header = header.with_recorded_crc(crc);
    }

    let extractor =
        LinkEntryExtractor::new(&archive, register.clone()).with_link_support(!cli.no_symlinks);
    let mut cursor = StreamCursor::open(&cli.payload, cli.encoding())?;
    let destination = cli.destination();

    let outcome = extractor
        .extract(&mut cursor, &header, &destination, !cli.test)
        .with_context(|| format!("{archive}: {}", header.name))?;

    if !outcome.is_link() {
        if !cli.is_quiet() {
            eprintln!("{}: symbolic links not supported, entry left alone", header.name);
        }
        return Ok(());
    }
    let checksum = outcome.checksum().unwrap_or_default();

    if !cli.is_quiet() {
        let action = if cli.test { "testing" } else { "linking" };
        println!(
            "  {action}: {}  ({} bytes)  {outcome}  crc32={checksum:08x}",
            destination.display(),
            cursor.consumed()
        );
    }

    if let CrcCheck::Mismatch { recorded, computed } =
        CrcCheck::compare(header.recorded_crc, checksum)
    {
        tracing::error!(
            archive = %archive,
            entry = %header.name,
            "bad CRC {computed:08x} (should be {recorded:08x})"
        );
        register.raise_at_least(Severity::Error);
    }

    Ok(())
}

/// Length of the payload after decoding, used as the declared size when `-s` is absent.
///
/// For DEFLATE payloads this inflates the whole stream once; the compressed
/// file size says nothing about how long the target is.
fn decoded_len(cli: &Cli) -> Result<u64> {
    let mut cursor = StreamCursor::open(&cli.payload, cli.encoding())?;
    std::io::copy(&mut cursor, &mut std::io::sink())
        .with_context(|| format!("failed to decode {}", cli.payload.display()))
}
