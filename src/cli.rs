use clap::Parser;
use std::path::PathBuf;

use crate::io::Encoding;

#[derive(Parser, Debug)]
#[command(name = "runlink")]
#[command(version)]
#[command(about = "Restore a symbolic-link archive entry from its payload", long_about = None)]
#[command(after_help = "Examples:\n  \
  runlink libz.payload -n lib/libz.so -d out      create out/lib/libz.so\n  \
  runlink -t -z sh.deflate -n bin/sh --crc 1c291ca3   test a DEFLATE payload against its CRC\n  \
  runlink -s 4096 big.payload -n link             declare a size larger than the payload")]
pub struct Cli {
    /// File holding the entry's payload (the link target)
    #[arg(value_name = "PAYLOAD")]
    pub payload: PathBuf,

    /// Entry name inside the archive (also the path of the link)
    #[arg(short = 'n', long = "name", value_name = "ENTRY")]
    pub entry: String,

    /// Payload size declared by the archive header (default: decoded payload length)
    #[arg(short = 's', long = "size", value_name = "BYTES")]
    pub declared_size: Option<u64>,

    /// CRC-32 recorded by the archive header, in hex
    #[arg(long = "crc", value_name = "HEX", value_parser = parse_crc)]
    pub recorded_crc: Option<u32>,

    /// Payload is a raw DEFLATE stream
    #[arg(short = 'z')]
    pub deflate: bool,

    /// Extract into exdir
    #[arg(short = 'd', value_name = "DIR")]
    pub extract_dir: Option<PathBuf>,

    /// Test only: read and checksum the payload, create nothing
    #[arg(short = 't')]
    pub test: bool,

    /// Treat links as unsupported on this host
    #[arg(long = "no-symlinks")]
    pub no_symlinks: bool,

    /// Archive name used in messages (default: payload file name)
    #[arg(long = "archive", value_name = "NAME")]
    pub archive: Option<String>,

    /// Quiet mode (-qq => quieter)
    #[arg(short = 'q', action = clap::ArgAction::Count)]
    pub quiet: u8,

    /// Verbose logging
    #[arg(short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn encoding(&self) -> Encoding {
        if self.deflate {
            Encoding::Deflate
        } else {
            Encoding::Stored
        }
    }

    /// Where the link is created
    pub fn destination(&self) -> PathBuf {
        match self.extract_dir {
            Some(ref dir) => dir.join(&self.entry),
            None => PathBuf::from(&self.entry),
        }
    }

    pub fn archive_name(&self) -> String {
        self.archive.clone().unwrap_or_else(|| {
            self.payload
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.payload.display().to_string())
        })
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }

    /// Default log filter when `RUST_LOG` is unset
    pub fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (q, _) if q > 1 => "off",
            (1, _) => "error",
            (0, 0) => "info",
            (0, 1) => "debug",
            _ => "trace",
        }
    }
}

fn parse_crc(s: &str) -> Result<u32, String> {
    let digits = s.trim_start_matches("0x").trim_start_matches("0X");
    u32::from_str_radix(digits, 16).map_err(|e| format!("invalid CRC '{s}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_joins_extract_dir() {
        let cli = Cli::parse_from(["runlink", "p.bin", "-n", "lib/libz.so", "-d", "out"]);
        assert_eq!(cli.destination(), PathBuf::from("out/lib/libz.so"));
        let cli = Cli::parse_from(["runlink", "p.bin", "-n", "lib/libz.so"]);
        assert_eq!(cli.destination(), PathBuf::from("lib/libz.so"));
    }

    #[test]
    fn flags() {
        let cli = Cli::parse_from([
            "runlink", "-t", "-z", "--crc", "0xCBF43926", "-qq", "sh.bin", "-n", "bin/sh",
        ]);
        assert!(cli.test);
        assert_eq!(cli.encoding(), Encoding::Deflate);
        assert_eq!(cli.recorded_crc, Some(0xcbf4_3926));
        assert_eq!(cli.log_level(), "off");
        assert_eq!(cli.archive_name(), "sh.bin");
    }

    #[test]
    fn bad_crc_rejected() {
        assert!(Cli::try_parse_from(["runlink", "p", "-n", "x", "--crc", "zz"]).is_err());
    }

    #[test]
    fn verbosity() {
        let cli = Cli::parse_from(["runlink", "p", "-n", "x", "-v"]);
        assert_eq!(cli.log_level(), "debug");
        let cli = Cli::parse_from(["runlink", "p", "-n", "x", "-q"]);
        assert_eq!(cli.log_level(), "error");
    }
}
