mod error;
mod logger;

use self::error::*;
use self::logger::*;

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use digester::hash::{Algorithm, AnyDigest};

/// Print the MD5 or SHA-256 digest of each FILE.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Hash algorithm (md5 or sha256).
    #[arg(
        short = 'a',
        long = "algorithm",
        env = "DIGESTER_ALGORITHM",
        default_value = "sha256"
    )]
    algorithm: Algorithm,
    /// Log more; repeat for even more.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
    /// Files to digest. `-` reads standard input.
    #[arg(value_name = "FILE", default_value = "-")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    match do_main() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn do_main() -> Result<ExitCode, Error> {
    let args = Args::parse();
    Logger::init(Logger::level(args.verbose))?;
    let stdout = io::stdout();
    let failures = write_digests(args.algorithm, &args.files, &mut stdout.lock())?;
    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Writes one `<digest>  <path>` line per file. A file that cannot be digested is logged and skipped. Returns the
/// number of such files.
fn write_digests<W: Write>(algorithm: Algorithm, files: &[PathBuf], out: &mut W) -> Result<usize, Error> {
    let mut failures = 0;
    for path in files {
        match digest_path(algorithm, path) {
            Ok(digest) => writeln!(out, "{}  {}", digest, path.display())?,
            Err(e) => {
                log::error!("{e}");
                failures += 1;
            }
        }
    }
    out.flush()?;
    Ok(failures)
}

fn digest_path(algorithm: Algorithm, path: &Path) -> Result<AnyDigest, Error> {
    log::info!("Digesting {} with {}", path.display(), algorithm);
    let result = if path == Path::new("-") {
        algorithm.digest_reader(io::stdin().lock())
    } else {
        let file = File::open(path).map_err(|e| Error::Open(path.to_path_buf(), e))?;
        algorithm.digest_reader(file)
    };
    result.map_err(|e| Error::Digest(path.to_path_buf(), e))
}
