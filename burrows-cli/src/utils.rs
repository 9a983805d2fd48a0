//! Utility functions for the CLI.

use burrows_core::{BurrowsError, Result};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Exit status for I/O and usage failures.
pub const EXIT_FAILURE: i32 = 1;
/// Exit status for input that does not decode.
pub const EXIT_MALFORMED: i32 = 2;

/// Read the whole input from a file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    let data = match path {
        Some(path) => fs::read(path)?,
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            data
        }
    };
    Ok(data)
}

/// Write the whole output to a file, or stdout when no path is given.
pub fn write_output(path: Option<&Path>, data: &[u8]) -> Result<()> {
    match path {
        Some(path) => fs::write(path, data)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Process exit status for a failed command.
pub fn exit_code(err: &(dyn Error + 'static)) -> i32 {
    match err.downcast_ref::<BurrowsError>() {
        Some(e) if e.is_malformed_input() => EXIT_MALFORMED,
        _ => EXIT_FAILURE,
    }
}

/// Logger writing `level: message` lines to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!(
                "{}: [{}] {}",
                record.level().as_str().to_lowercase(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}

static LOGGER: StderrLogger = StderrLogger;

/// Map the `-v` count to a level filter.
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => Level::Debug.to_level_filter(),
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger at the level selected by `-v`.
pub fn init_logging(verbose: u8) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level_for(verbose));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Debug);
        assert_eq!(level_for(2), LevelFilter::Trace);
        assert_eq!(level_for(9), LevelFilter::Trace);
    }

    #[test]
    fn test_file_io_roundtrip() {
        let path = std::env::temp_dir().join(format!("burrows-utils-{}.bin", std::process::id()));
        write_output(Some(path.as_path()), &[0, 1, 2, 255]).unwrap();
        assert_eq!(read_input(Some(path.as_path())).unwrap(), [0, 1, 2, 255]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_input_is_io_error() {
        let path = std::env::temp_dir().join("burrows-utils-does-not-exist.bin");
        let err = read_input(Some(path.as_path())).unwrap_err();
        assert!(matches!(err, BurrowsError::Io(_)));
        assert_eq!(exit_code(&err), EXIT_FAILURE);
    }

    #[test]
    fn test_exit_code_for_malformed_input() {
        let err = burrows_codec::decompress(&[0, 0, 0, 9, 1]).unwrap_err();
        assert_eq!(exit_code(&err), EXIT_MALFORMED);

        let boxed: Box<dyn Error> = Box::new(err);
        assert_eq!(exit_code(boxed.as_ref()), EXIT_MALFORMED);

        let other: Box<dyn Error> = "unrelated failure".into();
        assert_eq!(exit_code(other.as_ref()), EXIT_FAILURE);
    }
}
