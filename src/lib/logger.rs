use directories::ProjectDirs;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use crate::Result;
use crate::lib::error::ConfigError;

const LOG_FILE: &str = "rightsizer.log";

/// Location of the persistent log file
///
/// * **macOS**: `~/Library/Application Support/com.frost8ytes.rightsizer/rightsizer.log`
/// * **Linux**: `~/.local/share/rightsizer/rightsizer.log`
/// * **Windows**: `C:\Users\<User>\AppData\Local\frost8ytes\rightsizer\data\rightsizer.log`
///
/// Falls back to the working directory when no home directory is known.
pub fn log_file_path() -> Result<PathBuf> {
    match ProjectDirs::from("com", "frost8ytes", "rightsizer") {
        Some(proj_dirs) => {
            let log_dir = proj_dirs.data_local_dir();
            fs::create_dir_all(log_dir).map_err(|e| {
                ConfigError::FileError(format!("{}: {}", log_dir.display(), e))
            })?;
            Ok(log_dir.join(LOG_FILE))
        }
        None => {
            let cwd = std::env::current_dir().map_err(|e| {
                ConfigError::MissingRequired(format!("no log directory: {}", e))
            })?;
            Ok(cwd.join(LOG_FILE))
        }
    }
}

/// Default filter when `RUST_LOG` is unset
fn default_filter(debug: bool) -> &'static str {
    if debug { "debug" } else { "info" }
}

/// Writes every record to two sinks
struct Tee<A, B> {
    console: A,
    file: B,
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.console.write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.console.flush()?;
        self.file.flush()
    }
}

/// Initialize logging to the log file and, unless `quiet`, to stderr
///
/// `RUST_LOG` overrides the level chosen by `debug`. Stdout is left to
/// command output.
pub fn init_logger(debug: bool, quiet: bool) -> Result<()> {
    let log_path = log_file_path()?;
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .map_err(|e| ConfigError::FileError(format!("{}: {}", log_path.display(), e)))?;

    let target: Box<dyn Write + Send> = if quiet {
        Box::new(log_file)
    } else {
        Box::new(Tee {
            console: io::stderr(),
            file: log_file,
        })
    };

    let env = env_logger::Env::default().default_filter_or(default_filter(debug));
    env_logger::Builder::from_env(env)
        .format_timestamp_secs()
        .target(env_logger::Target::Pipe(target))
        .init();

    log::debug!("Logging to: {}", log_path.display());
    Ok(())
}
