//! File logging for the command-line tool.
//!
//! Terminal output is reserved for results, so every diagnostic goes to
//! `{data_dir}/pricegrid.log`. `RUST_LOG` overrides the default filter.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "pricegrid.log";

const ROTATION_MARKER: &[u8] = b"--- Log rotated (older entries removed) ---\n";

/// Size-based trimming applied to the log before it is opened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogRotation {
    /// Size above which the file is trimmed
    pub max_bytes: u64,
    /// Bytes of the newest entries kept after trimming
    pub keep_bytes: u64,
}

impl Default for LogRotation {
    /// Trim past 5 MB down to the newest 1 MB
    fn default() -> Self {
        Self {
            max_bytes: 5 * 1024 * 1024,
            keep_bytes: 1024 * 1024,
        }
    }
}

impl LogRotation {
    /// Trim `path` if it is over the limit. Returns whether it was trimmed.
    ///
    /// The kept tail starts on a line boundary.
    pub fn apply(&self, path: &Path) -> io::Result<bool> {
        let size = match fs::metadata(path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(e),
        };
        if size <= self.max_bytes {
            return Ok(false);
        }

        let tail = read_tail(path, size.saturating_sub(self.keep_bytes))?;
        let from = tail.iter().position(|&b| b == b'\n').map_or(0, |i| i + 1);

        let mut file = File::create(path)?;
        file.write_all(ROTATION_MARKER)?;
        file.write_all(&tail[from..])?;
        Ok(true)
    }
}

fn read_tail(path: &Path, offset: u64) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    file.seek(SeekFrom::Start(offset))?;
    let mut tail = Vec::new();
    file.read_to_end(&mut tail)?;
    Ok(tail)
}

/// Install the global subscriber writing to `{data_dir}/pricegrid.log`.
///
/// Returns the log file path.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join(LOG_FILE_NAME);
    let rotated = LogRotation::default().apply(&log_path).unwrap_or_else(|e| {
        eprintln!("Warning: failed to rotate {}: {e}", log_path.display());
        false
    });

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pricegrid={level},pricegrid_core=warn")));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = level,
        rotated,
        log_path = %log_path.display(),
        "pricegrid session started"
    );
    Ok(log_path)
}
