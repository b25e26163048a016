//! # pdfshrink
//!
//! Batch-compress the PDF files of a directory by handing each one to
//! Ghostscript with a fixed quality preset, then report how much space was
//! saved.
//!
//! ## What this crate does
//!
//! 1. **Preflight** — checks that the Ghostscript binary exists and is
//!    executable before any input is touched.
//! 2. **Discover** — lists the `*.pdf` files of the working directory.
//! 3. **Compress** — runs the tool once per file, strictly one after another.
//!    A failing file is reported and skipped, the batch keeps going.
//! 4. **Report** — prints per-file savings and an aggregate summary.
//!
//! The compression itself is opaque: this crate never parses PDF content.
//!
//! ## Quick example
//!
//! ```no_run
//! use pdfshrink::{BatchCompressor, CompressorConfig, Ghostscript, QualityPreset};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CompressorConfig::default();
//! let gs = Ghostscript::locate(&config.ghostscript_path)?;
//!
//! let batch = BatchCompressor::new(gs, config);
//! let stats = batch.run(QualityPreset::Ebook, &mut std::io::stdout())?;
//! println!("{} of {} file(s) compressed", stats.successes, stats.files_seen);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod batch;
mod discovery;
mod format;
mod ghostscript;
mod preset;
mod prompt;
mod stats;

pub use batch::BatchCompressor;
pub use discovery::{find_pdfs, output_path_for};
pub use format::{format_saved, format_size};
pub use ghostscript::{CompressionBackend, Ghostscript};
pub use preset::QualityPreset;
pub use prompt::prompt_preset;
pub use stats::{savings_percent, FileOutcome, RunStats};

// ── Configuration ────────────────────────────────────────────────────────────

/// Default location of the Ghostscript binary.
pub const DEFAULT_GHOSTSCRIPT_PATH: &str = "/usr/bin/gs";

/// Runtime configuration for [`BatchCompressor`].
#[derive(Debug, Clone)]
pub struct CompressorConfig {
    /// Path of the external compression binary checked during preflight.
    pub ghostscript_path: PathBuf,

    /// Directory scanned for `*.pdf` input files.
    pub working_dir: PathBuf,

    /// Directory receiving the compressed files. A relative path is resolved
    /// against [`CompressorConfig::working_dir`].
    pub output_dir: PathBuf,

    /// Appended to each input's file stem to name its output file.
    pub suffix: String,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            ghostscript_path: PathBuf::from(DEFAULT_GHOSTSCRIPT_PATH),
            working_dir: PathBuf::from("."),
            output_dir: PathBuf::from("compressed"),
            suffix: "_compressed".into(),
        }
    }
}

impl CompressorConfig {
    /// The output directory with a relative path resolved against the
    /// working directory.
    pub fn resolved_output_dir(&self) -> PathBuf {
        if self.output_dir.is_absolute() {
            self.output_dir.clone()
        } else {
            self.working_dir.join(&self.output_dir)
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum CompressError {
    /// The external compression tool is not installed at the expected path.
    #[error(
        "Ghostscript not found at '{}'. Install it with `brew install ghostscript` \
         (macOS) or `sudo apt install ghostscript` (Debian/Ubuntu)",
        path.display()
    )]
    MissingDependency { path: PathBuf },

    /// The tool ran but exited with a non-zero status for one file.
    #[error("compression of '{}' failed: {status}", file.display())]
    ToolFailed {
        file: PathBuf,
        status: std::process::ExitStatus,
    },

    /// The tool could not be started for one file.
    #[error("could not run compressor for '{}': {source}", file.display())]
    ToolSpawn {
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A filesystem I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, CompressError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_output_dir_resolves_under_working_dir() {
        let cfg = CompressorConfig {
            working_dir: PathBuf::from("/data/scans"),
            ..Default::default()
        };
        assert_eq!(
            cfg.resolved_output_dir(),
            PathBuf::from("/data/scans/compressed")
        );
    }

    #[test]
    fn absolute_output_dir_is_kept() {
        let cfg = CompressorConfig {
            working_dir: PathBuf::from("/data/scans"),
            output_dir: PathBuf::from("/tmp/out"),
            ..Default::default()
        };
        assert_eq!(cfg.resolved_output_dir(), PathBuf::from("/tmp/out"));
    }

    #[test]
    fn missing_dependency_message_has_install_hint() {
        let err = CompressError::MissingDependency {
            path: PathBuf::from("/usr/bin/gs"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/usr/bin/gs"));
        assert!(msg.contains("install ghostscript"));
    }
}
