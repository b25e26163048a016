use std::path::PathBuf;

// ── FileOutcome ──────────────────────────────────────────────────────────────

/// The result of compressing one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// The input PDF.
    pub input: PathBuf,

    /// Where the compressed copy was (or would have been) written.
    pub output: PathBuf,

    /// Size of the input before compression.
    pub input_size: u64,

    /// Size of the output on success, or the failure message otherwise.
    pub result: std::result::Result<u64, String>,
}

impl FileOutcome {
    /// `true` when the backend produced an output file.
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Bytes saved by this file; `None` when compression failed.
    pub fn saved(&self) -> Option<i64> {
        self.result
            .as_ref()
            .ok()
            .map(|&out| self.input_size as i64 - out as i64)
    }

    /// Integer savings percentage; `None` when compression failed.
    pub fn percent_saved(&self) -> Option<i64> {
        self.result
            .as_ref()
            .ok()
            .map(|&out| savings_percent(self.input_size, out))
    }
}

// ── RunStats ─────────────────────────────────────────────────────────────────

/// Aggregate counters for one batch run.
///
/// Byte totals only include files that compressed successfully, so
/// `saved()` equals the sum of every successful file's saving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub files_seen: usize,
    pub successes: usize,
    pub total_input_bytes: u64,
    pub total_output_bytes: u64,
}

impl RunStats {
    /// Fold one file's outcome into the counters.
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.files_seen += 1;
        if let Ok(output_size) = outcome.result {
            self.successes += 1;
            self.total_input_bytes += outcome.input_size;
            self.total_output_bytes += output_size;
        }
    }

    /// Files that were seen but did not compress.
    pub fn failures(&self) -> usize {
        self.files_seen - self.successes
    }

    /// Total bytes saved over successful files; negative if they grew.
    pub fn saved(&self) -> i64 {
        self.total_input_bytes as i64 - self.total_output_bytes as i64
    }

    /// Integer savings percentage over successful files.
    pub fn percent_saved(&self) -> i64 {
        savings_percent(self.total_input_bytes, self.total_output_bytes)
    }
}

/// `(input − output) * 100 / input`, truncated toward zero.
///
/// A 49.9 % saving reports as 49 %. An empty input reports 0.
///
/// ```
/// # use pdfshrink::savings_percent;
/// assert_eq!(savings_percent(2_097_152, 1_048_576), 50);
/// assert_eq!(savings_percent(1000, 501), 49);
/// assert_eq!(savings_percent(0, 0), 0);
/// ```
pub fn savings_percent(input: u64, output: u64) -> i64 {
    if input == 0 {
        return 0;
    }
    let saved = input as i128 - output as i128;
    (saved * 100 / input as i128) as i64
}
