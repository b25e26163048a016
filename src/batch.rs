use crate::discovery::{find_pdfs, output_path_for};
use crate::format::{format_saved, format_size};
use crate::{CompressionBackend, CompressorConfig, FileOutcome, QualityPreset, Result, RunStats};
use std::fs;
use std::io::Write;
use std::path::Path;

// ── BatchCompressor ──────────────────────────────────────────────────────────

/// Drives one batch run: discovery, the per-file loop and the summary.
///
/// Files are compressed strictly in sequence. A file that fails is reported
/// and counted; the loop moves on to the next one.
///
/// ```no_run
/// use pdfshrink::{BatchCompressor, CompressorConfig, Ghostscript, QualityPreset};
///
/// let config = CompressorConfig::default();
/// let gs = Ghostscript::locate(&config.ghostscript_path).unwrap();
/// let stats = BatchCompressor::new(gs, config)
///     .run(QualityPreset::Printer, &mut std::io::stdout())
///     .unwrap();
/// assert!(stats.successes <= stats.files_seen);
/// ```
pub struct BatchCompressor<B> {
    backend: B,
    config: CompressorConfig,
}

impl<B: CompressionBackend> BatchCompressor<B> {
    /// Pair a compression backend with the run configuration.
    pub fn new(backend: B, config: CompressorConfig) -> Self {
        Self { backend, config }
    }

    /// The configuration this batch runs with.
    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    /// Compress every PDF in the working directory, writing the report to
    /// `out`.
    ///
    /// The output directory is only created when at least one PDF was
    /// found. Per-file failures never surface as `Err`; only directory
    /// listing, directory creation and report I/O do.
    pub fn run<W: Write>(&self, preset: QualityPreset, out: &mut W) -> Result<RunStats> {
        let files = find_pdfs(&self.config.working_dir)?;
        log::info!("found {} PDF file(s) in {}", files.len(), self.config.working_dir.display());

        let mut stats = RunStats::default();

        if files.is_empty() {
            writeln!(out, "ℹ️  No PDF files found in {}", self.config.working_dir.display())?;
            return Ok(stats);
        }

        let output_dir = self.config.resolved_output_dir();
        if !output_dir.is_dir() {
            fs::create_dir_all(&output_dir)?;
            writeln!(out, "📁 Created output directory: {}", output_dir.display())?;
        }

        writeln!(out, "{}", "─".repeat(60))?;

        for input in &files {
            let outcome = self.compress_one(input, &output_dir, preset);
            Self::report_file(&outcome, out)?;
            stats.record(&outcome);
        }

        Self::report_summary(&stats, out)?;
        Ok(stats)
    }

    /// Compress a single file and capture what happened.
    fn compress_one(&self, input: &Path, output_dir: &Path, preset: QualityPreset) -> FileOutcome {
        let output = output_path_for(input, output_dir, &self.config.suffix);

        let input_size = match fs::metadata(input) {
            Ok(m) => m.len(),
            Err(e) => {
                return FileOutcome {
                    input: input.to_path_buf(),
                    output,
                    input_size: 0,
                    result: Err(format!("cannot read file size: {e}")),
                };
            }
        };

        let result = self
            .backend
            .compress(input, &output, preset)
            .and_then(|()| Ok(fs::metadata(&output)?.len()))
            .map_err(|e| e.to_string());

        if let Err(ref e) = result {
            log::warn!("{e}");
        }

        FileOutcome {
            input: input.to_path_buf(),
            output,
            input_size,
            result,
        }
    }

    fn report_file<W: Write>(outcome: &FileOutcome, out: &mut W) -> Result<()> {
        let name = outcome
            .input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        writeln!(out, "\n📄 {name}")?;
        match outcome.result {
            Ok(output_size) => {
                let saved = outcome.saved().unwrap_or_default();
                let percent = outcome.percent_saved().unwrap_or_default();
                writeln!(out, "   Original:   {}", format_size(outcome.input_size))?;
                writeln!(out, "   Compressed: {}", format_size(output_size))?;
                writeln!(out, "   Saved: {} ({}%)", format_saved(saved), percent)?;
                writeln!(out, "   ✅ Written to {}", outcome.output.display())?;
            }
            Err(ref e) => {
                writeln!(out, "   ❌ Error: {e}")?;
            }
        }
        Ok(())
    }

    fn report_summary<W: Write>(stats: &RunStats, out: &mut W) -> Result<()> {
        writeln!(out, "\n{}", "─".repeat(60))?;
        writeln!(out, "📊 Summary:")?;
        writeln!(out, "   • Files processed: {}", stats.files_seen)?;
        writeln!(out, "   • Successful: {}/{}", stats.successes, stats.files_seen)?;
        if stats.failures() > 0 {
            writeln!(out, "   • Failed: {}", stats.failures())?;
        }
        writeln!(out, "   • Total original size: {}", format_size(stats.total_input_bytes))?;
        writeln!(out, "   • Total compressed size: {}", format_size(stats.total_output_bytes))?;
        writeln!(
            out,
            "   • Total saved: {} ({}%)",
            format_saved(stats.saved()),
            stats.percent_saved()
        )?;
        Ok(())
    }
}
