//! `pdfshrink` — compress every PDF in a directory through Ghostscript.
//!
//! Without `--preset` the quality preset is asked for interactively.

use anyhow::{Context, Result};
use clap::Parser;
use pdfshrink::{
    prompt_preset, BatchCompressor, CompressError, CompressorConfig, Ghostscript, QualityPreset,
    DEFAULT_GHOSTSCRIPT_PATH,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "pdfshrink")]
#[command(
    author,
    version,
    about = "Batch-compress the PDF files of a directory with Ghostscript"
)]
struct Args {
    /// Directory containing the PDFs to compress
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Output directory (relative paths are resolved against --dir)
    #[arg(short, long, default_value = "compressed")]
    output_dir: PathBuf,

    /// Path of the Ghostscript binary
    #[arg(long, default_value = DEFAULT_GHOSTSCRIPT_PATH)]
    ghostscript: PathBuf,

    /// Quality preset (prepress, printer, ebook, screen); prompts when omitted
    #[arg(short, long)]
    preset: Option<QualityPreset>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    if let Err(e) = run(args) {
        eprintln!("\n❌ Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = CompressorConfig {
        ghostscript_path: args.ghostscript,
        working_dir: args.dir,
        output_dir: args.output_dir,
        ..Default::default()
    };

    let gs = match Ghostscript::locate(&config.ghostscript_path) {
        Ok(gs) => gs,
        Err(e @ CompressError::MissingDependency { .. }) => {
            eprintln!("❌ {e}");
            process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    log::info!("using Ghostscript at {}", gs.binary().display());

    let preset = match args.preset {
        Some(preset) => preset,
        None => {
            let stdin = std::io::stdin();
            prompt_preset(&mut stdin.lock(), &mut std::io::stdout())
                .context("Failed to read preset choice")?
        }
    };

    println!("🔍 Compressing PDFs in: {}", config.working_dir.display());

    let batch = BatchCompressor::new(gs, config);
    batch
        .run(preset, &mut std::io::stdout())
        .with_context(|| {
            format!(
                "Batch compression in '{}' failed",
                batch.config().working_dir.display()
            )
        })?;

    Ok(())
}
