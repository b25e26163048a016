use crate::{CompressError, QualityPreset, Result};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

// ── CompressionBackend ───────────────────────────────────────────────────────

/// Something that rewrites one PDF into a smaller one.
///
/// [`Ghostscript`] is the production implementation; the batch loop only
/// depends on this trait.
pub trait CompressionBackend {
    /// Compress `input` into `output` using `preset`.
    ///
    /// Blocks until the work is done. An `Err` fails this one file only.
    fn compress(&self, input: &Path, output: &Path, preset: QualityPreset) -> Result<()>;
}

impl<B: CompressionBackend + ?Sized> CompressionBackend for &B {
    fn compress(&self, input: &Path, output: &Path, preset: QualityPreset) -> Result<()> {
        (**self).compress(input, output, preset)
    }
}

// ── Ghostscript ──────────────────────────────────────────────────────────────

/// The external Ghostscript binary, located and checked up front.
#[derive(Debug, Clone)]
pub struct Ghostscript {
    binary: PathBuf,
}

impl Ghostscript {
    /// Preflight check: the binary must exist at `path` and be executable.
    ///
    /// Returns [`CompressError::MissingDependency`] otherwise.
    pub fn locate<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !is_executable(path) {
            return Err(CompressError::MissingDependency {
                path: path.to_path_buf(),
            });
        }
        Ok(Self {
            binary: path.to_path_buf(),
        })
    }

    /// The path that passed the preflight check.
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// The full argument list passed to the binary for one file.
    pub fn arguments(input: &Path, output: &Path, preset: QualityPreset) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "-sDEVICE=pdfwrite".to_string(),
            "-dCompatibilityLevel=1.4".to_string(),
            format!("-dPDFSETTINGS=/{}", preset.tag()),
            "-dNOPAUSE".to_string(),
            "-dQUIET".to_string(),
            "-dBATCH".to_string(),
            "-dColorImageResolution=300".to_string(),
            "-dGrayImageResolution=300".to_string(),
            "-dMonoImageResolution=1200".to_string(),
            "-dColorImageDownsampleType=/Bicubic".to_string(),
            "-dGrayImageDownsampleType=/Bicubic".to_string(),
            "-dMonoImageDownsampleType=/Bicubic".to_string(),
            "-dOptimize=true".to_string(),
        ]
        .into_iter()
        .map(OsString::from)
        .collect();

        let mut output_flag = OsString::from("-sOutputFile=");
        output_flag.push(output.as_os_str());
        args.push(output_flag);
        args.push(input.as_os_str().to_os_string());
        args
    }
}

impl CompressionBackend for Ghostscript {
    fn compress(&self, input: &Path, output: &Path, preset: QualityPreset) -> Result<()> {
        let args = Self::arguments(input, output, preset);
        log::debug!("running {} {:?}", self.binary.display(), args);

        let status = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .status()
            .map_err(|source| CompressError::ToolSpawn {
                file: input.to_path_buf(),
                source,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(CompressError::ToolFailed {
                file: input.to_path_buf(),
                status,
            })
        }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_binary_fails_preflight() {
        let dir = tempfile::tempdir().unwrap();
        let err = Ghostscript::locate(dir.path().join("gs")).unwrap_err();
        assert!(matches!(err, CompressError::MissingDependency { .. }));
    }

    #[test]
    fn directory_is_not_a_binary() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Ghostscript::locate(dir.path()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_file_fails_preflight() {
        let dir = tempfile::tempdir().unwrap();
        let fake = dir.path().join("gs");
        fs::write(&fake, b"#!/bin/sh\n").unwrap();
        assert!(Ghostscript::locate(&fake).is_err());
    }

    #[test]
    fn arguments_follow_fixed_layout() {
        let args = Ghostscript::arguments(
            Path::new("in.pdf"),
            Path::new("compressed/in_compressed.pdf"),
            QualityPreset::Screen,
        );
        let args: Vec<String> = args
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect();

        assert_eq!(args[0], "-sDEVICE=pdfwrite");
        assert!(args.contains(&"-dCompatibilityLevel=1.4".to_string()));
        assert!(args.contains(&"-dPDFSETTINGS=/screen".to_string()));
        assert!(args.contains(&"-dMonoImageResolution=1200".to_string()));
        assert!(args.contains(&"-dColorImageDownsampleType=/Bicubic".to_string()));
        assert!(args.contains(&"-dOptimize=true".to_string()));
        assert_eq!(
            args[args.len() - 2],
            "-sOutputFile=compressed/in_compressed.pdf"
        );
        assert_eq!(args[args.len() - 1], "in.pdf");
    }

    #[test]
    fn each_preset_changes_only_pdfsettings() {
        let base = Ghostscript::arguments(
            Path::new("a.pdf"),
            Path::new("b.pdf"),
            QualityPreset::Prepress,
        );
        for preset in QualityPreset::ALL {
            let args = Ghostscript::arguments(Path::new("a.pdf"), Path::new("b.pdf"), preset);
            let differing: Vec<_> = base
                .iter()
                .zip(&args)
                .filter(|(a, b)| a != b)
                .map(|(_, b)| b.to_string_lossy().into_owned())
                .collect();
            if preset == QualityPreset::Prepress {
                assert!(differing.is_empty());
            } else {
                assert_eq!(differing, [format!("-dPDFSETTINGS=/{}", preset.tag())]);
            }
        }
    }
}
