use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// List the PDF files directly inside `dir`, sorted by file name.
///
/// Matches what a shell `*.pdf` glob would: regular files whose name ends in
/// a lowercase `.pdf`, excluding dot-files. Subdirectories are not searched.
pub fn find_pdfs<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();

    for entry in fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };

        if !is_pdf_name(name) {
            continue;
        }

        // file_type() does not follow symlinks; metadata() does
        if fs::metadata(entry.path()).map(|m| m.is_file()).unwrap_or(false) {
            found.push(entry.path());
        }
    }

    found.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(found)
}

/// The path a compressed copy of `input` is written to:
/// `<output_dir>/<stem><suffix>.pdf`.
///
/// ```
/// # use pdfshrink::output_path_for;
/// # use std::path::Path;
/// let input = Path::new("scans/report.pdf");
/// let out = output_path_for(input, Path::new("compressed"), "_compressed");
/// assert_eq!(out, Path::new("compressed/report_compressed.pdf"));
/// ```
pub fn output_path_for(input: &Path, output_dir: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{stem}{suffix}.pdf"))
}

fn is_pdf_name(name: &str) -> bool {
    !name.starts_with('.') && name.len() > ".pdf".len() && name.ends_with(".pdf")
}
