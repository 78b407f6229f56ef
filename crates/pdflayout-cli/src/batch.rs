//! Directory mode: recursive discovery and per-document isolation.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use pdflayout_core::{DocumentSummary, ExtractConfig, LayoutError, extract_document};
use pdflayout_parse::LopdfDocument;
use tracing::{debug, info, warn};

/// Outcome of one directory run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Output files written, in processing order.
    pub processed: Vec<PathBuf>,
    /// Documents that failed, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} processed, {} failed",
            self.processed.len(),
            self.failed.len()
        )
    }
}

/// Open and extract one document into memory.
pub fn render(path: &Path, config: &ExtractConfig) -> Result<(Vec<u8>, DocumentSummary), LayoutError> {
    let doc = LopdfDocument::open(path)?.with_max_form_depth(config.max_form_depth);
    let mut out = Vec::new();
    let summary = extract_document(&doc, config, &mut out)?;
    Ok((out, summary))
}

/// Output file for `input`: the full input path with `txt` appended.
pub fn output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push("txt");
    PathBuf::from(name)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

/// Every PDF under `dir`, depth first, entries sorted by name.
pub fn discover(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    walk(dir, &mut found)?;
    Ok(found)
}

/// Symbolic links are never descended into; a link to a regular file is
/// processed like the file itself.
fn walk(dir: &Path, found: &mut Vec<PathBuf>) -> io::Result<()> {
    let mut entries = std::fs::read_dir(dir)?
        .map(|entry| entry.and_then(|e| Ok((e.path(), e.file_type()?))))
        .collect::<io::Result<Vec<_>>>()?;
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    for (path, file_type) in entries {
        if file_type.is_dir() {
            walk(&path, found)?;
        } else if is_pdf(&path) && (file_type.is_file() || path.is_file()) {
            found.push(path);
        }
    }
    Ok(())
}

/// Process every PDF under `dir`. A failing document is recorded and
/// skipped; its output file is never created.
pub fn run_directory(
    dir: &Path,
    config: &ExtractConfig,
    mut on_written: impl FnMut(&Path),
) -> io::Result<BatchReport> {
    let inputs = discover(dir)?;
    info!(dir = %dir.display(), documents = inputs.len(), "batch started");

    let mut report = BatchReport::default();
    for input in inputs {
        let result = render(&input, config).map_err(|e| e.to_string()).and_then(|(out, summary)| {
            let target = output_path(&input);
            std::fs::write(&target, out)
                .map_err(|e| format!("failed to write {}: {e}", target.display()))?;
            Ok((target, summary))
        });
        match result {
            Ok((target, summary)) => {
                debug!(
                    input = %input.display(),
                    pages = summary.pages,
                    warnings = summary.warnings.len(),
                    "document written"
                );
                on_written(&target);
                report.processed.push(target);
            }
            Err(reason) => {
                warn!(input = %input.display(), error = %reason, "document failed");
                report.failed.push((input, reason));
            }
        }
    }
    info!(%report, "batch finished");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_appends_txt() {
        assert_eq!(
            output_path(Path::new("/data/a.pdf")),
            PathBuf::from("/data/a.pdftxt")
        );
        assert_eq!(
            output_path(Path::new("docs/Report.PDF")),
            PathBuf::from("docs/Report.PDFtxt")
        );
    }

    #[test]
    fn pdf_extension_is_case_insensitive() {
        assert!(is_pdf(Path::new("a.pdf")));
        assert!(is_pdf(Path::new("a.PdF")));
        assert!(!is_pdf(Path::new("a.pdftxt")));
        assert!(!is_pdf(Path::new("pdf")));
    }

    #[test]
    fn discovery_is_sorted_and_recursive() {
        let dir = tempfile::tempdir().expect("temp dir");
        let nested = dir.path().join("b");
        std::fs::create_dir(&nested).expect("mkdir");
        for path in [
            dir.path().join("c.pdf"),
            dir.path().join("a.PDF"),
            dir.path().join("notes.txt"),
            nested.join("inner.pdf"),
        ] {
            std::fs::write(path, b"").expect("write");
        }
        let found = discover(dir.path()).expect("discover");
        assert_eq!(
            found,
            vec![
                dir.path().join("a.PDF"),
                nested.join("inner.pdf"),
                dir.path().join("c.pdf"),
            ]
        );
    }

    #[cfg(unix)]
    #[test]
    fn discovery_does_not_follow_directory_links() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("a.pdf"), b"").expect("write");
        std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).expect("symlink");
        std::os::unix::fs::symlink(dir.path().join("a.pdf"), dir.path().join("b.pdf"))
            .expect("symlink");
        let found = discover(dir.path()).expect("discover");
        assert_eq!(
            found,
            vec![dir.path().join("a.pdf"), dir.path().join("b.pdf")]
        );
    }

    #[test]
    fn failures_are_isolated() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("broken.pdf"), b"not a pdf").expect("write");
        let config = ExtractConfig::default();
        let report = run_directory(dir.path(), &config, |_| {}).expect("run");
        assert!(!report.is_success());
        assert_eq!(report.failed.len(), 1);
        assert!(report.processed.is_empty());
        assert!(!dir.path().join("broken.pdftxt").exists());
        assert_eq!(report.to_string(), "0 processed, 1 failed");
    }
}
