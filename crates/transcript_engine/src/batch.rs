use std::fs;
use std::path::{Path, PathBuf};

use crate::decode::decode_document;
use crate::discover::find_html_files;
use crate::extract::Extractor;
use crate::persist::{ensure_output_dir, write_text_file};
use crate::types::{BatchError, BatchReport, ConversionOutcome, FailureKind, FileOutcome};

/// Settings for one batch conversion run.
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub overwrite: bool,
}

/// Convert every HTML file under `input_dir`, mirroring the relative tree
/// under `output_dir` with a `.txt` extension.
///
/// Per-file failures are recorded in the report and never abort the run.
/// Only the input/output directory preconditions are fatal, and both are
/// checked before any file is touched.
pub fn run_batch(
    options: &BatchOptions,
    extractor: &dyn Extractor,
) -> Result<BatchReport, BatchError> {
    let input_is_dir = fs::metadata(&options.input_dir)
        .map(|meta| meta.is_dir())
        .unwrap_or(false);
    if !input_is_dir {
        return Err(BatchError::InvalidInput(options.input_dir.clone()));
    }
    ensure_output_dir(&options.output_dir)?;

    let mut report = BatchReport::default();
    for source in find_html_files(&options.input_dir) {
        let outcome = convert_file(&source, options, extractor);
        match &outcome.outcome {
            FileOutcome::Converted { output } => {
                log::debug!("converted {} -> {}", source.display(), output.display());
            }
            FileOutcome::Skipped { output } => {
                log::debug!("skipped {} (exists: {})", source.display(), output.display());
            }
            FileOutcome::Failed { kind, message } => {
                log::debug!("{}: {kind}: {message}", source.display());
            }
        }
        report.record(outcome);
    }
    Ok(report)
}

/// Convert one file through the per-file state machine: skipped, read
/// failed, parse failed, write failed, or converted.
pub fn convert_file(
    source: &Path,
    options: &BatchOptions,
    extractor: &dyn Extractor,
) -> ConversionOutcome {
    let output = map_output_path(source, &options.input_dir, &options.output_dir);

    if !options.overwrite && output.exists() {
        return ConversionOutcome {
            source: source.to_path_buf(),
            outcome: FileOutcome::Skipped { output },
        };
    }

    let bytes = match fs::read(source) {
        Ok(bytes) => bytes,
        Err(err) => return failed(source, FailureKind::Read, err.to_string()),
    };
    let decoded = decode_document(&bytes);
    log::trace!("{} decoded as {}", source.display(), decoded.encoding_label);

    let text = match extractor.extract(&decoded.text) {
        Ok(text) => text,
        Err(err) => return failed(source, FailureKind::Parse, err.to_string()),
    };

    let mut content = text;
    content.push('\n');
    if let Err(err) = write_text_file(&output, &content) {
        return failed(source, FailureKind::Write, err.to_string());
    }

    ConversionOutcome {
        source: source.to_path_buf(),
        outcome: FileOutcome::Converted { output },
    }
}

/// Mirror `source` under the output root with a `.txt` extension. A source
/// that cannot be expressed relative to the input root lands directly under
/// the output root by base name.
fn map_output_path(source: &Path, input_root: &Path, output_root: &Path) -> PathBuf {
    let relative = match source.strip_prefix(input_root) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => PathBuf::from(source.file_name().unwrap_or_default()),
    };
    output_root.join(relative).with_extension("txt")
}

fn failed(source: &Path, kind: FailureKind, message: String) -> ConversionOutcome {
    ConversionOutcome {
        source: source.to_path_buf(),
        outcome: FileOutcome::Failed { kind, message },
    }
}

#[cfg(test)]
mod tests {
    use super::map_output_path;
    use std::path::Path;

    #[test]
    fn mirrors_relative_structure_with_txt_extension() {
        let mapped = map_output_path(
            Path::new("/in/a/b.html"),
            Path::new("/in"),
            Path::new("/out"),
        );
        assert_eq!(mapped, Path::new("/out/a/b.txt"));
    }

    #[test]
    fn uppercase_extensions_map_the_same() {
        let mapped = map_output_path(Path::new("/in/x.HTM"), Path::new("/in"), Path::new("/out"));
        assert_eq!(mapped, Path::new("/out/x.txt"));
    }

    #[test]
    fn foreign_paths_flatten_to_base_name() {
        let mapped = map_output_path(
            Path::new("/elsewhere/deep/page.html"),
            Path::new("/in"),
            Path::new("/out"),
        );
        assert_eq!(mapped, Path::new("/out/page.txt"));
    }
}
