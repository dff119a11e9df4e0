//! `html-to-txt`: convert a tree of saved HTML transcripts to plain text.

mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use transcript_engine::{default_extractor, run_batch, BatchOptions, BatchReport};

#[derive(Parser)]
#[command(name = "html-to-txt")]
#[command(about = "Convert local HTML files to plain text, preserving directory structure")]
struct Args {
    /// Input directory containing HTML files
    #[arg(long)]
    input: PathBuf,

    /// Output directory for .txt files
    #[arg(long)]
    output: PathBuf,

    /// Overwrite existing .txt files
    #[arg(long)]
    overwrite: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    logging::initialize(logging::LogDestination::Terminal);

    let options = BatchOptions {
        input_dir: args.input,
        output_dir: args.output,
        overwrite: args.overwrite,
    };

    match run_batch(&options, default_extractor()) {
        Ok(report) => {
            for failure in &report.failures {
                eprintln!("[fail] {}: {}", failure.source.display(), failure.message);
            }
            println!("{}", summary_line(&report));
            ExitCode::from(exit_code_for(&report))
        }
        Err(err) => {
            eprintln!("[error] {err}");
            ExitCode::from(2)
        }
    }
}

fn summary_line(report: &BatchReport) -> String {
    format!(
        "Processed: {} | Converted: {} | Skipped: {} | Failures: {}",
        report.total, report.converted, report.skipped, report.failed
    )
}

/// `0` when every file resolved without failure, `1` otherwise. Skips do
/// not affect the exit signal.
fn exit_code_for(report: &BatchReport) -> u8 {
    if report.is_clean() {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::{exit_code_for, summary_line};
    use transcript_engine::{default_extractor, run_batch, BatchOptions, BatchReport};

    #[test]
    fn summary_line_matches_reporting_format() {
        let report = BatchReport {
            total: 4,
            converted: 2,
            skipped: 1,
            failed: 1,
            failures: Vec::new(),
        };
        assert_eq!(
            summary_line(&report),
            "Processed: 4 | Converted: 2 | Skipped: 1 | Failures: 1"
        );
    }

    #[test]
    fn exit_code_reflects_failures_not_skips() {
        let mut report = BatchReport {
            total: 3,
            converted: 0,
            skipped: 3,
            failed: 0,
            failures: Vec::new(),
        };
        assert_eq!(exit_code_for(&report), 0);

        report.failed = 1;
        assert_eq!(exit_code_for(&report), 1);
    }

    #[test]
    fn end_to_end_run_produces_summary_and_success_exit() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = BatchOptions {
            input_dir: temp.path().join("in"),
            output_dir: temp.path().join("out"),
            overwrite: false,
        };
        std::fs::create_dir_all(&options.input_dir).unwrap();
        std::fs::write(options.input_dir.join("hearing.html"), "<p>Testimony</p>").unwrap();

        let report = run_batch(&options, default_extractor()).unwrap();
        assert_eq!(
            summary_line(&report),
            "Processed: 1 | Converted: 1 | Skipped: 0 | Failures: 0"
        );
        assert_eq!(exit_code_for(&report), 0);
    }

    #[test]
    fn missing_input_error_message_names_the_precondition() {
        let temp = tempfile::TempDir::new().unwrap();
        let options = BatchOptions {
            input_dir: temp.path().join("does-not-exist"),
            output_dir: temp.path().join("out"),
            overwrite: false,
        };

        let err = run_batch(&options, default_extractor()).unwrap_err();
        assert!(
            err.to_string()
                .starts_with("input directory not found or not a directory"),
            "{err}"
        );
    }
}
