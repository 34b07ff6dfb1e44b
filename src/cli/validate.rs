use std::path::Path;

use clap::Parser;
use planner::{Catalog, LoadError, LoadReport, storage};
use tracing::instrument;

use super::terminal::Colorize;

#[derive(Debug, Parser)]
#[command(about = "Check a course file for format and prerequisite issues")]
pub struct Validate {
    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,

    /// Suppress all output except errors
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
    Summary,
}

impl Validate {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, file: &Path) -> anyhow::Result<()> {
        let mut catalog = Catalog::new();

        // An empty result is still worth a full report; only an unreadable
        // file aborts before any checking happened.
        let (report, empty) = match storage::load_path(file, &mut catalog) {
            Ok(report) => (report, false),
            Err(LoadError::Empty(report)) => (report, true),
            Err(err) => return Err(err.into()),
        };

        match self.output {
            OutputFormat::Table => self.output_table(&report, empty),
            OutputFormat::Json => Self::output_json(&report, empty)?,
            OutputFormat::Summary => Self::output_summary(&report, empty),
        }

        if empty || !report.is_clean() {
            std::process::exit(2);
        }

        Ok(())
    }

    fn output_table(&self, report: &LoadReport, empty: bool) {
        if self.quiet {
            return;
        }

        println!("Checking course file...\n");

        if empty {
            println!("{}", "✗ Courses:        no valid courses loaded".warning());
        } else {
            println!("✓ Courses:        {} loaded", report.loaded);
        }

        if report.format_errors.is_empty() {
            println!("✓ Format:         all lines parsed");
        } else {
            println!(
                "{}",
                format!("✗ Format:         {} malformed lines", report.format_errors.len())
                    .warning()
            );
            for error in &report.format_errors {
                println!("  • {error}");
            }
        }

        if report.violations.is_empty() {
            println!("✓ Prerequisites:  all references resolve");
        } else {
            println!(
                "{}",
                format!(
                    "✗ Prerequisites:  {} unresolved references",
                    report.violations.len()
                )
                .warning()
            );
            for violation in &report.violations {
                println!("  • {violation}");
            }
        }

        let total = Self::count_issues(report, empty);
        if total == 0 {
            println!("\n{}", "Course file is healthy (0 issues)".success());
        } else {
            println!("\n{}", format!("Summary: {total} issues found").warning());
        }
    }

    fn output_json(report: &LoadReport, empty: bool) -> anyhow::Result<()> {
        use serde_json::json;

        let format_errors: Vec<_> = report
            .format_errors
            .iter()
            .map(|error| {
                json!({
                    "line": error.line,
                    "reason": error.reason.to_string(),
                })
            })
            .collect();

        let violations: Vec<_> = report
            .violations
            .iter()
            .map(|violation| {
                json!({
                    "line": violation.source_line,
                    "course": violation.course.as_str(),
                    "missing": violation.missing.as_str(),
                })
            })
            .collect();

        let total = Self::count_issues(report, empty);

        let output = json!({
            "status": if total == 0 { "healthy" } else { "issues_found" },
            "loaded": report.loaded,
            "issues": {
                "empty": empty,
                "format": format_errors,
                "prerequisites": violations,
            },
            "summary": {
                "total_issues": total,
            }
        });

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_summary(report: &LoadReport, empty: bool) {
        let total = Self::count_issues(report, empty);
        println!("issues={total}");
    }

    fn count_issues(report: &LoadReport, empty: bool) -> usize {
        report.format_errors.len() + report.violations.len() + usize::from(empty)
    }
}
