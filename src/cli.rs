use std::path::{Path, PathBuf};

mod list;
mod show;
mod terminal;
mod validate;

use clap::ArgAction;
use list::List;
use planner::{Catalog, CourseId, LoadError, LoadReport, storage};
use show::Show;
use terminal::Colorize;
use validate::Validate;

/// Parse a course number from a string, normalizing it first.
///
/// This is a CLI boundary function: lowercase or whitespace-padded input is
/// accepted and canonicalized before lookup.
fn parse_course_id(s: &str) -> Result<CourseId, String> {
    CourseId::new(s).map_err(|e| e.to_string())
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// The course file to load
    #[arg(short, long, default_value = "courses.csv", global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        self.command.run(&self.file)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// List every course sorted by course number
    List(List),

    /// Show one course and its prerequisites
    Show(Show),

    /// Check a course file for format and prerequisite issues
    Validate(Validate),
}

impl Command {
    fn run(self, file: &Path) -> anyhow::Result<()> {
        match self {
            Self::List(command) => command.run(file),
            Self::Show(command) => command.run(file),
            Self::Validate(command) => command.run(file),
        }
    }
}

/// Loads the course file, echoing load diagnostics to stderr.
///
/// Commands only ever see a fully completed load: an unreadable file or an
/// empty result fails here, so list/show never read a partial catalog.
fn load_catalog(file: &Path) -> anyhow::Result<(Catalog, LoadReport)> {
    let mut catalog = Catalog::new();

    match storage::load_path(file, &mut catalog) {
        Ok(report) => {
            report_diagnostics(&report);
            Ok((catalog, report))
        }
        Err(LoadError::Empty(report)) => {
            report_diagnostics(&report);
            Err(anyhow::anyhow!(
                "no valid courses loaded from {}",
                file.display()
            ))
        }
        Err(err) => Err(err.into()),
    }
}

fn report_diagnostics(report: &LoadReport) {
    for error in &report.format_errors {
        eprintln!("{}", error.to_string().warning());
    }
    for violation in &report.violations {
        eprintln!("{}", violation.to_string().warning());
    }
}
