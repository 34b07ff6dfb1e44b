use std::path::Path;

use clap::Parser;
use planner::CourseId;
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "Show one course and its prerequisites")]
pub struct Show {
    /// The course number to look up (case-insensitive)
    #[clap(value_parser = super::parse_course_id)]
    id: CourseId,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "pretty")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl Show {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, file: &Path) -> anyhow::Result<()> {
        let (catalog, _report) = super::load_catalog(file)?;

        let Some(course) = catalog.get(&self.id) else {
            println!("Course {} not found.", self.id);
            std::process::exit(1);
        };

        match self.output {
            OutputFormat::Pretty => {
                println!("{}, {}", course.id(), course.title());

                if course.prerequisites().is_empty() {
                    println!("Prerequisites: None");
                } else {
                    let prerequisites = course
                        .prerequisites()
                        .iter()
                        .map(CourseId::as_str)
                        .collect::<Vec<_>>()
                        .join(", ");
                    println!("Prerequisites: {prerequisites}");
                }
            }
            OutputFormat::Json => {
                use serde_json::json;

                let prerequisites: Vec<_> =
                    course.prerequisites().iter().map(CourseId::as_str).collect();

                let output = json!({
                    "number": course.id().as_str(),
                    "title": course.title(),
                    "prerequisites": prerequisites,
                });

                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }

        Ok(())
    }
}
