use std::path::Path;

use clap::Parser;
use tracing::instrument;

#[derive(Debug, Parser)]
#[command(about = "List every course sorted by course number")]
pub struct List {
    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl List {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, file: &Path) -> anyhow::Result<()> {
        let (catalog, _report) = super::load_catalog(file)?;
        let courses = catalog.sorted();

        match self.output {
            OutputFormat::Table => {
                for course in courses {
                    println!("{}, {}", course.id(), course.title());
                }
            }
            OutputFormat::Json => {
                use serde_json::json;

                let entries: Vec<_> = courses
                    .iter()
                    .map(|course| {
                        json!({
                            "number": course.id().as_str(),
                            "title": course.title(),
                        })
                    })
                    .collect();

                println!("{}", serde_json::to_string_pretty(&entries)?);
            }
        }

        Ok(())
    }
}
