//! Export of the current task view to CSV or JSON.
//!
//! JSON output uses the snapshot field names, so an exported file can be
//! dropped back into the data directory as `tasks.json`. CSV output is a flat
//! table meant for spreadsheets.
//!
//! ```rust,no_run
//! use taskdeck::libs::export::{ExportFormat, Exporter};
//!
//! let exporter = Exporter::new(ExportFormat::Csv, None);
//! exporter.export(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::task::TaskRecord;
use anyhow::Result;
use chrono::Local;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path, writes `taskdeck_export_<timestamp>.<ext>` in the working directory.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("taskdeck_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let extension = match format {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        };
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, extension)));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, tasks: &[&TaskRecord]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(tasks),
            ExportFormat::Json => {
                let json = serde_json::to_string_pretty(tasks)?;
                File::create(&self.output_path)?.write_all(json.as_bytes())?;
                Ok(())
            }
        }
    }

    fn export_csv(&self, tasks: &[&TaskRecord]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["ID", "Title", "Description", "Category", "Priority", "Due Date", "Completed", "Created At", "Completed At"])?;

        for task in tasks {
            wtr.write_record([
                task.id.clone(),
                task.title.clone(),
                task.description.clone(),
                task.category.to_string(),
                task.priority.to_string(),
                task.due_date.map(|d| d.to_string()).unwrap_or_default(),
                task.completed.to_string(),
                task.created_at.to_rfc3339(),
                task.completed_at.map(|at| at.to_rfc3339()).unwrap_or_default(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }
}
