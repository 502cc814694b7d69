//! Terminal run summary
//!
//! `summary.toml` is removed when a run starts and written as the very last
//! step, so its presence marks an output folder whose artifacts are complete.

use std::fs;
use std::path::{Path, PathBuf};
use log::info;

use crate::plan::config::PipelineConfig;
use crate::plan::constants::files;
use crate::plan::errors::{PlanError, PlanResult};
use crate::utils::fs_utils::{remove_if_exists, write_atomically};

/// What one run produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    /// Floor plan image
    pub input: Option<PathBuf>,
    /// Marked companion image
    pub marked: Option<PathBuf>,
    /// Edge of the normalized canvas
    pub canvas_edge: Option<u32>,
    /// Tiles written
    pub tiles: Option<u64>,
    /// Point features written
    pub points: Option<usize>,
    /// Polygon features written
    pub polygons: Option<usize>,
}

impl RunSummary {
    pub fn new() -> Self {
        RunSummary::default()
    }

    /// Location of the summary inside an output folder
    pub fn path_in(output_folder: &Path) -> PathBuf {
        output_folder.join(files::SUMMARY)
    }

    /// Remove the summary left by an earlier run
    pub fn invalidate(output_folder: &Path) -> PlanResult<()> {
        remove_if_exists(&Self::path_in(output_folder))
    }

    /// Render the summary, followed by the configuration it ran with
    pub fn to_toml(&self, config: &PipelineConfig) -> String {
        let mut run = toml::Table::new();
        if let Some(input) = &self.input {
            run.insert("input".into(), toml::Value::String(input.display().to_string()));
        }
        if let Some(marked) = &self.marked {
            run.insert("marked".into(), toml::Value::String(marked.display().to_string()));
        }
        if let Some(edge) = self.canvas_edge {
            run.insert("canvas_edge".into(), toml::Value::Integer(i64::from(edge)));
        }
        if let Some(tiles) = self.tiles {
            run.insert("tiles".into(), toml::Value::Integer(tiles as i64));
        }
        if let Some(points) = self.points {
            run.insert("points".into(), toml::Value::Integer(points as i64));
        }
        if let Some(polygons) = self.polygons {
            run.insert("polygons".into(), toml::Value::Integer(polygons as i64));
        }

        let mut document = toml::Table::new();
        document.insert("run".into(), toml::Value::Table(run));
        document.insert("config".into(), toml::Value::Table(config.to_table()));
        document.to_string()
    }

    /// Write `summary.toml` into the output folder
    pub fn save(&self, output_folder: &Path, config: &PipelineConfig) -> PlanResult<PathBuf> {
        let path = Self::path_in(output_folder);
        let text = self.to_toml(config);
        write_atomically(&path, |writer| {
            use std::io::Write;
            writer.write_all(text.as_bytes())?;
            Ok(())
        })?;

        info!("Run complete, summary written to {}", path.display());
        Ok(path)
    }

    /// Read back the counters of a saved summary
    pub fn load(path: &Path) -> PlanResult<Self> {
        let content = fs::read_to_string(path)?;
        let document: toml::Value = content.parse()
            .map_err(|e| PlanError::ConfigParse(format!("Failed to parse summary: {}", e)))?;

        let run = document.get("run").and_then(|v| v.as_table())
            .ok_or_else(|| PlanError::ConfigParse("Summary has no [run] table".to_string()))?;

        let integer = |key: &str| run.get(key).and_then(|v| v.as_integer());
        let text = |key: &str| run.get(key).and_then(|v| v.as_str()).map(PathBuf::from);

        Ok(RunSummary {
            input: text("input"),
            marked: text("marked"),
            canvas_edge: integer("canvas_edge").and_then(|v| u32::try_from(v).ok()),
            tiles: integer("tiles").and_then(|v| u64::try_from(v).ok()),
            points: integer("points").and_then(|v| usize::try_from(v).ok()),
            polygons: integer("polygons").and_then(|v| usize::try_from(v).ok()),
        })
    }
}
