//! What a run should produce

use std::path::{Path, PathBuf};

use crate::plan::errors::{PlanError, PlanResult};

/// Inputs and requested artifacts of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunRequest {
    /// Floor plan image, tiled when `tiles` is set
    pub input: Option<PathBuf>,
    /// Marked companion image; features fall back to `input` when absent
    pub marked: Option<PathBuf>,
    pub tiles: bool,
    pub points: bool,
    pub polygons: bool,
}

impl RunRequest {
    /// Tile pyramid of `input`
    pub fn tiles<P: AsRef<Path>>(input: P) -> Self {
        RunRequest {
            input: Some(input.as_ref().to_path_buf()),
            tiles: true,
            ..Default::default()
        }
    }

    /// Point features of `marked`
    pub fn points<P: AsRef<Path>>(marked: P) -> Self {
        RunRequest {
            marked: Some(marked.as_ref().to_path_buf()),
            points: true,
            ..Default::default()
        }
    }

    /// Polygon features of `marked`
    pub fn polygons<P: AsRef<Path>>(marked: P) -> Self {
        RunRequest {
            marked: Some(marked.as_ref().to_path_buf()),
            polygons: true,
            ..Default::default()
        }
    }

    /// Tiles of `input` plus both feature sets of `marked`
    pub fn pipeline<P: AsRef<Path>, Q: AsRef<Path>>(input: P, marked: Option<Q>) -> Self {
        RunRequest {
            input: Some(input.as_ref().to_path_buf()),
            marked: marked.map(|m| m.as_ref().to_path_buf()),
            tiles: true,
            points: true,
            polygons: true,
        }
    }

    /// True when any feature document is requested
    pub fn wants_features(&self) -> bool {
        self.points || self.polygons
    }

    /// Image the features are extracted from
    pub fn feature_source(&self) -> Option<&Path> {
        self.marked.as_deref().or(self.input.as_deref())
    }

    /// Reject requests that cannot produce anything
    pub fn validate(&self) -> PlanResult<()> {
        if !self.tiles && !self.wants_features() {
            return Err(PlanError::InvalidConfig("Nothing to do: no artifact requested".to_string()));
        }
        if self.tiles && self.input.is_none() {
            return Err(PlanError::InvalidConfig("Tiling needs a floor plan image".to_string()));
        }
        if self.wants_features() && self.feature_source().is_none() {
            return Err(PlanError::InvalidConfig("Feature extraction needs a marked image".to_string()));
        }
        Ok(())
    }
}
