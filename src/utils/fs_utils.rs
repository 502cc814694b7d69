//! Output directory helpers
//!
//! Documents are first written next to their final location with a
//! `.partial` suffix and only renamed into place once fully flushed, so an
//! interrupted run never leaves a complete-looking file behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use log::{debug, warn};

use crate::plan::constants::files;
use crate::plan::errors::{PlanError, PlanResult};
use crate::utils::parse_utils::parse_tile_name;

/// Create the output directory (and parents) if missing
pub fn ensure_dir(path: &Path) -> PlanResult<()> {
    if !path.is_dir() {
        debug!("Creating output directory {}", path.display());
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Path used while `target` is still being written
pub fn partial_path(target: &Path) -> PathBuf {
    let mut name = target.file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(files::PARTIAL_SUFFIX);
    target.with_file_name(name)
}

/// Write a document through a `.partial` file and rename it into place
///
/// # Arguments
/// * `target` - Final path of the document
/// * `write` - Closure producing the document contents
///
/// # Returns
/// Result indicating success or the first error raised while writing
pub fn write_atomically<F>(target: &Path, write: F) -> PlanResult<()>
where
    F: FnOnce(&mut BufWriter<File>) -> PlanResult<()>,
{
    let partial = partial_path(target);
    let mut writer = BufWriter::new(File::create(&partial)?);

    let result = write(&mut writer).and_then(|_| writer.flush().map_err(PlanError::from));
    drop(writer);

    match result {
        Ok(()) => {
            fs::rename(&partial, target)?;
            debug!("Wrote {}", target.display());
            Ok(())
        }
        Err(e) => {
            warn!("Discarding incomplete document {}", partial.display());
            let _ = fs::remove_file(&partial);
            Err(e)
        }
    }
}

/// Delete tile images left in `dir` by an earlier run
///
/// Only files whose names parse as tile addresses are touched.
///
/// # Returns
/// The number of files removed
pub fn remove_stale_tiles(dir: &Path) -> PlanResult<usize> {
    if !dir.is_dir() {
        return Ok(0);
    }

    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let is_tile = entry.file_name()
            .to_str()
            .and_then(parse_tile_name)
            .is_some();

        if is_tile && entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
            removed += 1;
        }
    }

    if removed > 0 {
        debug!("Removed {} stale tiles from {}", removed, dir.display());
    }
    Ok(removed)
}

/// Remove a file if it exists
pub fn remove_if_exists(path: &Path) -> PlanResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
