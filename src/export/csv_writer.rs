//! Point feature table
//!
//! One row per centroid, in detection order, preceded by the header
//! `Lat,Long,x,y`.

use std::io::Write;
use std::path::Path;
use log::info;

use crate::coordinate::GeoCoordinateMapper;
use crate::plan::errors::PlanResult;
use crate::plan::types::Centroid;
use crate::utils::fs_utils::write_atomically;

/// Header row of the point table
pub const CSV_HEADER: &str = "Lat,Long,x,y";

/// Write the point table to any writer
///
/// # Arguments
/// * `writer` - Destination
/// * `centroids` - Point features in detection order
/// * `mapper` - Mapper built for the canvas the centroids were measured on
///
/// # Returns
/// The number of data rows written
pub fn write_points_csv<W: Write>(mut writer: W,
                                  centroids: &[Centroid],
                                  mapper: &GeoCoordinateMapper) -> PlanResult<usize> {
    writeln!(writer, "{}", CSV_HEADER)?;

    for centroid in centroids {
        let geo = mapper.map_point(*centroid);
        writeln!(writer, "{},{},{},{}", geo.latitude, geo.longitude, centroid.x, centroid.y)?;
    }

    Ok(centroids.len())
}

/// Write the point table to `path`, replacing any previous file only on success
pub fn save_points_csv(path: &Path,
                       centroids: &[Centroid],
                       mapper: &GeoCoordinateMapper) -> PlanResult<usize> {
    let mut rows = 0;
    write_atomically(path, |writer| {
        rows = write_points_csv(writer, centroids, mapper)?;
        Ok(())
    })?;

    info!("Saved {} points to {}", rows, path.display());
    Ok(rows)
}
