//! Feature documents and the run summary

pub mod csv_writer;
pub mod kml_writer;
pub mod summary;
#[cfg(test)]
mod tests;

pub use csv_writer::{save_points_csv, write_points_csv};
pub use kml_writer::{save_polygons_kml, write_polygons_kml};
pub use summary::RunSummary;
