//! Connected component centroids
//!
//! Each 8-connected foreground region of a mask becomes one point feature
//! located at the region's mean pixel coordinate. Regions that touch merge
//! into a single component.

use std::collections::BTreeMap;
use image::Luma;
use imageproc::region_labelling::{connected_components, Connectivity};
use log::info;

use crate::features::mask::ColorMask;
use crate::plan::constants::marker;
use crate::plan::types::Centroid;

/// Running sums of one labeled region
#[derive(Debug, Default, Clone, Copy)]
struct RegionSums {
    sum_x: u64,
    sum_y: u64,
    count: u64,
}

/// Centroid of every labeled region except the background
///
/// Output order follows the labels, which are handed out in raster-scan
/// order of each region's first pixel. Coordinates are truncated toward
/// zero.
pub fn locate_centroids(mask: &ColorMask) -> Vec<Centroid> {
    let labels = connected_components(&mask.mask, Connectivity::Eight, Luma([marker::BACKGROUND]));

    let mut regions: BTreeMap<u32, RegionSums> = BTreeMap::new();
    for (x, y, label) in labels.enumerate_pixels() {
        let label = label[0];
        if label == 0 {
            continue;
        }
        let sums = regions.entry(label).or_default();
        sums.sum_x += u64::from(x);
        sums.sum_y += u64::from(y);
        sums.count += 1;
    }

    let centroids: Vec<Centroid> = regions
        .values()
        .map(|s| Centroid::new((s.sum_x / s.count) as u32, (s.sum_y / s.count) as u32))
        .collect();

    info!("Located {} marker components", centroids.len());
    centroids
}
