//! Tests for connected component centroids

extern crate std;

use image::{GrayImage, Luma};

use crate::features::components::locate_centroids;
use crate::features::mask::ColorMask;
use crate::features::tests::mask_with_rects;
use crate::plan::types::Centroid;

#[test]
fn test_empty_mask_has_no_centroids() {
    let mask = ColorMask::from_binary(GrayImage::new(16, 16));
    std::assert!(locate_centroids(&mask).is_empty());
}

#[test]
fn test_centroids_in_raster_order() {
    let mask = ColorMask::from_binary(mask_with_rects(32, 32, &[
        (2, 2, 4, 4),
        (10, 1, 13, 2),
        (20, 20, 22, 22),
    ]));

    let centroids = locate_centroids(&mask);

    std::assert_eq!(centroids, vec![
        Centroid::new(11, 1),
        Centroid::new(3, 3),
        Centroid::new(21, 21),
    ]);
}

#[test]
fn test_diagonal_neighbors_form_one_component() {
    let mut image = GrayImage::new(10, 10);
    image.put_pixel(5, 5, Luma([255]));
    image.put_pixel(6, 6, Luma([255]));
    image.put_pixel(7, 7, Luma([255]));

    let centroids = locate_centroids(&ColorMask::from_binary(image));
    std::assert_eq!(centroids, vec![Centroid::new(6, 6)]);
}

#[test]
fn test_touching_blobs_merge() {
    let mask = ColorMask::from_binary(mask_with_rects(20, 20, &[(2, 2, 5, 5), (6, 2, 9, 5)]));
    std::assert_eq!(locate_centroids(&mask).len(), 1);
}

#[test]
fn test_one_centroid_per_disjoint_blob() {
    let rects: Vec<(u32, u32, u32, u32)> = (0..6)
        .map(|i| (i * 6 + 1, (i % 2) * 10 + 1, i * 6 + 3, (i % 2) * 10 + 4))
        .collect();
    let mask = ColorMask::from_binary(mask_with_rects(40, 20, &rects));

    std::assert_eq!(locate_centroids(&mask).len(), rects.len());
}
