//! Tests for canvas normalization

extern crate std;

use image::{Rgb, RgbImage};

use crate::canvas::{normalize, normalized_edge, resize_exact, ResampleFilter};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);

#[test]
fn test_edge_doubles_past_larger_dimension() {
    std::assert_eq!(normalized_edge(300, 200, 256).unwrap(), 512);
}

#[test]
fn test_edge_is_strictly_greater_than_dimensions() {
    // 256 is not > 256, so the edge must double
    std::assert_eq!(normalized_edge(256, 10, 256).unwrap(), 512);
    std::assert_eq!(normalized_edge(255, 255, 256).unwrap(), 256);
    std::assert_eq!(normalized_edge(10, 1024, 256).unwrap(), 2048);
}

#[test]
fn test_edge_is_minimal_power_of_two_multiple() {
    for &(w, h) in &[(1u32, 1u32), (300, 200), (511, 3), (512, 512), (1000, 2500)] {
        let edge = normalized_edge(w, h, 256).unwrap();
        std::assert!(edge > w && edge > h);
        std::assert!((edge / 256).is_power_of_two());
        std::assert_eq!(edge % 256, 0);
        if edge > 256 {
            let half = edge / 2;
            std::assert!(half <= w || half <= h, "edge {} not minimal for {}x{}", edge, w, h);
        }
    }
}

#[test]
fn test_zero_tile_size_is_rejected() {
    std::assert!(normalized_edge(10, 10, 0).is_err());
}

#[test]
fn test_source_is_centered_with_floor_offset() {
    // 11 x 8 source on a 16 px tile canvas: padding 5 and 8
    let source = RgbImage::from_pixel(11, 8, RED);
    let canvas = normalize(&source, WHITE, 16).unwrap();

    std::assert_eq!(canvas.edge(), 16);
    std::assert_eq!(canvas.offset, (2, 4));
    std::assert_eq!(canvas.source_width, 11);
    std::assert_eq!(canvas.source_height, 8);

    // left margin two pixels, right margin three
    std::assert_eq!(*canvas.image.get_pixel(1, 5), WHITE);
    std::assert_eq!(*canvas.image.get_pixel(2, 5), RED);
    std::assert_eq!(*canvas.image.get_pixel(12, 5), RED);
    std::assert_eq!(*canvas.image.get_pixel(13, 5), WHITE);

    std::assert_eq!(*canvas.image.get_pixel(5, 3), WHITE);
    std::assert_eq!(*canvas.image.get_pixel(5, 4), RED);
    std::assert_eq!(*canvas.image.get_pixel(5, 11), RED);
    std::assert_eq!(*canvas.image.get_pixel(5, 12), WHITE);
}

#[test]
fn test_source_is_not_modified() {
    let source = RgbImage::from_pixel(4, 4, RED);
    let copy = source.clone();
    let _ = normalize(&source, WHITE, 8).unwrap();
    std::assert_eq!(source, copy);
}

#[test]
fn test_scale_exponent() {
    let source = RgbImage::from_pixel(300, 200, RED);
    let canvas = normalize(&source, WHITE, 256).unwrap();
    std::assert_eq!(canvas.scale_exponent(), 1);
}

#[test]
fn test_identity_resize_is_a_copy() {
    let mut source = RgbImage::from_pixel(8, 8, WHITE);
    source.put_pixel(3, 3, RED);
    let resized = resize_exact(&source, 8, 8, ResampleFilter::Lanczos3);
    std::assert_eq!(resized, source);
}

#[test]
fn test_filter_names_round_trip() {
    for filter in [ResampleFilter::Nearest, ResampleFilter::Triangle, ResampleFilter::CatmullRom,
                   ResampleFilter::Gaussian, ResampleFilter::Lanczos3] {
        std::assert_eq!(ResampleFilter::from_name(filter.name()).unwrap(), filter);
    }
    std::assert!(ResampleFilter::from_name("sinc").is_err());
}
