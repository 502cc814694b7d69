//! Tests for marker mask extraction

extern crate std;

use image::{GrayImage, Luma, Rgb, RgbImage};

use crate::features::hsv::{ChannelOrder, HsvRange};
use crate::features::mask::{ColorMaskExtractor, MaskSettings};
use crate::features::smoothing::{kernel_radius, BlurMethod};
use crate::features::tests::mask_with_rects;

fn canvas_with_red_square() -> RgbImage {
    let mut canvas = RgbImage::from_pixel(32, 32, Rgb([255, 255, 255]));
    for y in 10..20 {
        for x in 12..22 {
            canvas.put_pixel(x, y, Rgb([255, 0, 0]));
        }
    }
    canvas
}

#[test]
fn test_default_settings_find_red_square() {
    let extractor = ColorMaskExtractor::new(MaskSettings::default()).unwrap();
    let mask = extractor.extract(&canvas_with_red_square()).unwrap();

    std::assert_eq!(mask.reference_size(), (32, 32));
    std::assert_eq!(mask.mask.get_pixel(16, 14)[0], 255);
    std::assert_eq!(mask.mask.get_pixel(2, 2)[0], 0);

    for (x, y, pixel) in mask.mask.enumerate_pixels() {
        if pixel[0] != 0 {
            std::assert!((12..22).contains(&x) && (10..20).contains(&y),
                         "foreground outside the marker at ({}, {})", x, y);
        }
    }
}

#[test]
fn test_rgb_reading_ignores_red_with_default_bounds() {
    let settings = MaskSettings {
        channel_order: ChannelOrder::Rgb,
        ..MaskSettings::default()
    };
    let mask = ColorMaskExtractor::new(settings).unwrap().extract(&canvas_with_red_square()).unwrap();
    std::assert_eq!(mask.foreground_count(), 0);
}

#[test]
fn test_smooth_zoom_scales_reference_size() {
    let settings = MaskSettings {
        smooth_zoom_factor: 2,
        ..MaskSettings::default()
    };
    let mask = ColorMaskExtractor::new(settings).unwrap().extract(&canvas_with_red_square()).unwrap();

    std::assert_eq!(mask.reference_size(), (64, 64));
    std::assert_eq!(mask.smooth_zoom_factor, 2);
    std::assert_eq!(mask.mask.get_pixel(33, 29)[0], 255);
}

/// 24x24 white canvas with a 9x9 red marker and a few stray red pixels
fn canvas_with_speckle(speckle: &[(u32, u32)]) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(24, 24, Rgb([255, 255, 255]));
    for y in 12..21 {
        for x in 12..21 {
            canvas.put_pixel(x, y, Rgb([255, 0, 0]));
        }
    }
    for &(x, y) in speckle {
        canvas.put_pixel(x, y, Rgb([255, 0, 0]));
    }
    canvas
}

fn speckle_pixels(settings: MaskSettings, speckle: &[(u32, u32)]) -> (usize, bool) {
    let mask = ColorMaskExtractor::new(settings).unwrap().extract(&canvas_with_speckle(speckle)).unwrap();
    let stray = mask.mask.enumerate_pixels()
        .filter(|(x, y, p)| *x < 10 && *y < 10 && p[0] != 0)
        .count();
    (stray, mask.mask.get_pixel(16, 16)[0] == 255)
}

#[test]
fn test_second_mask_smoothing_is_optional() {
    // Each stray shape outlives the color smoothing of its method but not
    // the second pass over the mask
    let cases: [(BlurMethod, Vec<(u32, u32)>); 2] = [
        (BlurMethod::Median, vec![(3, 3), (4, 3), (5, 3), (3, 4), (4, 4)]),
        (BlurMethod::BoxAverage, vec![(3, 3), (4, 3), (5, 3), (3, 4), (4, 4), (5, 4), (3, 5), (4, 5)]),
    ];

    for (method, speckle) in cases {
        let single = MaskSettings {
            kernel_size: 3,
            blur_method: method,
            double_smooth: false,
            ..MaskSettings::default()
        };
        let double = MaskSettings { double_smooth: true, ..single.clone() };

        let (stray, marker) = speckle_pixels(single, &speckle);
        std::assert!(stray > 0, "{} without the second pass lost the speckle", method);
        std::assert!(marker);

        let (stray, marker) = speckle_pixels(double, &speckle);
        std::assert_eq!(stray, 0, "{} with the second pass kept the speckle", method);
        std::assert!(marker, "{} lost the marker", method);
    }
}

#[test]
fn test_even_kernel_is_rejected() {
    let settings = MaskSettings {
        kernel_size: 4,
        ..MaskSettings::default()
    };
    std::assert!(ColorMaskExtractor::new(settings).is_err());
    std::assert!(kernel_radius(0).is_err());
    std::assert_eq!(kernel_radius(1).unwrap(), 0);
    std::assert_eq!(kernel_radius(5).unwrap(), 2);
}

#[test]
fn test_zero_zoom_factor_is_rejected() {
    let settings = MaskSettings {
        smooth_zoom_factor: 0,
        ..MaskSettings::default()
    };
    std::assert!(ColorMaskExtractor::new(settings).is_err());
}

#[test]
fn test_inverted_bounds_are_rejected() {
    let settings = MaskSettings {
        range: HsvRange::new([180, 255, 255], [120, 210, 230]),
        ..MaskSettings::default()
    };
    std::assert!(ColorMaskExtractor::new(settings).is_err());
}

#[test]
fn test_mask_smoothing_removes_speckle() {
    let mut mask = mask_with_rects(20, 20, &[(8, 8, 15, 15)]);
    mask.put_pixel(2, 2, Luma([255]));

    for method in [BlurMethod::Median, BlurMethod::BoxAverage] {
        let smoothed = method.smooth_mask(&mask, 3).unwrap();
        std::assert_eq!(smoothed.get_pixel(2, 2)[0], 0, "{} kept the speckle", method);
        std::assert_eq!(smoothed.get_pixel(11, 11)[0], 255, "{} lost the blob", method);
        std::assert!(smoothed.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }
}

#[test]
fn test_box_average_smooths_color() {
    let mut image = RgbImage::from_pixel(5, 5, Rgb([0, 0, 0]));
    image.put_pixel(2, 2, Rgb([90, 180, 255]));

    let smoothed = BlurMethod::BoxAverage.smooth_rgb(&image, 3).unwrap();
    let center = smoothed.get_pixel(2, 2);
    std::assert!(center[0] < 90 && center[1] < 180 && center[2] < 255);
    std::assert!(center[2] > 0);
}

#[test]
fn test_unit_kernel_is_identity() {
    let image = canvas_with_red_square();
    std::assert_eq!(BlurMethod::Median.smooth_rgb(&image, 1).unwrap(), image);

    let mask = GrayImage::from_pixel(3, 3, Luma([255]));
    std::assert_eq!(BlurMethod::BoxAverage.smooth_mask(&mask, 1).unwrap(), mask);
}

#[test]
fn test_blur_method_names() {
    std::assert_eq!(BlurMethod::from_name("median").unwrap(), BlurMethod::Median);
    std::assert_eq!(BlurMethod::from_name("box").unwrap(), BlurMethod::BoxAverage);
    std::assert!(BlurMethod::from_name("gaussian").is_err());
}
