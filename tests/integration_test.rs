//! End-to-end tests through the public API

extern crate std;

use std::path::PathBuf;
use image::{Rgb, RgbImage};

use plantiles::export::RunSummary;
use plantiles::features::ContourMode;
use plantiles::tiles::TileAddress;
use plantiles::utils::logger::Logger;
use plantiles::{PipelineConfig, PlanError, PlanTiles};

const MARKER: Rgb<u8> = Rgb([255, 0, 0]);

/// 300x200 light floor plan with three painted marker rooms
fn floor_plan() -> RgbImage {
    let mut plan = RgbImage::from_pixel(300, 200, Rgb([235, 235, 235]));
    for (x0, y0, w, h) in [(20u32, 20u32, 40u32, 30u32), (150, 60, 25, 25), (220, 140, 50, 40)] {
        for y in y0..y0 + h {
            for x in x0..x0 + w {
                plan.put_pixel(x, y, MARKER);
            }
        }
    }
    plan
}

fn workspace(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("plantiles_it_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn api(output: PathBuf, zoom_limit: u32) -> PlanTiles {
    let mut config = PipelineConfig::default();
    config.zoom_limit = zoom_limit;
    config.output_folder = output;
    PlanTiles::with_logger(config, Logger::null()).unwrap()
}

#[test]
fn test_full_pipeline_on_disk() {
    let dir = workspace("full");
    let input = dir.join("plan.png");
    floor_plan().save(&input).unwrap();
    let output = dir.join("Output");

    let summary = api(output.clone(), 2).run_pipeline(&input, None::<&str>).unwrap();

    // 300x200 with 256px tiles normalizes to 512
    std::assert_eq!(summary.canvas_edge, Some(512));
    std::assert_eq!(summary.tiles, Some(21));
    std::assert_eq!(summary.points, Some(3));
    std::assert_eq!(summary.polygons, Some(3));

    let tile = image::open(output.join(TileAddress::new(2, 3, 3).file_name())).unwrap();
    std::assert_eq!((tile.width(), tile.height()), (256, 256));

    let csv = std::fs::read_to_string(output.join("output.csv")).unwrap();
    std::assert_eq!(csv.lines().count(), 4);
    let kml = std::fs::read_to_string(output.join("output.kml")).unwrap();
    std::assert_eq!(kml.matches("<Placemark>").count(), 3);

    std::assert_eq!(RunSummary::load(&RunSummary::path_in(&output)).unwrap(), summary);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_runs_are_repeatable() {
    let dir = workspace("repeat");
    let input = dir.join("plan.png");
    floor_plan().save(&input).unwrap();
    let output = dir.join("Output");
    let tiles = api(output.clone(), 1);

    tiles.run_pipeline(&input, None::<&str>).unwrap();
    let first_tile = std::fs::read(output.join("tile_z1_x0_y1.png")).unwrap();
    let first_csv = std::fs::read_to_string(output.join("output.csv")).unwrap();
    let first_kml = std::fs::read_to_string(output.join("output.kml")).unwrap();

    tiles.run_pipeline(&input, None::<&str>).unwrap();
    std::assert_eq!(std::fs::read(output.join("tile_z1_x0_y1.png")).unwrap(), first_tile);
    std::assert_eq!(std::fs::read_to_string(output.join("output.csv")).unwrap(), first_csv);
    std::assert_eq!(std::fs::read_to_string(output.join("output.kml")).unwrap(), first_kml);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_in_memory_features_are_georeferenced() {
    let tiles = api(std::env::temp_dir(), 0);

    let features = tiles.extract_features(&floor_plan()).unwrap();

    std::assert_eq!(features.centroids.len(), 3);
    std::assert_eq!(features.mapper.canvas_size(), (512, 512));
    for point in features.geo_points() {
        std::assert!(point.longitude.abs() <= 20037508);
        std::assert!(point.latitude.abs() <= 20037508);
    }
}

#[test]
fn test_simplified_contours_stay_closed() {
    let raw = api(std::env::temp_dir(), 0).extract_features(&floor_plan()).unwrap();

    let mut config = PipelineConfig::default();
    config.contour_mode = ContourMode::Simplified;
    config.simplify_epsilon = 2.0;
    let tiles = PlanTiles::with_logger(config, Logger::null()).unwrap();
    let simplified = tiles.extract_features(&floor_plan()).unwrap();

    std::assert_eq!(simplified.polygons.len(), 3);
    for (ring, traced) in simplified.polygons.iter().zip(&raw.polygons) {
        std::assert!(ring.is_closed());
        std::assert!(ring.len() < traced.len());
    }
}

#[test]
fn test_in_memory_tiles() {
    let tiles = api(std::env::temp_dir(), 1);
    let sink = tiles.tile_image(&floor_plan()).unwrap();

    std::assert_eq!(sink.len(), 5);
    std::assert!(sink.get(TileAddress::new(1, 1, 0)).is_some());
}

#[test]
fn test_missing_input_is_an_error() {
    let dir = workspace("missing");
    let result = api(dir.join("Output"), 0).generate_tiles(dir.join("nope.png"));

    std::assert!(std::matches!(result, Err(PlanError::MissingInput(_))));
    std::assert!(!RunSummary::path_in(&dir.join("Output")).exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = PipelineConfig::default();
    config.tile_size = 0;
    std::assert!(PlanTiles::with_logger(config, Logger::null()).is_err());
}

#[test]
fn test_grayscale_copy_is_a_marking_backdrop() {
    let dir = workspace("gray");
    let input = dir.join("plan.png");
    floor_plan().save(&input).unwrap();
    let gray_path = dir.join("Output").join("greyscale.png");
    let plantiles = api(dir.join("Output"), 1);

    std::assert_eq!(plantiles.grayscale(&input, &gray_path).unwrap(), (300, 200));

    let gray = image::open(&gray_path).unwrap();
    std::assert_eq!(gray.color(), image::ColorType::L8);

    // the existing red rooms are gone from the gray copy
    let mut marked = gray.to_rgb8();
    std::assert_eq!(plantiles.extract_features(&marked).unwrap().centroids.len(), 0);

    for y in 90..120 {
        for x in 100..130 {
            marked.put_pixel(x, y, MARKER);
        }
    }
    std::assert_eq!(plantiles.extract_features(&marked).unwrap().centroids.len(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}
