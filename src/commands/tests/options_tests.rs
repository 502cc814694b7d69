extern crate std;

use std::path::PathBuf;

use crate::commands::cli::build_cli;
use crate::commands::options::{config_from_args, request_from_args};
use crate::features::{BlurMethod, ContourMode};
use crate::plan::errors::PlanError;

fn parse(args: &[&str]) -> clap::ArgMatches {
    let mut argv = vec!["plantiles"];
    argv.extend_from_slice(args);
    build_cli().try_get_matches_from(argv).unwrap()
}

#[test]
fn test_flags_override_defaults() {
    let args = parse(&[
        "plan.png", "--zoom-limit", "2", "--tile-size", "128", "--blur-method", "box",
        "--hsv-lower", "(100, 50, 50)", "--contour-mode", "simplified",
        "--no-double-smooth", "--save-mask", "-o", "tiles",
    ]);

    let config = config_from_args(&args).unwrap();
    std::assert_eq!(config.zoom_limit, 2);
    std::assert_eq!(config.tile_size, 128);
    std::assert_eq!(config.blur_method, BlurMethod::BoxAverage);
    std::assert_eq!(config.hsv_lower, [100, 50, 50]);
    std::assert_eq!(config.contour_mode, ContourMode::Simplified);
    std::assert!(!config.double_smooth_mask);
    std::assert!(config.save_mask_debug);
    std::assert_eq!(config.output_folder, PathBuf::from("tiles"));
}

#[test]
fn test_flags_win_over_config_file() {
    let dir = std::env::temp_dir().join(format!("plantiles_cli_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("plan.toml");
    std::fs::write(&path, "zoom_limit = 1\nkernel_size = 7\n").unwrap();

    let args = parse(&["plan.png", "--config", path.to_str().unwrap(), "--zoom-limit", "3"]);
    let config = config_from_args(&args).unwrap();

    std::assert_eq!(config.zoom_limit, 3);
    std::assert_eq!(config.kernel_size, 7);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_bad_flag_value_is_rejected() {
    let args = parse(&["plan.png", "--tile-size", "huge"]);
    std::assert!(std::matches!(config_from_args(&args), Err(PlanError::InvalidConfig(_))));

    let args = parse(&["plan.png", "--kernel-size", "4"]);
    std::assert!(std::matches!(config_from_args(&args), Err(PlanError::InvalidConfig(_))));
}

#[test]
fn test_missing_config_file_is_reported() {
    let args = parse(&["plan.png", "--config", "/no/such/plan.toml"]);
    std::assert!(std::matches!(config_from_args(&args), Err(PlanError::ConfigParse(_))));
}

#[test]
fn test_request_defaults_to_tiles() {
    let request = request_from_args(&parse(&["plan.png"])).unwrap();
    std::assert!(request.tiles);
    std::assert!(!request.wants_features());
}

#[test]
fn test_all_requests_everything() {
    let request = request_from_args(&parse(&["plan.png", "--all", "--marked", "marked.png"])).unwrap();
    std::assert!(request.tiles && request.points && request.polygons);
    std::assert_eq!(request.marked, Some(PathBuf::from("marked.png")));
}
