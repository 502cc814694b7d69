//! Configuration assembled from the command line
//!
//! Defaults, then the `--config` file, then individual flags.

use std::path::PathBuf;
use std::str::FromStr;
use clap::ArgMatches;
use log::debug;

use crate::canvas::ResampleFilter;
use crate::features::{BlurMethod, ChannelOrder, ContourMode};
use crate::pipeline::RunRequest;
use crate::plan::config::PipelineConfig;
use crate::plan::errors::{PlanError, PlanResult};
use crate::utils::parse_utils::parse_triple;

fn parse_flag<T: FromStr>(args: &ArgMatches, id: &str) -> PlanResult<Option<T>> {
    match args.get_one::<String>(id) {
        Some(raw) => raw.trim().parse::<T>()
            .map(Some)
            .map_err(|_| PlanError::InvalidConfig(format!("Invalid value for --{}: {}", id, raw))),
        None => Ok(None),
    }
}

fn flag_str<'a>(args: &'a ArgMatches, id: &str) -> Option<&'a str> {
    args.get_one::<String>(id).map(String::as_str)
}

/// Build the run configuration from parsed arguments
///
/// # Arguments
/// * `args` - CLI argument matches from clap
///
/// # Returns
/// The validated configuration
pub fn config_from_args(args: &ArgMatches) -> PlanResult<PipelineConfig> {
    let mut config = match flag_str(args, "config") {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };

    if let Some(folder) = flag_str(args, "output-folder") {
        config.output_folder = PathBuf::from(folder);
    }
    if let Some(zoom) = parse_flag(args, "zoom-limit")? {
        config.zoom_limit = zoom;
    }
    if let Some(size) = parse_flag(args, "tile-size")? {
        config.tile_size = size;
    }
    if let Some(color) = flag_str(args, "background-color") {
        config.background_color = parse_triple(color)?;
    }
    if let Some(filter) = flag_str(args, "resample-filter") {
        config.resample_filter = ResampleFilter::from_name(filter)?;
    }
    if let Some(kernel) = parse_flag(args, "kernel-size")? {
        config.kernel_size = kernel;
    }
    if let Some(method) = flag_str(args, "blur-method") {
        config.blur_method = BlurMethod::from_name(method)?;
    }
    if args.get_flag("no-double-smooth") {
        config.double_smooth_mask = false;
    }
    if let Some(order) = flag_str(args, "hue-channel-order") {
        config.hue_channel_order = ChannelOrder::from_name(order)?;
    }
    if let Some(lower) = flag_str(args, "hsv-lower") {
        config.hsv_lower = parse_triple(lower)?;
    }
    if let Some(upper) = flag_str(args, "hsv-upper") {
        config.hsv_upper = parse_triple(upper)?;
    }
    if let Some(factor) = parse_flag(args, "smooth-zoom-factor")? {
        config.smooth_zoom_factor = factor;
    }
    if let Some(mode) = flag_str(args, "contour-mode") {
        config.contour_mode = ContourMode::from_name(mode)?;
    }
    if let Some(epsilon) = parse_flag(args, "simplify-epsilon")? {
        config.simplify_epsilon = epsilon;
    }
    if args.get_flag("save-mask") {
        config.save_mask_debug = true;
    }

    config.validate()?;
    debug!("Effective configuration: {:?}", config);
    Ok(config)
}

/// Artifacts requested by the mode flags; tiles when none is given
pub fn request_from_args(args: &ArgMatches) -> PlanResult<RunRequest> {
    let input = flag_str(args, "input")
        .ok_or_else(|| PlanError::MissingInput("no input file given".to_string()))?;

    let all = args.get_flag("all");
    let mut request = RunRequest {
        input: Some(PathBuf::from(input)),
        marked: flag_str(args, "marked").map(PathBuf::from),
        tiles: all || args.get_flag("tiles"),
        points: all || args.get_flag("points"),
        polygons: all || args.get_flag("polygons"),
    };

    if !request.tiles && !request.wants_features() {
        request.tiles = true;
    }
    Ok(request)
}
