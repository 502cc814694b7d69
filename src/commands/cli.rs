//! Command-line definition

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the `plantiles` argument parser
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("plantiles")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Maurice Schilpp")
        .about("Tile a floor plan and extract geo-referenced marker features")
        .arg(
            Arg::new("input")
                .help("Floor plan image")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("marked")
                .short('m')
                .long("marked")
                .help("Marked companion image holding the features (defaults to the input)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("tiles")
                .short('t')
                .long("tiles")
                .help("Generate the tile pyramid (default when no mode is given)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("points")
                .short('p')
                .long("points")
                .help("Write marker centroids to output.csv")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("polygons")
                .short('g')
                .long("polygons")
                .help("Write marker outlines to output.kml")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("all")
                .short('a')
                .long("all")
                .help("Tiles, points and polygons in one run")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("grayscale")
                .long("grayscale")
                .help("Write a gray copy of the floor plan as greyscale.png")
                .action(ArgAction::SetTrue)
                .conflicts_with_all(["tiles", "points", "polygons", "all"]),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("output-folder")
                .short('o')
                .long("output-folder")
                .help("Directory receiving tiles and documents")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("zoom-limit")
                .short('z')
                .long("zoom-limit")
                .help("Top zoom level, inclusive")
                .value_name("LEVEL"),
        )
        .arg(
            Arg::new("tile-size")
                .long("tile-size")
                .help("Tile edge in pixels")
                .value_name("PIXELS"),
        )
        .arg(
            Arg::new("background-color")
                .long("background-color")
                .help("Canvas padding color as 'r,g,b'")
                .value_name("R,G,B"),
        )
        .arg(
            Arg::new("resample-filter")
                .long("resample-filter")
                .help("Resampling filter (nearest, triangle, catmull-rom, gaussian, lanczos3)")
                .value_name("FILTER"),
        )
        .arg(
            Arg::new("kernel-size")
                .long("kernel-size")
                .help("Odd smoothing aperture")
                .value_name("PIXELS"),
        )
        .arg(
            Arg::new("blur-method")
                .long("blur-method")
                .help("Smoothing filter (median or box)")
                .value_name("METHOD"),
        )
        .arg(
            Arg::new("no-double-smooth")
                .long("no-double-smooth")
                .help("Do not smooth the binary mask a second time")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("hue-channel-order")
                .long("hue-channel-order")
                .help("Channel reading for the hue conversion (bgr or rgb)")
                .value_name("ORDER"),
        )
        .arg(
            Arg::new("hsv-lower")
                .long("hsv-lower")
                .help("Inclusive lower HSV bound as 'h,s,v'")
                .value_name("H,S,V"),
        )
        .arg(
            Arg::new("hsv-upper")
                .long("hsv-upper")
                .help("Inclusive upper HSV bound as 'h,s,v'")
                .value_name("H,S,V"),
        )
        .arg(
            Arg::new("smooth-zoom-factor")
                .long("smooth-zoom-factor")
                .help("Integer upscale applied before masking")
                .value_name("FACTOR"),
        )
        .arg(
            Arg::new("contour-mode")
                .long("contour-mode")
                .help("Polygon tracing (raw or simplified)")
                .value_name("MODE"),
        )
        .arg(
            Arg::new("simplify-epsilon")
                .long("simplify-epsilon")
                .help("Douglas-Peucker tolerance for simplified contours")
                .value_name("PIXELS"),
        )
        .arg(
            Arg::new("save-mask")
                .long("save-mask")
                .help("Also write the marker mask as generated_mask.png")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("progress")
                .long("progress")
                .help("Show a progress bar while tiling")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Operation log file")
                .value_name("FILE")
                .default_value("plantiles.log"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
