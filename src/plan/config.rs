//! Pipeline configuration
//!
//! Every tunable of the tiler and the feature extractor lives in
//! [`PipelineConfig`]. Values start at the defaults below, can be replaced
//! from a TOML file and finally from command-line flags.
//!
//! TOML keys may be written in snake_case (`zoom_limit`) or camelCase
//! (`zoomLimit`). Color triples accept either a string (`"120,210,230"`)
//! or an integer array (`[120, 210, 230]`).

use std::fs;
use std::path::{Path, PathBuf};
use log::{debug, warn};
use image::Rgb;

use crate::canvas::ResampleFilter;
use crate::features::{BlurMethod, ChannelOrder, ContourMode, HsvRange, MaskSettings};
use crate::plan::constants::{files, marker, tiling};
use crate::plan::errors::{PlanError, PlanResult};
use crate::utils::parse_utils::parse_triple;

/// Complete set of options for one run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Top zoom level, inclusive
    pub zoom_limit: u32,
    /// Tile edge in pixels
    pub tile_size: u32,
    /// Canvas padding color
    pub background_color: [u8; 3],
    /// Filter for zoom levels and the smooth zoom
    pub resample_filter: ResampleFilter,
    /// Smoothing aperture, odd
    pub kernel_size: u32,
    pub blur_method: BlurMethod,
    /// Smooth the binary mask a second time
    pub double_smooth_mask: bool,
    pub hue_channel_order: ChannelOrder,
    /// Inclusive lower HSV bound of the marker color
    pub hsv_lower: [u8; 3],
    /// Inclusive upper HSV bound of the marker color
    pub hsv_upper: [u8; 3],
    /// Integer upscale before masking
    pub smooth_zoom_factor: u32,
    pub contour_mode: ContourMode,
    /// Douglas-Peucker tolerance for simplified contours
    pub simplify_epsilon: f64,
    /// Dump the mask next to the outputs
    pub save_mask_debug: bool,
    /// Directory receiving tiles and documents
    pub output_folder: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            zoom_limit: tiling::ZOOM_LIMIT,
            tile_size: tiling::TILE_SIZE,
            background_color: tiling::BACKGROUND_COLOR,
            resample_filter: ResampleFilter::default(),
            kernel_size: marker::KERNEL_SIZE,
            blur_method: BlurMethod::default(),
            double_smooth_mask: true,
            hue_channel_order: ChannelOrder::default(),
            hsv_lower: marker::HSV_LOWER,
            hsv_upper: marker::HSV_UPPER,
            smooth_zoom_factor: 1,
            contour_mode: ContourMode::default(),
            simplify_epsilon: marker::SIMPLIFY_EPSILON,
            save_mask_debug: false,
            output_folder: PathBuf::from(files::OUTPUT_FOLDER),
        }
    }
}

impl PipelineConfig {
    /// Load a configuration file on top of the defaults
    ///
    /// # Arguments
    /// * `path` - Path to a TOML file
    ///
    /// # Returns
    /// The merged configuration, not yet validated
    pub fn from_file<P: AsRef<Path>>(path: P) -> PlanResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            PlanError::ConfigParse(format!("Cannot read {}: {}", path.display(), e))
        })?;

        debug!("Loaded configuration file {}", path.display());
        Self::from_toml_str(&content)
    }

    /// Parse TOML text on top of the defaults
    pub fn from_toml_str(content: &str) -> PlanResult<Self> {
        let mut config = PipelineConfig::default();
        config.merge_toml_str(content)?;
        Ok(config)
    }

    /// Overwrite the fields named in a TOML document
    ///
    /// Unknown keys are reported and skipped; a known key with a value of
    /// the wrong type is an error.
    pub fn merge_toml_str(&mut self, content: &str) -> PlanResult<()> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| PlanError::ConfigParse(format!("Failed to parse TOML: {}", e)))?;

        let table = toml_value.as_table()
            .ok_or_else(|| PlanError::ConfigParse("Configuration must be a table".to_string()))?;

        for (key, value) in table {
            self.apply_key(key, value)?;
        }
        Ok(())
    }

    fn apply_key(&mut self, key: &str, value: &toml::Value) -> PlanResult<()> {
        match normalize_key(key).as_str() {
            "zoomlimit" => self.zoom_limit = read_u32(key, value)?,
            "tilesize" => self.tile_size = read_u32(key, value)?,
            "backgroundcolor" => self.background_color = read_triple(key, value)?,
            "resamplefilter" => self.resample_filter = ResampleFilter::from_name(read_str(key, value)?)?,
            "kernelsize" => self.kernel_size = read_u32(key, value)?,
            "blurmethod" => self.blur_method = BlurMethod::from_name(read_str(key, value)?)?,
            "doublesmoothmask" => self.double_smooth_mask = read_bool(key, value)?,
            "huechannelorder" => self.hue_channel_order = ChannelOrder::from_name(read_str(key, value)?)?,
            "hsvlower" => self.hsv_lower = read_triple(key, value)?,
            "hsvupper" => self.hsv_upper = read_triple(key, value)?,
            "smoothzoomfactor" => self.smooth_zoom_factor = read_u32(key, value)?,
            "contourmode" => self.contour_mode = ContourMode::from_name(read_str(key, value)?)?,
            "simplifyepsilon" => self.simplify_epsilon = read_f64(key, value)?,
            "savemaskdebug" => self.save_mask_debug = read_bool(key, value)?,
            "outputfolder" => self.output_folder = PathBuf::from(read_str(key, value)?),
            _ => warn!("Ignoring unknown configuration key '{}'", key),
        }
        Ok(())
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> PlanResult<()> {
        if self.tile_size == 0 {
            return Err(PlanError::InvalidConfig("Tile size must be positive".to_string()));
        }
        if self.zoom_limit > tiling::MAX_ZOOM_LIMIT {
            return Err(PlanError::InvalidConfig(format!(
                "Zoom limit {} exceeds the maximum of {}", self.zoom_limit, tiling::MAX_ZOOM_LIMIT)));
        }
        if self.tile_size.checked_shl(self.zoom_limit)
            .filter(|size| size >> self.zoom_limit == self.tile_size)
            .is_none()
        {
            return Err(PlanError::InvalidConfig(format!(
                "Tile size {} at zoom {} exceeds the addressable image size", self.tile_size, self.zoom_limit)));
        }
        if !self.simplify_epsilon.is_finite() || self.simplify_epsilon <= 0.0 {
            return Err(PlanError::InvalidConfig(format!(
                "Simplification tolerance must be a positive number, got {}", self.simplify_epsilon)));
        }

        self.mask_settings().validate()
    }

    /// Segmentation parameters derived from this configuration
    pub fn mask_settings(&self) -> MaskSettings {
        MaskSettings {
            kernel_size: self.kernel_size,
            blur_method: self.blur_method,
            double_smooth: self.double_smooth_mask,
            channel_order: self.hue_channel_order,
            range: HsvRange::new(self.hsv_lower, self.hsv_upper),
            smooth_zoom_factor: self.smooth_zoom_factor,
            zoom_filter: self.resample_filter,
        }
    }

    /// Canvas padding as a pixel
    pub fn background(&self) -> Rgb<u8> {
        Rgb(self.background_color)
    }

    /// The configuration as a TOML table, in the layout `merge_toml_str` reads
    pub fn to_table(&self) -> toml::Table {
        let triple = |t: [u8; 3]| toml::Value::Array(t.iter().map(|&c| toml::Value::Integer(i64::from(c))).collect());

        let mut table = toml::Table::new();
        table.insert("zoom_limit".into(), toml::Value::Integer(i64::from(self.zoom_limit)));
        table.insert("tile_size".into(), toml::Value::Integer(i64::from(self.tile_size)));
        table.insert("background_color".into(), triple(self.background_color));
        table.insert("resample_filter".into(), toml::Value::String(self.resample_filter.name().into()));
        table.insert("kernel_size".into(), toml::Value::Integer(i64::from(self.kernel_size)));
        table.insert("blur_method".into(), toml::Value::String(self.blur_method.name().into()));
        table.insert("double_smooth_mask".into(), toml::Value::Boolean(self.double_smooth_mask));
        table.insert("hue_channel_order".into(), toml::Value::String(self.hue_channel_order.name().into()));
        table.insert("hsv_lower".into(), triple(self.hsv_lower));
        table.insert("hsv_upper".into(), triple(self.hsv_upper));
        table.insert("smooth_zoom_factor".into(), toml::Value::Integer(i64::from(self.smooth_zoom_factor)));
        table.insert("contour_mode".into(), toml::Value::String(self.contour_mode.name().into()));
        table.insert("simplify_epsilon".into(), toml::Value::Float(self.simplify_epsilon));
        table.insert("save_mask_debug".into(), toml::Value::Boolean(self.save_mask_debug));
        table.insert("output_folder".into(), toml::Value::String(self.output_folder.display().to_string()));
        table
    }
}

/// `zoom_limit`, `zoomLimit` and `ZoomLimit` all become `zoomlimit`
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

fn type_error(key: &str, expected: &str, value: &toml::Value) -> PlanError {
    PlanError::ConfigParse(format!("Key '{}' expects {}, got {}", key, expected, value.type_str()))
}

fn read_u32(key: &str, value: &toml::Value) -> PlanResult<u32> {
    let raw = value.as_integer().ok_or_else(|| type_error(key, "an integer", value))?;
    u32::try_from(raw).map_err(|_| {
        PlanError::ConfigParse(format!("Key '{}' is out of range: {}", key, raw))
    })
}

fn read_f64(key: &str, value: &toml::Value) -> PlanResult<f64> {
    match value {
        toml::Value::Float(f) => Ok(*f),
        toml::Value::Integer(i) => Ok(*i as f64),
        other => Err(type_error(key, "a number", other)),
    }
}

fn read_bool(key: &str, value: &toml::Value) -> PlanResult<bool> {
    value.as_bool().ok_or_else(|| type_error(key, "a boolean", value))
}

fn read_str<'a>(key: &str, value: &'a toml::Value) -> PlanResult<&'a str> {
    value.as_str().ok_or_else(|| type_error(key, "a string", value))
}

fn read_triple(key: &str, value: &toml::Value) -> PlanResult<[u8; 3]> {
    match value {
        toml::Value::String(text) => parse_triple(text),
        toml::Value::Array(items) if items.len() == 3 => {
            let mut triple = [0u8; 3];
            for (slot, item) in triple.iter_mut().zip(items) {
                let component = item.as_integer().ok_or_else(|| type_error(key, "integers", item))?;
                *slot = u8::try_from(component).map_err(|_| {
                    PlanError::ConfigParse(format!("Key '{}' component {} is outside 0..=255", key, component))
                })?;
            }
            Ok(triple)
        }
        other => Err(type_error(key, "three values", other)),
    }
}
