use crate::consts::{INCHES_IN_METER, MAX_EASTING, MIN_EASTING, TARGET_EPSG};

use std::path::PathBuf;

/// Everything the footprint computation reads besides the record itself
#[derive(Clone, Debug, PartialEq)]
pub struct FootprintParameters {
    /// crs the input locations are expressed in
    pub source_epsg: u16,
    /// crs every footprint is produced in
    pub target_epsg: u16,

    pub inches_in_meter: f64,

    // inclusive easting range of the target system
    pub min_easting: f64,
    pub max_easting: f64,
}

impl Default for FootprintParameters {
    fn default() -> Self {
        Self {
            source_epsg: TARGET_EPSG,
            target_epsg: TARGET_EPSG,
            inches_in_meter: INCHES_IN_METER,
            min_easting: MIN_EASTING,
            max_easting: MAX_EASTING,
        }
    }
}

impl FootprintParameters {
    pub fn with_source_epsg(mut self, epsg: u16) -> Self {
        self.source_epsg = epsg;
        self
    }

    pub fn needs_reprojection(&self) -> bool {
        self.source_epsg != self.target_epsg
    }
}

/// Names of the input fields the record adapter pulls values from.
/// Matched case-insensitively against the input header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldParameters {
    pub scale: String,
    pub size: String,
    pub x: String,
    pub y: String,
}

impl Default for FieldParameters {
    fn default() -> Self {
        Self {
            scale: "Scale".to_string(),
            size: "FrameFormat".to_string(),
            x: "x".to_string(),
            y: "y".to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FileParameters {
    pub input: PathBuf,
    /// defaults to the input path with a `_tilenvelope.geojson` ending
    pub output: Option<PathBuf>,
}
