// NAD83 / UTM zone 12N, the only system footprints are produced in
pub const TARGET_EPSG: u16 = 26912;

// must match the value the existing tile indices were generated with
pub const INCHES_IN_METER: f64 = 39.37008;

// valid eastings for the target zone, inclusive
pub const MIN_EASTING: f64 = 15_000.;
pub const MAX_EASTING: f64 = 707_933.;

pub const ERROR_FIELD: &str = "error";
pub const ERROR_FIELD_LENGTH: usize = 250;

pub const BATCH_SIZE: usize = 5000;

pub const OUTPUT_SUFFIX: &str = "_tilenvelope";
