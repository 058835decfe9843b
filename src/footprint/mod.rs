//! Photo footprint computation.
//!
//! Turns a photo centroid, the scale the photo was taken at and the size of
//! the print into the rectangle of ground the photo covers, or reports which
//! of those inputs was unusable.

pub mod calculator;
pub mod frame_size;
pub mod image_scale;
pub mod validation;

pub use self::calculator::{into_parts, FootprintCalculator, FootprintOutcome};
pub use self::frame_size::FrameSize;
pub use self::image_scale::{ImageScale, ScaleValue};
pub use self::validation::ValidationError;

/// Renders a coordinate or scale the way the tile index has always stored them
pub fn fmt_number(value: &f64) -> String {
    if value.is_nan() {
        "None".to_string()
    } else {
        format!("{value:?}")
    }
}
