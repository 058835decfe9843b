use super::fmt_number;

use thiserror::Error;

/// Why a record did not get a footprint.
///
/// The `Display` output is what ends up in the error column of the output
/// layer, so the prefixes must stay stable.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("centroid: {},{}", fmt_number(.x), fmt_number(.y))]
    CentroidOutOfBounds { x: f64, y: f64 },
    #[error("centroid: {},{}", fmt_number(.x), fmt_number(.y))]
    CentroidDegenerate { x: f64, y: f64 },
    #[error("centroid: {},{}", fmt_number(.x), fmt_number(.y))]
    Reprojection { x: f64, y: f64 },
    /// coordinate text that is not a number, kept as written
    #[error("centroid: {x},{y}")]
    CentroidUnreadable { x: String, y: String },
    #[error("scale: None")]
    ScaleMissing,
    #[error("scale: {0}")]
    ScaleUnparseable(String),
    #[error("scale: {0}")]
    ScaleNotPositive(String),
    #[error("size: {}", .0.as_deref().unwrap_or("None"))]
    SizeUnparseable(Option<String>),
}

impl ValidationError {
    /// Name of the input that failed
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::CentroidOutOfBounds { .. }
            | ValidationError::CentroidDegenerate { .. }
            | ValidationError::Reprojection { .. }
            | ValidationError::CentroidUnreadable { .. } => "centroid",
            ValidationError::ScaleMissing
            | ValidationError::ScaleUnparseable(_)
            | ValidationError::ScaleNotPositive(_) => "scale",
            ValidationError::SizeUnparseable(_) => "size",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            ValidationError::CentroidOutOfBounds {
                x: 14_999.999,
                y: 4_500_000.
            }
            .to_string(),
            "centroid: 14999.999,4500000.0"
        );
        assert_eq!(
            ValidationError::CentroidDegenerate {
                x: f64::NAN,
                y: f64::NAN
            }
            .to_string(),
            "centroid: None,None"
        );
        assert_eq!(ValidationError::ScaleMissing.to_string(), "scale: None");
        assert_eq!(
            ValidationError::ScaleUnparseable("abc".to_string()).to_string(),
            "scale: abc"
        );
        assert_eq!(
            ValidationError::ScaleNotPositive("-200".to_string()).to_string(),
            "scale: -200"
        );
        assert_eq!(
            ValidationError::CentroidUnreadable {
                x: "oops".to_string(),
                y: "None".to_string()
            }
            .to_string(),
            "centroid: oops,None"
        );
        assert_eq!(
            ValidationError::SizeUnparseable(Some("bad".to_string())).to_string(),
            "size: bad"
        );
        assert_eq!(
            ValidationError::SizeUnparseable(None).to_string(),
            "size: None"
        );
    }

    #[test]
    fn field_names() {
        assert_eq!(
            ValidationError::Reprojection { x: 0., y: 0. }.field(),
            "centroid"
        );
        assert_eq!(
            ValidationError::ScaleNotPositive("0".to_string()).field(),
            "scale"
        );
        assert_eq!(ValidationError::SizeUnparseable(None).field(), "size");
    }
}
