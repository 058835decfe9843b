use super::ValidationError;

use std::fmt::Display;

/// A scale value as it comes out of a record, before coercion
#[derive(Clone, Debug, PartialEq)]
pub enum ScaleValue {
    Number(f64),
    Text(String),
}

impl Display for ScaleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleValue::Number(n) => f.write_str(&super::fmt_number(n)),
            ScaleValue::Text(t) => f.write_str(t),
        }
    }
}

impl From<f64> for ScaleValue {
    fn from(value: f64) -> Self {
        ScaleValue::Number(value)
    }
}

impl From<&str> for ScaleValue {
    fn from(value: &str) -> Self {
        ScaleValue::Text(value.to_string())
    }
}

/// Ground distance per unit of print distance, always finite and positive
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct ImageScale(f64);

impl ImageScale {
    pub fn new(value: f64) -> Result<ImageScale, ValidationError> {
        Self::checked(value, || super::fmt_number(&value))
    }

    // `raw` renders the value as it was given for the error message
    fn checked(value: f64, raw: impl FnOnce() -> String) -> Result<ImageScale, ValidationError> {
        if value.is_finite() && value > 0. {
            Ok(ImageScale(value))
        } else {
            Err(ValidationError::ScaleNotPositive(raw()))
        }
    }

    /// Textual integers and floats are accepted, blank text counts as missing
    pub fn parse(value: Option<&ScaleValue>) -> Result<ImageScale, ValidationError> {
        match value {
            None => Err(ValidationError::ScaleMissing),
            Some(ScaleValue::Number(n)) => ImageScale::new(*n),
            Some(ScaleValue::Text(t)) => {
                let t = t.trim();
                if t.is_empty() {
                    return Err(ValidationError::ScaleMissing);
                }
                let n = t
                    .parse::<f64>()
                    .map_err(|_| ValidationError::ScaleUnparseable(t.to_string()))?;
                ImageScale::checked(n, || t.to_string())
            }
        }
    }

    /// Ground distance in meters covered by `inches` of print
    pub fn ground_meters(&self, inches: f64, inches_in_meter: f64) -> f64 {
        (inches * self.0) / inches_in_meter
    }
}
