use super::{FrameSize, ImageScale, ScaleValue, ValidationError};
use crate::{
    geometry::{placeholder_polygon, Footprint, Location},
    parameters::FootprintParameters,
    project::Reprojection,
    Result,
};

use geo::{Coord, Polygon};

pub type FootprintOutcome = std::result::Result<Footprint, ValidationError>;

pub struct FootprintCalculator {
    params: FootprintParameters,
    reprojection: Reprojection,
}

impl FootprintCalculator {
    pub fn new(params: FootprintParameters) -> Result<FootprintCalculator> {
        let reprojection = Reprojection::new(&params)?;

        Ok(FootprintCalculator {
            params,
            reprojection,
        })
    }

    /// Ground rectangle covered by a photo taken at `location`.
    ///
    /// The checks run in a fixed order and the first failing one decides the
    /// error: centroid, then scale, then size. Centroid errors always report
    /// the coordinates as given, not the reprojected ones.
    pub fn compute_footprint(
        &self,
        location: Location,
        scale: Option<&ScaleValue>,
        size: Option<&str>,
    ) -> FootprintOutcome {
        let centroid = self.centroid(location)?;

        let scale = ImageScale::parse(scale)?;
        let frame = FrameSize::parse(size)?;

        let inches_in_meter = self.params.inches_in_meter;

        let length_in_meters = scale.ground_meters(frame.length, inches_in_meter);
        let half_length = length_in_meters / 2.;

        let half_width = if frame.is_square() {
            half_length
        } else {
            scale.ground_meters(frame.width, inches_in_meter) / 2.
        };

        Ok(Footprint::new(
            centroid,
            half_length,
            half_width,
            self.params.target_epsg,
        ))
    }

    /// Location in the target system, if it is a plausible photo centroid
    fn centroid(&self, location: Location) -> std::result::Result<Coord, ValidationError> {
        let (x, y) = (location.x, location.y);

        if location.epsg != self.params.source_epsg && location.epsg != self.params.target_epsg {
            log::warn!(
                "Location in EPSG:{} but the calculator expects EPSG:{}",
                location.epsg,
                self.params.source_epsg
            );
            return Err(ValidationError::Reprojection { x, y });
        }

        let utm = if location.epsg == self.params.target_epsg {
            location.coord()
        } else {
            match self.reprojection.project(location.coord()) {
                Ok(c) if c.x.is_finite() && c.y.is_finite() => c,
                // a missing coordinate is reported as degenerate below
                _ if x.is_nan() || y.is_nan() => Coord {
                    x: f64::NAN,
                    y: f64::NAN,
                },
                Ok(_) => return Err(ValidationError::Reprojection { x, y }),
                Err(e) => {
                    log::debug!("Could not reproject {x},{y}: {e}");
                    return Err(ValidationError::Reprojection { x, y });
                }
            }
        };

        if utm.x < self.params.min_easting || utm.x > self.params.max_easting {
            return Err(ValidationError::CentroidOutOfBounds { x, y });
        }

        // a null on either axis would leave the corners without coordinates
        if !utm.x.is_finite() || !utm.y.is_finite() || utm.x == 0. || utm.x == utm.y {
            return Err(ValidationError::CentroidDegenerate { x, y });
        }

        Ok(utm)
    }
}

/// Splits an outcome into what a destination record stores: the error text,
/// and a geometry that is the placeholder whenever there is an error.
pub fn into_parts(outcome: &FootprintOutcome) -> (Option<String>, Polygon) {
    match outcome {
        Ok(footprint) => (None, footprint.to_polygon()),
        Err(e) => (Some(e.to_string()), placeholder_polygon()),
    }
}
