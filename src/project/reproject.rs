use crate::{parameters::FootprintParameters, Error, Result};

use geo::Coord;
use proj4rs::{transform::transform, Proj};

/// How input locations are brought into the target system.
/// Decided once per run from the source and target EPSG codes.
pub enum Reprojection {
    /// source and target are the same system
    Identity,
    Transform {
        from: Proj,
        to: Proj,
        // proj4rs works in radians for geographic systems
        from_latlong: bool,
        to_latlong: bool,
    },
}

impl Reprojection {
    pub fn new(params: &FootprintParameters) -> Result<Reprojection> {
        let (source_epsg, target_epsg) = (params.source_epsg, params.target_epsg);

        let to_latlong = is_latlong(target_epsg)?;
        if !params.needs_reprojection() {
            return Ok(Reprojection::Identity);
        }
        let from_latlong = is_latlong(source_epsg)?;

        let from = Proj::from_epsg_code(source_epsg)?;
        let to = Proj::from_epsg_code(target_epsg)?;

        log::debug!("Reprojecting input locations from EPSG:{source_epsg} to EPSG:{target_epsg}");

        Ok(Reprojection::Transform {
            from,
            to,
            from_latlong,
            to_latlong,
        })
    }

    pub fn project(&self, coord: Coord) -> std::result::Result<Coord, proj4rs::errors::Error> {
        match self {
            Reprojection::Identity => Ok(coord),
            Reprojection::Transform {
                from,
                to,
                from_latlong,
                to_latlong,
            } => {
                let mut points = if *from_latlong {
                    [(coord.x.to_radians(), coord.y.to_radians())]
                } else {
                    [coord.x_y()]
                };

                transform(from, to, points.as_mut_slice())?;

                let (x, y) = points[0];
                Ok(if *to_latlong {
                    Coord {
                        x: x.to_degrees(),
                        y: y.to_degrees(),
                    }
                } else {
                    Coord { x, y }
                })
            }
        }
    }
}

/// Fails for codes the bundled crs definitions do not know
pub fn is_latlong(epsg: u16) -> Result<bool> {
    let def = crs_definitions::from_code(epsg).ok_or(Error::UnknownCrs(epsg))?;
    Ok(def.proj4.contains("+proj=longlat"))
}
