use geo::Coord;

/// A photo centroid as read from the input layer. NaN stands in for a null
/// coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Location {
    pub x: f64,
    pub y: f64,
    pub epsg: u16,
}

impl Location {
    pub fn new(x: f64, y: f64, epsg: u16) -> Location {
        Location { x, y, epsg }
    }

    pub fn coord(&self) -> Coord {
        Coord {
            x: self.x,
            y: self.y,
        }
    }
}
