use geo::{Coord, LineString, Polygon};

/// Ground footprint of a photo, axis aligned in the target system
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Footprint {
    pub center: Coord,
    pub half_length: f64,
    pub half_width: f64,
    pub epsg: u16,
}

impl Footprint {
    pub fn new(center: Coord, half_length: f64, half_width: f64, epsg: u16) -> Footprint {
        Footprint {
            center,
            half_length,
            half_width,
            epsg,
        }
    }

    pub fn top_left(&self) -> Coord {
        Coord {
            x: self.center.x - self.half_length,
            y: self.center.y + self.half_width,
        }
    }

    pub fn top_right(&self) -> Coord {
        Coord {
            x: self.center.x + self.half_length,
            y: self.center.y + self.half_width,
        }
    }

    pub fn bottom_right(&self) -> Coord {
        Coord {
            x: self.center.x + self.half_length,
            y: self.center.y - self.half_width,
        }
    }

    pub fn bottom_left(&self) -> Coord {
        Coord {
            x: self.center.x - self.half_length,
            y: self.center.y - self.half_width,
        }
    }

    /// tl, tr, br, bl. Downstream consumers rely on this order.
    pub fn corners(&self) -> [Coord; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_right(),
            self.bottom_left(),
        ]
    }

    /// The exterior ring gets closed by `geo`, so it holds five coords
    pub fn to_polygon(&self) -> Polygon {
        Polygon::new(LineString::from(self.corners().to_vec()), vec![])
    }
}

/// Stand-in geometry for records that failed validation.
/// A single point at the origin, never a valid footprint.
pub fn placeholder_polygon() -> Polygon {
    Polygon::new(LineString::from(vec![Coord { x: 0., y: 0. }]), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_order() {
        let fp = Footprint::new(Coord { x: 10., y: 20. }, 2., 1., 26912);

        assert_eq!(
            fp.corners(),
            [
                Coord { x: 8., y: 21. },
                Coord { x: 12., y: 21. },
                Coord { x: 12., y: 19. },
                Coord { x: 8., y: 19. },
            ]
        );
    }

    #[test]
    fn polygon_ring_is_closed() {
        let fp = Footprint::new(Coord { x: 0., y: 0. }, 1., 1., 26912);
        let polygon = fp.to_polygon();

        let ring = &polygon.exterior().0;
        assert_eq!(ring.len(), 5);
        assert_eq!(ring[0], ring[4]);
        assert_eq!(ring[..4], fp.corners());
        assert!(polygon.interiors().is_empty());
    }

    #[test]
    fn placeholder_is_a_single_point() {
        let polygon = placeholder_polygon();

        assert_eq!(polygon.exterior().0, vec![Coord { x: 0., y: 0. }]);
    }
}
