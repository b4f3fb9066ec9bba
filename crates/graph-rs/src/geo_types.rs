use geo::{Coord, CoordFloat, CoordNum, Point};

use crate::Coordinate;

impl<C: CoordNum> Coordinate<C> for Point<C> {
    fn x_y(&self) -> (C, C) {
        self.as_coord().x_y()
    }

    fn as_coord(&self) -> Coord<C> {
        self.0
    }
}

impl<C: CoordNum> Coordinate<C> for Coord<C> {
    fn x_y(&self) -> (C, C) {
        (self.x, self.y)
    }

    fn as_coord(&self) -> Coord<C> {
        *self
    }
}

/// Manhattan (L1) distance between two coordinates.
pub fn manhattan_distance<C: CoordFloat>(a: Coord<C>, b: Coord<C>) -> C {
    let delta = a - b;
    delta.x.abs() + delta.y.abs()
}
