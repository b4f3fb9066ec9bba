use std::hash::Hash;

use geo::Coord;
use serde::{Deserialize, Serialize};

use crate::{Coordinate, Label};

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum Direction {
    Outgoing,
    Incoming,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// A named point on the map.
///
/// Two vertices are the same vertex if their `value` is the same, the
/// coordinates are not part of the identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vertex {
    pub value: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Vertex {
    pub fn new(value: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            value: value.into(),
            latitude: coordinates.latitude,
            longitude: coordinates.longitude,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Vertex {}

impl Hash for Vertex {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl Coordinate for Vertex {
    fn x_y(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }

    fn as_coord(&self) -> Coord<f64> {
        Coord::from(self.x_y())
    }
}

impl Label for Vertex {
    fn label(&self) -> &str {
        &self.value
    }
}

impl Label for String {
    fn label(&self) -> &str {
        self
    }
}
