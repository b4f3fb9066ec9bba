use std::{error::Error, fmt::Display};

use ::geo_types::{Coord, CoordNum};
use graph::Target;
use num_traits::Num;

pub mod algorithms;
pub mod builder;
pub mod geo_types;
pub mod graph;
pub mod input;
pub mod types;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    NodeNotFound(usize),
    MissingCoordinates(String),
    NoPathFound { from: String, to: String },
}

impl Error for GraphError {}

impl Display for GraphError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NodeNotFound(node) => write!(f, "node_id: {} not found in graph", node),
            Self::MissingCoordinates(city) => write!(f, "{} coordinates not found", city),
            Self::NoPathFound { from, to } => {
                write!(f, "no path found from \'{}\' to \'{}\'", from, to)
            }
        }
    }
}

pub trait Coordinate<T: CoordNum + Num = f64> {
    fn x_y(&self) -> (T, T);

    fn as_coord(&self) -> Coord<T>;
}

/// Node values which carry a unique, human readable identifier.
pub trait Label {
    fn label(&self) -> &str;
}

pub trait Graph: Default {
    type EV;
    type NV;
    fn node_count(&self) -> usize;

    fn edge_count(&self) -> usize;

    /// Neighbors in both directions, every node reported at most once.
    fn neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a Target<Self::EV>>
    where
        Self::EV: 'a;

    fn degree(&self, node: usize) -> usize;

    fn node_value(&self, node: usize) -> Option<&Self::NV>;

    fn nodes_iter<'a>(&'a self) -> impl Iterator<Item = (usize, &'a Self::NV)>
    where
        Self::NV: 'a;
}

pub trait DirectedGraph: Graph {
    fn out_neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a Target<Self::EV>>
    where
        Self::EV: 'a;

    fn in_neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a Target<Self::EV>>
    where
        Self::EV: 'a;

    fn out_degree(&self, node: usize) -> usize;

    fn in_degree(&self, node: usize) -> usize;
}
