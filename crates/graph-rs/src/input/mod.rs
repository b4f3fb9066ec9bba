//! Input documents describing a city graph.
//!
//! A document lists the coordinates of every city, the adjacency of the
//! graph and optionally the route that should be searched:
//!
//! ```json
//! {
//!   "cities": { "Curitiba": { "latitude": 25.429, "longitude": 49.2671 } },
//!   "path": { "from": "Curitiba", "to": "Curitiba" },
//!   "graph": { "Curitiba": [] }
//! }
//! ```
pub mod edgelist;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    GraphError,
    builder::GraphBuilder,
    graph::named::{CityGraph, LabelGraph},
    types::Coordinates,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathRequest {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphInput {
    #[serde(default)]
    pub cities: BTreeMap<String, Coordinates>,
    #[serde(default)]
    pub path: Option<PathRequest>,
    #[serde(default)]
    pub graph: BTreeMap<String, Vec<String>>,
}

impl GraphInput {
    /// Graph with coordinates for path finding.
    pub fn city_graph(&self) -> Result<CityGraph, GraphError> {
        GraphBuilder::new()
            .adjacency(self.graph.iter())
            .coordinates(self.cities.iter().map(|(city, c)| (city.as_str(), *c)))
            .build()
    }

    /// Graph over the adjacency only, coordinates are ignored.
    pub fn label_graph(&self) -> LabelGraph {
        GraphBuilder::new()
            .adjacency(self.graph.iter())
            .build_labels()
    }
}
