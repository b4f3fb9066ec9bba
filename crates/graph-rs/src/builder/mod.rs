use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::{
    Coordinate, GraphError,
    geo_types::manhattan_distance,
    graph::{
        csr::DirectedCsrGraph,
        named::{CityGraph, LabelGraph, NamedGraph},
    },
    input::edgelist::EdgeList,
    types::{Coordinates, Vertex},
};

pub struct Uninitialized {}

/// Identifiers interned in order of appearance: adjacency keys first, then
/// neighbors which are no key themselves.
pub struct FromAdjacency {
    labels: Vec<String>,
    index: FxHashMap<String, usize>,
    declared: usize,
    edges: Vec<(usize, usize)>,
}

pub struct WithCoordinates {
    adjacency: FromAdjacency,
    coordinates: Vec<(String, Coordinates)>,
}

#[derive(Debug)]
pub struct GraphBuilder<State> {
    state: State,
}

impl Default for GraphBuilder<Uninitialized> {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder<Uninitialized> {
    pub fn new() -> Self {
        Self {
            state: Uninitialized {},
        }
    }

    /// Reads an adjacency mapping from identifier to neighbor identifiers.
    ///
    /// The iteration order of `adjacency` defines the node ids and therefore
    /// every tie-break of the algorithms.
    pub fn adjacency<I, K, N, S>(self, adjacency: I) -> GraphBuilder<FromAdjacency>
    where
        I: IntoIterator<Item = (K, N)>,
        K: AsRef<str>,
        N: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let adjacency: Vec<(String, Vec<String>)> = adjacency
            .into_iter()
            .map(|(key, neighbors)| {
                (
                    key.as_ref().to_owned(),
                    neighbors
                        .into_iter()
                        .map(|n| n.as_ref().to_owned())
                        .collect(),
                )
            })
            .collect();

        let mut state = FromAdjacency {
            labels: Vec::with_capacity(adjacency.len()),
            index: FxHashMap::default(),
            declared: 0,
            edges: Vec::new(),
        };

        adjacency.iter().for_each(|(key, _)| {
            state.intern(key);
        });
        state.declared = state.labels.len();

        for (key, neighbors) in adjacency.iter() {
            let source = state.intern(key);
            for neighbor in neighbors {
                let target = state.intern(neighbor);
                state.edges.push((source, target));
            }
        }

        debug!(
            "Read adjacency: {} declared, {} referenced only, {} edges",
            state.declared,
            state.labels.len() - state.declared,
            state.edges.len()
        );

        GraphBuilder { state }
    }
}

impl FromAdjacency {
    fn intern(&mut self, label: &str) -> usize {
        if let Some(node_id) = self.index.get(label) {
            return *node_id;
        }

        let node_id = self.labels.len();
        self.labels.push(label.to_owned());
        self.index.insert(label.to_owned(), node_id);
        node_id
    }
}

impl GraphBuilder<FromAdjacency> {
    /// Graph over identifiers only.
    pub fn build_labels(self) -> LabelGraph {
        let FromAdjacency {
            labels,
            declared,
            edges,
            ..
        } = self.state;

        let edge_list = EdgeList::with_node_count(
            labels.len(),
            edges.into_iter().map(|(s, t)| (s, t, ())).collect(),
        );

        NamedGraph::new(DirectedCsrGraph::from_edge_list(labels, edge_list), declared)
    }

    pub fn coordinates<I, K>(self, coordinates: I) -> GraphBuilder<WithCoordinates>
    where
        I: IntoIterator<Item = (K, Coordinates)>,
        K: AsRef<str>,
    {
        GraphBuilder {
            state: WithCoordinates {
                adjacency: self.state,
                coordinates: coordinates
                    .into_iter()
                    .map(|(city, c)| (city.as_ref().to_owned(), c))
                    .collect(),
            },
        }
    }
}

impl GraphBuilder<WithCoordinates> {
    /// Resolves every identifier to its coordinates.
    ///
    /// Cities which only appear in the coordinate table become isolated
    /// nodes. Adjacency keys without coordinates that are no neighbor of
    /// anyone are left out. Fails with [`GraphError::MissingCoordinates`]
    /// for the first neighbor without coordinates.
    pub fn build(self) -> Result<CityGraph, GraphError> {
        let WithCoordinates {
            mut adjacency,
            coordinates,
        } = self.state;

        coordinates.iter().for_each(|(city, _)| {
            adjacency.intern(city);
        });

        let lookup: FxHashMap<&str, Coordinates> = coordinates
            .iter()
            .map(|(city, c)| (city.as_str(), *c))
            .collect();

        let mut referenced = vec![false; adjacency.labels.len()];
        adjacency
            .edges
            .iter()
            .for_each(|(_, t)| referenced[*t] = true);

        // Node id in the city graph, `None` for dropped keys.
        let mut node_ids = Vec::with_capacity(adjacency.labels.len());
        let mut vertices = Vec::with_capacity(adjacency.labels.len());
        let mut declared = 0;
        for (node, city) in adjacency.labels.iter().enumerate() {
            match lookup.get(city.as_str()) {
                Some(c) => {
                    node_ids.push(Some(vertices.len()));
                    vertices.push(Vertex::new(city.as_str(), *c));
                    if node < adjacency.declared {
                        declared += 1;
                    }
                }
                None if referenced[node] => {
                    return Err(GraphError::MissingCoordinates(city.clone()));
                }
                None => {
                    debug!("Dropping '{}', no coordinates and never a neighbor", city);
                    node_ids.push(None);
                }
            }
        }

        let edges = adjacency
            .edges
            .iter()
            .filter_map(|(s, t)| {
                let (s, t) = (node_ids[*s]?, node_ids[*t]?);
                let distance = manhattan_distance(vertices[s].as_coord(), vertices[t].as_coord());
                Some((s, t, distance))
            })
            .collect();

        let edge_list = EdgeList::with_node_count(vertices.len(), edges);
        info!("Built city graph with {} cities", vertices.len());

        Ok(NamedGraph::new(
            DirectedCsrGraph::from_edge_list(vertices, edge_list),
            declared,
        ))
    }
}
