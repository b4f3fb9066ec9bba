use log::debug;
use rustc_hash::FxHashMap;

use crate::{DirectedGraph, Graph, GraphError, Label, graph::csr::DirectedCsrGraph, types::Vertex};

/// Graph of cities, edges carry the manhattan distance between their endpoints.
pub type CityGraph = NamedGraph<DirectedCsrGraph<f64, Vertex>>;

/// Graph without coordinates, nodes are only known by their identifier.
pub type LabelGraph = NamedGraph<DirectedCsrGraph<(), String>>;

/// Adds a lookup from identifier to node id on top of a graph.
///
/// Only the first `declared` nodes were given as keys of the adjacency, the
/// remaining nodes were just referenced as neighbors.
#[derive(Debug)]
pub struct NamedGraph<G>
where
    G: Graph,
    G::NV: Label,
{
    graph: G,
    index: FxHashMap<String, usize>,
    declared: usize,
}

impl<G> NamedGraph<G>
where
    G: Graph,
    G::NV: Label,
{
    pub fn new(graph: G, declared: usize) -> Self {
        let index: FxHashMap<String, usize> = graph
            .nodes_iter()
            .map(|(node_id, value)| (value.label().to_owned(), node_id))
            .collect();

        debug_assert_eq!(index.len(), graph.node_count(), "labels are not unique");
        let declared = declared.min(index.len());
        debug!(
            "Indexed {} labels, {} declared nodes",
            index.len(),
            declared
        );

        Self {
            graph,
            index,
            declared,
        }
    }

    /// Returns the underlying graph data structure.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn node_id(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    pub fn label(&self, node: usize) -> Result<&str, GraphError> {
        self.graph
            .node_value(node)
            .map(Label::label)
            .ok_or(GraphError::NodeNotFound(node))
    }

    /// Number of nodes which are keys of the adjacency.
    pub fn declared_count(&self) -> usize {
        self.declared
    }
}

impl<G> Default for NamedGraph<G>
where
    G: Graph,
    G::NV: Label,
{
    fn default() -> Self {
        NamedGraph::new(G::default(), 0)
    }
}

impl<G> Graph for NamedGraph<G>
where
    G: Graph,
    G::NV: Label,
{
    type EV = G::EV;
    type NV = G::NV;

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a super::Target<Self::EV>>
    where
        Self::EV: 'a,
    {
        self.graph.neighbors(node)
    }

    fn degree(&self, node: usize) -> usize {
        self.graph.degree(node)
    }

    fn node_value(&self, node: usize) -> Option<&Self::NV> {
        self.graph.node_value(node)
    }

    fn nodes_iter<'a>(&'a self) -> impl Iterator<Item = (usize, &'a Self::NV)>
    where
        Self::NV: 'a,
    {
        self.graph.nodes_iter()
    }
}

impl<G> DirectedGraph for NamedGraph<G>
where
    G: DirectedGraph,
    G::NV: Label,
{
    fn out_neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a super::Target<Self::EV>>
    where
        Self::EV: 'a,
    {
        self.graph.out_neighbors(node)
    }

    fn in_neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a super::Target<Self::EV>>
    where
        Self::EV: 'a,
    {
        self.graph.in_neighbors(node)
    }

    fn out_degree(&self, node: usize) -> usize {
        self.graph.out_degree(node)
    }

    fn in_degree(&self, node: usize) -> usize {
        self.graph.in_degree(node)
    }
}
