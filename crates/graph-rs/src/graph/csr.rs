use log::info;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::{
    DirectedGraph, Graph, graph::Target, input::edgelist::EdgeList, types::Direction,
};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Csr<EV> {
    offsets: Vec<usize>,
    targets: Vec<Target<EV>>,
}

impl<EV> Csr<EV> {
    /// Create a `CSR` from `offsets` and `targets`.
    ///
    /// Returns a new `CSR` where `offsets[i]` contains the index of the first
    /// target node in `targets`.
    pub fn new(offsets: Vec<usize>, targets: Vec<Target<EV>>) -> Csr<EV> {
        Self { offsets, targets }
    }

    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    pub fn degree(&self, i: usize) -> usize {
        self.offsets
            .get(i + 1)
            .map_or(0, |to| to - self.offsets[i])
    }

    /// Targets of node `i` in insertion order, empty for unknown nodes.
    pub fn targets(&self, i: usize) -> &[Target<EV>] {
        match (self.offsets.get(i), self.offsets.get(i + 1)) {
            (Some(from), Some(to)) => &self.targets[*from..*to],
            _ => &[],
        }
    }
}

impl<EV> Default for Csr<EV> {
    fn default() -> Self {
        Csr {
            offsets: vec![0],
            targets: vec![],
        }
    }
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct DirectedCsrGraph<EV, NV> {
    pub node_values: Vec<NV>,
    pub csr_out: Csr<EV>,
    pub csr_inc: Csr<EV>,
}

impl<EV, NV> DirectedCsrGraph<EV, NV> {
    pub fn new(
        node_values: Vec<NV>,
        csr_out: Csr<EV>,
        csr_inc: Csr<EV>,
    ) -> DirectedCsrGraph<EV, NV> {
        assert_eq!(
            csr_out.node_count(),
            csr_inc.node_count(),
            "csr_out and csr_in have different node counts"
        );
        assert_eq!(
            csr_out.node_count(),
            node_values.len(),
            "every node needs a value"
        );

        let g = Self {
            node_values,
            csr_out,
            csr_inc,
        };

        info!(
            "Created directed graph (node_count: {:?}, edge_count = {:?})",
            g.csr_out.node_count(),
            g.csr_out.edge_count()
        );

        g
    }
}

impl<EV: Copy, NV> DirectedCsrGraph<EV, NV> {
    /// Builds the graph from `edge_list`, `node_values[i]` becomes the value
    /// of node `i`. Targets of a node keep the order of the edge list.
    pub fn from_edge_list(node_values: Vec<NV>, edge_list: EdgeList<EV>) -> Self {
        let csr_out = build_csr(&edge_list, Direction::Outgoing);
        let csr_inc = build_csr(&edge_list, Direction::Incoming);

        DirectedCsrGraph::new(node_values, csr_out, csr_inc)
    }
}

impl<EV, NV> Default for DirectedCsrGraph<EV, NV> {
    fn default() -> Self {
        DirectedCsrGraph::new(vec![], Csr::default(), Csr::default())
    }
}

impl<EV, NV> Graph for DirectedCsrGraph<EV, NV> {
    type EV = EV;
    type NV = NV;
    fn node_count(&self) -> usize {
        self.csr_out.node_count()
    }

    fn edge_count(&self) -> usize {
        self.csr_out.edge_count()
    }

    fn neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a Target<EV>>
    where
        EV: 'a,
    {
        let mut seen = FxHashSet::default();
        self.out_neighbors(node)
            .chain(self.in_neighbors(node))
            .filter(move |x| seen.insert(x.target()))
    }

    fn degree(&self, node: usize) -> usize {
        self.out_degree(node) + self.in_degree(node)
    }

    fn node_value(&self, node: usize) -> Option<&NV> {
        self.node_values.get(node)
    }

    /// Returns an Iterator over all nodes.
    ///
    /// The Iterator yields pairs `(i, val)`, where `i` is the index
    /// of the node and `val` the data accociated with that node.
    fn nodes_iter<'a>(&'a self) -> impl Iterator<Item = (usize, &'a NV)>
    where
        NV: 'a,
    {
        self.node_values.iter().enumerate()
    }
}

impl<EV, NV> DirectedGraph for DirectedCsrGraph<EV, NV> {
    fn out_neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a Target<EV>>
    where
        EV: 'a,
    {
        self.csr_out.targets(node).iter()
    }

    fn in_neighbors<'a>(&'a self, node: usize) -> impl Iterator<Item = &'a Target<EV>>
    where
        EV: 'a,
    {
        self.csr_inc.targets(node).iter()
    }

    fn out_degree(&self, node: usize) -> usize {
        self.csr_out.degree(node)
    }

    fn in_degree(&self, node: usize) -> usize {
        self.csr_inc.degree(node)
    }
}

impl<EV: Copy> From<EdgeList<EV>> for DirectedCsrGraph<EV, ()> {
    fn from(edge_list: EdgeList<EV>) -> Self {
        let node_values = vec![(); edge_list.node_count()];
        DirectedCsrGraph::from_edge_list(node_values, edge_list)
    }
}

fn build_csr<EV: Copy>(edge_list: &EdgeList<EV>, direction: Direction) -> Csr<EV> {
    let offsets = prefix_sum(edge_list.degrees(direction));

    // Next free slot for every node.
    let mut cursor = offsets.clone();
    let mut targets: Vec<Option<Target<EV>>> = Vec::new();
    targets.resize_with(edge_list.edge_count(), || None);

    edge_list.edges().for_each(|(s, t, v)| {
        let (node, target) = match direction {
            Direction::Outgoing => (s, t),
            Direction::Incoming => (t, s),
        };
        targets[cursor[node]] = Some(Target::new(target, v));
        cursor[node] += 1;
    });

    Csr::new(offsets, targets.into_iter().flatten().collect())
}

fn prefix_sum(degrees: Vec<usize>) -> Vec<usize> {
    let mut sums = Vec::with_capacity(degrees.len() + 1);
    sums.push(0);
    degrees.into_iter().fold(0, |total, degree| {
        let total = total + degree;
        sums.push(total);
        total
    });

    sums
}
