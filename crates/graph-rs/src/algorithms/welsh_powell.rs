use std::{cmp::Reverse, collections::BTreeMap};

use log::{info, trace};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{DirectedGraph, Label, graph::named::NamedGraph};

/// Color per node id, `None` for nodes which were not colored.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Coloring {
    colors: Vec<Option<usize>>,
    chromatic_number: usize,
}

impl Coloring {
    pub fn color(&self, node: usize) -> Option<usize> {
        self.colors.get(node).copied().flatten()
    }

    /// Number of colors used, `0` if nothing was colored.
    pub fn chromatic_number(&self) -> usize {
        self.chromatic_number
    }

    /// Colored nodes and their color.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.colors
            .iter()
            .enumerate()
            .filter_map(|(node, color)| color.map(|c| (node, c)))
    }
}

pub trait WelshPowell: DirectedGraph {
    /// Colors all nodes.
    fn welsh_powell(&self) -> Coloring {
        let nodes: Vec<usize> = (0..self.node_count()).collect();
        self.welsh_powell_nodes(&nodes)
    }

    /// Colors `nodes`, other nodes stay uncolored and never block a color.
    ///
    /// Nodes are visited by descending out-degree, nodes of equal degree in
    /// the order they are given. Every node gets the smallest color not used
    /// by an already colored neighbor in either direction.
    fn welsh_powell_nodes(&self, nodes: &[usize]) -> Coloring;
}

impl<G: DirectedGraph> WelshPowell for G {
    #[instrument(skip_all)]
    fn welsh_powell_nodes(&self, nodes: &[usize]) -> Coloring {
        let mut order: Vec<usize> = nodes
            .iter()
            .copied()
            .filter(|node| *node < self.node_count())
            .collect();
        order.sort_by_key(|node| Reverse(self.out_degree(*node)));

        let mut colors = vec![None; self.node_count()];
        let mut used = FxHashSet::default();
        let mut chromatic_number = 0;

        for node in order {
            if colors[node].is_some() {
                continue;
            }

            used.clear();
            used.extend(
                self.neighbors(node)
                    .filter_map(|neighbor| colors[neighbor.target()]),
            );

            let mut color = 0;
            while used.contains(&color) {
                color += 1;
            }

            trace!(
                "node {} (degree {}) gets color {}",
                node,
                self.out_degree(node),
                color
            );
            colors[node] = Some(color);
            chromatic_number = chromatic_number.max(color + 1);
        }

        info!(
            "Colored {} nodes with {} colors",
            colors.iter().flatten().count(),
            chromatic_number
        );

        Coloring {
            colors,
            chromatic_number,
        }
    }
}

/// Colors by identifier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColorAssignment {
    pub colors: BTreeMap<String, usize>,
    pub chromatic_number: usize,
}

impl<G> NamedGraph<G>
where
    G: DirectedGraph,
    G::NV: Label,
{
    /// Colors every node which is a key of the adjacency. Nodes that were
    /// only referenced as neighbors are left out.
    pub fn color_graph(&self) -> ColorAssignment {
        let declared: Vec<usize> = (0..self.declared_count()).collect();
        let coloring = self.welsh_powell_nodes(&declared);

        let colors = coloring
            .iter()
            .filter_map(|(node, color)| Some((self.label(node).ok()?.to_owned(), color)))
            .collect();

        ColorAssignment {
            colors,
            chromatic_number: coloring.chromatic_number(),
        }
    }
}
