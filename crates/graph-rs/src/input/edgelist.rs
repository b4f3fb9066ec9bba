use std::{cmp::max, iter::Copied, slice::Iter};

use crate::types::Direction;

#[derive(Debug)]
pub struct EdgeList<EV> {
    edges: Box<[(usize, usize, EV)]>,
    node_count: usize,
}

impl<EV: Copy> EdgeList<EV> {
    /// Edge list over the nodes `0..=max_node_id`.
    pub fn new(edges: Vec<(usize, usize, EV)>) -> Self {
        let node_count = edges
            .iter()
            .map(|(s, t, _)| max(*s, *t) + 1)
            .max()
            .unwrap_or(0);

        Self::with_node_count(node_count, edges)
    }

    /// Edge list over the nodes `0..node_count`, nodes without edges are kept.
    pub fn with_node_count(node_count: usize, edges: Vec<(usize, usize, EV)>) -> Self {
        let node_count = edges
            .iter()
            .map(|(s, t, _)| max(*s, *t) + 1)
            .fold(node_count, max);

        Self {
            edges: edges.into_boxed_slice(),
            node_count,
        }
    }

    pub fn degrees(&self, direction: Direction) -> Vec<usize> {
        let mut degrees = vec![0; self.node_count];

        match direction {
            Direction::Outgoing => self.edges.iter().for_each(|(s, _, _)| {
                degrees[*s] += 1;
            }),
            Direction::Incoming => self.edges.iter().for_each(|(_, t, _)| {
                degrees[*t] += 1;
            }),
        }

        degrees
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edges(&self) -> Copied<Iter<'_, (usize, usize, EV)>> {
        self.edges.iter().copied()
    }
}
