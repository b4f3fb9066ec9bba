use std::{cmp::Reverse, fmt::Debug};

use geo::CoordFloat;
use log::{debug, trace};
use num_traits::Zero;
use ordered_float::{FloatCore, OrderedFloat};
use priority_queue::PriorityQueue;
use rustc_hash::{FxBuildHasher, FxHashSet};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    Coordinate, DirectedGraph, GraphError, Label,
    geo_types::manhattan_distance,
    graph::{Path, Target, named::NamedGraph},
};

/// How a newly discovered edge updates the search state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relaxation {
    /// Every discovery of an unvisited node overwrites its predecessor and
    /// queues another entry with `distance(from, n) + distance(n, to)`.
    /// Each popped entry expands its node again, so the last edge relaxed
    /// into a node before it is popped decides the path.
    #[default]
    LastDiscovered,
    /// Canonical A*. The accumulated edge cost `g` is tracked per node and a
    /// node is only relaxed if `g` strictly improves, priority is
    /// `g(n) + distance(n, to)`.
    Improving,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AStarParams {
    pub relaxation: Relaxation,
}

impl AStarParams {
    pub fn canonical() -> Self {
        Self {
            relaxation: Relaxation::Improving,
        }
    }
}

/// Estimated cost first, ties are popped in insertion order.
type Priority<C> = (Reverse<OrderedFloat<C>>, Reverse<usize>);

pub trait AStar: DirectedGraph
where
    Self::EV: CoordFloat + FloatCore,
    Self::NV: Coordinate<Self::EV>,
{
    /// Searches a path from `from` to `to` using the manhattan distance of the
    /// node coordinates as heuristic.
    ///
    /// Returns `Ok(None)` if `to` can not be reached and
    /// [`GraphError::NodeNotFound`] if one of the nodes does not exist.
    fn a_star(
        &self,
        from: usize,
        to: usize,
        params: AStarParams,
    ) -> Result<Option<Path<Self::EV>>, GraphError>;
}

impl<G> AStar for G
where
    G: DirectedGraph,
    G::EV: CoordFloat + FloatCore,
    G::NV: Coordinate<G::EV>,
{
    #[instrument(skip(self))]
    fn a_star(
        &self,
        from: usize,
        to: usize,
        params: AStarParams,
    ) -> Result<Option<Path<G::EV>>, GraphError> {
        let coord = |node: usize| {
            self.node_value(node)
                .map(Coordinate::as_coord)
                .ok_or(GraphError::NodeNotFound(node))
        };
        let from_coord = coord(from)?;
        let to_coord = coord(to)?;

        // Every push is a separate entry, a node may be queued several times.
        let mut sequence = 0;
        let mut entry = |node: usize, estimate: G::EV| -> ((usize, usize), Priority<G::EV>) {
            sequence += 1;
            (
                (node, sequence),
                (Reverse(OrderedFloat(estimate)), Reverse(sequence)),
            )
        };

        let mut frontier: PriorityQueue<(usize, usize), Priority<G::EV>, FxBuildHasher> =
            PriorityQueue::with_hasher(FxBuildHasher);
        let mut visited = FxHashSet::default();
        let mut previous: Vec<Option<(usize, G::EV)>> = vec![None; self.node_count()];
        let mut best: Vec<Option<G::EV>> = vec![None; self.node_count()];

        best[from] = Some(<G::EV as Zero>::zero());
        let (key, estimate) = entry(from, manhattan_distance(from_coord, to_coord));
        frontier.push(key, estimate);

        while let Some(((node, _), _)) = frontier.pop() {
            if node == to {
                trace!("reached goal {}", to);
                break;
            }

            // Repeated entries of a node expand it again when the last discovery wins.
            if !visited.insert(node) && params.relaxation == Relaxation::Improving {
                continue;
            }

            for edge in self.out_neighbors(node) {
                let next = edge.target();
                if visited.contains(&next) {
                    continue;
                }
                let next_coord = coord(next)?;

                match params.relaxation {
                    Relaxation::LastDiscovered => {
                        let estimate = manhattan_distance(from_coord, next_coord)
                            + manhattan_distance(next_coord, to_coord);
                        let (key, estimate) = entry(next, estimate);
                        frontier.push(key, estimate);
                        previous[next] = Some((node, *edge.value()));
                    }
                    Relaxation::Improving => {
                        let cost =
                            best[node].unwrap_or_else(<G::EV as Zero>::zero) + *edge.value();
                        if best[next].is_none_or(|known| cost < known) {
                            best[next] = Some(cost);
                            previous[next] = Some((node, *edge.value()));
                            let estimate = cost + manhattan_distance(next_coord, to_coord);
                            let (key, estimate) = entry(next, estimate);
                            frontier.push(key, estimate);
                        }
                    }
                }
            }
        }

        let mut path = Vec::new();
        let mut current = to;
        while current != from {
            let Some((prev, cost)) = previous[current] else {
                debug!("could not find a path from {} to {}", from, to);
                return Ok(None);
            };
            path.push(Target::new(current, cost));
            current = prev;
        }
        path.reverse();

        Ok(Some(Path::new(from, path)))
    }
}

/// A path through named nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<NV, C> {
    pub vertices: Vec<NV>,
    pub length: C,
}

impl<G> NamedGraph<G>
where
    G: DirectedGraph,
    G::EV: CoordFloat + FloatCore + Debug,
    G::NV: Coordinate<G::EV> + Label + Clone,
{
    /// Vertices on the path from `from` to `to`, both inclusive.
    pub fn find_path(&self, from: &str, to: &str) -> Result<Vec<G::NV>, GraphError> {
        self.find_route(from, to, AStarParams::default())
            .map(|route| route.vertices)
    }

    pub fn find_route(
        &self,
        from: &str,
        to: &str,
        params: AStarParams,
    ) -> Result<Route<G::NV, G::EV>, GraphError> {
        let resolve = |city: &str| {
            self.node_id(city)
                .ok_or_else(|| GraphError::MissingCoordinates(city.to_owned()))
        };
        let from_id = resolve(from)?;
        let to_id = resolve(to)?;

        let path = self
            .a_star(from_id, to_id, params)?
            .ok_or_else(|| GraphError::NoPathFound {
                from: from.to_owned(),
                to: to.to_owned(),
            })?;

        let vertices = path
            .nodes()
            .map(|node| {
                self.graph()
                    .node_value(node)
                    .cloned()
                    .ok_or(GraphError::NodeNotFound(node))
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            "path {} -> {}: {} vertices, length {:?}",
            from,
            to,
            vertices.len(),
            path.cost()
        );

        Ok(Route {
            vertices,
            length: path.cost(),
        })
    }
}
