pub mod input;

use graph_rs::{
    algorithms::{
        a_star::{AStarParams, Route},
        welsh_powell::ColorAssignment,
    },
    input::{GraphInput, PathRequest},
    types::Vertex,
};
use log::info;

use crate::input::InputError;

/// Searches the requested route through the cities of `input`.
pub fn find_route(
    input: &GraphInput,
    request: &PathRequest,
    params: AStarParams,
) -> Result<Route<Vertex, f64>, InputError> {
    let graph = input.city_graph()?;
    let route = graph.find_route(&request.from, &request.to, params)?;

    info!(
        "A* {} -> {}: {} cities, length {:.4}",
        request.from,
        request.to,
        route.vertices.len(),
        route.length
    );

    Ok(route)
}

/// Colors the adjacency of `input`, coordinates are not needed.
pub fn color(input: &GraphInput) -> ColorAssignment {
    input.label_graph().color_graph()
}
