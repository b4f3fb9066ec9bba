use std::collections::BTreeMap;

use graph_rs::{builder::GraphBuilder, graph::named::LabelGraph, input::GraphInput};

/// Twelve cities of Paraná, see `resources/parana.json`.
pub fn parana() -> GraphInput {
    serde_json::from_str(include_str!("../../../../resources/parana.json")).unwrap()
}

/// Undirected graph, every edge is listed at both endpoints.
#[allow(dead_code)]
pub fn undirected(edges: &[(&str, &str)]) -> LabelGraph {
    let mut adjacency: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for &(a, b) in edges {
        adjacency.entry(a).or_default().push(b);
        adjacency.entry(b).or_default().push(a);
    }

    GraphBuilder::new().adjacency(adjacency).build_labels()
}
