use approx::assert_relative_eq;
use graph_rs::{
    GraphError,
    algorithms::a_star::AStarParams,
    builder::GraphBuilder,
    types::{Coordinates, Vertex},
};
use rayon::iter::{IntoParallelIterator, ParallelIterator};

mod common;

fn names(path: &[Vertex]) -> Vec<&str> {
    path.iter().map(|v| v.value.as_str()).collect()
}

#[test]
fn cascavel_to_curitiba() {
    let graph = common::parana().city_graph().unwrap();

    let path = graph.find_path("Cascavel", "Curitiba").unwrap();

    assert_eq!(
        names(&path),
        vec!["Cascavel", "Guarapuava", "Ponta Grossa", "Curitiba"]
    );
    assert_eq!(
        path.iter().map(Vertex::coordinates).collect::<Vec<_>>(),
        vec![
            Coordinates {
                latitude: 24.9578,
                longitude: 53.4595
            },
            Coordinates {
                latitude: 25.3907,
                longitude: 51.4628
            },
            Coordinates {
                latitude: 25.0994,
                longitude: 50.1583
            },
            Coordinates {
                latitude: 25.429,
                longitude: 49.2671
            },
        ]
    );
}

#[test]
fn canonical_search_agrees() {
    let graph = common::parana().city_graph().unwrap();

    let route = graph
        .find_route("Cascavel", "Curitiba", AStarParams::canonical())
        .unwrap();

    assert_eq!(
        names(&route.vertices),
        vec!["Cascavel", "Guarapuava", "Ponta Grossa", "Curitiba"]
    );
    assert_relative_eq!(route.length, 2.4296 + 1.5958 + 1.2208, epsilon = 1e-9);
}

#[test]
fn requested_path_of_input() {
    let input = common::parana();
    let request = input.path.clone().unwrap();
    let graph = input.city_graph().unwrap();

    let path = graph.find_path(&request.from, &request.to).unwrap();

    assert_eq!(path.first().map(|v| v.value.as_str()), Some("Cascavel"));
    assert_eq!(path.last().map(|v| v.value.as_str()), Some("Curitiba"));
}

#[test]
fn path_to_itself() {
    let graph = common::parana().city_graph().unwrap();

    for city in ["Toledo", "Paranaguá", "São Mateus do Sul"] {
        let path = graph.find_path(city, city).unwrap();
        assert_eq!(names(&path), vec![city]);
    }
}

#[test]
fn unknown_start() {
    let graph = common::parana().city_graph().unwrap();

    let error = graph.find_path("Unknown", "Curitiba").unwrap_err();

    assert_eq!(error, GraphError::MissingCoordinates("Unknown".to_owned()));
    assert_eq!(error.to_string(), "Unknown coordinates not found");
}

#[test]
fn unknown_goal() {
    let graph = common::parana().city_graph().unwrap();

    assert_eq!(
        graph.find_path("Curitiba", "Atlantis").unwrap_err(),
        GraphError::MissingCoordinates("Atlantis".to_owned())
    );
}

#[test]
fn neighbor_without_coordinates() {
    let mut input = common::parana();
    input
        .graph
        .get_mut("Toledo")
        .unwrap()
        .push("Assis Chateaubriand".to_owned());

    assert_eq!(
        input.city_graph().unwrap_err(),
        GraphError::MissingCoordinates("Assis Chateaubriand".to_owned())
    );
}

#[test]
fn unreachable_goal() {
    let mut input = common::parana();
    input.cities.insert(
        "Ilha do Mel".to_owned(),
        Coordinates {
            latitude: 25.5444,
            longitude: 48.3214,
        },
    );
    let graph = input.city_graph().unwrap();

    let error = graph.find_path("Cascavel", "Ilha do Mel").unwrap_err();

    assert_eq!(
        error,
        GraphError::NoPathFound {
            from: "Cascavel".to_owned(),
            to: "Ilha do Mel".to_owned()
        }
    );
    assert_eq!(
        names(&graph.find_path("Ilha do Mel", "Ilha do Mel").unwrap()),
        vec!["Ilha do Mel"]
    );
}

#[test]
fn one_way_edges() {
    let at = |latitude, longitude| Coordinates {
        latitude,
        longitude,
    };
    let graph = GraphBuilder::new()
        .adjacency([("a", vec!["b"]), ("b", vec!["c"])])
        .coordinates([("a", at(0.0, 0.0)), ("b", at(0.0, 1.0)), ("c", at(0.0, 2.0))])
        .build()
        .unwrap();

    assert_eq!(names(&graph.find_path("a", "c").unwrap()), vec!["a", "b", "c"]);
    assert!(matches!(
        graph.find_path("c", "a"),
        Err(GraphError::NoPathFound { .. })
    ));
}

#[test]
fn parallel_searches_on_shared_graph() {
    let graph = common::parana().city_graph().unwrap();
    let expected = graph.find_path("Umuarama", "Paranaguá").unwrap();

    let paths: Vec<Vec<Vertex>> = (0..32)
        .into_par_iter()
        .map(|_| graph.find_path("Umuarama", "Paranaguá").unwrap())
        .collect();

    assert!(paths.iter().all(|path| *path == expected));
    assert_eq!(expected.first().map(|v| v.value.as_str()), Some("Umuarama"));
    assert_eq!(expected.last().map(|v| v.value.as_str()), Some("Paranaguá"));
}

fn requeued_cities() -> graph_rs::graph::named::CityGraph {
    let at = |latitude, longitude| Coordinates {
        latitude,
        longitude,
    };
    GraphBuilder::new()
        .adjacency([
            ("s", vec!["a", "b"]),
            ("a", vec!["x"]),
            ("b", vec!["x"]),
            ("x", vec!["y", "z"]),
            ("y", vec!["z"]),
            ("z", vec!["g"]),
        ])
        .coordinates([
            ("s", at(0.0, 0.0)),
            ("a", at(1.0, 1.0)),
            ("b", at(1.0, -1.0)),
            ("x", at(2.0, 2.0)),
            ("y", at(3.0, 1.0)),
            ("z", at(3.0, 3.0)),
            ("g", at(10.0, 0.0)),
        ])
        .build()
        .unwrap()
}

#[test]
fn city_queued_twice_is_expanded_twice() {
    let graph = requeued_cities();

    // The second entry of "x" pops after "y" and sets the predecessor of "z" again.
    assert_eq!(
        names(&graph.find_path("s", "g").unwrap()),
        vec!["s", "b", "x", "z", "g"]
    );

    let route = graph
        .find_route("s", "g", AStarParams::canonical())
        .unwrap();
    assert_eq!(names(&route.vertices), vec!["s", "a", "x", "z", "g"]);
    assert_relative_eq!(route.length, 16.0);
}

#[test]
fn unreferenced_key_without_coordinates() {
    let mut input = common::parana();
    input
        .graph
        .insert("Orphan".to_owned(), vec!["Curitiba".to_owned()]);
    let graph = input.city_graph().unwrap();

    assert_eq!(graph.node_id("Orphan"), None);
    assert_eq!(
        names(&graph.find_path("Cascavel", "Curitiba").unwrap()),
        vec!["Cascavel", "Guarapuava", "Ponta Grossa", "Curitiba"]
    );
    assert_eq!(
        graph.find_path("Orphan", "Curitiba").unwrap_err(),
        GraphError::MissingCoordinates("Orphan".to_owned())
    );
}
