use std::path::{Path, PathBuf};

use approx::assert_relative_eq;
use graph_rs::{GraphError, algorithms::a_star::AStarParams};
use route_color::input::{InputError, path_request, read_input};

fn parana_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../resources/parana.json")
}

#[test]
fn reads_parana() {
    let input = read_input(&parana_path()).unwrap();

    assert_eq!(input.cities.len(), 12);
    assert_eq!(input.graph.len(), 12);
}

#[test]
fn missing_file() {
    let error = read_input(Path::new("does/not/exist.json")).unwrap_err();

    assert!(matches!(error, InputError::Io { .. }));
    assert!(error.to_string().contains("does/not/exist.json"));
}

#[test]
fn stored_request_is_used() {
    let input = read_input(&parana_path()).unwrap();

    let request = path_request(&input, None, None).unwrap();

    assert_eq!(request.from, "Cascavel");
    assert_eq!(request.to, "Curitiba");
}

#[test]
fn arguments_override_request() {
    let input = read_input(&parana_path()).unwrap();

    let request = path_request(&input, Some("Toledo".to_owned()), None).unwrap();

    assert_eq!(request.from, "Toledo");
    assert_eq!(request.to, "Curitiba");
}

#[test]
fn missing_request() {
    let mut input = read_input(&parana_path()).unwrap();
    input.path = None;

    assert!(matches!(
        path_request(&input, Some("Toledo".to_owned()), None),
        Err(InputError::MissingRequest)
    ));
}

#[test]
fn route_and_colors() {
    let input = read_input(&parana_path()).unwrap();
    let request = path_request(&input, None, None).unwrap();

    let route = route_color::find_route(&input, &request, AStarParams::default()).unwrap();
    let names: Vec<&str> = route.vertices.iter().map(|v| v.value.as_str()).collect();

    assert_eq!(names, ["Cascavel", "Guarapuava", "Ponta Grossa", "Curitiba"]);
    assert_relative_eq!(route.length, 5.2462, epsilon = 1e-9);

    let assignment = route_color::color(&input);
    assert_eq!(assignment.colors.len(), 12);
    assert!(assignment.chromatic_number >= 2);
}

#[test]
fn unknown_city_is_a_graph_error() {
    let input = read_input(&parana_path()).unwrap();
    let request = path_request(&input, Some("Atlantis".to_owned()), None).unwrap();

    let error = route_color::find_route(&input, &request, AStarParams::default()).unwrap_err();

    assert!(matches!(
        error,
        InputError::Graph(GraphError::MissingCoordinates(ref city)) if city == "Atlantis"
    ));
}
