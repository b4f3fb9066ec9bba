use std::{
    error::Error,
    fmt::Display,
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use graph_rs::{
    GraphError,
    input::{GraphInput, PathRequest},
};
use log::info;

#[derive(Debug)]
pub enum InputError {
    Io { path: PathBuf, source: io::Error },
    Json { path: PathBuf, source: serde_json::Error },
    MissingRequest,
    Graph(GraphError),
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::MissingRequest => None,
            Self::Graph(error) => Some(error),
        }
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "cannot read '{}': {}", path.display(), source),
            Self::Json { path, source } => {
                write!(f, "couldn't parse graph input '{}': {}", path.display(), source)
            }
            Self::MissingRequest => write!(
                f,
                "no route requested, pass --from and --to or add a \"path\" to the input"
            ),
            Self::Graph(error) => write!(f, "{}", error),
        }
    }
}

impl From<GraphError> for InputError {
    fn from(value: GraphError) -> Self {
        Self::Graph(value)
    }
}

/// Reads a graph input document from `path`.
pub fn read_input(path: &Path) -> Result<GraphInput, InputError> {
    let file = File::open(path).map_err(|source| InputError::Io {
        path: path.to_owned(),
        source,
    })?;

    let input: GraphInput =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| InputError::Json {
            path: path.to_owned(),
            source,
        })?;

    info!(
        "Loaded {} cities and {} adjacency entries from '{}'",
        input.cities.len(),
        input.graph.len(),
        path.display()
    );

    Ok(input)
}

/// The route to search: `from`/`to` override the request stored in the input.
pub fn path_request(
    input: &GraphInput,
    from: Option<String>,
    to: Option<String>,
) -> Result<PathRequest, InputError> {
    let stored = input.path.as_ref();
    let from = from.or_else(|| stored.map(|p| p.from.clone()));
    let to = to.or_else(|| stored.map(|p| p.to.clone()));

    match (from, to) {
        (Some(from), Some(to)) => Ok(PathRequest { from, to }),
        _ => Err(InputError::MissingRequest),
    }
}
