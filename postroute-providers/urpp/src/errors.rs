use postroute_core::GraphError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UrppProviderError {
    #[error("line {line}: expected `{expected}` but the input ended")]
    MissingLine { line: usize, expected: &'static str },
    #[error("line {line}: expected a `{expected}` header but found `{found}`")]
    MalformedHeader {
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[error("line {line}: `{raw}` is not a valid count")]
    MalformedCount { line: usize, raw: String },
    #[error("line {line}: `{raw}` is not an edge of the form `(u,v) coste w`")]
    MalformedEdge { line: usize, raw: String },
    #[error("{section} lists {found} edges but the header declares {expected}")]
    TruncatedEdgeList {
        section: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("line {line}: vertex {vertex} is outside 1..={vertex_count}")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        vertex_count: usize,
    },
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
