//! Loaded rural postman instance.
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use postroute_core::{Edge, UndirectedGraph};

use crate::{
    errors::UrppProviderError,
    parse::{LineCursor, OPTIONAL_COUNT, OPTIONAL_LIST, REQUIRED_COUNT, REQUIRED_LIST, VERTICES},
};

/// A graph together with the edges a postman route must traverse.
#[derive(Clone, Debug)]
pub struct UrppInstance {
    name: String,
    comment: String,
    graph: UndirectedGraph,
    required: Vec<Edge>,
}

impl UrppInstance {
    /// Parses an instance from any buffered reader.
    ///
    /// # Errors
    /// Returns [`UrppProviderError`] when a header is missing or malformed,
    /// an edge list is shorter than declared, an edge line cannot be parsed,
    /// or a vertex id is 0 or beyond the declared vertex count.
    ///
    /// # Examples
    /// ```
    /// use postroute_providers_urpp::UrppInstance;
    ///
    /// let text = "\
    /// demo
    /// two towns
    /// VERTICES : 2
    /// ARISTAS_REQ : 1
    /// ARISTAS_NOREQ : 0
    /// LISTA_ARISTAS_REQ :
    ///  (1,2)  coste 2 2
    /// LISTA_ARISTAS_NOREQ :
    /// ";
    /// let instance = UrppInstance::try_from_reader(text.as_bytes())?;
    /// assert_eq!(instance.name(), "demo");
    /// assert_eq!(instance.graph().vertex_count(), 2);
    /// assert_eq!(instance.required()[0].endpoints(), (0, 1));
    /// # Ok::<(), postroute_providers_urpp::UrppProviderError>(())
    /// ```
    pub fn try_from_reader<R: BufRead>(reader: R) -> Result<Self, UrppProviderError> {
        let mut cursor = LineCursor::new(reader);
        let name = cursor.expect_line("instance name")?.trim().to_owned();
        let comment = cursor.expect_line("comment")?.trim().to_owned();
        let vertex_count = cursor.count(VERTICES)?;
        let required_count = cursor.count(REQUIRED_COUNT)?;
        let optional_count = cursor.count(OPTIONAL_COUNT)?;

        let mut graph = UndirectedGraph::new(vertex_count);
        cursor.section(REQUIRED_LIST)?;
        let required = cursor.edges(REQUIRED_LIST, required_count, vertex_count)?;
        add_all(&mut graph, &required, cursor.line())?;
        if optional_count > 0 {
            cursor.section(OPTIONAL_LIST)?;
            let optional = cursor.edges(OPTIONAL_LIST, optional_count, vertex_count)?;
            add_all(&mut graph, &optional, cursor.line())?;
        }

        Ok(Self {
            name,
            comment,
            graph,
            required,
        })
    }

    /// Opens and parses the instance file at `path`.
    ///
    /// # Errors
    /// Returns [`UrppProviderError::Io`] when the file cannot be read, or any
    /// parse error from [`UrppInstance::try_from_reader`].
    pub fn try_from_path(path: impl AsRef<Path>) -> Result<Self, UrppProviderError> {
        let file = File::open(path)?;
        Self::try_from_reader(BufReader::new(file))
    }

    /// Instance name from the first line.
    #[must_use]
    #[rustfmt::skip]
    pub fn name(&self) -> &str { &self.name }

    /// Free-form comment from the second line.
    #[must_use]
    #[rustfmt::skip]
    pub fn comment(&self) -> &str { &self.comment }

    /// Every edge of the instance, required ones included.
    #[must_use]
    #[rustfmt::skip]
    pub const fn graph(&self) -> &UndirectedGraph { &self.graph }

    /// Edges the route must traverse, in file order.
    #[must_use]
    #[rustfmt::skip]
    pub fn required(&self) -> &[Edge] { &self.required }

    /// Splits the instance into the graph and the required edges.
    #[must_use]
    pub fn into_parts(self) -> (UndirectedGraph, Vec<Edge>) {
        (self.graph, self.required)
    }
}

fn add_all(graph: &mut UndirectedGraph, edges: &[Edge], line: usize) -> Result<(), UrppProviderError> {
    for &edge in edges {
        graph
            .add_edge(edge)
            .map_err(|source| UrppProviderError::Graph { line, source })?;
    }
    Ok(())
}
