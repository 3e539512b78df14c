//! Line-level parsing for the URPP instance format.
use std::io::{BufRead, Lines};

use postroute_core::Edge;

use crate::errors::UrppProviderError;

pub(crate) const VERTICES: &str = "VERTICES";
pub(crate) const REQUIRED_COUNT: &str = "ARISTAS_REQ";
pub(crate) const OPTIONAL_COUNT: &str = "ARISTAS_NOREQ";
pub(crate) const REQUIRED_LIST: &str = "LISTA_ARISTAS_REQ";
pub(crate) const OPTIONAL_LIST: &str = "LISTA_ARISTAS_NOREQ";

/// Numbered line reader that strips trailing `\r`.
pub(crate) struct LineCursor<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> LineCursor<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
        }
    }

    /// 1-based number of the last line returned.
    #[rustfmt::skip]
    pub(crate) const fn line(&self) -> usize { self.line }

    pub(crate) fn next_line(&mut self) -> Result<Option<String>, UrppProviderError> {
        match self.lines.next() {
            Some(line) => {
                self.line += 1;
                let mut line = line?;
                if line.ends_with('\r') {
                    line.pop();
                }
                Ok(Some(line))
            }
            None => Ok(None),
        }
    }

    pub(crate) fn expect_line(&mut self, expected: &'static str) -> Result<String, UrppProviderError> {
        self.next_line()?.ok_or(UrppProviderError::MissingLine {
            line: self.line + 1,
            expected,
        })
    }

    /// Reads a `<KEY> : <count>` header. The count is the last token.
    pub(crate) fn count(&mut self, key: &'static str) -> Result<usize, UrppProviderError> {
        let raw = self.expect_line(key)?;
        let line = self.line;
        if !raw.trim_start().starts_with(key) {
            return Err(UrppProviderError::MalformedHeader {
                line,
                expected: key,
                found: raw,
            });
        }
        raw.split_whitespace()
            .last()
            .and_then(|token| token.parse().ok())
            .ok_or(UrppProviderError::MalformedCount { line, raw })
    }

    /// Skips a list header such as `LISTA_ARISTAS_REQ :`.
    pub(crate) fn section(&mut self, key: &'static str) -> Result<(), UrppProviderError> {
        let raw = self.expect_line(key)?;
        if raw.trim_start().starts_with(key) {
            Ok(())
        } else {
            Err(UrppProviderError::MalformedHeader {
                line: self.line,
                expected: key,
                found: raw,
            })
        }
    }

    /// Reads `count` edge lines, converting ids to 0-based.
    pub(crate) fn edges(
        &mut self,
        section: &'static str,
        count: usize,
        vertex_count: usize,
    ) -> Result<Vec<Edge>, UrppProviderError> {
        let mut edges = Vec::with_capacity(count);
        while edges.len() < count {
            let Some(raw) = self.next_line()? else {
                return Err(UrppProviderError::TruncatedEdgeList {
                    section,
                    expected: count,
                    found: edges.len(),
                });
            };
            if raw.trim().is_empty() {
                continue;
            }
            edges.push(parse_edge(&raw, self.line, vertex_count)?);
        }
        Ok(edges)
    }
}

/// Parses `(<u>,<v>) coste <w> ...`; the first numeric weight wins.
pub(crate) fn parse_edge(raw: &str, line: usize, vertex_count: usize) -> Result<Edge, UrppProviderError> {
    let malformed = || UrppProviderError::MalformedEdge {
        line,
        raw: raw.to_owned(),
    };
    let rest = raw.trim_start().strip_prefix('(').ok_or_else(malformed)?;
    let (pair, tail) = rest.split_once(')').ok_or_else(malformed)?;
    let (u, v) = pair.split_once(',').ok_or_else(malformed)?;
    let u = vertex(u, line, vertex_count).ok_or_else(malformed)??;
    let v = vertex(v, line, vertex_count).ok_or_else(malformed)??;
    let weight = tail
        .split_whitespace()
        .find_map(|token| token.parse::<f64>().ok())
        .ok_or_else(malformed)?;
    Ok(Edge::new(u, v, weight))
}

/// `None` when the token is not an integer.
fn vertex(
    token: &str,
    line: usize,
    vertex_count: usize,
) -> Option<Result<usize, UrppProviderError>> {
    let vertex: usize = token.trim().parse().ok()?;
    if (1..=vertex_count).contains(&vertex) {
        Some(Ok(vertex - 1))
    } else {
        Some(Err(UrppProviderError::VertexOutOfRange {
            line,
            vertex,
            vertex_count,
        }))
    }
}
