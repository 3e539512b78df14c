//! Provider for undirected rural postman instances in the URPP text format.
//!
//! ```text
//! <instance name>
//! <comment>
//! VERTICES : <n>
//! ARISTAS_REQ : <r>
//! ARISTAS_NOREQ : <k>
//! LISTA_ARISTAS_REQ :
//! (<u>,<v>) coste <w> <w>      r lines, 1-based vertex ids
//! LISTA_ARISTAS_NOREQ :
//! (<u>,<v>) coste <w> <w>      k lines
//! ```
//!
//! Vertex ids are shifted to 0-based on load. Required edges belong to the
//! graph as well as to the required set.

mod errors;
mod instance;
mod parse;

pub use errors::UrppProviderError;
pub use instance::UrppInstance;
