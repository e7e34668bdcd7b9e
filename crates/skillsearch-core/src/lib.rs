//! Domain routing and CSV knowledge-base search on top of the BM25 engine

mod config;
mod error;
mod paths;
mod router;
mod search;
mod source;
mod types;

pub use config::{Config, DomainConfig};
pub use error::{Error, Result};
pub use paths::{resolve_data_dir, DATA_DIR_ENV};
pub use router::Router;
pub use search::{top_hits, Searcher};
pub use source::{load_rows, Row};
pub use types::{Field, SearchHit, SearchResult};
