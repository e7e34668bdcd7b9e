//! Search result types

use serde::{Deserialize, Serialize};

/// A projected output column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub column: String,
    pub value: String,
}

/// A matching row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Row position in the source file (0-based, header excluded)
    pub index: usize,
    pub score: f64,
    pub fields: Vec<Field>,
}

/// Hits for one domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub domain: String,
    pub query: String,
    pub file: String,
    pub hits: Vec<SearchHit>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }
}
