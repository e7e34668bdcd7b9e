//! CSV knowledge-base loading

use crate::error::{Error, Result};
use crate::types::Field;
use std::collections::HashMap;
use std::path::Path;

/// One CSV record keyed by header name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    cells: HashMap<String, String>,
}

impl Row {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Space-joined searchable text; missing columns count as empty.
    pub fn document(&self, columns: &[String]) -> String {
        columns
            .iter()
            .map(|c| self.get(c).unwrap_or(""))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Output fields in `columns` order, skipping columns the row lacks.
    pub fn project(&self, columns: &[String]) -> Vec<Field> {
        columns
            .iter()
            .filter_map(|c| {
                self.get(c).map(|value| Field {
                    column: c.clone(),
                    value: value.to_string(),
                })
            })
            .collect()
    }
}

impl From<HashMap<String, String>> for Row {
    fn from(cells: HashMap<String, String>) -> Self {
        Self { cells }
    }
}

/// Read every record of a headered CSV file.
pub fn load_rows(path: &Path) -> Result<Vec<Row>> {
    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let mut rows = Vec::new();
    for record in reader.deserialize::<HashMap<String, String>>() {
        rows.push(Row::from(record?));
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded data source");
    Ok(rows)
}
