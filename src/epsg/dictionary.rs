//! Dictionary collaborator for EPSG lookups
//!
//! The resolver reads geodetic records through the `Dictionary` trait.
//! `MemoryDictionary` keeps every table in memory and is filled from a TOML
//! document.

use std::collections::HashMap;
use std::fs;

use log::debug;

use crate::epsg::tables;
use crate::srs::errors::{SrsError, SrsResult};

/// Table holding supplementary WKT definitions for `lookup_wkt`
pub const WKT_TABLE: &str = "wkt_dictionary";

/// One dictionary row
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Column name and value pairs, in file order
    columns: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    /// Builder-style column insertion
    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.set(column, value);
        self
    }

    /// Set a column, replacing an existing value
    pub fn set(&mut self, column: &str, value: &str) {
        match self.columns.iter_mut().find(|(name, _)| name.eq_ignore_ascii_case(column)) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.columns.push((column.to_string(), value.to_string())),
        }
    }

    /// Value of a column, matched case-insensitively
    pub fn field(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value.as_str())
    }

    /// Value of a column, or "" when the column is missing
    pub fn field_or_empty(&self, column: &str) -> &str {
        self.field(column).unwrap_or("")
    }
}

/// Keyed-record access to the geodetic dictionary
pub trait Dictionary: Send + Sync {
    /// First record of `table` whose `key_column` equals `key_value`
    fn find(&self, table: &str, key_column: &str, key_value: &str) -> Option<Record>;

    /// Every record of `table` whose `key_column` equals `key_value`, in
    /// table order
    fn scan(&self, table: &str, key_column: &str, key_value: &str) -> Vec<Record>;

    /// WKT stored under `code` in the supplementary dictionary `file`
    fn lookup_wkt(&self, file: &str, code: &str) -> Option<String> {
        let _ = (file, code);
        None
    }

    /// Whether the geographic CS tables can be read at all
    fn is_available(&self) -> bool {
        true
    }

    /// Release any cached state
    fn cleanup(&self) {}
}

/// A dictionary held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryDictionary {
    /// Rows per lower-cased table name
    tables: HashMap<String, Vec<Record>>,
}

impl MemoryDictionary {
    pub fn new() -> Self {
        MemoryDictionary::default()
    }

    /// Append a row to a table
    pub fn insert(&mut self, table: &str, record: Record) {
        self.tables.entry(table.to_ascii_lowercase()).or_default().push(record);
    }

    /// Store a supplementary WKT definition
    pub fn insert_wkt(&mut self, file: &str, code: &str, wkt: &str) {
        self.insert(
            WKT_TABLE,
            Record::new().with("file", file).with("code", code).with("wkt", wkt),
        );
    }

    /// Number of rows in a table
    pub fn row_count(&self, table: &str) -> usize {
        self.tables.get(&table.to_ascii_lowercase()).map_or(0, Vec::len)
    }

    /// Build a dictionary from TOML
    ///
    /// Each top-level array of tables becomes a dictionary table. Scalar
    /// values are stored as text.
    ///
    /// # Arguments
    /// * `content` - TOML document
    ///
    /// # Returns
    /// The dictionary, or `CorruptData` if the TOML does not parse
    pub fn from_toml_str(content: &str) -> SrsResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(SrsError::CorruptData(format!("Failed to parse dictionary TOML: {}", e))),
        };

        let mut dictionary = MemoryDictionary::new();
        let top = match toml_value.as_table() {
            Some(top) => top,
            None => return Ok(dictionary),
        };

        for (table_name, rows) in top {
            let rows = match rows.as_array() {
                Some(rows) => rows,
                None => {
                    debug!("Skipping dictionary entry '{}': not an array of tables", table_name);
                    continue;
                }
            };

            for row in rows {
                let mut record = Record::new();
                if let Some(columns) = row.as_table() {
                    for (column, value) in columns {
                        if let Some(text) = scalar_text(value) {
                            record.set(column, &text);
                        }
                    }
                }
                dictionary.insert(table_name, record);
            }
        }

        Ok(dictionary)
    }

    /// Load a dictionary from a TOML file
    pub fn from_file(path: &str) -> SrsResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

fn scalar_text(value: &toml::Value) -> Option<String> {
    match value {
        toml::Value::String(s) => Some(s.clone()),
        toml::Value::Integer(i) => Some(i.to_string()),
        toml::Value::Float(f) => Some(f.to_string()),
        toml::Value::Boolean(b) => Some(if *b { "1".to_string() } else { "0".to_string() }),
        _ => None,
    }
}

impl Dictionary for MemoryDictionary {
    fn find(&self, table: &str, key_column: &str, key_value: &str) -> Option<Record> {
        self.tables
            .get(&table.to_ascii_lowercase())?
            .iter()
            .find(|record| record.field(key_column).map_or(false, |v| v.eq_ignore_ascii_case(key_value)))
            .cloned()
    }

    fn scan(&self, table: &str, key_column: &str, key_value: &str) -> Vec<Record> {
        match self.tables.get(&table.to_ascii_lowercase()) {
            Some(records) => records
                .iter()
                .filter(|record| record.field(key_column).map_or(false, |v| v.eq_ignore_ascii_case(key_value)))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }

    fn lookup_wkt(&self, file: &str, code: &str) -> Option<String> {
        self.tables
            .get(WKT_TABLE)?
            .iter()
            .find(|record| {
                record.field("file").map_or(false, |f| f.eq_ignore_ascii_case(file))
                    && record.field("code").map_or(false, |c| c.eq_ignore_ascii_case(code))
            })
            .and_then(|record| record.field("wkt"))
            .map(str::to_string)
    }

    fn is_available(&self) -> bool {
        self.row_count(tables::GCS) > 0 || self.row_count(tables::GCS_OVERRIDE) > 0
    }
}
