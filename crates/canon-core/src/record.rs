//! In-memory contact table: ordered columns, ordered records, text values.

use std::sync::Arc;

/// One contact. Reads of a column the table does not have yield `""`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl Record {
    /// Build a record over `columns`, padding missing trailing values with `""`.
    pub fn new(columns: Arc<[String]>, mut values: Vec<String>) -> Self {
        if values.len() < columns.len() {
            values.resize(columns.len(), String::new());
        }
        Self { columns, values }
    }

    /// Standalone record from `(column, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let columns: Arc<[String]> = pairs.iter().map(|(k, _)| k.to_string()).collect();
        let values = pairs.iter().map(|(_, v)| v.to_string()).collect();
        Self::new(columns, values)
    }

    fn position(&self, field: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == field)
    }

    pub fn get(&self, field: &str) -> &str {
        self.position(field)
            .map(|i| self.values[i].as_str())
            .unwrap_or("")
    }

    pub fn has(&self, field: &str) -> bool {
        self.position(field).is_some()
    }

    /// Overwrite `field`. Returns `false` and changes nothing if the column is absent.
    pub fn set(&mut self, field: &str, value: impl Into<String>) -> bool {
        match self.position(field) {
            Some(i) => {
                self.values[i] = value.into();
                true
            }
            None => false,
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    fn extend_column(&mut self, columns: Arc<[String]>) {
        self.columns = columns;
        self.values.resize(self.columns.len(), String::new());
    }
}

/// A whole contact file: the header plus every row in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactTable {
    columns: Arc<[String]>,
    records: Vec<Record>,
}

impl ContactTable {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            records: Vec::new(),
        }
    }

    /// Append a row. Short rows are padded with empty strings.
    pub fn push_row<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.records.push(Record::new(self.columns.clone(), values));
    }

    /// Append `field` as the last column (empty in every row) unless present.
    pub fn ensure_column(&mut self, field: &str) -> bool {
        if self.has_column(field) {
            return false;
        }
        let mut columns = self.columns.to_vec();
        columns.push(field.to_string());
        self.columns = columns.into();
        for record in &mut self.records {
            record.extend_column(self.columns.clone());
        }
        true
    }

    pub fn has_column(&self, field: &str) -> bool {
        self.columns.iter().any(|c| c == field)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
