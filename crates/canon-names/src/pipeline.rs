//! Contact pipeline — select, canonicalize, deduplicate, clear.

use canon_core::{CanonConfig, ContactTable, Record, SelectionMode};

use crate::unique::UniquenessTable;
use crate::{canonical, clearer, selector};

/// Base name computed for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseName {
    pub name: String,
    /// Built from the concatenated fallback fields.
    pub used_fallback: bool,
}

/// Statistics for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    pub rows: usize,
    pub fallback_rows: usize,
    pub empty_rows: usize,
    pub suffixed_rows: usize,
    pub cleared_columns: usize,
    pub added_primary_column: bool,
}

pub struct ContactPipeline {
    pub config: CanonConfig,
}

impl ContactPipeline {
    pub fn new(config: CanonConfig) -> Self {
        Self { config }
    }

    /// Canonical base name for a single record, before uniqueness.
    pub fn base_name(&self, record: &Record) -> BaseName {
        let fallback = || canonical::canonicalize(&canonical::fallback_text(record, &self.config.fallback_fields));

        if self.config.selection == SelectionMode::Concatenate {
            return BaseName { name: fallback(), used_fallback: true };
        }

        let selected = selector::select(record, &self.config.candidate_fields);
        if !selected.is_empty() {
            let name = canonical::canonicalize(selected);
            if !name.is_empty() {
                return BaseName { name, used_fallback: false };
            }
        }
        BaseName { name: fallback(), used_fallback: true }
    }

    /// Rewrite the table in place: primary column gets the unique identifier,
    /// subsidiary columns are blanked.
    pub fn run(&self, table: &mut ContactTable) -> NormalizeReport {
        let mut report = NormalizeReport {
            rows: table.len(),
            added_primary_column: table.ensure_column(&self.config.primary_field),
            ..Default::default()
        };

        let mut uniques = UniquenessTable::new(self.config.uniqueness);
        for (row, record) in table.records_mut().iter_mut().enumerate() {
            let base = self.base_name(record);
            let unique = uniques.resolve(&base.name);

            if base.used_fallback {
                report.fallback_rows += 1;
            }
            if unique.is_empty() {
                report.empty_rows += 1;
            }
            if unique != base.name {
                report.suffixed_rows += 1;
            }
            tracing::debug!(row, base = %base.name, name = %unique, fallback = base.used_fallback, "canonicalized");

            record.set(&self.config.primary_field, unique);
        }

        report.cleared_columns = clearer::clear_fields(table, &self.config.subsidiary_fields);

        tracing::info!(
            rows = report.rows,
            fallback = report.fallback_rows,
            empty = report.empty_rows,
            suffixed = report.suffixed_rows,
            "contacts normalized"
        );
        report
    }
}

impl Default for ContactPipeline {
    fn default() -> Self {
        Self::new(CanonConfig::default())
    }
}
