use std::collections::{BTreeSet, HashSet};

use crate::config::DashboardConfig;

use super::model::{Record, Table};

// ---------------------------------------------------------------------------
// Filter criteria: industry membership plus numeric bounds
// ---------------------------------------------------------------------------

/// The user's current constraints. Rebuilt on every control change.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Allowed industries. Empty means no industry restriction.
    pub industries: BTreeSet<String>,
    pub pe_min: f64,
    pub pe_max: f64,
    pub roe_min: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl FilterCriteria {
    pub fn from_config(config: &DashboardConfig) -> Self {
        let (pe_min, pe_max) = config.default_pe;
        Self {
            industries: BTreeSet::new(),
            pe_min,
            pe_max,
            roe_min: config.default_min_roe,
        }
    }

    /// A record passes when its P/E is within `[pe_min, pe_max]`, its RoE is
    /// at least `roe_min`, and its industry is allowed. Unparseable P/E or
    /// RoE never passes.
    pub fn matches(&self, record: &Record) -> bool {
        record.pe.within(self.pe_min, self.pe_max)
            && record.roe.at_least(self.roe_min)
            && (self.industries.is_empty() || self.industries.contains(&record.industry))
    }
}

// ---------------------------------------------------------------------------
// Filtered view
// ---------------------------------------------------------------------------

/// Indices of records that pass `criteria`, in table order.
pub fn filtered_indices(table: &Table, criteria: &FilterCriteria) -> Vec<usize> {
    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| criteria.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// A borrowed subset of a [`Table`]. May be empty.
#[derive(Debug, Clone, Copy)]
pub struct FilteredView<'a> {
    pub table: &'a Table,
    pub indices: &'a [usize],
}

impl<'a> FilteredView<'a> {
    pub fn new(table: &'a Table, indices: &'a [usize]) -> Self {
        Self { table, indices }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &'a Record> + 'a {
        let (table, indices) = (self.table, self.indices);
        indices.iter().map(move |&i| &table.records[i])
    }

    /// Distinct names in first-appearance order, for the company selector.
    pub fn names(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.records()
            .map(|r| r.name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }
}
