use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord};

use crate::error::LoadError;

use super::model::{Record, Schema, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a watchlist export.
///
/// Expected layout:
/// * row 1 – banner / metadata, discarded
/// * row 2 – column names (must include the required columns, see [`Schema`])
/// * rows 3.. – one company per row
///
/// Data rows keep their file order. Rows with every cell blank are skipped.
pub fn load_table(path: &Path) -> Result<Table, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows = reader.records();
    let read_err = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    // Banner row: only its presence matters.
    match rows.next() {
        Some(row) => {
            row.map_err(read_err)?;
        }
        None => {
            return Err(LoadError::MissingBanner {
                path: path.to_path_buf(),
            })
        }
    }

    let header_row = match rows.next() {
        Some(row) => row.map_err(read_err)?,
        None => {
            return Err(LoadError::MissingHeader {
                path: path.to_path_buf(),
            })
        }
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    let schema = Schema::resolve(headers).map_err(|missing| LoadError::MissingColumns {
        path: path.to_path_buf(),
        missing,
    })?;

    let mut records = Vec::new();
    for row in rows {
        let row = row.map_err(read_err)?;
        let line = file_line(&row);
        if is_blank(&row) {
            log::debug!("skipping blank line {line}");
            continue;
        }
        if row.len() < schema.width() {
            log::warn!(
                "line {line} has {} cells, header has {}",
                row.len(),
                schema.width()
            );
        }
        let cells = row.iter().map(str::to_string).collect();
        records.push(Record::from_cells(&schema, cells));
    }

    Ok(Table::new(schema, records))
}

/// 1-based line of `row` in the source file, for log messages.
fn file_line(row: &StringRecord) -> u64 {
    row.position().map(|p| p.line()).unwrap_or_default()
}

fn is_blank(row: &StringRecord) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Memoizing cache
// ---------------------------------------------------------------------------

/// Loaded tables keyed by path. A path is read from disk at most once until
/// it is invalidated; later edits to the file are not observed before that.
/// Failed loads are not cached.
#[derive(Debug, Default)]
pub struct TableCache {
    tables: BTreeMap<PathBuf, Arc<Table>>,
}

impl TableCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached table for `path`, loading it on first use.
    pub fn load(&mut self, path: &Path) -> Result<Arc<Table>, LoadError> {
        if let Some(table) = self.tables.get(path) {
            log::debug!("table cache hit for {}", path.display());
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(load_table(path)?);
        log::info!("loaded {} companies from {}", table.len(), path.display());
        self.tables.insert(path.to_path_buf(), Arc::clone(&table));
        Ok(table)
    }

    /// Drop the cached table for `path` so the next `load` re-reads it.
    pub fn invalidate(&mut self, path: &Path) -> bool {
        let dropped = self.tables.remove(path).is_some();
        if dropped {
            log::info!("invalidated cached table for {}", path.display());
        }
        dropped
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.tables.contains_key(path)
    }
}
