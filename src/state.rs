use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::color::ColorMap;
use crate::config::DashboardConfig;
use crate::data::filter::{filtered_indices, FilterCriteria, FilteredView};
use crate::data::loader::TableCache;
use crate::data::model::{Record, Table};
use crate::data::select::resolve;
use crate::data::trend::Trend;
use crate::error::{LoadError, SelectionError};

// ---------------------------------------------------------------------------
// User events
// ---------------------------------------------------------------------------

/// Control changes emitted by the UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    IndustryToggled(String),
    IndustriesSelectedAll,
    IndustriesCleared,
    PeRangeChanged { min: f64, max: f64 },
    MinRoeChanged(f64),
    EntitySelected(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    cache: TableCache,

    /// Path of the table currently shown.
    pub path: PathBuf,

    /// Loaded table (None until a load succeeds).
    pub table: Option<Arc<Table>>,

    /// Blocking load failure; nothing else is rendered while set.
    pub load_error: Option<String>,

    pub criteria: FilterCriteria,

    /// Indices of companies passing `criteria` (cached).
    pub visible_indices: Vec<usize>,

    /// Name chosen in the company selector.
    pub selected_name: Option<String>,

    /// Industry → colour.
    pub color_map: ColorMap,

    /// Non-blocking status / error message shown in the top bar.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            path: config.data_path.clone(),
            criteria: FilterCriteria::from_config(&config),
            config,
            cache: TableCache::new(),
            table: None,
            load_error: None,
            visible_indices: Vec::new(),
            selected_name: None,
            color_map: ColorMap::default(),
            status_message: None,
        }
    }

    /// Load `path` through the cache and reset filters to their defaults.
    pub fn load(&mut self, path: &Path) -> Result<(), LoadError> {
        self.path = path.to_path_buf();
        match self.cache.load(path) {
            Ok(table) => {
                self.set_table(table);
                Ok(())
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                self.table = None;
                self.visible_indices.clear();
                self.selected_name = None;
                self.load_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Drop the cached copy of the current file and read it again.
    pub fn reload(&mut self) -> Result<(), LoadError> {
        let path = self.path.clone();
        self.cache.invalidate(&path);
        self.load(&path)
    }

    fn set_table(&mut self, table: Arc<Table>) {
        self.color_map = ColorMap::new(&table.industries);
        self.criteria = FilterCriteria::from_config(&self.config);
        self.table = Some(table);
        self.load_error = None;
        self.status_message = None;
        self.selected_name = None;
        self.recompute();
    }

    /// Apply one control change, then recompute subset and selection.
    pub fn handle(&mut self, event: Event) {
        match event {
            Event::IndustryToggled(industry) => {
                if !self.criteria.industries.remove(&industry) {
                    self.criteria.industries.insert(industry);
                }
            }
            Event::IndustriesSelectedAll => {
                if let Some(table) = &self.table {
                    self.criteria.industries = table.industries.clone();
                }
            }
            Event::IndustriesCleared => self.criteria.industries.clear(),
            Event::PeRangeChanged { min, max } => {
                self.criteria.pe_min = min.min(max);
                self.criteria.pe_max = min.max(max);
            }
            Event::MinRoeChanged(roe) => self.criteria.roe_min = roe,
            Event::EntitySelected(name) => {
                // Criteria are unchanged; an unknown name stays selected so
                // `selected_record` reports it instead of substituting one.
                log::debug!("selected {name:?}");
                self.selected_name = Some(name);
                return;
            }
        }
        self.recompute();
    }

    /// Recompute `visible_indices` after a filter change, then keep the
    /// selection inside the subset, falling back to its first company.
    pub fn recompute(&mut self) {
        let Some(table) = &self.table else {
            return;
        };
        self.visible_indices = filtered_indices(table, &self.criteria);

        let view = FilteredView::new(table, &self.visible_indices);
        let still_visible = self
            .selected_name
            .as_deref()
            .is_some_and(|name| resolve(&view, name).is_ok());
        if !still_visible {
            self.selected_name = view.records().next().map(|r| r.name.clone());
        }
        log::debug!(
            "{} of {} companies visible, selected {:?}",
            self.visible_indices.len(),
            table.len(),
            self.selected_name
        );
    }

    pub fn view(&self) -> Option<FilteredView<'_>> {
        self.table
            .as_deref()
            .map(|t| FilteredView::new(t, &self.visible_indices))
    }

    /// The selected company, or why there is none.
    pub fn selected_record(&self) -> Result<&Record, SelectionError> {
        let view = self.view().ok_or(SelectionError::EmptySubset)?;
        match self.selected_name.as_deref() {
            Some(name) => resolve(&view, name),
            None if view.is_empty() => Err(SelectionError::EmptySubset),
            None => Err(SelectionError::NotFound(String::new())),
        }
    }

    pub fn selected_trend(&self) -> Result<Trend<'_>, SelectionError> {
        let record = self.selected_record()?;
        let table = self.table.as_deref().ok_or(SelectionError::EmptySubset)?;
        Ok(Trend::new(&table.schema, record))
    }
}
