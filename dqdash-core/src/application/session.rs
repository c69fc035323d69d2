// dqdash-core/src/application/session.rs

use tracing::{debug, info, warn};

use crate::application::views::{DashboardViews, derive_views};
use crate::domain::check::{Dataset, Dimension, FilterSelection, SelectorOptions, is_wildcard};
use crate::domain::error::DomainError;

/// Something the user did to the selectors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    Changed { dimension: Dimension, value: String },
    Reset,
}

impl SelectionEvent {
    /// `table_name=orders`, `schema = db1`, `reset`.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("reset") {
            return Ok(SelectionEvent::Reset);
        }

        let (name, value) = input
            .split_once('=')
            .ok_or_else(|| DomainError::UnknownDimension(input.to_string()))?;
        let dimension: Dimension = name.parse()?;
        if !dimension.is_filterable() {
            return Err(DomainError::NotFilterable(dimension.to_string()));
        }

        Ok(SelectionEvent::Changed {
            dimension,
            value: value.trim().to_string(),
        })
    }
}

/// One user's view over one fetched snapshot.
///
/// The dataset is fixed for the life of the session (until an explicit
/// refresh swaps it); selection events only re-run filter + aggregation.
pub struct DashboardSession {
    dataset: Dataset,
    options: SelectorOptions,
    selection: FilterSelection,
    views: DashboardViews,
    revision: u64,
}

impl DashboardSession {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_selection(dataset, FilterSelection::all())
    }

    pub fn with_selection(dataset: Dataset, selection: FilterSelection) -> Self {
        let options = SelectorOptions::from_dataset(&dataset);
        let views = derive_views(&dataset, &selection);
        info!(rows = dataset.len(), "Dashboard session started");
        Self {
            dataset,
            options,
            selection,
            views,
            revision: 0,
        }
    }

    /// Applies a selector change. Returns `true` when the views were
    /// recomputed, `false` when the event left the selection unchanged.
    pub fn handle(&mut self, event: SelectionEvent) -> Result<bool, DomainError> {
        let changed = match event {
            SelectionEvent::Changed { dimension, value } => {
                if !is_wildcard(&value) && !self.options.get(dimension).contains(&value) {
                    warn!(%dimension, %value, "Selected value is absent from the dataset");
                }
                self.selection.set(dimension, value)?
            }
            SelectionEvent::Reset => {
                let reset = FilterSelection::all();
                let changed = self.selection != reset;
                self.selection = reset;
                changed
            }
        };

        if !changed {
            debug!("Selection unchanged, keeping current views");
            return Ok(false);
        }
        self.recompute();
        Ok(true)
    }

    /// Swaps in a freshly fetched snapshot, keeping the current selection.
    pub fn replace_dataset(&mut self, dataset: Dataset) {
        self.options = SelectorOptions::from_dataset(&dataset);
        self.dataset = dataset;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.views = derive_views(&self.dataset, &self.selection);
        self.revision += 1;
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn options(&self) -> &SelectorOptions {
        &self.options
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn views(&self) -> &DashboardViews {
        &self.views
    }

    /// Number of recomputations since the session started.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
