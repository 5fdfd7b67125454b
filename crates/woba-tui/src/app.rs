// Dashboard state: the loaded dataset, the minimum-PA filter and the table
// scroll position.
//
// Loading is one synchronous pass: pick the newest data file, read it, run
// the wOBA engine. The outcome is one of four `Dataset` states, each of which
// the UI renders differently.

use tracing::{info, warn};
use woba_core::data_source::{DataFile, DataSource};
use woba_core::events::load_events;
use woba_core::metrics::{compute_woba, PlayerAggregate, WobaTable, WobaWeights};

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// Result of loading the newest data file.
#[derive(Debug, Clone)]
pub enum Dataset {
    /// The data directory has no files matching the naming convention. `dir`
    /// is the directory as configured, for display.
    NoDataFiles { dir: String },
    /// The directory or the newest file could not be read.
    LoadFailed { message: String },
    /// The file loaded but no pitch ended a plate appearance with a named
    /// batter.
    NoPlateAppearances { file: DataFile },
    Ready { file: DataFile, table: WobaTable },
}

impl Dataset {
    /// The file in use, if one was found.
    pub fn file(&self) -> Option<&DataFile> {
        match self {
            Dataset::NoPlateAppearances { file } | Dataset::Ready { file, .. } => Some(file),
            Dataset::NoDataFiles { .. } | Dataset::LoadFailed { .. } => None,
        }
    }

    pub fn table(&self) -> Option<&WobaTable> {
        match self {
            Dataset::Ready { table, .. } => Some(table),
            _ => None,
        }
    }
}

/// Load the newest data file from `source` and compute wOBA for it.
pub fn load_dataset(source: &DataSource, weights: &WobaWeights) -> Dataset {
    let file = match source.latest() {
        Ok(Some(file)) => file,
        Ok(None) => {
            warn!("no data files found in {}", source.dir().display());
            return Dataset::NoDataFiles {
                dir: source.label().to_string(),
            };
        }
        Err(e) => {
            warn!("data source unavailable: {}", e);
            return Dataset::LoadFailed {
                message: e.to_string(),
            };
        }
    };

    info!("loading {}", file.path.display());
    let events = match load_events(&file.path) {
        Ok(events) => events,
        Err(e) => {
            warn!("failed to load {}: {}", file.file_name, e);
            return Dataset::LoadFailed {
                message: e.to_string(),
            };
        }
    };

    let table = compute_woba(&events, weights);
    info!(
        "{}: {} pitches, {} batters with plate appearances",
        file.file_name,
        events.len(),
        table.len()
    );

    if table.is_empty() {
        Dataset::NoPlateAppearances { file }
    } else {
        Dataset::Ready { file, table }
    }
}

// ---------------------------------------------------------------------------
// Minimum-PA filter
// ---------------------------------------------------------------------------

/// Threshold control bounded to `[1, max]`, where `max` is the largest PA
/// total in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinPaFilter {
    value: u32,
    max: u32,
}

impl MinPaFilter {
    /// Start at `value`, clamped into `[1, max_pa]`.
    pub fn new(value: u32, max_pa: u32) -> Self {
        let max = max_pa.max(1);
        MinPaFilter {
            value: value.clamp(1, max),
            max,
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn raise(&mut self, step: u32) {
        self.value = self.value.saturating_add(step).min(self.max);
    }

    pub fn lower(&mut self, step: u32) {
        self.value = self.value.saturating_sub(step).max(1);
    }

    pub fn to_min(&mut self) {
        self.value = 1;
    }

    pub fn to_max(&mut self) {
        self.value = self.max;
    }

    /// Position within the range, 0.0 at 1 and 1.0 at `max`.
    pub fn ratio(&self) -> f64 {
        if self.max <= 1 {
            return 1.0;
        }
        f64::from(self.value - 1) / f64::from(self.max - 1)
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

pub struct Dashboard {
    source: DataSource,
    weights: WobaWeights,
    default_min_pa: u32,
    dataset: Dataset,
    min_pa: Option<MinPaFilter>,
    scroll_offset: usize,
}

impl Dashboard {
    /// Build the dashboard and load the newest data file.
    pub fn new(source: DataSource, weights: WobaWeights, default_min_pa: u32) -> Self {
        let mut dashboard = Dashboard {
            source,
            weights,
            default_min_pa,
            dataset: Dataset::NoDataFiles { dir: String::new() },
            min_pa: None,
            scroll_offset: 0,
        };
        dashboard.reload();
        dashboard
    }

    /// Re-read the newest data file. The current threshold is kept, clamped
    /// to the new table's range.
    pub fn reload(&mut self) {
        self.dataset = load_dataset(&self.source, &self.weights);
        let start = self
            .min_pa
            .map_or(self.default_min_pa, |filter| filter.value());
        self.min_pa = self
            .dataset
            .table()
            .and_then(WobaTable::max_pa)
            .map(|max_pa| MinPaFilter::new(start, max_pa));
        self.scroll_offset = 0;
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn min_pa(&self) -> Option<&MinPaFilter> {
        self.min_pa.as_ref()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Rows that meet the threshold, in engine order.
    pub fn visible_rows(&self) -> Vec<&PlayerAggregate> {
        match (self.dataset.table(), self.min_pa) {
            (Some(table), Some(filter)) => table.with_min_pa(filter.value()),
            _ => Vec::new(),
        }
    }

    /// Apply `f` to the threshold, if there is one, and reset scrolling.
    pub fn adjust_min_pa(&mut self, f: impl FnOnce(&mut MinPaFilter)) {
        if let Some(filter) = self.min_pa.as_mut() {
            f(filter);
            self.scroll_offset = 0;
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let last = self.visible_rows().len().saturating_sub(1);
        self.scroll_offset = self.scroll_offset.saturating_add(lines).min(last);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
