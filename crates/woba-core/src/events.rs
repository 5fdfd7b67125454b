// Pitch-level event loading.
//
// Reads Statcast-format CSV files: one row per pitch, dozens of columns, of
// which only `events`, `des` and `batter` are used.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// Stable per-player identifier assigned by the data provider.
pub type BatterId = u64;

/// Columns that must be present in every event file.
pub const REQUIRED_COLUMNS: [&str; 3] = ["events", "des", "batter"];

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One pitch. Only pitches that end a plate appearance carry an `events`
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PitchEvent {
    /// Outcome label (`walk`, `single`, `strikeout`, ...). Empty fields
    /// deserialize to `None`.
    #[serde(default)]
    pub events: Option<String>,
    /// Free-text play description, led by the batter's name.
    #[serde(default)]
    pub des: Option<String>,
    pub batter: BatterId,
}

impl PitchEvent {
    pub fn new(events: Option<&str>, des: Option<&str>, batter: BatterId) -> Self {
        PitchEvent {
            events: events.map(str::to_string),
            des: des.map(str::to_string),
            batter,
        }
    }

    /// The outcome label if this pitch completed a plate appearance.
    pub fn outcome(&self) -> Option<&str> {
        self.events.as_deref().filter(|label| !label.is_empty())
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum EventsError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("{path} is missing required column `{column}`")]
    MissingColumn { path: String, column: &'static str },
}

/// Reader-level failure, before the path is attached.
#[derive(Debug)]
enum ReadFailure {
    Csv(csv::Error),
    MissingColumn(&'static str),
}

impl ReadFailure {
    fn at(self, path: &Path) -> EventsError {
        let path = path.display().to_string();
        match self {
            ReadFailure::Csv(source) => EventsError::Csv { path, source },
            ReadFailure::MissingColumn(column) => EventsError::MissingColumn { path, column },
        }
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

fn load_events_from_reader<R: Read>(rdr: R) -> Result<Vec<PitchEvent>, ReadFailure> {
    let mut reader = csv::Reader::from_reader(rdr);

    let headers = reader.headers().map_err(ReadFailure::Csv)?;
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(ReadFailure::MissingColumn(column));
        }
    }

    let mut events = Vec::new();
    let mut skipped = 0usize;
    for result in reader.deserialize::<PitchEvent>() {
        match result {
            Ok(event) => events.push(event),
            Err(e) => {
                warn!("skipping malformed pitch row: {}", e);
                skipped += 1;
            }
        }
    }
    debug!("read {} pitch rows ({} skipped)", events.len(), skipped);
    Ok(events)
}

/// Load every pitch row from a Statcast CSV file.
pub fn load_events(path: &Path) -> Result<Vec<PitchEvent>, EventsError> {
    let file = std::fs::File::open(path).map_err(|e| EventsError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_events_from_reader(file).map_err(|e| e.at(path))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
