// Data-file discovery.
//
// The fetch job writes one file per run into a data directory, named with a
// sortable date token (`mlb_data_filtered_2024-06-01.csv`). Lexical order on
// the file name is chronological order, so the newest file sorts last.

use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::DataConfig;

#[derive(Debug, thiserror::Error)]
pub enum DataSourceError {
    #[error("failed to read data directory {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// A discovered event file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFile {
    pub path: PathBuf,
    pub file_name: String,
    /// Date parsed from the file name token, when it is one.
    pub date: Option<NaiveDate>,
}

/// Where event files live and how they are named.
#[derive(Debug, Clone)]
pub struct DataSource {
    dir: PathBuf,
    /// How the directory is shown to the user.
    label: String,
    prefix: String,
    extension: String,
}

impl DataSource {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        let dir = dir.into();
        DataSource {
            label: dir.display().to_string(),
            dir,
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    /// Build a source from the `[data]` config section. A relative `dir` is
    /// resolved against `base_dir`; the label stays as configured.
    pub fn from_config(config: &DataConfig, base_dir: &Path) -> Self {
        DataSource {
            label: config.dir.clone(),
            ..DataSource::new(
                base_dir.join(&config.dir),
                config.file_prefix.clone(),
                config.extension.clone(),
            )
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// All matching files, oldest first. A missing directory has no files.
    pub fn list(&self) -> Result<Vec<DataFile>, DataSourceError> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("data directory {} does not exist", self.dir.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| self.io_error(e))?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(token) = self.date_token(file_name) else {
                continue;
            };
            let date = parse_date_token(token);
            files.push(DataFile {
                file_name: file_name.to_string(),
                path,
                date,
            });
        }

        files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(files)
    }

    /// The most recent file, if any.
    pub fn latest(&self) -> Result<Option<DataFile>, DataSourceError> {
        Ok(self.list()?.pop())
    }

    /// The part of `file_name` between the prefix and `.<extension>`, or
    /// `None` if the name does not follow the convention.
    fn date_token<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_prefix(self.prefix.as_str())?
            .strip_suffix(self.extension.as_str())?
            .strip_suffix('.')
    }

    fn io_error(&self, source: std::io::Error) -> DataSourceError {
        DataSourceError::Io {
            path: self.dir.display().to_string(),
            source,
        }
    }
}

fn parse_date_token(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(token, "%Y%m%d"))
        .ok()
}
