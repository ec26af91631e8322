//! Record and style file loading
//!
//! Supports JSON, YAML and CSV data files. Format is chosen from the file
//! extension; anything unknown is read as JSON.

use crate::model::Record;
use crate::style::StyleConfig;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("expected a list of records (or an object with a `rows` or `data` list)")]
    NotAList,

    #[error("entry {0} is not an object")]
    NotARecord(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Json,
    Yaml,
    Csv,
}

impl DataFormat {
    pub fn from_path(path: &Path) -> DataFormat {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("yaml") | Some("yml") => DataFormat::Yaml,
            Some("csv") => DataFormat::Csv,
            _ => DataFormat::Json,
        }
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load records from a data file
pub fn load_records(path: &Path) -> Result<Vec<Record>, LoadError> {
    let contents = read(path)?;
    let records = parse_records(&contents, DataFormat::from_path(path))?;
    log::info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

pub fn parse_records(contents: &str, format: DataFormat) -> Result<Vec<Record>, LoadError> {
    match format {
        DataFormat::Json => records_from_value(serde_json::from_str(contents)?),
        DataFormat::Yaml => {
            if contents.trim().is_empty() {
                return Ok(Vec::new());
            }
            records_from_value(serde_yaml::from_str(contents)?)
        }
        DataFormat::Csv => parse_csv(contents),
    }
}

fn records_from_value(value: Value) -> Result<Vec<Record>, LoadError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("rows").or_else(|| map.remove("data")) {
            Some(Value::Array(items)) => items,
            _ => return Err(LoadError::NotAList),
        },
        _ => return Err(LoadError::NotAList),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(LoadError::NotARecord(index)),
        })
        .collect()
}

fn parse_csv(contents: &str) -> Result<Vec<Record>, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(contents.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.trim().to_string()).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            record.insert(header.clone(), Value::String(cell.to_string()));
        }
        records.push(record);
    }
    Ok(records)
}

/// Load a style file (JSON or YAML)
pub fn load_style(path: &Path) -> Result<StyleConfig, LoadError> {
    let contents = read(path)?;
    match DataFormat::from_path(path) {
        DataFormat::Yaml => Ok(serde_yaml::from_str(&contents)?),
        _ => Ok(serde_json::from_str(&contents)?),
    }
}
