//! Benchmark records and the embedded dataset.
//!
//! The records are compiled in from `assets/data/benchmarks.json`. The JSON uses the
//! column names of the published benchmark sheet, so field names are remapped with serde.

use dioxus::logger::tracing::{error, info};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::format::parse_time_seconds;

const BUILTIN_JSON: &str = include_str!("../../assets/data/benchmarks.json");

/// GPU value used when a setup runs on integrated graphics only.
pub const NO_GPU: &str = "n/a";

/// One measured hardware + model combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "CPU")]
    pub cpu: String,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    /// System memory in GB.
    #[serde(rename = "RAM")]
    pub ram_gb: f64,
    #[serde(rename = "GPU")]
    pub gpu: String,
    #[serde(rename = "VRAM")]
    pub vram: String,
    #[serde(rename = "LLM")]
    pub llm: String,
    #[serde(rename = "Parameters")]
    pub parameters: String,
    #[serde(rename = "Model Size")]
    pub model_size: String,
    /// Measured throughput in tokens per second.
    #[serde(rename = "Performance")]
    pub tokens_per_second: f64,
    /// Seconds needed for 1000 tokens, stored as published (not recomputed).
    #[serde(rename = "timeFor1kTokens")]
    pub time_for_1k_tokens: String,
}

impl Record {
    /// Grouping key used by the model filter, e.g. `llama3.2 | 3 B`.
    pub fn model_key(&self) -> String {
        format!("{} | {}", self.llm, self.parameters)
    }

    pub fn has_discrete_gpu(&self) -> bool {
        self.gpu != NO_GPU
    }

    /// Stored time for 1k tokens, `None` unless the text is a finite, non-negative number.
    pub fn time_for_1k_tokens(&self) -> Option<f64> {
        parse_time_seconds(&self.time_for_1k_tokens)
    }

    /// Time for 1k tokens computed from the throughput.
    pub fn derived_time_for_1k_tokens(&self) -> Option<f64> {
        if self.tokens_per_second > 0.0 && self.tokens_per_second.is_finite() {
            Some(1000.0 / self.tokens_per_second)
        } else {
            None
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("benchmark data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("benchmark data contains no records")]
    Empty,
}

/// An immutable, ordered list of benchmark records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

static BUILTIN: Lazy<Dataset> = Lazy::new(|| match Dataset::parse(BUILTIN_JSON) {
    Ok(dataset) => {
        info!(records = dataset.len(), "loaded built-in benchmark dataset");
        dataset
    }
    Err(err) => {
        error!(%err, "failed to load built-in benchmark dataset");
        Dataset::default()
    }
});

impl Dataset {
    pub fn parse(json: &str) -> Result<Self, DatasetError> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(Self { records })
    }

    /// The dataset shipped with the app.
    pub fn builtin() -> &'static Dataset {
        &BUILTIN
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records whose stored time for 1k tokens disagrees with `1000 / tokens_per_second`
    /// by more than `tolerance_s` seconds, or cannot be checked at all.
    pub fn drifted_records(&self, tolerance_s: f64) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|record| {
                match (record.time_for_1k_tokens(), record.derived_time_for_1k_tokens()) {
                    (Some(stored), Some(derived)) => (stored - derived).abs() > tolerance_s,
                    _ => true,
                }
            })
            .collect()
    }
}
