//! Column sorting for the comparison table.
//!
//! Every sortable column is a `SortField` variant with its own comparator; there is no
//! name-based field lookup. Sorting is stable, so ties keep the original dataset order
//! in both directions.
//!
//! The time column is compared on its parsed value rather than as text, so `"9.51"`
//! sorts before `"17.21"`. Values that do not parse sort after every number.

use std::cmp::Ordering;

use super::dataset::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Cpu,
    Gpu,
    Ram,
    Vram,
    Llm,
    ModelSize,
    Performance,
    Time,
}

impl SortField {
    /// Table column order.
    pub const ALL: [SortField; 8] = [
        SortField::Cpu,
        SortField::Gpu,
        SortField::Ram,
        SortField::Vram,
        SortField::Llm,
        SortField::ModelSize,
        SortField::Performance,
        SortField::Time,
    ];

    pub fn compare(self, a: &Record, b: &Record) -> Ordering {
        match self {
            Self::Cpu => a.cpu.cmp(&b.cpu),
            Self::Gpu => a.gpu.cmp(&b.gpu),
            Self::Ram => a.ram_gb.total_cmp(&b.ram_gb),
            Self::Vram => a.vram.cmp(&b.vram),
            Self::Llm => a.llm.cmp(&b.llm),
            Self::ModelSize => a.model_size.cmp(&b.model_size),
            Self::Performance => a.tokens_per_second.total_cmp(&b.tokens_per_second),
            Self::Time => compare_time(a.time_for_1k_tokens(), b.time_for_1k_tokens()),
        }
    }

    /// Numeric columns are right-aligned in the table.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Performance | Self::Time)
    }
}

fn compare_time(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            field: SortField::Performance,
            direction: SortDirection::Descending,
        }
    }
}

impl SortConfig {
    /// Configuration after the user clicks the `field` header.
    ///
    /// Clicking the active column while it is descending flips it to ascending. Anything
    /// else (another column, or the active column while ascending) sorts descending.
    pub fn toggled(self, field: SortField) -> Self {
        let direction = if self.field == field && self.direction == SortDirection::Descending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        Self { field, direction }
    }

    /// Direction shown on the `field` header, if it is the active column.
    pub fn indicator(self, field: SortField) -> Option<SortDirection> {
        (self.field == field).then_some(self.direction)
    }
}

pub fn sort_records(records: &mut [Record], config: SortConfig) {
    match config.direction {
        SortDirection::Ascending => records.sort_by(|a, b| config.field.compare(a, b)),
        SortDirection::Descending => records.sort_by(|a, b| config.field.compare(b, a)),
    }
}
