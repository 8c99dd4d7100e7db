//! Model filter: restrict the table to one `LLM | Parameters` variant.

use std::collections::HashSet;

use super::dataset::Record;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModelFilter {
    #[default]
    All,
    Model(String),
}

impl ModelFilter {
    pub fn matches(&self, record: &Record) -> bool {
        match self {
            Self::All => true,
            Self::Model(key) => record.model_key() == *key,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    pub fn selected_key(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Model(key) => Some(key.as_str()),
        }
    }
}

/// Distinct model keys in first-occurrence order.
pub fn model_options(records: &[Record]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(Record::model_key)
        .filter(|key| seen.insert(key.clone()))
        .collect()
}

/// Records matching `filter`, in their original relative order.
pub fn filter_records(records: &[Record], filter: &ModelFilter) -> Vec<Record> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::Dataset;

    #[test]
    fn options_are_unique_in_first_occurrence_order() {
        let options = model_options(Dataset::builtin().records());
        assert_eq!(
            options,
            vec![
                "llama3.2 | 3 B",
                "deepseek-r1 | 7 B",
                "deepseek-r1 | 8 B",
                "deepseek-r1 | 14 B",
                "phi4 | 14 B",
            ]
        );
    }

    #[test]
    fn all_keeps_everything_in_order() {
        let records = Dataset::builtin().records();
        assert_eq!(filter_records(records, &ModelFilter::All), records.to_vec());
    }

    #[test]
    fn model_filter_keeps_only_matching_key() {
        let records = Dataset::builtin().records();
        let filter = ModelFilter::Model("deepseek-r1 | 8 B".into());
        let filtered = filter_records(records, &filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|r| r.model_key() == "deepseek-r1 | 8 B"));
        assert_eq!(filtered[0].cpu, "Ryzen 5 5600X");
        assert_eq!(filtered[1].cpu, "Ryzen 5 5800H");
    }

    #[test]
    fn unknown_key_yields_no_rows() {
        let filter = ModelFilter::Model("mistral | 7 B".into());
        assert!(filter_records(Dataset::builtin().records(), &filter).is_empty());
    }
}
