//! Derived view state: what the table and chart show for a given filter and sort.

use super::dataset::{Dataset, Record};
use super::filter::{filter_records, ModelFilter};
use super::format::{self, PerformanceBand};
use super::sort::{sort_records, SortConfig};

/// Which value the bar chart plots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChartMetric {
    /// Throughput in tokens per second.
    #[default]
    Tokens,
    /// Seconds per 1k tokens.
    Time,
}

impl ChartMetric {
    pub fn bar_color(self) -> &'static str {
        match self {
            Self::Tokens => "#8884d8",
            Self::Time => "#82ca9d",
        }
    }

    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::Tokens => format!("{value}"),
            Self::Time => format!("{value} s"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

/// Display-ready table row.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub cpu: String,
    pub gpu: String,
    /// GPU name does not start with `RTX`.
    pub gpu_flagged: bool,
    /// No discrete GPU (`n/a`); always flagged as well.
    pub integrated_gpu: bool,
    pub ram: String,
    pub vram: String,
    pub llm: String,
    pub model_size: String,
    pub speed_marker: &'static str,
    pub performance: String,
    pub band: PerformanceBand,
    pub time: String,
}

impl From<&Record> for TableRow {
    fn from(record: &Record) -> Self {
        Self {
            cpu: record.cpu.clone(),
            gpu: record.gpu.clone(),
            gpu_flagged: !record.gpu.starts_with("RTX"),
            integrated_gpu: !record.has_discrete_gpu(),
            ram: format::format_ram(record.ram_gb),
            vram: record.vram.clone(),
            llm: record.llm.clone(),
            model_size: record.model_size.clone(),
            speed_marker: format::speed_marker(record.tokens_per_second),
            performance: format::format_performance(record.tokens_per_second),
            band: PerformanceBand::of(record.tokens_per_second),
            time: format::format_time_seconds(&record.time_for_1k_tokens),
        }
    }
}

/// Filtered and sorted records for one combination of UI state.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkView {
    filter: ModelFilter,
    records: Vec<Record>,
}

impl BenchmarkView {
    pub fn derive(dataset: &Dataset, filter: &ModelFilter, sort: SortConfig) -> Self {
        let mut records = filter_records(dataset.records(), filter);
        sort_records(&mut records, sort);
        Self {
            filter: filter.clone(),
            records,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn rows(&self) -> Vec<TableRow> {
        self.records.iter().map(TableRow::from).collect()
    }

    /// The chart is only shown for a single model.
    pub fn show_chart(&self) -> bool {
        !self.filter.is_all()
    }

    /// One bar per row. Rows whose stored time does not parse are left out of the time chart.
    pub fn chart_points(&self, metric: ChartMetric) -> Vec<ChartPoint> {
        self.records
            .iter()
            .filter_map(|record| {
                let value = match metric {
                    ChartMetric::Tokens => Some(record.tokens_per_second),
                    ChartMetric::Time => record.time_for_1k_tokens(),
                }?;
                Some(ChartPoint {
                    name: record.cpu.clone(),
                    value,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sort::{SortDirection, SortField};

    fn llama() -> ModelFilter {
        ModelFilter::Model("llama3.2 | 3 B".into())
    }

    fn all_rows() -> Vec<TableRow> {
        BenchmarkView::derive(Dataset::builtin(), &ModelFilter::All, SortConfig::default()).rows()
    }

    #[test]
    fn row_formatting() {
        let record = &Dataset::builtin().records()[0];
        let row = TableRow::from(record);
        assert_eq!(row.ram, "32 GB");
        assert_eq!(row.time, "10 s");
        assert_eq!(row.performance, "105.2");
        assert_eq!(row.speed_marker, "⚡⚡");
        assert_eq!(row.band, PerformanceBand::D);
        assert!(!row.gpu_flagged);
        assert!(!row.integrated_gpu);
    }

    #[test]
    fn non_rtx_gpus_are_flagged() {
        let rows = all_rows();
        let flagged: Vec<_> = rows
            .iter()
            .filter(|r| r.gpu_flagged)
            .map(|r| r.gpu.as_str())
            .collect();
        assert!(flagged.iter().all(|gpu| ["n/a", "AMD Vega", "910MX"].contains(gpu)));
        assert_eq!(flagged.len(), 12);
    }

    #[test]
    fn only_missing_gpu_counts_as_integrated() {
        let rows = all_rows();
        let discrete_flagged = rows.iter().find(|r| r.gpu == "910MX").unwrap();
        assert!(discrete_flagged.gpu_flagged);
        assert!(!discrete_flagged.integrated_gpu);

        let none = rows.iter().find(|r| r.gpu == "n/a").unwrap();
        assert!(none.gpu_flagged && none.integrated_gpu);
        assert!(rows.iter().filter(|r| r.integrated_gpu).all(|r| r.gpu_flagged));
    }

    #[test]
    fn chart_hidden_for_all_models() {
        let all =
            BenchmarkView::derive(Dataset::builtin(), &ModelFilter::All, SortConfig::default());
        assert!(!all.show_chart());
        let one = BenchmarkView::derive(Dataset::builtin(), &llama(), SortConfig::default());
        assert!(one.show_chart());
    }

    #[test]
    fn chart_points_follow_table_order() {
        let view = BenchmarkView::derive(Dataset::builtin(), &llama(), SortConfig::default());
        let tokens = view.chart_points(ChartMetric::Tokens);
        assert_eq!(tokens.len(), 7);
        assert_eq!(
            tokens[0],
            ChartPoint {
                name: "Ryzen 7 9800X3D".into(),
                value: 158.1
            }
        );

        let time = view.chart_points(ChartMetric::Time);
        assert_eq!(time[0].value, 6.33);
        assert_eq!(
            time[6],
            ChartPoint {
                name: "i7-7500".into(),
                value: 212.77
            }
        );
    }

    #[test]
    fn sort_applies_after_filter() {
        let config = SortConfig {
            field: SortField::Cpu,
            direction: SortDirection::Ascending,
        };
        let view = BenchmarkView::derive(Dataset::builtin(), &llama(), config);
        let cpus: Vec<_> = view.records().iter().map(|r| r.cpu.as_str()).collect();
        assert_eq!(
            cpus,
            [
                "M3 Pro",
                "Ryzen 5 5600X",
                "Ryzen 7 5800H",
                "Ryzen 7 9800X3D",
                "i3-1215U",
                "i5-12450H",
                "i7-7500"
            ]
        );
    }

    #[test]
    fn chart_value_labels() {
        assert_eq!(ChartMetric::Tokens.format_value(58.8), "58.8");
        assert_eq!(ChartMetric::Time.format_value(17.01), "17.01 s");
        assert_eq!(ChartMetric::default(), ChartMetric::Tokens);
    }
}
