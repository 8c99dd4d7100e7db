//! Pure benchmark logic: dataset, filtering, sorting and display formatting.
//! Nothing in here touches Dioxus state, so it is exercised directly by tests.

pub mod dataset;
pub mod filter;
pub mod format;
pub mod sort;
pub mod view;

pub use dataset::{Dataset, DatasetError, Record};
pub use filter::{filter_records, model_options, ModelFilter};
pub use sort::{sort_records, SortConfig, SortDirection, SortField};
pub use view::{BenchmarkView, ChartMetric, ChartPoint, TableRow};
