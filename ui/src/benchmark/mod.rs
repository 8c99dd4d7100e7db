mod filters;
pub use filters::{FilterButton, Filters};

mod table;
pub use table::ComparisonTable;

mod chart;
pub use chart::{ChartToggleButton, PerformanceChart};
