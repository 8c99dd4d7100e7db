use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::benchmark::{ComparisonTable, Filters, PerformanceChart};
use crate::core::{
    model_options, BenchmarkView, ChartMetric, Dataset, ModelFilter, SortConfig, SortField,
};
use crate::t;

/// The benchmark page. Owns the three pieces of UI state and recomputes the derived
/// view on every render.
#[component]
pub fn Benchmark() -> Element {
    // Re-render when the locale switcher changes the global language code.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let dataset = Dataset::builtin();
    let mut sort = use_signal(SortConfig::default);
    let mut filter = use_signal(ModelFilter::default);
    let chart_metric = use_signal(ChartMetric::default);

    let options = use_hook(|| model_options(dataset.records()));
    let view = use_memo(move || BenchmarkView::derive(dataset, &filter(), sort()));

    let on_sort = move |field: SortField| {
        let next = sort().toggled(field);
        debug!(?field, direction = ?next.direction, "sort changed");
        sort.set(next);
    };

    let on_select = move |selection: ModelFilter| {
        debug!(?selection, "model filter changed");
        filter.set(selection);
    };

    let current = view();
    let rows = current.rows();
    let show_chart = current.show_chart();
    let points = current.chart_points(chart_metric());

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: "page page-benchmark",
            div { class: "page-benchmark__header",
                h1 { {t!("page-title")} }
                Filters {
                    options: options,
                    selected: filter(),
                    on_select: on_select,
                }
            }
            div { class: "page-benchmark__body",
                ComparisonTable {
                    rows: rows,
                    sort: sort(),
                    on_sort: on_sort,
                }
                if show_chart {
                    PerformanceChart {
                        points: points,
                        metric: chart_metric,
                    }
                }
            }
        }
    }
}
