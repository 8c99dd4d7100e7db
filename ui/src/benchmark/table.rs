use dioxus::prelude::*;

use crate::core::{SortConfig, SortDirection, SortField, TableRow};
use crate::t;

fn column_label(field: SortField) -> String {
    match field {
        SortField::Cpu => t!("col-cpu"),
        SortField::Gpu => t!("col-gpu"),
        SortField::Ram => t!("col-ram"),
        SortField::Vram => t!("col-vram"),
        SortField::Llm => t!("col-model"),
        SortField::ModelSize => t!("col-size"),
        SortField::Performance => t!("col-tokens"),
        SortField::Time => t!("col-time"),
    }
}

fn sort_icon(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Descending) => "▼",
        Some(SortDirection::Ascending) => "▲",
        None => "",
    }
}

/// Classes for the GPU cell: every non-RTX card is flagged, and setups without a GPU
/// are additionally marked as integrated.
fn gpu_class(flagged: bool, integrated: bool) -> &'static str {
    match (flagged, integrated) {
        (_, true) => "gpu--flagged gpu--integrated",
        (true, false) => "gpu--flagged",
        (false, false) => "",
    }
}

#[component]
pub fn ComparisonTable(
    rows: Vec<TableRow>,
    sort: SortConfig,
    on_sort: EventHandler<SortField>,
) -> Element {
    let column_count = SortField::ALL.len();
    let is_empty = rows.is_empty();

    rsx! {
        div { class: "comparison-table__scroll",
            table { class: "comparison-table",
                thead {
                    tr { class: "comparison-table__groups",
                        th {
                            colspan: "4",
                            class: "comparison-table__group comparison-table__group--setup",
                            {t!("table-group-setup")}
                        }
                        th {
                            colspan: "2",
                            class: "comparison-table__group comparison-table__group--llm",
                            {t!("table-group-llm")}
                        }
                        th {
                            colspan: "2",
                            class: "comparison-table__group comparison-table__group--performance",
                            {t!("table-group-performance")}
                        }
                    }
                    tr { class: "comparison-table__columns",
                        for field in SortField::ALL {
                            th {
                                key: "{field:?}",
                                class: format!(
                                    "comparison-table__header {}",
                                    if field.is_numeric() {
                                        "comparison-table__header--numeric"
                                    } else {
                                        ""
                                    }
                                ),
                                onclick: move |_| on_sort.call(field),
                                "{column_label(field)} "
                                span {
                                    class: "comparison-table__sort-icon",
                                    "{sort_icon(sort.indicator(field))}"
                                }
                            }
                        }
                    }
                }
                tbody {
                    if is_empty {
                        tr { class: "comparison-table__empty",
                            td { colspan: "{column_count}", {t!("table-empty")} }
                        }
                    }
                    for (index, row) in rows.into_iter().enumerate() {
                        {render_row(index, row)}
                    }
                }
            }
        }
    }
}

fn render_row(index: usize, row: TableRow) -> Element {
    let TableRow {
        cpu,
        gpu,
        gpu_flagged,
        integrated_gpu,
        ram,
        vram,
        llm,
        model_size,
        speed_marker,
        performance,
        band,
        time,
    } = row;
    let gpu_class = gpu_class(gpu_flagged, integrated_gpu);

    rsx! {
        tr { key: "{index}", class: "comparison-table__row",
            td { "{cpu}" }
            td { class: gpu_class, "{gpu}" }
            td { "{ram}" }
            td { "{vram}" }
            td { "{llm}" }
            td { "{model_size}" }
            td { class: "comparison-table__numeric",
                span { class: band.css_class(), "{speed_marker}{performance}" }
            }
            td { class: "comparison-table__numeric", "{time}" }
        }
    }
}
