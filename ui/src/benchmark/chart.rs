use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::{ChartMetric, ChartPoint};
use crate::t;

const CHART_WIDTH: f64 = 800.0;
const CHART_HEIGHT: f64 = 300.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 40.0;
const MARGIN_LEFT: f64 = 50.0;
const GRID_LINES: usize = 4;

/// Pixel geometry of one bar inside the SVG view box.
#[derive(Debug, Clone, PartialEq)]
struct Bar {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    label_x: f64,
}

fn plot_width() -> f64 {
    CHART_WIDTH - MARGIN_LEFT - MARGIN_RIGHT
}

fn plot_height() -> f64 {
    CHART_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM
}

/// Upper bound of the y axis: the largest value rounded up to a multiple of the grid step.
fn axis_max(points: &[ChartPoint]) -> f64 {
    let max_value = points.iter().map(|p| p.value).fold(0.0f64, f64::max);
    if max_value <= 0.0 {
        return 1.0;
    }
    let step = nice_step(max_value / GRID_LINES as f64);
    step * GRID_LINES as f64
}

fn nice_step(raw: f64) -> f64 {
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 2.5 {
        2.5
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

fn layout_bars(points: &[ChartPoint], max_value: f64) -> Vec<Bar> {
    if points.is_empty() {
        return Vec::new();
    }
    let slot = plot_width() / points.len() as f64;
    let width = slot * 0.8;
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let height = plot_height() * (point.value / max_value).clamp(0.0, 1.0);
            let slot_x = MARGIN_LEFT + slot * i as f64;
            Bar {
                x: slot_x + (slot - width) / 2.0,
                y: MARGIN_TOP + plot_height() - height,
                width,
                height,
                label_x: slot_x + slot / 2.0,
            }
        })
        .collect()
}

fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Text shown when hovering a bar, e.g. `Ryzen 7 9800X3D: 158.1 (Tokens/s)`.
fn tooltip_text(point: &ChartPoint, metric: ChartMetric, series_name: &str) -> String {
    format!("{}: {} ({series_name})", point.name, metric.format_value(point.value))
}

/// Tooltip anchor above the bar, as percentages of the chart box.
fn tooltip_position(bar: &Bar) -> (f64, f64) {
    (bar.label_x / CHART_WIDTH * 100.0, bar.y / CHART_HEIGHT * 100.0)
}

#[component]
pub fn ChartToggleButton(
    label: String,
    is_selected: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: format!(
                "chart-toggle {}",
                if is_selected { "chart-toggle--selected" } else { "" }
            ),
            aria_pressed: "{is_selected}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

/// Bar chart of the visible rows. The selected metric lives in the page component so it
/// survives the chart being hidden and shown again.
#[component]
pub fn PerformanceChart(points: Vec<ChartPoint>, metric: Signal<ChartMetric>) -> Element {
    let mut metric_signal = metric;
    let mut hovered: Signal<Option<usize>> = use_signal(|| None);
    let current = metric();
    let mut select_metric = move |next: ChartMetric| {
        debug!(metric = ?next, "chart metric changed");
        metric_signal.set(next);
    };
    let series_name = match current {
        ChartMetric::Tokens => t!("chart-series-tokens"),
        ChartMetric::Time => t!("chart-series-time"),
    };
    let color = current.bar_color();

    let max_value = axis_max(&points);
    let bars = layout_bars(&points, max_value);
    let baseline = MARGIN_TOP + plot_height();
    let tooltip = hovered().and_then(|i| {
        let (left, top) = tooltip_position(bars.get(i)?);
        Some((tooltip_text(points.get(i)?, current, &series_name), left, top))
    });

    rsx! {
        section { class: "performance-chart",
            div { class: "performance-chart__header",
                h3 { class: "performance-chart__title", {t!("chart-title")} }
                div { class: "performance-chart__toggles",
                    ChartToggleButton {
                        label: t!("chart-metric-tokens"),
                        is_selected: current == ChartMetric::Tokens,
                        onclick: move |_| select_metric(ChartMetric::Tokens),
                    }
                    ChartToggleButton {
                        label: t!("chart-metric-time"),
                        is_selected: current == ChartMetric::Time,
                        onclick: move |_| select_metric(ChartMetric::Time),
                    }
                }
            }

            if points.is_empty() {
                p { class: "performance-chart__placeholder", {t!("chart-empty")} }
            } else {
                div { class: "performance-chart__canvas",
                    div {
                        class: "performance-chart__plot",
                        onmouseleave: move |_| hovered.set(None),
                        svg {
                            class: "performance-chart__svg",
                            view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                            role: "img",
                            "aria-label": "{series_name}",

                            for i in 0..=GRID_LINES {
                                {
                                    let fraction = i as f64 / GRID_LINES as f64;
                                    let y = MARGIN_TOP + plot_height() * (1.0 - fraction);
                                    let tick = format_tick(max_value * fraction);
                                    rsx! {
                                        line {
                                            key: "grid-{i}",
                                            class: "performance-chart__grid",
                                            x1: "{MARGIN_LEFT}",
                                            y1: "{y}",
                                            x2: "{CHART_WIDTH - MARGIN_RIGHT}",
                                            y2: "{y}",
                                            "stroke-dasharray": "3 3",
                                        }
                                        text {
                                            key: "tick-{i}",
                                            class: "performance-chart__tick",
                                            x: "{MARGIN_LEFT - 6.0}",
                                            y: "{y + 4.0}",
                                            "text-anchor": "end",
                                            "{tick}"
                                        }
                                    }
                                }
                            }

                            line {
                                class: "performance-chart__axis",
                                x1: "{MARGIN_LEFT}",
                                y1: "{baseline}",
                                x2: "{CHART_WIDTH - MARGIN_RIGHT}",
                                y2: "{baseline}",
                            }

                            for (i, (point, bar)) in points.iter().zip(bars.iter()).enumerate() {
                                g {
                                    key: "bar-{i}",
                                    onmouseenter: move |_| hovered.set(Some(i)),
                                    onmouseleave: move |_| hovered.set(None),
                                    rect {
                                        class: "performance-chart__bar",
                                        x: "{bar.x}",
                                        y: "{bar.y}",
                                        width: "{bar.width}",
                                        height: "{bar.height}",
                                        fill: "{color}",
                                    }
                                    text {
                                        class: "performance-chart__label",
                                        x: "{bar.label_x}",
                                        y: "{baseline + 16.0}",
                                        "text-anchor": "middle",
                                        "{point.name}"
                                    }
                                }
                            }
                        }
                        if let Some((text, left, top)) = tooltip {
                            div {
                                class: "performance-chart__tooltip",
                                role: "tooltip",
                                style: "left: {left}%; top: {top}%;",
                                "{text}"
                            }
                        }
                    }
                }
                div { class: "performance-chart__legend",
                    span { class: "performance-chart__swatch", style: "background: {color};" }
                    span { "{series_name}" }
                }
            }
        }
    }
}
