use dioxus::prelude::*;

use crate::core::ModelFilter;
use crate::t;

#[component]
pub fn FilterButton(
    label: String,
    is_selected: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: format!(
                "filter-button {}",
                if is_selected { "filter-button--selected" } else { "" }
            ),
            aria_pressed: "{is_selected}",
            onclick: move |evt| onclick.call(evt),
            "{label}"
        }
    }
}

/// "All models" followed by one button per model key.
#[component]
pub fn Filters(
    options: Vec<String>,
    selected: ModelFilter,
    on_select: EventHandler<ModelFilter>,
) -> Element {
    let selected_key = selected.selected_key().map(str::to_string);

    rsx! {
        div { class: "benchmark-filters",
            FilterButton {
                label: t!("filter-all"),
                is_selected: selected.is_all(),
                onclick: move |_| on_select.call(ModelFilter::All),
            }
            for key in options.into_iter() {
                {
                    let is_selected = selected_key.as_deref() == Some(key.as_str());
                    let choice = ModelFilter::Model(key.clone());
                    rsx! {
                        FilterButton {
                            key: "{key}",
                            label: key.clone(),
                            is_selected: is_selected,
                            onclick: move |_| on_select.call(choice.clone()),
                        }
                    }
                }
            }
        }
    }
}
