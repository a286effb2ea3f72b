use std::collections::BTreeSet;

use dioxus::prelude::*;

use crate::domain::entities::criteria::DatePreset;
use crate::domain::entities::pagination::PageSize;
use crate::ui::controls::{toggle_selection, SelectMode};

const INPUT_STYLE: &str =
    "border: 1px solid #bbb; background: #fff; padding: 4px 8px; border-radius: 6px;";
const BUTTON_STYLE: &str = "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;";

#[component]
pub fn SearchBox(
    value: String,
    placeholder: &'static str,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        input {
            r#type: "search",
            style: "{INPUT_STYLE} min-width: 260px;",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |event| on_change.call(event.value()),
        }
    }
}

#[component]
pub fn MultiSelectFilter(
    label: &'static str,
    options: Vec<String>,
    selected: BTreeSet<String>,
    mode: SelectMode,
    on_change: EventHandler<BTreeSet<String>>,
) -> Element {
    let mut open = use_signal(|| false);
    let summary = if selected.is_empty() {
        "All".to_string()
    } else {
        selected.iter().cloned().collect::<Vec<_>>().join(", ")
    };
    let input_type = match mode {
        SelectMode::Multiple => "checkbox",
        SelectMode::Single => "radio",
    };

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center; gap: 6px;",
            span { "{label}" }
            button {
                style: BUTTON_STYLE,
                onclick: move |event| {
                    event.stop_propagation();
                    open.set(!open());
                },
                "{summary}"
            }
            if open() {
                div {
                    style: "position: absolute; top: 110%; left: 0; min-width: 200px; max-height: 280px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; padding: 6px;",
                    onclick: move |event| event.stop_propagation(),
                    if options.is_empty() {
                        span { style: "color: #888; padding: 6px 4px;", "(no values)" }
                    }
                    {options.iter().map(|option| {
                        let checked = selected.contains(option);
                        let text = option.clone();
                        let value = option.clone();
                        let current = selected.clone();
                        rsx!(
                            label {
                                key: "{text}",
                                style: "display: flex; align-items: center; gap: 8px; padding: 6px 4px; cursor: pointer;",
                                input {
                                    r#type: input_type,
                                    checked: checked,
                                    onclick: move |_| {
                                        on_change.call(toggle_selection(&current, &value, mode));
                                    }
                                }
                                span { "{text}" }
                            }
                        )
                    })}
                }
            }
        }
    }
}

#[component]
pub fn DatePresetPicker(value: DatePreset, on_change: EventHandler<DatePreset>) -> Element {
    rsx! {
        select {
            style: INPUT_STYLE,
            onchange: move |event| {
                if let Ok(preset) = event.value().parse::<DatePreset>() {
                    on_change.call(preset);
                }
            },
            {DatePreset::ALL_PRESETS.into_iter().map(|preset| {
                let code = preset.as_str();
                let text = preset.label();
                rsx!(
                    option { key: "{code}", value: "{code}", selected: preset == value, "{text}" }
                )
            })}
        }
    }
}

/// Two `YYYY-MM-DD` inputs; the parent decides whether the pair is usable.
#[component]
pub fn DateRangeInputs(
    start: String,
    end: String,
    on_change: EventHandler<(String, String)>,
) -> Element {
    let end_for_start = end.clone();
    let start_for_end = start.clone();
    rsx! {
        div {
            style: "display: inline-flex; align-items: center; gap: 6px;",
            span { "From" }
            input {
                r#type: "date",
                style: INPUT_STYLE,
                value: "{start}",
                onchange: move |event| on_change.call((event.value(), end_for_start.clone())),
            }
            span { "to" }
            input {
                r#type: "date",
                style: INPUT_STYLE,
                value: "{end}",
                onchange: move |event| on_change.call((start_for_end.clone(), event.value())),
            }
        }
    }
}

#[component]
pub fn NumericRangeInputs(
    label: &'static str,
    min: String,
    max: String,
    on_change: EventHandler<(String, String)>,
) -> Element {
    let max_for_min = max.clone();
    let min_for_max = min.clone();
    rsx! {
        div {
            style: "display: inline-flex; align-items: center; gap: 6px;",
            span { "{label}" }
            input {
                style: "{INPUT_STYLE} width: 80px;",
                placeholder: "min",
                value: "{min}",
                oninput: move |event| on_change.call((event.value(), max_for_min.clone())),
            }
            span { "–" }
            input {
                style: "{INPUT_STYLE} width: 80px;",
                placeholder: "max",
                value: "{max}",
                oninput: move |event| on_change.call((min_for_max.clone(), event.value())),
            }
        }
    }
}

#[component]
pub fn PageSizePicker(value: PageSize, on_change: EventHandler<PageSize>) -> Element {
    rsx! {
        select {
            style: INPUT_STYLE,
            onchange: move |event| {
                let parsed = event
                    .value()
                    .parse::<usize>()
                    .ok()
                    .and_then(|size| PageSize::try_from(size).ok());
                if let Some(size) = parsed {
                    on_change.call(size);
                }
            },
            {PageSize::ALL.into_iter().map(|size| {
                let count = size.get();
                rsx!(
                    option { key: "{count}", value: "{count}", selected: size == value, "{count} / page" }
                )
            })}
        }
    }
}

#[component]
pub fn PaginationBar(
    current_page: usize,
    total_pages: usize,
    on_page: EventHandler<usize>,
) -> Element {
    let has_previous = current_page > 1;
    let has_next = current_page < total_pages;
    rsx! {
        div {
            style: "display: inline-flex; align-items: center; gap: 8px;",
            button {
                style: BUTTON_STYLE,
                disabled: !has_previous,
                onclick: move |_| on_page.call(1),
                "«"
            }
            button {
                style: BUTTON_STYLE,
                disabled: !has_previous,
                onclick: move |_| on_page.call(current_page.saturating_sub(1)),
                "‹"
            }
            span { "Page {current_page} of {total_pages}" }
            button {
                style: BUTTON_STYLE,
                disabled: !has_next,
                onclick: move |_| on_page.call(current_page + 1),
                "›"
            }
            button {
                style: BUTTON_STYLE,
                disabled: !has_next,
                onclick: move |_| on_page.call(total_pages),
                "»"
            }
        }
    }
}
