// ============================================================================
// FILTER CONTROLS - Región, rango temporal y categoría
// ============================================================================
// Cada cambio emite el FilterSet COMPLETO (reemplazo, nunca merge).
// ============================================================================

use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::models::dashboard::{FilterSet, FILTER_CATEGORY, FILTER_REGION, FILTER_TIME_RANGE};

struct FilterField {
    key: &'static str,
    label: &'static str,
    options: &'static [(&'static str, &'static str)],
}

const FIELDS: &[FilterField] = &[
    FilterField {
        key: FILTER_REGION,
        label: "Region",
        options: &[("all", "All Regions"), ("APAC", "Asia Pacific"), ("EMEA", "Europe & Middle East"), ("AMERICAS", "Americas")],
    },
    FilterField {
        key: FILTER_TIME_RANGE,
        label: "Time Range",
        options: &[("30d", "Last 30 days"), ("7d", "Last 7 days"), ("24h", "Last 24 hours"), ("90d", "Last 90 days")],
    },
    FilterField {
        key: FILTER_CATEGORY,
        label: "Product Category",
        options: &[("all", "All Categories"), ("electronics", "Electronics"), ("energy", "Energy"), ("agriculture", "Agriculture")],
    },
];

#[derive(Properties, PartialEq)]
pub struct FilterControlsProps {
    pub filters: FilterSet,
    pub on_change: Callback<FilterSet>,
    #[prop_or_default]
    pub disabled: bool,
}

#[function_component(FilterControls)]
pub fn filter_controls(props: &FilterControlsProps) -> Html {
    let select = |field: &'static FilterField| {
        let current = props.filters.get(field.key).unwrap_or(field.options[0].0).to_string();
        let onchange = {
            let filters = props.filters.clone();
            let on_change = props.on_change.clone();
            Callback::from(move |e: Event| {
                let input: HtmlSelectElement = e.target_unchecked_into();
                on_change.emit(filters.clone().with(field.key, input.value()));
            })
        };
        html! {
            <label class="filter-field">
                <span class="filter-label">{ field.label }</span>
                <select {onchange} disabled={props.disabled}>
                    { for field.options.iter().map(|(value, text)| html! {
                        <option value={*value} selected={current == *value}>{ *text }</option>
                    }) }
                </select>
            </label>
        }
    };

    let on_reset = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(FilterSet::new()))
    };

    html! {
        <div class="filter-controls">
            { for FIELDS.iter().map(select) }
            <button class="btn-ghost btn-sm" onclick={on_reset} disabled={props.disabled || props.filters.is_empty()}>
                { "Reset" }
            </button>
        </div>
    }
}
