//! Filter Pills Component
//!
//! Horizontal row of gallery filter buttons: the "all" sentinel followed by
//! one pill per category. The last-clicked pill is the active one.

use dioxus::prelude::*;
use showreel_core::Filter;

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Category names, without the "all" sentinel
    pub categories: Vec<String>,
    /// Currently active filter
    pub selected: Filter,
    /// Handler called when a pill is clicked
    pub on_select: EventHandler<Filter>,
}

/// Displays the gallery filter row
///
/// # Example
///
/// ```rust,ignore
/// let mut active = use_signal(Filter::default);
///
/// rsx! {
///     FilterPills {
///         categories: content.read().categories(),
///         selected: active(),
///         on_select: move |filter| active.set(filter),
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    let mut filters = vec![Filter::All];
    filters.extend(
        props
            .categories
            .iter()
            .map(|c| Filter::Category(c.clone())),
    );

    rsx! {
        div {
            class: "filter-bar",
            role: "radiogroup",
            "aria-label": "Gallery filter",
            for filter in filters {
                {
                    let is_selected = filter == props.selected;
                    let on_select = props.on_select;
                    // Selection goes through the control's data value, the
                    // same way the markup-driven filter reads it back.
                    let value = filter.label().to_string();
                    rsx! {
                        button {
                            key: "{filter.label()}",
                            class: if is_selected { "filter-btn active" } else { "filter-btn" },
                            role: "radio",
                            "aria-checked": if is_selected { "true" } else { "false" },
                            "data-filter": "{filter.label()}",
                            onclick: move |_| {
                                on_select.call(Filter::from_value(&value));
                            },
                            "{filter.label()}"
                        }
                    }
                }
            }
        }
    }
}
