//! Selection checkbox cells shared by all management tables.

use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq)]
enum HeaderCheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

/// Header checkbox toggling the whole page's selection.
///
/// Shows three states (unchecked, checked, indeterminate) derived from the
/// displayed row ids and the selected set. `on_change(true)` means "select
/// all", `on_change(false)` means "deselect all".
#[component]
pub fn SelectAllCheckbox(
    /// Ids of the rows currently displayed
    #[prop(into)]
    row_ids: Signal<Vec<String>>,

    /// Currently selected ids
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// Callback (true = select all, false = deselect all)
    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state = Signal::derive(move || {
        let ids = row_ids.get();
        let sel = selected.get();

        if ids.is_empty() {
            return HeaderCheckboxState::Unchecked;
        }

        let selected_count = ids.iter().filter(|id| sel.contains(*id)).count();
        if selected_count == 0 {
            HeaderCheckboxState::Unchecked
        } else if selected_count == ids.len() {
            HeaderCheckboxState::Checked
        } else {
            HeaderCheckboxState::Indeterminate
        }
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // The indeterminate flag only exists as a DOM property.
    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let state = checkbox_state.get();
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(matches!(state, HeaderCheckboxState::Indeterminate));
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || matches!(checkbox_state.get(), HeaderCheckboxState::Checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run(checked);
                }
            />
        </TableHeaderCell>
    }
}

/// Per-row selection checkbox cell. Stops click propagation so checking a
/// row does not trigger the row's own click handler.
#[component]
pub fn RowCheckbox(
    /// Id of this row
    #[prop(into)]
    row_id: String,

    /// Currently selected ids
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// Callback (row_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let id_for_checked = row_id.clone();
    let id_for_change = row_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.get().contains(&id_for_checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((id_for_change.clone(), checked));
                }
            />
        </TableCell>
    }
}
