use leptos::prelude::*;

/// Checkbox cell of a table row.
///
/// A click on the checkbox does not reach the row (stop_propagation).
#[component]
pub fn TableCheckbox(
    checked: Signal<bool>,
    on_change: Callback<bool>,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
) -> impl IntoView {
    view! {
        <td
            class="table__cell table__cell--checkbox"
            on:click=|e| e.stop_propagation()
        >
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=checked
                prop:disabled=move || disabled.get().unwrap_or(false)
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </td>
    }
}
