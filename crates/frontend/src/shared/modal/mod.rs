use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

fn is_close_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape closes the modal wherever the focus is
    let escape = window_event_listener(ev::keydown, move |event| {
        if is_close_key(&event.key()) {
            on_close.run(());
        }
    });
    on_cleanup(move || escape.remove());

    // Prevent click propagation from modal content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_closes() {
        assert!(is_close_key("Escape"));
        assert!(is_close_key("Esc"));
        assert!(!is_close_key("Enter"));
        assert!(!is_close_key("e"));
    }
}
