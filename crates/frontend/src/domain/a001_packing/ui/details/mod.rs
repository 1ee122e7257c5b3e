pub mod edit;

use contracts::domain::a001_packing::PackingDetail;
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::modal::Modal;
use crate::shared::print::label::{LabelPrintOut, LabelView};
use crate::shared::print::platform;
use edit::{EditPhase, EditSession};

const PREVIEW_SCOPE: &str = ".label-preview";

/// On-screen preview of a single label with its print and edit actions
#[component]
#[allow(non_snake_case)]
pub fn PackingPreview(
    detail: PackingDetail,
    #[prop(into)] printing: Signal<bool>,
    on_print: Callback<()>,
    on_edit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let label = LabelView::from(&detail);
    let title = format!("Packing {}", detail.header.pack_nomor);
    let date = format_date(&detail.header.pack_tanggal);

    // the svg placeholders exist once the modal body is mounted
    Effect::new(move |_| platform::render_barcodes(PREVIEW_SCOPE));

    view! {
        <Modal title=title on_close=on_close>
            <p class="preview-date">{date}</p>
            <div class="label-preview">
                <LabelPrintOut label=label />
            </div>
            <div class="modal-footer">
                <button class="button button--secondary" on:click=move |_| on_edit.run(())>
                    "Edit"
                </button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_print.run(())
                    disabled=printing
                >
                    {icon("printer")}
                    {move || if printing.get() { "Printing..." } else { "Print Label" }}
                </Button>
            </div>
        </Modal>
    }
}

/// Quantity editor for one packing; open while the session is not idle
#[component]
#[allow(non_snake_case)]
pub fn PackingEditor(session: RwSignal<EditSession>, on_save: Callback<()>) -> impl IntoView {
    let title = Signal::derive(move || {
        session.with(|s| match (&s.phase, &s.draft) {
            (EditPhase::Loading { pack_nomor }, _) => format!("Loading {}...", pack_nomor),
            (_, Some(draft)) => format!("Edit packing {}", draft.header.pack_nomor),
            _ => "Edit packing".to_string(),
        })
    });
    let busy = Signal::derive(move || session.with(EditSession::is_busy));
    let saving = Signal::derive(move || session.with(|s| s.phase == EditPhase::Saving));
    let on_close = Callback::new(move |_| {
        if !session.with_untracked(EditSession::is_busy) {
            session.update(EditSession::cancel);
        }
    });

    let rows = move || {
        session.with(|s| {
            s.draft
                .as_ref()
                .map(|d| d.items.clone())
                .unwrap_or_default()
        })
    };

    view! {
        <Modal title=title on_close=on_close>
            <Show
                when=move || session.with(|s| s.draft.is_some())
                fallback=|| view! { <Spinner size=SpinnerSize::Small /> }
            >
                {move || session.with(|s| s.error.clone()).map(|e| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">{icon("alert-triangle")}</span>
                        <span class="warning-box__text">{e.message}</span>
                    </div>
                })}
                <table class="table__data edit-items">
                    <thead>
                        <tr>
                            <th>"Barcode"</th>
                            <th>"Name"</th>
                            <th>"Size"</th>
                            <th>"Qty"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows()
                            .into_iter()
                            .enumerate()
                            .map(|(index, item)| view! {
                                <tr>
                                    <td>{item.packd_barcode}</td>
                                    <td>{item.packd_nama}</td>
                                    <td>{item.packd_ukuran}</td>
                                    <td class="edit-qty">
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| session.update(|s| s.decrement(index))
                                            disabled=busy
                                        >
                                            {icon("minus")}
                                        </button>
                                        <span>{item.packd_qty}</span>
                                        <button
                                            class="button button--icon"
                                            on:click=move |_| session.update(|s| s.increment(index))
                                            disabled=busy
                                        >
                                            {icon("plus")}
                                        </button>
                                    </td>
                                    <td>
                                        <button
                                            class="button button--icon button--danger"
                                            on:click=move |_| session.update(|s| s.remove(index))
                                            disabled=busy
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            })
                            .collect_view()}
                    </tbody>
                </table>
                <p class="edit-total">
                    {move || format!(
                        "Total quantity: {}",
                        session.with(|s| s.draft.as_ref().map(|d| d.total_quantity()).unwrap_or(0))
                    )}
                </p>
            </Show>
            <div class="modal-footer">
                <button class="button button--secondary" on:click=move |_| on_close.run(()) disabled=busy>
                    "Cancel"
                </button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| on_save.run(())
                    disabled=busy
                >
                    {move || if saving.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </Modal>
    }
}
