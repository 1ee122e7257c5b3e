pub mod state;

use contracts::domain::a001_packing::{PackingDetail, PackingHeader};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::edit::EditSession;
use super::details::{PackingEditor, PackingPreview};
use super::search::PackingSearch;
use crate::domain::a001_packing::{api, batch};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::config::AppConfig;
use crate::shared::date_utils::{format_date, is_iso_date, today_iso};
use crate::shared::dialogs::confirm;
use crate::shared::error::AppError;
use crate::shared::http::use_api;
use crate::shared::icons::icon;
use crate::shared::print::{PrintArea, PrintController, PrintPayload};
use state::{create_state, HistoryState, PendingQuery};

/// Print queue page: history table with batch printing, packing search,
/// single-label preview and the quantity editor.
#[component]
#[allow(non_snake_case)]
pub fn PackingHistoryPage() -> impl IntoView {
    let api_client = use_api();
    let config = use_context::<AppConfig>().expect("AppConfig not found in component tree");

    let history = create_state(&today_iso(), config.history_page_size);
    let printer = PrintController::new();
    let preview = RwSignal::new(None::<PackingDetail>);
    let preview_seq = RwSignal::new(0u64);
    let preview_loading = RwSignal::new(false);
    let lookup_error = RwSignal::new(None::<AppError>);
    let action_error = RwSignal::new(None::<AppError>);
    let batch_loading = RwSignal::new(false);
    let batch_notice = RwSignal::new(None::<String>);
    let editor = RwSignal::new(EditSession::default());

    let run_query = Callback::new({
        let api_client = api_client.clone();
        move |pending: PendingQuery| {
            let api_client = api_client.clone();
            spawn_local(async move {
                let result = api::fetch_history(&api_client, &pending.query).await;
                let applied = history
                    .try_update(|s| match result {
                        Ok(page) => s.apply(pending.ticket, page),
                        Err(e) => s.fail(pending.ticket, e),
                    })
                    .unwrap_or(false);
                if !applied {
                    log::debug!("Dropped stale history response #{}", pending.ticket);
                }
            });
        }
    });

    let reload = move || {
        if let Some(pending) = history.try_update(HistoryState::refresh) {
            run_query.run(pending);
        }
    };

    let on_start_date = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if !is_iso_date(&value) {
            return;
        }
        if let Some(pending) = history.try_update(|s| s.set_start_date(value)) {
            run_query.run(pending);
        }
    };

    let on_end_date = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        if !is_iso_date(&value) {
            return;
        }
        if let Some(pending) = history.try_update(|s| s.set_end_date(value)) {
            run_query.run(pending);
        }
    };

    let on_prev = Callback::new(move |_| {
        if let Some(pending) = history.try_update(HistoryState::prev_page).flatten() {
            run_query.run(pending);
        }
    });

    let on_next = Callback::new(move |_| {
        if let Some(pending) = history.try_update(HistoryState::next_page).flatten() {
            run_query.run(pending);
        }
    });

    // Single record lookup shared by the search box and the row action
    let open_preview = Callback::new({
        let api_client = api_client.clone();
        move |pack_nomor: String| {
            let pack_nomor = pack_nomor.trim().to_string();
            if pack_nomor.is_empty() {
                return;
            }
            let ticket = preview_seq.try_update(|n| {
                *n += 1;
                *n
            });
            let Some(ticket) = ticket else {
                return;
            };

            preview.set(None);
            lookup_error.set(None);
            preview_loading.set(true);

            let api_client = api_client.clone();
            spawn_local(async move {
                let result = api::find_detail(&api_client, &pack_nomor).await;
                if preview_seq.get_untracked() != ticket {
                    log::debug!("Dropped stale detail for {}", pack_nomor);
                    return;
                }
                match result {
                    Ok(detail) => preview.set(Some(detail)),
                    Err(e) => lookup_error.set(Some(e)),
                }
                preview_loading.set(false);
            });
        }
    });

    let print_single = Callback::new(move |_| {
        let Some(detail) = preview.get_untracked() else {
            return;
        };
        action_error.set(None);
        spawn_local(async move {
            if let Err(e) = printer.print(PrintPayload::Single(detail), || {}).await {
                action_error.set(Some(e));
            }
        });
    });

    let print_batch = {
        let api_client = api_client.clone();
        move || {
            if batch_loading.get_untracked() {
                return;
            }
            let ids = history.with_untracked(|s| s.selection.ordered().to_vec());
            action_error.set(None);
            batch_notice.set(None);
            batch_loading.set(true);

            let api_client = api_client.clone();
            spawn_local(async move {
                let outcome = batch::fetch_in_selection_order(&ids, |id| {
                    let api_client = api_client.clone();
                    async move { api::fetch_detail(&api_client, &id).await }
                })
                .await;
                batch_loading.set(false);

                let outcome = match outcome {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        action_error.set(Some(e));
                        return;
                    }
                };
                if !outcome.failed.is_empty() {
                    batch_notice.set(Some(format!(
                        "{} of {} labels could not be loaded: {}",
                        outcome.failed.len(),
                        ids.len(),
                        outcome.failed.join(", ")
                    )));
                }

                let printed = printer
                    .print(PrintPayload::Batch(outcome.details), move || {
                        history.update(|s| s.selection.clear());
                        preview.set(None);
                    })
                    .await;
                if let Err(e) = printed {
                    action_error.set(Some(e));
                }
            });
        }
    };

    let open_editor = Callback::new({
        let api_client = api_client.clone();
        move |_| {
            let Some(pack_nomor) = preview.with_untracked(|p| p.as_ref().map(|d| d.pack_nomor().to_string()))
            else {
                return;
            };
            if !editor.try_update(|e| e.begin_load(&pack_nomor)).unwrap_or(false) {
                return;
            }
            preview.set(None);

            let api_client = api_client.clone();
            spawn_local(async move {
                match api::fetch_detail(&api_client, &pack_nomor).await {
                    Ok(detail) => editor.update(|e| {
                        if !e.loaded(detail) {
                            log::debug!("Editor moved on before {} arrived", pack_nomor);
                        }
                    }),
                    Err(err) => {
                        action_error.set(Some(err.clone()));
                        editor.update(|e| e.load_failed(err));
                    }
                }
            });
        }
    });

    let save_editor = Callback::new({
        let api_client = api_client.clone();
        move |_| {
            let Some(Ok((pack_nomor, body))) = editor.try_update(EditSession::begin_save) else {
                return;
            };

            let api_client = api_client.clone();
            spawn_local(async move {
                match api::update_packing(&api_client, &pack_nomor, body.items).await {
                    Ok(()) => {
                        log::info!("Saved packing {}", pack_nomor);
                        editor.update(EditSession::save_succeeded);
                        reload();
                    }
                    Err(err) => editor.update(|e| e.save_failed(err)),
                }
            });
        }
    });

    let delete_row = Callback::new({
        let api_client = api_client.clone();
        move |pack_nomor: String| {
            if !confirm(&format!("Delete packing {}?", pack_nomor)) {
                return;
            }
            action_error.set(None);

            let api_client = api_client.clone();
            spawn_local(async move {
                match api::delete_packing(&api_client, &pack_nomor).await {
                    Ok(()) => {
                        log::info!("Deleted packing {}", pack_nomor);
                        reload();
                    }
                    Err(e) => action_error.set(Some(e)),
                }
            });
        }
    });

    reload();

    let printing = Signal::derive(move || printer.is_printing());
    let selected_count = move || history.with(|s| s.selection.len());
    let all_checked = Signal::derive(move || {
        history.with(|s| s.selection.is_all_of(&s.visible_ids()))
    });
    let loading = move || history.with(|s| s.loading);

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Packing History"</h1>
                </div>
                <div class="header__actions">
                    <label class="date-filter">
                        "From "
                        <input
                            type="date"
                            prop:value=move || history.with(|s| s.start_date.clone())
                            on:change=on_start_date
                        />
                    </label>
                    <label class="date-filter">
                        "To "
                        <input
                            type="date"
                            prop:value=move || history.with(|s| s.end_date.clone())
                            on:change=on_end_date
                        />
                    </label>
                    <button class="button button--secondary" on:click=move |_| reload() disabled=loading>
                        "Refresh"
                    </button>
                    <Show when=move || history.with(HistoryState::has_selection)>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click={
                                let print_batch = print_batch.clone();
                                move |_| print_batch()
                            }
                            disabled=Signal::derive(move || batch_loading.get() || printing.get())
                        >
                            {icon("printer")}
                            {move || if batch_loading.get() {
                                "Preparing...".to_string()
                            } else {
                                format!("Print {} Labels", selected_count())
                            }}
                        </Button>
                    </Show>
                </div>
            </div>

            <PackingSearch on_select=open_preview busy=preview_loading />

            {move || lookup_error.get().map(|e| view! {
                <p class="error-text">{e.message}</p>
            })}
            {move || history.with(|s| s.error.clone())
                .or_else(|| action_error.get())
                .map(|e| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">{icon("alert-triangle")}</span>
                        <span class="warning-box__text">{e.message}</span>
                    </div>
                })}
            {move || batch_notice.get().map(|notice| view! {
                <div class="warning-box warning-box--info">
                    <span class="warning-box__text">{notice}</span>
                </div>
            })}

            <div class="table-wrapper">
                <table class="table__data">
                    <thead>
                        <tr>
                            <th class="table__cell table__cell--checkbox">
                                <input
                                    type="checkbox"
                                    class="table__checkbox"
                                    title="Select all on this page"
                                    prop:checked=all_checked
                                    prop:disabled=move || history.with(|s| s.items.is_empty())
                                    on:change=move |_| history.update(HistoryState::toggle_all)
                                />
                            </th>
                            <th>"Packing No."</th>
                            <th>"SPK No."</th>
                            <th>"Date"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <Show
                            when=move || !loading()
                            fallback=|| view! {
                                <tr><td colspan="5" class="table__loading"><Spinner size=SpinnerSize::Small /></td></tr>
                            }
                        >
                            <Show
                                when=move || history.with(|s| !s.items.is_empty())
                                fallback=|| view! {
                                    <tr><td colspan="5" class="table__empty">"No packing data in this period."</td></tr>
                                }
                            >
                                <For
                                    each=move || history.with(|s| s.items.clone())
                                    key=|row| row.pack_nomor.clone()
                                    children=move |row: PackingHeader| {
                                        history_row(row, history, open_preview, delete_row)
                                    }
                                />
                            </Show>
                        </Show>
                    </tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || history.with(|s| s.pagination.current_page))
                total_pages=Signal::derive(move || history.with(|s| s.pagination.total_pages))
                can_prev=Signal::derive(move || history.with(HistoryState::can_go_prev))
                can_next=Signal::derive(move || history.with(HistoryState::can_go_next))
                on_prev=on_prev
                on_next=on_next
            />

            {move || preview.get().map(|detail| view! {
                <PackingPreview
                    detail=detail
                    printing=printing
                    on_print=print_single
                    on_edit=open_editor
                    on_close=Callback::new(move |_| preview.set(None))
                />
            })}

            <Show when=move || editor.with(EditSession::is_open)>
                <PackingEditor session=editor on_save=save_editor />
            </Show>

            <PrintArea controller=printer />
        </div>
    }
}

fn history_row(
    row: PackingHeader,
    history: RwSignal<HistoryState>,
    on_view: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let id = row.pack_nomor.clone();
    let checked = Signal::derive({
        let id = id.clone();
        move || history.with(|s| s.selection.contains(&id))
    });
    let on_toggle = Callback::new({
        let id = id.clone();
        move |_| history.update(|s| s.selection.toggle(&id))
    });
    let view_id = id.clone();
    let delete_id = id;

    view! {
        <tr>
            <TableCheckbox checked=checked on_change=on_toggle />
            <td>{row.pack_nomor}</td>
            <td>{row.pack_spk_nomor}</td>
            <td>{format_date(&row.pack_tanggal)}</td>
            <td class="table__actions">
                <button class="button button--secondary" on:click=move |_| on_view.run(view_id.clone())>
                    "View & Print"
                </button>
                <button class="button button--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    {icon("trash")}
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
