//! Print trigger: `fetch → assemble → await render committed → print`.
//!
//! The caller fetches and assembles the details, then hands them to
//! [`PrintController::print`], which commits them to the off-screen
//! [`PrintArea`], waits until the area really holds every label and only
//! then opens the print dialog, once.

pub mod gate;
pub mod label;
pub mod platform;

use contracts::domain::a001_packing::PackingDetail;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::shared::error::{AppError, AppResult, ErrorKind};
use gate::{GateDecision, PrintGate};
use label::{LabelPrintOut, LabelView};

const RENDER_POLL_MS: u32 = 16;
const RENDER_POLL_ATTEMPTS: u32 = 120;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintPayload {
    Single(PackingDetail),
    /// Printed in vector order, one label per page
    Batch(Vec<PackingDetail>),
}

impl PrintPayload {
    pub fn label_count(&self) -> usize {
        match self {
            PrintPayload::Single(_) => 1,
            PrintPayload::Batch(details) => details.len(),
        }
    }

    pub fn labels(&self) -> Vec<LabelView> {
        match self {
            PrintPayload::Single(detail) => vec![LabelView::from(detail)],
            PrintPayload::Batch(details) => details.iter().map(LabelView::from).collect(),
        }
    }

    pub fn document_title(&self) -> &'static str {
        match self {
            PrintPayload::Single(_) => "Label Packing",
            PrintPayload::Batch(_) => "Batch Label Packing",
        }
    }
}

#[derive(Clone, Copy)]
pub struct PrintController {
    payload: RwSignal<Option<PrintPayload>>,
    gate: RwSignal<PrintGate>,
}

impl PrintController {
    pub fn new() -> Self {
        Self {
            payload: RwSignal::new(None),
            gate: RwSignal::new(PrintGate::default()),
        }
    }

    /// Reactive: a print cycle is running
    pub fn is_printing(&self) -> bool {
        self.gate.with(PrintGate::is_active)
    }

    /// Run one print cycle. `on_after` runs once the dialog has been
    /// invoked; it is skipped when the cycle is refused or abandoned.
    pub async fn print(self, payload: PrintPayload, on_after: impl FnOnce()) -> AppResult<()> {
        let expected = payload.label_count();
        let title = payload.document_title();
        let ticket = self
            .gate
            .try_update(|gate| gate.arm(expected))
            .flatten()
            .ok_or_else(|| AppError::new(ErrorKind::Print, "A print job is already running."))?;

        self.payload.set(Some(payload));
        let result = self.fire_when_rendered(ticket, title).await;

        self.gate.update(|gate| {
            gate.finish(ticket);
        });
        self.payload.set(None);

        if result.is_ok() {
            on_after();
        }
        result
    }

    async fn fire_when_rendered(&self, ticket: u64, title: &str) -> AppResult<()> {
        for _ in 0..RENDER_POLL_ATTEMPTS {
            // yield so the committed payload gets rendered
            TimeoutFuture::new(RENDER_POLL_MS).await;

            let rendered = platform::rendered_label_count();
            let decision = self
                .gate
                .try_update(|gate| gate.observe(ticket, rendered))
                .unwrap_or(GateDecision::Stale);
            match decision {
                GateDecision::Wait => continue,
                GateDecision::Fire => {
                    platform::render_barcodes(&format!("#{}", platform::PRINT_AREA_ID));
                    log::info!("Printing {} label(s)", rendered);
                    platform::invoke_print(title);
                    return Ok(());
                }
                GateDecision::Stale => break,
            }
        }
        log::error!("Print area never reached the expected label count");
        Err(AppError::new(
            ErrorKind::Print,
            "Labels could not be prepared for printing.",
        ))
    }
}

impl Default for PrintController {
    fn default() -> Self {
        Self::new()
    }
}

/// Off-screen render target of the print cycle; visible only in print media
#[component]
pub fn PrintArea(controller: PrintController) -> impl IntoView {
    let labels = move || controller.payload.with(|p| p.as_ref().map(PrintPayload::labels));

    view! {
        <div id=platform::PRINT_AREA_ID class="print-area" aria-hidden="true">
            {move || {
                labels()
                    .unwrap_or_default()
                    .into_iter()
                    .map(|label| view! {
                        <div class="batch-page">
                            <LabelPrintOut label=label />
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}
