use contracts::domain::a001_packing::PackingDetail;
use leptos::prelude::*;

/// Text content of one printed label
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelView {
    pub pack_nomor: String,
    pub spk_nomor: String,
    pub total_qty: u32,
    pub spk_name: String,
    pub size_detail: String,
}

impl From<&PackingDetail> for LabelView {
    fn from(detail: &PackingDetail) -> Self {
        Self {
            pack_nomor: detail.header.pack_nomor.clone(),
            spk_nomor: detail.header.pack_spk_nomor.clone(),
            total_qty: detail.total_quantity(),
            spk_name: detail.header.pack_nama_spk.clone(),
            size_detail: detail.header.formatted_size_detail(),
        }
    }
}

/// One label: packing number, CODE128 barcode placeholder (drawn by
/// `platform::render_barcodes`), SPK number with total quantity, SPK name,
/// size detail.
#[component]
pub fn LabelPrintOut(label: LabelView) -> impl IntoView {
    view! {
        <div class="label-print">
            <p class="print-top-no-packing">{label.pack_nomor.clone()}</p>
            <div class="print-barcode-area">
                <svg class="label-barcode" data-value=label.pack_nomor.clone()></svg>
            </div>
            <div class="print-middle-info">
                <span class="print-spk-no">{label.spk_nomor}</span>
                <span class="print-qty">{format!("QTY: {}", label.total_qty)}</span>
            </div>
            <p class="print-nama-spk">{label.spk_name}</p>
            <p class="print-detail-ukuran">{label.size_detail}</p>
        </div>
    }
}
