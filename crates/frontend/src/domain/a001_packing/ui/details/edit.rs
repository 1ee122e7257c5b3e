//! Edit workflow: `Idle → Loading → Editing → Saving → Idle`.
//!
//! The draft never holds an item with quantity 0 and is never persisted
//! empty. Network calls are issued by the caller with the values returned
//! from the transitions.

use contracts::domain::a001_packing::{PackingDetail, PackingHeader, PackingItem, UpdatePackingRequest};

use crate::shared::error::{AppError, ErrorKind};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditPhase {
    Idle,
    Loading { pack_nomor: String },
    Editing,
    Saving,
}

/// In-memory copy of a record's items
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Draft {
    pub header: PackingHeader,
    pub items: Vec<PackingItem>,
}

impl Draft {
    fn from_detail(detail: PackingDetail) -> Self {
        Self {
            header: detail.header,
            items: detail
                .items
                .into_iter()
                .filter(|item| item.packd_qty > 0)
                .collect(),
        }
    }

    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.packd_qty).sum()
    }
}

#[derive(Clone, Debug)]
pub struct EditSession {
    pub phase: EditPhase,
    pub draft: Option<Draft>,
    pub error: Option<AppError>,
}

impl Default for EditSession {
    fn default() -> Self {
        Self {
            phase: EditPhase::Idle,
            draft: None,
            error: None,
        }
    }
}

impl EditSession {
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, EditPhase::Idle)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, EditPhase::Loading { .. } | EditPhase::Saving)
    }

    /// Start loading `pack_nomor`; `false` while another load or save runs
    pub fn begin_load(&mut self, pack_nomor: &str) -> bool {
        if self.is_busy() {
            return false;
        }
        self.phase = EditPhase::Loading {
            pack_nomor: pack_nomor.to_string(),
        };
        self.draft = None;
        self.error = None;
        true
    }

    /// A response for a record other than the one being loaded is ignored
    pub fn loaded(&mut self, detail: PackingDetail) -> bool {
        match &self.phase {
            EditPhase::Loading { pack_nomor } if pack_nomor == detail.pack_nomor() => {
                self.draft = Some(Draft::from_detail(detail));
                self.phase = EditPhase::Editing;
                true
            }
            _ => false,
        }
    }

    pub fn load_failed(&mut self, error: AppError) {
        if matches!(self.phase, EditPhase::Loading { .. }) {
            self.phase = EditPhase::Idle;
            self.error = Some(error);
        }
    }

    fn editable_items(&mut self) -> Option<&mut Vec<PackingItem>> {
        if self.phase != EditPhase::Editing {
            return None;
        }
        self.draft.as_mut().map(|d| &mut d.items)
    }

    pub fn increment(&mut self, index: usize) {
        if let Some(item) = self.editable_items().and_then(|items| items.get_mut(index)) {
            item.packd_qty = item.packd_qty.saturating_add(1);
        }
    }

    /// At quantity 1 the item is removed instead of reaching 0
    pub fn decrement(&mut self, index: usize) {
        let Some(items) = self.editable_items() else {
            return;
        };
        let Some(qty) = items.get(index).map(|item| item.packd_qty) else {
            return;
        };
        if qty > 1 {
            items[index].packd_qty = qty - 1;
        } else {
            items.remove(index);
        }
    }

    pub fn remove(&mut self, index: usize) {
        if let Some(items) = self.editable_items() {
            if index < items.len() {
                items.remove(index);
            }
        }
    }

    /// Move to `Saving` and hand out the request to send.
    ///
    /// An empty draft is rejected here, before any request.
    pub fn begin_save(&mut self) -> Result<(String, UpdatePackingRequest), AppError> {
        if self.phase != EditPhase::Editing {
            return Err(AppError::validation("Nothing to save."));
        }
        let draft = match &self.draft {
            Some(draft) => draft,
            None => return Err(AppError::validation("Nothing to save.")),
        };
        if draft.items.is_empty() {
            let err = AppError::validation("A packing must contain at least one item.");
            self.error = Some(err.clone());
            return Err(err);
        }
        let request = (
            draft.header.pack_nomor.clone(),
            UpdatePackingRequest {
                items: draft.items.clone(),
            },
        );
        self.phase = EditPhase::Saving;
        self.error = None;
        Ok(request)
    }

    /// Back to `Idle`; the caller refreshes the history page
    pub fn save_succeeded(&mut self) {
        if self.phase == EditPhase::Saving {
            self.phase = EditPhase::Idle;
            self.draft = None;
            self.error = None;
        }
    }

    /// Stay in `Editing` with the draft kept for a retry
    pub fn save_failed(&mut self, error: AppError) {
        if self.phase == EditPhase::Saving {
            self.phase = EditPhase::Editing;
            let error = match error.kind {
                ErrorKind::Transport | ErrorKind::Decode => {
                    AppError::new(error.kind, "Failed to save packing. Please try again.")
                }
                _ => error,
            };
            self.error = Some(error);
        }
    }

    pub fn cancel(&mut self) {
        if self.phase == EditPhase::Editing {
            self.phase = EditPhase::Idle;
            self.draft = None;
            self.error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(barcode: &str, qty: u32) -> PackingItem {
        PackingItem {
            packd_barcode: barcode.to_string(),
            packd_nama: "Kaos".into(),
            packd_ukuran: "M".into(),
            packd_qty: qty,
        }
    }

    fn detail(items: Vec<PackingItem>) -> PackingDetail {
        PackingDetail {
            header: PackingHeader {
                pack_nomor: "PK-7".into(),
                pack_spk_nomor: "SPK-7".into(),
                pack_tanggal: "2024-03-15".into(),
                detail_ukuran: "M".into(),
                pack_nama_spk: String::new(),
                pack_po_nomor: None,
            },
            items,
        }
    }

    fn editing(items: Vec<PackingItem>) -> EditSession {
        let mut session = EditSession::default();
        assert!(session.begin_load("PK-7"));
        assert!(session.loaded(detail(items)));
        assert_eq!(session.phase, EditPhase::Editing);
        session
    }

    fn draft_items(session: &EditSession) -> &[PackingItem] {
        &session.draft.as_ref().unwrap().items
    }

    #[test]
    fn test_decrement_at_one_removes_item() {
        let mut session = editing(vec![item("A", 1), item("B", 2)]);
        session.decrement(0);

        let items = draft_items(&session);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].packd_barcode, "B");
        assert!(items.iter().all(|i| i.packd_qty > 0));
    }

    #[test]
    fn test_increment_and_decrement() {
        let mut session = editing(vec![item("A", 2)]);
        session.increment(0);
        assert_eq!(draft_items(&session)[0].packd_qty, 3);
        session.decrement(0);
        session.decrement(0);
        assert_eq!(draft_items(&session)[0].packd_qty, 1);
        // out of range is a no-op
        session.decrement(5);
        session.increment(5);
        assert_eq!(draft_items(&session).len(), 1);
    }

    #[test]
    fn test_zero_quantity_items_are_dropped_on_load() {
        let session = editing(vec![item("A", 0), item("B", 4)]);
        assert_eq!(draft_items(&session).len(), 1);
        assert_eq!(session.draft.as_ref().unwrap().total_quantity(), 4);
    }

    #[test]
    fn test_empty_draft_is_rejected_without_request() {
        let mut session = editing(vec![item("A", 1)]);
        session.remove(0);

        let err = session.begin_save().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(session.phase, EditPhase::Editing);
        assert_eq!(session.error, Some(err));
    }

    #[test]
    fn test_save_round_trip() {
        let mut session = editing(vec![item("A", 2)]);
        let (pack_nomor, request) = session.begin_save().unwrap();
        assert_eq!(pack_nomor, "PK-7");
        assert_eq!(request.items, vec![item("A", 2)]);
        assert_eq!(session.phase, EditPhase::Saving);

        // no edits while saving
        session.increment(0);
        assert_eq!(draft_items(&session)[0].packd_qty, 2);

        session.save_succeeded();
        assert_eq!(session.phase, EditPhase::Idle);
        assert!(session.draft.is_none());
    }

    #[test]
    fn test_save_failure_keeps_draft_and_server_message() {
        let mut session = editing(vec![item("A", 2)]);
        session.begin_save().unwrap();
        session.save_failed(AppError::from_status(409, Some("SPK sudah ditutup".into()), "x"));

        assert_eq!(session.phase, EditPhase::Editing);
        assert_eq!(session.error.as_ref().unwrap().message, "SPK sudah ditutup");
        assert_eq!(draft_items(&session).len(), 1);
    }

    #[test]
    fn test_save_failure_without_message_is_generic() {
        let mut session = editing(vec![item("A", 2)]);
        session.begin_save().unwrap();
        session.save_failed(AppError::transport("Failed to send request: offline"));
        assert_eq!(
            session.error.as_ref().unwrap().message,
            "Failed to save packing. Please try again."
        );
    }

    #[test]
    fn test_load_failure_returns_to_idle() {
        let mut session = EditSession::default();
        session.begin_load("PK-7");
        session.load_failed(AppError::new(ErrorKind::NotFound, "Packing number not found."));
        assert_eq!(session.phase, EditPhase::Idle);
        assert!(session.error.is_some());
        assert!(!session.is_open());
    }

    #[test]
    fn test_late_response_for_other_record_is_ignored() {
        let mut session = EditSession::default();
        session.begin_load("PK-8");
        assert!(!session.loaded(detail(vec![item("A", 1)])));
        assert!(session.draft.is_none());
    }

    #[test]
    fn test_cancel() {
        let mut session = editing(vec![item("A", 2)]);
        session.cancel();
        assert_eq!(session.phase, EditPhase::Idle);
        assert!(session.draft.is_none());
    }
}
