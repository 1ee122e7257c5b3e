//! Fetch the detail of every selected record and put the results back in
//! selection order.

use std::future::Future;

use contracts::domain::a001_packing::PackingDetail;
use futures::future::join_all;

use crate::shared::error::{AppError, AppResult, ErrorKind};

/// Survivors of a batch fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Details in selection order, failed entries dropped
    pub details: Vec<PackingDetail>,
    /// Packing numbers whose fetch failed, in selection order
    pub failed: Vec<String>,
}

/// Fetch all `ids` concurrently and assemble the details in input order.
///
/// A failed fetch is logged and dropped; it never shifts or blocks the
/// others. Empty input issues no request.
pub async fn fetch_in_selection_order<F, Fut>(ids: &[String], fetch: F) -> AppResult<BatchOutcome>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = AppResult<PackingDetail>>,
{
    if ids.is_empty() {
        return Err(AppError::validation("Select at least one item to print."));
    }

    log::debug!("Batch fetch of {} packing records", ids.len());

    let pending = ids.iter().enumerate().map(|(idx, id)| {
        let request = fetch(id.clone());
        async move { (idx, request.await) }
    });
    let mut settled: Vec<(usize, AppResult<PackingDetail>)> = join_all(pending).await;
    settled.sort_by_key(|(idx, _)| *idx);

    let mut details = Vec::with_capacity(settled.len());
    let mut failed = Vec::new();
    for (idx, result) in settled {
        match result {
            Ok(detail) => details.push(detail),
            Err(e) => {
                log::warn!("Failed to fetch {}: {}", ids[idx], e);
                failed.push(ids[idx].clone());
            }
        }
    }

    if details.is_empty() {
        return Err(AppError::new(ErrorKind::EmptyBatch, "No data could be loaded."));
    }

    log::debug!(
        "Batch order: {:?}",
        details.iter().map(|d| d.pack_nomor()).collect::<Vec<_>>()
    );

    Ok(BatchOutcome { details, failed })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_packing::{PackingHeader, PackingItem};
    use futures::channel::oneshot;
    use futures::executor::{block_on, LocalPool};
    use futures::task::LocalSpawnExt;
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    fn detail(id: &str) -> PackingDetail {
        PackingDetail {
            header: PackingHeader {
                pack_nomor: id.to_string(),
                pack_spk_nomor: format!("SPK-{}", id),
                pack_tanggal: "2024-03-15".into(),
                detail_ukuran: "M".into(),
                pack_nama_spk: String::new(),
                pack_po_nomor: None,
            },
            items: vec![PackingItem {
                packd_barcode: "1".into(),
                packd_nama: "Kaos".into(),
                packd_ukuran: "M".into(),
                packd_qty: 1,
            }],
        }
    }

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn numbers(outcome: &BatchOutcome) -> Vec<&str> {
        outcome.details.iter().map(|d| d.pack_nomor()).collect()
    }

    #[test]
    fn test_failure_in_the_middle_keeps_order() {
        let outcome = block_on(fetch_in_selection_order(&ids(&["a", "b", "c"]), |id| async move {
            if id == "b" {
                Err(AppError::from_status(500, None, "boom"))
            } else {
                Ok(detail(&id))
            }
        }))
        .unwrap();

        assert_eq!(numbers(&outcome), ["a", "c"]);
        assert_eq!(outcome.failed, ["b"]);
    }

    #[test]
    fn test_order_ignores_arrival_order() {
        let mut pool = LocalPool::new();
        let senders: Rc<RefCell<HashMap<String, oneshot::Sender<AppResult<PackingDetail>>>>> =
            Rc::default();
        let result: Rc<RefCell<Option<AppResult<BatchOutcome>>>> = Rc::default();

        {
            let senders = senders.clone();
            let result = result.clone();
            pool.spawner()
                .spawn_local(async move {
                    let outcome = fetch_in_selection_order(&ids(&["a", "b", "c"]), |id| {
                        let (tx, rx) = oneshot::channel();
                        senders.borrow_mut().insert(id, tx);
                        async move {
                            rx.await
                                .unwrap_or_else(|_| Err(AppError::transport("dropped")))
                        }
                    })
                    .await;
                    *result.borrow_mut() = Some(outcome);
                })
                .unwrap();
        }

        pool.run_until_stalled();
        // all three requests are in flight at once
        assert_eq!(senders.borrow().len(), 3);
        assert!(result.borrow().is_none());

        let settle = |id: &str, value: AppResult<PackingDetail>| {
            let tx = senders.borrow_mut().remove(id).unwrap();
            let _ = tx.send(value);
        };

        settle("c", Ok(detail("c")));
        pool.run_until_stalled();
        assert!(result.borrow().is_none());

        settle("b", Err(AppError::transport("timeout")));
        settle("a", Ok(detail("a")));
        pool.run_until_stalled();

        let outcome = result.borrow_mut().take().unwrap().unwrap();
        assert_eq!(numbers(&outcome), ["a", "c"]);
        assert_eq!(outcome.failed, ["b"]);
    }

    #[test]
    fn test_empty_selection_issues_no_request() {
        let calls = Cell::new(0);
        let err = block_on(fetch_in_selection_order(&[], |id| {
            calls.set(calls.get() + 1);
            async move { Ok(detail(&id)) }
        }))
        .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_all_failed_is_an_error() {
        let err = block_on(fetch_in_selection_order(&ids(&["a", "b"]), |_| async move {
            Err::<PackingDetail, _>(AppError::transport("offline"))
        }))
        .unwrap_err();

        assert_eq!(err.kind, ErrorKind::EmptyBatch);
        assert_eq!(err.message, "No data could be loaded.");
    }

    #[test]
    fn test_every_fetch_is_issued_once() {
        let calls = RefCell::new(Vec::new());
        block_on(fetch_in_selection_order(&ids(&["x", "y", "z"]), |id| {
            calls.borrow_mut().push(id.clone());
            async move { Ok(detail(&id)) }
        }))
        .unwrap();
        assert_eq!(*calls.borrow(), ["x", "y", "z"]);
    }
}
