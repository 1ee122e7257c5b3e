//! Packing endpoints of the remote API

use contracts::domain::a001_packing::{
    HistoryQuery, PackingDetail, PackingHeader, PackingItem, SearchHit, SearchResults,
    UpdatePackingRequest,
};
use contracts::shared::envelope::Pagination;

use crate::shared::api_utils::packing_path;
use crate::shared::error::{AppError, AppResult, ErrorKind};
use crate::shared::http::ApiClient;

/// One page of the history list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryPage {
    pub items: Vec<PackingHeader>,
    pub pagination: Pagination,
}

pub async fn fetch_history(api: &ApiClient, query: &HistoryQuery) -> AppResult<HistoryPage> {
    let envelope = api
        .get_with_query::<Vec<PackingHeader>, _>(
            "/packing/history",
            query,
            "Failed to load packing history",
        )
        .await?;
    Ok(HistoryPage {
        items: envelope.data,
        pagination: envelope.pagination.unwrap_or_default().normalized(),
    })
}

/// Autocomplete lookup by partial packing number
pub async fn search(api: &ApiClient, term: &str) -> AppResult<Vec<SearchHit>> {
    let envelope = api
        .get::<SearchResults>(
            &format!("/packing/search?term={}", urlencoding::encode(term)),
            "Search failed",
        )
        .await?;
    Ok(envelope.data.items)
}

pub async fn fetch_detail(api: &ApiClient, pack_nomor: &str) -> AppResult<PackingDetail> {
    api.get::<PackingDetail>(&packing_path(pack_nomor), "Failed to load packing")
        .await
        .map(|envelope| envelope.data)
}

/// Detail fetch for the preview: a 404 reads as "Packing number not
/// found.", other failures keep their own message.
pub async fn find_detail(api: &ApiClient, pack_nomor: &str) -> AppResult<PackingDetail> {
    fetch_detail(api, pack_nomor).await.map_err(|e| match e.kind {
        ErrorKind::NotFound => AppError::new(ErrorKind::NotFound, "Packing number not found."),
        _ => e,
    })
}

pub async fn update_packing(api: &ApiClient, pack_nomor: &str, items: Vec<PackingItem>) -> AppResult<()> {
    let body = UpdatePackingRequest { items };
    api.put::<Option<serde_json::Value>, _>(&packing_path(pack_nomor), &body, "Failed to save packing")
        .await
        .map(|_| ())
}

pub async fn delete_packing(api: &ApiClient, pack_nomor: &str) -> AppResult<()> {
    api.delete(&packing_path(pack_nomor), "Failed to delete packing")
        .await
}
