use serde::{Deserialize, Deserializer, Serialize};

/// `null` and missing text fields both become an empty string
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` and missing quantities both become 0
fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}

/// Header of a packing record. `pack_nomor` is the business key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingHeader {
    pub pack_nomor: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pack_spk_nomor: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pack_tanggal: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub detail_ukuran: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pack_nama_spk: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pack_po_nomor: Option<String>,
}

/// Line of a packing record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingItem {
    #[serde(alias = "barcode", default, deserialize_with = "null_as_empty")]
    pub packd_barcode: String,
    #[serde(alias = "name", default, deserialize_with = "null_as_empty")]
    pub packd_nama: String,
    #[serde(alias = "size", default, deserialize_with = "null_as_empty")]
    pub packd_ukuran: String,
    #[serde(alias = "quantity", default, deserialize_with = "null_as_zero")]
    pub packd_qty: u32,
}

/// Full record as returned by `GET /packing/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingDetail {
    pub header: PackingHeader,
    #[serde(default)]
    pub items: Vec<PackingItem>,
}

impl PackingDetail {
    pub fn pack_nomor(&self) -> &str {
        &self.header.pack_nomor
    }

    /// Sum of item quantities, printed as `QTY` on the label
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|item| item.packd_qty).sum()
    }
}

impl PackingHeader {
    /// Size detail as printed: whitespace runs become `", "`
    pub fn formatted_size_detail(&self) -> String {
        self.detail_ukuran
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One autocomplete suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub pack_nomor: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub pack_spk_nomor: String,
}

/// `data` of `GET /packing/search`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub items: Vec<SearchHit>,
}

/// Query of `GET /packing/history`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryQuery {
    pub start_date: String,
    pub end_date: String,
    pub page: u32,
    pub limit: u32,
}

/// Body of `PUT /packing/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePackingRequest {
    pub items: Vec<PackingItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const DETAIL_JSON: &str = r#"{
        "header": {
            "pack_nomor": "PK-2024-0001",
            "pack_spk_nomor": "SPK/77",
            "pack_tanggal": "2024-03-15T08:00:00.000Z",
            "detail_ukuran": "S:2  M:3 L:1",
            "pack_nama_spk": null
        },
        "items": [
            {"packd_barcode": "899001", "packd_nama": "Kaos", "packd_ukuran": "S", "packd_qty": 2},
            {"barcode": "899002", "name": "Kaos", "size": "M", "quantity": 3}
        ]
    }"#;

    #[test]
    fn test_detail_from_server_json() {
        let detail: PackingDetail = serde_json::from_str(DETAIL_JSON).unwrap();
        assert_eq!(detail.pack_nomor(), "PK-2024-0001");
        assert_eq!(detail.header.pack_nama_spk, "");
        assert_eq!(detail.header.pack_po_nomor, None);
        assert_eq!(detail.items[1].packd_barcode, "899002");
        assert_eq!(detail.total_quantity(), 5);
    }

    #[test]
    fn test_null_quantity_counts_as_zero() {
        let json = r#"{
            "header": {"pack_nomor": "PK-7"},
            "items": [
                {"packd_barcode": "1", "packd_qty": null},
                {"packd_barcode": "2"},
                {"packd_barcode": "3", "packd_qty": 4}
            ]
        }"#;
        let detail: PackingDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.items.len(), 3);
        assert_eq!(detail.items[0].packd_qty, 0);
        assert_eq!(detail.items[1].packd_qty, 0);
        assert_eq!(detail.total_quantity(), 4);
    }

    #[test]
    fn test_formatted_size_detail() {
        let detail: PackingDetail = serde_json::from_str(DETAIL_JSON).unwrap();
        assert_eq!(detail.header.formatted_size_detail(), "S:2, M:3, L:1");
    }

    #[test]
    fn test_history_query_uses_camel_case() {
        let query = HistoryQuery {
            start_date: "2024-03-01".into(),
            end_date: "2024-03-31".into(),
            page: 2,
            limit: 15,
        };
        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value["startDate"], "2024-03-01");
        assert_eq!(value["endDate"], "2024-03-31");
    }

    #[test]
    fn test_search_results_default_to_empty() {
        let results: SearchResults = serde_json::from_str("{}").unwrap();
        assert!(results.items.is_empty());
    }
}
