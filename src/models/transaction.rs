use serde::{Deserialize, Serialize};

/// `amount` is always the gross figure as submitted; `exchange_rate`, `fee`
/// and `net_amount` are derived server-side and never accepted from callers.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub user_id: i64,
    pub recipient: String,
    pub amount: f64,
    pub currency: String,
    pub exchange_rate: f64,
    pub fee: f64,
    pub net_amount: f64,
    pub created_at: chrono::NaiveDateTime,
}

/// Create body as received; fields stay optional so validation can report
/// exactly which ones are missing instead of failing at deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransferRequest {
    pub recipient: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

/// A `TransferRequest` that passed validation.
#[derive(Debug, Clone)]
pub struct Transfer {
    pub recipient: String,
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub struct TransactionId {
    pub id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    pub id: i64,
    pub recipient: Option<String>,
    pub amount: Option<f64>,
    pub currency: Option<String>,
}

/// An absent filter value contributes no predicate clause; it is never
/// treated as "match empty string" or "match zero".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TransactionFilter {
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
    pub currency: Option<String>,
    pub amount: Option<f64>,
    pub date: Option<chrono::NaiveDate>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryRequest {
    #[serde(rename = "Page")]
    pub page: Option<i64>,
    #[serde(rename = "Limit")]
    pub limit: Option<i64>,
    #[serde(rename = "Filter", default)]
    pub filter: TransactionFilter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub current_page: i64,
    pub page_size: i64,
    pub total_items: i64,
    pub total_pages: i64,
}

#[derive(Debug, Serialize)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    pub pagination: PageMeta,
}
