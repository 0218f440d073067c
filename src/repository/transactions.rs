use chrono::{Duration, NaiveTime};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::AppError;
use crate::models::transaction::{Transaction, TransactionFilter};

const COLUMNS: &str =
    "id, user_id, recipient, amount, currency, exchange_rate, fee, net_amount, created_at";

/// Row to persist; every derived field has already been computed by the
/// processor.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub user_id: i64,
    pub recipient: String,
    pub amount: f64,
    pub currency: String,
    pub exchange_rate: f64,
    pub fee: f64,
    pub net_amount: f64,
}

#[derive(Clone)]
pub struct TransactionRepository {
    pool: SqlitePool,
}

impl TransactionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, tx: NewTransaction) -> Result<Transaction, AppError> {
        let record = sqlx::query_as::<_, Transaction>(&format!(
            "INSERT INTO transactions \
             (user_id, recipient, amount, currency, exchange_rate, fee, net_amount, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {COLUMNS}"
        ))
        .bind(tx.user_id)
        .bind(&tx.recipient)
        .bind(tx.amount)
        .bind(&tx.currency)
        .bind(tx.exchange_rate)
        .bind(tx.fee)
        .bind(tx.net_amount)
        .bind(chrono::Utc::now().naive_utc())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn get(&self, id: i64) -> Result<Option<Transaction>, AppError> {
        let record = sqlx::query_as::<_, Transaction>(&format!(
            "SELECT {COLUMNS} FROM transactions WHERE id = ?"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Filtered page ordered by creation time descending. The whole filter,
    /// including the calendar-day condition, lives in the predicate, so the
    /// LIMIT/OFFSET slice and the counts stay consistent.
    pub async fn list(
        &self,
        filter: &TransactionFilter,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Transaction>, AppError> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT {COLUMNS} FROM transactions WHERE 1=1"
        ));
        push_filters(&mut builder, filter);
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(limit);
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let records = builder
            .build_query_as::<Transaction>()
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    /// Count over the same predicate as [`list`](Self::list).
    pub async fn count(&self, filter: &TransactionFilter) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM transactions WHERE 1=1");
        push_filters(&mut builder, filter);

        let total: i64 = builder.build_query_scalar().fetch_one(&self.pool).await?;

        Ok(total)
    }

    pub async fn update(&self, id: i64, tx: NewTransaction) -> Result<Option<Transaction>, AppError> {
        let record = sqlx::query_as::<_, Transaction>(&format!(
            "UPDATE transactions SET recipient = ?, amount = ?, currency = ?, \
             exchange_rate = ?, fee = ?, net_amount = ? WHERE id = ? RETURNING {COLUMNS}"
        ))
        .bind(&tx.recipient)
        .bind(tx.amount)
        .bind(&tx.currency)
        .bind(tx.exchange_rate)
        .bind(tx.fee)
        .bind(tx.net_amount)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Builds the WHERE tail clause by clause; absent filter values add nothing.
/// The date filter becomes a half-open day range so time-of-day is ignored.
fn push_filters(builder: &mut QueryBuilder<'_, Sqlite>, filter: &TransactionFilter) {
    if let Some(user_id) = filter.user_id {
        builder.push(" AND user_id = ");
        builder.push_bind(user_id);
    }

    if let Some(ref currency) = filter.currency {
        builder.push(" AND currency LIKE ");
        builder.push_bind(format!("%{currency}%"));
    }

    if let Some(amount) = filter.amount {
        builder.push(" AND amount = ");
        builder.push_bind(amount);
    }

    if let Some(date) = filter.date {
        let day_start = date.and_time(NaiveTime::MIN);
        let day_end = day_start + Duration::days(1);
        builder.push(" AND created_at >= ");
        builder.push_bind(day_start);
        builder.push(" AND created_at < ");
        builder.push_bind(day_end);
    }
}
