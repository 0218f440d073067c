use std::sync::Arc;

use crate::error::AppError;
use crate::models::transaction::{
    PageMeta, Transaction, TransactionFilter, TransactionPage, TransferRequest,
    UpdateTransactionRequest,
};
use crate::repository::transactions::{NewTransaction, TransactionRepository};
use crate::validation::Validator;

pub const FLAT_FEE: f64 = 5.0;
pub const PERCENTAGE_FEE: f64 = 0.02;

const DEFAULT_PAGE: i64 = 1;
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Fixed per-currency rates relative to the base currency; recorded on the
/// transaction but informational only, the stored amount stays gross.
pub fn exchange_rate(currency: &str) -> f64 {
    match currency {
        "USD" => 0.055,
        "KES" => 7.1,
        _ => 1.0,
    }
}

pub fn fee_for(amount: f64) -> f64 {
    FLAT_FEE + PERCENTAGE_FEE * amount
}

/// Validates transfers, derives rate/fee/net, and serves history reads.
#[derive(Clone)]
pub struct TransactionProcessor {
    repo: TransactionRepository,
    validator: Arc<dyn Validator>,
}

impl TransactionProcessor {
    pub fn new(repo: TransactionRepository, validator: Arc<dyn Validator>) -> Self {
        Self { repo, validator }
    }

    pub async fn create(
        &self,
        user_id: i64,
        request: &TransferRequest,
    ) -> Result<Transaction, AppError> {
        let transfer = self
            .validator
            .validate_transfer(request)
            .map_err(AppError::Validation)?;

        let fee = fee_for(transfer.amount);
        let record = NewTransaction {
            user_id,
            recipient: transfer.recipient,
            amount: transfer.amount,
            exchange_rate: exchange_rate(&transfer.currency),
            fee,
            net_amount: transfer.amount - fee,
            currency: transfer.currency,
        };

        self.repo.insert(record).await
    }

    pub async fn get(&self, id: i64) -> Result<Transaction, AppError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Transaction not found".into()))
    }

    /// Filtered, paginated history ordered newest first. Totals come from a
    /// count over the same predicate as the page slice, so they describe the
    /// whole matching set.
    pub async fn history(
        &self,
        page: Option<i64>,
        limit: Option<i64>,
        filter: TransactionFilter,
    ) -> Result<TransactionPage, AppError> {
        let page = page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
        let offset = (page - 1) * limit;

        let transactions = self.repo.list(&filter, limit, offset).await?;
        let total_items = self.repo.count(&filter).await?;

        Ok(TransactionPage {
            transactions,
            pagination: PageMeta {
                current_page: page,
                page_size: limit,
                total_items,
                total_pages: (total_items + limit - 1) / limit,
            },
        })
    }

    /// Derived fields are recomputed from the resulting gross amount and
    /// currency on every mutation; caller-supplied rate/fee/net never reach
    /// storage.
    pub async fn update(&self, request: &UpdateTransactionRequest) -> Result<Transaction, AppError> {
        let existing = self.get(request.id).await?;

        let merged = TransferRequest {
            recipient: request.recipient.clone().or(Some(existing.recipient)),
            amount: request.amount.or(Some(existing.amount)),
            currency: request.currency.clone().or(Some(existing.currency)),
        };
        let transfer = self
            .validator
            .validate_transfer(&merged)
            .map_err(AppError::Validation)?;

        let fee = fee_for(transfer.amount);
        let record = NewTransaction {
            user_id: existing.user_id,
            recipient: transfer.recipient,
            amount: transfer.amount,
            exchange_rate: exchange_rate(&transfer.currency),
            fee,
            net_amount: transfer.amount - fee,
            currency: transfer.currency,
        };

        self.repo
            .update(request.id, record)
            .await?
            .ok_or_else(|| AppError::NotFound("Transaction not found".into()))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound("Transaction not found".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fee_is_flat_plus_two_percent() {
        assert_eq!(fee_for(100.0), 7.0);
        assert_eq!(fee_for(0.0), 5.0);
        assert_eq!(fee_for(200.0), 9.0);
    }

    #[test]
    fn net_amount_is_gross_minus_fee() {
        let amount = 100.0;
        assert_eq!(amount - fee_for(amount), 93.0);
    }

    #[test]
    fn rates_are_fixed_constants() {
        assert_eq!(exchange_rate("USD"), 0.055);
        assert_eq!(exchange_rate("KES"), 7.1);
        assert_eq!(exchange_rate("ZAR"), 1.0);
        assert_eq!(exchange_rate(""), 1.0);
    }
}
