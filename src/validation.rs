use std::sync::LazyLock;

use regex::Regex;

use crate::models::transaction::{Transfer, TransferRequest};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*$")
        .expect("email regex")
});

/// Required validation capability; every member is always present. Contexts
/// that need to skip checks inject [`NoopValidator`] instead of leaving
/// methods out. All checks are synchronous and pure.
pub trait Validator: Send + Sync {
    fn has_whitespace(&self, value: &str) -> bool;
    fn meets_min_length(&self, value: &str, min: usize) -> bool;
    fn is_valid_email(&self, value: &str) -> bool;
    fn validate_transfer(&self, request: &TransferRequest) -> Result<Transfer, String>;
}

pub struct RequestValidator;

impl Validator for RequestValidator {
    fn has_whitespace(&self, value: &str) -> bool {
        value.chars().any(char::is_whitespace)
    }

    fn meets_min_length(&self, value: &str, min: usize) -> bool {
        value.chars().count() >= min
    }

    fn is_valid_email(&self, value: &str) -> bool {
        EMAIL_RE.is_match(value)
    }

    fn validate_transfer(&self, request: &TransferRequest) -> Result<Transfer, String> {
        let recipient = request
            .recipient
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty());
        let currency = request
            .currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty());
        let amount = request.amount.filter(|a| *a > 0.0);

        match (recipient, amount, currency) {
            (Some(recipient), Some(amount), Some(currency)) => Ok(Transfer {
                recipient: recipient.to_string(),
                amount,
                currency: currency.to_string(),
            }),
            _ => Err("Missing required fields: amount, recipient, or currency".to_string()),
        }
    }
}

/// Accepts anything; for contexts that deliberately bypass checks.
pub struct NoopValidator;

impl Validator for NoopValidator {
    fn has_whitespace(&self, _value: &str) -> bool {
        false
    }

    fn meets_min_length(&self, _value: &str, _min: usize) -> bool {
        true
    }

    fn is_valid_email(&self, _value: &str) -> bool {
        true
    }

    fn validate_transfer(&self, request: &TransferRequest) -> Result<Transfer, String> {
        Ok(Transfer {
            recipient: request.recipient.clone().unwrap_or_default(),
            amount: request.amount.unwrap_or_default(),
            currency: request.currency.clone().unwrap_or_default(),
        })
    }
}
