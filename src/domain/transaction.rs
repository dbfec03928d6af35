use serde::{Deserialize, Serialize};
use std::fmt;

/// Stripe balance-transaction type, as found in the `type` field of the API
/// payload. Unrecognized values are preserved verbatim so they can be named
/// in skip reasons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    Payment,
    Charge,
    StripeFee,
    Refund,
    Other(String),
}

impl From<String> for TransactionType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "payment" => Self::Payment,
            "charge" => Self::Charge,
            "stripe_fee" => Self::StripeFee,
            "refund" => Self::Refund,
            _ => Self::Other(raw),
        }
    }
}

impl From<TransactionType> for String {
    fn from(value: TransactionType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Payment => f.write_str("payment"),
            Self::Charge => f.write_str("charge"),
            Self::StripeFee => f.write_str("stripe_fee"),
            Self::Refund => f.write_str("refund"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}

/// One movement on the Stripe balance. Amounts are signed integer minor
/// currency units (cents): fees and refunds arrive negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTransaction {
    pub id: String,
    pub r#type: TransactionType,
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fee: i64,
    #[serde(default)]
    pub fee_details: Vec<FeeDetail>,
    #[serde(default)]
    pub net: i64,
    /// Unix timestamp, seconds.
    pub created: i64,
    /// Reference to the charge or refund this movement belongs to.
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeDetail {
    pub amount: i64,
    #[serde(default)]
    pub currency: String,
    pub r#type: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Stripe refund object, trimmed to the fields the reconciliation needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    pub id: String,
    #[serde(default)]
    pub charge: Option<String>,
}

/// Stripe charge object, trimmed to the fields the reconciliation needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    pub id: String,
    #[serde(default)]
    pub balance_transaction: Option<String>,
}
