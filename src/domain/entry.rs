use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// NOCFO chart-of-accounts ids the mapping rules write against.
pub const REVENUE_ACCOUNT: u32 = 4_971_114;
pub const STRIPE_FEE_ACCOUNT: u32 = 4_971_314;
pub const VAT_ACCOUNT: u32 = 4_971_086;
pub const ROUNDING_ACCOUNT: u32 = 4_971_222;
/// Clearing account mirroring the Stripe balance itself.
pub const DISBURSEMENT_ACCOUNT: u32 = 4_982_339;

pub const SALES_VAT_CODE: u8 = 1;
pub const ZERO_VAT_CODE: u8 = 3;
/// Finnish standard VAT rate applied to sales lines.
pub const SALES_VAT_RATE: Decimal = dec!(25.5);

/// NOCFO document classification. Determines which blueprint fields the
/// service considers valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BlueprintType {
    Sales,
    Purchase,
    Manual,
}

/// A single monetary line within a document blueprint. Amounts are decimal
/// currency units, not minor units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryLine {
    pub account_id: u32,
    pub vat_code: u8,
    pub vat_rate: Decimal,
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EntryLine {
    pub fn new(account_id: u32, vat_code: u8, vat_rate: Decimal, amount: Decimal) -> Self {
        Self {
            account_id,
            vat_code,
            vat_rate,
            amount,
            description: None,
        }
    }
}

/// Line structure of a NOCFO document. "debet" is the service's own wire
/// spelling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blueprint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debet_account_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_account_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub credit_entries: Vec<EntryLine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub debet_entries: Vec<EntryLine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub expense_entries: Vec<EntryLine>,
}

/// The document payload computed for one balance transaction, ready to be
/// posted to the accounting service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDraft {
    pub blueprint_type: BlueprintType,
    pub contact_id: Option<u32>,
    pub blueprint: Blueprint,
    pub attachment_ids: Vec<String>,
    pub date: NaiveDate,
    pub description: String,
}

/// A document already stored in the accounting service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingEntry {
    pub id: String,
    pub description: String,
    pub blueprint: Blueprint,
    #[serde(default)]
    pub attachment_ids: Vec<String>,
    pub date: NaiveDate,
}

impl ExistingEntry {
    /// The balance-transaction id this document was created for.
    ///
    /// Descriptions follow the `"<txnId> - <label>"` convention; the first
    /// `" - "`-separated segment is the link. A string convention, not a
    /// foreign key.
    pub fn linked_transaction_id(&self) -> &str {
        self.description.split(" - ").next().unwrap_or("")
    }
}

/// Resolves the entry linked to `transaction_id`, if any. The single place
/// that interprets the description-prefix convention.
pub fn find_linked_entry<'a>(
    transaction_id: &str,
    entries: &'a [ExistingEntry],
) -> Option<&'a ExistingEntry> {
    entries
        .iter()
        .find(|entry| entry.linked_transaction_id() == transaction_id)
}
