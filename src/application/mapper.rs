use crate::domain::entry::{
    Blueprint, BlueprintType, DISBURSEMENT_ACCOUNT, EntryDraft, EntryLine, ExistingEntry,
    REVENUE_ACCOUNT, ROUNDING_ACCOUNT, SALES_VAT_CODE, SALES_VAT_RATE, STRIPE_FEE_ACCOUNT,
    VAT_ACCOUNT, ZERO_VAT_CODE, find_linked_entry,
};
use crate::domain::ports::{PaymentProvider, PaymentProviderBox};
use crate::domain::transaction::{BalanceTransaction, TransactionType};
use crate::error::{ReconcileError, Result};
use chrono::{DateTime, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Converts one balance transaction into the accounting document it should
/// produce.
///
/// Payment and fee mapping are pure computation. Refund mapping additionally
/// resolves the refund to its charge and on to the original balance
/// transaction through the payment provider, then reverses the original sale
/// out of the entry that recorded it.
pub struct EntryMapper {
    payments: PaymentProviderBox,
}

impl EntryMapper {
    pub fn new(payments: PaymentProviderBox) -> Self {
        Self { payments }
    }

    /// Dispatches on the transaction type. Unhandled types map to `None`,
    /// which the engine reports as a skip rather than an error.
    pub async fn map_transaction(
        &self,
        txn: &BalanceTransaction,
        entries: &[ExistingEntry],
    ) -> Result<Option<EntryDraft>> {
        match txn.r#type {
            TransactionType::Payment | TransactionType::Charge => Ok(Some(self.map_payment(txn))),
            TransactionType::StripeFee => Ok(Some(self.map_fee(txn))),
            TransactionType::Refund => self.map_refund(txn, entries).await.map(Some),
            TransactionType::Other(_) => Ok(None),
        }
    }

    /// A card payment becomes a SALES document: the gross amount as revenue
    /// at the sales VAT rate, plus one zero-VAT expense line per Stripe
    /// processing fee.
    pub fn map_payment(&self, txn: &BalanceTransaction) -> EntryDraft {
        let expense_entries = txn
            .fee_details
            .iter()
            .filter(|fee| fee.r#type == "stripe_fee")
            .map(|fee| {
                EntryLine::new(
                    STRIPE_FEE_ACCOUNT,
                    ZERO_VAT_CODE,
                    Decimal::ZERO,
                    minor_units(fee.amount),
                )
            })
            .collect();

        EntryDraft {
            blueprint_type: BlueprintType::Sales,
            contact_id: None,
            blueprint: Blueprint {
                debet_account_id: Some(DISBURSEMENT_ACCOUNT),
                credit_entries: vec![EntryLine::new(
                    REVENUE_ACCOUNT,
                    SALES_VAT_CODE,
                    SALES_VAT_RATE,
                    minor_units(txn.amount),
                )],
                expense_entries,
                ..Blueprint::default()
            },
            attachment_ids: Vec::new(),
            date: entry_date(txn.created),
            description: format!("{} - Stripe Transaction", txn.id),
        }
    }

    /// A standalone Stripe fee becomes a PURCHASE document. Fee transactions
    /// carry a negative amount; negating it yields the positive expense.
    pub fn map_fee(&self, txn: &BalanceTransaction) -> EntryDraft {
        EntryDraft {
            blueprint_type: BlueprintType::Purchase,
            contact_id: None,
            blueprint: Blueprint {
                credit_account_id: Some(DISBURSEMENT_ACCOUNT),
                debet_entries: vec![EntryLine::new(
                    STRIPE_FEE_ACCOUNT,
                    ZERO_VAT_CODE,
                    Decimal::ZERO,
                    -minor_units(txn.amount),
                )],
                ..Blueprint::default()
            },
            attachment_ids: Vec::new(),
            date: entry_date(txn.created),
            description: format!(
                "{} - {}",
                txn.id,
                txn.description.as_deref().unwrap_or_default()
            ),
        }
    }

    /// A refund becomes a MANUAL document reversing the original sale:
    /// net-of-VAT revenue and the VAT portion are debited back, a residual
    /// line absorbs any difference between the refunded amount and the
    /// original gross (partial refunds, currency variance), and the clearing
    /// account is credited with the refunded amount.
    pub async fn map_refund(
        &self,
        txn: &BalanceTransaction,
        entries: &[ExistingEntry],
    ) -> Result<EntryDraft> {
        let source = txn
            .source
            .as_deref()
            .filter(|source| !source.is_empty())
            .ok_or_else(|| ReconcileError::InvalidReference(txn.id.clone()))?;

        let refund = self.payments.get_refund(source).await?;
        let charge_id = refund
            .charge
            .ok_or_else(|| ReconcileError::InvalidChargeReference(txn.id.clone()))?;

        let charge = self.payments.get_charge(&charge_id).await?;
        let original_txn_id = charge
            .balance_transaction
            .ok_or_else(|| ReconcileError::InvalidChargeReference(txn.id.clone()))?;

        let original = find_linked_entry(&original_txn_id, entries)
            .ok_or_else(|| ReconcileError::OriginalEntryNotFound(txn.id.clone()))?;

        let credit_line = original
            .blueprint
            .credit_entries
            .iter()
            .find(|line| line.account_id == REVENUE_ACCOUNT)
            .ok_or_else(|| ReconcileError::CreditLineNotFound(original_txn_id.clone()))?;

        let vat = vat_portion(credit_line);
        let refunded = -minor_units(txn.amount);

        Ok(EntryDraft {
            blueprint_type: BlueprintType::Manual,
            contact_id: None,
            blueprint: Blueprint {
                debet_entries: vec![
                    EntryLine::new(
                        REVENUE_ACCOUNT,
                        SALES_VAT_CODE,
                        Decimal::ZERO,
                        credit_line.amount - vat,
                    ),
                    EntryLine::new(VAT_ACCOUNT, ZERO_VAT_CODE, Decimal::ZERO, vat),
                    EntryLine::new(
                        ROUNDING_ACCOUNT,
                        ZERO_VAT_CODE,
                        Decimal::ZERO,
                        refunded - credit_line.amount,
                    ),
                ],
                credit_entries: vec![EntryLine::new(
                    DISBURSEMENT_ACCOUNT,
                    ZERO_VAT_CODE,
                    Decimal::ZERO,
                    refunded,
                )],
                ..Blueprint::default()
            },
            attachment_ids: Vec::new(),
            date: entry_date(txn.created),
            description: format!(
                "{} - {} {}",
                txn.id,
                txn.description.as_deref().unwrap_or_default(),
                original_txn_id
            ),
        })
    }
}

/// Minor currency units to decimal currency units: cents / 100, exact.
fn minor_units(amount: i64) -> Decimal {
    Decimal::new(amount, 2)
}

/// UTC calendar date of a Unix timestamp. Timestamps outside chrono's range
/// clamp to the epoch date.
fn entry_date(created: i64) -> NaiveDate {
    DateTime::from_timestamp(created, 0)
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}

/// VAT backed out of a VAT-inclusive gross line, rounded half-away-from-zero
/// to cents: `gross / (rate + 1) * rate` with `rate` as a fraction.
fn vat_portion(line: &EntryLine) -> Decimal {
    let rate = line.vat_rate / dec!(100);
    (line.amount / (rate + Decimal::ONE) * rate)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
