use stripe_nocfo_sync::application::mapper::EntryMapper;
use stripe_nocfo_sync::domain::entry::{EntryDraft, ExistingEntry};
use stripe_nocfo_sync::domain::transaction::{
    BalanceTransaction, Charge, FeeDetail, Refund, TransactionType,
};
use stripe_nocfo_sync::infrastructure::in_memory::InMemoryPaymentProvider;

pub fn payment_txn() -> BalanceTransaction {
    BalanceTransaction {
        id: "txn_1234567890".to_owned(),
        r#type: TransactionType::Payment,
        amount: 3480,
        currency: "eur".to_owned(),
        description: Some("Payment from customer".to_owned()),
        fee: 290,
        fee_details: vec![FeeDetail {
            amount: 290,
            currency: "eur".to_owned(),
            r#type: "stripe_fee".to_owned(),
            description: Some("Stripe fee".to_owned()),
        }],
        net: 3190,
        created: 1_640_995_200, // 2022-01-01
        source: Some("ch_1234567890".to_owned()),
    }
}

pub fn fee_txn() -> BalanceTransaction {
    BalanceTransaction {
        id: "txn_0987654321".to_owned(),
        r#type: TransactionType::StripeFee,
        amount: -290,
        currency: "eur".to_owned(),
        description: Some("Stripe fee".to_owned()),
        fee: 0,
        fee_details: Vec::new(),
        net: -290,
        created: 1_640_995_200,
        source: Some("ch_1234567890".to_owned()),
    }
}

pub fn refund_txn() -> BalanceTransaction {
    BalanceTransaction {
        id: "txn_refund_123".to_owned(),
        r#type: TransactionType::Refund,
        amount: -3480,
        currency: "eur".to_owned(),
        description: Some("Refund to customer".to_owned()),
        fee: 0,
        fee_details: Vec::new(),
        net: -3480,
        created: 1_641_081_600, // 2022-01-02
        source: Some("re_1234567890".to_owned()),
    }
}

/// The refund and charge objects linking `refund_txn` back to `payment_txn`.
pub fn refund_chain() -> (Vec<Refund>, Vec<Charge>) {
    (
        vec![Refund {
            id: "re_1234567890".to_owned(),
            charge: Some("ch_1234567890".to_owned()),
        }],
        vec![Charge {
            id: "ch_1234567890".to_owned(),
            balance_transaction: Some("txn_1234567890".to_owned()),
        }],
    )
}

/// The draft a transaction maps onto, produced by the real mapper so
/// fixtures never drift from the mapping rules.
pub fn draft_for(txn: &BalanceTransaction) -> EntryDraft {
    let mapper = EntryMapper::new(Box::new(InMemoryPaymentProvider::default()));
    match txn.r#type {
        TransactionType::StripeFee => mapper.map_fee(txn),
        _ => mapper.map_payment(txn),
    }
}

/// A stored document identical to what `draft` would post.
pub fn stored(id: &str, draft: EntryDraft) -> ExistingEntry {
    ExistingEntry {
        id: id.to_owned(),
        description: draft.description,
        blueprint: draft.blueprint,
        attachment_ids: draft.attachment_ids,
        date: draft.date,
    }
}
