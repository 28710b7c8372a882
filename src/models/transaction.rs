use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of balance-affecting operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Investment,
}

impl TransactionKind {
    /// Capitalized label, used for synthesized notes and notifications
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Investment => "Investment",
        }
    }
}

/// Ledger entry. Created only by the wallet ledger on a successful
/// operation (seed fixtures aside); immutable once created.
///
/// `amount` is signed: deposits positive, withdrawals and investments
/// negative. The ledger enforces this for entries it generates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub method: String,
    pub date: NaiveDate,
    pub note: String,
}
