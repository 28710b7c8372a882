use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::{CoreError, Result};
use crate::models::{Transaction, TransactionKind};

/// Wallet ledger: a running balance plus the ordered record of
/// balance-affecting operations, newest first.
///
/// All mutation goes through [`WalletLedger::apply`], which enforces the
/// solvency rule: a withdrawal may spend at most the funds available at the
/// time of the call. Rejected operations leave both the balance and the
/// transaction list untouched.
pub struct WalletLedger {
    balance: Decimal,
    transactions: Vec<Transaction>,
}

impl WalletLedger {
    /// Create an empty ledger with the given opening balance
    pub fn new(opening_balance: Decimal) -> Self {
        Self {
            balance: opening_balance,
            transactions: Vec::new(),
        }
    }

    /// Ledger pre-seeded with the demo account: the fixture history shown on
    /// first login. Fixture amounts keep their mixed sign conventions; the
    /// `apply` invariant binds only entries the ledger generates itself.
    pub fn with_demo_data() -> Self {
        let fixtures = [
            (1, TransactionKind::Deposit, 5_000, "Bank Transfer", "2025-05-28", "Initial deposit"),
            (2, TransactionKind::Investment, -2_500, "Growth Plan", "2025-05-27", "Investment in Growth Plan"),
            (3, TransactionKind::Deposit, 3_000, "Credit Card", "2025-05-25", "Monthly contribution"),
            (4, TransactionKind::Withdrawal, -1_000, "Bank Transfer", "2025-05-24", "Partial withdrawal"),
            (5, TransactionKind::Investment, -5_000, "Premium Plan", "2025-05-22", "Investment in Premium Plan"),
            (6, TransactionKind::Deposit, 10_000, "Bank Transfer", "2025-05-20", "Large deposit"),
            (7, TransactionKind::Investment, -1_500, "ESG Plan", "2025-05-18", "Sustainable investment"),
            (8, TransactionKind::Deposit, 2_000, "PayPal", "2025-05-15", "Regular savings"),
        ];

        // Fixture order is already newest first
        let transactions = fixtures
            .iter()
            .map(|&(id, kind, amount, method, date, note)| Transaction {
                id,
                kind,
                amount: Decimal::from(amount),
                method: method.to_string(),
                date: date.parse().expect("valid fixture date"),
                note: note.to_string(),
            })
            .collect();

        Self {
            // 15750.00, the demo account's starting balance
            balance: Decimal::new(15_750_00, 2),
            transactions,
        }
    }

    /// Current balance
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Transaction history, newest first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Apply a wallet operation and record it.
    ///
    /// `amount` is the unsigned operation size; the ledger derives the sign
    /// from `kind` (deposits positive, withdrawals and investments negative).
    /// `method` is a payment-channel code (`"bank"`, `"card"`, `"paypal"`,
    /// `"crypto"`) or free text, resolved to a display name; an empty `note`
    /// is synthesized from the kind.
    ///
    /// Returns a copy of the recorded transaction, or an error with no state
    /// change: `InvalidAmount` for non-positive amounts, `InsufficientFunds`
    /// when a debit exceeds the pre-operation balance.
    pub fn apply(
        &mut self,
        kind: TransactionKind,
        amount: Decimal,
        method: &str,
        note: &str,
    ) -> Result<Transaction> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(amount));
        }

        let signed = match kind {
            TransactionKind::Deposit => amount,
            TransactionKind::Withdrawal | TransactionKind::Investment => -amount,
        };

        // Solvency check against the pre-operation balance
        if signed < Decimal::ZERO && amount > self.balance {
            return Err(CoreError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance += signed;

        let transaction = Transaction {
            id: self.transactions.len() as u32 + 1,
            kind,
            amount: signed,
            method: resolve_method(method),
            date: Utc::now().date_naive(),
            note: if note.trim().is_empty() {
                format!("{} transaction", kind.label())
            } else {
                note.to_string()
            },
        };

        self.transactions.insert(0, transaction.clone());
        Ok(transaction)
    }

    /// Signed sum of all transactions of the given kind. Callers take the
    /// absolute value for display.
    pub fn total_by_kind(&self, kind: TransactionKind) -> Decimal {
        self.transactions
            .iter()
            .filter(|tx| tx.kind == kind)
            .map(|tx| tx.amount)
            .sum()
    }
}

impl Default for WalletLedger {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}

/// Resolve a payment-channel code to its display name; unknown codes pass
/// through unchanged
pub fn resolve_method(code: &str) -> String {
    match code {
        "bank" => "Bank Transfer".to_string(),
        "card" => "Credit Card".to_string(),
        "paypal" => "PayPal".to_string(),
        "crypto" => "Cryptocurrency".to_string(),
        other => other.to_string(),
    }
}

/// Locale-style currency string: `$` plus the thousands-grouped absolute
/// value to two decimal places. Sign prefixes are the caller's concern.
pub fn format_currency(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.abs().round_dp(2));
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("${grouped}.{frac_part}")
}

/// Short human date, e.g. "May 28, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
