//! Billing data types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shule_shared::types::{StudentId, TransactionId};

use crate::term::Term;

/// Category of a fee transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionCategory {
    /// Money received against the student's fees. Always reduces the
    /// outstanding balance.
    Payment,
    /// A signed manual correction. A positive amount increases what is owed
    /// (a fine); a negative amount decreases it (a waiver or credit). The
    /// sign is supplied by whoever records the adjustment and is never
    /// flipped downstream.
    Adjustment,
}

/// An immutable fee transaction on a student's account.
///
/// Transactions are append-only: created by a billing action, never mutated,
/// optionally referenced by audit views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeTransaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Student the transaction belongs to.
    pub student_id: StudentId,
    /// Term the transaction counts against.
    pub term: Term,
    /// Transaction category.
    pub category: TransactionCategory,
    /// Amount. Signed for adjustments, positive for payments.
    pub amount: Decimal,
    /// When the transaction was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Optional free-text note (e.g., receipt number, waiver reason).
    pub note: Option<String>,
}

/// Rendering hint for an outstanding balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Outstanding is positive: the student owes.
    Owing,
    /// Outstanding is zero: fully settled.
    Settled,
    /// Outstanding is negative: the student overpaid and holds credit.
    InCredit,
}

/// A student's computed balance for one term.
///
/// Derived on demand from the expected amount and transaction history; never
/// persisted, recomputed whenever requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentBalanceView {
    /// Term the view covers.
    pub term: Term,
    /// Expected fee amount for the term.
    pub expected: Decimal,
    /// Sum of payments recorded for the term.
    pub paid: Decimal,
    /// Net signed adjustments recorded for the term.
    pub adjustments: Decimal,
    /// `expected - paid + adjustments`. Negative means credit.
    pub outstanding: Decimal,
}

impl StudentBalanceView {
    /// Classifies the outstanding amount for rendering.
    ///
    /// The signed number stays authoritative; this only tells a caller
    /// whether to label it "owes" or "credit".
    #[must_use]
    pub fn status(&self) -> BalanceStatus {
        match self.outstanding.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => BalanceStatus::Owing,
            std::cmp::Ordering::Equal => BalanceStatus::Settled,
            std::cmp::Ordering::Less => BalanceStatus::InCredit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn view(outstanding: Decimal) -> StudentBalanceView {
        StudentBalanceView {
            term: Term::Term1,
            expected: dec!(1000),
            paid: Decimal::ZERO,
            adjustments: Decimal::ZERO,
            outstanding,
        }
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(view(dec!(600)).status(), BalanceStatus::Owing);
        assert_eq!(view(Decimal::ZERO).status(), BalanceStatus::Settled);
        assert_eq!(view(dec!(-300)).status(), BalanceStatus::InCredit);
    }

    #[test]
    fn test_category_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&TransactionCategory::Payment).unwrap(),
            "\"payment\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionCategory::Adjustment).unwrap(),
            "\"adjustment\""
        );
    }
}
