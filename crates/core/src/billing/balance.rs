//! Balance calculation.
//!
//! Turns an expected amount plus a transaction history into a per-term
//! balance summary. Pure and O(n) over the transaction list; no rounding is
//! performed here, currency rounding is a presentation concern.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{FeeTransaction, StudentBalanceView, TransactionCategory};
use crate::fees::resolver::FeeExpectationResolver;
use crate::fees::types::SchoolFeeConfig;
use crate::term::Term;

/// Annual totals across the three per-term balance views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementTotals {
    /// Total expected across all terms.
    pub expected: Decimal,
    /// Total paid across all terms.
    pub paid: Decimal,
    /// Net adjustments across all terms.
    pub adjustments: Decimal,
    /// Total outstanding across all terms.
    pub outstanding: Decimal,
}

impl StatementTotals {
    /// Sums a set of per-term views into annual totals.
    #[must_use]
    pub fn from_views(views: &[StudentBalanceView]) -> Self {
        let mut totals = Self {
            expected: Decimal::ZERO,
            paid: Decimal::ZERO,
            adjustments: Decimal::ZERO,
            outstanding: Decimal::ZERO,
        };
        for view in views {
            totals.expected += view.expected;
            totals.paid += view.paid;
            totals.adjustments += view.adjustments;
            totals.outstanding += view.outstanding;
        }
        totals
    }
}

/// Balance calculator.
///
/// Stateless; safe to call concurrently and re-run on demand. Always reflects
/// the full transaction history it is handed.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes the balance summary for one term.
    ///
    /// Only transactions tagged with `term` contribute. Payments reduce the
    /// outstanding amount; adjustments are signed and added as-is, per the
    /// convention on [`TransactionCategory::Adjustment`]:
    ///
    /// `outstanding = expected - paid + adjustments`
    ///
    /// A negative outstanding amount means the student holds credit. That is
    /// a valid state, not an error.
    #[must_use]
    pub fn compute_balance(
        expected: Decimal,
        transactions: &[FeeTransaction],
        term: Term,
    ) -> StudentBalanceView {
        let mut paid = Decimal::ZERO;
        let mut adjustments = Decimal::ZERO;

        for tx in transactions.iter().filter(|tx| tx.term == term) {
            match tx.category {
                TransactionCategory::Payment => paid += tx.amount,
                TransactionCategory::Adjustment => adjustments += tx.amount,
            }
        }

        StudentBalanceView {
            term,
            expected,
            paid,
            adjustments,
            outstanding: expected - paid + adjustments,
        }
    }

    /// Resolves and computes all three terms for one student, in term order.
    ///
    /// Composes [`FeeExpectationResolver::resolve_expected_amount`] with
    /// [`Self::compute_balance`]; statement generators and dashboards consume
    /// this directly.
    #[must_use]
    pub fn term_summaries(
        config: &SchoolFeeConfig,
        class_level: &str,
        transactions: &[FeeTransaction],
    ) -> Vec<StudentBalanceView> {
        Term::ALL
            .iter()
            .map(|&term| {
                let expected =
                    FeeExpectationResolver::resolve_expected_amount(config, class_level, term);
                Self::compute_balance(expected, transactions, term)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal_macros::dec;
    use shule_shared::types::{StudentId, TransactionId};

    fn tx(term: Term, category: TransactionCategory, amount: Decimal) -> FeeTransaction {
        FeeTransaction {
            id: TransactionId::new(),
            student_id: StudentId::new(),
            term,
            category,
            amount,
            recorded_at: Utc::now(),
            note: None,
        }
    }

    #[test]
    fn test_payment_reduces_outstanding() {
        let txs = vec![tx(Term::Term1, TransactionCategory::Payment, dec!(400))];
        let view = BalanceCalculator::compute_balance(dec!(1000), &txs, Term::Term1);

        assert_eq!(view.paid, dec!(400));
        assert_eq!(view.adjustments, Decimal::ZERO);
        assert_eq!(view.outstanding, dec!(600));
    }

    #[test]
    fn test_fine_increases_outstanding() {
        let txs = vec![
            tx(Term::Term1, TransactionCategory::Payment, dec!(400)),
            tx(Term::Term1, TransactionCategory::Adjustment, dec!(100)),
        ];
        let view = BalanceCalculator::compute_balance(dec!(1000), &txs, Term::Term1);

        assert_eq!(view.outstanding, dec!(700));
    }

    #[test]
    fn test_waiver_decreases_outstanding() {
        let txs = vec![
            tx(Term::Term1, TransactionCategory::Payment, dec!(400)),
            tx(Term::Term1, TransactionCategory::Adjustment, dec!(-100)),
        ];
        let view = BalanceCalculator::compute_balance(dec!(1000), &txs, Term::Term1);

        assert_eq!(view.outstanding, dec!(500));
    }

    #[test]
    fn test_other_terms_are_isolated() {
        let txs = vec![
            tx(Term::Term2, TransactionCategory::Payment, dec!(400)),
            tx(Term::Term2, TransactionCategory::Adjustment, dec!(-100)),
        ];
        let view = BalanceCalculator::compute_balance(dec!(1000), &txs, Term::Term1);

        assert_eq!(view.paid, Decimal::ZERO);
        assert_eq!(view.adjustments, Decimal::ZERO);
        assert_eq!(view.outstanding, dec!(1000));
    }

    #[test]
    fn test_overpayment_yields_negative_outstanding() {
        let txs = vec![tx(Term::Term1, TransactionCategory::Payment, dec!(800))];
        let view = BalanceCalculator::compute_balance(dec!(500), &txs, Term::Term1);

        assert_eq!(view.outstanding, dec!(-300));
    }

    #[test]
    fn test_no_transactions_leaves_full_expected() {
        let view = BalanceCalculator::compute_balance(dec!(1000), &[], Term::Term1);

        assert_eq!(view.paid, Decimal::ZERO);
        assert_eq!(view.outstanding, dec!(1000));
    }

    #[test]
    fn test_compute_balance_is_deterministic() {
        let txs = vec![
            tx(Term::Term1, TransactionCategory::Payment, dec!(250)),
            tx(Term::Term1, TransactionCategory::Adjustment, dec!(50)),
        ];
        let first = BalanceCalculator::compute_balance(dec!(1000), &txs, Term::Term1);
        let second = BalanceCalculator::compute_balance(dec!(1000), &txs, Term::Term1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_statement_totals_sum_views() {
        let views = vec![
            StudentBalanceView {
                term: Term::Term1,
                expected: dec!(1000),
                paid: dec!(400),
                adjustments: dec!(100),
                outstanding: dec!(700),
            },
            StudentBalanceView {
                term: Term::Term2,
                expected: dec!(1200),
                paid: dec!(1200),
                adjustments: Decimal::ZERO,
                outstanding: Decimal::ZERO,
            },
        ];
        let totals = StatementTotals::from_views(&views);

        assert_eq!(totals.expected, dec!(2200));
        assert_eq!(totals.paid, dec!(1600));
        assert_eq!(totals.adjustments, dec!(100));
        assert_eq!(totals.outstanding, dec!(700));
    }
}
