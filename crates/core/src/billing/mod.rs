//! Fee transactions and balance calculation.

pub mod balance;
pub mod types;


pub use balance::{BalanceCalculator, StatementTotals};
pub use types::{BalanceStatus, FeeTransaction, StudentBalanceView, TransactionCategory};
