//! Write-time validation for fee configuration.
//!
//! The read path is fail-open: a malformed rule simply never matches. The
//! invariants are instead enforced here, on the school-settings write path,
//! before a configuration is persisted.

use rust_decimal::Decimal;
use thiserror::Error;

use super::types::SchoolFeeConfig;
use shule_shared::AppError;

/// Validation errors for fee configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeeConfigError {
    /// Two class levels share a name.
    #[error("Duplicate class level: {0:?}")]
    DuplicateClassLevel(String),

    /// A fee rule references a class name not in the class sequence.
    #[error("Fee rule references unknown class: {0:?}")]
    UnknownClassInRule(String),

    /// A configured amount is negative.
    #[error("Configured fee amount cannot be negative: {0}")]
    NegativeAmount(Decimal),
}

impl From<FeeConfigError> for AppError {
    fn from(err: FeeConfigError) -> Self {
        match err {
            FeeConfigError::DuplicateClassLevel(_) => Self::Conflict(err.to_string()),
            FeeConfigError::UnknownClassInRule(_) | FeeConfigError::NegativeAmount(_) => {
                Self::Validation(err.to_string())
            }
        }
    }
}

/// Validates a school's fee configuration.
///
/// Checks the invariants the resolver assumes: unique class names, rule bounds
/// that exist in the class sequence, and non-negative amounts throughout.
/// Returns the first violation found.
///
/// # Errors
///
/// Returns a [`FeeConfigError`] describing the first invariant violation.
pub fn validate_config(config: &SchoolFeeConfig) -> Result<(), FeeConfigError> {
    let mut seen = std::collections::HashSet::new();
    for class in &config.class_levels {
        if !seen.insert(class.name.as_str()) {
            return Err(FeeConfigError::DuplicateClassLevel(class.name.clone()));
        }
        for expectation in &class.fee_expectations {
            if expectation.amount < Decimal::ZERO {
                return Err(FeeConfigError::NegativeAmount(expectation.amount));
            }
        }
    }

    for rule in &config.fee_rules {
        for bound in [&rule.from_class, &rule.to_class] {
            if config.class_index(bound).is_none() {
                return Err(FeeConfigError::UnknownClassInRule(bound.clone()));
            }
        }
        if rule.amount < Decimal::ZERO {
            return Err(FeeConfigError::NegativeAmount(rule.amount));
        }
    }

    for expectation in &config.fee_expectations {
        if expectation.amount < Decimal::ZERO {
            return Err(FeeConfigError::NegativeAmount(expectation.amount));
        }
    }

    Ok(())
}
