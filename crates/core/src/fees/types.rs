//! Fee configuration data types.
//!
//! These are the typed records a school's fee settings are mapped into at the
//! data-access boundary. The resolver assumes well-shaped input and never
//! mutates any of it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::term::Term;

/// A class level in a school's class sequence.
///
/// The position of a class level within [`SchoolFeeConfig::class_levels`]
/// defines the school's class ordering, which is what range-based fee rules
/// are resolved against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassLevel {
    /// Class name (e.g., "Form 1"). Unique within a school.
    pub name: String,
    /// Per-class fee overrides. Missing data is an empty list, not an error.
    #[serde(default)]
    pub fee_expectations: Vec<ClassFeeExpectation>,
}

/// A fee rule covering a contiguous span of class levels.
///
/// The rule applies to every class whose position in the school's class
/// sequence lies between the positions of `from_class` and `to_class`,
/// inclusive, in either bound order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeRule {
    /// One bound of the class range, by class name.
    pub from_class: String,
    /// The other bound of the class range, by class name.
    pub to_class: String,
    /// Term the rule applies to.
    pub term: Term,
    /// Expected fee amount.
    pub amount: Decimal,
}

/// A fee expectation attached to a single class level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassFeeExpectation {
    /// Term the expectation applies to.
    pub term: Term,
    /// Expected fee amount.
    pub amount: Decimal,
}

/// A school-wide default fee expectation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolFeeExpectation {
    /// Term the expectation applies to.
    pub term: Term,
    /// Expected fee amount.
    pub amount: Decimal,
}

/// A school's complete fee configuration.
///
/// Owned by the school-settings aggregate; this crate only ever reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchoolFeeConfig {
    /// Ordered class sequence.
    #[serde(default)]
    pub class_levels: Vec<ClassLevel>,
    /// Class-range fee rules, in configuration order.
    #[serde(default)]
    pub fee_rules: Vec<FeeRule>,
    /// School-wide default expectations.
    #[serde(default)]
    pub fee_expectations: Vec<SchoolFeeExpectation>,
}

impl SchoolFeeConfig {
    /// Position of a class level in the school's class sequence.
    #[must_use]
    pub fn class_index(&self, name: &str) -> Option<usize> {
        self.class_levels.iter().position(|c| c.name == name)
    }

    /// Looks up a class level by name.
    #[must_use]
    pub fn class_level(&self, name: &str) -> Option<&ClassLevel> {
        self.class_levels.iter().find(|c| c.name == name)
    }
}

impl FeeRule {
    /// Returns true if this rule covers the class at `class_index` for `term`.
    ///
    /// A rule whose bounds do not both resolve to positions in the class
    /// sequence never matches; a stale class name in one row must not take
    /// down fee computation for the whole school.
    #[must_use]
    pub fn covers(&self, config: &SchoolFeeConfig, class_index: usize, term: Term) -> bool {
        if self.term != term {
            return false;
        }
        let (Some(from), Some(to)) = (
            config.class_index(&self.from_class),
            config.class_index(&self.to_class),
        ) else {
            return false;
        };
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        (lo..=hi).contains(&class_index)
    }
}
