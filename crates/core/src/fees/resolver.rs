//! Expected-fee resolution.
//!
//! Resolves the single expected amount for a `(class level, term)` pair from a
//! school's fee configuration, applying a strict precedence order:
//!
//! 1. Class-range rules (`SchoolFeeConfig::fee_rules`)
//! 2. Per-class expectations (`ClassLevel::fee_expectations`)
//! 3. School-wide defaults (`SchoolFeeConfig::fee_expectations`)
//! 4. Zero

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::SchoolFeeConfig;
use crate::term::Term;

/// Which configuration tier produced a resolved amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpectationSource {
    /// A class-range fee rule matched.
    RangeRule,
    /// A per-class expectation matched.
    ClassOverride,
    /// The school-wide default matched.
    SchoolDefault,
    /// No tier matched; the amount is zero.
    Unset,
}

/// A resolved expected-fee amount, with its provenance.
///
/// Dashboards and audit views show where a figure came from, so the resolver
/// reports the tier alongside the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedExpectation {
    /// Expected fee amount.
    pub amount: Decimal,
    /// Tier that produced the amount.
    pub source: ExpectationSource,
}

/// Fee expectation resolver.
///
/// Stateless; both functions are pure and deterministic, so callers may invoke
/// them concurrently and recompute on every render.
pub struct FeeExpectationResolver;

impl FeeExpectationResolver {
    /// Resolves the expected fee for `class_level` in `term`.
    ///
    /// The first tier that yields a match wins; later tiers are not consulted.
    /// Within the rule tier, the first matching rule in configuration order
    /// wins. Rules referencing class names absent from the class sequence
    /// never match, and an unknown `class_level` skips the rule and override
    /// tiers but still falls through to the school default.
    ///
    /// Negative configured amounts pass through untouched; rejecting them is
    /// the write path's job (see [`super::validation`]).
    #[must_use]
    pub fn resolve(
        config: &SchoolFeeConfig,
        class_level: &str,
        term: Term,
    ) -> ResolvedExpectation {
        if let Some(class_index) = config.class_index(class_level) {
            if let Some(rule) = config
                .fee_rules
                .iter()
                .find(|rule| rule.covers(config, class_index, term))
            {
                tracing::debug!(%term, class_level, amount = %rule.amount, "fee resolved from range rule");
                return ResolvedExpectation {
                    amount: rule.amount,
                    source: ExpectationSource::RangeRule,
                };
            }
        }

        if let Some(expectation) = config
            .class_level(class_level)
            .and_then(|class| class.fee_expectations.iter().find(|e| e.term == term))
        {
            tracing::debug!(%term, class_level, amount = %expectation.amount, "fee resolved from class override");
            return ResolvedExpectation {
                amount: expectation.amount,
                source: ExpectationSource::ClassOverride,
            };
        }

        if let Some(expectation) = config.fee_expectations.iter().find(|e| e.term == term) {
            tracing::debug!(%term, class_level, amount = %expectation.amount, "fee resolved from school default");
            return ResolvedExpectation {
                amount: expectation.amount,
                source: ExpectationSource::SchoolDefault,
            };
        }

        tracing::debug!(%term, class_level, "no fee expectation configured");
        ResolvedExpectation {
            amount: Decimal::ZERO,
            source: ExpectationSource::Unset,
        }
    }

    /// Resolves the expected fee amount only.
    ///
    /// Convenience for callers that do not care about provenance.
    #[must_use]
    pub fn resolve_expected_amount(
        config: &SchoolFeeConfig,
        class_level: &str,
        term: Term,
    ) -> Decimal {
        Self::resolve(config, class_level, term).amount
    }
}
