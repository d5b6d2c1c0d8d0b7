//! Fee configuration and expected-amount resolution.

pub mod resolver;
pub mod types;
pub mod validation;


pub use resolver::{ExpectationSource, FeeExpectationResolver, ResolvedExpectation};
pub use types::{
    ClassFeeExpectation, ClassLevel, FeeRule, SchoolFeeConfig, SchoolFeeExpectation,
};
pub use validation::{validate_config, FeeConfigError};
