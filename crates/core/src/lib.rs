//! Core business logic for Shule.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `term` - Academic term model
//! - `fees` - Fee configuration and expected-amount resolution
//! - `billing` - Fee transactions and balance calculation

pub mod billing;
pub mod fees;
pub mod term;
