//! Temperature conversion module.
//!
//! This module handles:
//! - Temperature scale types
//! - Closed-form conversion arithmetic between scales

pub mod calculator;
pub mod scale;

pub use calculator::{convert, convert_temperature};
pub use scale::Scale;
