//! Numeric string parsing module
//!
//! This module reads plain and thousands-separated decimal numerals with
//! winnow combinators. Two entry points are exposed: a lenient
//! leading-prefix parse used by the sentinel-style public API, and a strict
//! whole-string parse for callers that need a real error signal.

mod number;

pub use number::{ParseNumberError, decimal_literal, lenient_decimal, strict_decimal};
