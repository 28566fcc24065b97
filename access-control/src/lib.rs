#![no_std]

pub mod errors;
pub mod guards;

/// Percentages are whole numbers out of one hundred.
pub const PERCENT_DENOMINATOR: u64 = 100;
