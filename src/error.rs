//! Error types for the teac crate.

/// Error type for date conversion.
///
/// Neither case is fatal or worth retrying: conversion is pure, so the caller
/// can simply try another date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Returned when the input does not start with a valid `YYYY-MM-DD` date.
    #[error("invalid date: {input:?}")]
    InvalidDate {
        /// The rejected input.
        input: String,
    },

    /// Returned when the Gregorian year lies outside the encoded tables.
    #[error("year {year} out of supported range 1583..=2100")]
    OutOfRange {
        /// The Gregorian year of the rejected date.
        year: i32,
    },
}
