//! Conversion from Gregorian dates into the traditional East-Asian lunisolar
//! calendar (TEAC).
//!
//! The supported range is Gregorian 1583 through 2100. Instead of computing
//! new moons and solar terms, this crate ships a compact encoding of every
//! lunar month length, leap month and new year day in that range, decodes it
//! once, and resolves dates with plain table arithmetic.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use teac::Date;
//!
//! let date: Date = "2000-01-01".parse().unwrap();
//!
//! assert_eq!(1, date.ordinal());
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Lunisolar calendar:
//!
//! ```
//! use teac::lunisolar::{Calendar, Month::*};
//!
//! let calendar = Calendar::global();
//! let date = calendar.resolve("2023-03-22").unwrap();
//!
//! assert_eq!((40, Leap(2), 1), (date.cycle_year, date.month, date.day));
//! assert_eq!((40, 2, 1, true), date.num());
//! ```
//!
//! Text output:
//!
//! ```
//! use teac::lunisolar::fmt::{CycleNames, SinoOptions};
//!
//! let date = teac::convert("2024-02-10").unwrap();
//! let sino = date.sino(&SinoOptions::default());
//!
//! assert_eq!("甲辰年正月初一", format!("{}{}{}", sino.year, sino.month, sino.day));
//! assert_eq!("jia-chen", date.year_in(&CycleNames, "en").year);
//! ```
//!
//! Dates outside the encoded range are rejected rather than extrapolated; no
//! leap month placement is predicted past 2100.

pub mod date;
pub mod error;
pub mod lunisolar;

pub use date::{Date, YearType};
pub use error::Error;
pub use lunisolar::{Calendar, Month, TeacDate, convert};
