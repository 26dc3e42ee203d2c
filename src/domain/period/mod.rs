//! Period Module - DHIS2-style period identifiers.
//!
//! A period is a string such as `202001`, `2020Q1`, `2020NovQ1` or `2020Nov`.
//! This module parses those strings into [`Period`] values and works with
//! them: detecting their kind, converting between granularities, listing the
//! months they cover, stepping forwards and backwards, and comparing them.
//!
//! # Components
//!
//! - `PeriodCodec` - Kind detection and parsing, optionally accepting ISO weeks
//! - `Period` - Parsed value with conversions, navigation and comparison
//! - `PeriodKind` - The closed set of supported period types
//!
//! All operations are pure and never mutate their inputs.

mod codec;
mod comparison;
mod display;
mod errors;
mod iso_week;
mod kind;
mod navigation;
mod value;

pub use codec::PeriodCodec;
pub use comparison::{is_after, is_after_or_equal, is_before, is_before_or_equal};
pub use errors::PeriodError;
pub use iso_week::{iso_week_date_range, iso_weeks_in_year};
pub use kind::PeriodKind;
pub use value::{DateRange, Period};
