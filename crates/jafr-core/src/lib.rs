//! # jafr-core
//!
//! Abjad numerology engine and shared domain types for Jafr.
//!
//! This crate is pure and synchronous. It provides:
//! - The abjad kabir letter table and text summation ([`abjad`])
//! - The elemental nature of each letter ([`element`])
//! - Digit reduction, wafq sizing, and birth-date values ([`reduce`])
//! - Per-category meaning tables ([`meaning`])
//! - The analysis request shape and its structural validation ([`request`])
//! - Traditional results assembly ([`traditional`])
//! - JSON response types ([`responses`])
//! - Cross-cutting error types ([`errors`])
//!
//! Nothing in the engine fails. Unknown characters weigh zero, empty text
//! totals zero, and out-of-range digits fall back to documented defaults.

pub mod abjad;
pub mod element;
pub mod errors;
pub mod meaning;
pub mod reduce;
pub mod request;
pub mod responses;
pub mod traditional;

pub use abjad::{LetterValue, NumerologyResult, char_value, text_value};
pub use element::Element;
pub use errors::CoreError;
pub use meaning::Category;
pub use reduce::{birth_date_value, magic_square_size, reduce_to_single_digit};
pub use request::{AnalysisOptions, AnalysisRequest};
pub use traditional::compute_traditional;
