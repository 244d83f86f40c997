//! Cross-cutting error types for Jafr.
//!
//! The numerology engine itself never fails. These errors cover request
//! validation, which every surface (HTTP, CLI) shares. Oracle and config
//! errors live in their own crates and converge in `jafr-server`.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Required text fields were empty or absent. Holds their Arabic labels.
    #[error("الحقول التالية مطلوبة: {}", .0.join("، "))]
    MissingFields(Vec<&'static str>),
}
