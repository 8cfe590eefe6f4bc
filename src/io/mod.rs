//! IO module for format-specific reading and writing operations.
//!
//! Source tables and the combined output are both comma-delimited text, so
//! `csv` is the only format module.

pub(crate) mod csv;
