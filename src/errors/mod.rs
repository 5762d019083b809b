//! Error types for the lexical analyzer.
//!
//! Scanning has exactly one failure, an unrecognised character, reported
//! with the line it sits on. Building a custom rule catalogue can also fail
//! when a pattern does not compile or the catalogue is malformed.

pub mod errors;
