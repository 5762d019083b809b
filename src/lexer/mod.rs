//! Lexical analysis for Pluto source.
//!
//! This module turns source text into a flat sequence of tokens. It handles:
//!
//! - An ordered rule catalogue where the first rule matching at the cursor wins
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line tracking for every emitted token
//! - Rejection of any character no rule accounts for

pub mod lexer;
pub mod tokens;
