//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a Rule for the built-in catalogue

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's matched text
/// * `$line` - The 1-based line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $line:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            line: $line,
        }
    };
}

/// Creates a Rule from a pattern literal that is known to compile.
///
/// Only meant for the built-in catalogue; caller-supplied patterns go
/// through `Rule::new` and get a proper error.
///
/// # Example
///
/// ```ignore
/// let rule = MK_RULE!(TokenKind::Plus, r"\+");
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($kind:expr, $pattern:literal) => {
        $crate::lexer::lexer::Rule::new($kind, $pattern)
            .expect(concat!("built-in pattern `", $pattern, "` must compile"))
    };
}
