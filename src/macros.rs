//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_EXACT_RECOGNIZER!` - Creates a recognizer for one fixed keyword or symbol
//!
//! These macros reduce boilerplate in the recognizer registry.

/// Creates a Token instance.
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string());
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
        }
    };
}

/// Creates a recognizer that accepts exactly one fixed literal.
///
/// Expands to a non-capturing closure, so it coerces to a plain `Recognizer`
/// function pointer.
///
/// # Example
///
/// ```ignore
/// RecognizerEntry {
///     kind: TokenKind::If,
///     recognize: MK_EXACT_RECOGNIZER!("si"),
/// }
/// ```
#[macro_export]
macro_rules! MK_EXACT_RECOGNIZER {
    ($expected:literal) => {
        |actual: &str| $crate::lexer::recognizers::exact(actual, $expected)
    };
}
