//! Error types and error handling for the lexer.
//!
//! This module defines the error raised when tokenization fails. It includes:
//!
//! - An error structure carrying source position information
//! - The unrecognised-lexeme error variant
//! - Error naming and tip generation used by the diagnostic renderer

pub mod errors;
