//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source text into
//! a sequence of tokens. It is split into:
//!
//! - `state` - the three-valued verdict every recognizer returns
//! - `recognizers` - one pure recognizer per token kind
//! - `tokens` - token kinds, tokens and the prioritised recognizer registry
//! - `lexer` - the maximal-munch driver

pub mod lexer;
pub mod recognizers;
pub mod state;
pub mod tokens;
