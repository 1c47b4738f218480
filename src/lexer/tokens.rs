use lazy_static::lazy_static;
use std::{collections::HashSet, fmt::Display};

use crate::MK_EXACT_RECOGNIZER;

use super::{
    recognizers::{self, Recognizer},
    state::AcceptState,
};

/// Kinds are checked in this order; on a tie the earliest kind wins, so
/// keywords shadow identifiers and `or`/`and`/`mod` lex as operators.
pub const PRIORITY: [TokenKind; 17] = [
    TokenKind::If,
    TokenKind::Then,
    TokenKind::Else,
    TokenKind::While,
    TokenKind::Do,
    TokenKind::Print,
    TokenKind::Operator,
    TokenKind::Comma,
    TokenKind::Semicolon,
    TokenKind::Assignment,
    TokenKind::BracketOpen,
    TokenKind::BracketClose,
    TokenKind::ParenOpen,
    TokenKind::ParenClose,
    TokenKind::Number,
    TokenKind::Identifier,
    TokenKind::Literal,
];

lazy_static! {
    pub static ref RECOGNIZERS: Vec<RecognizerEntry> = {
        let entries: Vec<RecognizerEntry> = PRIORITY
            .iter()
            .map(|kind| RecognizerEntry {
                kind: *kind,
                recognize: kind.recognizer(),
            })
            .collect();

        let mut seen = HashSet::new();
        for entry in &entries {
            assert!(
                seen.insert(entry.kind),
                "token kind {} registered twice",
                entry.kind
            );
        }

        entries
    };
}

#[derive(Clone, Copy)]
pub struct RecognizerEntry {
    pub kind: TokenKind,
    pub recognize: Recognizer,
}

/// Result of running every registered recognizer on one candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    /// Kinds that accept the candidate exactly, in priority order.
    pub accepted: Vec<TokenKind>,
    pub all_trapped: bool,
}

impl Candidates {
    pub fn winner(&self) -> Option<TokenKind> {
        self.accepted.first().copied()
    }
}

pub fn candidates(lexeme: &str) -> Candidates {
    let mut accepted = vec![];
    let mut all_trapped = true;

    for entry in RECOGNIZERS.iter() {
        let state = (entry.recognize)(lexeme);

        if state == AcceptState::Accept {
            accepted.push(entry.kind);
        }

        all_trapped = all_trapped && state.is_trap();
    }

    Candidates {
        accepted,
        all_trapped,
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Operator, // == > < >= <= != * / mod and + - or
    Number,
    Identifier,
    Literal,

    // Reserved
    If,    // si
    Then,  // entonces
    Else,  // sino
    While, // mientras
    Do,    // hacer
    Print, // mostrar

    Comma,        // ,
    Semicolon,    // ;
    Assignment,   // :=
    BracketOpen,  // [
    BracketClose, // ]
    ParenOpen,    // (
    ParenClose,   // )
}

impl TokenKind {
    pub fn recognizer(self) -> Recognizer {
        match self {
            TokenKind::Operator => recognizers::operator,
            TokenKind::Number => recognizers::number,
            TokenKind::Identifier => recognizers::identifier,
            TokenKind::Literal => recognizers::literal,

            TokenKind::If => MK_EXACT_RECOGNIZER!("si"),
            TokenKind::Then => MK_EXACT_RECOGNIZER!("entonces"),
            TokenKind::Else => MK_EXACT_RECOGNIZER!("sino"),
            TokenKind::While => MK_EXACT_RECOGNIZER!("mientras"),
            TokenKind::Do => MK_EXACT_RECOGNIZER!("hacer"),
            TokenKind::Print => MK_EXACT_RECOGNIZER!("mostrar"),

            TokenKind::Comma => MK_EXACT_RECOGNIZER!(","),
            TokenKind::Semicolon => MK_EXACT_RECOGNIZER!(";"),
            TokenKind::Assignment => MK_EXACT_RECOGNIZER!(":="),
            TokenKind::BracketOpen => MK_EXACT_RECOGNIZER!("["),
            TokenKind::BracketClose => MK_EXACT_RECOGNIZER!("]"),
            TokenKind::ParenOpen => MK_EXACT_RECOGNIZER!("("),
            TokenKind::ParenClose => MK_EXACT_RECOGNIZER!(")"),
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::If
                | TokenKind::Then
                | TokenKind::Else
                | TokenKind::While
                | TokenKind::Do
                | TokenKind::Print
        )
    }

    pub fn is_symbol(self) -> bool {
        matches!(
            self,
            TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Assignment
                | TokenKind::BracketOpen
                | TokenKind::BracketClose
                | TokenKind::ParenOpen
                | TokenKind::ParenClose
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.lexeme)
    }
}
