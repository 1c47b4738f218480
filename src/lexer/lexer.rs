use std::sync::Arc;

use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{candidates, Candidates, Token};

/// Maximal-munch scanner over a whole source string.
///
/// Each token attempt grows a candidate one character at a time, re-running
/// every recognizer on it, until all of them trap. The token is then the
/// candidate one character shorter, classified by the highest priority kind
/// that accepted it.
#[derive(Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: Vec<char>,
    start: usize,
    cursor: usize,
    file: Arc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Lexer {
            tokens: vec![],
            source: source.chars().collect(),
            start: 0,
            cursor: 0,
            file: file_name,
        }
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.source.get(self.cursor).copied()
    }

    pub fn at_eof(&self) -> bool {
        self.cursor >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while self.at().is_some_and(char::is_whitespace) {
            self.cursor += 1;
        }
        self.start = self.cursor;
    }

    /// `source[start..=cursor]`; the end of input acts as a whitespace
    /// sentinel, so a candidate running past it yields `None`.
    fn candidate(&self) -> Option<String> {
        if self.at_eof() {
            return None;
        }

        Some(self.source[self.start..=self.cursor].iter().collect())
    }

    fn position(&self) -> Position {
        Position(self.start as u32, Arc::clone(&self.file))
    }

    /// Scans the next token, or returns `None` once only whitespace is left.
    pub fn next_token(&mut self) -> Option<Result<Token, Error>> {
        self.skip_whitespace();

        if self.at_eof() {
            return None;
        }

        let mut last_viable = Candidates::default();

        loop {
            // Past the end of input every recognizer traps on the sentinel.
            let Some(lexeme) = self.candidate() else {
                break;
            };

            let next = candidates(&lexeme);
            trace!(candidate = %lexeme, accepted = ?next.accepted, "grew candidate");

            if next.all_trapped {
                break;
            }

            // An empty accept set still overwrites the previous one: a kind
            // accepted at length L is forgotten if L+1 is merely viable and
            // L+2 traps everywhere.
            last_viable = next;
            self.cursor += 1;
        }

        let Some(kind) = last_viable.winner() else {
            // The character that trapped everything is reported unless it is
            // whitespace or the end-of-input sentinel.
            let end = match self.at() {
                Some(c) if !c.is_whitespace() => self.cursor + 1,
                _ => self.cursor,
            };
            let lexeme: String = self.source[self.start..end].iter().collect();
            debug!(lexeme = %lexeme, offset = self.start, "unrecognised lexeme");

            return Some(Err(Error::new(
                ErrorImpl::UnrecognisedLexeme { lexeme },
                self.position(),
            )));
        };

        let lexeme: String = self.source[self.start..self.cursor].iter().collect();
        debug!(kind = %kind, lexeme = %lexeme, offset = self.start, "token");

        self.start = self.cursor;

        Some(Ok(MK_TOKEN!(kind, lexeme)))
    }
}

/// Converts `source` into its tokens, failing on the first unrecognised lexeme.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while let Some(token) = lex.next_token() {
        lex.push(token?);
    }

    Ok(lex.tokens)
}
