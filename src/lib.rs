#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Arc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::tokens::{Token, TokenKind};

/// Character offset into a source plus the name of that source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position(pub u32, pub Arc<String>);

impl Position {
    pub fn null() -> Self {
        Position(0, Arc::new(String::from("<null>")))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.1, self.0)
    }
}

/// Returns the 1-based line number, the line text and the column of a character
/// offset, or `None` when the offset lies past the end of `source`.
pub fn get_line_at_position(source: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.chars().count();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    None
}


/// Renders an error as a caret diagnostic against the source it came from.
///
/// ```text
/// Error: UnrecognisedLexeme
/// -> programa.txt
///   |
/// 2 | mostrar a @ b
///   | ----------^
/// ```
pub fn format_error(error: &Error, source: &str) -> Option<String> {
    let position = error.get_position();
    let (line, line_text, line_pos) = get_line_at_position(source, position.0)?;

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position.1));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    out.push_str(&format!("{:>padding$} {:->arrows$}", "|", "^"));

    Some(out)
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string.chars().take_while(|c| *c == ' ').count();

    (string.chars().skip(start).collect(), start)
}
