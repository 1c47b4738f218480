//! Per-kind recognizers.
//!
//! Every recognizer is a pure function from a candidate lexeme to an
//! [`AcceptState`]. None of them keep state between calls, so the driver is
//! free to re-run all of them on every longer candidate.

use super::state::AcceptState;

pub type Recognizer = fn(&str) -> AcceptState;

pub const ADDITIVE_OPERATORS: [&str; 3] = ["+", "-", "or"];
pub const RELATIONAL_OPERATORS: [&str; 6] = ["==", ">=", "<=", "!=", ">", "<"];
pub const MULTIPLICATIVE_OPERATORS: [&str; 4] = ["*", "/", "mod", "and"];

const QUOTE: char = '\'';
const DECIMAL_POINT: char = '.';

/// Matches `actual` against a single fixed literal such as a keyword or symbol.
pub fn exact(actual: &str, expected: &str) -> AcceptState {
    if actual == expected {
        AcceptState::Accept
    } else if actual.chars().count() > expected.chars().count() {
        AcceptState::Trap
    } else if expected.starts_with(actual) {
        AcceptState::Maybe
    } else {
        AcceptState::Trap
    }
}

/// Best verdict of `actual` against a group of literals, stopping at the first accept.
fn one_of(actual: &str, group: &[&str]) -> AcceptState {
    let mut best = AcceptState::Trap;

    for expected in group {
        let state = exact(actual, expected);
        if state.is_accept() {
            return state;
        }

        best = best.max(state);
    }

    best
}

pub fn operator(actual: &str) -> AcceptState {
    one_of(actual, &ADDITIVE_OPERATORS)
        .max(one_of(actual, &RELATIONAL_OPERATORS))
        .max(one_of(actual, &MULTIPLICATIVE_OPERATORS))
}

/// Digits with at most one decimal point, which may be neither first nor last.
pub fn number(actual: &str) -> AcceptState {
    if actual.starts_with(DECIMAL_POINT) {
        return AcceptState::Trap;
    }

    let mut seen_point = false;

    for c in actual.chars() {
        match c {
            '0'..='9' => {}
            DECIMAL_POINT if !seen_point => seen_point = true,
            _ => return AcceptState::Trap,
        }
    }

    if actual.is_empty() || actual.ends_with(DECIMAL_POINT) {
        AcceptState::Maybe
    } else {
        AcceptState::Accept
    }
}

fn is_alphanumeric(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit()
}

/// A letter followed by letters and digits. Every valid prefix is already an identifier.
pub fn identifier(actual: &str) -> AcceptState {
    let mut chars = actual.chars();

    match chars.next() {
        None => return AcceptState::Maybe,
        Some(c) if !c.is_alphabetic() => return AcceptState::Trap,
        Some(_) => {}
    }

    if chars.all(is_alphanumeric) {
        AcceptState::Accept
    } else {
        AcceptState::Trap
    }
}

/// Single-quoted run of letters and digits, e.g. `'hola'` or `''`.
pub fn literal(actual: &str) -> AcceptState {
    if actual.is_empty() {
        return AcceptState::Maybe;
    }

    let leading = actual.starts_with(QUOTE);
    let trailing = actual.chars().count() >= 2 && actual.ends_with(QUOTE);

    let mut interior = actual;
    if leading {
        interior = &interior[QUOTE.len_utf8()..];
    }
    if trailing {
        interior = &interior[..interior.len() - QUOTE.len_utf8()];
    }

    if !interior.chars().all(is_alphanumeric) {
        return AcceptState::Trap;
    }

    match (leading, trailing) {
        (true, true) => AcceptState::Accept,
        (true, false) => AcceptState::Maybe,
        _ => AcceptState::Trap,
    }
}
