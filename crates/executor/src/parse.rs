//! Input-line parsing: tokenization, keyword-marker extraction, coercion.
//!
//! A line is split on whitespace. A token of the form underscore plus
//! exactly one character (`_t`) is a keyword marker: it binds the token
//! immediately preceding it, coerced, to the keyword named by the
//! character. The first token left standing is the command name
//! (case-folded); the rest are positional arguments, each coerced
//! independently.
//!
//! Extraction runs in two passes so every token is visited exactly once:
//! the first pass walks marker positions right to left and records which
//! indices the markers and their values occupy, the second pass rebuilds
//! the positional sequence from the unclaimed indices. Nothing is removed
//! from a sequence while it is being scanned.

use std::collections::BTreeMap;

use switchboard_core::{coerce, Value};

/// A command invocation decoded from one input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// Case-folded command name.
    pub command: String,
    /// Coerced positional arguments, in input order.
    pub positionals: Vec<Value>,
    /// Coerced keyword arguments bound by markers.
    pub keywords: BTreeMap<String, Value>,
}

/// Outcome of parsing one line: possibly an invocation, plus diagnostics
/// for markers that could not bind a value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParsedLine {
    /// The invocation, when any token remained to name a command.
    pub invocation: Option<Invocation>,
    /// Messages to print as-is, e.g. `_t value not found.`
    pub diagnostics: Vec<String>,
}

/// Parse one line of input.
///
/// An empty or whitespace-only line parses to no invocation and no
/// diagnostics. A marker with no preceding token produces a diagnostic and
/// binds nothing. When markers name the same keyword twice, the leftmost
/// binding wins.
pub fn parse_line(line: &str) -> ParsedLine {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return ParsedLine::default();
    }

    let mut diagnostics = Vec::new();
    let mut keywords = BTreeMap::new();
    let mut claimed = vec![false; tokens.len()];

    // Pass 1: record marker indices and their value indices, right to left.
    for i in (0..tokens.len()).rev() {
        if claimed[i] || !is_marker(tokens[i]) {
            continue;
        }
        claimed[i] = true;
        if i == 0 {
            diagnostics.push(format!("{} value not found.", tokens[i]));
            continue;
        }
        let name = keyword_name(tokens[i]);
        keywords.insert(name, coerce(tokens[i - 1]));
        claimed[i - 1] = true;
    }

    // Pass 2: rebuild the positional sequence from unclaimed indices.
    let rest: Vec<&str> = tokens
        .iter()
        .enumerate()
        .filter(|&(i, _)| !claimed[i])
        .map(|(_, &t)| t)
        .collect();

    let invocation = rest.split_first().map(|(&command, args)| Invocation {
        command: command.to_lowercase(),
        positionals: args.iter().map(|&t| coerce(t)).collect(),
        keywords,
    });

    ParsedLine {
        invocation,
        diagnostics,
    }
}

/// Underscore plus exactly one character.
fn is_marker(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('_') && chars.next().is_some() && chars.next().is_none()
}

fn keyword_name(marker: &str) -> String {
    marker.chars().skip(1).collect()
}
