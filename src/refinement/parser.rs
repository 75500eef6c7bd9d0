// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Parser for the model's two-line labeled reply
//!
//! The refinement instruction asks the model to answer with exactly two
//! labeled lines (refined prompt, then color suggestion). Model output is not
//! contractually guaranteed to match that shape, so the parser fails closed:
//! anything that does not fit the grammar is a typed error, never a guess.

use thiserror::Error;

/// Separator between a line's label and its value
const LABEL_SEPARATOR: &str = ": ";

/// The two values extracted from a well-formed reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    pub refined_prompt: String,
    pub suggested_color: String,
}

/// Reply-grammar violations
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// Fewer non-empty lines than the grammar requires
    #[error("expected {expected} labeled lines, found {found}")]
    MissingLine { expected: usize, found: usize },

    /// A line has no label separator
    #[error("line {line} has no ': ' separator")]
    MissingSeparator { line: usize },

    /// A required value is empty
    #[error("line {line} has an empty value")]
    EmptyValue { line: usize },
}

/// Parse a model reply.
///
/// Grammar: the first two non-empty lines, each of the form `label: value`.
/// The value is everything after the first `": "`, trimmed. The refined
/// prompt must be non-empty; an empty color value is allowed (the caller
/// treats it as no suggestion).
pub fn parse_reply(output: &str) -> Result<ParsedReply, ParseError> {
    // Trim only the start: a trailing "label: " with an empty value must keep
    // its separator intact.
    let lines: Vec<&str> = output
        .lines()
        .map(str::trim_start)
        .filter(|line| !line.trim().is_empty())
        .take(2)
        .collect();

    if lines.len() < 2 {
        return Err(ParseError::MissingLine {
            expected: 2,
            found: lines.len(),
        });
    }

    let refined_prompt = labeled_value(lines[0], 1)?;
    if refined_prompt.is_empty() {
        return Err(ParseError::EmptyValue { line: 1 });
    }
    let suggested_color = labeled_value(lines[1], 2)?;

    Ok(ParsedReply {
        refined_prompt,
        suggested_color,
    })
}

fn labeled_value(line: &str, line_no: usize) -> Result<String, ParseError> {
    let idx = line
        .find(LABEL_SEPARATOR)
        .ok_or(ParseError::MissingSeparator { line: line_no })?;
    Ok(line[idx + LABEL_SEPARATOR.len()..].trim().to_string())
}
