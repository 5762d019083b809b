#![allow(clippy::module_inception)]

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// Byte offset into the source.
    pub offset: usize,
}

impl Position {
    pub fn null() -> Self {
        Position { line: 0, offset: 0 }
    }
}

/// Line number, line text (without its terminator) and byte column of
/// `position` in `source`.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let text = line.strip_suffix('\n').unwrap_or(line);
            return Some((index + 1, text.to_string(), position - start));
        }

        start = end;
    }

    None
}

/// Formats `error` against the source it was raised on:
///
/// ```text
/// Error: UnrecognisedCharacter
/// -> sample.pluto
///   |
/// 2 | Num y = #;
///   | --------^
/// ```
pub fn render_error(error: &Error, source: &str, file: &str) -> String {
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
    out.push_str(&format!("-> {}\n", file));

    let Some((line, line_text, line_pos)) =
        get_line_at_position(source, error.get_position().offset)
    else {
        out.push_str(&format!("{}\n", error));
        return out;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = line_text[..line_pos]
        .chars()
        .count()
        .saturating_sub(removed_whitespace)
        + 1;
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

pub fn display_error(error: &Error, source: &str, file: &str) {
    eprint!("{}", render_error(error, source, file));
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start = string
        .chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .count();

    (String::from(&string[start..]), start)
}
