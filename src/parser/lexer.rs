use std::str::Split;

use crate::parser::token::{SpannedToken, Token};

const NODE_END: &str = "===";
const BODY_SEPARATOR: &str = "---";

/// Splits a document into lines and picks out the `===` and `---` markers.
///
/// Accepts both `\n` and `\r\n` endings. Like splitting on a newline pattern,
/// a trailing newline yields one final empty line.
pub struct Lexer<'input> {
    lines: Split<'input, char>,
    line_number: usize,
}

impl<'input> Lexer<'input> {
    pub fn new(input: &'input str) -> Self {
        Self {
            lines: input.split('\n'),
            line_number: 0,
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = SpannedToken<'input>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.lines.next()?;
        let line = line.strip_suffix('\r').unwrap_or(line);
        let line_number = self.line_number;
        self.line_number += 1;

        let token = match line.trim() {
            NODE_END => Token::NodeEnd,
            BODY_SEPARATOR => Token::BodySeparator(line),
            _ => Token::Text(line),
        };
        Some((line_number, token))
    }
}
