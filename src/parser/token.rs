use crate::node::{ColorId, Position};

/// A recognized header line and its parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum Header {
    Title(String),
    Position(Position),
    ColorId(ColorId),
    Tags(String),
}

/// One line of a Yarn document, classified without any context.
///
/// Whether a line is a header or body text depends on where the parser is,
/// so that decision is left to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'input> {
    /// `===`: the current node is finished.
    NodeEnd,
    /// `---`: ends the headers, unless already inside a body. Carries the raw
    /// line for that case.
    BodySeparator(&'input str),
    /// Any other line, without its line terminator.
    Text(&'input str),
}

/// A token with the zero-based line it came from.
pub type SpannedToken<'input> = (usize, Token<'input>);
