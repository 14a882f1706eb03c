//! Turns the text of a Yarn document into [`YarnNode`]s.
//!
//! A document is a run of nodes, each made of `key: value` header lines, a
//! `---` separator, body lines, and a closing `===`:
//!
//! ```text
//! title: Start
//! tags: intro
//! ---
//! Hello. [[Next]]
//! ===
//! ```
//!
//! Parsing never fails. Unknown header lines are skipped and malformed numbers
//! become sentinel values (see [`Position`](crate::Position) and
//! [`ColorId`](crate::ColorId)).

use log::*;
use serde::{Deserialize, Serialize};

use crate::links;
use crate::node::YarnNode;

mod header;
mod lexer;
mod token;

pub use header::{parse_color_id, parse_header, parse_position};
pub use lexer::Lexer;
pub use token::{Header, SpannedToken, Token};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Emit a node that is still open when the input ends. When `false`, such
    /// a node is dropped with a warning, which is how the editor has always
    /// treated a missing final `===`.
    pub flush_trailing_node: bool,
}

impl ParseOptions {
    pub fn flushing() -> Self {
        Self {
            flush_trailing_node: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// Between nodes.
    Idle,
    InHeader,
    InBody,
}

struct Parser {
    state: ParserState,
    current: Option<YarnNode>,
    nodes: Vec<YarnNode>,
}

impl Parser {
    fn new() -> Self {
        Self {
            state: ParserState::Idle,
            current: None,
            nodes: Vec::new(),
        }
    }

    fn current_node(&mut self) -> &mut YarnNode {
        self.current.get_or_insert_with(YarnNode::default)
    }

    fn accept(&mut self, line_number: usize, token: Token<'_>) {
        match (self.state, token) {
            (_, Token::NodeEnd) => {
                self.finalize();
                self.state = ParserState::Idle;
            }
            (ParserState::InBody, Token::BodySeparator(line))
            | (ParserState::InBody, Token::Text(line)) => {
                let body = &mut self.current_node().body;
                body.push_str(line);
                body.push('\n');
            }
            (_, Token::BodySeparator(_)) => {
                self.state = ParserState::InBody;
            }
            (_, Token::Text(line)) => match parse_header(line) {
                Some(header) => {
                    trace!("Line {}: {:?}", line_number + 1, header);
                    self.apply_header(header);
                    self.state = ParserState::InHeader;
                }
                None => {
                    if !line.trim().is_empty() {
                        trace!("Ignoring unrecognized header line {}: {:?}", line_number + 1, line);
                    }
                }
            },
        }
    }

    fn apply_header(&mut self, header: Header) {
        let node = self.current_node();
        match header {
            Header::Title(title) => node.title = title,
            Header::Position(position) => node.position = Some(position),
            Header::ColorId(color_id) => node.color_id = Some(color_id),
            Header::Tags(tags) => node.tags = tags,
        }
    }

    fn finalize(&mut self) {
        if let Some(node) = self.current.take() {
            debug!("Parsed node {:?}", node.title);
            self.nodes.push(node);
        }
    }

    fn finish(mut self, options: &ParseOptions) -> Vec<YarnNode> {
        if let Some(node) = &self.current {
            if options.flush_trailing_node {
                debug!("Flushing unterminated node {:?} in state {:?}", node.title, self.state);
                self.finalize();
            } else {
                warn!("Dropping node {:?}: missing closing '===' at end of input", node.title);
            }
        }
        self.nodes
    }
}

/// Parses a document and fills in each node's links.
pub fn parse(input: &str, options: &ParseOptions) -> Vec<YarnNode> {
    let mut parser = Parser::new();
    for (line_number, token) in Lexer::new(input) {
        parser.accept(line_number, token);
    }

    let mut nodes = parser.finish(options);
    links::build_links(&mut nodes);
    nodes
}
