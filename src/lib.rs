//! Reading, editing and writing [Yarn](https://yarnspinner.dev) dialogue
//! documents.
//!
//! A document is parsed into [`YarnNode`]s, each carrying the titles of the
//! nodes its body links to. [`YarnDocument`] holds those nodes for an editor
//! and writes them back out in the same format.
//!
//! ```
//! let doc = yarn_loom::YarnDocument::parse("title: Start\n---\nHi! [[End]]\n===\n");
//! assert_eq!(doc.nodes()[0].links, Some(vec!["End".to_string()]));
//! ```

pub use crate::{
    document::YarnDocument,
    errors::DocumentError,
    links::{build_links, extract_links, LinkEdge},
    node::{ColorId, Position, YarnNode, TITLE_COLORS},
    parser::{parse, ParseOptions},
    search::NodeSearch,
    writer::{write_document, write_node},
};

pub mod document;
pub mod errors;
pub mod export;
pub mod links;
pub mod node;
pub mod parser;
pub mod search;
pub mod writer;

/// Parses a document with the default [`ParseOptions`].
pub fn parse_yarn_file(text: &str) -> Vec<YarnNode> {
    parse(text, &ParseOptions::default())
}
