//! Finds the `[[Target]]` and `[[Display text|Target]]` references in node
//! bodies.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::node::YarnNode;

static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[(.*?)\]\]").unwrap()
});

/// A directed reference from one node to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkEdge {
    pub from: String,
    pub to: String,
    /// Whether some node in the document has the target title.
    pub resolved: bool,
}

fn link_target(inner: &str) -> &str {
    let inner = inner.trim();
    match inner.split('|').nth(1) {
        Some(target) => target.trim(),
        None => inner,
    }
}

/// Returns the titles a body links to, or `None` if it has no links.
///
/// When a title is linked more than once only its last occurrence counts, and
/// the result is ordered by where those surviving occurrences appear.
///
/// In `[[Display text|Target]]` the target is the text between the first and
/// second pipe, trimmed like node titles are, so `[[Go | Shop]]` links to
/// `Shop` rather than ` Shop`.
pub fn extract_links(body: &str) -> Option<Vec<String>> {
    let targets: Vec<&str> = LINK_PATTERN
        .captures_iter(body)
        .filter_map(|caps| caps.get(1))
        .map(|inner| link_target(inner.as_str()))
        .collect();

    if targets.is_empty() {
        return None;
    }

    let last_seen: HashMap<&str, usize> = targets
        .iter()
        .enumerate()
        .map(|(i, target)| (*target, i))
        .collect();

    let links = targets
        .iter()
        .enumerate()
        .filter(|(i, target)| last_seen[*target] == *i)
        .map(|(_, target)| (*target).to_owned())
        .collect();

    Some(links)
}

/// Re-extracts the links of every node from its current body.
pub fn build_links(nodes: &mut [YarnNode]) {
    for node in nodes {
        node.links = extract_links(&node.body);
    }
}
