use std::collections::{HashMap, HashSet};
use std::fmt;

use log::*;

use crate::errors::DocumentError;
use crate::links::{self, LinkEdge};
use crate::node::YarnNode;
use crate::parser::{self, ParseOptions};
use crate::search::NodeSearch;
use crate::writer;

/// The nodes of one open Yarn file.
///
/// Owned by whoever is editing the file. Every mutation keeps each node's
/// `links` in step with its body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct YarnDocument {
    nodes: Vec<YarnNode>,
}

impl YarnDocument {
    pub fn parse(text: &str) -> Self {
        Self::parse_with(text, &ParseOptions::default())
    }

    pub fn parse_with(text: &str, options: &ParseOptions) -> Self {
        Self {
            nodes: parser::parse(text, options),
        }
    }

    pub fn from_nodes(mut nodes: Vec<YarnNode>) -> Self {
        links::build_links(&mut nodes);
        Self { nodes }
    }

    pub fn nodes(&self) -> &[YarnNode] {
        &self.nodes
    }

    pub fn into_nodes(self) -> Vec<YarnNode> {
        self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// First node with the given title.
    pub fn node(&self, title: &str) -> Option<&YarnNode> {
        self.nodes.iter().find(|node| node.title == title)
    }

    pub fn require_node(&self, title: &str) -> Result<&YarnNode, DocumentError> {
        self.node(title)
            .ok_or_else(|| DocumentError::NodeNotFound(title.to_owned()))
    }

    /// Replaces the first node with the same title, or appends the node if
    /// there is none.
    pub fn set_node(&mut self, mut node: YarnNode) {
        node.links = links::extract_links(&node.body);
        match self.nodes.iter_mut().find(|existing| existing.title == node.title) {
            Some(existing) => {
                debug!("Replacing node {:?}", node.title);
                *existing = node;
            }
            None => {
                debug!("Adding node {:?}", node.title);
                self.nodes.push(node);
            }
        }
    }

    pub fn set_nodes(&mut self, nodes: Vec<YarnNode>) {
        *self = Self::from_nodes(nodes);
    }

    /// Removes the first node with the given title and returns it.
    pub fn delete_node(&mut self, title: &str) -> Result<YarnNode, DocumentError> {
        let index = self.nodes.iter()
            .position(|node| node.title == title)
            .ok_or_else(|| DocumentError::NodeNotFound(title.to_owned()))?;
        debug!("Deleting node {:?}", title);
        Ok(self.nodes.remove(index))
    }

    pub fn rebuild_links(&mut self) {
        links::build_links(&mut self.nodes);
    }

    /// Every link in the document, in node order then link order.
    pub fn links(&self) -> Vec<LinkEdge> {
        self.links_from(&self.nodes)
    }

    /// Links going out of the given nodes, resolved against the whole
    /// document. Only the nodes passed in count as sources, even when another
    /// node shares their title.
    pub fn links_from<'a, I>(&self, nodes: I) -> Vec<LinkEdge>
    where
        I: IntoIterator<Item = &'a YarnNode>,
    {
        let titles: HashSet<&str> = self.nodes.iter()
            .map(|node| node.title.as_str())
            .collect();

        nodes.into_iter()
            .flat_map(|node| {
                node.links.iter().flatten().map(move |target| (node, target))
            })
            .map(|(node, target)| LinkEdge {
                from: node.title.clone(),
                to: target.clone(),
                resolved: titles.contains(target.as_str()),
            })
            .collect()
    }

    /// Links whose target doesn't name any node.
    pub fn unresolved_links(&self) -> Vec<LinkEdge> {
        self.links()
            .into_iter()
            .filter(|link| !link.resolved)
            .collect()
    }

    /// Titles used by more than one node, in order of first appearance.
    pub fn duplicate_titles(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for node in &self.nodes {
            *counts.entry(node.title.as_str()).or_insert(0) += 1;
        }

        let mut reported = HashSet::new();
        self.nodes.iter()
            .map(|node| node.title.as_str())
            .filter(|title| counts[title] > 1 && reported.insert(*title))
            .collect()
    }

    pub fn search(&self, search: &NodeSearch) -> Vec<&YarnNode> {
        self.nodes.iter()
            .filter(|node| search.matches(node))
            .collect()
    }
}

impl fmt::Display for YarnDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer::write_document_to(f, &self.nodes)
    }
}
