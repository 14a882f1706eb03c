use serde::{Deserialize, Serialize};

use crate::node::YarnNode;

/// Text search over a node's title, body and tags.
///
/// With no field selected there is no active search and every node matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeSearch {
    pub text: String,
    pub title: bool,
    pub body: bool,
    pub tags: bool,
}

impl NodeSearch {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn in_title(mut self) -> Self {
        self.title = true;
        self
    }

    pub fn in_body(mut self) -> Self {
        self.body = true;
        self
    }

    pub fn in_tags(mut self) -> Self {
        self.tags = true;
        self
    }

    pub fn is_active(&self) -> bool {
        self.title || self.body || self.tags
    }

    pub fn matches(&self, node: &YarnNode) -> bool {
        !self.is_active()
            || (self.title && node.title.contains(&self.text))
            || (self.body && node.body.contains(&self.text))
            || (self.tags && node.tags.contains(&self.text))
    }
}
