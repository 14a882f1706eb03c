use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// CSS colors the editor cycles through for a node's `colorID`.
pub const TITLE_COLORS: [&str; 9] = [
    "#EBEBEB",
    "#6EA5E0",
    "#9EDE74",
    "#FFE374",
    "#F7A666",
    "#C47862",
    "#97E1E9",
    "#576574",
    "#000000",
];

/// Where a node sits on the editor's graph canvas.
///
/// Coordinates that failed to parse are `f64::NAN`. JSON has no NaN, so they
/// are written as `null` and `null` reads back as NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(with = "nan_as_null")]
    pub x: f64,
    #[serde(with = "nan_as_null")]
    pub y: f64,
}

mod nan_as_null {
    use super::*;

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_nan() {
            serializer.serialize_none()
        } else {
            serializer.serialize_f64(*value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_valid(&self) -> bool {
        !self.x.is_nan() && !self.y.is_nan()
    }
}

/// Value of a `colorID:` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorId {
    Index(u32),
    /// The header was present but did not hold a non-negative integer. Keeps
    /// the raw text so the node can be written back unchanged.
    Invalid(String),
}

impl ColorId {
    pub fn index(&self) -> Option<u32> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Invalid(_) => None,
        }
    }

    /// Palette color for this id, falling back to the first color.
    pub fn color(&self) -> &'static str {
        self.index()
            .and_then(|index| TITLE_COLORS.get(index as usize))
            .copied()
            .unwrap_or(TITLE_COLORS[0])
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{}", index),
            Self::Invalid(raw) => f.write_str(raw),
        }
    }
}

/// One named dialogue unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YarnNode {
    pub title: String,
    pub tags: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(rename = "colorID", default, skip_serializing_if = "Option::is_none")]
    pub color_id: Option<ColorId>,
    /// Titles this node's body links to. `None` when the body has no links at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
}

impl YarnNode {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = tags.into();
        self
    }

    pub fn title_color(&self) -> &'static str {
        self.color_id
            .as_ref()
            .map_or(TITLE_COLORS[0], ColorId::color)
    }

    pub fn links_to(&self, title: &str) -> bool {
        self.links
            .as_ref()
            .map_or(false, |links| links.iter().any(|link| link == title))
    }
}
