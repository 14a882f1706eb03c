use crate::node::{ColorId, Position};
use crate::parser::token::Header;

const TITLE_KEY: &str = "title:";
const POSITION_KEY: &str = "position:";
const COLOR_ID_KEY: &str = "colorID:";
const TAGS_KEY: &str = "tags:";

/// Tries each known header key against a line, in priority order.
///
/// A key is recognized anywhere in the line; the value is whatever follows
/// its first occurrence, trimmed.
pub fn parse_header(line: &str) -> Option<Header> {
    if let Some(value) = value_after(line, TITLE_KEY) {
        Some(Header::Title(value.to_owned()))
    } else if let Some(value) = value_after(line, POSITION_KEY) {
        Some(Header::Position(parse_position(value)))
    } else if let Some(value) = value_after(line, COLOR_ID_KEY) {
        Some(Header::ColorId(parse_color_id(value)))
    } else {
        value_after(line, TAGS_KEY).map(|value| Header::Tags(value.to_owned()))
    }
}

fn value_after<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.find(key)
        .map(|start| line[start + key.len()..].trim())
}

/// Parses `x, y`. Anything that isn't a number, including a missing `y`,
/// becomes `NaN`.
pub fn parse_position(value: &str) -> Position {
    let mut coords = value.split(',');
    let x = parse_coordinate(coords.next());
    let y = parse_coordinate(coords.next());
    Position::new(x, y)
}

fn parse_coordinate(coord: Option<&str>) -> f64 {
    coord
        .and_then(|c| c.trim().parse().ok())
        .unwrap_or(f64::NAN)
}

pub fn parse_color_id(value: &str) -> ColorId {
    let value = value.trim();
    value.parse()
        .map(ColorId::Index)
        .unwrap_or_else(|_| ColorId::Invalid(value.to_owned()))
}
