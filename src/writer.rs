use std::fmt::{self, Write};

use crate::node::YarnNode;

/// Writes a node back out in the same shape the parser reads.
pub fn write_node(node: &YarnNode) -> String {
    let mut out = String::with_capacity(node.body.len() + node.title.len() + 32);
    write_node_to(&mut out, node).expect("writing to a String can't fail");
    out
}

pub fn write_document(nodes: &[YarnNode]) -> String {
    let mut out = String::new();
    write_document_to(&mut out, nodes).expect("writing to a String can't fail");
    out
}

pub fn write_document_to<W: Write>(out: &mut W, nodes: &[YarnNode]) -> fmt::Result {
    for node in nodes {
        write_node_to(out, node)?;
    }
    Ok(())
}

pub fn write_node_to<W: Write>(out: &mut W, node: &YarnNode) -> fmt::Result {
    writeln!(out, "title: {}", node.title)?;
    writeln!(out, "tags: {}", node.tags)?;
    if let Some(color_id) = &node.color_id {
        writeln!(out, "colorID: {}", color_id)?;
    }
    if let Some(position) = &node.position {
        writeln!(out, "position: {},{}", position.x, position.y)?;
    }
    out.write_str("---\n")?;
    out.write_str(&node.body)?;
    if !node.body.is_empty() && !node.body.ends_with('\n') {
        out.write_char('\n')?;
    }
    out.write_str("===\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::node::{ColorId, Position};
    use crate::parser::{parse, ParseOptions};

    #[test]
    fn test_write_node() {
        let mut node = YarnNode::new("Start")
            .with_tags("intro")
            .with_body("Hello. [[Next]]\n");
        node.color_id = Some(ColorId::Index(2));
        node.position = Some(Position::new(100.0, -20.5));

        assert_eq!(
            write_node(&node),
            "title: Start\ntags: intro\ncolorID: 2\nposition: 100,-20.5\n---\nHello. [[Next]]\n===\n",
        );
    }

    #[test]
    fn test_body_gets_final_newline() {
        let node = YarnNode::new("A").with_body("no newline");
        assert_eq!(write_node(&node), "title: A\ntags: \n---\nno newline\n===\n");

        let node = YarnNode::new("Empty");
        assert_eq!(write_node(&node), "title: Empty\ntags: \n---\n===\n");
    }

    #[test]
    fn test_round_trip() {
        let src =
r#"title: Start
position: 100, 200
colorID: 2
tags: intro  main
---
Hello. [[Next]]

  <<set $x to 1>>
===
title: Next
colorID: lilac
---
Bye. [[Go back|Start]]
===
title: Empty
===
"#;
        let nodes = parse(src, &ParseOptions::default());
        let reparsed = parse(&write_document(&nodes), &ParseOptions::default());
        assert_eq!(reparsed, nodes);
    }

    #[test]
    fn test_round_trip_nan_position() {
        let nodes = parse("title: A\nposition: x, y\n---\n===\n", &ParseOptions::default());
        let written = write_document(&nodes);
        assert!(written.contains("position: NaN,NaN\n"));

        let reparsed = parse(&written, &ParseOptions::default());
        let position = reparsed[0].position.unwrap();
        assert!(position.x.is_nan() && position.y.is_nan());
    }
}
