use std::io;

use crate::errors::DocumentError;
use crate::links::LinkEdge;

/// Writes link edges as CSV with a `from,to,resolved` header.
pub fn write_links_csv<W: io::Write>(edges: &[LinkEdge], writer: W) -> Result<(), DocumentError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    csv_writer.write_record(&["from", "to", "resolved"])?;
    for edge in edges {
        csv_writer.serialize(edge)?;
    }
    csv_writer.flush()?;
    Ok(())
}
