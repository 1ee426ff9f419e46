//! Rendering of annotation blocks.
//!
//! Everything here is pure text generation: the block layout is a fixed-width
//! table with the column name padded or truncated to 20 characters and the
//! type (including any length limit) to 13, followed by the attribute list.

use crate::schema::ColumnDescriptor;

/// Marker carried by the first line of every annotation block. Removal keys
/// off this exact text.
pub const PREFIX: &str = "Schema as of ";

/// Builds the header line content: the marker prefix, the timestamp, and the
/// schema version suffix when one is known.
pub fn render_header(timestamp: &str, schema_version: u64) -> String {
    let mut header = format!("{PREFIX}{timestamp}");
    if schema_version > 0 {
        header.push_str(&format!(" (schema version {schema_version})"));
    }
    header
}

/// Renders a complete annotation block: header line, separator, one row per
/// column, closing separator, trailing blank line.
pub fn render_block(columns: &[ColumnDescriptor], header: &str) -> String {
    let mut block = format!("# {header}\n#\n");
    for column in columns {
        let mut attrs = Vec::new();
        if let Some(default) = &column.default {
            attrs.push(format!("default({default})"));
        }
        if !column.nullable {
            attrs.push("not null".to_string());
        }
        block.push_str(&format!(
            "#  {:<20.20}:{:<13.13} {}\n",
            column.name,
            column.type_label(),
            attrs.join(", ")
        ));
    }
    block.push_str("#\n\n");
    block
}
