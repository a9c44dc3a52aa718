mod block;
mod context;
mod node;
mod number;
mod yaml;

/// Tab-indented line sink for block-format text.
pub use block::BlockWriter;
/// Export context, switches, and schema-version selection.
pub use context::{ExportContext, ExportOptions, SchemaVersion};
/// Ordered export tree.
pub use node::{Mapping, Node};
/// Locale-independent float rendering.
pub use number::format_float;
/// YAML document rendering of mapping exports.
pub use yaml::{render_document, render_mapping, render_object};
