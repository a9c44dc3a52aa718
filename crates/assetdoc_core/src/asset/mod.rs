mod bytes;
mod class_id;
mod deps;
mod error;
mod file;
mod hierarchy;
mod manifest;
mod object;
mod pptr;
mod schema;
mod version;
mod writer;

#[cfg(test)]
mod test_support;

/// Concrete object schemas.
pub mod classes;
/// Ordered export tree, YAML rendering, and block-text helpers.
pub mod export;

/// Versioned record reader and decode limits.
pub use bytes::{AssetReader, Endianness, ReadOptions};
/// Serialized type tags.
pub use class_id::ClassId;
/// Frequently used schemas.
pub use classes::{Component, ComponentPair, GameObject, Quaternionf, SerializedShaderState, Transform, Vector3f};
/// Dependency enumeration and reachability.
pub use deps::{DependencyOptions, MissingMode, collect_reachable, fetch_dependencies};
/// Error and result types.
pub use error::{AssetError, Result};
/// Export context and ordered tree types.
pub use export::{BlockWriter, ExportContext, ExportOptions, Mapping, Node, SchemaVersion, format_float};
/// Serialized files and the collection registry.
pub use file::{AssetCollection, FileHeader, LoadOptions, ObjectRecord, SerializedFile, SkippedObject};
/// Scene hierarchy traversal.
pub use hierarchy::{as_game_object, collect_hierarchy, get_root, get_root_depth, transform_of};
/// Object-table dump input.
pub use manifest::{AssetManifest, Compression, ManifestObject, ZSTD_MAGIC, decode_bytes, decode_hex};
/// Decoded objects and typed downcasting.
pub use object::{Object, ObjectInfo, Resolvable};
/// Cross-object references and the lookup seam.
pub use pptr::{FileId, ObjectLookup, PPtr};
/// Decode/encode contract and the schema registry.
pub use schema::{AssetObject, Decode, Encode, SchemaRegistry};
/// Format versions.
pub use version::{ReleaseType, Version};
/// Versioned record writer.
pub use writer::AssetWriter;
