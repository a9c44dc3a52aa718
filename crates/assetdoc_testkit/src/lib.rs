//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Little-endian record builder for hand-assembled object payloads.
///
/// Alignment is measured from the start of the record, matching how decoders align.
#[derive(Debug, Default, Clone)]
pub struct RecordBuilder {
	bytes: Vec<u8>,
}

impl RecordBuilder {
	/// Create an empty record.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append one byte.
	pub fn u8(mut self, value: u8) -> Self {
		self.bytes.push(value);
		self
	}

	/// Append a one-byte boolean.
	pub fn bool(self, value: bool) -> Self {
		self.u8(u8::from(value))
	}

	/// Append a little-endian `u16`.
	pub fn u16(mut self, value: u16) -> Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a little-endian `i32`.
	pub fn i32(mut self, value: i32) -> Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a little-endian `i64`.
	pub fn i64(mut self, value: i64) -> Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Append a little-endian `f32`.
	pub fn f32(mut self, value: f32) -> Self {
		self.bytes.extend_from_slice(&value.to_le_bytes());
		self
	}

	/// Pad with zeros to the next 4-byte boundary.
	pub fn align4(mut self) -> Self {
		while self.bytes.len() % 4 != 0 {
			self.bytes.push(0);
		}
		self
	}

	/// Append an `i32` length, UTF-8 bytes, and alignment padding.
	pub fn string(self, value: &str) -> Self {
		let mut out = self.i32(value.len() as i32);
		out.bytes.extend_from_slice(value.as_bytes());
		out.align4()
	}

	/// Append a 64-bit-id reference (`i32` file index, `i64` path id).
	pub fn pptr(self, file_index: i32, path_id: i64) -> Self {
		self.i32(file_index).i64(path_id)
	}

	/// Append a 32-bit-id reference used before 5.0.
	pub fn pptr32(self, file_index: i32, path_id: i32) -> Self {
		self.i32(file_index).i32(path_id)
	}

	/// Append a float value record (value then aligned name).
	pub fn float_value(self, value: f32, name: &str) -> Self {
		self.f32(value).string(name)
	}

	/// Current record length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return whether no bytes were appended yet.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Finish and return the record bytes.
	pub fn build(self) -> Vec<u8> {
		self.bytes
	}
}

/// Class id of scene nodes.
pub const GAME_OBJECT: i32 = 1;
/// Class id of transforms.
pub const TRANSFORM: i32 = 4;
/// Class id of mesh renderers (decoded as generic components).
pub const MESH_RENDERER: i32 = 23;
/// Class id of mesh filters (decoded as generic components).
pub const MESH_FILTER: i32 = 33;

/// Scene node record for 5.5+ layouts (component references without class ids).
pub fn game_object_record(components: &[i64], layer: i32, name: &str, tag: u16, active: bool) -> Vec<u8> {
	let mut record = RecordBuilder::new().i32(components.len() as i32);
	for path_id in components {
		record = record.pptr(0, *path_id);
	}
	record.i32(layer).string(name).u16(tag).bool(active).align4().build()
}

/// Transform record for 5.0+ layouts with identity rotation and unit scale.
pub fn transform_record(game_object: i64, children: &[i64], father: i64) -> Vec<u8> {
	let mut record = RecordBuilder::new()
		.pptr(0, game_object)
		.f32(0.0)
		.f32(0.0)
		.f32(0.0)
		.f32(1.0)
		.f32(0.0)
		.f32(0.0)
		.f32(0.0)
		.f32(1.0)
		.f32(1.0)
		.f32(1.0)
		.i32(children.len() as i32);
	for path_id in children {
		record = record.pptr(0, *path_id);
	}
	record.pptr(0, father).build()
}

/// Generic component record (owning node reference only).
pub fn component_record(game_object: i64) -> Vec<u8> {
	RecordBuilder::new().pptr(0, game_object).build()
}

/// One framed record of the stock scene: `(path_id, class_id, bytes)`.
pub type SceneRecord = (i64, i32, Vec<u8>);

/// Stock three-level scene for 2017.3 layouts.
///
/// ```text
/// Root(1)  components [10 renderer, 11 transform, 12 filter]
/// ├── Mid(2)   components [21 transform]
/// │   └── Leaf(3)  components [31 transform]
/// └── Side(4)  components [41 transform]
/// ```
pub fn scene_records() -> Vec<SceneRecord> {
	vec![
		(1, GAME_OBJECT, game_object_record(&[10, 11, 12], 0, "Root", 0, true)),
		(10, MESH_RENDERER, component_record(1)),
		(11, TRANSFORM, transform_record(1, &[21, 41], 0)),
		(12, MESH_FILTER, component_record(1)),
		(2, GAME_OBJECT, game_object_record(&[21], 0, "Mid", 0, true)),
		(21, TRANSFORM, transform_record(2, &[31], 11)),
		(3, GAME_OBJECT, game_object_record(&[31], 5, "Leaf", 0, false)),
		(31, TRANSFORM, transform_record(3, &[], 21)),
		(4, GAME_OBJECT, game_object_record(&[41], 0, "Side", 0, true)),
		(41, TRANSFORM, transform_record(4, &[], 11)),
	]
}

/// Render bytes as lowercase hex.
pub fn to_hex(bytes: &[u8]) -> String {
	bytes.iter().map(|byte| format!("{byte:02x}")).collect()
}

/// Build an object-table manifest JSON document.
pub fn manifest_json(name: &str, version: &str, externals: &[&str], records: &[SceneRecord]) -> serde_json::Value {
	let objects: Vec<serde_json::Value> = records
		.iter()
		.map(|(path_id, class_id, bytes)| {
			serde_json::json!({
				"path_id": path_id,
				"class_id": class_id,
				"data": to_hex(bytes),
			})
		})
		.collect();

	serde_json::json!({
		"name": name,
		"version": version,
		"externals": externals,
		"objects": objects,
	})
}

/// Write a manifest document to `dir/file_name` and return its path.
pub fn write_manifest(dir: &Path, file_name: &str, manifest: &serde_json::Value) -> PathBuf {
	let path = dir.join(file_name);
	let text = serde_json::to_string_pretty(manifest).expect("manifest serializes");
	std::fs::write(&path, text).expect("manifest writes");
	path
}
