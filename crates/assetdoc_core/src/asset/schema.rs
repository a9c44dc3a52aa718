use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use crate::asset::classes::{Component, GameObject, Transform};
use crate::asset::{AssetError, AssetReader, AssetWriter, ClassId, ExportContext, Mapping, Object, PPtr, Result};

/// Decode a value from a versioned reader.
pub trait Decode: Sized {
	/// Read all fields in their fixed order, branching on `reader.version()`.
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self>;
}

/// Encode a value with the same layout [`Decode`] reads.
pub trait Encode {
	/// Write all fields in their fixed order, branching on `writer.version()`.
	fn encode(&self, writer: &mut AssetWriter) -> Result<()>;
}

/// Capability interface implemented by every registered object kind.
pub trait AssetObject: Any + fmt::Debug + Send + Sync {
	/// Schema name (`GameObject`, `Transform`, ...).
	fn kind(&self) -> &'static str;

	/// Human-facing name stored in the object, if the schema has one.
	fn name(&self) -> Option<&str> {
		None
	}

	/// Every reference held by the object, including nested sub-records, in field order.
	fn references(&self) -> Box<dyn Iterator<Item = PPtr<Object>> + '_>;

	/// Build the ordered mapping export for this object.
	fn export_mapping(&self, ctx: &ExportContext) -> Result<Mapping>;

	/// Upcast for typed downcasting.
	fn as_any(&self) -> &dyn Any;
}

type DecodeFn = fn(&mut AssetReader<'_>) -> Result<Box<dyn AssetObject>>;

#[derive(Clone, Copy)]
struct SchemaEntry {
	decode: DecodeFn,
	complete: bool,
}

/// Class id to decoder table.
///
/// Complete schemas consume their whole record; partial schemas (generic
/// components) read a known prefix and are exempt from strict layout checks.
#[derive(Clone, Default)]
pub struct SchemaRegistry {
	entries: HashMap<ClassId, SchemaEntry>,
}

impl SchemaRegistry {
	/// Registry with no schemas.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Registry with every schema shipped in this crate.
	pub fn builtin() -> Self {
		let mut registry = Self::empty();
		registry.register::<GameObject>(ClassId::GAME_OBJECT, true);
		registry.register::<Transform>(ClassId::TRANSFORM, true);
		registry.register::<Transform>(ClassId::RECT_TRANSFORM, false);
		for class_id in [
			ClassId::CAMERA,
			ClassId::MESH_RENDERER,
			ClassId::MESH_FILTER,
			ClassId::RIGIDBODY,
			ClassId::BOX_COLLIDER,
			ClassId::LIGHT,
			ClassId::MONO_BEHAVIOUR,
			ClassId::SKINNED_MESH_RENDERER,
		] {
			registry.register::<Component>(class_id, false);
		}
		registry
	}

	/// Register `T` as the decoder for `class_id`, replacing any previous entry.
	pub fn register<T: Decode + AssetObject>(&mut self, class_id: ClassId, complete: bool) {
		self.entries.insert(
			class_id,
			SchemaEntry {
				decode: decode_boxed::<T>,
				complete,
			},
		);
	}

	/// Return whether `class_id` has a registered schema.
	pub fn contains(&self, class_id: ClassId) -> bool {
		self.entries.contains_key(&class_id)
	}

	/// Decode one record with the schema registered for `class_id`.
	pub fn decode(&self, class_id: ClassId, reader: &mut AssetReader<'_>) -> Result<Box<dyn AssetObject>> {
		let entry = self.entries.get(&class_id).ok_or(AssetError::UnregisteredClass { class_id })?;
		if !reader.version().is_supported() {
			return Err(AssetError::UnsupportedVersion {
				what: "object decoding",
				version: reader.version().to_string(),
			});
		}

		let body = (entry.decode)(reader)?;
		if entry.complete && reader.options().strict_layout && reader.remaining() > 0 {
			return Err(AssetError::LayoutMismatch {
				class_id,
				leftover: reader.remaining(),
			});
		}
		Ok(body)
	}
}

impl fmt::Debug for SchemaRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut classes: Vec<_> = self.entries.keys().copied().collect();
		classes.sort();
		f.debug_struct("SchemaRegistry").field("classes", &classes).finish()
	}
}

fn decode_boxed<T: Decode + AssetObject>(reader: &mut AssetReader<'_>) -> Result<Box<dyn AssetObject>> {
	Ok(Box::new(T::decode(reader)?))
}
