use std::any;
use std::fmt;

use crate::asset::{AssetObject, ClassId, ExportContext, FileId, Mapping, PPtr, Result};

/// Identity of one decoded object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObjectInfo {
	/// Owning file handle.
	pub file: FileId,
	/// Local identifier, unique within `file`.
	pub path_id: i64,
	/// Serialized type tag.
	pub class_id: ClassId,
}

/// Decoded object: identity plus a typed body behind the capability interface.
#[derive(Debug)]
pub struct Object {
	info: ObjectInfo,
	body: Box<dyn AssetObject>,
}

impl Object {
	/// Wrap a decoded body with its identity.
	pub fn new(info: ObjectInfo, body: Box<dyn AssetObject>) -> Self {
		Self { info, body }
	}

	/// Object identity.
	pub fn info(&self) -> ObjectInfo {
		self.info
	}

	/// Owning file handle.
	pub fn file(&self) -> FileId {
		self.info.file
	}

	/// Local identifier.
	pub fn path_id(&self) -> i64 {
		self.info.path_id
	}

	/// Serialized type tag.
	pub fn class_id(&self) -> ClassId {
		self.info.class_id
	}

	/// Class name when the class id is known, else the schema name of the body.
	pub fn kind(&self) -> &'static str {
		self.info.class_id.name().unwrap_or_else(|| self.body.kind())
	}

	/// Stored name, if the schema has one.
	pub fn name(&self) -> Option<&str> {
		self.body.name()
	}

	/// Typed body.
	pub fn body(&self) -> &dyn AssetObject {
		self.body.as_ref()
	}

	/// Downcast the body to a concrete schema type.
	pub fn downcast_ref<T: AssetObject>(&self) -> Option<&T> {
		self.body.as_any().downcast_ref::<T>()
	}

	/// Every reference held by the body, in field order.
	pub fn references(&self) -> impl Iterator<Item = PPtr<Object>> + '_ {
		self.body.references()
	}

	/// Ordered mapping export of the body.
	pub fn export_mapping(&self, ctx: &ExportContext) -> Result<Mapping> {
		self.body.export_mapping(ctx)
	}
}

impl fmt::Display for Object {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) if !name.is_empty() => write!(f, "{name}({})", self.kind()),
			_ => f.write_str(self.kind()),
		}
	}
}

/// Target types a [`PPtr`] can resolve to.
pub trait Resolvable {
	/// View a resolved object as `Self`, or `None` when the kind does not match.
	fn from_object(object: &Object) -> Option<&Self>;

	/// Expected kind name used in mismatch errors.
	fn expected() -> &'static str;
}

impl Resolvable for Object {
	fn from_object(object: &Object) -> Option<&Self> {
		Some(object)
	}

	fn expected() -> &'static str {
		"Object"
	}
}

impl<T: AssetObject> Resolvable for T {
	fn from_object(object: &Object) -> Option<&Self> {
		object.downcast_ref::<T>()
	}

	fn expected() -> &'static str {
		let full = any::type_name::<T>();
		full.rsplit("::").next().unwrap_or(full)
	}
}
