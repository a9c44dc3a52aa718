use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::asset::{AssetError, AssetObject, AssetReader, AssetWriter, Decode, Encode, Mapping, Node, Object, Resolvable, Result, Version};

/// Handle of one file inside a registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FileId(pub usize);

/// Registry seam used by every resolve and traversal call.
pub trait ObjectLookup {
	/// Look up an object by local identifier inside `file`.
	fn object(&self, file: FileId, path_id: i64) -> Option<&Object>;

	/// Map `file`'s reference slot to a loaded file.
	///
	/// Slot `0` is `file` itself and slot `n` is the `n`-th external file entry.
	/// Returns `Ok(None)` when the slot exists but its file is not loaded, and
	/// [`AssetError::FileIndexOutOfRange`] when the slot does not exist.
	fn external(&self, file: FileId, file_index: i32) -> Result<Option<FileId>>;
}

/// Serialized reference to another object, possibly in another file.
///
/// A value relation, not an owning pointer: resolution always goes through an
/// [`ObjectLookup`] together with the referring file.
pub struct PPtr<T> {
	/// Reference slot (`0` = same file, `n` = `n`-th external file).
	pub file_index: i32,
	/// Local identifier inside the target file (`0` = null).
	pub path_id: i64,
	marker: PhantomData<fn() -> T>,
}

impl<T> PPtr<T> {
	/// Build a reference from its two serialized fields.
	pub const fn new(file_index: i32, path_id: i64) -> Self {
		Self {
			file_index,
			path_id,
			marker: PhantomData,
		}
	}

	/// Null reference.
	pub const fn null() -> Self {
		Self::new(0, 0)
	}

	/// Return `true` when the local identifier is the null identifier.
	pub fn is_null(&self) -> bool {
		self.path_id == 0
	}

	/// Reinterpret the expected target type.
	pub fn cast<U>(self) -> PPtr<U> {
		PPtr::new(self.file_index, self.path_id)
	}

	/// Drop the expected target type.
	pub fn erase(self) -> PPtr<Object> {
		self.cast()
	}

	/// Local identifiers are 64-bit from 5.0 and 32-bit before.
	pub fn is_long_path_id(version: Version) -> bool {
		version.is_greater_equal(Version::new(5, 0, 0))
	}

	/// Two-field mapping encoding used by exports.
	pub fn export(&self) -> Node {
		let mut mapping = Mapping::flow();
		mapping.insert("m_FileID", self.file_index);
		mapping.insert("m_PathID", self.path_id);
		Node::Mapping(mapping)
	}

	/// Resolve to any object without checking the expected type.
	///
	/// Null references return `Ok(None)` without touching `lookup`.
	pub fn resolve_object<'a, L: ObjectLookup + ?Sized>(&self, file: FileId, lookup: &'a L) -> Result<Option<&'a Object>> {
		if self.is_null() {
			return Ok(None);
		}

		let target = if self.file_index == 0 {
			file
		} else {
			match lookup.external(file, self.file_index)? {
				Some(target) => target,
				None => return Ok(None),
			}
		};

		Ok(lookup.object(target, self.path_id))
	}
}

impl<T: Resolvable> PPtr<T> {
	/// Strong resolve: every miss is an error.
	pub fn find<'a, L: ObjectLookup + ?Sized>(&self, file: FileId, lookup: &'a L) -> Result<&'a T> {
		let object = self.resolve_object(file, lookup)?.ok_or(AssetError::DanglingReference {
			file_index: self.file_index,
			path_id: self.path_id,
		})?;

		T::from_object(object).ok_or(AssetError::ReferenceTypeMismatch {
			file_index: self.file_index,
			path_id: self.path_id,
			expected: T::expected(),
			got: object.class_id(),
		})
	}

	/// Weak resolve: null, missing, out-of-range, and mistyped targets are all `None`.
	pub fn try_find<'a, L: ObjectLookup + ?Sized>(&self, file: FileId, lookup: &'a L) -> Option<&'a T> {
		match self.resolve_object(file, lookup) {
			Ok(object) => object.and_then(T::from_object),
			Err(err) => {
				log::debug!("weak reference {self:?} from file {} treated as absent: {err}", file.0);
				None
			}
		}
	}
}

impl<T: AssetObject> PPtr<T> {
	/// Strong resolve returning the containing object alongside the typed body.
	pub fn find_with_object<'a, L: ObjectLookup + ?Sized>(&self, file: FileId, lookup: &'a L) -> Result<(&'a Object, &'a T)> {
		let object = self.erase().find(file, lookup)?;
		let typed = T::from_object(object).ok_or(AssetError::ReferenceTypeMismatch {
			file_index: self.file_index,
			path_id: self.path_id,
			expected: T::expected(),
			got: object.class_id(),
		})?;
		Ok((object, typed))
	}

	/// Weak resolve returning the containing object alongside the typed body.
	pub fn try_find_with_object<'a, L: ObjectLookup + ?Sized>(&self, file: FileId, lookup: &'a L) -> Option<(&'a Object, &'a T)> {
		let object = self.erase().try_find(file, lookup)?;
		Some((object, T::from_object(object)?))
	}
}

impl<T> Decode for PPtr<T> {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		let file_index = reader.read_i32()?;
		let path_id = if Self::is_long_path_id(reader.version()) {
			reader.read_i64()?
		} else {
			i64::from(reader.read_i32()?)
		};
		Ok(Self::new(file_index, path_id))
	}
}

impl<T> Encode for PPtr<T> {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		writer.write_i32(self.file_index);
		if Self::is_long_path_id(writer.version()) {
			writer.write_i64(self.path_id);
		} else {
			let path_id = i32::try_from(self.path_id).map_err(|_| AssetError::UnsupportedVersion {
				what: "64-bit path id",
				version: writer.version().to_string(),
			})?;
			writer.write_i32(path_id);
		}
		Ok(())
	}
}

impl<T> Clone for PPtr<T> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<T> Copy for PPtr<T> {}

impl<T> Default for PPtr<T> {
	fn default() -> Self {
		Self::null()
	}
}

impl<T> PartialEq for PPtr<T> {
	fn eq(&self, other: &Self) -> bool {
		self.file_index == other.file_index && self.path_id == other.path_id
	}
}

impl<T> Eq for PPtr<T> {}

impl<T> Hash for PPtr<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.file_index.hash(state);
		self.path_id.hash(state);
	}
}

impl<T> fmt::Debug for PPtr<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "PPtr({}, {})", self.file_index, self.path_id)
	}
}
