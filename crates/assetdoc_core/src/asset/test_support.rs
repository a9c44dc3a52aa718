use std::cell::Cell;

use assetdoc_testkit::{SceneRecord, scene_records};

use crate::asset::{AssetCollection, ClassId, Endianness, FileHeader, FileId, LoadOptions, Object, ObjectLookup, ObjectRecord, Result, Version};

pub(crate) fn header(name: &str, version: Version, externals: &[&str]) -> FileHeader {
	FileHeader {
		name: name.to_owned(),
		version,
		endianness: Endianness::Little,
		externals: externals.iter().map(|name| (*name).to_owned()).collect(),
	}
}

pub(crate) fn records(raw: Vec<SceneRecord>) -> Vec<ObjectRecord> {
	raw.into_iter()
		.map(|(path_id, class_id, data)| ObjectRecord {
			path_id,
			class_id: ClassId(class_id),
			data,
		})
		.collect()
}

/// Collection holding only the stock scene as `scene.assets`.
pub(crate) fn scene_collection() -> (AssetCollection, FileId) {
	let mut collection = AssetCollection::new();
	let file = collection
		.add_file(
			header("scene.assets", Version::EXPORT_REFERENCE, &[]),
			records(scene_records()),
			&LoadOptions::default(),
		)
		.expect("stock scene loads");
	(collection, file)
}

/// Look up a stock-scene object by local identifier.
pub(crate) fn object(collection: &AssetCollection, file: FileId, path_id: i64) -> &Object {
	collection.find_object(file, path_id).expect("object exists")
}

/// Lookup that fails the test on any access.
pub(crate) struct PanicLookup;

impl ObjectLookup for PanicLookup {
	fn object(&self, _file: FileId, path_id: i64) -> Option<&Object> {
		panic!("unexpected object lookup for path id {path_id}");
	}

	fn external(&self, _file: FileId, file_index: i32) -> Result<Option<FileId>> {
		panic!("unexpected external lookup for file index {file_index}");
	}
}

/// Lookup wrapper that counts registry accesses.
pub(crate) struct CountingLookup<'a> {
	pub(crate) inner: &'a AssetCollection,
	pub(crate) hits: Cell<usize>,
}

impl<'a> CountingLookup<'a> {
	pub(crate) fn new(inner: &'a AssetCollection) -> Self {
		Self { inner, hits: Cell::new(0) }
	}
}

impl ObjectLookup for CountingLookup<'_> {
	fn object(&self, file: FileId, path_id: i64) -> Option<&Object> {
		self.hits.set(self.hits.get() + 1);
		self.inner.object(file, path_id)
	}

	fn external(&self, file: FileId, file_index: i32) -> Result<Option<FileId>> {
		self.hits.set(self.hits.get() + 1);
		self.inner.external(file, file_index)
	}
}
