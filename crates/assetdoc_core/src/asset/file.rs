use std::collections::{BTreeMap, HashMap, HashSet};

use crate::asset::{
	AssetError, AssetReader, ClassId, Endianness, FileId, Object, ObjectInfo, ObjectLookup, ReadOptions, Result, SchemaRegistry, Version,
};

/// One framed object record handed over by the container layer.
#[derive(Debug, Clone)]
pub struct ObjectRecord {
	/// Local identifier.
	pub path_id: i64,
	/// Serialized type tag.
	pub class_id: ClassId,
	/// Raw record payload.
	pub data: Vec<u8>,
}

/// File-level metadata shared by every record of one serialized file.
#[derive(Debug, Clone)]
pub struct FileHeader {
	/// File name used for external-reference matching.
	pub name: String,
	/// Format version of every record in the file.
	pub version: Version,
	/// Byte order of every record in the file.
	pub endianness: Endianness,
	/// External file table; reference slot `n` names `externals[n - 1]`.
	pub externals: Vec<String>,
}

/// Runtime switches for turning records into decoded objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
	/// Decode limits passed to every record reader.
	pub read: ReadOptions,
	/// Skip records that fail to decode instead of failing the whole file.
	pub skip_failed_objects: bool,
}

impl LoadOptions {
	/// Preset for best-effort inspection of damaged or partially supported files.
	pub fn lenient() -> Self {
		Self {
			read: ReadOptions::default(),
			skip_failed_objects: true,
		}
	}
}

/// Record left undecoded while loading a file.
#[derive(Debug, Clone)]
pub struct SkippedObject {
	/// Local identifier.
	pub path_id: i64,
	/// Serialized type tag.
	pub class_id: ClassId,
	/// Rendered reason.
	pub reason: String,
}

/// Decoded serialized file: metadata plus an object table keyed by local identifier.
#[derive(Debug)]
pub struct SerializedFile {
	/// File metadata.
	pub header: FileHeader,
	id: FileId,
	objects: Vec<Object>,
	by_path: HashMap<i64, usize>,
	skipped: Vec<SkippedObject>,
	class_counts: BTreeMap<ClassId, usize>,
}

impl SerializedFile {
	/// Decode every record with `schemas`.
	///
	/// Records without a registered schema are skipped. A record that fails to
	/// decode fails the file with [`AssetError::ObjectDecode`] unless
	/// `options.skip_failed_objects` is set.
	pub fn decode(id: FileId, header: FileHeader, records: Vec<ObjectRecord>, schemas: &SchemaRegistry, options: &LoadOptions) -> Result<Self> {
		let mut seen = HashSet::new();
		let mut objects = Vec::new();
		let mut by_path = HashMap::new();
		let mut skipped = Vec::new();
		let mut class_counts = BTreeMap::new();

		for record in records {
			if !seen.insert(record.path_id) {
				return Err(AssetError::DuplicatePathId { path_id: record.path_id });
			}
			*class_counts.entry(record.class_id).or_insert(0) += 1;

			if !schemas.contains(record.class_id) {
				log::debug!("{}: skipping object {} of unregistered class {}", header.name, record.path_id, record.class_id);
				skipped.push(SkippedObject {
					path_id: record.path_id,
					class_id: record.class_id,
					reason: "unregistered class".to_owned(),
				});
				continue;
			}

			let mut reader = AssetReader::with_options(&record.data, header.version, header.endianness, options.read);
			match schemas.decode(record.class_id, &mut reader) {
				Ok(body) => {
					let info = ObjectInfo {
						file: id,
						path_id: record.path_id,
						class_id: record.class_id,
					};
					by_path.insert(record.path_id, objects.len());
					objects.push(Object::new(info, body));
				}
				Err(source) => {
					let err = AssetError::ObjectDecode {
						path_id: record.path_id,
						class_id: record.class_id,
						offset: reader.pos(),
						source: Box::new(source),
					};
					if !options.skip_failed_objects {
						return Err(err);
					}
					log::warn!("{}: skipping object: {err}", header.name);
					skipped.push(SkippedObject {
						path_id: record.path_id,
						class_id: record.class_id,
						reason: err.to_string(),
					});
				}
			}
		}

		Ok(Self {
			header,
			id,
			objects,
			by_path,
			skipped,
			class_counts,
		})
	}

	/// Handle of this file inside its collection.
	pub fn id(&self) -> FileId {
		self.id
	}

	/// File name.
	pub fn name(&self) -> &str {
		&self.header.name
	}

	/// Format version.
	pub fn version(&self) -> Version {
		self.header.version
	}

	/// Decoded objects in record order.
	pub fn objects(&self) -> &[Object] {
		&self.objects
	}

	/// Look up a decoded object by local identifier.
	pub fn object(&self, path_id: i64) -> Option<&Object> {
		self.by_path.get(&path_id).map(|&idx| &self.objects[idx])
	}

	/// Records that were not decoded.
	pub fn skipped(&self) -> &[SkippedObject] {
		&self.skipped
	}

	/// Record count per class id, including skipped records.
	pub fn class_counts(&self) -> &BTreeMap<ClassId, usize> {
		&self.class_counts
	}
}

/// Registry of loaded files, the lookup every resolve and traversal runs against.
#[derive(Debug)]
pub struct AssetCollection {
	files: Vec<SerializedFile>,
	by_name: HashMap<String, FileId>,
	schemas: SchemaRegistry,
}

impl Default for AssetCollection {
	fn default() -> Self {
		Self::new()
	}
}

impl AssetCollection {
	/// Empty collection using the built-in schemas.
	pub fn new() -> Self {
		Self::with_schemas(SchemaRegistry::builtin())
	}

	/// Empty collection using a caller-supplied schema table.
	pub fn with_schemas(schemas: SchemaRegistry) -> Self {
		Self {
			files: Vec::new(),
			by_name: HashMap::new(),
			schemas,
		}
	}

	/// Schema table used for new files.
	pub fn schemas(&self) -> &SchemaRegistry {
		&self.schemas
	}

	/// Decode `records` as a new file and register it under `header.name`.
	pub fn add_file(&mut self, header: FileHeader, records: Vec<ObjectRecord>, options: &LoadOptions) -> Result<FileId> {
		if self.by_name.contains_key(&header.name) {
			return Err(AssetError::DuplicateFile { name: header.name });
		}

		let id = FileId(self.files.len());
		let file = SerializedFile::decode(id, header, records, &self.schemas, options)?;
		log::debug!(
			"loaded {} ({} objects, {} skipped, version {})",
			file.name(),
			file.objects.len(),
			file.skipped.len(),
			file.version()
		);
		self.by_name.insert(file.header.name.clone(), id);
		self.files.push(file);
		Ok(id)
	}

	/// Loaded files in insertion order.
	pub fn files(&self) -> &[SerializedFile] {
		&self.files
	}

	/// Look up a loaded file by handle.
	pub fn file(&self, id: FileId) -> Option<&SerializedFile> {
		self.files.get(id.0)
	}

	/// Resolve a file name: exact match first, then by final path component.
	pub fn file_by_name(&self, name: &str) -> Option<FileId> {
		if let Some(id) = self.by_name.get(name) {
			return Some(*id);
		}
		let wanted = basename(name);
		self.files.iter().find(|file| basename(file.name()).eq_ignore_ascii_case(wanted)).map(SerializedFile::id)
	}

	/// Strict object lookup used by callers that start from an explicit local identifier.
	pub fn find_object(&self, file: FileId, path_id: i64) -> Result<&Object> {
		self.object(file, path_id).ok_or(AssetError::ObjectNotFound { path_id })
	}
}

impl ObjectLookup for AssetCollection {
	fn object(&self, file: FileId, path_id: i64) -> Option<&Object> {
		self.file(file)?.object(path_id)
	}

	fn external(&self, file: FileId, file_index: i32) -> Result<Option<FileId>> {
		let source = self.file(file).ok_or_else(|| AssetError::FileNotFound {
			name: format!("#{}", file.0),
		})?;
		if file_index == 0 {
			return Ok(Some(file));
		}

		let count = source.header.externals.len();
		let slot = usize::try_from(file_index)
			.ok()
			.filter(|slot| (1..=count).contains(slot))
			.ok_or(AssetError::FileIndexOutOfRange { file_index, count })?;
		Ok(self.file_by_name(&source.header.externals[slot - 1]))
	}
}

fn basename(name: &str) -> &str {
	name.rsplit(['/', '\\']).next().unwrap_or(name)
}
