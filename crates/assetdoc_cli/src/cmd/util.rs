use std::path::PathBuf;

use assetdoc::asset::{AssetCollection, AssetError, AssetManifest, Compression, FileId, LoadOptions, Object, Result, SerializedFile};

/// Manifest selection shared by every collection-backed command.
#[derive(clap::Args)]
pub struct Source {
	/// Object-table manifest to inspect.
	pub manifest: PathBuf,
	/// Extra manifests loaded for cross-file reference resolution.
	#[arg(long = "with")]
	pub with: Vec<PathBuf>,
	/// Skip objects that fail to decode instead of aborting.
	#[arg(long)]
	pub lenient: bool,
}

/// Loaded collection plus the primary file inside it.
pub(crate) struct Loaded {
	pub collection: AssetCollection,
	pub file: FileId,
	pub compression: Compression,
}

impl Loaded {
	/// Primary serialized file.
	pub fn primary(&self) -> Result<&SerializedFile> {
		self.collection.file(self.file).ok_or_else(|| AssetError::FileNotFound {
			name: format!("#{}", self.file.0),
		})
	}

	/// Object of the primary file by local identifier.
	pub fn object(&self, path_id: i64) -> Result<&Object> {
		self.collection.find_object(self.file, path_id)
	}
}

/// Load the primary manifest, then every `--with` manifest.
pub(crate) fn load(source: &Source) -> Result<Loaded> {
	let options = if source.lenient { LoadOptions::lenient() } else { LoadOptions::default() };

	let (compression, manifest) = AssetManifest::open(&source.manifest)?;
	let (header, records) = manifest.into_parts()?;
	let mut collection = AssetCollection::new();
	let file = collection.add_file(header, records, &options)?;

	for extra in &source.with {
		let id = collection.load_manifest(extra, &options)?;
		log::debug!("{}: loaded as file #{}", extra.display(), id.0);
	}

	Ok(Loaded {
		collection,
		file,
		compression,
	})
}

/// Print `payload` as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(payload)?;
	println!("{text}");
	Ok(())
}

/// Tab-separated object row: `path_id class_id kind name`.
pub(crate) fn object_row(object: &Object) -> String {
	format!("{}\t{}\t{}\t{}", object.path_id(), object.class_id().0, object.kind(), object.name().unwrap_or("-"))
}

/// Column header matching [`object_row`].
pub(crate) const OBJECT_COLUMNS: &str = "path_id\tclass_id\tkind\tname";

#[derive(serde::Serialize)]
pub(crate) struct ObjectJson {
	pub file: String,
	pub path_id: i64,
	pub class_id: i32,
	pub kind: String,
	pub name: Option<String>,
}

impl ObjectJson {
	pub fn new(collection: &AssetCollection, object: &Object) -> Self {
		let file = collection.file(object.file()).map(|file| file.name().to_owned()).unwrap_or_default();
		Self {
			file,
			path_id: object.path_id(),
			class_id: object.class_id().0,
			kind: object.kind().to_owned(),
			name: object.name().map(str::to_owned),
		}
	}
}
