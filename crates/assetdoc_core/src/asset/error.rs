use thiserror::Error;

use crate::asset::ClassId;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, AssetError>;

/// Errors produced while decoding, resolving, traversing, and exporting serialized assets.
#[derive(Debug, Error)]
pub enum AssetError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Object-table dump was not valid JSON for the expected shape.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// A length or count prefix was negative.
	#[error("negative {kind} length {len} at offset {at}")]
	NegativeLength {
		/// Logical prefix kind (`array` or `string`).
		kind: &'static str,
		/// Parsed signed length.
		len: i32,
		/// Byte offset of the prefix.
		at: usize,
	},
	/// Array count exceeded the configured limit.
	#[error("array too large at offset {at}: count={count}, max={max}")]
	ArrayTooLarge {
		/// Requested element count.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
		/// Byte offset of the count prefix.
		at: usize,
	},
	/// String length exceeded the configured limit.
	#[error("string too large at offset {at}: len={len}, max={max}")]
	StringTooLarge {
		/// Requested byte length.
		len: usize,
		/// Maximum permitted byte length.
		max: usize,
		/// Byte offset of the length prefix.
		at: usize,
	},
	/// String payload was not valid UTF-8.
	#[error("invalid utf-8 string at offset {at}")]
	InvalidUtf8 {
		/// Byte offset of the string payload.
		at: usize,
	},
	/// Strict layout mode detected trailing undecoded bytes.
	#[error("decode layout mismatch for class {class_id}: leftover={leftover}")]
	LayoutMismatch {
		/// Class being decoded.
		class_id: ClassId,
		/// Unconsumed bytes.
		leftover: usize,
	},
	/// Version string could not be parsed.
	#[error("invalid version string: {text:?}")]
	InvalidVersion {
		/// Original version text.
		text: String,
	},
	/// A version-dependent rule has no branch for this version.
	#[error("unsupported version {version} for {what}")]
	UnsupportedVersion {
		/// Rule or schema that has no branch for the version.
		what: &'static str,
		/// Rendered version.
		version: String,
	},
	/// Strong resolution found no object for a non-null reference.
	#[error("dangling reference: file_index={file_index}, path_id={path_id}")]
	DanglingReference {
		/// Reference file index.
		file_index: i32,
		/// Reference local identifier.
		path_id: i64,
	},
	/// Reference file index does not name an external file slot.
	#[error("file index {file_index} out of range (externals={count})")]
	FileIndexOutOfRange {
		/// Reference file index.
		file_index: i32,
		/// Number of external file entries in the referring file.
		count: usize,
	},
	/// Reference resolved to an object of an unexpected kind.
	#[error("reference type mismatch: file_index={file_index}, path_id={path_id}, expected {expected}, got class {got}")]
	ReferenceTypeMismatch {
		/// Reference file index.
		file_index: i32,
		/// Reference local identifier.
		path_id: i64,
		/// Expected schema name.
		expected: &'static str,
		/// Class of the resolved object.
		got: ClassId,
	},
	/// Scene node has no resolvable transform component.
	#[error("game object {path_id} has no transform component")]
	MissingTransform {
		/// Scene node local identifier.
		path_id: i64,
	},
	/// Object was expected to be a scene node.
	#[error("object {path_id} is class {class_id}, not a GameObject")]
	NotAGameObject {
		/// Object local identifier.
		path_id: i64,
		/// Actual class.
		class_id: ClassId,
	},
	/// Hierarchy traversal revisited a node.
	#[error("hierarchy cycle detected at game object {path_id}")]
	HierarchyCycle {
		/// Revisited scene node local identifier.
		path_id: i64,
	},
	/// Parent walk revisited a transform.
	#[error("parent cycle detected at transform {path_id}")]
	ParentCycle {
		/// Revisited transform local identifier.
		path_id: i64,
	},
	/// No schema registered for a class id.
	#[error("no schema registered for class {class_id}")]
	UnregisteredClass {
		/// Unregistered class.
		class_id: ClassId,
	},
	/// One object record failed to decode.
	#[error("object {path_id} (class {class_id}) failed at offset {offset}: {source}")]
	ObjectDecode {
		/// Failing object local identifier.
		path_id: i64,
		/// Failing object class.
		class_id: ClassId,
		/// Reader offset when the failure was raised.
		offset: usize,
		/// Underlying decode error.
		source: Box<AssetError>,
	},
	/// Two records in one file share a local identifier.
	#[error("duplicate path id {path_id}")]
	DuplicatePathId {
		/// Duplicated local identifier.
		path_id: i64,
	},
	/// Two files with the same name were added to one collection.
	#[error("duplicate file name {name}")]
	DuplicateFile {
		/// Duplicated file name.
		name: String,
	},
	/// Requested object local identifier does not exist.
	#[error("object not found: path_id={path_id}")]
	ObjectNotFound {
		/// Requested local identifier.
		path_id: i64,
	},
	/// Requested file name does not exist in the collection.
	#[error("file not found: {name}")]
	FileNotFound {
		/// Requested file name.
		name: String,
	},
	/// Unknown leading magic for an object-table dump.
	#[error("unsupported compression or not an object table (magic={magic:?})")]
	UnknownMagic {
		/// First up-to-4 bytes of the stream.
		magic: [u8; 4],
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Record payload hex text was malformed.
	#[error("invalid hex payload at character {at}")]
	InvalidHex {
		/// Character offset of the first bad digit.
		at: usize,
	},
}
