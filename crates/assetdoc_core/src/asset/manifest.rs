use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::asset::{AssetCollection, AssetError, ClassId, Endianness, FileHeader, FileId, LoadOptions, ObjectRecord, Result, Version};

const MAX_DECOMPRESSED_BYTES: usize = 256 * 1024 * 1024;
/// zstd frame magic accepted in front of compressed object-table dumps.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression mode detected for an object-table dump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Plain JSON text.
	None,
	/// zstd-compressed JSON text.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Zstd => "zstd",
		}
	}
}

/// Object-table dump produced by a container extractor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetManifest {
	/// File name used for external-reference matching.
	pub name: String,
	/// Full version string (`2017.3.0f3`).
	pub version: String,
	/// Record byte order; little-endian when omitted.
	#[serde(default)]
	pub endianness: Endianness,
	/// External file names in reference-slot order.
	#[serde(default)]
	pub externals: Vec<String>,
	/// Framed object records.
	pub objects: Vec<ManifestObject>,
}

/// One framed record inside an [`AssetManifest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestObject {
	/// Local identifier.
	pub path_id: i64,
	/// Serialized type tag.
	pub class_id: ClassId,
	/// Record payload as hex text.
	pub data: String,
}

impl AssetManifest {
	/// Read and parse a dump from disk, decompressing zstd input.
	pub fn open(path: impl AsRef<Path>) -> Result<(Compression, Self)> {
		let raw = fs::read(path)?;
		Self::from_bytes(raw)
	}

	/// Parse a dump from raw bytes, decompressing zstd input.
	pub fn from_bytes(raw: Vec<u8>) -> Result<(Compression, Self)> {
		let (compression, bytes) = decode_bytes(raw)?;
		let manifest = serde_json::from_slice(&bytes)?;
		Ok((compression, manifest))
	}

	/// Split into file metadata and decoded record payloads.
	pub fn into_parts(self) -> Result<(FileHeader, Vec<ObjectRecord>)> {
		let version = self.version.parse::<Version>()?;
		let records = self
			.objects
			.into_iter()
			.map(|object| {
				Ok(ObjectRecord {
					path_id: object.path_id,
					class_id: object.class_id,
					data: decode_hex(&object.data)?,
				})
			})
			.collect::<Result<Vec<_>>>()?;

		let header = FileHeader {
			name: self.name,
			version,
			endianness: self.endianness,
			externals: self.externals,
		};
		Ok((header, records))
	}
}

impl AssetCollection {
	/// Load an object-table dump from disk and register it as a new file.
	pub fn load_manifest(&mut self, path: impl AsRef<Path>, options: &LoadOptions) -> Result<FileId> {
		let path = path.as_ref();
		let (compression, manifest) = AssetManifest::open(path)?;
		log::debug!("{}: manifest compression {}", path.display(), compression.as_str());
		let (header, records) = manifest.into_parts()?;
		self.add_file(header, records, options)
	}
}

/// Detect and decode compression, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>) -> Result<(Compression, Vec<u8>)> {
	if raw.starts_with(&ZSTD_MAGIC) {
		let out = decode_zstd(&raw)?;
		return Ok((Compression::Zstd, out));
	}

	match raw.iter().find(|byte| !byte.is_ascii_whitespace()) {
		Some(b'{') => Ok((Compression::None, raw)),
		_ => Err(AssetError::UnknownMagic { magic: first4(&raw) }),
	}
}

fn decode_zstd(raw: &[u8]) -> Result<Vec<u8>> {
	let mut decoder = zstd::stream::read::Decoder::new(raw)?;
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf)?;
		if read == 0 {
			break;
		}

		if out.len() + read > MAX_DECOMPRESSED_BYTES {
			return Err(AssetError::DecompressedTooLarge { limit: MAX_DECOMPRESSED_BYTES });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

fn first4(bytes: &[u8]) -> [u8; 4] {
	let mut magic = [0_u8; 4];
	let take = bytes.len().min(4);
	magic[..take].copy_from_slice(&bytes[..take]);
	magic
}

/// Decode hex text (either case, no separators) into bytes.
pub fn decode_hex(text: &str) -> Result<Vec<u8>> {
	let digits = text.as_bytes();
	if digits.len() % 2 != 0 {
		return Err(AssetError::InvalidHex { at: digits.len() });
	}

	digits
		.chunks_exact(2)
		.enumerate()
		.map(|(pair, chunk)| {
			let at = pair * 2;
			let high = hex_digit(chunk[0]).ok_or(AssetError::InvalidHex { at })?;
			let low = hex_digit(chunk[1]).ok_or(AssetError::InvalidHex { at: at + 1 })?;
			Ok((high << 4) | low)
		})
		.collect()
}

fn hex_digit(byte: u8) -> Option<u8> {
	match byte {
		b'0'..=b'9' => Some(byte - b'0'),
		b'a'..=b'f' => Some(byte - b'a' + 10),
		b'A'..=b'F' => Some(byte - b'A' + 10),
		_ => None,
	}
}

#[cfg(test)]
mod tests;
