use assetdoc_testkit::{manifest_json, scene_records, write_manifest};

use crate::asset::{AssetCollection, AssetError, AssetManifest, Compression, Endianness, LoadOptions, Version, decode_bytes, decode_hex};

#[test]
fn hex_payloads_decode_in_either_case() {
	assert_eq!(decode_hex("00ffA0").expect("hex decodes"), vec![0x00, 0xFF, 0xA0]);
	assert_eq!(decode_hex("").expect("empty decodes"), Vec::<u8>::new());
	assert!(matches!(decode_hex("abc"), Err(AssetError::InvalidHex { at: 3 })));
	assert!(matches!(decode_hex("00zz"), Err(AssetError::InvalidHex { at: 2 })));
	assert!(matches!(decode_hex("0g"), Err(AssetError::InvalidHex { at: 1 })));
}

#[test]
fn manifest_splits_into_header_and_records() {
	let json = manifest_json("level0", "2017.3.0f3", &["sharedassets0.assets"], &scene_records());
	let raw = serde_json::to_vec(&json).expect("json serializes");
	let (compression, manifest) = AssetManifest::from_bytes(raw).expect("manifest parses");
	assert_eq!(compression, Compression::None);
	assert_eq!(manifest.endianness, Endianness::Little);

	let (header, records) = manifest.into_parts().expect("parts decode");
	assert_eq!(header.name, "level0");
	assert_eq!(header.version, Version::EXPORT_REFERENCE);
	assert_eq!(header.externals, vec!["sharedassets0.assets".to_owned()]);
	assert_eq!(records.len(), scene_records().len());
	assert_eq!(records[0].path_id, 1);
	assert_eq!(records[0].data, scene_records()[0].2);
}

#[test]
fn zstd_manifest_is_detected() {
	let json = manifest_json("level0", "2017.3.0f3", &[], &scene_records());
	let raw = serde_json::to_vec(&json).expect("json serializes");
	let compressed = zstd::encode_all(raw.as_slice(), 3).expect("zstd compresses");

	let (compression, bytes) = decode_bytes(compressed).expect("zstd decodes");
	assert_eq!(compression, Compression::Zstd);
	assert_eq!(bytes, raw);
}

#[test]
fn unknown_leading_bytes_are_rejected() {
	let err = decode_bytes(b"UnityFS\0".to_vec()).expect_err("binary container is not a manifest");
	assert!(matches!(err, AssetError::UnknownMagic { magic } if magic == *b"Unit"));
}

#[test]
fn bad_version_string_fails_before_decoding() {
	let json = manifest_json("odd", "not-a-version", &[], &[]);
	let (_, manifest) = AssetManifest::from_bytes(serde_json::to_vec(&json).expect("json serializes")).expect("manifest parses");
	assert!(matches!(manifest.into_parts(), Err(AssetError::InvalidVersion { .. })));
}

#[test]
fn collection_loads_manifest_from_disk() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = write_manifest(dir.path(), "level0.json", &manifest_json("level0", "2017.3.0f3", &[], &scene_records()));

	let mut collection = AssetCollection::new();
	let file = collection.load_manifest(&path, &LoadOptions::default()).expect("manifest loads");
	assert_eq!(collection.file(file).expect("file exists").objects().len(), scene_records().len());
}
