use assetdoc_testkit::RecordBuilder;

use crate::asset::{AssetError, AssetReader, Endianness, ReadOptions, Version};

fn version() -> Version {
	Version::EXPORT_REFERENCE
}

#[test]
fn primitive_reads_advance_by_their_width() {
	let bytes = RecordBuilder::new().u8(7).u16(0x1234).i32(-5).i64(1 << 40).f32(0.5).build();
	let mut reader = AssetReader::new(&bytes, version());

	assert_eq!(reader.read_u8().expect("u8"), 7);
	assert_eq!(reader.pos(), 1);
	assert_eq!(reader.read_u16().expect("u16"), 0x1234);
	assert_eq!(reader.pos(), 3);
	assert_eq!(reader.read_i32().expect("i32"), -5);
	assert_eq!(reader.pos(), 7);
	assert_eq!(reader.read_i64().expect("i64"), 1 << 40);
	assert_eq!(reader.pos(), 15);
	assert_eq!(reader.read_f32().expect("f32"), 0.5);
	assert_eq!(reader.remaining(), 0);
}

#[test]
fn big_endian_reads_swap_bytes() {
	let bytes = [0x00, 0x00, 0x01, 0x02, 0xAB, 0xCD];
	let mut reader = AssetReader::with_options(&bytes, version(), Endianness::Big, ReadOptions::default());
	assert_eq!(reader.read_u32().expect("u32"), 0x0102);
	assert_eq!(reader.read_u16().expect("u16"), 0xABCD);
}

#[test]
fn booleans_treat_any_nonzero_byte_as_true() {
	let bytes = [0, 1, 2, 0xFF];
	let mut reader = AssetReader::new(&bytes, version());
	let values: Vec<bool> = (0..4).map(|_| reader.read_bool().expect("bool")).collect();
	assert_eq!(values, vec![false, true, true, true]);
}

#[test]
fn align4_always_lands_on_multiple_of_four() {
	let bytes = [0_u8; 64];
	for prefix in 0..24 {
		let mut reader = AssetReader::new(&bytes, version());
		for _ in 0..prefix {
			reader.read_u8().expect("prefix byte");
		}
		reader.align4().expect("align succeeds");
		assert_eq!(reader.pos() % 4, 0, "prefix={prefix}");
		assert!(reader.pos() >= prefix && reader.pos() < prefix + 4, "prefix={prefix}");
	}
}

#[test]
fn align_on_boundary_consumes_nothing() {
	let bytes = [0_u8; 8];
	let mut reader = AssetReader::new(&bytes, version());
	reader.read_i32().expect("i32");
	reader.align4().expect("align succeeds");
	assert_eq!(reader.pos(), 4);
}

#[test]
fn aligned_string_consumes_padding() {
	let bytes = RecordBuilder::new().string("abcde").i32(9).build();
	let mut reader = AssetReader::new(&bytes, version());
	assert_eq!(reader.read_aligned_string().expect("string"), "abcde");
	assert_eq!(reader.pos(), 12);
	assert_eq!(reader.read_i32().expect("trailing i32"), 9);
}

#[test]
fn read_past_end_reports_offset() {
	let bytes = [1_u8, 2, 3];
	let mut reader = AssetReader::new(&bytes, version());
	reader.read_u8().expect("first byte");
	let err = reader.read_i32().expect_err("overrun should fail");
	assert!(matches!(err, AssetError::UnexpectedEof { at: 1, need: 4, rem: 2 }));
}

#[test]
fn array_reads_count_then_elements() {
	let bytes = RecordBuilder::new().i32(3).i32(10).i32(20).i32(30).build();
	let mut reader = AssetReader::new(&bytes, version());
	let values = reader.read_array_with(|reader| reader.read_i32()).expect("array");
	assert_eq!(values, vec![10, 20, 30]);
	assert_eq!(reader.remaining(), 0);
}

#[test]
fn array_does_not_align_between_elements() {
	let bytes = RecordBuilder::new().i32(3).u8(1).u8(0).u8(1).build();
	let mut reader = AssetReader::new(&bytes, version());
	let values = reader.read_array_with(|reader| reader.read_bool()).expect("array");
	assert_eq!(values, vec![true, false, true]);
	assert_eq!(reader.pos(), 7);
}

#[test]
fn negative_and_oversized_counts_are_rejected() {
	let negative = RecordBuilder::new().i32(-1).build();
	let err = AssetReader::new(&negative, version())
		.read_array_with(|reader| reader.read_u8())
		.expect_err("negative count should fail");
	assert!(matches!(err, AssetError::NegativeLength { kind: "array", len: -1, at: 0 }));

	let options = ReadOptions {
		max_array_len: 4,
		max_string_len: 4,
		strict_layout: false,
	};
	let huge = RecordBuilder::new().i32(5).build();
	let err = AssetReader::with_options(&huge, version(), Endianness::Little, options)
		.read_array_with(|reader| reader.read_u8())
		.expect_err("oversized count should fail");
	assert!(matches!(err, AssetError::ArrayTooLarge { count: 5, max: 4, at: 0 }));

	let err = AssetReader::with_options(&huge, version(), Endianness::Little, options)
		.read_aligned_string()
		.expect_err("oversized string should fail");
	assert!(matches!(err, AssetError::StringTooLarge { len: 5, max: 4, at: 0 }));
}

#[test]
fn truncated_array_is_fatal() {
	let bytes = RecordBuilder::new().i32(1_000_000).i32(1).build();
	let err = AssetReader::new(&bytes, version())
		.read_array_with(|reader| reader.read_i32())
		.expect_err("truncated array should fail");
	assert!(matches!(err, AssetError::UnexpectedEof { at: 8, .. }));
}
