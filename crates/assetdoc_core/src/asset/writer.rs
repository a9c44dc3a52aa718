use crate::asset::{AssetError, Encode, Endianness, Result, Version};

/// Versioned byte sink mirroring [`AssetReader`](crate::asset::AssetReader).
pub struct AssetWriter {
	bytes: Vec<u8>,
	version: Version,
	endianness: Endianness,
}

impl AssetWriter {
	/// Create a little-endian writer.
	pub fn new(version: Version) -> Self {
		Self::with_endianness(version, Endianness::Little)
	}

	/// Create a writer with explicit byte order.
	pub fn with_endianness(version: Version, endianness: Endianness) -> Self {
		Self {
			bytes: Vec::new(),
			version,
			endianness,
		}
	}

	/// Format version being written.
	pub fn version(&self) -> Version {
		self.version
	}

	/// Bytes written so far.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return whether nothing has been written.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Finish and return the record bytes.
	pub fn into_bytes(self) -> Vec<u8> {
		self.bytes
	}

	/// Write one byte.
	pub fn write_u8(&mut self, value: u8) {
		self.bytes.push(value);
	}

	/// Write a one-byte boolean.
	pub fn write_bool(&mut self, value: bool) {
		self.write_u8(u8::from(value));
	}

	/// Write an `i16`.
	pub fn write_i16(&mut self, value: i16) {
		match self.endianness {
			Endianness::Little => self.bytes.extend_from_slice(&value.to_le_bytes()),
			Endianness::Big => self.bytes.extend_from_slice(&value.to_be_bytes()),
		}
	}

	/// Write a `u16`.
	pub fn write_u16(&mut self, value: u16) {
		match self.endianness {
			Endianness::Little => self.bytes.extend_from_slice(&value.to_le_bytes()),
			Endianness::Big => self.bytes.extend_from_slice(&value.to_be_bytes()),
		}
	}

	/// Write an `i32`.
	pub fn write_i32(&mut self, value: i32) {
		match self.endianness {
			Endianness::Little => self.bytes.extend_from_slice(&value.to_le_bytes()),
			Endianness::Big => self.bytes.extend_from_slice(&value.to_be_bytes()),
		}
	}

	/// Write an `i64`.
	pub fn write_i64(&mut self, value: i64) {
		match self.endianness {
			Endianness::Little => self.bytes.extend_from_slice(&value.to_le_bytes()),
			Endianness::Big => self.bytes.extend_from_slice(&value.to_be_bytes()),
		}
	}

	/// Write an `f32`.
	pub fn write_f32(&mut self, value: f32) {
		match self.endianness {
			Endianness::Little => self.bytes.extend_from_slice(&value.to_le_bytes()),
			Endianness::Big => self.bytes.extend_from_slice(&value.to_be_bytes()),
		}
	}

	/// Pad with zeros to the next 4-byte boundary.
	pub fn align4(&mut self) {
		while self.bytes.len() % 4 != 0 {
			self.bytes.push(0);
		}
	}

	fn write_len(&mut self, len: usize) -> Result<()> {
		let len = i32::try_from(len).map_err(|_| AssetError::ArrayTooLarge {
			count: len,
			max: i32::MAX as usize,
			at: self.bytes.len(),
		})?;
		self.write_i32(len);
		Ok(())
	}

	/// Write a length-prefixed string followed by 4-byte alignment.
	pub fn write_aligned_string(&mut self, value: &str) -> Result<()> {
		self.write_len(value.len())?;
		self.bytes.extend_from_slice(value.as_bytes());
		self.align4();
		Ok(())
	}

	/// Write an `i32` count followed by each element encoding.
	pub fn write_array<T: Encode>(&mut self, items: &[T]) -> Result<()> {
		self.write_array_with(items, |writer, item| item.encode(writer))
	}

	/// Write an `i32` count followed by one call to `write` per element.
	pub fn write_array_with<T>(&mut self, items: &[T], mut write: impl FnMut(&mut Self, &T) -> Result<()>) -> Result<()> {
		self.write_len(items.len())?;
		for item in items {
			write(self, item)?;
		}
		Ok(())
	}
}
