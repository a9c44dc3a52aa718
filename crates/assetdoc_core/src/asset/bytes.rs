use crate::asset::{AssetError, Decode, Result, Version};

/// Byte order of serialized object payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endianness {
	/// Little-endian byte order.
	#[default]
	Little,
	/// Big-endian byte order.
	Big,
}

impl Endianness {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Little => "little",
			Self::Big => "big",
		}
	}
}

/// Runtime limits and behavior switches for object decoding.
#[derive(Debug, Clone, Copy)]
pub struct ReadOptions {
	/// Maximum accepted array element count.
	pub max_array_len: usize,
	/// Maximum accepted string byte length.
	pub max_string_len: usize,
	/// Error when a complete schema leaves undecoded bytes in its record.
	pub strict_layout: bool,
}

impl Default for ReadOptions {
	fn default() -> Self {
		Self {
			max_array_len: 1 << 20,
			max_string_len: 1 << 24,
			strict_layout: false,
		}
	}
}

impl ReadOptions {
	/// Preset that rejects trailing bytes after complete schemas.
	pub fn strict() -> Self {
		Self {
			strict_layout: true,
			..Self::default()
		}
	}
}

/// Forward-only versioned cursor over one object record.
///
/// Every read advances the offset by exactly the bytes consumed. Alignment is
/// measured from the start of the record slice.
pub struct AssetReader<'a> {
	bytes: &'a [u8],
	pos: usize,
	version: Version,
	endianness: Endianness,
	options: ReadOptions,
}

impl<'a> AssetReader<'a> {
	/// Create a little-endian reader with default limits.
	pub fn new(bytes: &'a [u8], version: Version) -> Self {
		Self::with_options(bytes, version, Endianness::Little, ReadOptions::default())
	}

	/// Create a reader with explicit byte order and limits.
	pub fn with_options(bytes: &'a [u8], version: Version, endianness: Endianness, options: ReadOptions) -> Self {
		Self {
			bytes,
			pos: 0,
			version,
			endianness,
			options,
		}
	}

	/// Format version of the record being decoded.
	pub fn version(&self) -> Version {
		self.version
	}

	/// Byte order of the record being decoded.
	pub fn endianness(&self) -> Endianness {
		self.endianness
	}

	/// Active decode limits.
	pub fn options(&self) -> ReadOptions {
		self.options
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Read exactly `n` bytes and advance.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(AssetError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	fn read_array_bytes<const N: usize>(&mut self) -> Result<[u8; N]> {
		let raw = self.read_exact(N)?;
		let mut out = [0_u8; N];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read one unsigned byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read a one-byte boolean (nonzero is `true`).
	pub fn read_bool(&mut self) -> Result<bool> {
		Ok(self.read_u8()? != 0)
	}

	/// Read an `i16`.
	pub fn read_i16(&mut self) -> Result<i16> {
		let buf = self.read_array_bytes::<2>()?;
		Ok(match self.endianness {
			Endianness::Little => i16::from_le_bytes(buf),
			Endianness::Big => i16::from_be_bytes(buf),
		})
	}

	/// Read a `u16`.
	pub fn read_u16(&mut self) -> Result<u16> {
		let buf = self.read_array_bytes::<2>()?;
		Ok(match self.endianness {
			Endianness::Little => u16::from_le_bytes(buf),
			Endianness::Big => u16::from_be_bytes(buf),
		})
	}

	/// Read an `i32`.
	pub fn read_i32(&mut self) -> Result<i32> {
		let buf = self.read_array_bytes::<4>()?;
		Ok(match self.endianness {
			Endianness::Little => i32::from_le_bytes(buf),
			Endianness::Big => i32::from_be_bytes(buf),
		})
	}

	/// Read a `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		let buf = self.read_array_bytes::<4>()?;
		Ok(match self.endianness {
			Endianness::Little => u32::from_le_bytes(buf),
			Endianness::Big => u32::from_be_bytes(buf),
		})
	}

	/// Read an `i64`.
	pub fn read_i64(&mut self) -> Result<i64> {
		let buf = self.read_array_bytes::<8>()?;
		Ok(match self.endianness {
			Endianness::Little => i64::from_le_bytes(buf),
			Endianness::Big => i64::from_be_bytes(buf),
		})
	}

	/// Read an `f32`.
	pub fn read_f32(&mut self) -> Result<f32> {
		let buf = self.read_array_bytes::<4>()?;
		Ok(match self.endianness {
			Endianness::Little => f32::from_le_bytes(buf),
			Endianness::Big => f32::from_be_bytes(buf),
		})
	}

	/// Skip forward to the next multiple of `n` from the record start.
	pub fn align(&mut self, n: usize) -> Result<()> {
		if n == 0 {
			return Ok(());
		}
		let rem = self.pos % n;
		if rem != 0 {
			let _ = self.read_exact(n - rem)?;
		}
		Ok(())
	}

	/// Skip forward to the next 4-byte boundary.
	pub fn align4(&mut self) -> Result<()> {
		self.align(4)
	}

	/// Read an `i32` length prefix and validate it against `max`.
	fn read_len(&mut self, kind: &'static str, max: usize) -> Result<usize> {
		let at = self.pos;
		let len = self.read_i32()?;
		let count = usize::try_from(len).map_err(|_| AssetError::NegativeLength { kind, len, at })?;
		if count > max {
			return Err(match kind {
				"string" => AssetError::StringTooLarge { len: count, max, at },
				_ => AssetError::ArrayTooLarge { count, max, at },
			});
		}
		Ok(count)
	}

	/// Read a length-prefixed UTF-8 string followed by 4-byte alignment.
	pub fn read_aligned_string(&mut self) -> Result<String> {
		let len = self.read_len("string", self.options.max_string_len)?;
		let at = self.pos;
		let raw = self.read_exact(len)?;
		let text = std::str::from_utf8(raw).map_err(|_| AssetError::InvalidUtf8 { at })?;
		let text = text.to_owned();
		self.align4()?;
		Ok(text)
	}

	/// Read an `i32` count followed by that many element decodes.
	///
	/// No alignment is applied between elements; element schemas align themselves.
	pub fn read_array<T: Decode>(&mut self) -> Result<Vec<T>> {
		self.read_array_with(T::decode)
	}

	/// Read an `i32` count followed by that many calls to `read`.
	pub fn read_array_with<T>(&mut self, mut read: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
		let count = self.read_len("array", self.options.max_array_len)?;
		// Cap the preallocation by what the remaining bytes could possibly hold.
		let mut out = Vec::with_capacity(count.min(self.remaining()));
		for _ in 0..count {
			out.push(read(self)?);
		}
		Ok(out)
	}
}

#[cfg(test)]
mod tests;
