use std::fmt;
use std::str::FromStr;

use crate::asset::{AssetError, Result};

/// Release channel suffix of an engine version (`a`, `b`, `f`, `p`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReleaseType {
	/// Alpha build (`a`).
	Alpha,
	/// Beta build (`b`).
	Beta,
	/// Final release (`f`).
	Final,
	/// Patch release (`p`).
	Patch,
}

impl ReleaseType {
	/// Single-character suffix used in version strings.
	pub fn as_char(self) -> char {
		match self {
			Self::Alpha => 'a',
			Self::Beta => 'b',
			Self::Final => 'f',
			Self::Patch => 'p',
		}
	}

	fn from_char(ch: char) -> Option<Self> {
		match ch {
			'a' => Some(Self::Alpha),
			'b' => Some(Self::Beta),
			'f' => Some(Self::Final),
			'p' => Some(Self::Patch),
			_ => None,
		}
	}
}

/// Totally ordered engine format version (`major.minor.build<type><n>`).
///
/// Ordering compares fields left to right, so `2017.2.0a0` sorts before every
/// `2017.2.x` release, which makes `Version::new` thresholds match every build
/// of that release line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
	/// Major version (`2017`, `5`, `4`).
	pub major: u16,
	/// Minor version.
	pub minor: u16,
	/// Build number.
	pub build: u16,
	/// Release channel.
	pub release: ReleaseType,
	/// Release channel counter (`3` in `f3`).
	pub release_number: u16,
}

impl Version {
	/// First version this crate refuses to decode.
	pub const SUPPORTED_UPPER: Version = Version::new(2018, 3, 0);
	/// Version the export layouts were taken from.
	pub const EXPORT_REFERENCE: Version = Version::new(2017, 3, 0).with_release(ReleaseType::Final, 3);

	/// Build a version with the lowest release suffix (`a0`).
	pub const fn new(major: u16, minor: u16, build: u16) -> Self {
		Self {
			major,
			minor,
			build,
			release: ReleaseType::Alpha,
			release_number: 0,
		}
	}

	/// Replace the release suffix.
	pub const fn with_release(self, release: ReleaseType, release_number: u16) -> Self {
		Self {
			release,
			release_number,
			..self
		}
	}

	/// Parse `2017.3.0f3`, `5.6.1p2`, or a bare `4.7.2`.
	pub fn parse(text: &str) -> Result<Self> {
		let invalid = || AssetError::InvalidVersion { text: text.to_owned() };
		let trimmed = text.trim();

		let mut parts = trimmed.splitn(3, '.');
		let major = parts.next().and_then(parse_number).ok_or_else(invalid)?;
		let minor = parts.next().and_then(parse_number).ok_or_else(invalid)?;
		let Some(tail) = parts.next() else {
			return Ok(Self::new(major, minor, 0).with_release(ReleaseType::Final, 0));
		};

		let split = tail.find(|ch: char| !ch.is_ascii_digit()).unwrap_or(tail.len());
		let build = parse_number(&tail[..split]).ok_or_else(invalid)?;
		let suffix = &tail[split..];
		if suffix.is_empty() {
			return Ok(Self::new(major, minor, build).with_release(ReleaseType::Final, 0));
		}

		let mut chars = suffix.chars();
		let release = chars.next().and_then(ReleaseType::from_char).ok_or_else(invalid)?;
		let release_number = parse_number(chars.as_str()).ok_or_else(invalid)?;
		Ok(Self::new(major, minor, build).with_release(release, release_number))
	}

	/// Return `true` when this version sorts before `other`.
	pub fn is_less(self, other: Version) -> bool {
		self < other
	}

	/// Return `true` when this version sorts at or after `other`.
	pub fn is_greater_equal(self, other: Version) -> bool {
		self >= other
	}

	/// Return `true` when objects written by this version can be decoded.
	pub fn is_supported(self) -> bool {
		self.is_less(Self::SUPPORTED_UPPER)
	}
}

impl FromStr for Version {
	type Err = AssetError;

	fn from_str(text: &str) -> Result<Self> {
		Self::parse(text)
	}
}

impl fmt::Display for Version {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}.{}.{}{}{}",
			self.major,
			self.minor,
			self.build,
			self.release.as_char(),
			self.release_number
		)
	}
}

fn parse_number(text: &str) -> Option<u16> {
	if text.is_empty() || !text.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	text.parse().ok()
}
