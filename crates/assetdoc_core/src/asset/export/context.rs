use crate::asset::{AssetError, Result, Version};

/// Runtime switches for textual export.
#[derive(Debug, Clone, Copy)]
pub struct ExportOptions {
	/// Reject provisional export schema versions instead of warning.
	pub strict_versions: bool,
	/// Base tab depth of block-format output.
	pub block_indent: usize,
}

impl Default for ExportOptions {
	fn default() -> Self {
		Self {
			strict_versions: false,
			block_indent: 3,
		}
	}
}

impl ExportOptions {
	/// Preset that only accepts fully tabulated export schema versions.
	pub fn strict() -> Self {
		Self {
			strict_versions: true,
			..Self::default()
		}
	}
}

/// Export schema version selected for a format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVersion {
	/// Value known to be correct for the format version.
	Exact(i32),
	/// Value only verified against `reference`; the version table is incomplete.
	Provisional {
		/// Exported value.
		value: i32,
		/// Format version the value was verified against.
		reference: Version,
	},
}

/// Format version and options shared by every export call.
#[derive(Debug, Clone, Copy)]
pub struct ExportContext {
	/// Format version of the source objects.
	pub version: Version,
	/// Export switches.
	pub options: ExportOptions,
}

impl ExportContext {
	/// Context with default options.
	pub fn new(version: Version) -> Self {
		Self::with_options(version, ExportOptions::default())
	}

	/// Context with explicit options.
	pub fn with_options(version: Version, options: ExportOptions) -> Self {
		Self { version, options }
	}

	/// Settle the exported `serializedVersion` for `kind`.
	///
	/// Provisional values are logged, or rejected under `strict_versions`.
	pub fn schema_version(&self, kind: &'static str, version: SchemaVersion) -> Result<i32> {
		match version {
			SchemaVersion::Exact(value) => Ok(value),
			SchemaVersion::Provisional { value, reference } => {
				if self.options.strict_versions {
					return Err(AssetError::UnsupportedVersion {
						what: kind,
						version: self.version.to_string(),
					});
				}
				log::warn!("{kind}: provisional serializedVersion {value} (verified for {reference}, exporting {})", self.version);
				Ok(value)
			}
		}
	}
}
