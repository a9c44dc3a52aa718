use std::path::PathBuf;

use assetdoc::asset::{AssetReader, Decode, Endianness, ExportContext, ExportOptions, ReadOptions, Result, SerializedShaderState, Version};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	/// Raw pass-state record bytes.
	pub file: PathBuf,
	#[arg(long, default_value = "2017.3.0f3")]
	pub version: String,
	#[arg(long = "big-endian")]
	pub big_endian: bool,
	#[arg(long, default_value_t = 3)]
	pub indent: usize,
	#[arg(long)]
	pub json: bool,
}

/// Decode one raw shader pass state record and print its ShaderLab block.
pub fn run(args: Args) -> Result<()> {
	let Args {
		file,
		version,
		big_endian,
		indent,
		json,
	} = args;

	let version = version.parse::<Version>()?;
	let endianness = if big_endian { Endianness::Big } else { Endianness::Little };
	let bytes = std::fs::read(&file)?;

	let mut reader = AssetReader::with_options(&bytes, version, endianness, ReadOptions::default());
	let state = SerializedShaderState::decode(&mut reader)?;
	let leftover = reader.remaining();
	if leftover > 0 {
		log::warn!("{}: {leftover} trailing bytes after pass state", file.display());
	}

	let options = ExportOptions {
		block_indent: indent,
		..ExportOptions::default()
	};
	let block = state.export_block(&ExportContext::with_options(version, options));

	if json {
		let payload = ShaderStateJson {
			path: file.display().to_string(),
			version: version.to_string(),
			endianness: endianness.as_str().to_owned(),
			name: state.name.clone(),
			gpu_program_id: state.gpu_program_id,
			lod: state.lod,
			has_z_clip: state.z_clip.is_some(),
			leftover,
			block,
		};
		return emit_json(&payload);
	}

	print!("{block}");
	Ok(())
}

#[derive(serde::Serialize)]
struct ShaderStateJson {
	path: String,
	version: String,
	endianness: String,
	name: String,
	gpu_program_id: i32,
	lod: i32,
	has_z_clip: bool,
	leftover: usize,
	block: String,
}
