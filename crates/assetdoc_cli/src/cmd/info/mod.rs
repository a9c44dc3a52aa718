use assetdoc::asset::{ObjectLookup, Result};

use crate::cmd::util::{Source, emit_json, load};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: Source,
	#[arg(long)]
	pub json: bool,
}

/// Print file header, external table, and per-class object counts.
pub fn run(args: Args) -> Result<()> {
	let Args { source, json } = args;

	let loaded = load(&source)?;
	let file = loaded.primary()?;

	let mut externals = Vec::with_capacity(file.header.externals.len());
	for (slot, name) in file.header.externals.iter().enumerate() {
		let index = slot as i32 + 1;
		let loaded_file = loaded.collection.external(loaded.file, index)?;
		externals.push(ExternalJson {
			index,
			name: name.clone(),
			loaded: loaded_file.is_some(),
		});
	}

	let class_counts: Vec<ClassCountJson> = file
		.class_counts()
		.iter()
		.map(|(class_id, count)| ClassCountJson {
			class_id: class_id.0,
			kind: class_id.name().map(str::to_owned),
			count: *count,
		})
		.collect();

	if json {
		let payload = InfoJson {
			path: source.manifest.display().to_string(),
			compression: loaded.compression.as_str().to_owned(),
			name: file.name().to_owned(),
			version: file.version().to_string(),
			supported: file.version().is_supported(),
			endianness: file.header.endianness.as_str().to_owned(),
			externals,
			object_count: file.objects().len(),
			skipped: file
				.skipped()
				.iter()
				.map(|item| SkippedJson {
					path_id: item.path_id,
					class_id: item.class_id.0,
					reason: item.reason.clone(),
				})
				.collect(),
			class_counts,
		};
		return emit_json(&payload);
	}

	println!("path: {}", source.manifest.display());
	println!("compression: {}", loaded.compression.as_str());
	println!("name: {}", file.name());
	println!("version: {}", file.version());
	println!("supported: {}", file.version().is_supported());
	println!("endianness: {}", file.header.endianness.as_str());
	println!("objects: {}", file.objects().len());
	println!("skipped: {}", file.skipped().len());
	println!();
	println!("externals:");
	println!("index\tname\tloaded");
	for item in &externals {
		println!("{}\t{}\t{}", item.index, item.name, item.loaded);
	}
	println!();
	println!("class_counts:");
	println!("class_id\tkind\tcount");
	for item in &class_counts {
		println!("{}\t{}\t{}", item.class_id, item.kind.as_deref().unwrap_or("-"), item.count);
	}
	if !file.skipped().is_empty() {
		println!();
		println!("skipped:");
		println!("path_id\tclass_id\treason");
		for item in file.skipped() {
			println!("{}\t{}\t{}", item.path_id, item.class_id.0, item.reason);
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: String,
	name: String,
	version: String,
	supported: bool,
	endianness: String,
	externals: Vec<ExternalJson>,
	object_count: usize,
	skipped: Vec<SkippedJson>,
	class_counts: Vec<ClassCountJson>,
}

#[derive(serde::Serialize)]
struct ExternalJson {
	index: i32,
	name: String,
	loaded: bool,
}

#[derive(serde::Serialize)]
struct SkippedJson {
	path_id: i64,
	class_id: i32,
	reason: String,
}

#[derive(serde::Serialize)]
struct ClassCountJson {
	class_id: i32,
	kind: Option<String>,
	count: usize,
}

#[cfg(test)]
mod tests;
