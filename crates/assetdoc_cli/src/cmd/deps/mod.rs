use assetdoc::asset::{DependencyOptions, MissingMode, Object, Result, collect_reachable, fetch_dependencies};

use crate::cmd::util::{OBJECT_COLUMNS, ObjectJson, Source, emit_json, load, object_row};

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum Missing {
	Skip,
	Log,
	Error,
}

impl From<Missing> for MissingMode {
	fn from(value: Missing) -> Self {
		match value {
			Missing::Skip => MissingMode::Skip,
			Missing::Log => MissingMode::Log,
			Missing::Error => MissingMode::Error,
		}
	}
}

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: Source,
	#[arg(long = "path-id")]
	pub path_id: i64,
	#[arg(long)]
	pub recursive: bool,
	#[arg(long, value_enum, default_value_t = Missing::Log)]
	pub missing: Missing,
	#[arg(long)]
	pub json: bool,
}

/// List the objects one object references, or everything reachable from it.
pub fn run(args: Args) -> Result<()> {
	let Args {
		source,
		path_id,
		recursive,
		missing,
		json,
	} = args;

	let loaded = load(&source)?;
	let object = loaded.object(path_id)?;
	let options = DependencyOptions { on_missing: missing.into() };

	let found: Vec<&Object> = if recursive {
		collect_reachable(object, &loaded.collection, options)?
	} else {
		fetch_dependencies(object, &loaded.collection, options).collect::<Result<Vec<_>>>()?
	};

	if json {
		let payload = DepsJson {
			object: ObjectJson::new(&loaded.collection, object),
			recursive,
			missing: options.on_missing.as_str().to_owned(),
			count: found.len(),
			dependencies: found.iter().map(|item| ObjectJson::new(&loaded.collection, item)).collect(),
		};
		return emit_json(&payload);
	}

	println!("object: {object}");
	println!("recursive: {recursive}");
	println!("missing: {}", options.on_missing.as_str());
	println!("count: {}", found.len());
	println!();
	println!("file\t{OBJECT_COLUMNS}");
	for item in &found {
		let file = loaded.collection.file(item.file()).map(|file| file.name()).unwrap_or("-");
		println!("{file}\t{}", object_row(item));
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct DepsJson {
	object: ObjectJson,
	recursive: bool,
	missing: String,
	count: usize,
	dependencies: Vec<ObjectJson>,
}

#[cfg(test)]
mod tests;
