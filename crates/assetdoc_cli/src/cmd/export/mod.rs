use assetdoc::asset::export::render_object;
use assetdoc::asset::{ExportContext, ExportOptions, Mapping, Object, Result};

use crate::cmd::util::{Source, emit_json, load};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: Source,
	#[arg(long = "path-id")]
	pub path_id: Option<i64>,
	#[arg(long)]
	pub strict: bool,
	#[arg(long)]
	pub json: bool,
}

/// Export one object, or every object of the primary file, as YAML documents or JSON.
pub fn run(args: Args) -> Result<()> {
	let Args {
		source,
		path_id,
		strict,
		json,
	} = args;

	let loaded = load(&source)?;
	let file = loaded.primary()?;
	let options = if strict { ExportOptions::strict() } else { ExportOptions::default() };
	let ctx = ExportContext::with_options(file.version(), options);

	let objects: Vec<&Object> = match path_id {
		Some(path_id) => vec![loaded.object(path_id)?],
		None => file.objects().iter().collect(),
	};

	if json {
		let payload = ExportJson {
			path: source.manifest.display().to_string(),
			version: file.version().to_string(),
			objects: objects
				.iter()
				.map(|object| {
					Ok(ExportedObjectJson {
						path_id: object.path_id(),
						class_id: object.class_id().0,
						kind: object.kind().to_owned(),
						mapping: object.export_mapping(&ctx)?,
					})
				})
				.collect::<Result<Vec<_>>>()?,
		};
		return emit_json(&payload);
	}

	for object in objects {
		print!("{}", render_object(object, &ctx)?);
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct ExportJson {
	path: String,
	version: String,
	objects: Vec<ExportedObjectJson>,
}

#[derive(serde::Serialize)]
struct ExportedObjectJson {
	path_id: i64,
	class_id: i32,
	kind: String,
	mapping: Mapping,
}

#[cfg(test)]
mod tests;
