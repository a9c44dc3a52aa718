use assetdoc::asset::{Result, collect_hierarchy};

use crate::cmd::util::{OBJECT_COLUMNS, ObjectJson, Source, emit_json, load, object_row};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: Source,
	#[arg(long = "path-id")]
	pub path_id: i64,
	#[arg(long)]
	pub json: bool,
}

/// List a scene node, its components, and every descendant in pre-order.
pub fn run(args: Args) -> Result<()> {
	let Args { source, path_id, json } = args;

	let loaded = load(&source)?;
	let root = loaded.object(path_id)?;
	let objects = collect_hierarchy(root, &loaded.collection)?;

	if json {
		let payload = HierarchyJson {
			root: path_id,
			count: objects.len(),
			objects: objects.iter().map(|object| ObjectJson::new(&loaded.collection, object)).collect(),
		};
		return emit_json(&payload);
	}

	println!("root: {root}");
	println!("count: {}", objects.len());
	println!();
	println!("{OBJECT_COLUMNS}");
	for object in &objects {
		println!("{}", object_row(object));
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct HierarchyJson {
	root: i64,
	count: usize,
	objects: Vec<ObjectJson>,
}
