use assetdoc::asset::{Result, get_root, get_root_depth};

use crate::cmd::util::{ObjectJson, Source, emit_json, load, object_row};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub source: Source,
	#[arg(long = "path-id")]
	pub path_id: i64,
	#[arg(long)]
	pub json: bool,
}

/// Print the root scene node above a node and the parent-step count.
pub fn run(args: Args) -> Result<()> {
	let Args { source, path_id, json } = args;

	let loaded = load(&source)?;
	let node = loaded.object(path_id)?;
	let root = get_root(node, &loaded.collection)?;
	let depth = get_root_depth(node, &loaded.collection)?;

	if json {
		let payload = RootJson {
			node: ObjectJson::new(&loaded.collection, node),
			root: ObjectJson::new(&loaded.collection, root),
			depth,
		};
		return emit_json(&payload);
	}

	println!("node: {}", object_row(node));
	println!("root: {}", object_row(root));
	println!("depth: {depth}");
	Ok(())
}

#[derive(serde::Serialize)]
struct RootJson {
	node: ObjectJson,
	root: ObjectJson,
	depth: usize,
}
