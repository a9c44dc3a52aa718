use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::OnceLock;

use assetdoc_testkit::{SceneRecord, manifest_json, scene_records, target_dir as workspace_target_dir, write_manifest};

static ASSETDOC_BIN: OnceLock<PathBuf> = OnceLock::new();

/// Write the stock scene as `scene.json` under `dir` and return its path as text.
pub(crate) fn scene_manifest(dir: &Path) -> String {
	manifest_path(dir, "scene.json", "scene.assets", &[], &scene_records())
}

pub(crate) fn manifest_path(dir: &Path, file_name: &str, name: &str, externals: &[&str], records: &[SceneRecord]) -> String {
	let json = manifest_json(name, "2017.3.0f3", externals, records);
	write_manifest(dir, file_name, &json).to_string_lossy().into_owned()
}

pub(crate) fn run_assetdoc(args: &[&str]) -> Output {
	Command::new(assetdoc_bin()).args(args).output().expect("assetdoc command executes")
}

pub(crate) fn run_assetdoc_json(args: &[&str]) -> serde_json::Value {
	let output = run_assetdoc(args);
	assert!(
		output.status.success(),
		"assetdoc command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}

pub(crate) fn run_assetdoc_text(args: &[&str]) -> String {
	let output = run_assetdoc(args);
	assert!(
		output.status.success(),
		"assetdoc command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout should be utf-8")
}

fn assetdoc_bin() -> &'static PathBuf {
	ASSETDOC_BIN.get_or_init(resolve_assetdoc_bin)
}

fn resolve_assetdoc_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_assetdoc") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "assetdoc.exe" } else { "assetdoc" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "assetdoc"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build assetdoc binary at {}", bin.display());

	bin
}
