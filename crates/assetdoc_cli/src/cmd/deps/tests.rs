use assetdoc_testkit::{GAME_OBJECT, RecordBuilder, TRANSFORM, game_object_record, transform_record};

use crate::cmd::test_support::{manifest_path, run_assetdoc, run_assetdoc_json, scene_manifest};

fn path_ids(json: &serde_json::Value) -> Vec<i64> {
	json["dependencies"]
		.as_array()
		.expect("dependencies array")
		.iter()
		.map(|item| item["path_id"].as_i64().expect("path id"))
		.collect()
}

#[test]
fn direct_dependencies_follow_field_order() {
	let dir = tempfile::tempdir().expect("tempdir");
	let scene = scene_manifest(dir.path());
	let json = run_assetdoc_json(&["deps", &scene, "--path-id", "21", "--json"]);

	assert_eq!(json["missing"], "log");
	assert_eq!(path_ids(&json), vec![2, 31, 11]);
}

#[test]
fn recursive_dependencies_cover_the_scene_once() {
	let dir = tempfile::tempdir().expect("tempdir");
	let scene = scene_manifest(dir.path());
	let json = run_assetdoc_json(&["deps", &scene, "--path-id", "1", "--recursive", "--json"]);

	assert_eq!(json["count"], 10);
	assert_eq!(path_ids(&json), vec![1, 10, 11, 12, 21, 41, 2, 31, 4, 3]);
}

#[test]
fn external_dependencies_resolve_through_with() {
	let dir = tempfile::tempdir().expect("tempdir");
	// One component living in the first external file.
	let node = RecordBuilder::new().i32(1).pptr(1, 7).i32(0).string("Linked").u16(0).bool(true).align4().build();
	let scene = manifest_path(dir.path(), "scene.json", "scene.assets", &["shared.assets"], &[(1, GAME_OBJECT, node)]);
	let shared = manifest_path(dir.path(), "shared.json", "shared.assets", &[], &[(7, TRANSFORM, transform_record(0, &[], 0))]);

	let json = run_assetdoc_json(&["deps", &scene, "--path-id", "1", "--with", &shared, "--json"]);
	assert_eq!(path_ids(&json), vec![7]);
	assert_eq!(json["dependencies"][0]["file"], "shared.assets");

	let json = run_assetdoc_json(&["deps", &scene, "--path-id", "1", "--missing", "skip", "--json"]);
	assert_eq!(json["count"], 0);

	let output = run_assetdoc(&["deps", &scene, "--path-id", "1", "--missing", "error"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("dangling reference: file_index=1, path_id=7"));
}

#[test]
fn missing_dependencies_are_logged_by_default() {
	let dir = tempfile::tempdir().expect("tempdir");
	let scene = manifest_path(
		dir.path(),
		"scene.json",
		"scene.assets",
		&[],
		&[(1, GAME_OBJECT, game_object_record(&[99], 0, "Broken", 0, true))],
	);

	let output = run_assetdoc(&["deps", &scene, "--path-id", "1"]);
	assert!(output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("unresolved dependency"));
	assert!(String::from_utf8_lossy(&output.stdout).contains("count: 0\n"));
}
