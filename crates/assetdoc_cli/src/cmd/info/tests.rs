use assetdoc_testkit::{TRANSFORM, scene_records, transform_record};

use crate::cmd::test_support::{manifest_path, run_assetdoc, run_assetdoc_json, run_assetdoc_text, scene_manifest};

#[test]
fn info_json_reports_header_and_class_counts() {
	let dir = tempfile::tempdir().expect("tempdir");
	let scene = scene_manifest(dir.path());
	let json = run_assetdoc_json(&["info", &scene, "--json"]);

	assert_eq!(json["name"], "scene.assets");
	assert_eq!(json["version"], "2017.3.0f3");
	assert_eq!(json["compression"], "none");
	assert_eq!(json["endianness"], "little");
	assert_eq!(json["supported"], true);
	assert_eq!(json["object_count"], 10);

	let counts = json["class_counts"].as_array().expect("class counts array");
	let game_objects = counts.iter().find(|item| item["class_id"] == 1).expect("game object count");
	assert_eq!(game_objects["kind"], "GameObject");
	assert_eq!(game_objects["count"], 4);
}

#[test]
fn info_marks_externals_loaded_through_with() {
	let dir = tempfile::tempdir().expect("tempdir");
	let scene = manifest_path(dir.path(), "scene.json", "scene.assets", &["shared.assets", "other.assets"], &scene_records());
	let shared = manifest_path(dir.path(), "shared.json", "shared.assets", &[], &[(7, TRANSFORM, transform_record(0, &[], 0))]);

	let json = run_assetdoc_json(&["info", &scene, "--with", &shared, "--json"]);
	let externals = json["externals"].as_array().expect("externals array");
	assert_eq!(externals.len(), 2);
	assert_eq!(externals[0]["index"], 1);
	assert_eq!(externals[0]["loaded"], true);
	assert_eq!(externals[1]["name"], "other.assets");
	assert_eq!(externals[1]["loaded"], false);
}

#[test]
fn info_text_lists_sections() {
	let dir = tempfile::tempdir().expect("tempdir");
	let scene = scene_manifest(dir.path());
	let text = run_assetdoc_text(&["info", &scene]);

	assert!(text.contains("version: 2017.3.0f3\n"));
	assert!(text.contains("class_counts:\nclass_id\tkind\tcount\n1\tGameObject\t4\n"));
}

#[test]
fn info_rejects_non_manifest_input() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("scene.assets");
	std::fs::write(&path, b"UnityFS\0\0\0").expect("fixture writes");

	let output = run_assetdoc(&["info", &path.to_string_lossy()]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.starts_with("error: "), "stderr={stderr}");
}
