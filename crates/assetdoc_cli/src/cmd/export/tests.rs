use crate::cmd::test_support::{run_assetdoc, run_assetdoc_json, run_assetdoc_text, scene_manifest};

#[test]
fn export_renders_every_object_as_a_tagged_document() {
	let dir = tempfile::tempdir().expect("tempdir");
	let scene = scene_manifest(dir.path());
	let text = run_assetdoc_text(&["export", &scene]);

	assert_eq!(text.matches("--- !u!").count(), 10);
	assert!(text.starts_with("--- !u!1 &1\nGameObject:\n  m_ObjectHideFlags: 0\n"));
	assert!(text.contains("--- !u!23 &10\nMeshRenderer:\n"));
	assert!(text.contains("  m_Children:\n  - {m_FileID: 0, m_PathID: 21}\n  - {m_FileID: 0, m_PathID: 41}\n"));
}

#[test]
fn export_json_preserves_mapping_content() {
	let dir = tempfile::tempdir().expect("tempdir");
	let scene = scene_manifest(dir.path());
	let json = run_assetdoc_json(&["export", &scene, "--path-id", "3", "--json"]);

	let objects = json["objects"].as_array().expect("objects array");
	assert_eq!(objects.len(), 1);
	let leaf = &objects[0];
	assert_eq!(leaf["kind"], "GameObject");
	assert_eq!(leaf["mapping"]["m_Name"], "Leaf");
	assert_eq!(leaf["mapping"]["m_Layer"], 5);
	assert_eq!(leaf["mapping"]["m_IsActive"], false);
	assert_eq!(leaf["mapping"]["m_Component"][0]["component"]["m_PathID"], 31);
}

#[test]
fn strict_export_rejects_provisional_schema_versions() {
	let dir = tempfile::tempdir().expect("tempdir");
	let scene = scene_manifest(dir.path());

	let output = run_assetdoc(&["export", &scene, "--path-id", "1", "--strict"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported version 2017.3.0f3 for GameObject"));

	let text = run_assetdoc_text(&["export", &scene, "--path-id", "21", "--strict"]);
	assert!(text.starts_with("--- !u!4 &21\nTransform:\n"));
}

#[test]
fn unknown_path_id_fails() {
	let dir = tempfile::tempdir().expect("tempdir");
	let scene = scene_manifest(dir.path());
	let output = run_assetdoc(&["export", &scene, "--path-id", "404"]);
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("object not found: path_id=404"));
}
