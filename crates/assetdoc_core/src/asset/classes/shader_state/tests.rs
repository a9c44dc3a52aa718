use super::{BlendMode, BlendOp, ColorMask, CompareFunction, FloatValue, RtBlendState, SerializedShaderState, StencilOp, TagMap, keyword};
use crate::asset::{AssetReader, AssetWriter, Decode, Encode, ExportContext, ExportOptions, Version};

fn ctx() -> ExportContext {
	ExportContext::new(Version::EXPORT_REFERENCE)
}

fn value(raw: i32) -> FloatValue {
	FloatValue::new(raw as f32)
}

fn encode(state: &SerializedShaderState, version: Version) -> Vec<u8> {
	let mut writer = AssetWriter::new(version);
	state.encode(&mut writer).expect("state encodes");
	writer.into_bytes()
}

fn decode(bytes: &[u8], version: Version) -> SerializedShaderState {
	let mut reader = AssetReader::new(bytes, version);
	let state = SerializedShaderState::decode(&mut reader).expect("state decodes");
	assert_eq!(reader.remaining(), 0, "state fully consumed");
	state
}

/// Export body without the trailing program id line.
fn body(state: &SerializedShaderState) -> String {
	let text = state.export_block(&ctx());
	text.strip_suffix(&format!("\t\t\tGpuProgramID {}\n", state.gpu_program_id))
		.expect("program id closes the block")
		.to_owned()
}

#[test]
fn default_state_exports_only_the_program_id() {
	let state = SerializedShaderState::default();
	assert_eq!(state.export_block(&ctx()), "\t\t\tGpuProgramID 0\n");
}

#[test]
fn block_indent_is_configurable() {
	let state = SerializedShaderState {
		gpu_program_id: 17,
		..SerializedShaderState::default()
	};
	let options = ExportOptions {
		block_indent: 0,
		..ExportOptions::default()
	};
	let text = state.export_block(&ExportContext::with_options(Version::EXPORT_REFERENCE, options));
	assert_eq!(text, "GpuProgramID 17\n");
}

#[test]
fn each_scalar_departure_adds_one_line() {
	let cases: [(fn(&mut SerializedShaderState), &str); 9] = [
		(|state: &mut SerializedShaderState| state.name = "FORWARD".to_owned(), "Name \"FORWARD\""),
		(|state: &mut SerializedShaderState| state.lod = 200, "LOD 200"),
		(|state: &mut SerializedShaderState| state.alpha_to_mask = value(1), "AlphaToMask On"),
		(|state: &mut SerializedShaderState| state.z_clip = Some(value(0)), "ZClip Off"),
		(|state: &mut SerializedShaderState| state.z_test = value(CompareFunction::Always as i32), "ZTest Always"),
		(|state: &mut SerializedShaderState| state.z_write = value(0), "ZWrite Off"),
		(|state: &mut SerializedShaderState| state.culling = value(0), "Cull Off"),
		(|state: &mut SerializedShaderState| state.offset_factor = FloatValue::new(-1.0), "Offset -1, 0"),
		(|state: &mut SerializedShaderState| state.lighting = true, "Lighting On"),
	];

	for (apply, expected) in cases {
		let mut state = SerializedShaderState::default();
		apply(&mut state);
		assert_eq!(body(&state), format!("\t\t\t{expected}\n"));
	}
}

#[test]
fn z_clip_on_is_silent() {
	let state = SerializedShaderState {
		z_clip: Some(value(1)),
		..SerializedShaderState::default()
	};
	assert_eq!(body(&state), "");
}

#[test]
fn tags_render_in_stored_order() {
	let state = SerializedShaderState {
		tags: TagMap {
			tags: vec![("LightMode".to_owned(), "ForwardBase".to_owned()), ("Queue".to_owned(), "Geometry".to_owned())],
		},
		..SerializedShaderState::default()
	};
	assert_eq!(body(&state), "\t\t\tTags { \"LightMode\" = \"ForwardBase\" \"Queue\" = \"Geometry\" }\n");
}

#[test]
fn quoted_strings_escape_quotes_and_backslashes() {
	let state = SerializedShaderState {
		name: "Say \"hi\"".to_owned(),
		tags: TagMap {
			tags: vec![("Path".to_owned(), "C:\\shaders\\\"x\"".to_owned())],
		},
		..SerializedShaderState::default()
	};
	assert_eq!(
		body(&state),
		"\t\t\tName \"Say \\\"hi\\\"\"\n\t\t\tTags { \"Path\" = \"C:\\\\shaders\\\\\\\"x\\\"\" }\n"
	);
}

#[test]
fn blend_lines_only_show_non_default_parts() {
	let mut state = SerializedShaderState::default();
	state.rt_blend[0].src_blend = value(BlendMode::SrcAlpha as i32);
	state.rt_blend[0].dest_blend = value(BlendMode::OneMinusSrcAlpha as i32);
	assert_eq!(body(&state), "\t\t\tBlend SrcAlpha OneMinusSrcAlpha\n");

	state.rt_blend[0].src_blend_alpha = value(BlendMode::Zero as i32);
	state.rt_blend[0].blend_op = value(BlendOp::Max as i32);
	state.rt_blend[0].col_mask = value(ColorMask(8 | 4 | 2).0 as i32);
	assert_eq!(
		body(&state),
		"\t\t\tBlend SrcAlpha OneMinusSrcAlpha, Zero Zero\n\t\t\tBlendOp Max\n\t\t\tColorMask RGB\n"
	);
}

#[test]
fn separate_blending_numbers_every_target() {
	let mut state = SerializedShaderState::default();
	state.rt_blend[1].blend_op_alpha = value(BlendOp::Sub as i32);
	assert_eq!(body(&state), "\t\t\tBlendOp 1 Add, Sub\n");

	state.rt_blend[0].col_mask = value(0);
	assert_eq!(body(&state), "\t\t\tColorMask 0\n\t\t\tBlendOp 1 Add, Sub\n");

	state.rt_separate_blend = true;
	assert_eq!(body(&state), "\t\t\tColorMask 0 0\n\t\t\tBlendOp 1 Add, Sub\n");
}

#[test]
fn stencil_group_lists_changed_members() {
	let mut state = SerializedShaderState::default();
	state.stencil_ref = value(2);
	state.stencil_op.comp = value(CompareFunction::Equal as i32);
	state.stencil_op_back.pass = value(StencilOp::Replace as i32);
	assert_eq!(
		body(&state),
		"\t\t\tStencil {\n\t\t\t\tRef 2\n\t\t\t\tComp Equal\n\t\t\t\tPassBack Replace\n\t\t\t}\n"
	);

	let state = SerializedShaderState {
		stencil_write_mask: value(15),
		..SerializedShaderState::default()
	};
	assert_eq!(body(&state), "\t\t\tStencil {\n\t\t\t\tWriteMask 15\n\t\t\t}\n");
}

#[test]
fn fog_group_lists_changed_members() {
	let mut state = SerializedShaderState::default();
	state.fog_mode = 1;
	state.fog_color.x = FloatValue::new(0.5);
	state.fog_color.w = FloatValue::new(1.0);
	state.fog_density = FloatValue::new(0.25);
	state.fog_end = FloatValue::new(100.0);
	assert_eq!(
		body(&state),
		"\t\t\tFog {\n\t\t\t\tMode Linear\n\t\t\t\tColor (0.5,0,0,1)\n\t\t\t\tDensity 0.25\n\t\t\t\tRange 0, 100\n\t\t\t}\n"
	);

	let state = SerializedShaderState {
		fog_mode: 0,
		..SerializedShaderState::default()
	};
	assert_eq!(body(&state), "\t\t\tFog {\n\t\t\t\tMode Off\n\t\t\t}\n");
}

#[test]
fn unknown_keywords_fall_back_to_numbers() {
	assert_eq!(keyword::<CompareFunction>(4), "LEqual");
	assert_eq!(keyword::<CompareFunction>(42), "42");

	let mut state = SerializedShaderState::default();
	state.culling = value(7);
	assert_eq!(body(&state), "\t\t\tCull 7\n");
}

#[test]
fn z_clip_is_only_stored_from_2017_2() {
	let older = Version::new(2017, 1, 0);
	let newer = Version::new(2017, 2, 0);
	let state = SerializedShaderState::default();

	let old_bytes = encode(&state, older);
	let new_bytes = encode(&state, newer);
	assert_eq!(new_bytes.len() - old_bytes.len(), 8);

	assert_eq!(decode(&old_bytes, older).z_clip, None);
	assert_eq!(decode(&new_bytes, newer).z_clip, Some(value(1)));
}

#[test]
fn populated_state_round_trips() {
	let mut state = SerializedShaderState {
		name: "SHADOWCASTER".to_owned(),
		rt_separate_blend: true,
		z_clip: Some(value(0)),
		gpu_program_id: 9041,
		lod: 300,
		lighting: true,
		fog_mode: 2,
		tags: TagMap {
			tags: vec![("LightMode".to_owned(), "ShadowCaster".to_owned())],
		},
		..SerializedShaderState::default()
	};
	state.rt_blend[3] = RtBlendState {
		src_blend: FloatValue {
			val: 5.0,
			name: "_SrcBlend".to_owned(),
		},
		..RtBlendState::default()
	};
	state.fog_color.name = "_FogColor".to_owned();

	let bytes = encode(&state, Version::EXPORT_REFERENCE);
	let decoded = decode(&bytes, Version::EXPORT_REFERENCE);
	assert_eq!(decoded, state);
	assert_eq!(decoded.export_block(&ctx()), state.export_block(&ctx()));
}
