mod render;

use crate::asset::{AssetReader, AssetWriter, BlockWriter, Decode, Encode, ExportContext, Result, Version, format_float};

pub use render::{BlendMode, BlendOp, ColorMask, CompareFunction, Cull, FogMode, RenderKeyword, StencilOp, Toggle, keyword};

/// Float render-state value with its property-binding name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FloatValue {
	/// Literal value.
	pub val: f32,
	/// Bound property name (empty when literal).
	pub name: String,
}

impl FloatValue {
	/// Literal value with no property binding.
	pub fn new(val: f32) -> Self {
		Self { val, name: String::new() }
	}

	/// Value truncated to the enum or integer it encodes.
	pub fn as_i32(&self) -> i32 {
		self.val as i32
	}

	/// Return whether the value is zero.
	pub fn is_zero(&self) -> bool {
		self.val == 0.0
	}

	/// Return whether the value is the 8-bit maximum.
	pub fn is_max(&self) -> bool {
		self.val == 255.0
	}
}

impl Decode for FloatValue {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		let val = reader.read_f32()?;
		let name = reader.read_aligned_string()?;
		Ok(Self { val, name })
	}
}

impl Encode for FloatValue {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		writer.write_f32(self.val);
		writer.write_aligned_string(&self.name)
	}
}

/// Four float values plus the vector's own binding name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorValue {
	/// X component.
	pub x: FloatValue,
	/// Y component.
	pub y: FloatValue,
	/// Z component.
	pub z: FloatValue,
	/// W component.
	pub w: FloatValue,
	/// Bound property name.
	pub name: String,
}

impl VectorValue {
	/// Return whether every component is zero.
	pub fn is_zero(&self) -> bool {
		self.x.is_zero() && self.y.is_zero() && self.z.is_zero() && self.w.is_zero()
	}
}

impl Decode for VectorValue {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		Ok(Self {
			x: FloatValue::decode(reader)?,
			y: FloatValue::decode(reader)?,
			z: FloatValue::decode(reader)?,
			w: FloatValue::decode(reader)?,
			name: reader.read_aligned_string()?,
		})
	}
}

impl Encode for VectorValue {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		self.x.encode(writer)?;
		self.y.encode(writer)?;
		self.z.encode(writer)?;
		self.w.encode(writer)?;
		writer.write_aligned_string(&self.name)
	}
}

/// Blend state of one render target.
#[derive(Debug, Clone, PartialEq)]
pub struct RtBlendState {
	/// Source color factor.
	pub src_blend: FloatValue,
	/// Destination color factor.
	pub dest_blend: FloatValue,
	/// Source alpha factor.
	pub src_blend_alpha: FloatValue,
	/// Destination alpha factor.
	pub dest_blend_alpha: FloatValue,
	/// Color blend equation.
	pub blend_op: FloatValue,
	/// Alpha blend equation.
	pub blend_op_alpha: FloatValue,
	/// Channel write mask.
	pub col_mask: FloatValue,
}

impl Default for RtBlendState {
	fn default() -> Self {
		Self {
			src_blend: FloatValue::new(BlendMode::One as i32 as f32),
			dest_blend: FloatValue::new(BlendMode::Zero as i32 as f32),
			src_blend_alpha: FloatValue::new(BlendMode::One as i32 as f32),
			dest_blend_alpha: FloatValue::new(BlendMode::Zero as i32 as f32),
			blend_op: FloatValue::new(BlendOp::Add as i32 as f32),
			blend_op_alpha: FloatValue::new(BlendOp::Add as i32 as f32),
			col_mask: FloatValue::new(f32::from(ColorMask::RGBA.0)),
		}
	}
}

impl RtBlendState {
	/// Return whether the alpha factors are `One Zero`.
	pub fn is_alpha_blend_default(&self) -> bool {
		self.src_blend_alpha.as_i32() == BlendMode::One as i32 && self.dest_blend_alpha.as_i32() == BlendMode::Zero as i32
	}

	/// Return whether every factor is `One Zero`.
	pub fn is_blend_default(&self) -> bool {
		self.src_blend.as_i32() == BlendMode::One as i32 && self.dest_blend.as_i32() == BlendMode::Zero as i32 && self.is_alpha_blend_default()
	}

	/// Return whether both equations are `Add`.
	pub fn is_blend_op_default(&self) -> bool {
		self.blend_op.as_i32() == BlendOp::Add as i32 && self.blend_op_alpha.as_i32() == BlendOp::Add as i32
	}

	/// Write mask as channel letters.
	pub fn color_mask(&self) -> ColorMask {
		ColorMask(self.col_mask.as_i32() as u8)
	}

	fn export(&self, out: &mut BlockWriter, index: Option<usize>) {
		let target = index.map(|index| format!("{index} ")).unwrap_or_default();

		if !self.is_blend_default() {
			let mut line = format!(
				"Blend {target}{} {}",
				keyword::<BlendMode>(self.src_blend.as_i32()),
				keyword::<BlendMode>(self.dest_blend.as_i32())
			);
			if !self.is_alpha_blend_default() {
				line.push_str(&format!(
					", {} {}",
					keyword::<BlendMode>(self.src_blend_alpha.as_i32()),
					keyword::<BlendMode>(self.dest_blend_alpha.as_i32())
				));
			}
			out.line(format_args!("{line}"));
		}

		if !self.is_blend_op_default() {
			let mut line = format!("BlendOp {target}{}", keyword::<BlendOp>(self.blend_op.as_i32()));
			if self.blend_op_alpha.as_i32() != BlendOp::Add as i32 {
				line.push_str(&format!(", {}", keyword::<BlendOp>(self.blend_op_alpha.as_i32())));
			}
			out.line(format_args!("{line}"));
		}

		if !self.color_mask().is_rgba() {
			out.line(format_args!("ColorMask {target}{}", self.color_mask()));
		}
	}
}

impl Decode for RtBlendState {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		Ok(Self {
			src_blend: FloatValue::decode(reader)?,
			dest_blend: FloatValue::decode(reader)?,
			src_blend_alpha: FloatValue::decode(reader)?,
			dest_blend_alpha: FloatValue::decode(reader)?,
			blend_op: FloatValue::decode(reader)?,
			blend_op_alpha: FloatValue::decode(reader)?,
			col_mask: FloatValue::decode(reader)?,
		})
	}
}

impl Encode for RtBlendState {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		self.src_blend.encode(writer)?;
		self.dest_blend.encode(writer)?;
		self.src_blend_alpha.encode(writer)?;
		self.dest_blend_alpha.encode(writer)?;
		self.blend_op.encode(writer)?;
		self.blend_op_alpha.encode(writer)?;
		self.col_mask.encode(writer)
	}
}

/// Which faces a stencil operation set applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StencilFace {
	/// Both faces.
	Base,
	/// Front faces.
	Front,
	/// Back faces.
	Back,
}

impl StencilFace {
	/// Keyword suffix (`CompFront`, `PassBack`, ...).
	pub fn suffix(self) -> &'static str {
		match self {
			Self::Base => "",
			Self::Front => "Front",
			Self::Back => "Back",
		}
	}
}

/// Stencil operations for one face set.
#[derive(Debug, Clone, PartialEq)]
pub struct StencilOpState {
	/// Operation when stencil and depth pass.
	pub pass: FloatValue,
	/// Operation when stencil fails.
	pub fail: FloatValue,
	/// Operation when stencil passes and depth fails.
	pub zfail: FloatValue,
	/// Stencil comparison.
	pub comp: FloatValue,
}

impl Default for StencilOpState {
	fn default() -> Self {
		Self {
			pass: FloatValue::new(StencilOp::Keep as i32 as f32),
			fail: FloatValue::new(StencilOp::Keep as i32 as f32),
			zfail: FloatValue::new(StencilOp::Keep as i32 as f32),
			comp: FloatValue::new(CompareFunction::Always as i32 as f32),
		}
	}
}

impl StencilOpState {
	fn is_keep(value: &FloatValue) -> bool {
		value.as_i32() == StencilOp::Keep as i32
	}

	fn is_always(&self) -> bool {
		self.comp.as_i32() == CompareFunction::Always as i32
	}

	/// Return whether every member has its default value.
	pub fn is_default(&self) -> bool {
		Self::is_keep(&self.pass) && Self::is_keep(&self.fail) && Self::is_keep(&self.zfail) && self.is_always()
	}

	fn export(&self, out: &mut BlockWriter, face: StencilFace) {
		let suffix = face.suffix();
		if !self.is_always() {
			out.line(format_args!("Comp{suffix} {}", keyword::<CompareFunction>(self.comp.as_i32())));
		}
		if !Self::is_keep(&self.pass) {
			out.line(format_args!("Pass{suffix} {}", keyword::<StencilOp>(self.pass.as_i32())));
		}
		if !Self::is_keep(&self.fail) {
			out.line(format_args!("Fail{suffix} {}", keyword::<StencilOp>(self.fail.as_i32())));
		}
		if !Self::is_keep(&self.zfail) {
			out.line(format_args!("ZFail{suffix} {}", keyword::<StencilOp>(self.zfail.as_i32())));
		}
	}
}

impl Decode for StencilOpState {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		Ok(Self {
			pass: FloatValue::decode(reader)?,
			fail: FloatValue::decode(reader)?,
			zfail: FloatValue::decode(reader)?,
			comp: FloatValue::decode(reader)?,
		})
	}
}

impl Encode for StencilOpState {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		self.pass.encode(writer)?;
		self.fail.encode(writer)?;
		self.zfail.encode(writer)?;
		self.comp.encode(writer)
	}
}

/// Double-quoted ShaderLab string literal.
fn quoted(value: &str) -> String {
	let mut out = String::with_capacity(value.len() + 2);
	out.push('"');
	for ch in value.chars() {
		if matches!(ch, '"' | '\\') {
			out.push('\\');
		}
		out.push(ch);
	}
	out.push('"');
	out
}

/// Pass tags in stored order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TagMap {
	/// `(key, value)` pairs.
	pub tags: Vec<(String, String)>,
}

impl TagMap {
	fn export(&self, out: &mut BlockWriter) {
		if self.tags.is_empty() {
			return;
		}
		let pairs: String = self.tags.iter().map(|(key, value)| format!("{} = {} ", quoted(key), quoted(value))).collect();
		out.line(format_args!("Tags {{ {pairs}}}"));
	}
}

impl Decode for TagMap {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		let tags = reader.read_array_with(|reader| Ok((reader.read_aligned_string()?, reader.read_aligned_string()?)))?;
		Ok(Self { tags })
	}
}

impl Encode for TagMap {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		writer.write_array_with(&self.tags, |writer, (key, value)| {
			writer.write_aligned_string(key)?;
			writer.write_aligned_string(value)
		})
	}
}

/// Fixed-function render state of one shader pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SerializedShaderState {
	/// Pass name.
	pub name: String,
	/// Per-target blend state.
	pub rt_blend: [RtBlendState; 8],
	/// Targets blend independently.
	pub rt_separate_blend: bool,
	/// Depth clip toggle; only stored from 2017.2.
	pub z_clip: Option<FloatValue>,
	/// Depth comparison.
	pub z_test: FloatValue,
	/// Depth write toggle.
	pub z_write: FloatValue,
	/// Face culling.
	pub culling: FloatValue,
	/// Depth offset factor.
	pub offset_factor: FloatValue,
	/// Depth offset units.
	pub offset_units: FloatValue,
	/// Alpha-to-coverage toggle.
	pub alpha_to_mask: FloatValue,
	/// Stencil operations for both faces.
	pub stencil_op: StencilOpState,
	/// Stencil operations for front faces.
	pub stencil_op_front: StencilOpState,
	/// Stencil operations for back faces.
	pub stencil_op_back: StencilOpState,
	/// Stencil read mask.
	pub stencil_read_mask: FloatValue,
	/// Stencil write mask.
	pub stencil_write_mask: FloatValue,
	/// Stencil reference value.
	pub stencil_ref: FloatValue,
	/// Linear fog start.
	pub fog_start: FloatValue,
	/// Linear fog end.
	pub fog_end: FloatValue,
	/// Exponential fog density.
	pub fog_density: FloatValue,
	/// Fog color.
	pub fog_color: VectorValue,
	/// Raw fog mode.
	pub fog_mode: i32,
	/// Compiled program identifier.
	pub gpu_program_id: i32,
	/// Pass tags.
	pub tags: TagMap,
	/// Level of detail.
	pub lod: i32,
	/// Fixed-function lighting toggle.
	pub lighting: bool,
}

impl Default for SerializedShaderState {
	fn default() -> Self {
		Self {
			name: String::new(),
			rt_blend: Default::default(),
			rt_separate_blend: false,
			z_clip: None,
			z_test: FloatValue::new(CompareFunction::LEqual as i32 as f32),
			z_write: FloatValue::new(Toggle::On as i32 as f32),
			culling: FloatValue::new(Cull::Back as i32 as f32),
			offset_factor: FloatValue::default(),
			offset_units: FloatValue::default(),
			alpha_to_mask: FloatValue::default(),
			stencil_op: StencilOpState::default(),
			stencil_op_front: StencilOpState::default(),
			stencil_op_back: StencilOpState::default(),
			stencil_read_mask: FloatValue::new(255.0),
			stencil_write_mask: FloatValue::new(255.0),
			stencil_ref: FloatValue::default(),
			fog_start: FloatValue::default(),
			fog_end: FloatValue::default(),
			fog_density: FloatValue::default(),
			fog_color: VectorValue::default(),
			fog_mode: FogMode::Unknown as i32,
			gpu_program_id: 0,
			tags: TagMap::default(),
			lod: 0,
			lighting: false,
		}
	}
}

impl SerializedShaderState {
	/// `ZClip` is stored from 2017.2.
	pub fn is_read_z_clip(version: Version) -> bool {
		version.is_greater_equal(Version::new(2017, 2, 0))
	}

	fn is_stencil_default(&self) -> bool {
		self.stencil_ref.is_zero()
			&& self.stencil_read_mask.is_max()
			&& self.stencil_write_mask.is_max()
			&& self.stencil_op.is_default()
			&& self.stencil_op_front.is_default()
			&& self.stencil_op_back.is_default()
	}

	fn is_fog_mode_unknown(&self) -> bool {
		self.fog_mode == FogMode::Unknown as i32
	}

	fn is_fog_default(&self) -> bool {
		self.is_fog_mode_unknown() && self.fog_color.is_zero() && self.fog_density.is_zero() && self.fog_start.is_zero() && self.fog_end.is_zero()
	}

	/// Render the pass state as ShaderLab block text.
	///
	/// Every line except `GpuProgramID` is written only when its value differs
	/// from the default; `Stencil` and `Fog` groups appear when any member does.
	pub fn export_block(&self, ctx: &ExportContext) -> String {
		let mut out = BlockWriter::new(ctx.options.block_indent);

		if !self.name.is_empty() {
			out.line(format_args!("Name {}", quoted(&self.name)));
		}
		if self.lod != 0 {
			out.line(format_args!("LOD {}", self.lod));
		}
		self.tags.export(&mut out);

		for (index, blend) in self.rt_blend.iter().enumerate() {
			let target = if index == 0 && !self.rt_separate_blend { None } else { Some(index) };
			blend.export(&mut out, target);
		}

		if self.alpha_to_mask.val > 0.0 {
			out.line(format_args!("AlphaToMask On"));
		}
		if let Some(z_clip) = self.z_clip.as_ref().filter(|z_clip| z_clip.as_i32() != Toggle::On as i32) {
			out.line(format_args!("ZClip {}", keyword::<Toggle>(z_clip.as_i32())));
		}
		if self.z_test.as_i32() != CompareFunction::LEqual as i32 {
			out.line(format_args!("ZTest {}", keyword::<CompareFunction>(self.z_test.as_i32())));
		}
		if self.z_write.as_i32() != Toggle::On as i32 {
			out.line(format_args!("ZWrite {}", keyword::<Toggle>(self.z_write.as_i32())));
		}
		if self.culling.as_i32() != Cull::Back as i32 {
			out.line(format_args!("Cull {}", keyword::<Cull>(self.culling.as_i32())));
		}
		if !self.offset_factor.is_zero() || !self.offset_units.is_zero() {
			out.line(format_args!("Offset {}, {}", format_float(self.offset_factor.val), format_float(self.offset_units.val)));
		}

		if !self.is_stencil_default() {
			out.open_group("Stencil");
			if !self.stencil_ref.is_zero() {
				out.line(format_args!("Ref {}", format_float(self.stencil_ref.val)));
			}
			if !self.stencil_read_mask.is_max() {
				out.line(format_args!("ReadMask {}", format_float(self.stencil_read_mask.val)));
			}
			if !self.stencil_write_mask.is_max() {
				out.line(format_args!("WriteMask {}", format_float(self.stencil_write_mask.val)));
			}
			self.stencil_op.export(&mut out, StencilFace::Base);
			self.stencil_op_front.export(&mut out, StencilFace::Front);
			self.stencil_op_back.export(&mut out, StencilFace::Back);
			out.close_group();
		}

		if !self.is_fog_default() {
			out.open_group("Fog");
			if !self.is_fog_mode_unknown() {
				out.line(format_args!("Mode {}", keyword::<FogMode>(self.fog_mode)));
			}
			if !self.fog_color.is_zero() {
				let color = &self.fog_color;
				out.line(format_args!(
					"Color ({},{},{},{})",
					format_float(color.x.val),
					format_float(color.y.val),
					format_float(color.z.val),
					format_float(color.w.val)
				));
			}
			if !self.fog_density.is_zero() {
				out.line(format_args!("Density {}", format_float(self.fog_density.val)));
			}
			if !self.fog_start.is_zero() || !self.fog_end.is_zero() {
				out.line(format_args!("Range {}, {}", format_float(self.fog_start.val), format_float(self.fog_end.val)));
			}
			out.close_group();
		}

		if self.lighting {
			out.line(format_args!("Lighting On"));
		}
		out.line(format_args!("GpuProgramID {}", self.gpu_program_id));
		out.finish()
	}
}

impl Decode for SerializedShaderState {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		let name = reader.read_aligned_string()?;
		let mut rt_blend: [RtBlendState; 8] = Default::default();
		for target in &mut rt_blend {
			*target = RtBlendState::decode(reader)?;
		}
		let rt_separate_blend = reader.read_bool()?;
		reader.align4()?;

		let z_clip = if Self::is_read_z_clip(reader.version()) {
			Some(FloatValue::decode(reader)?)
		} else {
			None
		};

		Ok(Self {
			name,
			rt_blend,
			rt_separate_blend,
			z_clip,
			z_test: FloatValue::decode(reader)?,
			z_write: FloatValue::decode(reader)?,
			culling: FloatValue::decode(reader)?,
			offset_factor: FloatValue::decode(reader)?,
			offset_units: FloatValue::decode(reader)?,
			alpha_to_mask: FloatValue::decode(reader)?,
			stencil_op: StencilOpState::decode(reader)?,
			stencil_op_front: StencilOpState::decode(reader)?,
			stencil_op_back: StencilOpState::decode(reader)?,
			stencil_read_mask: FloatValue::decode(reader)?,
			stencil_write_mask: FloatValue::decode(reader)?,
			stencil_ref: FloatValue::decode(reader)?,
			fog_start: FloatValue::decode(reader)?,
			fog_end: FloatValue::decode(reader)?,
			fog_density: FloatValue::decode(reader)?,
			fog_color: VectorValue::decode(reader)?,
			fog_mode: reader.read_i32()?,
			gpu_program_id: reader.read_i32()?,
			tags: TagMap::decode(reader)?,
			lod: reader.read_i32()?,
			lighting: {
				let lighting = reader.read_bool()?;
				reader.align4()?;
				lighting
			},
		})
	}
}

impl Encode for SerializedShaderState {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		writer.write_aligned_string(&self.name)?;
		for target in &self.rt_blend {
			target.encode(writer)?;
		}
		writer.write_bool(self.rt_separate_blend);
		writer.align4();

		if Self::is_read_z_clip(writer.version()) {
			let z_clip = self.z_clip.clone().unwrap_or_else(|| FloatValue::new(Toggle::On as i32 as f32));
			z_clip.encode(writer)?;
		}
		self.z_test.encode(writer)?;
		self.z_write.encode(writer)?;
		self.culling.encode(writer)?;
		self.offset_factor.encode(writer)?;
		self.offset_units.encode(writer)?;
		self.alpha_to_mask.encode(writer)?;
		self.stencil_op.encode(writer)?;
		self.stencil_op_front.encode(writer)?;
		self.stencil_op_back.encode(writer)?;
		self.stencil_read_mask.encode(writer)?;
		self.stencil_write_mask.encode(writer)?;
		self.stencil_ref.encode(writer)?;
		self.fog_start.encode(writer)?;
		self.fog_end.encode(writer)?;
		self.fog_density.encode(writer)?;
		self.fog_color.encode(writer)?;
		writer.write_i32(self.fog_mode);
		writer.write_i32(self.gpu_program_id);
		self.tags.encode(writer)?;
		writer.write_i32(self.lod);
		writer.write_bool(self.lighting);
		writer.align4();
		Ok(())
	}
}

#[cfg(test)]
mod tests;
