use std::fmt;

/// Render-state enum stored as a numeric value and exported as a ShaderLab keyword.
pub trait RenderKeyword: Sized + Copy {
	/// Map a raw serialized value.
	fn from_raw(value: i32) -> Option<Self>;

	/// ShaderLab keyword.
	fn as_str(self) -> &'static str;
}

/// Keyword for `raw`, or the number itself when it names no variant.
pub fn keyword<K: RenderKeyword>(raw: i32) -> String {
	match K::from_raw(raw) {
		Some(value) => value.as_str().to_owned(),
		None => raw.to_string(),
	}
}

/// Depth and stencil comparison function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareFunction {
	/// Test disabled.
	Disabled = 0,
	/// Never pass.
	Never = 1,
	/// Pass when less.
	Less = 2,
	/// Pass when equal.
	Equal = 3,
	/// Pass when less or equal.
	LEqual = 4,
	/// Pass when greater.
	Greater = 5,
	/// Pass when not equal.
	NotEqual = 6,
	/// Pass when greater or equal.
	GEqual = 7,
	/// Always pass.
	Always = 8,
}

impl RenderKeyword for CompareFunction {
	fn from_raw(value: i32) -> Option<Self> {
		Some(match value {
			0 => Self::Disabled,
			1 => Self::Never,
			2 => Self::Less,
			3 => Self::Equal,
			4 => Self::LEqual,
			5 => Self::Greater,
			6 => Self::NotEqual,
			7 => Self::GEqual,
			8 => Self::Always,
			_ => return None,
		})
	}

	fn as_str(self) -> &'static str {
		match self {
			Self::Disabled => "Disabled",
			Self::Never => "Never",
			Self::Less => "Less",
			Self::Equal => "Equal",
			Self::LEqual => "LEqual",
			Self::Greater => "Greater",
			Self::NotEqual => "NotEqual",
			Self::GEqual => "GEqual",
			Self::Always => "Always",
		}
	}
}

/// Face culling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cull {
	/// No culling.
	Off = 0,
	/// Cull front faces.
	Front = 1,
	/// Cull back faces.
	Back = 2,
}

impl RenderKeyword for Cull {
	fn from_raw(value: i32) -> Option<Self> {
		Some(match value {
			0 => Self::Off,
			1 => Self::Front,
			2 => Self::Back,
			_ => return None,
		})
	}

	fn as_str(self) -> &'static str {
		match self {
			Self::Off => "Off",
			Self::Front => "Front",
			Self::Back => "Back",
		}
	}
}

/// Two-state toggle used by `ZWrite` and `ZClip`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
	/// Disabled.
	Off = 0,
	/// Enabled.
	On = 1,
}

impl RenderKeyword for Toggle {
	fn from_raw(value: i32) -> Option<Self> {
		Some(match value {
			0 => Self::Off,
			1 => Self::On,
			_ => return None,
		})
	}

	fn as_str(self) -> &'static str {
		match self {
			Self::Off => "Off",
			Self::On => "On",
		}
	}
}

/// Blend factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
	/// `0`.
	Zero = 0,
	/// `1`.
	One = 1,
	/// Destination color.
	DstColor = 2,
	/// Source color.
	SrcColor = 3,
	/// One minus destination color.
	OneMinusDstColor = 4,
	/// Source alpha.
	SrcAlpha = 5,
	/// One minus source color.
	OneMinusSrcColor = 6,
	/// Destination alpha.
	DstAlpha = 7,
	/// One minus destination alpha.
	OneMinusDstAlpha = 8,
	/// Saturated source alpha.
	SrcAlphaSaturate = 9,
	/// One minus source alpha.
	OneMinusSrcAlpha = 10,
}

impl RenderKeyword for BlendMode {
	fn from_raw(value: i32) -> Option<Self> {
		Some(match value {
			0 => Self::Zero,
			1 => Self::One,
			2 => Self::DstColor,
			3 => Self::SrcColor,
			4 => Self::OneMinusDstColor,
			5 => Self::SrcAlpha,
			6 => Self::OneMinusSrcColor,
			7 => Self::DstAlpha,
			8 => Self::OneMinusDstAlpha,
			9 => Self::SrcAlphaSaturate,
			10 => Self::OneMinusSrcAlpha,
			_ => return None,
		})
	}

	fn as_str(self) -> &'static str {
		match self {
			Self::Zero => "Zero",
			Self::One => "One",
			Self::DstColor => "DstColor",
			Self::SrcColor => "SrcColor",
			Self::OneMinusDstColor => "OneMinusDstColor",
			Self::SrcAlpha => "SrcAlpha",
			Self::OneMinusSrcColor => "OneMinusSrcColor",
			Self::DstAlpha => "DstAlpha",
			Self::OneMinusDstAlpha => "OneMinusDstAlpha",
			Self::SrcAlphaSaturate => "SrcAlphaSaturate",
			Self::OneMinusSrcAlpha => "OneMinusSrcAlpha",
		}
	}
}

/// Blend equation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendOp {
	/// `src + dst`.
	Add = 0,
	/// `src - dst`.
	Sub = 1,
	/// `dst - src`.
	RevSub = 2,
	/// Component-wise minimum.
	Min = 3,
	/// Component-wise maximum.
	Max = 4,
	/// Logical clear.
	LogicalClear = 5,
	/// Logical set.
	LogicalSet = 6,
	/// Logical copy.
	LogicalCopy = 7,
	/// Logical inverted copy.
	LogicalCopyInverted = 8,
	/// Logical no-op.
	LogicalNoop = 9,
	/// Logical invert.
	LogicalInvert = 10,
	/// Logical and.
	LogicalAnd = 11,
	/// Logical nand.
	LogicalNand = 12,
	/// Logical or.
	LogicalOr = 13,
	/// Logical nor.
	LogicalNor = 14,
	/// Logical xor.
	LogicalXor = 15,
	/// Logical equivalence.
	LogicalEquiv = 16,
	/// Logical reverse and.
	LogicalAndReverse = 17,
	/// Logical inverted and.
	LogicalAndInverted = 18,
	/// Logical reverse or.
	LogicalOrReverse = 19,
	/// Logical inverted or.
	LogicalOrInverted = 20,
}

impl RenderKeyword for BlendOp {
	fn from_raw(value: i32) -> Option<Self> {
		Some(match value {
			0 => Self::Add,
			1 => Self::Sub,
			2 => Self::RevSub,
			3 => Self::Min,
			4 => Self::Max,
			5 => Self::LogicalClear,
			6 => Self::LogicalSet,
			7 => Self::LogicalCopy,
			8 => Self::LogicalCopyInverted,
			9 => Self::LogicalNoop,
			10 => Self::LogicalInvert,
			11 => Self::LogicalAnd,
			12 => Self::LogicalNand,
			13 => Self::LogicalOr,
			14 => Self::LogicalNor,
			15 => Self::LogicalXor,
			16 => Self::LogicalEquiv,
			17 => Self::LogicalAndReverse,
			18 => Self::LogicalAndInverted,
			19 => Self::LogicalOrReverse,
			20 => Self::LogicalOrInverted,
			_ => return None,
		})
	}

	fn as_str(self) -> &'static str {
		match self {
			Self::Add => "Add",
			Self::Sub => "Sub",
			Self::RevSub => "RevSub",
			Self::Min => "Min",
			Self::Max => "Max",
			Self::LogicalClear => "LogicalClear",
			Self::LogicalSet => "LogicalSet",
			Self::LogicalCopy => "LogicalCopy",
			Self::LogicalCopyInverted => "LogicalCopyInverted",
			Self::LogicalNoop => "LogicalNoop",
			Self::LogicalInvert => "LogicalInvert",
			Self::LogicalAnd => "LogicalAnd",
			Self::LogicalNand => "LogicalNand",
			Self::LogicalOr => "LogicalOr",
			Self::LogicalNor => "LogicalNor",
			Self::LogicalXor => "LogicalXor",
			Self::LogicalEquiv => "LogicalEquiv",
			Self::LogicalAndReverse => "LogicalAndReverse",
			Self::LogicalAndInverted => "LogicalAndInverted",
			Self::LogicalOrReverse => "LogicalOrReverse",
			Self::LogicalOrInverted => "LogicalOrInverted",
		}
	}
}

/// Stencil buffer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StencilOp {
	/// Keep the current value.
	Keep = 0,
	/// Write zero.
	Zero = 1,
	/// Write the reference value.
	Replace = 2,
	/// Saturating increment.
	IncrSat = 3,
	/// Saturating decrement.
	DecrSat = 4,
	/// Bitwise invert.
	Invert = 5,
	/// Wrapping increment.
	IncrWrap = 6,
	/// Wrapping decrement.
	DecrWrap = 7,
}

impl RenderKeyword for StencilOp {
	fn from_raw(value: i32) -> Option<Self> {
		Some(match value {
			0 => Self::Keep,
			1 => Self::Zero,
			2 => Self::Replace,
			3 => Self::IncrSat,
			4 => Self::DecrSat,
			5 => Self::Invert,
			6 => Self::IncrWrap,
			7 => Self::DecrWrap,
			_ => return None,
		})
	}

	fn as_str(self) -> &'static str {
		match self {
			Self::Keep => "Keep",
			Self::Zero => "Zero",
			Self::Replace => "Replace",
			Self::IncrSat => "IncrSat",
			Self::DecrSat => "DecrSat",
			Self::Invert => "Invert",
			Self::IncrWrap => "IncrWrap",
			Self::DecrWrap => "DecrWrap",
		}
	}
}

/// Fixed-function fog mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FogMode {
	/// Not specified by the pass.
	Unknown = -1,
	/// Fog disabled.
	Disabled = 0,
	/// Linear falloff.
	Linear = 1,
	/// Exponential falloff.
	Exp = 2,
	/// Squared exponential falloff.
	Exp2 = 3,
}

impl RenderKeyword for FogMode {
	fn from_raw(value: i32) -> Option<Self> {
		Some(match value {
			-1 => Self::Unknown,
			0 => Self::Disabled,
			1 => Self::Linear,
			2 => Self::Exp,
			3 => Self::Exp2,
			_ => return None,
		})
	}

	fn as_str(self) -> &'static str {
		match self {
			Self::Unknown => "Unknown",
			Self::Disabled => "Off",
			Self::Linear => "Linear",
			Self::Exp => "Exp",
			Self::Exp2 => "Exp2",
		}
	}
}

/// Color channel write mask (`R` = 8, `G` = 4, `B` = 2, `A` = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorMask(pub u8);

impl ColorMask {
	/// All four channels.
	pub const RGBA: ColorMask = ColorMask(15);

	/// Return whether every channel is written.
	pub fn is_rgba(self) -> bool {
		self.0 & 15 == 15
	}
}

impl fmt::Display for ColorMask {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.0 & 15 == 0 {
			return f.write_str("0");
		}
		for (bit, letter) in [(8, 'R'), (4, 'G'), (2, 'B'), (1, 'A')] {
			if self.0 & bit != 0 {
				write!(f, "{letter}")?;
			}
		}
		Ok(())
	}
}
