use std::fmt;

/// Numeric type tag stored with every serialized object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ClassId(pub i32);

impl ClassId {
	/// Scene node.
	pub const GAME_OBJECT: ClassId = ClassId(1);
	/// Abstract component base.
	pub const COMPONENT: ClassId = ClassId(2);
	/// Spatial transform.
	pub const TRANSFORM: ClassId = ClassId(4);
	/// Mesh renderer component.
	pub const MESH_RENDERER: ClassId = ClassId(23);
	/// Mesh filter component.
	pub const MESH_FILTER: ClassId = ClassId(33);
	/// Shader asset.
	pub const SHADER: ClassId = ClassId(48);
	/// Rigid body component.
	pub const RIGIDBODY: ClassId = ClassId(54);
	/// Box collider component.
	pub const BOX_COLLIDER: ClassId = ClassId(65);
	/// Camera component.
	pub const CAMERA: ClassId = ClassId(20);
	/// Light component.
	pub const LIGHT: ClassId = ClassId(108);
	/// Script behaviour component.
	pub const MONO_BEHAVIOUR: ClassId = ClassId(114);
	/// Skinned mesh renderer component.
	pub const SKINNED_MESH_RENDERER: ClassId = ClassId(137);
	/// UI rectangle transform.
	pub const RECT_TRANSFORM: ClassId = ClassId(224);

	/// Return `true` for transform-capable classes.
	pub fn is_transform(self) -> bool {
		self == Self::TRANSFORM || self == Self::RECT_TRANSFORM
	}

	/// Known class name, if any.
	pub fn name(self) -> Option<&'static str> {
		Some(match self {
			Self::GAME_OBJECT => "GameObject",
			Self::COMPONENT => "Component",
			Self::TRANSFORM => "Transform",
			Self::CAMERA => "Camera",
			Self::MESH_RENDERER => "MeshRenderer",
			Self::MESH_FILTER => "MeshFilter",
			Self::SHADER => "Shader",
			Self::RIGIDBODY => "Rigidbody",
			Self::BOX_COLLIDER => "BoxCollider",
			Self::LIGHT => "Light",
			Self::MONO_BEHAVIOUR => "MonoBehaviour",
			Self::SKINNED_MESH_RENDERER => "SkinnedMeshRenderer",
			Self::RECT_TRANSFORM => "RectTransform",
			_ => return None,
		})
	}
}

impl fmt::Display for ClassId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.name() {
			Some(name) => write!(f, "{}({name})", self.0),
			None => write!(f, "{}", self.0),
		}
	}
}
