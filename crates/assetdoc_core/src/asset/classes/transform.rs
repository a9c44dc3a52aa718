use std::any::Any;

use crate::asset::{
	AssetObject, AssetReader, AssetWriter, Decode, Encode, ExportContext, GameObject, Mapping, Node, Object, PPtr, Result, SchemaVersion,
	Version,
};

/// Three-component float vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3f {
	/// X component.
	pub x: f32,
	/// Y component.
	pub y: f32,
	/// Z component.
	pub z: f32,
}

impl Vector3f {
	/// Vector with every component set to one.
	pub const ONE: Vector3f = Vector3f { x: 1.0, y: 1.0, z: 1.0 };

	fn export(&self) -> Node {
		let mut mapping = Mapping::flow();
		mapping.insert("x", self.x);
		mapping.insert("y", self.y);
		mapping.insert("z", self.z);
		Node::Mapping(mapping)
	}
}

impl Decode for Vector3f {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		Ok(Self {
			x: reader.read_f32()?,
			y: reader.read_f32()?,
			z: reader.read_f32()?,
		})
	}
}

impl Encode for Vector3f {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		writer.write_f32(self.x);
		writer.write_f32(self.y);
		writer.write_f32(self.z);
		Ok(())
	}
}

/// Rotation quaternion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternionf {
	/// X component.
	pub x: f32,
	/// Y component.
	pub y: f32,
	/// Z component.
	pub z: f32,
	/// W component.
	pub w: f32,
}

impl Default for Quaternionf {
	fn default() -> Self {
		Self::IDENTITY
	}
}

impl Quaternionf {
	/// No rotation.
	pub const IDENTITY: Quaternionf = Quaternionf { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

	fn export(&self) -> Node {
		let mut mapping = Mapping::flow();
		mapping.insert("x", self.x);
		mapping.insert("y", self.y);
		mapping.insert("z", self.z);
		mapping.insert("w", self.w);
		Node::Mapping(mapping)
	}
}

impl Decode for Quaternionf {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		Ok(Self {
			x: reader.read_f32()?,
			y: reader.read_f32()?,
			z: reader.read_f32()?,
			w: reader.read_f32()?,
		})
	}
}

impl Encode for Quaternionf {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		writer.write_f32(self.x);
		writer.write_f32(self.y);
		writer.write_f32(self.z);
		writer.write_f32(self.w);
		Ok(())
	}
}

/// Spatial transform of a scene node; also decodes the shared prefix of `RectTransform`.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
	/// Owning scene node.
	pub game_object: PPtr<GameObject>,
	/// Local rotation.
	pub local_rotation: Quaternionf,
	/// Local position.
	pub local_position: Vector3f,
	/// Local scale.
	pub local_scale: Vector3f,
	/// Child transforms in stored order.
	pub children: Vec<PPtr<Transform>>,
	/// Parent transform (null for a root).
	pub father: PPtr<Transform>,
}

impl Default for Transform {
	fn default() -> Self {
		Self {
			game_object: PPtr::null(),
			local_rotation: Quaternionf::IDENTITY,
			local_position: Vector3f::default(),
			local_scale: Vector3f::ONE,
			children: Vec::new(),
			father: PPtr::null(),
		}
	}
}

impl Transform {
	/// Export schema version of the mapping form.
	pub fn serialized_version(_version: Version) -> SchemaVersion {
		SchemaVersion::Exact(1)
	}
}

impl Decode for Transform {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		Ok(Self {
			game_object: PPtr::decode(reader)?,
			local_rotation: Quaternionf::decode(reader)?,
			local_position: Vector3f::decode(reader)?,
			local_scale: Vector3f::decode(reader)?,
			children: reader.read_array()?,
			father: PPtr::decode(reader)?,
		})
	}
}

impl Encode for Transform {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		self.game_object.encode(writer)?;
		self.local_rotation.encode(writer)?;
		self.local_position.encode(writer)?;
		self.local_scale.encode(writer)?;
		writer.write_array(&self.children)?;
		self.father.encode(writer)
	}
}

impl AssetObject for Transform {
	fn kind(&self) -> &'static str {
		"Transform"
	}

	fn references(&self) -> Box<dyn Iterator<Item = PPtr<Object>> + '_> {
		let owner = std::iter::once(self.game_object.erase());
		let children = self.children.iter().map(|child| child.erase());
		Box::new(owner.chain(children).chain(std::iter::once(self.father.erase())))
	}

	fn export_mapping(&self, ctx: &ExportContext) -> Result<Mapping> {
		let mut node = Mapping::new();
		node.insert("m_ObjectHideFlags", 0);
		node.insert("m_PrefabParentObject", PPtr::<Object>::null().export());
		node.insert("m_PrefabInternal", PPtr::<Object>::null().export());
		node.insert("m_GameObject", self.game_object.export());
		node.insert("serializedVersion", ctx.schema_version("Transform", Self::serialized_version(ctx.version))?);
		node.insert("m_LocalRotation", self.local_rotation.export());
		node.insert("m_LocalPosition", self.local_position.export());
		node.insert("m_LocalScale", self.local_scale.export());
		node.insert("m_Children", Node::Sequence(self.children.iter().map(PPtr::export).collect()));
		node.insert("m_Father", self.father.export());
		Ok(node)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
