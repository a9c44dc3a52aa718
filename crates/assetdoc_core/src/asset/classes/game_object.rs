use std::any::Any;

use crate::asset::{
	AssetObject, AssetReader, AssetWriter, ClassId, Decode, Encode, ExportContext, Mapping, Node, Object, PPtr, Result, SchemaVersion, Version,
};

/// One entry of a scene node's component list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentPair {
	/// Explicit class id, stored only before 5.5.
	pub class_id: Option<ClassId>,
	/// Component reference.
	pub component: PPtr<Object>,
}

impl ComponentPair {
	/// Before 5.5 each entry stores the component class id ahead of the reference.
	pub fn is_read_class_id(version: Version) -> bool {
		version.is_less(Version::new(5, 5, 0))
	}

	/// Entry for a component reference without an explicit class id.
	pub fn new(component: PPtr<Object>) -> Self {
		Self { class_id: None, component }
	}

	fn export(&self) -> Node {
		let mut mapping = Mapping::new();
		mapping.insert("component", self.component.export());
		Node::Mapping(mapping)
	}
}

impl Decode for ComponentPair {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		let class_id = if Self::is_read_class_id(reader.version()) {
			Some(ClassId(reader.read_i32()?))
		} else {
			None
		};
		let component = PPtr::decode(reader)?;
		Ok(Self { class_id, component })
	}
}

impl Encode for ComponentPair {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		if Self::is_read_class_id(writer.version()) {
			writer.write_i32(self.class_id.unwrap_or(ClassId::COMPONENT).0);
		}
		self.component.encode(writer)
	}
}

/// Scene node: named container of components.
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
	/// Component list in stored order.
	pub components: Vec<ComponentPair>,
	/// Layer index.
	pub layer: i32,
	/// Node name.
	pub name: String,
	/// Tag index.
	pub tag: u16,
	/// Stored activity flag.
	pub is_active: bool,
}

impl GameObject {
	/// Before 4.0 the stored activity flag is always false and carries no meaning.
	pub fn is_always_deactivated(version: Version) -> bool {
		version.is_less(Version::new(4, 0, 0))
	}

	/// Export schema version of the mapping form.
	///
	/// Only the 2017.3 value is known, so every format version gets it provisionally.
	pub fn serialized_version(_version: Version) -> SchemaVersion {
		SchemaVersion::Provisional {
			value: 5,
			reference: Version::EXPORT_REFERENCE,
		}
	}

	/// Activity flag as exported for `version`.
	pub fn export_is_active(&self, version: Version) -> bool {
		Self::is_always_deactivated(version) || self.is_active
	}
}

impl Decode for GameObject {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		let components = reader.read_array::<ComponentPair>()?;
		let layer = reader.read_i32()?;
		let name = reader.read_aligned_string()?;
		let tag = reader.read_u16()?;
		let is_active = reader.read_bool()?;
		reader.align4()?;
		Ok(Self {
			components,
			layer,
			name,
			tag,
			is_active,
		})
	}
}

impl Encode for GameObject {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		writer.write_array(&self.components)?;
		writer.write_i32(self.layer);
		writer.write_aligned_string(&self.name)?;
		writer.write_u16(self.tag);
		writer.write_bool(self.is_active);
		writer.align4();
		Ok(())
	}
}

impl AssetObject for GameObject {
	fn kind(&self) -> &'static str {
		"GameObject"
	}

	fn name(&self) -> Option<&str> {
		Some(&self.name)
	}

	fn references(&self) -> Box<dyn Iterator<Item = PPtr<Object>> + '_> {
		Box::new(self.components.iter().map(|pair| pair.component))
	}

	fn export_mapping(&self, ctx: &ExportContext) -> Result<Mapping> {
		let serialized_version = ctx.schema_version("GameObject", Self::serialized_version(ctx.version))?;

		let mut node = Mapping::new();
		node.insert("m_ObjectHideFlags", 0);
		node.insert("m_PrefabParentObject", PPtr::<Object>::null().export());
		node.insert("m_PrefabInternal", PPtr::<Object>::null().export());
		node.insert("serializedVersion", serialized_version);
		node.insert("m_Component", Node::Sequence(self.components.iter().map(ComponentPair::export).collect()));
		node.insert("m_Layer", self.layer);
		node.insert("m_Name", self.name.as_str());
		// Tag names live in the project settings, which are not part of the object.
		node.insert("m_TagString", "Untagged");
		node.insert("m_Icon", PPtr::<Object>::null().export());
		node.insert("m_NavMeshLayer", 0);
		node.insert("m_StaticEditorFlags", 0);
		node.insert("m_IsActive", self.export_is_active(ctx.version));
		Ok(node)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
