use std::any::Any;

use crate::asset::{AssetObject, AssetReader, AssetWriter, Decode, Encode, ExportContext, GameObject, Mapping, Object, PPtr, Result};

/// Component without a dedicated schema: only the owning node reference is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Component {
	/// Owning scene node.
	pub game_object: PPtr<GameObject>,
}

impl Decode for Component {
	fn decode(reader: &mut AssetReader<'_>) -> Result<Self> {
		Ok(Self {
			game_object: PPtr::decode(reader)?,
		})
	}
}

impl Encode for Component {
	fn encode(&self, writer: &mut AssetWriter) -> Result<()> {
		self.game_object.encode(writer)
	}
}

impl AssetObject for Component {
	fn kind(&self) -> &'static str {
		"Component"
	}

	fn references(&self) -> Box<dyn Iterator<Item = PPtr<Object>> + '_> {
		Box::new(std::iter::once(self.game_object.erase()))
	}

	fn export_mapping(&self, _ctx: &ExportContext) -> Result<Mapping> {
		let mut node = Mapping::new();
		node.insert("m_ObjectHideFlags", 0);
		node.insert("m_PrefabParentObject", PPtr::<Object>::null().export());
		node.insert("m_PrefabInternal", PPtr::<Object>::null().export());
		node.insert("m_GameObject", self.game_object.export());
		Ok(node)
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}
