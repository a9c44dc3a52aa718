use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Value in an ordered export tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// Integer scalar.
	Int(i64),
	/// Floating-point scalar.
	Float(f32),
	/// Boolean scalar.
	Bool(bool),
	/// String scalar.
	Str(String),
	/// Ordered sequence.
	Sequence(Vec<Node>),
	/// Ordered mapping.
	Mapping(Mapping),
}

impl Node {
	/// Return the integer payload, if this is an integer scalar.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Self::Int(value) => Some(*value),
			_ => None,
		}
	}

	/// Return the string payload, if this is a string scalar.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(value) => Some(value),
			_ => None,
		}
	}

	/// Return the boolean payload, if this is a boolean scalar.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// Return the items, if this is a sequence.
	pub fn as_sequence(&self) -> Option<&[Node]> {
		match self {
			Self::Sequence(items) => Some(items),
			_ => None,
		}
	}

	/// Return the mapping, if this is a mapping.
	pub fn as_mapping(&self) -> Option<&Mapping> {
		match self {
			Self::Mapping(mapping) => Some(mapping),
			_ => None,
		}
	}
}

macro_rules! int_node {
	($($ty:ty),*) => {
		$(impl From<$ty> for Node {
			fn from(value: $ty) -> Self {
				Self::Int(i64::from(value))
			}
		})*
	};
}

int_node!(u8, u16, i32, u32, i64);

impl From<f32> for Node {
	fn from(value: f32) -> Self {
		Self::Float(value)
	}
}

impl From<bool> for Node {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<&str> for Node {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for Node {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<Mapping> for Node {
	fn from(value: Mapping) -> Self {
		Self::Mapping(value)
	}
}

impl From<Vec<Node>> for Node {
	fn from(value: Vec<Node>) -> Self {
		Self::Sequence(value)
	}
}

/// Insertion-ordered key/value mapping.
///
/// Flow mappings render on one line (`{a: 1, b: 2}`) and are used for references.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
	entries: Vec<(String, Node)>,
	flow: bool,
}

impl Mapping {
	/// Empty block mapping.
	pub fn new() -> Self {
		Self::default()
	}

	/// Empty flow mapping.
	pub fn flow() -> Self {
		Self {
			entries: Vec::new(),
			flow: true,
		}
	}

	/// Return whether this mapping renders in flow style.
	pub fn is_flow(&self) -> bool {
		self.flow
	}

	/// Append an entry; later lookups see the first entry for a repeated key.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Node>) {
		self.entries.push((key.into(), value.into()));
	}

	/// Look up a value by key.
	pub fn get(&self, key: &str) -> Option<&Node> {
		self.entries.iter().find(|(name, _)| name == key).map(|(_, value)| value)
	}

	/// Entries in insertion order.
	pub fn entries(&self) -> &[(String, Node)] {
		&self.entries
	}

	/// Keys in insertion order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|(key, _)| key.as_str())
	}

	/// Entry count.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Return whether the mapping has no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

impl Serialize for Node {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Int(value) => serializer.serialize_i64(*value),
			Self::Float(value) => serializer.serialize_f32(*value),
			Self::Bool(value) => serializer.serialize_bool(*value),
			Self::Str(value) => serializer.serialize_str(value),
			Self::Sequence(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Mapping(mapping) => mapping.serialize(serializer),
		}
	}
}

impl Serialize for Mapping {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (key, value) in &self.entries {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}
