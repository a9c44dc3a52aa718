use crate::asset::export::format_float;
use crate::asset::{ClassId, ExportContext, Mapping, Node, Object, Result};

const INDENT: &str = "  ";

/// Render one object as a tagged YAML document.
///
/// ```text
/// --- !u!1 &1
/// GameObject:
///   m_Layer: 0
/// ```
pub fn render_object(object: &Object, ctx: &ExportContext) -> Result<String> {
	let mapping = object.export_mapping(ctx)?;
	Ok(render_document(object.class_id(), object.path_id(), object.kind(), &mapping))
}

/// Render a mapping under a document header and a top-level kind key.
pub fn render_document(class_id: ClassId, path_id: i64, kind: &str, mapping: &Mapping) -> String {
	let mut out = format!("--- !u!{} &{path_id}\n{kind}:", class_id.0);
	if mapping.is_empty() {
		out.push_str(" {}\n");
		return out;
	}
	out.push('\n');
	write_mapping(&mut out, mapping, 1);
	out
}

/// Render a mapping as a bare YAML block (no document header).
pub fn render_mapping(mapping: &Mapping) -> String {
	let mut out = String::new();
	write_mapping(&mut out, mapping, 0);
	out
}

fn write_mapping(out: &mut String, mapping: &Mapping, depth: usize) {
	for (key, value) in mapping.entries() {
		push_indent(out, depth);
		out.push_str(key);
		out.push(':');
		match value {
			Node::Mapping(inner) if !inner.is_flow() && !inner.is_empty() => {
				out.push('\n');
				write_mapping(out, inner, depth + 1);
			}
			Node::Sequence(items) if !items.is_empty() => {
				out.push('\n');
				for item in items {
					write_item(out, item, depth);
				}
			}
			other => {
				out.push(' ');
				out.push_str(&inline(other));
				out.push('\n');
			}
		}
	}
}

fn write_item(out: &mut String, item: &Node, depth: usize) {
	match item {
		Node::Mapping(inner) if !inner.is_flow() && !inner.is_empty() => {
			// First entry shares the dash line; the rest align under it.
			let mut block = String::new();
			write_mapping(&mut block, inner, depth + 1);
			push_indent(out, depth);
			out.push_str("- ");
			out.push_str(&block[INDENT.len() * (depth + 1)..]);
		}
		other => {
			push_indent(out, depth);
			out.push_str("- ");
			out.push_str(&inline(other));
			out.push('\n');
		}
	}
}

fn inline(node: &Node) -> String {
	match node {
		Node::Int(value) => value.to_string(),
		Node::Float(value) => format_float(*value),
		Node::Bool(value) => if *value { "1" } else { "0" }.to_owned(),
		Node::Str(value) => scalar_string(value),
		Node::Sequence(items) => {
			let items: Vec<String> = items.iter().map(inline).collect();
			format!("[{}]", items.join(", "))
		}
		Node::Mapping(mapping) => {
			let entries: Vec<String> = mapping.entries().iter().map(|(key, value)| format!("{key}: {}", inline(value))).collect();
			format!("{{{}}}", entries.join(", "))
		}
	}
}

fn scalar_string(value: &str) -> String {
	if value.chars().any(char::is_control) {
		double_quoted(value)
	} else if needs_quotes(value) {
		format!("'{}'", value.replace('\'', "''"))
	} else {
		value.to_owned()
	}
}

// Single-quoted scalars cannot carry escapes.
fn double_quoted(value: &str) -> String {
	let mut out = String::with_capacity(value.len() + 2);
	out.push('"');
	for ch in value.chars() {
		match ch {
			'"' => out.push_str("\\\""),
			'\\' => out.push_str("\\\\"),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			'\0' => out.push_str("\\0"),
			ch if ch.is_control() => out.push_str(&format!("\\u{:04X}", u32::from(ch))),
			ch => out.push(ch),
		}
	}
	out.push('"');
	out
}

fn needs_quotes(value: &str) -> bool {
	if value.is_empty() {
		return false;
	}
	let first = value.as_bytes()[0];
	value.starts_with(' ')
		|| value.ends_with(' ')
		|| b"-?:,[]{}#&*!|>'\"%@`".contains(&first)
		|| value.ends_with(':')
		|| value.contains(": ")
		|| value.contains(" #")
}

fn push_indent(out: &mut String, depth: usize) {
	for _ in 0..depth {
		out.push_str(INDENT);
	}
}

#[cfg(test)]
mod tests {
	use super::{render_document, render_mapping};
	use crate::asset::{ClassId, Mapping, Node};

	fn reference(path_id: i64) -> Node {
		let mut mapping = Mapping::flow();
		mapping.insert("m_FileID", 0);
		mapping.insert("m_PathID", path_id);
		Node::Mapping(mapping)
	}

	#[test]
	fn document_header_carries_class_and_path_id() {
		let mut mapping = Mapping::new();
		mapping.insert("m_Layer", 5);
		let text = render_document(ClassId::GAME_OBJECT, 42, "GameObject", &mapping);
		assert_eq!(text, "--- !u!1 &42\nGameObject:\n  m_Layer: 5\n");
	}

	#[test]
	fn sequences_of_mappings_share_the_dash_line() {
		let mut entry = Mapping::new();
		entry.insert("component", reference(11));
		let mut mapping = Mapping::new();
		mapping.insert("m_Component", Node::Sequence(vec![Node::Mapping(entry)]));
		mapping.insert("m_Children", Node::Sequence(Vec::new()));
		mapping.insert("m_IsActive", true);

		let text = render_mapping(&mapping);
		assert_eq!(text, "m_Component:\n- component: {m_FileID: 0, m_PathID: 11}\nm_Children: []\nm_IsActive: 1\n");
	}

	#[test]
	fn nested_block_mappings_indent_and_strings_quote_when_needed() {
		let mut rotation = Mapping::new();
		rotation.insert("x", 0.5_f32);
		rotation.insert("w", 1.0_f32);
		let mut mapping = Mapping::new();
		mapping.insert("m_LocalRotation", rotation);
		mapping.insert("m_Name", "- odd: name");
		mapping.insert("m_TagString", "Untagged");
		mapping.insert("m_Empty", "");

		let text = render_mapping(&mapping);
		assert_eq!(text, "m_LocalRotation:\n  x: 0.5\n  w: 1\nm_Name: '- odd: name'\nm_TagString: Untagged\nm_Empty: \n");
	}

	#[test]
	fn trailing_colons_and_control_characters_stay_parseable() {
		let mut mapping = Mapping::new();
		mapping.insert("m_Name", "Foo:");
		mapping.insert("m_TagString", "a\rb");
		mapping.insert("m_Note", "tab\there \"quoted\" back\\slash\u{1}");

		let text = render_mapping(&mapping);
		assert_eq!(
			text,
			"m_Name: 'Foo:'\nm_TagString: \"a\\rb\"\nm_Note: \"tab\\there \\\"quoted\\\" back\\\\slash\\u0001\"\n"
		);
	}
}
