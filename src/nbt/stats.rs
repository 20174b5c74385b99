use std::collections::BTreeMap;

use crate::nbt::{NamedTag, TagType, Value};

/// Shape summary of a decoded tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
	/// Total tags and list elements, root included.
	pub tag_count: usize,
	/// Tag and element counts by type.
	pub counts: BTreeMap<TagType, usize>,
	/// Deepest aggregate nesting; a scalar root has depth 0.
	pub max_depth: usize,
	/// Total raw bytes held in byte arrays.
	pub byte_array_bytes: usize,
	/// Total UTF-8 bytes held in string payloads and names.
	pub string_bytes: usize,
}

impl TreeStats {
	/// Walk `root` and collect counts.
	pub fn collect(root: &NamedTag) -> Self {
		let mut stats = Self::default();
		stats.string_bytes += root.name.len();
		stats.visit(&root.payload, 0);
		stats
	}

	fn visit(&mut self, value: &Value, depth: usize) {
		self.tag_count += 1;
		let tag = value.tag_type();
		*self.counts.entry(tag).or_insert(0) += 1;
		let reach = if tag.is_aggregate() { depth + 1 } else { depth };
		self.max_depth = self.max_depth.max(reach);

		match value {
			Value::End | Value::Byte(_) | Value::Short(_) | Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Double(_) => {}
			Value::ByteArray(bytes) => self.byte_array_bytes += bytes.len(),
			Value::String(text) => self.string_bytes += text.len(),
			Value::List(list) => {
				for element in &list.elements {
					self.visit(element, depth + 1);
				}
			}
			Value::Compound(children) => {
				for child in children {
					self.string_bytes += child.name.len();
					self.visit(&child.payload, depth + 1);
				}
			}
		}
	}
}
