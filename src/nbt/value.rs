use crate::nbt::TagType;

/// Decoded payload of a single tag.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Empty payload of [`TagType::End`].
	End,
	/// Signed 8-bit integer.
	Byte(i8),
	/// Signed 16-bit integer.
	Short(i16),
	/// Signed 32-bit integer.
	Int(i32),
	/// Signed 64-bit integer.
	Long(i64),
	/// 32-bit float.
	Float(f32),
	/// 64-bit float.
	Double(f64),
	/// Opaque byte payload.
	ByteArray(Vec<u8>),
	/// UTF-8 lossy decoded string.
	String(String),
	/// Counted sequence of unnamed payloads.
	List(ListValue),
	/// Child tags in stream order, terminator excluded.
	Compound(Vec<NamedTag>),
}

impl Value {
	/// Tag type matching this payload shape.
	pub fn tag_type(&self) -> TagType {
		match self {
			Self::End => TagType::End,
			Self::Byte(_) => TagType::Byte,
			Self::Short(_) => TagType::Short,
			Self::Int(_) => TagType::Int,
			Self::Long(_) => TagType::Long,
			Self::Float(_) => TagType::Float,
			Self::Double(_) => TagType::Double,
			Self::ByteArray(_) => TagType::ByteArray,
			Self::String(_) => TagType::String,
			Self::List(_) => TagType::List,
			Self::Compound(_) => TagType::Compound,
		}
	}
}

/// Decoded list payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ListValue {
	/// Declared element type.
	pub element_type: TagType,
	/// Elements in stream order.
	pub elements: Vec<Value>,
}

impl ListValue {
	/// Number of elements.
	pub fn len(&self) -> usize {
		self.elements.len()
	}

	/// Whether the list has no elements.
	pub fn is_empty(&self) -> bool {
		self.elements.is_empty()
	}

	/// Whether every element has the declared element type.
	pub fn is_homogeneous(&self) -> bool {
		self.elements.iter().all(|item| item.tag_type() == self.element_type)
	}
}

/// Type, name, and payload of one named tag.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedTag {
	/// Tag type read from the stream.
	pub tag_type: TagType,
	/// Tag name; always empty for [`TagType::End`].
	pub name: String,
	/// Decoded payload.
	pub payload: Value,
}

impl NamedTag {
	/// Build a named tag whose type follows from `payload`.
	pub fn new(name: impl Into<String>, payload: Value) -> Self {
		let tag_type = payload.tag_type();
		if tag_type == TagType::End {
			return Self::end();
		}

		Self {
			tag_type,
			name: name.into(),
			payload,
		}
	}

	/// The nameless compound terminator.
	pub fn end() -> Self {
		Self {
			tag_type: TagType::End,
			name: String::new(),
			payload: Value::End,
		}
	}

	/// Whether this is a compound terminator.
	pub fn is_end(&self) -> bool {
		self.tag_type == TagType::End
	}
}
