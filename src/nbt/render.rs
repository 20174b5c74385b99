use std::fmt::{self, Write};

use crate::nbt::{NamedTag, TagType, Value};

/// Display limits applied while rendering. Unlimited by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
	/// Maximum number of byte-array items printed before eliding the rest.
	pub max_byte_array_items: Option<usize>,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_chars: Option<usize>,
}

/// Render a decoded tree as indented text, one tag per line.
pub fn render_tree(tag: &NamedTag, options: RenderOptions) -> String {
	TreeDisplay::new(tag, options).to_string()
}

/// [`fmt::Display`] adapter that renders a tree without an intermediate buffer.
#[derive(Debug, Clone, Copy)]
pub struct TreeDisplay<'a> {
	tag: &'a NamedTag,
	options: RenderOptions,
}

impl<'a> TreeDisplay<'a> {
	/// Wrap `tag` for display.
	pub fn new(tag: &'a NamedTag, options: RenderOptions) -> Self {
		Self { tag, options }
	}
}

impl fmt::Display for TreeDisplay<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_named(f, self.tag, "", self.options)
	}
}

fn write_named(out: &mut impl Write, tag: &NamedTag, prefix: &str, options: RenderOptions) -> fmt::Result {
	write!(out, "{prefix}{}(\"{}\")", tag.tag_type, tag.name)?;
	write_body(out, &tag.payload, prefix, options)
}

fn write_unnamed(out: &mut impl Write, value: &Value, tag_type: TagType, prefix: &str, options: RenderOptions) -> fmt::Result {
	write!(out, "{prefix}{tag_type}")?;
	write_body(out, value, prefix, options)
}

fn write_body(out: &mut impl Write, value: &Value, prefix: &str, options: RenderOptions) -> fmt::Result {
	match value {
		Value::End => out.write_char('\n'),
		Value::Byte(v) => writeln!(out, ": {v}"),
		Value::Short(v) => writeln!(out, ": {v}"),
		Value::Int(v) => writeln!(out, ": {v}"),
		Value::Long(v) => writeln!(out, ": {v}"),
		Value::Float(v) => writeln!(out, ": {v}"),
		Value::Double(v) => writeln!(out, ": {v}"),
		Value::ByteArray(bytes) => {
			out.write_str(": ")?;
			write_bytes(out, bytes, options.max_byte_array_items)?;
			out.write_char('\n')
		}
		Value::String(text) => {
			out.write_str(": ")?;
			write_truncated(out, text, options.max_string_chars)?;
			out.write_char('\n')
		}
		Value::Compound(children) => {
			writeln!(out, ": {} entries", children.len())?;
			writeln!(out, "{prefix}{{")?;
			let inner = format!("{prefix}  ");
			for child in children {
				write_named(out, child, &inner, options)?;
			}
			writeln!(out, "{prefix}}}")
		}
		Value::List(list) => {
			writeln!(out, ": {} entries of type {}", list.len(), list.element_type)?;
			writeln!(out, "{prefix}{{")?;
			let inner = format!("{prefix}  ");
			for element in &list.elements {
				write_unnamed(out, element, list.element_type, &inner, options)?;
			}
			writeln!(out, "{prefix}}}")
		}
	}
}

fn write_bytes(out: &mut impl Write, bytes: &[u8], limit: Option<usize>) -> fmt::Result {
	let shown = limit.map_or(bytes.len(), |max| max.min(bytes.len()));
	out.write_char('[')?;
	for (idx, byte) in bytes[..shown].iter().enumerate() {
		if idx > 0 {
			out.write_char(' ')?;
		}
		write!(out, "{byte}")?;
	}
	if shown < bytes.len() {
		let sep = if shown > 0 { " " } else { "" };
		write!(out, "{sep}... (+{} more)", bytes.len() - shown)?;
	}
	out.write_char(']')
}

fn write_truncated(out: &mut impl Write, text: &str, limit: Option<usize>) -> fmt::Result {
	let Some(max) = limit else {
		return out.write_str(text);
	};
	match text.char_indices().nth(max) {
		Some((cut, _)) => write!(out, "{}...", &text[..cut]),
		None => out.write_str(text),
	}
}
