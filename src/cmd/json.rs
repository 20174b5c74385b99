use std::path::Path;

use nbtdump::nbt::{NamedTag, NbtFile, Result, Value};

use crate::cmd::util::{InputArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
}

/// Decode the input and print its tree as JSON.
pub fn run(args: Args) -> Result<()> {
	let file = args.input.load()?;
	print_json(&args.input.path, &file)
}

pub(crate) fn print_json(path: &Path, file: &NbtFile) -> Result<()> {
	let payload = TreeJson {
		path: path.display().to_string(),
		compression: file.compression.as_str(),
		consumed: file.consumed,
		trailing: file.trailing(),
		root: named_tag_to_json(&file.root),
	};

	emit_json(&payload)
}

fn named_tag_to_json(tag: &NamedTag) -> serde_json::Value {
	serde_json::json!({
		"type": tag.tag_type.name(),
		"name": tag.name,
		"value": value_to_json(&tag.payload),
	})
}

fn value_to_json(value: &Value) -> serde_json::Value {
	use serde_json::Value as JsonValue;

	match value {
		Value::End => JsonValue::Null,
		Value::Byte(v) => serde_json::json!(v),
		Value::Short(v) => serde_json::json!(v),
		Value::Int(v) => serde_json::json!(v),
		Value::Long(v) => serde_json::json!(v),
		Value::Float(v) => serde_json::json!(v),
		Value::Double(v) => serde_json::json!(v),
		Value::ByteArray(bytes) => JsonValue::Array(bytes.iter().map(|item| serde_json::json!(item)).collect()),
		Value::String(v) => serde_json::json!(v),
		Value::List(list) => {
			let elements: Vec<JsonValue> = list.elements.iter().map(value_to_json).collect();
			serde_json::json!({
				"element_type": list.element_type.name(),
				"elements": elements,
			})
		}
		// Array, not object: child order is kept and duplicate names survive.
		Value::Compound(children) => JsonValue::Array(children.iter().map(named_tag_to_json).collect()),
	}
}

#[derive(serde::Serialize)]
struct TreeJson {
	path: String,
	compression: &'static str,
	consumed: usize,
	trailing: usize,
	root: serde_json::Value,
}
