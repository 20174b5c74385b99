use nbtdump::nbt::{Result, TagType};

use crate::cmd::util::{InputArgs, emit_json};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print envelope, size, and tree-shape statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { input, json } = args;

	let file = input.load()?;
	let stats = file.stats();

	if json {
		let payload = InfoJson {
			path: input.path.display().to_string(),
			compression: file.compression.as_str(),
			raw_len: file.raw_len,
			decoded_len: file.bytes().len(),
			consumed: file.consumed,
			trailing: file.trailing(),
			root_type: file.root.tag_type.name(),
			root_name: file.root.name.clone(),
			tag_count: stats.tag_count,
			max_depth: stats.max_depth,
			counts: stats.counts.iter().map(|(tag, count)| (tag.name(), *count)).collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", input.path.display());
	println!("compression: {}", file.compression.as_str());
	println!("raw_len: {}", file.raw_len);
	println!("decoded_len: {}", file.bytes().len());
	println!("consumed: {}", file.consumed);
	println!("trailing: {}", file.trailing());
	println!("root: {}(\"{}\")", file.root.tag_type, file.root.name);
	println!("tag_count: {}", stats.tag_count);
	println!("max_depth: {}", stats.max_depth);
	println!("byte_array_bytes: {}", stats.byte_array_bytes);
	println!("string_bytes: {}", stats.string_bytes);

	println!("tag_types:");
	for tag in TagType::ALL {
		if let Some(count) = stats.counts.get(&tag) {
			println!("  {}: {}", tag.name(), count);
		}
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: &'static str,
	raw_len: usize,
	decoded_len: usize,
	consumed: usize,
	trailing: usize,
	root_type: &'static str,
	root_name: String,
	tag_count: usize,
	max_depth: usize,
	counts: std::collections::BTreeMap<&'static str, usize>,
}
