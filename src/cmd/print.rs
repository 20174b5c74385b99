use std::io::{self, Write};

use nbtdump::nbt::{RenderOptions, Result, TreeDisplay};

use crate::cmd::json::print_json;
use crate::cmd::util::InputArgs;

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub input: InputArgs,
	/// Emit JSON instead of indented text.
	#[arg(long)]
	pub json: bool,
	/// Show at most N items of each byte array.
	#[arg(long = "max-bytes")]
	pub max_bytes: Option<usize>,
	/// Show at most N characters of each string.
	#[arg(long = "max-string")]
	pub max_string: Option<usize>,
}

/// Decode the input and print its tree.
pub fn run(args: Args) -> Result<()> {
	let Args {
		input,
		json,
		max_bytes,
		max_string,
	} = args;

	let file = input.load()?;
	if json {
		return print_json(&input.path, &file);
	}

	let options = RenderOptions {
		max_byte_array_items: max_bytes,
		max_string_chars: max_string,
	};

	let stdout = io::stdout();
	let mut out = stdout.lock();
	write!(out, "{}", TreeDisplay::new(&file.root, options))?;
	out.flush()?;
	Ok(())
}
