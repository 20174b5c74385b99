use std::io::{self, Write};
use std::path::PathBuf;

use nbtdump::nbt::{Compression, CompressionMode, DecodeOptions, NbtFile, Result};

/// Compression envelope selector accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CompressionArg {
	/// Detect from magic bytes.
	#[default]
	Auto,
	/// Input is raw NBT.
	None,
	/// Input is gzip-wrapped.
	Gzip,
	/// Input is zlib-wrapped.
	Zlib,
	/// Input is zstd-wrapped.
	Zstd,
}

impl From<CompressionArg> for CompressionMode {
	fn from(value: CompressionArg) -> Self {
		match value {
			CompressionArg::Auto => Self::Auto,
			CompressionArg::None => Self::Force(Compression::None),
			CompressionArg::Gzip => Self::Force(Compression::Gzip),
			CompressionArg::Zlib => Self::Force(Compression::Zlib),
			CompressionArg::Zstd => Self::Force(Compression::Zstd),
		}
	}
}

/// Input path and decode switches shared by every command.
#[derive(clap::Args)]
pub struct InputArgs {
	pub path: PathBuf,
	#[arg(long, value_enum, default_value_t = CompressionArg::Auto)]
	pub compression: CompressionArg,
	#[arg(long = "max-depth")]
	pub max_depth: Option<u32>,
	/// Fail when bytes follow the root tag.
	#[arg(long)]
	pub strict: bool,
}

impl InputArgs {
	/// Load and decode the selected input.
	pub(crate) fn load(&self) -> Result<NbtFile> {
		let mut options = DecodeOptions::default();
		if let Some(max_depth) = self.max_depth {
			options.max_depth = max_depth;
		}
		options.strict_trailing = self.strict;

		let file = NbtFile::open(&self.path, self.compression.into(), &options)?;
		tracing::info!(
			path = %self.path.display(),
			compression = file.compression.as_str(),
			raw = file.raw_len,
			decoded = file.bytes().len(),
			"decoded nbt file"
		);
		Ok(file)
	}
}

/// Write a serializable payload to stdout as pretty JSON.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let stdout = io::stdout();
	let mut out = stdout.lock();
	serde_json::to_writer_pretty(&mut out, payload).map_err(io::Error::from)?;
	writeln!(out)?;
	Ok(())
}
