use std::fs;
use std::path::Path;

use crate::nbt::compression::decode_bytes;
use crate::nbt::{Compression, CompressionMode, DecodeOptions, NamedTag, Result, TreeStats, parse_nbt};

/// Decoded NBT document together with its source metadata.
#[derive(Debug, Clone)]
pub struct NbtFile {
	/// Envelope that was stripped before decoding.
	pub compression: Compression,
	/// Size of the input before decompression.
	pub raw_len: usize,
	/// Bytes occupied by the root tag.
	pub consumed: usize,
	/// Decoded root tag.
	pub root: NamedTag,
	bytes: Vec<u8>,
}

impl NbtFile {
	/// Read `path`, strip its envelope, and decode the root tag.
	pub fn open(path: impl AsRef<Path>, mode: CompressionMode, options: &DecodeOptions) -> Result<Self> {
		let path = path.as_ref();
		let raw = fs::read(path)?;
		tracing::debug!(path = %path.display(), len = raw.len(), "read nbt input");
		Self::from_bytes(raw, mode, options)
	}

	/// Strip the envelope from in-memory bytes and decode the root tag.
	pub fn from_bytes(raw: Vec<u8>, mode: CompressionMode, options: &DecodeOptions) -> Result<Self> {
		let raw_len = raw.len();
		let (compression, bytes) = decode_bytes(raw, mode)?;
		let (root, consumed) = parse_nbt(&bytes, options)?;

		Ok(Self {
			compression,
			raw_len,
			consumed,
			root,
			bytes,
		})
	}

	/// Decompressed bytes.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Number of decompressed bytes after the root tag.
	pub fn trailing(&self) -> usize {
		self.bytes.len().saturating_sub(self.consumed)
	}

	/// Shape summary of the decoded tree.
	pub fn stats(&self) -> TreeStats {
		TreeStats::collect(&self.root)
	}
}
