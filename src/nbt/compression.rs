use std::io::Read;

use flate2::read::{GzDecoder, ZlibDecoder};

use crate::nbt::{NbtError, Result};

const MAX_DECOMPRESSED_BYTES: usize = 256 * 1024 * 1024;
/// gzip member magic.
pub const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
/// zstd frame magic.
pub const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];

/// Compression envelope around raw NBT bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
	/// Raw uncompressed stream.
	None,
	/// gzip-compressed stream (player and level files).
	Gzip,
	/// zlib-compressed stream (region chunks).
	Zlib,
	/// zstd-compressed stream.
	Zstd,
}

impl Compression {
	/// Render compression mode as a stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Gzip => "gzip",
			Self::Zlib => "zlib",
			Self::Zstd => "zstd",
		}
	}

	/// Guess the envelope from leading magic bytes.
	///
	/// None of the magic prefixes is a valid tag type id, so raw NBT is never
	/// mistaken for a compressed stream.
	pub fn detect(raw: &[u8]) -> Self {
		if raw.starts_with(&GZIP_MAGIC) {
			Self::Gzip
		} else if raw.starts_with(&ZSTD_MAGIC) {
			Self::Zstd
		} else if is_zlib_header(raw) {
			Self::Zlib
		} else {
			Self::None
		}
	}
}

/// How the caller wants the envelope handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionMode {
	/// Detect from magic bytes.
	#[default]
	Auto,
	/// Apply exactly this envelope.
	Force(Compression),
}

impl CompressionMode {
	/// Map a plain "is compressed" flag onto gzip or raw.
	pub fn from_flag(compressed: bool) -> Self {
		if compressed { Self::Force(Compression::Gzip) } else { Self::Force(Compression::None) }
	}
}

/// Resolve and strip the envelope, returning `(mode, decoded_bytes)`.
pub fn decode_bytes(raw: Vec<u8>, mode: CompressionMode) -> Result<(Compression, Vec<u8>)> {
	let compression = match mode {
		CompressionMode::Auto => Compression::detect(&raw),
		CompressionMode::Force(compression) => compression,
	};

	let out = match compression {
		Compression::None => raw,
		Compression::Gzip => read_limited(GzDecoder::new(raw.as_slice()), compression, MAX_DECOMPRESSED_BYTES)?,
		Compression::Zlib => read_limited(ZlibDecoder::new(raw.as_slice()), compression, MAX_DECOMPRESSED_BYTES)?,
		Compression::Zstd => {
			let decoder = zstd::stream::read::Decoder::new(raw.as_slice()).map_err(|source| decompression_error(compression, source))?;
			read_limited(decoder, compression, MAX_DECOMPRESSED_BYTES)?
		}
	};

	tracing::debug!(compression = compression.as_str(), decoded = out.len(), "stripped compression envelope");
	Ok((compression, out))
}

fn read_limited(mut decoder: impl Read, compression: Compression, limit: usize) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	let mut buf = [0_u8; 8192];

	loop {
		let read = decoder.read(&mut buf).map_err(|source| decompression_error(compression, source))?;
		if read == 0 {
			break;
		}

		if out.len() + read > limit {
			return Err(NbtError::DecompressedTooLarge { limit });
		}

		out.extend_from_slice(&buf[..read]);
	}

	Ok(out)
}

fn decompression_error(compression: Compression, source: std::io::Error) -> NbtError {
	NbtError::Decompression {
		format: compression.as_str(),
		source,
	}
}

fn is_zlib_header(raw: &[u8]) -> bool {
	match raw {
		[0x78, flg, ..] => (0x7800 | u16::from(*flg)) % 31 == 0,
		_ => false,
	}
}

#[cfg(test)]
mod tests;
