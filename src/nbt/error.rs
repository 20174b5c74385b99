use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, NbtError>;

/// Errors produced while loading, decompressing, and decoding NBT data.
///
/// Every decode error aborts the whole parse. Variants that arise inside the
/// byte stream carry the absolute offset where decoding stopped.
#[derive(Debug, Error)]
pub enum NbtError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("truncated input at offset {at}, need {need} bytes, remaining {rem}")]
	Truncated {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Tag type identifier outside the known `0..=10` range.
	#[error("unsupported tag type {id} at offset {at}")]
	UnsupportedTagType {
		/// Raw type identifier read from the stream.
		id: u8,
		/// Offset of the type byte.
		at: usize,
	},
	/// Length or count field that cannot describe a valid payload.
	#[error("invalid length {len} at offset {at}")]
	InvalidLength {
		/// Length as read, after signed interpretation.
		len: i64,
		/// Offset of the length field.
		at: usize,
	},
	/// Compression envelope could not be decoded.
	#[error("{format} decompression failed: {source}")]
	Decompression {
		/// Envelope label, for example `gzip`.
		format: &'static str,
		/// Underlying decoder failure.
		source: std::io::Error,
	},
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Aggregate nesting exceeded configured limit.
	#[error("nesting depth exceeded (max={max_depth}) at offset {at}")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
		/// Offset of the aggregate payload that crossed the limit.
		at: usize,
	},
	/// Strict mode found bytes after the root tag.
	#[error("{rem} trailing bytes after root tag at offset {at}")]
	TrailingBytes {
		/// Offset of the first undecoded byte.
		at: usize,
		/// Number of undecoded bytes.
		rem: usize,
	},
}

/// Coarse error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	/// A read ran past the end of the buffer.
	TruncatedInput,
	/// A type identifier had no dispatch entry.
	UnsupportedTagType,
	/// The compression envelope was corrupt or oversized.
	Decompression,
	/// A length or count field was inconsistent.
	InvalidLength,
	/// A configured decode limit was hit.
	Limit,
	/// Filesystem failure.
	Io,
}

impl NbtError {
	/// Classify this error.
	pub fn kind(&self) -> ErrorKind {
		match self {
			Self::Io(_) => ErrorKind::Io,
			Self::Truncated { .. } => ErrorKind::TruncatedInput,
			Self::UnsupportedTagType { .. } => ErrorKind::UnsupportedTagType,
			Self::InvalidLength { .. } => ErrorKind::InvalidLength,
			Self::Decompression { .. } | Self::DecompressedTooLarge { .. } => ErrorKind::Decompression,
			Self::DepthExceeded { .. } | Self::TrailingBytes { .. } => ErrorKind::Limit,
		}
	}

	/// Byte offset within the decoded stream, when the error has one.
	pub fn offset(&self) -> Option<usize> {
		match self {
			Self::Truncated { at, .. }
			| Self::UnsupportedTagType { at, .. }
			| Self::InvalidLength { at, .. }
			| Self::DepthExceeded { at, .. }
			| Self::TrailingBytes { at, .. } => Some(*at),
			Self::Io(_) | Self::Decompression { .. } | Self::DecompressedTooLarge { .. } => None,
		}
	}
}
