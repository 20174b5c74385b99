mod bytes;
mod compression;
mod decode;
mod dispatch;
mod error;
mod file;
mod render;
mod scalar;
mod stats;
mod tag;
mod value;

/// Bounded big-endian reader.
pub use bytes::Cursor;
/// Compression envelopes and detection.
pub use compression::{Compression, CompressionMode, GZIP_MAGIC, ZSTD_MAGIC, decode_bytes};
/// Named-tag decoding entry points and options.
pub use decode::{DecodeOptions, decode_named_tag, decode_named_tag_with, parse_nbt};
/// Tag type to payload decoder table.
pub use dispatch::DispatchTable;
/// Error and result aliases.
pub use error::{ErrorKind, NbtError, Result};
/// File loading and decoded document.
pub use file::NbtFile;
/// Indented text rendering.
pub use render::{RenderOptions, TreeDisplay, render_tree};
/// Tree shape summary.
pub use stats::TreeStats;
/// Tag type identifiers.
pub use tag::TagType;
/// Decoded tree types.
pub use value::{ListValue, NamedTag, Value};
