//! Shared test helpers for workspace crates.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Wire identifiers, duplicated here so fixtures do not depend on the crate under test.
pub mod id {
	/// `TAG_End`.
	pub const END: u8 = 0;
	/// `TAG_Byte`.
	pub const BYTE: u8 = 1;
	/// `TAG_Short`.
	pub const SHORT: u8 = 2;
	/// `TAG_Int`.
	pub const INT: u8 = 3;
	/// `TAG_Long`.
	pub const LONG: u8 = 4;
	/// `TAG_Float`.
	pub const FLOAT: u8 = 5;
	/// `TAG_Double`.
	pub const DOUBLE: u8 = 6;
	/// `TAG_Byte_Array`.
	pub const BYTE_ARRAY: u8 = 7;
	/// `TAG_String`.
	pub const STRING: u8 = 8;
	/// `TAG_List`.
	pub const LIST: u8 = 9;
	/// `TAG_Compound`.
	pub const COMPOUND: u8 = 10;
}

/// Append-only writer for hand-built NBT byte streams.
///
/// Methods write exactly the bytes they name and nothing else, so tests can
/// assemble malformed input as easily as valid input.
#[derive(Debug, Default, Clone)]
pub struct NbtBytes {
	buf: Vec<u8>,
}

impl NbtBytes {
	/// Start an empty stream.
	pub fn new() -> Self {
		Self::default()
	}

	/// Named tag header: type id, `u16` name length, name bytes.
	pub fn named(self, tag_id: u8, name: &str) -> Self {
		self.raw(&[tag_id]).string(name)
	}

	/// Compound terminator.
	pub fn end(self) -> Self {
		self.raw(&[id::END])
	}

	/// Byte payload.
	pub fn byte(self, value: i8) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Short payload.
	pub fn short(self, value: i16) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Int payload.
	pub fn int(self, value: i32) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Long payload.
	pub fn long(self, value: i64) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Float payload.
	pub fn float(self, value: f32) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Double payload.
	pub fn double(self, value: f64) -> Self {
		self.raw(&value.to_be_bytes())
	}

	/// Byte array payload with its `i32` length.
	pub fn byte_array(self, bytes: &[u8]) -> Self {
		let len = i32::try_from(bytes.len()).expect("fixture byte array fits in i32");
		self.int(len).raw(bytes)
	}

	/// String payload with its `u16` length.
	pub fn string(self, text: &str) -> Self {
		let len = u16::try_from(text.len()).expect("fixture string fits in u16");
		self.raw(&len.to_be_bytes()).raw(text.as_bytes())
	}

	/// List header: element type id and `i32` count.
	pub fn list(self, element_id: u8, count: i32) -> Self {
		self.raw(&[element_id]).int(count)
	}

	/// Arbitrary bytes.
	pub fn raw(mut self, bytes: &[u8]) -> Self {
		self.buf.extend_from_slice(bytes);
		self
	}

	/// Finished byte stream.
	pub fn build(self) -> Vec<u8> {
		self.buf
	}
}

/// A small level-like document touching every tag type.
///
/// Root compound `"Level"` with children, in order:
/// `name` (String "Steve"), `health` (Short 20), `xp` (Int 1234),
/// `seed` (Long -5), `yaw` (Float 0.5), `pos_y` (Double 64.25),
/// `flag` (Byte 1), `blocks` (Byte_Array `[0 1 255]`),
/// `motion` (List of 3 Doubles 0.0, -0.5, 1.0),
/// `inventory` (List of 2 Compounds `{id: "stone", count: 64}` and `{id: "dirt", count: 3}`),
/// `nested` (List of 2 Lists of Int: `[1 2]`, `[]`),
/// `empty` (List of End, count 0).
pub fn sample_level() -> Vec<u8> {
	NbtBytes::new()
		.named(id::COMPOUND, "Level")
		.named(id::STRING, "name")
		.string("Steve")
		.named(id::SHORT, "health")
		.short(20)
		.named(id::INT, "xp")
		.int(1234)
		.named(id::LONG, "seed")
		.long(-5)
		.named(id::FLOAT, "yaw")
		.float(0.5)
		.named(id::DOUBLE, "pos_y")
		.double(64.25)
		.named(id::BYTE, "flag")
		.byte(1)
		.named(id::BYTE_ARRAY, "blocks")
		.byte_array(&[0, 1, 255])
		.named(id::LIST, "motion")
		.list(id::DOUBLE, 3)
		.double(0.0)
		.double(-0.5)
		.double(1.0)
		.named(id::LIST, "inventory")
		.list(id::COMPOUND, 2)
		.named(id::STRING, "id")
		.string("stone")
		.named(id::BYTE, "count")
		.byte(64)
		.end()
		.named(id::STRING, "id")
		.string("dirt")
		.named(id::BYTE, "count")
		.byte(3)
		.end()
		.named(id::LIST, "nested")
		.list(id::LIST, 2)
		.list(id::INT, 2)
		.int(1)
		.int(2)
		.list(id::INT, 0)
		.named(id::LIST, "empty")
		.list(id::END, 0)
		.end()
		.build()
}

/// gzip-wrap `bytes`.
pub fn gzip(bytes: &[u8]) -> Vec<u8> {
	let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
	encoder.write_all(bytes).expect("gzip write");
	encoder.finish().expect("gzip finish")
}

/// zlib-wrap `bytes`.
pub fn zlib(bytes: &[u8]) -> Vec<u8> {
	let mut encoder = flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
	encoder.write_all(bytes).expect("zlib write");
	encoder.finish().expect("zlib finish")
}

/// zstd-wrap `bytes`.
pub fn zstd(bytes: &[u8]) -> Vec<u8> {
	::zstd::encode_all(bytes, 0).expect("zstd encode")
}

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Write `bytes` to `<target>/nbtdump-fixtures/<name>` and return the path.
///
/// Names must be unique per test since tests run in parallel.
pub fn write_fixture(name: &str, bytes: &[u8]) -> PathBuf {
	let dir = target_dir().join("nbtdump-fixtures");
	fs::create_dir_all(&dir).expect("fixture dir is creatable");
	let path = dir.join(name);
	fs::write(&path, bytes).expect("fixture is writable");
	path
}
