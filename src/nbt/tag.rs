use std::fmt;

/// One of the eleven NBT tag types.
///
/// Discriminants are the wire identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TagType {
	/// Compound terminator. Carries no name and no payload.
	End = 0,
	/// Signed 8-bit integer.
	Byte = 1,
	/// Signed 16-bit integer.
	Short = 2,
	/// Signed 32-bit integer.
	Int = 3,
	/// Signed 64-bit integer.
	Long = 4,
	/// IEEE-754 binary32.
	Float = 5,
	/// IEEE-754 binary64.
	Double = 6,
	/// `i32` length followed by raw bytes.
	ByteArray = 7,
	/// `u16` length followed by UTF-8 bytes.
	String = 8,
	/// Element type, `i32` count, then unnamed payloads.
	List = 9,
	/// Named tags terminated by [`TagType::End`].
	Compound = 10,
}

impl TagType {
	/// Number of known tag types.
	pub const COUNT: usize = 11;

	/// Every tag type, ordered by wire identifier.
	pub const ALL: [TagType; Self::COUNT] = [
		Self::End,
		Self::Byte,
		Self::Short,
		Self::Int,
		Self::Long,
		Self::Float,
		Self::Double,
		Self::ByteArray,
		Self::String,
		Self::List,
		Self::Compound,
	];

	/// Wire identifier.
	pub const fn id(self) -> u8 {
		self as u8
	}

	/// Map a wire identifier back to its tag type.
	pub fn from_id(id: u8) -> Option<Self> {
		Self::ALL.get(usize::from(id)).copied()
	}

	/// Display label, for example `TAG_Byte_Array`.
	pub fn name(self) -> &'static str {
		match self {
			Self::End => "TAG_End",
			Self::Byte => "TAG_Byte",
			Self::Short => "TAG_Short",
			Self::Int => "TAG_Int",
			Self::Long => "TAG_Long",
			Self::Float => "TAG_Float",
			Self::Double => "TAG_Double",
			Self::ByteArray => "TAG_Byte_Array",
			Self::String => "TAG_String",
			Self::List => "TAG_List",
			Self::Compound => "TAG_Compound",
		}
	}

	/// Fewest payload bytes a value of this type can occupy on the wire.
	pub fn min_payload_len(self) -> usize {
		match self {
			Self::End => 0,
			Self::Byte | Self::Compound => 1,
			Self::Short | Self::String => 2,
			Self::Int | Self::Float | Self::ByteArray => 4,
			Self::List => 5,
			Self::Long | Self::Double => 8,
		}
	}

	/// Whether payloads of this type contain further tags.
	pub fn is_aggregate(self) -> bool {
		matches!(self, Self::List | Self::Compound)
	}
}

impl fmt::Display for TagType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
