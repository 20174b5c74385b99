use std::fmt;

use crate::nbt::decode::{DecodeState, decode_compound, decode_list};
use crate::nbt::{DecodeOptions, NbtError, Result, TagType, Value, scalar};

/// Payload decoder stored in a [`DispatchTable`].
///
/// The table is passed back in so aggregate entries can recurse through the
/// same table that holds them.
pub(crate) type PayloadDecoder = fn(&DispatchTable, &mut DecodeState<'_>) -> Result<Value>;

static STANDARD: DispatchTable = DispatchTable {
	entries: [
		scalar::decode_end,
		scalar::decode_byte,
		scalar::decode_short,
		scalar::decode_int,
		scalar::decode_long,
		scalar::decode_float,
		scalar::decode_double,
		scalar::decode_byte_array,
		scalar::decode_string,
		decode_list,
		decode_compound,
	],
};

/// Immutable mapping from tag type identifier to payload decoder.
///
/// Entries are indexed by wire identifier and never change after
/// construction.
pub struct DispatchTable {
	entries: [PayloadDecoder; TagType::COUNT],
}

impl DispatchTable {
	/// The table covering all eleven standard tag types.
	pub fn standard() -> &'static Self {
		&STANDARD
	}

	/// Resolve a raw type identifier read at offset `at`.
	pub(crate) fn lookup(&self, id: u8, at: usize) -> Result<(TagType, PayloadDecoder)> {
		let tag = TagType::from_id(id).ok_or(NbtError::UnsupportedTagType { id, at })?;
		Ok((tag, self.decoder(tag)))
	}

	pub(crate) fn decoder(&self, tag: TagType) -> PayloadDecoder {
		self.entries[usize::from(tag.id())]
	}

	/// Decode an unnamed payload of type `tag` starting at `offset`.
	///
	/// Returns the value and the number of bytes it occupied.
	pub fn decode_payload(&self, tag: TagType, bytes: &[u8], offset: usize) -> Result<(Value, usize)> {
		self.decode_payload_with(tag, bytes, offset, &DecodeOptions::default())
	}

	/// Decode an unnamed payload with explicit limits.
	pub fn decode_payload_with(&self, tag: TagType, bytes: &[u8], offset: usize, options: &DecodeOptions) -> Result<(Value, usize)> {
		let mut state = DecodeState::new(bytes, offset, options);
		let value = (self.decoder(tag))(self, &mut state)?;
		Ok((value, state.consumed_since(offset)))
	}
}

impl fmt::Debug for DispatchTable {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(TagType::ALL.iter().map(|tag| tag.name())).finish()
	}
}

#[cfg(test)]
mod tests;
