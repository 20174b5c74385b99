use crate::nbt::bytes::Cursor;
use crate::nbt::{DispatchTable, ListValue, NamedTag, NbtError, Result, TagType, Value};

/// Limits and strictness switches for NBT decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Maximum number of nested compound/list payloads.
	pub max_depth: u32,
	/// Reject bytes left over after the root tag.
	pub strict_trailing: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 512,
			strict_trailing: false,
		}
	}
}

/// Cursor plus nesting bookkeeping threaded through every payload decoder.
pub(crate) struct DecodeState<'a> {
	pub(crate) cursor: Cursor<'a>,
	depth: u32,
	max_depth: u32,
}

impl<'a> DecodeState<'a> {
	pub(crate) fn new(bytes: &'a [u8], offset: usize, options: &DecodeOptions) -> Self {
		Self {
			cursor: Cursor::at(bytes, offset),
			depth: 0,
			max_depth: options.max_depth,
		}
	}

	pub(crate) fn consumed_since(&self, offset: usize) -> usize {
		self.cursor.pos().saturating_sub(offset)
	}

	fn enter(&mut self) -> Result<()> {
		if self.depth >= self.max_depth {
			return Err(NbtError::DepthExceeded {
				max_depth: self.max_depth,
				at: self.cursor.pos(),
			});
		}
		self.depth += 1;
		Ok(())
	}

	fn leave(&mut self) {
		self.depth = self.depth.saturating_sub(1);
	}
}

/// Decode one named tag at `offset` with the standard table and default limits.
///
/// Returns the tag and the total bytes it occupied, header included.
pub fn decode_named_tag(bytes: &[u8], offset: usize) -> Result<(NamedTag, usize)> {
	decode_named_tag_with(DispatchTable::standard(), bytes, offset, &DecodeOptions::default())
}

/// Decode one named tag at `offset` through `table`.
pub fn decode_named_tag_with(table: &DispatchTable, bytes: &[u8], offset: usize, options: &DecodeOptions) -> Result<(NamedTag, usize)> {
	let mut state = DecodeState::new(bytes, offset, options);
	let tag = read_named_tag(table, &mut state)?;
	Ok((tag, state.consumed_since(offset)))
}

/// Decode the root tag of an already-decompressed NBT document.
///
/// Bytes after the root tag are ignored unless
/// [`DecodeOptions::strict_trailing`] is set.
pub fn parse_nbt(bytes: &[u8], options: &DecodeOptions) -> Result<(NamedTag, usize)> {
	let (root, consumed) = decode_named_tag_with(DispatchTable::standard(), bytes, 0, options)?;
	let rem = bytes.len().saturating_sub(consumed);
	if rem > 0 {
		if options.strict_trailing {
			return Err(NbtError::TrailingBytes { at: consumed, rem });
		}
		tracing::debug!(at = consumed, rem, "ignoring trailing bytes after root tag");
	}
	Ok((root, consumed))
}

/// Read type id, optional name, and payload. End tags stop after the id byte.
pub(crate) fn read_named_tag(table: &DispatchTable, state: &mut DecodeState<'_>) -> Result<NamedTag> {
	let at = state.cursor.pos();
	let id = state.cursor.read_u8()?;
	let (tag_type, decode) = table.lookup(id, at)?;
	if tag_type == TagType::End {
		return Ok(NamedTag::end());
	}

	let name = state.cursor.read_string()?;
	let payload = decode(table, state)?;
	Ok(NamedTag { tag_type, name, payload })
}

pub(crate) fn decode_compound(table: &DispatchTable, state: &mut DecodeState<'_>) -> Result<Value> {
	state.enter()?;
	let mut children = Vec::new();
	loop {
		let tag = read_named_tag(table, state)?;
		if tag.is_end() {
			break;
		}
		children.push(tag);
	}
	state.leave();
	Ok(Value::Compound(children))
}

pub(crate) fn decode_list(table: &DispatchTable, state: &mut DecodeState<'_>) -> Result<Value> {
	state.enter()?;
	let type_at = state.cursor.pos();
	let id = state.cursor.read_u8()?;
	let (element_type, decode) = table.lookup(id, type_at)?;

	let count_at = state.cursor.pos();
	let count = state.cursor.read_i32()?;
	let invalid = || NbtError::InvalidLength {
		len: i64::from(count),
		at: count_at,
	};
	let count = usize::try_from(count).map_err(|_| invalid())?;
	// End elements occupy zero bytes, so a non-zero count cannot be bounded by the input.
	if element_type == TagType::End && count > 0 {
		return Err(invalid());
	}

	let mut elements = Vec::with_capacity(list_capacity(count, element_type, state.cursor.remaining()));
	for _ in 0..count {
		elements.push(decode(table, state)?);
	}
	state.leave();
	Ok(Value::List(ListValue { element_type, elements }))
}

/// Elements that could still fit in `remaining` bytes, capped at `count`.
pub(crate) fn list_capacity(count: usize, element_type: TagType, remaining: usize) -> usize {
	count.min(remaining / element_type.min_payload_len().max(1))
}
