//! Leaf payload decoders. Each one is a [`DispatchTable`] entry.

use crate::nbt::decode::DecodeState;
use crate::nbt::{DispatchTable, NbtError, Result, Value};

pub(crate) fn decode_end(_: &DispatchTable, _: &mut DecodeState<'_>) -> Result<Value> {
	Ok(Value::End)
}

pub(crate) fn decode_byte(_: &DispatchTable, state: &mut DecodeState<'_>) -> Result<Value> {
	Ok(Value::Byte(state.cursor.read_i8()?))
}

pub(crate) fn decode_short(_: &DispatchTable, state: &mut DecodeState<'_>) -> Result<Value> {
	Ok(Value::Short(state.cursor.read_i16()?))
}

pub(crate) fn decode_int(_: &DispatchTable, state: &mut DecodeState<'_>) -> Result<Value> {
	Ok(Value::Int(state.cursor.read_i32()?))
}

pub(crate) fn decode_long(_: &DispatchTable, state: &mut DecodeState<'_>) -> Result<Value> {
	Ok(Value::Long(state.cursor.read_i64()?))
}

pub(crate) fn decode_float(_: &DispatchTable, state: &mut DecodeState<'_>) -> Result<Value> {
	Ok(Value::Float(state.cursor.read_f32()?))
}

pub(crate) fn decode_double(_: &DispatchTable, state: &mut DecodeState<'_>) -> Result<Value> {
	Ok(Value::Double(state.cursor.read_f64()?))
}

pub(crate) fn decode_byte_array(_: &DispatchTable, state: &mut DecodeState<'_>) -> Result<Value> {
	let at = state.cursor.pos();
	let len = state.cursor.read_i32()?;
	let len = usize::try_from(len).map_err(|_| NbtError::InvalidLength { len: i64::from(len), at })?;
	Ok(Value::ByteArray(state.cursor.read_exact(len)?.to_vec()))
}

pub(crate) fn decode_string(_: &DispatchTable, state: &mut DecodeState<'_>) -> Result<Value> {
	Ok(Value::String(state.cursor.read_string()?))
}
