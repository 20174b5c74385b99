//! Public library API for decoding and inspecting Named Binary Tag (NBT) data.

/// NBT decoding, dispatch, compression envelopes, and tree rendering.
pub mod nbt;
