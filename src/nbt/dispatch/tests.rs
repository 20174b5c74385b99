use nbtdump_testkit::{NbtBytes, id};

use super::DispatchTable;
use crate::nbt::{ListValue, NamedTag, NbtError, TagType, Value};

#[test]
fn scalar_widths_match_wire_layout() {
	let table = DispatchTable::standard();
	let cases: [(TagType, Vec<u8>, Value, usize); 6] = [
		(TagType::Byte, vec![0xFB], Value::Byte(-5), 1),
		(TagType::Short, vec![0x01, 0x00], Value::Short(256), 2),
		(TagType::Int, vec![0x00, 0x00, 0x00, 0x05], Value::Int(5), 4),
		(TagType::Long, vec![0xFF; 8], Value::Long(-1), 8),
		(TagType::Float, 1.25_f32.to_be_bytes().to_vec(), Value::Float(1.25), 4),
		(TagType::Double, (-2.5_f64).to_be_bytes().to_vec(), Value::Double(-2.5), 8),
	];

	for (tag, bytes, expected, width) in cases {
		let (value, consumed) = table.decode_payload(tag, &bytes, 0).expect("scalar decodes");
		assert_eq!(value, expected, "{tag}");
		assert_eq!(consumed, width, "{tag}");
	}
}

#[test]
fn length_prefixed_widths_include_prefix() {
	let table = DispatchTable::standard();

	let bytes = NbtBytes::new().byte_array(&[9, 8, 7]).build();
	let (value, consumed) = table.decode_payload(TagType::ByteArray, &bytes, 0).expect("byte array decodes");
	assert_eq!(value, Value::ByteArray(vec![9, 8, 7]));
	assert_eq!(consumed, 4 + 3);

	let bytes = NbtBytes::new().string("héllo").build();
	let (value, consumed) = table.decode_payload(TagType::String, &bytes, 0).expect("string decodes");
	assert_eq!(value, Value::String("héllo".to_owned()));
	assert_eq!(consumed, 2 + "héllo".len());
}

#[test]
fn end_payload_is_empty() {
	let (value, consumed) = DispatchTable::standard().decode_payload(TagType::End, &[], 0).expect("end decodes");
	assert_eq!(value, Value::End);
	assert_eq!(consumed, 0);
}

#[test]
fn compound_entry_recurses_through_the_same_table() {
	let bytes = NbtBytes::new()
		.named(id::LIST, "rows")
		.list(id::COMPOUND, 1)
		.named(id::INT, "v")
		.int(3)
		.end()
		.end()
		.build();

	let (value, consumed) = DispatchTable::standard().decode_payload(TagType::Compound, &bytes, 0).expect("compound payload decodes");
	assert_eq!(consumed, bytes.len());
	assert_eq!(
		value,
		Value::Compound(vec![NamedTag::new(
			"rows",
			Value::List(ListValue {
				element_type: TagType::Compound,
				elements: vec![Value::Compound(vec![NamedTag::new("v", Value::Int(3))])],
			}),
		)])
	);
}

#[test]
fn lookup_rejects_unknown_ids() {
	let table = DispatchTable::standard();
	for id in 0..=10 {
		assert!(table.lookup(id, 0).is_ok(), "id {id} should be known");
	}
	assert!(matches!(table.lookup(11, 42), Err(NbtError::UnsupportedTagType { id: 11, at: 42 })));
	assert!(matches!(table.lookup(0xFF, 0), Err(NbtError::UnsupportedTagType { id: 0xFF, at: 0 })));
}

#[test]
fn payload_offsets_are_absolute() {
	let bytes = [0xAA, 0xAA, 0x00, 0x00];
	let err = DispatchTable::standard().decode_payload(TagType::Int, &bytes, 2).expect_err("int needs four bytes");
	assert!(matches!(err, NbtError::Truncated { at: 2, need: 4, rem: 2 }), "got {err:?}");
}
