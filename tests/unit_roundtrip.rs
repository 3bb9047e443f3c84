#![allow(missing_docs)]

use packdoc::pack::{PackError, Value, decode_slice};

mod common;

use common::{Writer, encode_value};

fn roundtrip(value: &Value) -> Value {
	let mut writer = Writer::new();
	encode_value(&mut writer, value);
	decode_slice(&writer.finish()).expect("encoded fixture decodes")
}

#[test]
fn scalar_roundtrips_preserve_variant_and_value() {
	let scalars = [
		Value::Nil,
		Value::Bool(false),
		Value::Bool(true),
		Value::U64(0),
		Value::U64(127),
		Value::U64(128),
		Value::U64(65536),
		Value::U64(u64::MAX),
		Value::I64(-1),
		Value::I64(-32),
		Value::I64(-33),
		Value::I64(5),
		Value::I64(i64::MIN),
		Value::F32(1.5),
		Value::F64(-0.25),
		Value::String("".into()),
		Value::String("hello".into()),
		Value::String("µ-pack".into()),
	];

	for value in &scalars {
		assert_eq!(&roundtrip(value), value, "roundtrip failed for {value:?}");
	}
}

#[test]
fn long_strings_roundtrip_through_sized_forms() {
	for len in [31, 32, 255, 256, 65535, 65536] {
		let value = Value::String("x".repeat(len).into());
		assert_eq!(roundtrip(&value), value, "roundtrip failed for len {len}");
	}
}

#[test]
fn sized_container_forms_roundtrip() {
	// 16 elements forces array16/map16, past the fix forms.
	let array = Value::Array((0..16).map(Value::U64).collect());
	assert_eq!(roundtrip(&array), array);

	let map = Value::Map((0..16).map(|n| (Value::U64(n), Value::Bool(n % 2 == 0))).collect());
	assert_eq!(roundtrip(&map), map);
}

#[test]
fn nested_document_roundtrips() {
	let value = Value::Map(vec![
		(
			Value::String("config".into()),
			Value::Map(vec![
				(Value::String("retries".into()), Value::U64(3)),
				(Value::String("timeout".into()), Value::F64(1.5)),
				(Value::String("label".into()), Value::Nil),
			]),
		),
		(
			Value::String("samples".into()),
			Value::Array(vec![
				Value::I64(-40),
				Value::U64(0),
				Value::Array(vec![Value::Bool(true), Value::String("deep".into())]),
			]),
		),
	]);

	assert_eq!(roundtrip(&value), value);
}

#[test]
fn non_string_map_keys_roundtrip() {
	let value = Value::Map(vec![
		(Value::U64(1), Value::String("one".into())),
		(Value::I64(-1), Value::String("minus one".into())),
		(Value::Nil, Value::Bool(false)),
	]);

	assert_eq!(roundtrip(&value), value);
}

#[test]
fn duplicate_keys_collapse_to_last_value() {
	// The writer emits pairs verbatim, so duplicates reach the decoder.
	let mut writer = Writer::new();
	writer.map(3);
	writer.str("k");
	writer.uint(1);
	writer.str("other");
	writer.uint(5);
	writer.str("k");
	writer.uint(2);

	let value = decode_slice(&writer.finish()).expect("map decodes");
	assert_eq!(
		value,
		Value::Map(vec![
			(Value::String("k".into()), Value::U64(2)),
			(Value::String("other".into()), Value::U64(5)),
		])
	);
}

#[test]
fn declared_count_larger_than_elements_is_truncation() {
	let mut writer = Writer::new();
	writer.array(3);
	writer.uint(1);

	let err = decode_slice(&writer.finish()).expect_err("short array fails");
	assert!(matches!(err, PackError::TruncatedInput { .. }));
}
