/// A decoded MessagePack value.
///
/// Integer families collapse to [`Value::I64`] or [`Value::U64`]; the
/// signedness is decided once from the wire tag. Maps keep entries in stream
/// order of first key occurrence, with duplicate keys resolved last-wins.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	/// Nil.
	Nil,
	/// Boolean.
	Bool(bool),
	/// Signed integer (negative fixint and int8/16/32/64 families).
	I64(i64),
	/// Unsigned integer (positive fixint and uint8/16/32/64 families).
	U64(u64),
	/// Single-precision float.
	F32(f32),
	/// Double-precision float.
	F64(f64),
	/// Text string (the `str` family; payload interpreted as UTF-8).
	String(Box<str>),
	/// Ordered array.
	Array(Vec<Value>),
	/// Ordered key/value map.
	Map(Vec<(Value, Value)>),
}

// A derived drop would recurse once per nesting level and overflow the native
// stack on the same deep documents the decoder is built to survive, so
// containers are flattened onto an explicit worklist instead.
impl Drop for Value {
	fn drop(&mut self) {
		if !matches!(self, Value::Array(_) | Value::Map(_)) {
			return;
		}

		let mut work: Vec<Value> = Vec::new();
		flatten_children(self, &mut work);
		while let Some(mut value) = work.pop() {
			flatten_children(&mut value, &mut work);
		}
	}
}

/// Move a container's direct children onto the worklist, leaving it empty.
fn flatten_children(value: &mut Value, work: &mut Vec<Value>) {
	match value {
		Value::Array(items) => work.append(items),
		Value::Map(entries) => {
			for (key, val) in entries.drain(..) {
				work.push(key);
				work.push(val);
			}
		}
		_ => {}
	}
}

impl Value {
	/// Short label for the value's kind, used in messages and statistics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Nil => "nil",
			Value::Bool(_) => "bool",
			Value::I64(_) => "int",
			Value::U64(_) => "uint",
			Value::F32(_) => "f32",
			Value::F64(_) => "f64",
			Value::String(_) => "string",
			Value::Array(_) => "array",
			Value::Map(_) => "map",
		}
	}
}
