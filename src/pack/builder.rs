use crate::pack::value::Value;
use crate::pack::{PackError, Result};

/// Initial container reservation cap, in elements.
///
/// Declared counts above this grow on demand as elements actually arrive, so
/// a short document claiming a huge container cannot force the allocation up
/// front.
const PREALLOC_LIMIT: usize = 64 * 1024;

/// Boundary through which the decode engine constructs host values.
///
/// The engine calls these methods and nothing else to build the decoded
/// tree, so the iterative algorithm is independent of any particular value
/// representation. Every method is fallible: a host that cannot allocate
/// reports [`PackError::HostAllocation`] through the normal error path.
pub trait ValueBuilder {
	/// Finished value handed back to the engine (and ultimately the caller).
	type Value;
	/// In-progress array under construction.
	type Array;
	/// In-progress map under construction.
	type Map;

	/// Construct a nil value.
	fn nil(&mut self) -> Result<Self::Value>;
	/// Construct a boolean.
	fn boolean(&mut self, value: bool) -> Result<Self::Value>;
	/// Construct a signed integer.
	fn int(&mut self, value: i64) -> Result<Self::Value>;
	/// Construct an unsigned integer.
	fn uint(&mut self, value: u64) -> Result<Self::Value>;
	/// Construct a single-precision float.
	fn float32(&mut self, value: f32) -> Result<Self::Value>;
	/// Construct a double-precision float.
	fn float64(&mut self, value: f64) -> Result<Self::Value>;
	/// Construct a string from raw payload bytes.
	fn string(&mut self, bytes: Vec<u8>) -> Result<Self::Value>;

	/// Allocate an array expecting `count` elements.
	fn new_array(&mut self, count: usize) -> Result<Self::Array>;
	/// Place `item` at `index`; indices arrive in order, 0 to `count - 1`.
	fn set_array_item(&mut self, array: &mut Self::Array, index: usize, item: Self::Value) -> Result<()>;
	/// Seal a fully populated array.
	fn finish_array(&mut self, array: Self::Array) -> Result<Self::Value>;

	/// Allocate a map expecting `count` key/value pairs.
	fn new_map(&mut self, count: usize) -> Result<Self::Map>;
	/// Insert a pair, overwriting the stored value if `key` is already present.
	fn set_map_item(&mut self, map: &mut Self::Map, key: Self::Value, value: Self::Value) -> Result<()>;
	/// Seal a fully populated map.
	fn finish_map(&mut self, map: Self::Map) -> Result<Self::Value>;
}

/// Standard builder producing plain [`Value`] trees.
#[derive(Debug, Default)]
pub struct TreeBuilder;

impl ValueBuilder for TreeBuilder {
	type Value = Value;
	type Array = Vec<Value>;
	type Map = Vec<(Value, Value)>;

	fn nil(&mut self) -> Result<Value> {
		Ok(Value::Nil)
	}

	fn boolean(&mut self, value: bool) -> Result<Value> {
		Ok(Value::Bool(value))
	}

	fn int(&mut self, value: i64) -> Result<Value> {
		Ok(Value::I64(value))
	}

	fn uint(&mut self, value: u64) -> Result<Value> {
		Ok(Value::U64(value))
	}

	fn float32(&mut self, value: f32) -> Result<Value> {
		Ok(Value::F32(value))
	}

	fn float64(&mut self, value: f64) -> Result<Value> {
		Ok(Value::F64(value))
	}

	fn string(&mut self, bytes: Vec<u8>) -> Result<Value> {
		let text = match String::from_utf8(bytes) {
			Ok(text) => text,
			Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
		};
		Ok(Value::String(text.into_boxed_str()))
	}

	fn new_array(&mut self, count: usize) -> Result<Vec<Value>> {
		let mut items = Vec::new();
		items
			.try_reserve_exact(count.min(PREALLOC_LIMIT))
			.map_err(|_| PackError::HostAllocation { what: "array", count })?;
		Ok(items)
	}

	fn set_array_item(&mut self, array: &mut Vec<Value>, index: usize, item: Value) -> Result<()> {
		debug_assert_eq!(index, array.len());
		if array.len() == array.capacity() {
			array
				.try_reserve(1)
				.map_err(|_| PackError::HostAllocation { what: "array", count: index + 1 })?;
		}
		array.push(item);
		Ok(())
	}

	fn finish_array(&mut self, array: Vec<Value>) -> Result<Value> {
		Ok(Value::Array(array))
	}

	fn new_map(&mut self, count: usize) -> Result<Vec<(Value, Value)>> {
		let mut entries = Vec::new();
		entries
			.try_reserve_exact(count.min(PREALLOC_LIMIT))
			.map_err(|_| PackError::HostAllocation { what: "map", count })?;
		Ok(entries)
	}

	fn set_map_item(&mut self, map: &mut Vec<(Value, Value)>, key: Value, value: Value) -> Result<()> {
		if let Some(entry) = map.iter_mut().find(|(existing, _)| *existing == key) {
			entry.1 = value;
			return Ok(());
		}

		if map.len() == map.capacity() {
			map.try_reserve(1)
				.map_err(|_| PackError::HostAllocation { what: "map", count: map.len() + 1 })?;
		}
		map.push((key, value));
		Ok(())
	}

	fn finish_map(&mut self, map: Vec<(Value, Value)>) -> Result<Value> {
		Ok(Value::Map(map))
	}
}
