use crate::pack::value::Value;
use crate::pack::{PackError, Result};

/// Maximum container nesting depth [`to_json`] will render.
const MAX_RENDER_DEPTH: usize = 128;

/// Convert a decoded tree into a [`serde_json::Value`] for display.
///
/// JSON object keys must be strings, so non-string map keys are rendered to
/// their text form (`null`, `true`, digits, or the JSON of the key itself
/// for container keys). Later duplicates produced by that rendering keep the
/// later value, consistent with decode-time map semantics.
///
/// Rendering is depth-capped: conversion recurses once per nesting level,
/// and so do [`serde_json::Value`]'s own serialize and drop, so documents
/// nesting deeper than the cap fail with
/// [`PackError::RenderDepthExceeded`] instead of exhausting the native
/// stack. The decoder itself has no such limit.
pub fn to_json(value: &Value) -> Result<serde_json::Value> {
	convert(value, MAX_RENDER_DEPTH)
}

fn convert(value: &Value, budget: usize) -> Result<serde_json::Value> {
	Ok(match value {
		Value::Nil => serde_json::Value::Null,
		Value::Bool(v) => serde_json::Value::Bool(*v),
		Value::I64(v) => serde_json::Value::from(*v),
		Value::U64(v) => serde_json::Value::from(*v),
		Value::F32(v) => serde_json::Value::from(f64::from(*v)),
		Value::F64(v) => serde_json::Value::from(*v),
		Value::String(v) => serde_json::Value::String(v.to_string()),
		Value::Array(items) => {
			let budget = spend(budget)?;
			let mut out = Vec::with_capacity(items.len());
			for item in items {
				out.push(convert(item, budget)?);
			}
			serde_json::Value::Array(out)
		}
		Value::Map(entries) => {
			let budget = spend(budget)?;
			let mut object = serde_json::Map::with_capacity(entries.len());
			for (key, val) in entries {
				object.insert(json_key(key, budget)?, convert(val, budget)?);
			}
			serde_json::Value::Object(object)
		}
	})
}

/// Consume one level of render budget on entering a container.
fn spend(budget: usize) -> Result<usize> {
	budget.checked_sub(1).ok_or(PackError::RenderDepthExceeded {
		max_depth: MAX_RENDER_DEPTH,
	})
}

/// Render a map key as a JSON object key.
fn json_key(key: &Value, budget: usize) -> Result<String> {
	Ok(match key {
		Value::String(v) => v.to_string(),
		Value::Nil => "null".to_owned(),
		Value::Bool(v) => v.to_string(),
		Value::I64(v) => v.to_string(),
		Value::U64(v) => v.to_string(),
		Value::F32(v) => v.to_string(),
		Value::F64(v) => v.to_string(),
		Value::Array(_) | Value::Map(_) => convert(key, budget)?.to_string(),
	})
}
