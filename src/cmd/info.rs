use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use packdoc::pack::{Value, decode_reader};

/// Aggregate statistics over one decoded document.
#[derive(Debug, Default, serde::Serialize)]
pub struct DocumentStats {
	pub root_kind: &'static str,
	pub max_depth: usize,
	pub nodes: usize,
	pub arrays: usize,
	pub maps: usize,
	pub map_entries: usize,
	pub strings: usize,
	pub string_bytes: usize,
	pub ints: usize,
	pub floats: usize,
	pub bools: usize,
	pub nils: usize,
}

/// Decode a document and print high-level statistics.
pub fn run(path: PathBuf, json: bool) -> packdoc::pack::Result<()> {
	let file = File::open(&path)?;
	let value = decode_reader(BufReader::new(file))?;
	let stats = scan_stats(&value);

	if json {
		println!("{}", serde_json::to_string_pretty(&stats).map_err(std::io::Error::from)?);
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("root_kind: {}", stats.root_kind);
	println!("max_depth: {}", stats.max_depth);
	println!("nodes: {}", stats.nodes);
	println!("arrays: {}", stats.arrays);
	println!("maps: {}", stats.maps);
	println!("map_entries: {}", stats.map_entries);
	println!("strings: {}", stats.strings);
	println!("string_bytes: {}", stats.string_bytes);
	println!("ints: {}", stats.ints);
	println!("floats: {}", stats.floats);
	println!("bools: {}", stats.bools);
	println!("nils: {}", stats.nils);

	Ok(())
}

/// Walk the tree with an explicit stack; documents can nest far deeper than
/// the native stack allows.
fn scan_stats(root: &Value) -> DocumentStats {
	let mut stats = DocumentStats {
		root_kind: root.kind(),
		..DocumentStats::default()
	};

	let mut stack = vec![(root, 1_usize)];
	while let Some((value, depth)) = stack.pop() {
		stats.nodes += 1;
		stats.max_depth = stats.max_depth.max(depth);

		match value {
			Value::Nil => stats.nils += 1,
			Value::Bool(_) => stats.bools += 1,
			Value::I64(_) | Value::U64(_) => stats.ints += 1,
			Value::F32(_) | Value::F64(_) => stats.floats += 1,
			Value::String(v) => {
				stats.strings += 1;
				stats.string_bytes += v.len();
			}
			Value::Array(items) => {
				stats.arrays += 1;
				for item in items {
					stack.push((item, depth + 1));
				}
			}
			Value::Map(entries) => {
				stats.maps += 1;
				stats.map_entries += entries.len();
				for (key, val) in entries {
					stack.push((key, depth + 1));
					stack.push((val, depth + 1));
				}
			}
		}
	}

	stats
}
