use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use packdoc::pack::{Value, decode_reader, to_json};

/// Output truncation limits for the text rendering of decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed per array or map.
	pub max_items: usize,
	/// Maximum nesting depth rendered before eliding.
	pub max_print_depth: usize,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_string_len: 200,
			max_items: 64,
			max_print_depth: 16,
		}
	}
}

/// Decode a document and print it as text or JSON.
pub fn run(path: PathBuf, json: bool, pretty: bool) -> packdoc::pack::Result<()> {
	let file = File::open(&path)?;
	let value = decode_reader(BufReader::new(file))?;

	if json {
		let rendered = to_json(&value)?;
		if pretty {
			println!("{}", serde_json::to_string_pretty(&rendered).map_err(std::io::Error::from)?);
		} else {
			println!("{rendered}");
		}
		return Ok(());
	}

	println!("path: {}", path.display());
	println!("root: {}", value.kind());
	println!("decoded:");
	print_value(&value, 0, 0, PrintOptions::default());

	Ok(())
}

fn print_value(value: &Value, indent: usize, depth: usize, options: PrintOptions) {
	let pad = " ".repeat(indent);
	match value {
		Value::Nil => println!("{pad}nil"),
		Value::Bool(v) => println!("{pad}{v}"),
		Value::I64(v) => println!("{pad}{v}"),
		Value::U64(v) => println!("{pad}{v}"),
		Value::F32(v) => println!("{pad}{v}"),
		Value::F64(v) => println!("{pad}{v}"),
		Value::String(v) => println!("{pad}\"{}\"", truncate(v, options.max_string_len)),
		Value::Array(items) => {
			if depth >= options.max_print_depth {
				println!("{pad}[... {} items]", items.len());
				return;
			}
			println!("{pad}[");
			for item in items.iter().take(options.max_items) {
				print_value(item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_items {
				println!("{pad}  ... {} more", items.len() - options.max_items);
			}
			println!("{pad}]");
		}
		Value::Map(entries) => {
			if depth >= options.max_print_depth {
				println!("{pad}{{... {} entries}}", entries.len());
				return;
			}
			println!("{pad}{{");
			for (key, val) in entries.iter().take(options.max_items) {
				print!("{pad}  ");
				print_key(key, options);
				print!(" = ");
				if matches!(val, Value::Array(_) | Value::Map(_)) {
					println!();
					print_value(val, indent + 4, depth + 1, options);
				} else {
					print_value(val, 0, depth + 1, options);
				}
			}
			if entries.len() > options.max_items {
				println!("{pad}  ... {} more entries", entries.len() - options.max_items);
			}
			println!("{pad}}}");
		}
	}
}

fn print_key(key: &Value, options: PrintOptions) {
	match key {
		Value::String(v) => print!("\"{}\"", truncate(v, options.max_string_len)),
		Value::Nil => print!("nil"),
		Value::Bool(v) => print!("{v}"),
		Value::I64(v) => print!("{v}"),
		Value::U64(v) => print!("{v}"),
		Value::F32(v) => print!("{v}"),
		Value::F64(v) => print!("{v}"),
		Value::Array(items) => print!("[{} items]", items.len()),
		Value::Map(entries) => print!("{{{} entries}}", entries.len()),
	}
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
