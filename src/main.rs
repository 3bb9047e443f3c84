#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "packdoc", about = "MessagePack document inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Decode {
		path: PathBuf,
		#[arg(long)]
		json: bool,
		#[arg(long)]
		pretty: bool,
	},
	Info {
		path: PathBuf,
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> packdoc::pack::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Decode { path, json, pretty } => cmd::decode::run(path, json, pretty),
		Commands::Info { path, json } => cmd::info::run(path, json),
	}
}
