#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "nbtdump", about = "Named Binary Tag (NBT) inspection tools")]
struct Cli {
	/// Raise log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the decoded tree as indented text.
	Print(cmd::print::Args),
	/// Print the decoded tree as JSON.
	Json(cmd::json::Args),
	/// Summarize envelope, sizes, and tree shape.
	Info(cmd::info::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli.command) {
		tracing::debug!(kind = ?err.kind(), offset = ?err.offset(), "command failed");
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> nbtdump::nbt::Result<()> {
	match command {
		Commands::Print(args) => cmd::print::run(args),
		Commands::Json(args) => cmd::json::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
