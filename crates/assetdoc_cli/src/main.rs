#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "assetdoc", about = "Serialized game-engine asset inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info(cmd::info::Args),
	Export(cmd::export::Args),
	Hierarchy(cmd::hierarchy::Args),
	Root(cmd::root::Args),
	Deps(cmd::deps::Args),
	ShaderState(cmd::shader_state::Args),
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> assetdoc::asset::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Export(args) => cmd::export::run(args),
		Commands::Hierarchy(args) => cmd::hierarchy::run(args),
		Commands::Root(args) => cmd::root::run(args),
		Commands::Deps(args) => cmd::deps::run(args),
		Commands::ShaderState(args) => cmd::shader_state::run(args),
	}
}
