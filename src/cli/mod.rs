mod config;

pub mod args;
pub mod global;
pub mod handlers;

use clap::{Parser, Subcommand};
use flxb::Result;

#[derive(Parser)]
#[command(name = "flxb")]
#[command(version)]
#[command(about = "Radix-agnostic block codec: encode files into arbitrary symbol alphabets and back", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: global::GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a file into symbol blocks
    #[command(visible_alias = "e")]
    Encode(args::EncodeArgs),

    /// Decode symbol blocks back into bytes
    #[command(visible_alias = "d")]
    Decode(args::DecodeArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.global.log_level(),
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .ok();

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global),
    }
}
