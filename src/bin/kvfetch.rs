//! kvfetch CLI
//!
//! Sends one command to a key-value server and saves the JSON reply.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use kvfetch::{Config, Terminator};
use tracing_subscriber::{fmt, EnvFilter};

/// kvfetch
#[derive(Parser, Debug)]
#[command(name = "kvfetch")]
#[command(about = "Send one command to a key-value server and save the JSON reply")]
#[command(version)]
struct Args {
    /// Server host
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Server port
    #[arg(short, long, default_value = "6379", value_parser = clap::value_parser!(u16).range(1..))]
    port: u16,

    /// Command text sent to the server
    #[arg(short, long, default_value = kvfetch::config::DEFAULT_COMMAND)]
    command: String,

    /// Bytes appended to the command text
    #[arg(short, long, value_enum, default_value_t = TerminatorArg::Nul)]
    terminator: TerminatorArg,

    /// File the decoded reply is written to
    #[arg(short, long, default_value = "result.json")]
    output: PathBuf,

    /// Indent width of the output JSON
    #[arg(long, default_value = "2")]
    indent: usize,

    /// Connect timeout in milliseconds (0 = none)
    #[arg(long, default_value = "0")]
    connect_timeout_ms: u64,

    /// Read timeout in milliseconds (0 = wait for the server to close)
    #[arg(long, default_value = "0")]
    read_timeout_ms: u64,

    /// Write timeout in milliseconds (0 = none)
    #[arg(long, default_value = "0")]
    write_timeout_ms: u64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TerminatorArg {
    Nul,
    Newline,
    Crlf,
    None,
}

impl From<TerminatorArg> for Terminator {
    fn from(arg: TerminatorArg) -> Self {
        match arg {
            TerminatorArg::Nul => Terminator::Nul,
            TerminatorArg::Newline => Terminator::Newline,
            TerminatorArg::Crlf => Terminator::CrLf,
            TerminatorArg::None => Terminator::None,
        }
    }
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,kvfetch=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .host(&args.host)
        .port(args.port)
        .command(&args.command)
        .terminator(args.terminator.into())
        .output(&args.output)
        .indent(args.indent)
        .connect_timeout_ms(args.connect_timeout_ms)
        .read_timeout_ms(args.read_timeout_ms)
        .write_timeout_ms(args.write_timeout_ms)
        .build();

    tracing::debug!("kvfetch v{}", kvfetch::VERSION);

    if let Err(e) = kvfetch::fetch(&config) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }

    tracing::info!("Saved reply to {}", config.output.display());
}
