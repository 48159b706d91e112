use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use dirtree::RenderOptions;
use dirtree::cli::{Cli, Command, PrintArgs, ServeArgs};
use dirtree::server::{self, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match (&cli.command, cli.verbose) {
        (_, true) => "debug",
        (Some(Command::Serve(_)), false) => "info",
        (None, false) => "warn",
    };
    init_tracing(default_level);

    let result = match cli.command {
        Some(Command::Serve(args)) => serve(args).await,
        None => print(cli.print).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dirtree: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_tracing(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

async fn print(args: PrintArgs) -> anyhow::Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from("."));
    let options = RenderOptions {
        max_depth: args.max_depth,
    };

    let rendered = dirtree::render_path(&path, &options).await?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(rendered.text.as_bytes())
        .context("failed to write tree")?;
    stdout.flush().context("failed to write tree")
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let default_path = match args.default_path {
        Some(path) => path,
        None => std::env::current_dir().context("failed to read working directory")?,
    };

    server::run(ServerConfig {
        bind: args.bind,
        default_path,
        options: RenderOptions {
            max_depth: args.max_depth,
        },
        read_timeout: Duration::from_secs(args.read_timeout_secs),
    })
    .await
}
