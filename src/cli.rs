use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dirtree")]
#[command(about = "Render a directory as a box-drawing tree with file and directory counts", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub print: PrintArgs,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve a web form that renders submitted paths
    Serve(ServeArgs),
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Directory to render (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Fail instead of descending more than this many levels
    #[arg(long = "max-depth")]
    pub max_depth: Option<usize>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "DIRTREE_BIND", default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Path prefilled in the form (defaults to the working directory)
    #[arg(long = "default-path", env = "DIRTREE_DEFAULT_PATH")]
    pub default_path: Option<PathBuf>,

    /// Fail instead of descending more than this many levels
    #[arg(long = "max-depth")]
    pub max_depth: Option<usize>,

    /// Seconds a client may take to send its request before being dropped
    #[arg(long = "read-timeout", default_value_t = 10)]
    pub read_timeout_secs: u64,
}
