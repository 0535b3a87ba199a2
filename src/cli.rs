//! CLI 参数定义

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tally")]
#[command(version)]
#[command(about = "A persistent to-do list for the terminal")]
pub struct Cli {
    /// Data directory for tasks and config (defaults to ~/.tally)
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}
