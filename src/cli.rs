use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Parser, Debug)]
#[command(name = "envprep", version, about = "Workspace environment bootstrap CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Working root under which directories are created and the config file is looked up"
    )]
    pub root: PathBuf,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CONFIG_FILE,
        help = "Configuration file name, resolved relative to the root"
    )]
    pub config: String,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// With no subcommand, `setup` runs followed by `validate`.
#[derive(Subcommand, Debug)]
pub enum Commands {
    Setup,
    Validate,
    Status,
}
