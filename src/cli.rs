use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "groupcheck", version, about = "Report OAuth group-management configuration and Google Groups setup steps")]
pub struct Cli {
    /// Host application settings file (TOML)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
