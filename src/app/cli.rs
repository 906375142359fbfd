use clap::Args;
use std::path::PathBuf;

/// Flags accepted by every utility
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// Enable verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a TOML settings file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,
}

/// Flags of the utilities that re-prompt on invalid answers
#[derive(Args, Debug, Clone, Default)]
pub struct RetryArgs {
    /// Give up after this many invalid answers to one prompt
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_attempts: Option<u32>,
}
