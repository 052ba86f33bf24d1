use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shapetree")]
#[command(about = "Print the shape structure of nested tensor containers", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a JSON structure description; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Include dtype, device, and gradient info on every tensor
    #[arg(long)]
    pub detailed: bool,

    /// Spaces per nesting level
    #[arg(long, default_value_t = 4)]
    pub indent: usize,

    /// Maximum nesting depth accepted before giving up
    #[arg(long, default_value_t = shapetree_engine::MAX_DEPTH)]
    pub max_depth: usize,

    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Colorize only when stdout is a terminal
    Auto,
    Always,
    Never,
}
