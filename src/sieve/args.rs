use clap::{Parser, Subcommand, ValueEnum};
use sieve::model::{Color, Size};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sieve")]
#[command(about = "Filter a product catalog with composable criteria", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Only products of this color (red, yellow, black)
    #[arg(long)]
    pub color: Option<Color>,

    /// Only products of this size (small, medium, large)
    #[arg(long)]
    pub size: Option<Size>,

    /// Only products with exactly this name
    #[arg(long)]
    pub name: Option<String>,

    /// Match products satisfying any criterion instead of all of them
    #[arg(long)]
    pub any: bool,

    /// Print the products that do NOT match
    #[arg(long)]
    pub invert: bool,

    /// Read products from a JSON file instead of the built-in sample
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Print matches as JSON
    #[arg(long)]
    pub json: bool,

    /// Log verbosity (RUST_LOG takes precedence)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    pub log_level: LogLevel,
}

impl Cli {
    pub fn has_criteria(&self) -> bool {
        self.color.is_some() || self.size.is_some() || self.name.is_some()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the attributes criteria can use and their allowed values
    #[command(alias = "attributes")]
    Attrs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
