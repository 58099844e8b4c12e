//! Application configuration from CLI flags and environment.

use clap::Parser;

/// bigfib: arbitrary-precision Fibonacci calculator.
#[derive(Parser, Debug)]
#[command(name = "bigfib", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Fibonacci index to compute, as decimal text of any size.
    #[arg(
        short,
        long,
        default_value = "100",
        env = "BIGFIB_N",
        allow_hyphen_values = true
    )]
    pub n: String,

    /// Algorithm to use: fast, matrix, or all.
    #[arg(long, default_value = "all")]
    pub algo: String,

    /// Do not truncate long results.
    #[arg(short, long)]
    pub verbose: bool,

    /// Show digit and bit counts alongside the result.
    #[arg(short, long)]
    pub details: bool,

    /// Report only the magnitude (digits and bits) of the result.
    #[arg(long)]
    pub digits_only: bool,

    /// Emit one JSON object per result.
    #[arg(long, conflicts_with = "quiet")]
    pub json: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
