//! bigfib: arbitrary-precision Fibonacci calculator.

use bigfib_lib::{app, config};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let config = config::AppConfig::parse();
    std::process::exit(app::run_and_report(&config));
}
