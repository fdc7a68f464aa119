use clap::Parser;
use qfilter::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    let config = cli::load_config(&cli)?;
    tracing::debug!(?config, "configuration loaded");

    let mut out = std::io::stdout().lock();
    cli::run(&cli, &config, &mut out)
}
