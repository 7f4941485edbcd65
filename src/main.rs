use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use ttl_shortener::config::Config;

/// In-memory URL shortener with time-based expiry.
#[derive(Parser)]
#[command(name = "ttl-shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Port to listen on (replaces the port from `LISTEN`)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(port) = cli.port {
        config = config.with_port(port);
    }
    config.validate()?;

    init_tracing(&config);
    config.print_summary();

    ttl_shortener::server::run(config).await
}

/// Installs the global subscriber in the configured format.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
