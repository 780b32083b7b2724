use order_deriver::{api::Server, board::OrderBoard, config::Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// The main entry point for the order deriver service.
///
/// This function initializes logging, loads the configuration (from the path
/// given as the first argument, or `config/default.toml`), seeds the board
/// with the predefined input and starts the API server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging. RUST_LOG overrides the default `info` level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load the configuration from the TOML file named on the command line.
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)?;
    info!("Order deriver starting with config: {:?}", config);

    // Read the predefined payload the board starts from.
    // It is kept as text and parsed on each derivation.
    let input = config.load_input()?;
    info!(
        "Loaded predefined input from {} ({} bytes)",
        config.input.path,
        input.len()
    );

    // The board holds the working input and the last derived order sheet.
    let board = OrderBoard::new(input, config.policy.default);

    // Start the API server. This binds to the configured host and port and
    // serves requests until shutdown.
    let server = Server::new(config, board);
    server.start().await?;

    Ok(())
}
