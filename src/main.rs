//! tokengate: stateless bearer-token issuance and verification gate.
//! Used by: binary entrypoint.

pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
pub mod telemetry;
pub mod token;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // refuses to start without a signing secret
    let config = config::Config::from_env()?;
    let state = state::build_state(&config);
    tracing::info!("starting tokengate on {}", config.bind_addr);

    server::run(state, &config.bind_addr).await?;
    Ok(())
}
