pub mod routes;
pub mod state;

use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(
	version = hearth_cli::VERSION,
	rename_all = "kebab",
	styles = hearth_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = hearth_config::load(&args.config)?;

	init_tracing(&config);

	let http_addr: SocketAddr = config.service.http_bind.parse()?;
	let relay_addr: SocketAddr = config.service.relay_bind.parse()?;
	let state = AppState::new(config).await?;
	let app = routes::router(state.clone());
	let relay_app = routes::relay_router(state);
	let http_listener = TcpListener::bind(http_addr).await?;

	tracing::info!(%http_addr, "Property API listening.");

	let http_server = axum::serve(http_listener, app);
	let relay_listener = TcpListener::bind(relay_addr).await?;

	tracing::info!(%relay_addr, "Insight relay listening.");

	let relay_server = axum::serve(relay_listener, relay_app);

	tokio::try_join!(http_server, relay_server)?;

	Ok(())
}

fn init_tracing(config: &hearth_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).init();
}
