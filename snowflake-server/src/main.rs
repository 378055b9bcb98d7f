use std::io;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::info;

use snowflake_server::config::ServerConfig;
use snowflake_server::{app_state, cors, routes};

/// Main entry point for the server.
///
/// Opens the snowflake table, wraps it in a `Mutex` shared by all workers,
/// and starts an Actix-web HTTP server exposing the `/v1` API.
///
/// # Notes
/// - Binds to 127.0.0.1:5000 unless configured otherwise (see `--help`).
/// - Without `--data-file`, snowflakes are lost on exit.
#[actix_web::main]
async fn main() -> io::Result<()> {
	env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

	let config = ServerConfig::parse();
	let store = config.open_store().map_err(io::Error::other)?;
	match store.path() {
		Some(path) => info!("Persisting snowflakes to {}", path.display()),
		None => info!("No data file configured, snowflakes are kept in memory"),
	}
	let shared_data = app_state(store);

	info!("Listening on {}:{} with {} workers", config.host, config.port, config.workers());
	let cors_origin = config.cors_origin.clone();

	HttpServer::new(move || {
		App::new()
			.wrap(cors(cors_origin.as_deref()))
			.wrap(Logger::default())
			.app_data(shared_data.clone())
			.configure(routes::configure)
	})
		.workers(config.workers())
		.bind((config.host.as_str(), config.port))?
		.run()
		.await
}
