//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::Parser;
use snowflake_core::SnowflakeStore;

/// Snowflake REST service.
///
/// Every option can also be set through its `SNOWFLAKE_*` environment
/// variable. Logging is controlled with `RUST_LOG` (default `info`).
#[derive(Parser, Debug, Clone)]
#[command(name = "snowflake-server", version, about)]
pub struct ServerConfig {
	/// Address to bind.
	#[arg(long, env = "SNOWFLAKE_HOST", default_value = "127.0.0.1")]
	pub host: String,

	/// Port to bind.
	#[arg(long, env = "SNOWFLAKE_PORT", default_value_t = 5000)]
	pub port: u16,

	/// Table file. Without it, snowflakes are kept in memory only.
	#[arg(long, env = "SNOWFLAKE_DATA_FILE")]
	pub data_file: Option<PathBuf>,

	/// Worker threads. Defaults to the number of CPUs.
	#[arg(long, env = "SNOWFLAKE_WORKERS")]
	pub workers: Option<usize>,

	/// Single origin allowed by CORS. Any origin when unset.
	#[arg(long, env = "SNOWFLAKE_CORS_ORIGIN")]
	pub cors_origin: Option<String>,
}

impl ServerConfig {
	/// Number of HTTP workers to start; never zero.
	pub fn workers(&self) -> usize {
		self.workers.unwrap_or_else(num_cpus::get).max(1)
	}

	/// Opens the configured store.
	///
	/// # Errors
	/// Fails if the data file exists but cannot be read or decoded.
	pub fn open_store(&self) -> Result<SnowflakeStore, snowflake_core::Error> {
		match &self.data_file {
			Some(path) => SnowflakeStore::open(path),
			None => Ok(SnowflakeStore::in_memory()),
		}
	}
}
