//! REST service storing and serving generated snowflakes.
//!
//! The service is a thin layer over `snowflake-core`: it validates and
//! defaults request parameters, calls the generator, and keeps the results in
//! a `SnowflakeStore` guarded by a mutex.

use std::sync::{Mutex, MutexGuard};

use actix_cors::Cors;
use actix_web::http::{header, Method};
use actix_web::web;
use snowflake_core::SnowflakeStore;

pub mod config;
pub mod doc;
pub mod error;
pub mod routes;
pub mod schemas;

use crate::error::ApiError;

/// State shared by every worker.
pub struct SharedData {
	pub store: SnowflakeStore,
}

impl SharedData {
	pub fn new(store: SnowflakeStore) -> Self {
		Self { store }
	}
}

/// Application data type handed to handlers.
pub type AppState = web::Data<Mutex<SharedData>>;

/// Wraps a store into application data.
pub fn app_state(store: SnowflakeStore) -> AppState {
	web::Data::new(Mutex::new(SharedData::new(store)))
}

/// Locks the shared state, mapping a poisoned lock to an internal error.
pub(crate) fn lock(data: &AppState) -> Result<MutexGuard<'_, SharedData>, ApiError> {
	data.lock().map_err(|_| ApiError::Internal("Store lock failed".to_owned()))
}

/// Builds the CORS middleware.
///
/// - `None`: any origin is allowed (local development, desktop client)
/// - `Some(origin)`: only that origin may call the API
pub fn cors(origin: Option<&str>) -> Cors {
	match origin {
		None => Cors::permissive(),
		Some(origin) => Cors::default()
			.allowed_origin(origin)
			.allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
			.allowed_header(header::CONTENT_TYPE)
			.max_age(3600),
	}
}
