//! HTTP handlers for the `/v1` API.

use actix_web::http::header::ContentType;
use actix_web::{delete, get, post, put, web, HttpResponse};
use chrono::Utc;
use log::info;
use rand::Rng;
use snowflake_core::{GenerationRequest, NewSnowflake, Style};

use crate::doc::ApiDoc;
use crate::error::ApiError;
use crate::schemas::{CreateSnowflakeRequest, SnowflakeResponse, StyleResponse};
use crate::{lock, AppState};
use utoipa::OpenApi;

/// Largest size a client may ask for, before odd normalization.
pub const MAX_SIZE: i64 = 20;

impl CreateSnowflakeRequest {
	/// Validates the request and fills in missing parameters.
	///
	/// # Behavior
	/// - `size` must be in `1..=MAX_SIZE`; even values are bumped to odd
	/// - Missing `size` becomes a random odd value in `3..=13`
	/// - `style` must name a known style; missing means random
	/// - Missing or blank `seed` is derived from the clock and entropy
	///
	/// # Errors
	/// Returns `ApiError::InvalidRequest` for out-of-range sizes and unknown styles.
	pub fn resolve(&self) -> Result<GenerationRequest, ApiError> {
		let size = match self.size {
			Some(size) if (1..=MAX_SIZE).contains(&size) => size as usize,
			Some(size) => {
				return Err(ApiError::InvalidRequest(format!(
					"Size must be between 1 and {MAX_SIZE}, got {size}"
				)));
			}
			None => rand::rng().random_range(1..=6) * 2 + 1,
		};

		let style = match &self.style {
			Some(name) => name.parse::<Style>()?,
			None => Style::random(),
		};

		let seed = match &self.seed {
			Some(seed) if !seed.trim().is_empty() => seed.clone(),
			_ => format!("{}-{:08x}", Utc::now().timestamp_millis(), rand::rng().random::<u32>()),
		};

		Ok(GenerationRequest::new(seed, size, style).normalized())
	}
}

/// Parses a path id; ids are positive integers.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
	match raw.parse::<u64>() {
		Ok(id) if id > 0 => Ok(id),
		_ => Err(ApiError::InvalidRequest(format!("Invalid snowflake id '{raw}'"))),
	}
}

/// HTTP POST endpoint `/v1/snowflakes`
///
/// Generates a snowflake from the JSON body and stores it. An empty body is
/// the same as `{}`: every parameter is defaulted.
#[utoipa::path(
	post,
	path = "/v1/snowflakes",
	tags = ["snowflakes"],
	request_body(content = CreateSnowflakeRequest, description = "Generation parameters, all optional"),
	responses(
		(status = 201, description = "Snowflake created", body = SnowflakeResponse),
		(status = 400, description = "Invalid parameters or malformed body", body = crate::schemas::ErrorResponse),
	)
)]
#[post("/v1/snowflakes")]
pub async fn create_snowflake(data: AppState, body: web::Bytes) -> Result<HttpResponse, ApiError> {
	let params: CreateSnowflakeRequest = if body.iter().all(u8::is_ascii_whitespace) {
		CreateSnowflakeRequest::default()
	} else {
		serde_json::from_slice(&body).map_err(|e| ApiError::InvalidRequest(format!("Malformed body: {e}")))?
	};

	let request = params.resolve()?;
	let pattern = request.generate()?;

	let row = lock(&data)?.store.insert(NewSnowflake {
		seed: request.seed,
		size: request.size,
		style: request.style,
		pattern,
		created_at: Utc::now(),
	})?;
	info!("Created snowflake {} ({}, size {})", row.id, row.style, row.size);

	Ok(HttpResponse::Created().json(SnowflakeResponse::from(row)))
}

/// HTTP GET endpoint `/v1/snowflakes`
///
/// Lists every stored snowflake, oldest first.
#[utoipa::path(
	get,
	path = "/v1/snowflakes",
	tags = ["snowflakes"],
	responses((status = 200, description = "All snowflakes", body = [SnowflakeResponse]))
)]
#[get("/v1/snowflakes")]
pub async fn list_snowflakes(data: AppState) -> Result<HttpResponse, ApiError> {
	let rows: Vec<SnowflakeResponse> = lock(&data)?.store.list().into_iter().map(Into::into).collect();
	Ok(HttpResponse::Ok().json(rows))
}

#[utoipa::path(
	get,
	path = "/v1/snowflakes/{id}",
	tags = ["snowflakes"],
	params(("id" = u64, Path, description = "Snowflake id")),
	responses(
		(status = 200, description = "The snowflake", body = SnowflakeResponse),
		(status = 400, description = "Id is not a positive integer", body = crate::schemas::ErrorResponse),
		(status = 404, description = "No such snowflake", body = crate::schemas::ErrorResponse),
	)
)]
#[get("/v1/snowflakes/{id}")]
pub async fn get_snowflake(data: AppState, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
	let id = parse_id(&path)?;
	let row = lock(&data)?.store.get(id).ok_or(ApiError::NotFound(id))?;
	Ok(HttpResponse::Ok().json(SnowflakeResponse::from(row)))
}

/// HTTP GET endpoint `/v1/snowflakes/{id}/pattern`
///
/// Returns the bare pattern as plain text, ready to print.
#[utoipa::path(
	get,
	path = "/v1/snowflakes/{id}/pattern",
	tags = ["snowflakes"],
	params(("id" = u64, Path, description = "Snowflake id")),
	responses(
		(status = 200, description = "Pattern text", body = String, content_type = "text/plain"),
		(status = 400, description = "Id is not a positive integer", body = crate::schemas::ErrorResponse),
		(status = 404, description = "No such snowflake", body = crate::schemas::ErrorResponse),
	)
)]
#[get("/v1/snowflakes/{id}/pattern")]
pub async fn get_pattern(data: AppState, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
	let id = parse_id(&path)?;
	let row = lock(&data)?.store.get(id).ok_or(ApiError::NotFound(id))?;
	Ok(HttpResponse::Ok().content_type(ContentType::plaintext()).body(row.pattern))
}

/// HTTP PUT endpoint `/v1/snowflakes/{id}/melt`
///
/// Flags a snowflake as melted. Melting an already melted snowflake succeeds
/// and changes nothing.
#[utoipa::path(
	put,
	path = "/v1/snowflakes/{id}/melt",
	tags = ["snowflakes"],
	params(("id" = u64, Path, description = "Snowflake id")),
	responses(
		(status = 200, description = "The melted snowflake", body = SnowflakeResponse),
		(status = 400, description = "Id is not a positive integer", body = crate::schemas::ErrorResponse),
		(status = 404, description = "No such snowflake", body = crate::schemas::ErrorResponse),
	)
)]
#[put("/v1/snowflakes/{id}/melt")]
pub async fn melt_snowflake(data: AppState, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
	let id = parse_id(&path)?;
	let row = lock(&data)?.store.melt(id)?.ok_or(ApiError::NotFound(id))?;
	info!("Melted snowflake {id}");
	Ok(HttpResponse::Ok().json(SnowflakeResponse::from(row)))
}

#[utoipa::path(
	delete,
	path = "/v1/snowflakes/{id}",
	tags = ["snowflakes"],
	params(("id" = u64, Path, description = "Snowflake id")),
	responses(
		(status = 200, description = "The deleted snowflake", body = SnowflakeResponse),
		(status = 400, description = "Id is not a positive integer", body = crate::schemas::ErrorResponse),
		(status = 404, description = "No such snowflake", body = crate::schemas::ErrorResponse),
	)
)]
#[delete("/v1/snowflakes/{id}")]
pub async fn delete_snowflake(data: AppState, path: web::Path<String>) -> Result<HttpResponse, ApiError> {
	let id = parse_id(&path)?;
	let row = lock(&data)?.store.delete(id)?.ok_or(ApiError::NotFound(id))?;
	info!("Deleted snowflake {id}");
	Ok(HttpResponse::Ok().json(SnowflakeResponse::from(row)))
}

/// HTTP GET endpoint `/v1/preview`
///
/// Generates a pattern from query parameters without storing it.
#[utoipa::path(
	get,
	path = "/v1/preview",
	tags = ["snowflakes"],
	params(CreateSnowflakeRequest),
	responses(
		(status = 200, description = "Pattern text", body = String, content_type = "text/plain"),
		(status = 400, description = "Invalid parameters", body = crate::schemas::ErrorResponse),
	)
)]
#[get("/v1/preview")]
pub async fn preview(query: web::Query<CreateSnowflakeRequest>) -> Result<HttpResponse, ApiError> {
	let pattern = query.resolve()?.generate()?;
	Ok(HttpResponse::Ok().content_type(ContentType::plaintext()).body(pattern))
}

#[utoipa::path(
	get,
	path = "/v1/styles",
	tags = ["styles"],
	responses((status = 200, description = "Known styles and their glyphs", body = [StyleResponse]))
)]
#[get("/v1/styles")]
pub async fn list_styles() -> HttpResponse {
	let styles: Vec<StyleResponse> = Style::ALL.into_iter().map(Into::into).collect();
	HttpResponse::Ok().json(styles)
}

#[get("/v1/openapi.json")]
pub async fn openapi() -> HttpResponse {
	HttpResponse::Ok().json(ApiDoc::openapi())
}

/// Registers every endpoint.
///
/// Query strings that fail to deserialize are reported with the same JSON
/// error body as the handlers use.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(
		web::QueryConfig::default()
			.error_handler(|err, _| ApiError::InvalidRequest(format!("Invalid query: {err}")).into()),
	)
	.service(create_snowflake)
	.service(list_snowflakes)
	.service(get_snowflake)
	.service(get_pattern)
	.service(melt_snowflake)
	.service(delete_snowflake)
	.service(preview)
	.service(list_styles)
	.service(openapi);
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("1", Some(1))]
	#[case("42", Some(42))]
	#[case("0", None)]
	#[case("-3", None)]
	#[case("abc", None)]
	#[case("", None)]
	fn parses_ids(#[case] raw: &str, #[case] expected: Option<u64>) {
		assert_eq!(parse_id(raw).ok(), expected);
	}

	#[test]
	fn fills_missing_parameters() {
		for _ in 0..200 {
			let request = CreateSnowflakeRequest::default().resolve().unwrap();
			assert!((3..=13).contains(&request.size));
			assert_eq!(request.size % 2, 1);
			assert!(!request.seed.is_empty());
		}
	}

	#[test]
	fn blank_seed_is_replaced() {
		let params = CreateSnowflakeRequest { seed: Some("   ".to_owned()), ..Default::default() };
		assert!(!params.resolve().unwrap().seed.trim().is_empty());
	}

	#[rstest]
	#[case(1, 1)]
	#[case(4, 5)]
	#[case(19, 19)]
	#[case(20, 21)]
	fn bumps_even_sizes(#[case] size: i64, #[case] expected: usize) {
		let params = CreateSnowflakeRequest { size: Some(size), ..Default::default() };
		assert_eq!(params.resolve().unwrap().size, expected);
	}

	#[rstest]
	#[case(0)]
	#[case(-1)]
	#[case(21)]
	fn rejects_out_of_range_sizes(#[case] size: i64) {
		let params = CreateSnowflakeRequest { size: Some(size), ..Default::default() };
		assert!(matches!(params.resolve(), Err(ApiError::InvalidRequest(_))));
	}

	#[test]
	fn rejects_unknown_styles() {
		let params = CreateSnowflakeRequest { style: Some("sparkly".to_owned()), ..Default::default() };
		assert!(matches!(params.resolve(), Err(ApiError::InvalidRequest(_))));
	}

	#[test]
	fn keeps_explicit_parameters() {
		let params = CreateSnowflakeRequest {
			seed: Some("my-unique-seed".to_owned()),
			size: Some(5),
			style: Some("Classic".to_owned()),
		};
		let request = params.resolve().unwrap();
		assert_eq!(request, GenerationRequest::new("my-unique-seed", 5, Style::Classic));
	}
}
