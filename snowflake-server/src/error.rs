//! HTTP error mapping.
//!
//! Handlers return [`ApiError`]; it renders as a JSON [`ErrorResponse`] with
//! the matching status code.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use thiserror::Error;

use crate::schemas::{ErrorCode, ErrorResponse};

#[derive(Debug, Error)]
pub enum ApiError {
	/// Bad id, parameter out of range, unknown style, malformed body.
	#[error("{0}")]
	InvalidRequest(String),

	#[error("Snowflake {0} not found")]
	NotFound(u64),

	/// Details are logged, never sent to the client.
	#[error("{0}")]
	Internal(String),
}

impl ApiError {
	pub fn code(&self) -> ErrorCode {
		match self {
			ApiError::InvalidRequest(_) => ErrorCode::InvalidRequest,
			ApiError::NotFound(_) => ErrorCode::NotFound,
			ApiError::Internal(_) => ErrorCode::InternalError,
		}
	}
}

impl From<snowflake_core::Error> for ApiError {
	fn from(err: snowflake_core::Error) -> Self {
		use snowflake_core::Error;
		match err {
			Error::InvalidSize(_) | Error::UnknownStyle(_) => ApiError::InvalidRequest(err.to_string()),
			Error::Io(_) | Error::Codec(_) => ApiError::Internal(err.to_string()),
		}
	}
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
			ApiError::NotFound(_) => StatusCode::NOT_FOUND,
			ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	fn error_response(&self) -> HttpResponse {
		let message = match self {
			ApiError::Internal(details) => {
				error!("Request failed: {details}");
				"Internal server error".to_owned()
			}
			other => other.to_string(),
		};
		HttpResponse::build(self.status_code()).json(ErrorResponse { code: self.code(), message })
	}
}
