//! Request and response payloads, with their OpenAPI schemas.
//!
//! Core types stay free of HTTP and utoipa concerns; these DTOs mirror them
//! for the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use snowflake_core::{Snowflake, Style};
use utoipa::{IntoParams, ToSchema};

/// Parameters for creating (or previewing) a snowflake. Every field is optional.
#[derive(Deserialize, Serialize, Debug, Default, Clone, ToSchema, IntoParams)]
#[serde(deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct CreateSnowflakeRequest {
	/// Seed string. Derived from the clock and entropy when missing or blank.
	#[schema(example = "my-unique-seed")]
	pub seed: Option<String>,

	/// Grid side length, 1 to 20. Even values are bumped to the next odd one.
	/// Random odd value between 3 and 13 when missing.
	#[schema(example = 9, minimum = 1, maximum = 20)]
	pub size: Option<i64>,

	/// One of `classic`, `dense`, `minimal`, `mixed`. Random when missing.
	#[schema(example = "classic")]
	pub style: Option<String>,
}

/// A stored snowflake.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct SnowflakeResponse {
	#[schema(example = 1)]
	pub id: u64,
	#[schema(example = "my-unique-seed")]
	pub seed: String,
	#[schema(example = 5)]
	pub size: usize,
	#[schema(value_type = StyleSchema)]
	pub style: Style,
	/// `size` lines of `size` characters joined by newlines.
	#[schema(example = "  +  \n+ **+\n *+  \n+***+\n  +  ")]
	pub pattern: String,
	pub created_at: DateTime<Utc>,
	pub melted: bool,
}

impl From<Snowflake> for SnowflakeResponse {
	fn from(row: Snowflake) -> Self {
		Self {
			id: row.id,
			seed: row.seed,
			size: row.size,
			style: row.style,
			pattern: row.pattern,
			created_at: row.created_at,
			melted: row.melted,
		}
	}
}

/// OpenAPI schema for [`Style`], which stays free of utoipa in the core.
#[derive(ToSchema)]
#[schema(as = Style)]
pub enum StyleSchema {
	#[schema(rename = "classic")]
	Classic,
	#[schema(rename = "dense")]
	Dense,
	#[schema(rename = "minimal")]
	Minimal,
	#[schema(rename = "mixed")]
	Mixed,
}

/// A style and the glyphs it draws with.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct StyleResponse {
	#[schema(example = "classic")]
	pub name: String,
	/// Palette glyphs, in draw order.
	#[schema(example = "*+x.")]
	pub glyphs: String,
}

impl From<Style> for StyleResponse {
	fn from(style: Style) -> Self {
		Self {
			name: style.to_string(),
			glyphs: style.palette().iter().collect(),
		}
	}
}

/// Stable machine-readable error code.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
	InvalidRequest,
	NotFound,
	InternalError,
}

/// Error body returned with every 4xx/5xx response.
#[derive(Serialize, Deserialize, Debug, Clone, ToSchema)]
pub struct ErrorResponse {
	pub code: ErrorCode,
	#[schema(example = "Snowflake 42 not found")]
	pub message: String,
}
