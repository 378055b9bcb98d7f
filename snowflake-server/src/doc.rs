//! OpenAPI document, served at `/v1/openapi.json`.

use utoipa::OpenApi;

use crate::schemas::{CreateSnowflakeRequest, ErrorCode, ErrorResponse, SnowflakeResponse, StyleResponse, StyleSchema};

#[derive(OpenApi)]
#[openapi(
	info(
		title = "Snowflake API",
		description = "Generates, stores and serves seeded ASCII-art snowflakes."
	),
	paths(
		crate::routes::create_snowflake,
		crate::routes::list_snowflakes,
		crate::routes::get_snowflake,
		crate::routes::get_pattern,
		crate::routes::melt_snowflake,
		crate::routes::delete_snowflake,
		crate::routes::preview,
		crate::routes::list_styles,
	),
	components(schemas(CreateSnowflakeRequest, SnowflakeResponse, StyleResponse, StyleSchema, ErrorResponse, ErrorCode)),
	tags(
		(name = "snowflakes", description = "Snowflake lifecycle: create, read, list, melt, delete"),
		(name = "styles", description = "Glyph palettes")
	)
)]
pub struct ApiDoc;
