//! Seeded ASCII-art snowflake generation library.
//!
//! This crate provides:
//! - A deterministic pattern generator with six-fold rotational symmetry
//! - Glyph palettes selected by `Style`
//! - A single-table snowflake store with optional on-disk persistence
//!
//! Generation is a pure function of `(seed, size, style)`: identical inputs
//! give byte-identical patterns, whatever the thread, process or platform.

/// Pattern generation: seeded sequence, wedge synthesis and rasterization.
pub mod model;

/// Snowflake table used by the REST service.
pub mod store;

mod error;

/// File helpers for the store (atomic writes, optional reads).
///
/// Not exposed
pub(crate) mod io;

pub use error::Error;
pub use model::generator::{generate, GenerationRequest};
pub use model::style::Style;
pub use store::{NewSnowflake, Snowflake, SnowflakeStore};
