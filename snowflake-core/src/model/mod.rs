//! Top-level module for snowflake pattern generation.
//!
//! A pattern is built in three steps:
//! - A seeded pseudo-random sequence (`SeededSequence`)
//! - One 60° wedge of branch glyphs drawn from that sequence
//! - Six rotated copies of the wedge rasterized onto a square grid
//!
//! Only the high-level entry points (`generate`, `GenerationRequest`,
//! `Style`) and the sequence are public.

/// High-level generation entry points.
pub mod generator;

/// Glyph palettes and the style enumeration selecting them.
pub mod style;

/// Lehmer / Park-Miller sequence seeded from a string hash.
pub mod sequence;

/// Wedge synthesis.
///
/// Not exposed
mod segment;

/// Six-fold rotation onto the character grid.
///
/// Not exposed
mod raster;
