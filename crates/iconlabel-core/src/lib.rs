//! Core types, font metrics contract, and error types for the icon label widget.
//!
//! This crate provides the foundational types shared by the layout and render crates:
//! - Value types (colors, padding, bounds, measure specs, fonts)
//! - The [`FontMetrics`] collaborator contract and a built-in fixed-advance provider
//! - The [`DrawSurface`] contract the label paints onto
//! - Error types

pub mod errors;
pub mod font;
pub mod surface;
pub mod types;

pub use errors::*;
pub use font::*;
pub use surface::*;
pub use types::*;
