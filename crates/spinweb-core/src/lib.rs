//! Spinweb Core Types and Definitions
//!
//! This crate provides the foundational types for Spinweb maturity
//! diagrams. It includes:
//!
//! - **Levels**: The four-stage ordinal maturity scale ([`level::Level`])
//! - **Taxonomy**: The fixed catalog of quadrants and parameters ([`taxonomy`] module)
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Polar geometry and closed polygons ([`geometry`] module)
//! - **Draw**: Visual definitions for chart overlays ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod level;
pub mod taxonomy;
