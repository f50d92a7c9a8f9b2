//! Mapscribe Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Mapscribe
//! extraction and export pipeline. It includes:
//!
//! - **Geometry**: Positions, sizes and rounded edge points ([`geometry`] module)
//! - **Names**: Per-pass interned node names ([`name::NodeName`], [`name::NameTable`])
//! - **Records**: Extracted node boxes and link endpoints ([`record`] module)
//! - **Stats**: Traversal statistics reported with every export ([`stats::ExportStats`])

pub mod geometry;
pub mod name;
pub mod record;
pub mod stats;
