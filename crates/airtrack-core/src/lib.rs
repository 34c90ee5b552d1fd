//! Core types and definitions for airtrack.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometry primitives, tracks and drafts, affine transforms, commands,
//! reports, snapshots and constants. It has no dependency on any
//! runtime or presentation layer.

pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod geometry;
pub mod report;
pub mod state;
pub mod track;
pub mod transform;
pub mod types;
