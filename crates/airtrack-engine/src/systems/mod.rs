//! Systems that operate on the track store.
//!
//! Systems are plain functions over the store (or a borrowed view of its
//! tracks). They hold no state of their own.

pub mod collision;
pub mod proximity;
pub mod snapshot;
pub mod transform;
