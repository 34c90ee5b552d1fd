//! airtrack console application.
//!
//! Wires the tracking engine to a line-oriented console: each input line
//! is a JSON command or a short text command, and each answer is one
//! JSON line on stdout.

pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod state;

pub use airtrack_engine::core;

#[cfg(test)]
mod tests;
