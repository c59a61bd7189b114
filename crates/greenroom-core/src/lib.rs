//! Foundation crate for the Greenroom calendar engine.
//!
//! Holds the civil-date type and arithmetic, identifier newtypes, the core
//! error type, shared constants, and application configuration. Nothing in
//! this crate performs I/O except [`config`] loading.

pub mod config;
pub mod constants;
pub mod date;
pub mod error;
pub mod types;
