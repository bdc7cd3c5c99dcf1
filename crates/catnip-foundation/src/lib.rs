//! Catnip Foundation — concrete fact sources and generators.
//!
//! Implements the `catnip-kernel` capability traits: an HTTP-backed
//! [`CatFactApi`] source and a corpus-backed [`LocalFactGenerator`],
//! plus the configuration types both are built from.

// config module
pub mod config;
pub use config::*;

// ninja module - catfact.ninja HTTP source
pub mod ninja;
pub use ninja::*;

// local module - corpus-backed generator
pub mod local;
pub use local::*;
