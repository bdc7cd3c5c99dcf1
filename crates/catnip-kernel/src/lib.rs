//! Catnip Kernel — core contracts for fact delivery.
//!
//! Per the workspace layering rules, trait definitions and shared value
//! types live here; concrete implementations (HTTP sources, generators)
//! live in `catnip-foundation`; orchestration lives in `catnip-runtime`.
//! The kernel must never depend on foundation.

// fact module
pub mod fact;
pub use fact::*;

// error module
pub mod error;
pub use error::*;

// source module
pub mod source;
pub use source::*;

// cell module
pub mod cell;
pub use cell::*;
