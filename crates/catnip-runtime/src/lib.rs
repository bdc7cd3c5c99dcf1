//! Catnip Runtime — fact loading and streaming orchestration.
//!
//! Composes the `catnip-kernel` capability traits into the two delivery
//! components: a fire-once [`FactLoader`] publishing to a latest-value
//! cell, and a repeating [`FactStreamer`] that substitutes locally
//! generated facts when the remote path fails. Both register their work
//! with a [`TaskGroup`] so an owning scope can tear everything down at
//! once.
//!
//! Delivery is serialized: each component runs a single task and invokes
//! its observer from that task, so no two deliveries overlap in time.

// group module
pub mod group;
pub use group::*;

// loader module
pub mod loader;
pub use loader::*;

// stream module
pub mod stream;
pub use stream::*;
