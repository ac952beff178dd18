//! keylatch — frame-quantized input capture for deterministic game loops.
//!
//! Converts raw, asynchronous press/release events into a stable per-tick
//! directional + action signal: keys latch state as events arrive, the
//! simulation captures one debounced snapshot per frame.

pub mod binding;
pub mod event;
pub mod eventbus;
pub mod key;
pub mod keyboard;
pub mod logger;
pub mod manager;
pub mod replay;
pub mod source;

pub use binding::*;
pub use event::*;
pub use eventbus::*;
pub use key::*;
pub use keyboard::*;
pub use manager::*;
pub use replay::*;
pub use source::*;
