//! The capability contract between input sources and the simulation loop.
//!
//! [`InputSource`] is what the game loop programs against: call
//! [`capture_frame`](InputSource::capture_frame) exactly once per simulated tick, then
//! read the three latched fields (or take a [`FrameSnapshot`]). Any concrete source —
//! a live [`Keyboard`](crate::keyboard::Keyboard), a [`ReplaySource`](crate::replay::ReplaySource),
//! an AI driver — slots in behind `dyn InputSource` without the loop knowing.
//!
//! # Semantics
//! - Directions are `-1`, `0`, or `1`; the action flag pulses true only on the capture
//!   that observed the press transition (edge-triggered, never repeat-fire while held).
//! - Outputs are stable between captures: nothing mutates them until the next
//!   `capture_frame` call.
//! - A source that currently has no input (suspended, exhausted, unsubscribed) reports
//!   [`FrameSnapshot::NEUTRAL`] rather than failing.

use serde::{Deserialize, Serialize};

/// A frame-quantized input source consumed by the simulation loop.
pub trait InputSource {
    /// Resolves accumulated raw input into the three output fields. Called once per tick.
    fn capture_frame(&mut self);

    /// Horizontal intent: `-1` left, `1` right, `0` neutral.
    fn x_direction(&self) -> i32;

    /// Vertical intent: `-1` up, `1` down, `0` neutral.
    fn y_direction(&self) -> i32;

    /// True only on the capture that saw the action control go down.
    fn action_triggered(&self) -> bool;

    /// Copies the current outputs into an owned snapshot.
    fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            x: self.x_direction(),
            y: self.y_direction(),
            action: self.action_triggered(),
        }
    }
}

/// Owned snapshot of one source's outputs for one tick.
///
/// Cheap to copy, compare, and serialize; suitable for fan-out, recording, and replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub x: i32,
    pub y: i32,
    pub action: bool,
}

impl FrameSnapshot {
    /// The no-input snapshot.
    pub const NEUTRAL: Self = Self {
        x: 0,
        y: 0,
        action: false,
    };

    pub fn new(x: i32, y: i32, action: bool) -> Self {
        Self { x, y, action }
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}
