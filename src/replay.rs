use std::collections::VecDeque;

use crate::source::{FrameSnapshot, InputSource};

/// Scripted input source: plays back a queue of pre-resolved frames.
///
/// Frames are recorded *after* resolution, so a recorded action pulse is already
/// edge-filtered; playback reproduces it verbatim. Once the queue is exhausted the
/// source reports neutral forever. Useful for tests, demos, and network replay.
#[derive(Default)]
pub struct ReplaySource {
    frames: VecDeque<FrameSnapshot>,
    current: FrameSnapshot,
}

impl ReplaySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_frames(frames: impl IntoIterator<Item = FrameSnapshot>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            current: FrameSnapshot::NEUTRAL,
        }
    }

    /// Appends one frame to the script.
    pub fn feed(&mut self, frame: FrameSnapshot) {
        self.frames.push_back(frame);
    }

    /// Frames not yet consumed by `capture_frame`.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ReplaySource {
    fn capture_frame(&mut self) {
        self.current = self.frames.pop_front().unwrap_or_default();
    }

    fn x_direction(&self) -> i32 {
        self.current.x
    }

    fn y_direction(&self) -> i32 {
        self.current.y
    }

    fn action_triggered(&self) -> bool {
        self.current.action
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_frames_in_order_then_goes_neutral() {
        let mut replay = ReplaySource::from_frames([
            FrameSnapshot::new(-1, 0, false),
            FrameSnapshot::new(-1, 0, true),
        ]);
        assert_eq!(replay.remaining(), 2);

        replay.capture_frame();
        assert_eq!(replay.snapshot(), FrameSnapshot::new(-1, 0, false));

        replay.capture_frame();
        assert_eq!(replay.snapshot(), FrameSnapshot::new(-1, 0, true));
        assert_eq!(replay.remaining(), 0);

        replay.capture_frame();
        assert!(replay.snapshot().is_neutral());
    }

    #[test]
    fn reports_neutral_before_first_capture() {
        let replay = ReplaySource::from_frames([FrameSnapshot::new(1, 1, false)]);
        assert!(replay.snapshot().is_neutral());
    }

    #[test]
    fn feed_appends() {
        let mut replay = ReplaySource::new();
        replay.feed(FrameSnapshot::new(0, -1, false));
        replay.capture_frame();
        assert_eq!(replay.y_direction(), -1);
    }
}
