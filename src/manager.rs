use std::cell::RefCell;
use std::rc::Rc;

use crate::binding::{BindingError, BindingProfile, KeyMap};
use crate::event::RawEvent;
use crate::eventbus::EventBus;
use crate::keyboard::Keyboard;
use crate::source::{FrameSnapshot, InputSource};

/// Owns the shared event bus and one input source per player.
///
/// The host forwards raw device events through [`dispatch`](InputManager::dispatch) as
/// they arrive, then calls [`capture_all`](InputManager::capture_all) once per tick and
/// hands each snapshot to the matching player's simulation.
pub struct InputManager {
    bus: Rc<RefCell<EventBus>>,
    sources: Vec<Box<dyn InputSource>>,
}

impl InputManager {
    pub fn new() -> Self {
        Self::with_bus(Rc::new(RefCell::new(EventBus::new())))
    }

    /// Builds a manager over an existing bus, for hosts that share it with other listeners.
    pub fn with_bus(bus: Rc<RefCell<EventBus>>) -> Self {
        Self {
            bus,
            sources: Vec::new(),
        }
    }

    /// A handle to the shared bus, for attaching loggers or extra listeners.
    pub fn bus(&self) -> Rc<RefCell<EventBus>> {
        Rc::clone(&self.bus)
    }

    /// Adds any input source; player order is insertion order.
    pub fn add_source<S: InputSource + 'static>(&mut self, source: S) {
        self.sources.push(Box::new(source));
    }

    /// Builds a [`Keyboard`] on the shared bus from `map` and adds it.
    pub fn add_keyboard(&mut self, map: &KeyMap) {
        let keyboard = Keyboard::from_key_map(self.bus(), map);
        self.add_source(keyboard);
    }

    /// Adds a keyboard for one player slot of `profile`.
    pub fn add_player(&mut self, profile: &BindingProfile, slot: &str) -> Result<(), BindingError> {
        let map = profile.require_player(slot)?;
        self.add_keyboard(map);
        Ok(())
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Feeds one raw event to every subscribed listener.
    pub fn dispatch(&mut self, event: &mut RawEvent) {
        self.bus.borrow_mut().emit(event);
    }

    /// Runs one capture on every source and returns the snapshots in player order.
    pub fn capture_all(&mut self) -> Vec<FrameSnapshot> {
        self.sources
            .iter_mut()
            .map(|source| {
                source.capture_frame();
                source.snapshot()
            })
            .collect()
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::replay::ReplaySource;

    #[test]
    fn two_player_capture_order() {
        let mut manager = InputManager::new();
        let profile = BindingProfile::two_player_default();
        manager.add_player(&profile, "one").unwrap();
        manager.add_player(&profile, "two").unwrap();
        assert_eq!(manager.source_count(), 2);

        manager.dispatch(&mut RawEvent::press("KeyA"));
        manager.dispatch(&mut RawEvent::press("ArrowRight"));

        let snaps = manager.capture_all();
        assert_eq!(snaps[0], FrameSnapshot::new(-1, 0, false));
        assert_eq!(snaps[1], FrameSnapshot::new(1, 0, false));
    }

    #[test]
    fn unknown_slot_is_an_error() {
        let mut manager = InputManager::new();
        let profile = BindingProfile::two_player_default();
        assert!(manager.add_player(&profile, "three").is_err());
        assert_eq!(manager.source_count(), 0);
    }

    #[test]
    fn mixed_source_kinds() {
        // A live keyboard and a scripted replay behind the same contract.
        let mut manager = InputManager::new();
        manager.add_keyboard(&KeyMap::wasd());
        manager.add_source(ReplaySource::from_frames([FrameSnapshot::new(0, 1, true)]));

        manager.dispatch(&mut RawEvent::press("KeyW"));

        let snaps = manager.capture_all();
        assert_eq!(snaps[0], FrameSnapshot::new(0, -1, false));
        assert_eq!(snaps[1], FrameSnapshot::new(0, 1, true));

        let snaps = manager.capture_all();
        assert_eq!(snaps[0], FrameSnapshot::new(0, -1, false));
        assert!(snaps[1].is_neutral());
    }

    #[test]
    fn dispatch_marks_consumed_events() {
        let mut manager = InputManager::new();
        manager.add_keyboard(&KeyMap::wasd());

        let mut matching = RawEvent::press("Space");
        manager.dispatch(&mut matching);
        assert!(matching.default_suppressed());

        let mut unrelated = RawEvent::press("Escape");
        manager.dispatch(&mut unrelated);
        assert!(!unrelated.default_suppressed());
    }
}
