use crate::event::RawEvent;
use crate::eventbus::{EventBus, EventFilter, EventListener, ListenerId};

/// A simple listener that logs all raw events to stdout.
pub struct EventLogger;

impl EventLogger {
    pub fn new() -> Self {
        EventLogger
    }

    /// Registers a logger on `bus` with [`EventFilter::All`]; the returned id can be
    /// used to mute or remove it later.
    pub fn attach(bus: &mut EventBus) -> ListenerId {
        bus.add_listener(EventFilter::All, EventLogger)
    }
}

impl Default for EventLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl EventListener for EventLogger {
    fn on_event(&mut self, event: &mut RawEvent) {
        println!("[input] {:?} {}", event.kind(), event.code());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_registers_one_listener() {
        let mut bus = EventBus::new();
        let id = EventLogger::attach(&mut bus);
        assert_eq!(bus.listener_count(), 1);

        // Logging must never consume events.
        assert!(!bus.press("KeyA"));

        bus.remove_listener(id);
        assert_eq!(bus.listener_count(), 0);
    }
}
