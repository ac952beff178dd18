use crate::event::{EventKind, RawEvent};

/// Handle returned by listener registration; required for precise deregistration.
pub type ListenerId = u64;

/// Trait for reacting to raw press/release events.
///
/// Listeners receive the event mutably so they can mark it consumed via
/// [`RawEvent::suppress_default`].
pub trait EventListener {
    fn on_event(&mut self, event: &mut RawEvent);
}

/// Determines which events a listener wants to receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventFilter {
    All,
    Press,
    Release,
    Custom(fn(&RawEvent) -> bool),
}

impl EventFilter {
    fn matches(&self, event: &RawEvent) -> bool {
        match *self {
            EventFilter::All => true,
            EventFilter::Press => event.kind() == EventKind::Press,
            EventFilter::Release => event.kind() == EventKind::Release,
            EventFilter::Custom(f) => f(event),
        }
    }
}

/// Metadata-wrapped listener with filter and mute flag.
struct ListenerEntry {
    id: ListenerId,
    filter: EventFilter,
    enabled: bool,
    listener: Box<dyn EventListener>,
}

/// Adapts a closure to [`EventListener`].
struct FnListener<F>(F);

impl<F: FnMut(&mut RawEvent)> EventListener for FnListener<F> {
    fn on_event(&mut self, event: &mut RawEvent) {
        (self.0)(event)
    }
}

/// Synchronous, single-threaded dispatch hub for raw events.
///
/// This is the injected stand-in for the host environment's global event stream: hosts
/// push events in with [`emit`](EventBus::emit), keys and other listeners register
/// against it. Dispatch visits listeners strictly in registration order, so callers
/// that rely on registration ordering (see [`Key::subscribe`](crate::key::Key::subscribe))
/// get a deterministic guarantee.
pub struct EventBus {
    next_id: ListenerId,
    listeners: Vec<ListenerEntry>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    /// Registers a listener with a filter; returns the id used for later control.
    pub fn add_listener(
        &mut self,
        filter: EventFilter,
        listener: impl EventListener + 'static,
    ) -> ListenerId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push(ListenerEntry {
            id,
            filter,
            enabled: true,
            listener: Box::new(listener),
        });
        id
    }

    /// Registers a closure as a listener.
    pub fn add_fn(
        &mut self,
        filter: EventFilter,
        f: impl FnMut(&mut RawEvent) + 'static,
    ) -> ListenerId {
        self.add_listener(filter, FnListener(f))
    }

    /// Re-enables a previously muted listener. Unknown ids are ignored.
    pub fn enable(&mut self, id: ListenerId) {
        if let Some(entry) = self.entry_mut(id) {
            entry.enabled = true;
        }
    }

    /// Mutes a listener without deregistering it. Unknown ids are ignored.
    pub fn disable(&mut self, id: ListenerId) {
        if let Some(entry) = self.entry_mut(id) {
            entry.enabled = false;
        }
    }

    /// Deregisters a listener entirely. Idempotent: removing an id twice is a no-op.
    pub fn remove_listener(&mut self, id: ListenerId) {
        self.listeners.retain(|entry| entry.id != id);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatches one event to every active, matching listener in registration order.
    pub fn emit(&mut self, event: &mut RawEvent) {
        for entry in self.listeners.iter_mut() {
            if entry.enabled && entry.filter.matches(event) {
                entry.listener.on_event(event);
            }
        }
    }

    /// Builds and dispatches a press for `code`; returns whether it was consumed.
    pub fn press(&mut self, code: &str) -> bool {
        let mut event = RawEvent::press(code);
        self.emit(&mut event);
        event.default_suppressed()
    }

    /// Builds and dispatches a release for `code`; returns whether it was consumed.
    pub fn release(&mut self, code: &str) -> bool {
        let mut event = RawEvent::release(code);
        self.emit(&mut event);
        event.default_suppressed()
    }

    fn entry_mut(&mut self, id: ListenerId) -> Option<&mut ListenerEntry> {
        self.listeners.iter_mut().find(|entry| entry.id == id)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
