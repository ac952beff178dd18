use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::eventbus::{EventBus, EventFilter, ListenerId};

/// One logical button: tracks pressed/released state for a single control code.
///
/// A `Key` subscribes two callbacks on the shared [`EventBus`] at construction and keeps
/// its latched state in an `Rc<Cell<bool>>` that both callbacks write and the owning
/// device reads. State changes are pushed in by events; nothing here polls.
///
/// A key built with [`Key::disabled`] has no code, never matches any event, and reports
/// permanently up. Subscribe/unsubscribe on it are safe no-ops, which lets callers treat
/// an optional key uniformly.
pub struct Key {
    code: Option<String>,
    bus: Rc<RefCell<EventBus>>,
    down: Rc<Cell<bool>>,
    press_id: Option<ListenerId>,
    release_id: Option<ListenerId>,
}

impl Key {
    /// Creates a key watching `code` and immediately subscribes it.
    pub fn new(bus: Rc<RefCell<EventBus>>, code: impl Into<String>) -> Self {
        Self::build(bus, Some(code.into()))
    }

    /// Creates the permanently-up key. It never subscribes and never matches.
    pub fn disabled(bus: Rc<RefCell<EventBus>>) -> Self {
        Self::build(bus, None)
    }

    fn build(bus: Rc<RefCell<EventBus>>, code: Option<String>) -> Self {
        let mut key = Self {
            code,
            bus,
            down: Rc::new(Cell::new(false)),
            press_id: None,
            release_id: None,
        };
        key.subscribe();
        key
    }

    /// The control code this key watches, if any.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn is_enabled(&self) -> bool {
        self.code.is_some()
    }

    #[inline]
    pub fn is_down(&self) -> bool {
        self.down.get()
    }

    #[inline]
    pub fn is_up(&self) -> bool {
        !self.down.get()
    }

    /// Registers this key's callbacks on the bus. No-op if already subscribed or disabled.
    ///
    /// The release callback is registered before the press callback, every time. With the
    /// opposite order, a press/release pair landing between the two registrations would
    /// see only the press and leave the key latched down.
    pub fn subscribe(&mut self) {
        if self.press_id.is_some() || self.release_id.is_some() {
            return;
        }
        let Some(code) = self.code.clone() else {
            return;
        };

        let mut bus = self.bus.borrow_mut();

        let down = Rc::clone(&self.down);
        let release_code = code.clone();
        self.release_id = Some(bus.add_fn(EventFilter::Release, move |event| {
            if event.code() == release_code {
                down.set(false);
                event.suppress_default();
            }
        }));

        let down = Rc::clone(&self.down);
        self.press_id = Some(bus.add_fn(EventFilter::Press, move |event| {
            if event.code() == code {
                down.set(true);
                event.suppress_default();
            }
        }));
    }

    /// Deregisters both callbacks and resets the key to up, so a suspended device
    /// reports neutral input instead of a stale stuck key. Idempotent.
    pub fn unsubscribe(&mut self) {
        {
            let mut bus = self.bus.borrow_mut();
            if let Some(id) = self.press_id.take() {
                bus.remove_listener(id);
            }
            if let Some(id) = self.release_id.take() {
                bus.remove_listener(id);
            }
        }
        self.down.set(false);
    }
}
