//! Raw device events.
//!
//! keylatch represents input as small press/release deltas ([`RawEvent`]) carrying an
//! opaque control code. Events are plain data: hosts (or tests) build them from whatever
//! windowing or device layer they run on and push them into an
//! [`EventBus`](crate::eventbus::EventBus).
//!
//! ## Code conventions
//! - **Codes are opaque strings**, compared only for equality. `"KeyA"`, `"Space"`,
//!   `"ArrowLeft"` are typical, but nothing in this crate interprets them.
//! - **Suppression:** a consumer that acted on an event calls [`RawEvent::suppress_default`].
//!   After dispatch the host checks [`RawEvent::default_suppressed`] to decide whether the
//!   environment's default behavior (page scrolling, system shortcuts) should still run.
//!
//! An event with a code nobody watches is simply ignored; that is not an error.

/// Kind of a raw input change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A control transitioned to pressed.
    Press,
    /// A control transitioned to released.
    Release,
}

/// One raw press or release reported by the host environment.
///
/// Carries the mutable "suppress default behavior" latch described in the module docs,
/// so dispatch hands listeners `&mut RawEvent`.
#[derive(Clone, Debug)]
pub struct RawEvent {
    kind: EventKind,
    code: String,
    default_suppressed: bool,
}

impl RawEvent {
    /// Builds a press event for `code`.
    pub fn press(code: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Press,
            code: code.into(),
            default_suppressed: false,
        }
    }

    /// Builds a release event for `code`.
    pub fn release(code: impl Into<String>) -> Self {
        Self {
            kind: EventKind::Release,
            code: code.into(),
            default_suppressed: false,
        }
    }

    #[inline]
    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// The opaque control code this event refers to.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Marks the event consumed so the host skips its default behavior.
    ///
    /// Latching: once set it stays set for the rest of the dispatch.
    #[inline]
    pub fn suppress_default(&mut self) {
        self.default_suppressed = true;
    }

    /// Whether any listener consumed this event during dispatch.
    #[inline]
    pub fn default_suppressed(&self) -> bool {
        self.default_suppressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suppression_latches() {
        let mut ev = RawEvent::press("Space");
        assert_eq!(ev.kind(), EventKind::Press);
        assert_eq!(ev.code(), "Space");
        assert!(!ev.default_suppressed());

        ev.suppress_default();
        ev.suppress_default();
        assert!(ev.default_suppressed());
    }

    #[test]
    fn release_kind() {
        let ev = RawEvent::release("KeyA");
        assert_eq!(ev.kind(), EventKind::Release);
        assert!(!ev.default_suppressed());
    }
}
