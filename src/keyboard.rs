use std::cell::RefCell;
use std::rc::Rc;

use crate::binding::KeyMap;
use crate::eventbus::EventBus;
use crate::key::Key;
use crate::source::InputSource;

/// Aggregates six logical keys into one debounced directional + action signal.
///
/// The simulation calls [`capture_frame`](InputSource::capture_frame) once per tick;
/// between ticks the keys latch raw events asynchronously. The optional `down_right`
/// key is a combined alias that counts as both "down" and "right" (useful for a single
/// diagonal control); by default it is disabled and permanently up.
pub struct Keyboard {
    left: Key,
    right: Key,
    up: Key,
    down: Key,
    action: Key,
    down_right: Key,
    x_direction: i32,
    y_direction: i32,
    action_triggered: bool,
    action_was_down: bool,
}

impl Keyboard {
    /// Builds a keyboard without the combined down-right alias.
    pub fn new(
        bus: Rc<RefCell<EventBus>>,
        left: &str,
        right: &str,
        up: &str,
        down: &str,
        action: &str,
    ) -> Self {
        Self::build(bus, left, right, up, down, action, None)
    }

    /// Builds a keyboard with the combined down-right alias enabled.
    pub fn with_down_right(
        bus: Rc<RefCell<EventBus>>,
        left: &str,
        right: &str,
        up: &str,
        down: &str,
        action: &str,
        down_right: &str,
    ) -> Self {
        Self::build(bus, left, right, up, down, action, Some(down_right))
    }

    /// Builds a keyboard from a binding map.
    pub fn from_key_map(bus: Rc<RefCell<EventBus>>, map: &KeyMap) -> Self {
        Self::build(
            bus,
            &map.left,
            &map.right,
            &map.up,
            &map.down,
            &map.action,
            map.down_right.as_deref(),
        )
    }

    fn build(
        bus: Rc<RefCell<EventBus>>,
        left: &str,
        right: &str,
        up: &str,
        down: &str,
        action: &str,
        down_right: Option<&str>,
    ) -> Self {
        let down_right = match down_right {
            Some(code) => Key::new(Rc::clone(&bus), code),
            None => Key::disabled(Rc::clone(&bus)),
        };
        Self {
            left: Key::new(Rc::clone(&bus), left),
            right: Key::new(Rc::clone(&bus), right),
            up: Key::new(Rc::clone(&bus), up),
            down: Key::new(Rc::clone(&bus), down),
            action: Key::new(bus, action),
            down_right,
            x_direction: 0,
            y_direction: 0,
            action_triggered: false,
            action_was_down: false,
        }
    }

    /// Re-attaches all keys to the bus. No-op when already subscribed.
    pub fn subscribe(&mut self) {
        for key in self.keys_mut() {
            key.subscribe();
        }
    }

    /// Detaches all keys and clears the outputs, so the next capture reports neutral.
    /// Idempotent.
    pub fn unsubscribe(&mut self) {
        for key in self.keys_mut() {
            key.unsubscribe();
        }
        self.x_direction = 0;
        self.y_direction = 0;
        self.action_triggered = false;
        self.action_was_down = false;
    }

    pub fn action_key(&self) -> &Key {
        &self.action
    }

    fn keys_mut(&mut self) -> [&mut Key; 6] {
        [
            &mut self.left,
            &mut self.right,
            &mut self.up,
            &mut self.down,
            &mut self.action,
            &mut self.down_right,
        ]
    }
}

impl InputSource for Keyboard {
    fn capture_frame(&mut self) {
        // Left and up win ties outright; the combo alias only ever pushes positive.
        self.x_direction = if self.left.is_down() {
            -1
        } else if self.right.is_down() || self.down_right.is_down() {
            1
        } else {
            0
        };

        self.y_direction = if self.up.is_down() {
            -1
        } else if self.down.is_down() || self.down_right.is_down() {
            1
        } else {
            0
        };

        // Rising edge only: one pulse per physical press, no repeat-fire while held.
        let action_down = self.action.is_down();
        self.action_triggered = action_down && !self.action_was_down;
        self.action_was_down = action_down;
    }

    fn x_direction(&self) -> i32 {
        self.x_direction
    }

    fn y_direction(&self) -> i32 {
        self.y_direction
    }

    fn action_triggered(&self) -> bool {
        self.action_triggered
    }
}
