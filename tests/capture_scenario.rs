//! End-to-end capture scenario: one keyboard driven by synthetic raw events
//! across several simulated ticks.

use std::cell::RefCell;
use std::rc::Rc;

use keylatch::{EventBus, FrameSnapshot, InputSource, Keyboard};

fn bus() -> Rc<RefCell<EventBus>> {
    Rc::new(RefCell::new(EventBus::new()))
}

#[test]
fn hold_move_fire_release_cycle() {
    let bus = bus();
    let mut kb = Keyboard::new(Rc::clone(&bus), "A", "D", "W", "S", "Space");

    // Tick 1: walking left.
    bus.borrow_mut().press("A");
    kb.capture_frame();
    assert_eq!(kb.snapshot(), FrameSnapshot::new(-1, 0, false));

    // Tick 2: still holding left, action pressed -> single pulse.
    bus.borrow_mut().press("Space");
    kb.capture_frame();
    assert_eq!(kb.snapshot(), FrameSnapshot::new(-1, 0, true));

    // Tick 3: both still held -> pulse must not repeat.
    kb.capture_frame();
    assert_eq!(kb.snapshot(), FrameSnapshot::new(-1, 0, false));

    // Tick 4: everything released -> neutral.
    bus.borrow_mut().release("A");
    bus.borrow_mut().release("Space");
    kb.capture_frame();
    assert!(kb.snapshot().is_neutral());
}

#[test]
fn suspend_and_resume_mid_game() {
    let bus = bus();
    let mut kb = Keyboard::new(Rc::clone(&bus), "A", "D", "W", "S", "Space");

    bus.borrow_mut().press("D");
    kb.capture_frame();
    assert_eq!(kb.x_direction(), 1);

    // Pause menu: device suspended while the key is physically held.
    kb.unsubscribe();
    kb.capture_frame();
    assert!(kb.snapshot().is_neutral());

    // Events during suspension are invisible.
    bus.borrow_mut().press("A");
    kb.capture_frame();
    assert!(kb.snapshot().is_neutral());

    // Resume: only events after resubscription count.
    kb.subscribe();
    kb.capture_frame();
    assert!(kb.snapshot().is_neutral());

    bus.borrow_mut().press("D");
    kb.capture_frame();
    assert_eq!(kb.x_direction(), 1);
}

#[test]
fn two_keyboards_share_one_bus_without_crosstalk() {
    let bus = bus();
    let mut p1 = Keyboard::new(Rc::clone(&bus), "A", "D", "W", "S", "Space");
    let mut p2 = Keyboard::new(
        Rc::clone(&bus),
        "ArrowLeft",
        "ArrowRight",
        "ArrowUp",
        "ArrowDown",
        "Enter",
    );

    bus.borrow_mut().press("A");
    bus.borrow_mut().press("ArrowUp");
    bus.borrow_mut().press("Enter");

    p1.capture_frame();
    p2.capture_frame();
    assert_eq!(p1.snapshot(), FrameSnapshot::new(-1, 0, false));
    assert_eq!(p2.snapshot(), FrameSnapshot::new(0, -1, true));
}
