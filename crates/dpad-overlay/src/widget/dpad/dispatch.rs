//! Delivery of synthetic key events to the host.

use dpad_overlay_core::{Signal, dpad_debug};
use dpad_overlay_core::logging::targets;

use super::button::Direction;
use crate::widget::events::DirectionKeyEvent;

/// Receiver of the key events produced by taps.
///
/// Implemented for [`Signal<DirectionKeyEvent>`] (handled when at least one
/// slot ran) and for closures returning whether the event was consumed.
pub trait KeyEventTarget {
    /// Deliver one key event. Returns `true` if it was handled.
    fn dispatch_key_event(&self, event: &DirectionKeyEvent) -> bool;
}

impl KeyEventTarget for Signal<DirectionKeyEvent> {
    fn dispatch_key_event(&self, event: &DirectionKeyEvent) -> bool {
        self.emit(*event) > 0
    }
}

impl<F> KeyEventTarget for F
where
    F: Fn(&DirectionKeyEvent) -> bool,
{
    fn dispatch_key_event(&self, event: &DirectionKeyEvent) -> bool {
        self(event)
    }
}

/// Send a press and then a release for `direction`.
///
/// Returns how many of the two events the target reported as handled.
pub(crate) fn dispatch_tap(target: Option<&dyn KeyEventTarget>, direction: Direction) -> usize {
    let Some(target) = target else {
        dpad_debug!(targets::DISPATCH, %direction, "no key target registered");
        return 0;
    };

    [
        DirectionKeyEvent::press(direction),
        DirectionKeyEvent::release(direction),
    ]
    .iter()
    .filter(|event| {
        let handled = target.dispatch_key_event(event);
        dpad_debug!(
            targets::DISPATCH,
            %direction,
            key = event.key.code(),
            action = ?event.action,
            handled,
            "key event dispatched"
        );
        handled
    })
    .count()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::widget::events::{KeyAction, KeyCode};

    #[test]
    fn test_tap_sends_press_then_release() {
        let signal = Signal::<DirectionKeyEvent>::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = seen.clone();
        signal.connect(move |e| seen_clone.lock().push(*e));

        assert_eq!(dispatch_tap(Some(&signal), Direction::Down), 2);

        let seen = seen.lock();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].action, KeyAction::Press);
        assert_eq!(seen[1].action, KeyAction::Release);
        assert!(seen.iter().all(|e| e.key == KeyCode::DpadDown));
    }

    #[test]
    fn test_unconnected_signal_is_unhandled() {
        let signal = Signal::<DirectionKeyEvent>::new();
        assert_eq!(dispatch_tap(Some(&signal), Direction::Up), 0);
    }

    #[test]
    fn test_closure_target() {
        let target = |e: &DirectionKeyEvent| e.action == KeyAction::Press;
        assert_eq!(dispatch_tap(Some(&target), Direction::Right), 1);
    }

    #[test]
    fn test_no_target() {
        assert_eq!(dispatch_tap(None, Direction::Left), 0);
    }
}
