//! Event types consumed and produced by the overlay.
//!
//! Input arrives as [`PointerEvent`]s in raw view coordinates. Output leaves
//! as [`DirectionKeyEvent`]s carrying the platform d-pad [`KeyCode`] of the
//! tapped region.

use dpad_overlay_render::Point;

use super::dpad::Direction;

/// The kind of pointer action being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// The pointer touched the surface.
    Down,
    /// The pointer moved while touching the surface.
    Move,
    /// The pointer left the surface.
    Up,
    /// The gesture was aborted by the system.
    Cancel,
    /// Anything else (secondary pointers, hover, scroll). Never handled.
    Other,
}

/// A single pointer event in raw view coordinates.
///
/// The position has not yet had padding or the view transform removed; the
/// widget does that before hit-testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub action: PointerAction,
    /// Where it happened, in raw view coordinates.
    pub position: Point,
}

impl PointerEvent {
    /// Create a new pointer event.
    pub fn new(action: PointerAction, position: impl Into<Point>) -> Self {
        Self {
            action,
            position: position.into(),
        }
    }

    /// Shorthand for a [`PointerAction::Down`] event.
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, (x, y))
    }

    /// Shorthand for a [`PointerAction::Move`] event.
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, (x, y))
    }

    /// Shorthand for a [`PointerAction::Up`] event.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, (x, y))
    }

    /// Shorthand for a [`PointerAction::Cancel`] event.
    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Cancel, (x, y))
    }
}

/// Platform d-pad key codes.
///
/// The discriminants are the values the host platform uses for its hardware
/// d-pad, so they can be forwarded unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum KeyCode {
    DpadUp = 19,
    DpadDown = 20,
    DpadLeft = 21,
    DpadRight = 22,
}

impl KeyCode {
    /// The raw platform key code.
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }
}

/// Whether a key went down or came back up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    Press,
    Release,
}

/// A synthetic key event emitted when a direction region is tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionKeyEvent {
    /// The region that was tapped.
    pub direction: Direction,
    /// The key code for that region.
    pub key: KeyCode,
    /// Press or release.
    pub action: KeyAction,
}

impl DirectionKeyEvent {
    /// Create a key event for `direction`, using its fixed key code.
    pub fn new(direction: Direction, action: KeyAction) -> Self {
        Self {
            direction,
            key: direction.key_code(),
            action,
        }
    }

    /// Create a press event.
    pub fn press(direction: Direction) -> Self {
        Self::new(direction, KeyAction::Press)
    }

    /// Create a release event.
    pub fn release(direction: Direction) -> Self {
        Self::new(direction, KeyAction::Release)
    }
}
