//! The four direction regions and their per-region state.

use std::fmt;
use std::ops::{Index, IndexMut};

use dpad_overlay_render::{Point, Rect};

use crate::widget::events::KeyCode;

/// One of the four d-pad regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in hit-test and paint order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Index into a per-direction array.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// The key code dispatched when this region is tapped.
    pub const fn key_code(self) -> KeyCode {
        match self {
            Direction::Up => KeyCode::DpadUp,
            Direction::Down => KeyCode::DpadDown,
            Direction::Left => KeyCode::DpadLeft,
            Direction::Right => KeyCode::DpadRight,
        }
    }

    /// The caption shown when none has been set.
    pub const fn default_caption(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_caption())
    }
}

/// State of a single region.
///
/// `position` is the caption anchor in widget-local coordinates: horizontally
/// centered, vertically on the baseline. `bounding_box` is derived from it and
/// is dropped whenever the position changes.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectionButton {
    caption: String,
    position: Option<Point>,
    bounding_box: Option<Rect>,
}

impl DirectionButton {
    /// Create a button with the given caption and no position.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            position: None,
            bounding_box: None,
        }
    }

    /// The caption text. Never absent; an unset caption is empty.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub(crate) fn set_caption(&mut self, caption: Option<&str>) {
        self.caption = caption.unwrap_or_default().to_owned();
    }

    /// The anchor point, or `None` if it still needs default placement.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// Move the anchor. Invalidates the bounding box.
    pub(crate) fn set_position(&mut self, position: Point) {
        self.position = Some(position);
        self.bounding_box = None;
    }

    /// The hit region, or `None` while stale.
    pub fn bounding_box(&self) -> Option<Rect> {
        self.bounding_box
    }

    pub(crate) fn set_bounding_box(&mut self, rect: Rect) {
        self.bounding_box = Some(rect);
    }

    /// Forget position and bounding box.
    pub(crate) fn invalidate(&mut self) {
        self.position = None;
        self.bounding_box = None;
    }
}

/// The four buttons, indexed by [`Direction`].
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonSet {
    buttons: [DirectionButton; 4],
}

impl Default for ButtonSet {
    fn default() -> Self {
        Self {
            buttons: Direction::ALL.map(|d| DirectionButton::new(d.default_caption())),
        }
    }
}

impl ButtonSet {
    /// Iterate over `(direction, button)` pairs in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, &DirectionButton)> {
        Direction::ALL.into_iter().zip(self.buttons.iter())
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (Direction, &mut DirectionButton)> {
        Direction::ALL.into_iter().zip(self.buttons.iter_mut())
    }
}

impl Index<Direction> for ButtonSet {
    type Output = DirectionButton;

    fn index(&self, direction: Direction) -> &DirectionButton {
        &self.buttons[direction.index()]
    }
}

impl IndexMut<Direction> for ButtonSet {
    fn index_mut(&mut self, direction: Direction) -> &mut DirectionButton {
        &mut self.buttons[direction.index()]
    }
}
