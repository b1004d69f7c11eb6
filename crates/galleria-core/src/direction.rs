//! Shared direction and axis primitives for gesture and track math.

/// Movement axis of a gesture or a scrollable track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Cardinal swipe direction as reported by the pointer layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    /// The axis this direction moves along.
    pub fn axis(self) -> Axis {
        match self {
            SwipeDirection::Left | SwipeDirection::Right => Axis::Horizontal,
            SwipeDirection::Up | SwipeDirection::Down => Axis::Vertical,
        }
    }

    /// Physical sign of the movement along its axis.
    ///
    /// Left/Up are negative, Right/Down are positive. This is the sign used
    /// for live swipe offsets and for thumbnail-track momentum, where scroll
    /// direction is physical rather than logical (reading order has no say).
    pub fn physical_sign(self) -> f32 {
        match self {
            SwipeDirection::Left | SwipeDirection::Up => -1.0,
            SwipeDirection::Right | SwipeDirection::Down => 1.0,
        }
    }
}
