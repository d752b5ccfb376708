//! Plain data shapes exchanged with drawing collaborators.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Generic 2D point in object form (`{ x, y }`).
///
/// [`Vector`](crate::Vector) converts to and from `Point<f64>` for callers
/// that keep coordinates in their own records.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Apply `f` to both coordinates
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Point<U> {
        Point {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point { x, y }
    }
}
