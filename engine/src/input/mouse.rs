//! Mouse Input Module
//!
//! Pointer-delta accumulation for camera look control. The host feeds raw
//! cursor deltas in at pointer-event frequency; the consumer drains them with
//! [`LookDelta::take`], which clears the buffer in the same step it is read.
//! That read-and-clear discipline is what keeps a delta from steering both
//! the camera and the avatar.

/// Accumulated cursor movement since the last drain.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookDelta {
    dx: f64,
    dy: f64,
}

impl LookDelta {
    /// Create an empty delta buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cursor movement event.
    ///
    /// # Arguments
    ///
    /// * `dx` - Horizontal cursor movement (positive = right)
    /// * `dy` - Vertical cursor movement (positive = down)
    pub fn accumulate(&mut self, dx: f64, dy: f64) {
        self.dx += dx;
        self.dy += dy;
    }

    /// Return the accumulated delta and clear the buffer.
    pub fn take(&mut self) -> (f64, f64) {
        let delta = (self.dx, self.dy);
        self.dx = 0.0;
        self.dy = 0.0;
        delta
    }

    /// Peek at the accumulated delta without clearing it.
    pub fn pending(&self) -> (f64, f64) {
        (self.dx, self.dy)
    }

    /// Check if any movement is buffered.
    pub fn is_empty(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}
