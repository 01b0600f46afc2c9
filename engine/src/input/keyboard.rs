//! Keyboard Input Module
//!
//! Held-key state tracking for the camera's flight controls. Decoupled from
//! any windowing system: the host's keybinding layer translates physical keys
//! into [`FlightKey`] actions and feeds press/release events in here.

/// Flight control actions, independent of physical key layout.
///
/// Which physical key maps to which action is the host's business; the core
/// only consumes these signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlightKey {
    /// Move toward the look direction (horizontal only)
    Forward,
    /// Move away from the look direction
    Backward,
    /// Strafe left
    Left,
    /// Strafe right
    Right,
    /// Move straight up
    Ascend,
    /// Move straight down
    Descend,
    /// Speed modifier
    Sprint,
}

/// Tracks which flight keys are currently held.
///
/// Axis accessors collapse opposing keys into a single bipolar value in
/// {-1, 0, 1}; holding both keys of a pair cancels to 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlightKeys {
    /// Forward key held
    pub forward: bool,
    /// Backward key held
    pub backward: bool,
    /// Strafe-left key held
    pub left: bool,
    /// Strafe-right key held
    pub right: bool,
    /// Ascend key held
    pub ascend: bool,
    /// Descend key held
    pub descend: bool,
    /// Sprint modifier held
    pub sprint: bool,
}

impl FlightKeys {
    /// Create a new key state with everything released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update the held state for one flight action.
    pub fn handle_key(&mut self, key: FlightKey, pressed: bool) {
        match key {
            FlightKey::Forward => self.forward = pressed,
            FlightKey::Backward => self.backward = pressed,
            FlightKey::Left => self.left = pressed,
            FlightKey::Right => self.right = pressed,
            FlightKey::Ascend => self.ascend = pressed,
            FlightKey::Descend => self.descend = pressed,
            FlightKey::Sprint => self.sprint = pressed,
        }
    }

    /// Forward/backward axis (-1, 0, or 1). Forward is positive.
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Strafe axis (-1, 0, or 1). Left is positive, matching the camera's
    /// left-hand direction vector.
    pub fn strafe_axis(&self) -> i32 {
        (self.left as i32) - (self.right as i32)
    }

    /// Vertical axis (-1, 0, or 1). Ascend is positive.
    pub fn vertical_axis(&self) -> i32 {
        (self.ascend as i32) - (self.descend as i32)
    }

    /// Check if the sprint modifier is held.
    pub fn is_sprinting(&self) -> bool {
        self.sprint
    }

    /// Check if any directional key is held (sprint alone does not count).
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right || self.ascend || self.descend
    }

    /// Release every key.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
