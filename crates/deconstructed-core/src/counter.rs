//! Counter state for the interactive demo.
//!
//! An integer plus the sign of the last change. The sign only picks the
//! direction the numbers slide in and out.

/// Sign of the most recent counter change
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Direction {
    Increased,
    Decreased,
    /// No action yet
    #[default]
    None,
}

impl Direction {
    /// CSS class hook for the slide animation
    pub fn class(&self) -> &'static str {
        match self {
            Direction::Increased => "dir-increased",
            Direction::Decreased => "dir-decreased",
            Direction::None => "dir-none",
        }
    }
}

/// Demo counter, created at zero on mount
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CounterState {
    value: i64,
    last_direction: Direction,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    pub fn increment(&mut self) {
        self.value = self.value.wrapping_add(1);
        self.last_direction = Direction::Increased;
        tracing::debug!(value = self.value, "counter incremented");
    }

    pub fn decrement(&mut self) {
        self.value = self.value.wrapping_sub(1);
        self.last_direction = Direction::Decreased;
        tracing::debug!(value = self.value, "counter decremented");
    }

    /// The value sliding out after the last action, if any
    pub fn exiting_value(&self) -> Option<i64> {
        match self.last_direction {
            Direction::Increased => Some(self.value.wrapping_sub(1)),
            Direction::Decreased => Some(self.value.wrapping_add(1)),
            Direction::None => None,
        }
    }
}
