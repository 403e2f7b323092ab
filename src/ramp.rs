//! Bounce ramp for continuously adjustable values
//!
//! While a button is held the host re-signals a long press at a fixed
//! cadence. Every signal moves the value one step in the current direction.
//! A step that reaches or overshoots a bound clamps to it and reverses the
//! direction on the same step, so the value never rests on a bound for more
//! than one step.

use crate::state::ValueRange;

/// Ramp direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RampDirection {
    Increasing,
    Decreasing,
}

impl RampDirection {
    /// Get the opposite direction
    pub const fn reversed(self) -> Self {
        match self {
            Self::Increasing => Self::Decreasing,
            Self::Decreasing => Self::Increasing,
        }
    }
}

/// Direction state for one ramped quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampAxis {
    direction: RampDirection,
    step: u16,
    range: ValueRange,
}

impl RampAxis {
    /// Create a new ramp axis
    pub const fn new(range: ValueRange, step: u16, direction: RampDirection) -> Self {
        Self {
            direction,
            step,
            range,
        }
    }

    /// Direction the next step will move in
    pub const fn direction(&self) -> RampDirection {
        self.direction
    }

    /// Move `value` one step and return the new value
    pub fn advance(&mut self, value: u16) -> u16 {
        let current = i32::from(value);
        let step = i32::from(self.step);
        let target = match self.direction {
            RampDirection::Increasing => current + step,
            RampDirection::Decreasing => current - step,
        };

        let next = self.range.clamp_signed(target);
        let hit_bound = match self.direction {
            RampDirection::Increasing => next >= self.range.max,
            RampDirection::Decreasing => next <= self.range.min,
        };
        if hit_bound {
            self.direction = self.direction.reversed();
        }

        next
    }
}
