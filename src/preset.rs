//! Discrete jumps between preset values
//!
//! Two policies exist among fixture variants:
//! - [`PresetCycle`] visits a fixed table in round-robin order.
//! - [`ThresholdJump`] looks at the current value and jumps to the target of
//!   the first bucket it falls into.

use heapless::Vec;

use crate::config::ConfigError;

/// Maximum number of entries in a preset table
pub const MAX_PRESETS: usize = 8;

/// Maximum number of buckets in a threshold jump
pub const MAX_THRESHOLDS: usize = 8;

/// Round-robin preset table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCycle {
    table: Vec<u16, MAX_PRESETS>,
    /// Entry the next press selects
    index: usize,
}

impl PresetCycle {
    /// Create a new preset cycle
    ///
    /// Fails if the table is empty or longer than [`MAX_PRESETS`].
    pub fn new(table: &[u16]) -> Result<Self, ConfigError> {
        if table.is_empty() {
            return Err(ConfigError::EmptyPresetTable);
        }
        let table = Vec::from_slice(table).map_err(|()| ConfigError::TooManyPresets)?;
        Ok(Self { table, index: 0 })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Return the selected entry and move to the next one
    pub fn advance(&mut self) -> u16 {
        let value = self.table[self.index];
        self.index = (self.index + 1) % self.table.len();
        value
    }
}

/// One bucket of a threshold jump: values up to `up_to` (inclusive) jump to `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdStep {
    pub up_to: u16,
    pub target: u16,
}

impl ThresholdStep {
    pub const fn new(up_to: u16, target: u16) -> Self {
        Self { up_to, target }
    }
}

/// Jump to the next bucket based on the current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdJump {
    steps: Vec<ThresholdStep, MAX_THRESHOLDS>,
    /// Target for values above the last bucket
    fallback: u16,
}

impl ThresholdJump {
    /// Create a new threshold jump
    ///
    /// Buckets must be non-empty and sorted by strictly increasing `up_to`.
    pub fn new(steps: &[ThresholdStep], fallback: u16) -> Result<Self, ConfigError> {
        if steps.is_empty() {
            return Err(ConfigError::EmptyThresholds);
        }
        if steps.windows(2).any(|pair| pair[0].up_to >= pair[1].up_to) {
            return Err(ConfigError::UnorderedThresholds);
        }
        let steps = Vec::from_slice(steps).map_err(|()| ConfigError::TooManyThresholds)?;
        Ok(Self { steps, fallback })
    }

    /// Get the jump target for the current value
    pub fn next(&self, current: u16) -> u16 {
        self.steps
            .iter()
            .find(|step| current <= step.up_to)
            .map_or(self.fallback, |step| step.target)
    }
}
