//! Fixture configuration
//!
//! The tunable-white fixture variants differ only in step sizes, initial
//! ramp directions and what the color button does on a single press.
//! [`FixtureConfig`] captures those differences; the named constructors
//! describe the known variants.

use core::fmt;

use crate::button::{ButtonMap, Route};
use crate::preset::ThresholdStep;
use crate::ramp::RampDirection;
use crate::state::{COLOR_TEMPERATURE_RANGE, FixtureState};

/// Neutral white used as the default color temperature
pub const NEUTRAL_MIREDS: u16 = 320;

const COLOR_PRESETS: [u16; 3] = [140, NEUTRAL_MIREDS, 500];

const COLOR_THRESHOLDS: [ThresholdStep; 2] = [
    // cool -> neutral
    ThresholdStep::new(160, NEUTRAL_MIREDS),
    // neutral -> warm
    ThresholdStep::new(400, 500),
];

const BRIGHTNESS_THRESHOLDS: [ThresholdStep; 4] = [
    ThresholdStep::new(24, 25),
    ThresholdStep::new(49, 50),
    ThresholdStep::new(74, 75),
    ThresholdStep::new(99, 100),
];

/// What a brightness long press does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessPolicy {
    /// Ramp by `brightness_step`, reversing at the bounds
    BounceRamp,
    /// Jump to the next bucket based on the current brightness
    ThresholdJump {
        steps: &'static [ThresholdStep],
        fallback: u16,
    },
}

/// What a color single press does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Take one step along the color ramp
    BounceRamp,
    /// Visit the table entries in round-robin order
    IndexedPreset { table: &'static [u16] },
    /// Jump to the next bucket based on the current color temperature
    ThresholdJump {
        steps: &'static [ThresholdStep],
        fallback: u16,
    },
}

/// Configuration of one fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureConfig {
    /// State at startup
    pub initial: FixtureState,
    /// State a restore-defaults press switches to
    pub defaults: FixtureState,
    pub brightness: BrightnessPolicy,
    /// Brightness ramp step in percent
    pub brightness_step: u16,
    pub initial_brightness_direction: RampDirection,
    pub color: ColorPolicy,
    /// Color ramp step in mireds
    pub color_step: u16,
    pub initial_color_direction: RampDirection,
    pub buttons: ButtonMap,
    /// Custom routing table replacing the standard routes of `buttons`
    pub routes: Option<&'static [Route]>,
}

impl FixtureConfig {
    /// Two-button fixture that ramps both brightness and color temperature.
    ///
    /// The first color ramp moves cooler.
    pub const fn ramping(buttons: ButtonMap) -> Self {
        Self {
            initial: FixtureState::new(false, 100, NEUTRAL_MIREDS),
            defaults: FixtureState::new(true, 100, NEUTRAL_MIREDS),
            brightness: BrightnessPolicy::BounceRamp,
            brightness_step: 10,
            initial_brightness_direction: RampDirection::Increasing,
            color: ColorPolicy::BounceRamp,
            color_step: 30,
            initial_color_direction: RampDirection::Decreasing,
            buttons,
            routes: None,
        }
    }

    /// Two-button fixture whose color button cycles cool, neutral and warm.
    ///
    /// The first color ramp moves warmer.
    pub const fn indexed_presets(buttons: ButtonMap) -> Self {
        Self {
            color: ColorPolicy::IndexedPreset {
                table: &COLOR_PRESETS,
            },
            color_step: 20,
            initial_color_direction: RampDirection::Increasing,
            ..Self::ramping(buttons)
        }
    }

    /// Two-button fixture whose color button jumps cool -> neutral -> warm -> cool
    /// based on the current color temperature.
    pub const fn threshold_jump(buttons: ButtonMap) -> Self {
        Self {
            color: ColorPolicy::ThresholdJump {
                steps: &COLOR_THRESHOLDS,
                fallback: 140,
            },
            ..Self::ramping(buttons)
        }
    }

    /// Single-button dimmable fixture with one LED on the warm channel.
    ///
    /// A long press jumps brightness through 25, 50, 75 and 100 percent and
    /// then back to the floor; a double press switches on at 75%. Color
    /// temperature stays fully warm so the warm level equals the brightness.
    pub const fn dimmable(buttons: ButtonMap) -> Self {
        Self {
            initial: FixtureState::new(false, 50, COLOR_TEMPERATURE_RANGE.max),
            defaults: FixtureState::new(true, 75, COLOR_TEMPERATURE_RANGE.max),
            brightness: BrightnessPolicy::ThresholdJump {
                steps: &BRIGHTNESS_THRESHOLDS,
                fallback: 5,
            },
            ..Self::ramping(buttons)
        }
    }
}

/// Invalid fixture configuration
///
/// A fixture with an invalid configuration must not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Preset table has no entries
    EmptyPresetTable,
    /// Preset table exceeds [`crate::preset::MAX_PRESETS`]
    TooManyPresets,
    /// Threshold jump has no buckets
    EmptyThresholds,
    /// Threshold jump exceeds [`crate::preset::MAX_THRESHOLDS`]
    TooManyThresholds,
    /// Threshold buckets are not strictly increasing
    UnorderedThresholds,
    /// Routing table exceeds [`crate::button::MAX_ROUTES`]
    TooManyRoutes,
    /// A ramp step of zero would never move the value
    ZeroStep,
    /// Control and color roles are assigned to the same button
    SharedButton,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::EmptyPresetTable => "preset table is empty",
            Self::TooManyPresets => "preset table is too long",
            Self::EmptyThresholds => "threshold jump has no buckets",
            Self::TooManyThresholds => "threshold jump has too many buckets",
            Self::UnorderedThresholds => "threshold buckets must be strictly increasing",
            Self::TooManyRoutes => "routing table is too long",
            Self::ZeroStep => "ramp step must be greater than zero",
            Self::SharedButton => "control and color buttons must differ",
        };
        f.write_str(message)
    }
}

impl core::error::Error for ConfigError {}
