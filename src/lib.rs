#![no_std]

pub mod button;
pub mod config;
pub mod controller;
pub mod event;
pub mod mix;
pub mod preset;
pub mod ramp;
pub mod state;

pub use button::{ButtonAction, ButtonDispatcher, ButtonId, ButtonMap, PressKind, Route};
pub use config::{BrightnessPolicy, ColorPolicy, ConfigError, FixtureConfig};
pub use controller::FixtureController;
pub use event::{EventQueue, EventReceiver, EventSender, FixtureEvent, TrySendError};
pub use mix::{PwmLevels, mix};
pub use preset::{PresetCycle, ThresholdJump, ThresholdStep};
pub use ramp::{RampAxis, RampDirection};
pub use state::{
    BRIGHTNESS_RANGE, COLOR_TEMPERATURE_RANGE, FixtureIntent, FixtureState, ValueRange,
};

/// White channel of a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PwmChannel {
    Warm,
    Cool,
}

/// Abstract PWM driver trait
///
/// Implement this trait to support different hardware platforms.
/// The fixture controller is generic over this trait.
pub trait PwmOutput {
    /// Set the duty level of a channel, in percent (0-100)
    fn set(&mut self, channel: PwmChannel, level: u8);
}
