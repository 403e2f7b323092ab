//! Fixture controller - the main orchestrator
//!
//! Owns the fixture state, the ramp and preset state machines, the button
//! routing table and the PWM output. Every state change, whether it comes
//! from a button or from the app, ends in the same recompute-and-write step.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::button::{ButtonAction, ButtonDispatcher, ButtonId, PressKind};
use crate::config::{BrightnessPolicy, ColorPolicy, ConfigError, FixtureConfig};
use crate::event::{EventReceiver, FixtureEvent};
use crate::mix::{PwmLevels, mix};
use crate::preset::{PresetCycle, ThresholdJump};
use crate::ramp::RampAxis;
use crate::state::{BRIGHTNESS_RANGE, COLOR_TEMPERATURE_RANGE, FixtureIntent, FixtureState};
use crate::{PwmChannel, PwmOutput};

#[derive(Debug, Clone)]
enum BrightnessStepper {
    Ramp(RampAxis),
    Jump(ThresholdJump),
}

#[derive(Debug, Clone)]
enum ColorStepper {
    /// Single press shares the long-press ramp
    Ramp,
    Preset(PresetCycle),
    Jump(ThresholdJump),
}

/// Controller of one tunable-white fixture
pub struct FixtureController<O: PwmOutput> {
    output: O,
    dispatcher: ButtonDispatcher,
    defaults: FixtureState,

    state: FixtureState,
    levels: PwmLevels,

    brightness: BrightnessStepper,
    color_ramp: RampAxis,
    color: ColorStepper,
}

impl<O: PwmOutput> FixtureController<O> {
    /// Create a new controller and drive the output to the initial state
    ///
    /// Fails if the configuration is invalid; the fixture must not start then.
    pub fn new(config: &FixtureConfig, output: O) -> Result<Self, ConfigError> {
        if config.color_step == 0 {
            return Err(ConfigError::ZeroStep);
        }

        let brightness = match config.brightness {
            BrightnessPolicy::BounceRamp => {
                if config.brightness_step == 0 {
                    return Err(ConfigError::ZeroStep);
                }
                BrightnessStepper::Ramp(RampAxis::new(
                    BRIGHTNESS_RANGE,
                    config.brightness_step,
                    config.initial_brightness_direction,
                ))
            }
            BrightnessPolicy::ThresholdJump { steps, fallback } => {
                BrightnessStepper::Jump(ThresholdJump::new(steps, fallback)?)
            }
        };

        let color = match config.color {
            ColorPolicy::BounceRamp => ColorStepper::Ramp,
            ColorPolicy::IndexedPreset { table } => ColorStepper::Preset(PresetCycle::new(table)?),
            ColorPolicy::ThresholdJump { steps, fallback } => {
                ColorStepper::Jump(ThresholdJump::new(steps, fallback)?)
            }
        };

        let mut controller = Self {
            output,
            dispatcher: match config.routes {
                Some(routes) => ButtonDispatcher::with_routes(routes)?,
                None => ButtonDispatcher::new(&config.buttons)?,
            },
            defaults: config.defaults,
            state: config.initial,
            levels: PwmLevels::OFF,
            brightness,
            color_ramp: RampAxis::new(
                COLOR_TEMPERATURE_RANGE,
                config.color_step,
                config.initial_color_direction,
            ),
            color,
        };
        controller.commit();

        Ok(controller)
    }

    /// Current committed state
    pub const fn state(&self) -> FixtureState {
        self.state
    }

    /// Levels last written to the output
    pub const fn levels(&self) -> PwmLevels {
        self.levels
    }

    /// Brightness ramp, if brightness is ramped rather than jumped
    pub fn brightness_ramp(&self) -> Option<&RampAxis> {
        match &self.brightness {
            BrightnessStepper::Ramp(axis) => Some(axis),
            BrightnessStepper::Jump(_) => None,
        }
    }

    pub const fn color_ramp(&self) -> &RampAxis {
        &self.color_ramp
    }

    /// Get a reference to the output
    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Apply an external intent
    ///
    /// Present fields are clamped and applied, absent ones are kept.
    pub fn apply_intent(&mut self, intent: &FixtureIntent) -> PwmLevels {
        #[cfg(feature = "esp32-log")]
        println!("[FixtureController.apply_intent] {:?}", intent);

        self.state.apply(intent);
        self.commit()
    }

    /// Handle a classified button press
    ///
    /// Returns `None` when the press has no route; nothing is written then.
    pub fn on_button_event(&mut self, button: ButtonId, press: PressKind) -> Option<PwmLevels> {
        let Some(action) = self.dispatcher.dispatch(button, press) else {
            #[cfg(feature = "esp32-log")]
            println!(
                "[FixtureController.on_button_event] ignoring {:?} press on {:?}",
                press, button
            );
            return None;
        };

        #[cfg(feature = "esp32-log")]
        println!(
            "[FixtureController.on_button_event] {:?} press on {:?} -> {:?}",
            press, button, action
        );

        self.apply_action(action);
        Some(self.commit())
    }

    /// Handle one event
    pub fn handle(&mut self, event: FixtureEvent) -> Option<PwmLevels> {
        match event {
            FixtureEvent::Button(button, press) => self.on_button_event(button, press),
            FixtureEvent::Intent(intent) => Some(self.apply_intent(&intent)),
        }
    }

    /// Process all pending events from the queue (non-blocking)
    ///
    /// Events are applied one at a time in arrival order. Returns the number
    /// of events taken from the queue.
    pub fn process_pending<const SIZE: usize>(&mut self, events: &EventReceiver<'_, SIZE>) -> usize {
        let mut processed = 0;
        while let Some(event) = events.try_receive() {
            self.handle(event);
            processed += 1;
        }
        processed
    }

    fn apply_action(&mut self, action: ButtonAction) {
        match action {
            ButtonAction::TogglePower => {
                self.state.toggle_power();
            }
            ButtonAction::RampBrightness => {
                let current = u16::from(self.state.brightness());
                let next = match &mut self.brightness {
                    BrightnessStepper::Ramp(axis) => axis.advance(current),
                    BrightnessStepper::Jump(jump) => jump.next(current),
                };
                self.state.set_power(true);
                self.state.set_brightness(next);
            }
            ButtonAction::StepColor => {
                let current = self.state.color_temperature();
                let next = match &mut self.color {
                    ColorStepper::Ramp => self.color_ramp.advance(current),
                    ColorStepper::Preset(presets) => presets.advance(),
                    ColorStepper::Jump(jump) => jump.next(current),
                };
                self.state.set_power(true);
                self.state.set_color_temperature(next);
            }
            ButtonAction::RampColor => {
                let next = self.color_ramp.advance(self.state.color_temperature());
                self.state.set_power(true);
                self.state.set_color_temperature(next);
            }
            ButtonAction::RestoreDefaults => {
                self.state = self.defaults;
                self.state.set_power(true);
            }
        }
    }

    /// Recompute the channel levels from the state and write them out
    fn commit(&mut self) -> PwmLevels {
        let levels = mix(
            self.state.power(),
            self.state.brightness(),
            self.state.color_temperature(),
        );

        #[cfg(feature = "esp32-log")]
        println!(
            "[FixtureController.commit] power={} brightness={}% mireds={} -> warm={}% cool={}%",
            self.state.power(),
            self.state.brightness(),
            self.state.color_temperature(),
            levels.warm,
            levels.cool
        );

        self.output.set(PwmChannel::Warm, levels.warm);
        self.output.set(PwmChannel::Cool, levels.cool);
        self.levels = levels;
        levels
    }
}
