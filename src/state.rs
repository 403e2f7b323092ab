//! Fixture state and the value ranges it is clamped to.

/// Declared range of an externally settable value
///
/// The host accessory framework registers these as the characteristic
/// min/max/step, and every mutation path clamps through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub min: u16,
    pub max: u16,
    pub step: u16,
}

impl ValueRange {
    /// Create a new value range
    pub const fn new(min: u16, max: u16, step: u16) -> Self {
        Self { min, max, step }
    }

    /// Clamp a value to the range
    pub const fn clamp(self, value: u16) -> u16 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Clamp a signed value to the range
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn clamp_signed(self, value: i32) -> u16 {
        if value < self.min as i32 {
            self.min
        } else if value > self.max as i32 {
            self.max
        } else {
            value as u16
        }
    }
}

/// Brightness in percent. Below 5% the PWM output is indistinguishable from off.
pub const BRIGHTNESS_RANGE: ValueRange = ValueRange::new(5, 100, 1);

/// Color temperature in mireds, 140 is fully cool and 500 is fully warm.
pub const COLOR_TEMPERATURE_RANGE: ValueRange = ValueRange::new(140, 500, 1);

/// Authoritative intent for one fixture
///
/// Brightness and color temperature are always within their ranges.
/// Turning the power off keeps both so the next power-on restores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureState {
    power: bool,
    brightness: u8,
    color_temperature: u16,
}

impl FixtureState {
    /// Create a new state, clamping brightness and color temperature
    pub const fn new(power: bool, brightness: u8, color_temperature: u16) -> Self {
        Self {
            power,
            brightness: clamp_brightness(brightness as u16),
            color_temperature: COLOR_TEMPERATURE_RANGE.clamp(color_temperature),
        }
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn color_temperature(&self) -> u16 {
        self.color_temperature
    }

    pub fn set_power(&mut self, power: bool) {
        self.power = power;
    }

    /// Flip power and return the new value
    pub fn toggle_power(&mut self) -> bool {
        self.power = !self.power;
        self.power
    }

    /// Set brightness, clamped to [`BRIGHTNESS_RANGE`]
    pub fn set_brightness(&mut self, brightness: u16) {
        self.brightness = clamp_brightness(brightness);
    }

    /// Set color temperature, clamped to [`COLOR_TEMPERATURE_RANGE`]
    pub fn set_color_temperature(&mut self, mireds: u16) {
        self.color_temperature = COLOR_TEMPERATURE_RANGE.clamp(mireds);
    }

    /// Apply the fields present in the intent
    pub fn apply(&mut self, intent: &FixtureIntent) {
        if let Some(power) = intent.power {
            self.set_power(power);
        }
        if let Some(brightness) = intent.brightness {
            self.set_brightness(u16::from(brightness));
        }
        if let Some(mireds) = intent.color_temperature {
            self.set_color_temperature(mireds);
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn clamp_brightness(value: u16) -> u8 {
    BRIGHTNESS_RANGE.clamp(value) as u8
}

/// Represents an external (app-driven) request to change the fixture state.
///
/// Absent fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixtureIntent {
    pub power: Option<bool>,
    pub brightness: Option<u8>,
    pub color_temperature: Option<u16>,
}

impl FixtureIntent {
    /// Intent that only changes power
    pub const fn power(power: bool) -> Self {
        Self {
            power: Some(power),
            brightness: None,
            color_temperature: None,
        }
    }
}
