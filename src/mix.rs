//! Warm/cool channel mixing
//!
//! Maps power, brightness and color temperature to two PWM duty levels.

use crate::state::COLOR_TEMPERATURE_RANGE;

/// Duty levels of the two white channels, in percent
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PwmLevels {
    pub warm: u8,
    pub cool: u8,
}

impl PwmLevels {
    /// Both channels dark
    pub const OFF: Self = Self { warm: 0, cool: 0 };

    pub const fn new(warm: u8, cool: u8) -> Self {
        Self { warm, cool }
    }
}

/// Mix power, brightness (percent) and color temperature (mireds) into
/// warm and cool channel levels.
///
/// Each channel follows a square-root curve of its share of the mix, which
/// keeps perceived brightness smoother across the temperature range than a
/// linear split. Results are truncated, not rounded.
pub fn mix(power: bool, brightness: u8, color_temperature: u16) -> PwmLevels {
    if !power {
        return PwmLevels::OFF;
    }

    let mireds = COLOR_TEMPERATURE_RANGE.clamp(color_temperature);
    let warmth = u32::from(mireds - COLOR_TEMPERATURE_RANGE.min);
    let coolness = u32::from(COLOR_TEMPERATURE_RANGE.max - mireds);

    let scale = u32::from(brightness.min(100));
    PwmLevels {
        warm: scaled_root(scale, warmth),
        cool: scaled_root(scale, coolness),
    }
}

/// `floor(scale * sqrt(share / span))`, computed exactly as
/// `isqrt(floor(scale² * share / span))`.
#[allow(clippy::cast_possible_truncation)]
fn scaled_root(scale: u32, share: u32) -> u8 {
    let span = u32::from(COLOR_TEMPERATURE_RANGE.max - COLOR_TEMPERATURE_RANGE.min);
    // scale <= 100, so the result is <= 100
    (scale * scale * share / span).isqrt() as u8
}
