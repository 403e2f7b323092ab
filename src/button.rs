//! Button event routing
//!
//! Press classification (debounce, single/double/long timing) happens in the
//! host framework. This module only maps an already classified press on a
//! known button to the action it triggers.

use heapless::Vec;

use crate::config::ConfigError;

/// Maximum number of routes in a routing table
pub const MAX_ROUTES: usize = 8;

/// Identifier of a physical button, usually its GPIO pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonId(pub u8);

/// How a button was actuated
///
/// `Long` is re-signaled at a fixed cadence while the button stays held.
/// The first signal and the repeats are treated the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PressKind {
    Single,
    Double,
    Long,
}

/// Action a button press resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    /// Flip power
    TogglePower,
    /// Step brightness along its ramp (or threshold jump)
    RampBrightness,
    /// Jump color temperature to the next preset
    StepColor,
    /// Ramp color temperature
    RampColor,
    /// Power on at the configured default brightness and color temperature
    RestoreDefaults,
}

/// One entry of the routing table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub button: ButtonId,
    pub press: PressKind,
    pub action: ButtonAction,
}

impl Route {
    pub const fn new(button: ButtonId, press: PressKind, action: ButtonAction) -> Self {
        Self {
            button,
            press,
            action,
        }
    }
}

/// Physical buttons of a fixture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonMap {
    /// Power and brightness button
    pub control: ButtonId,
    /// Color temperature button, absent on single-button fixtures
    pub color: Option<ButtonId>,
}

impl ButtonMap {
    pub const fn new(control: ButtonId, color: Option<ButtonId>) -> Self {
        Self { control, color }
    }

    /// Build the standard routing table for these buttons
    ///
    /// Single-button fixtures get the restore-defaults action on a double
    /// press of the control button.
    pub fn routes(&self) -> Result<Vec<Route, MAX_ROUTES>, ConfigError> {
        let control = self.control;
        let toggle = Route::new(control, PressKind::Single, ButtonAction::TogglePower);
        let ramp = Route::new(control, PressKind::Long, ButtonAction::RampBrightness);

        let routes = match self.color {
            Some(color) => Vec::from_slice(&[
                toggle,
                ramp,
                Route::new(color, PressKind::Single, ButtonAction::StepColor),
                Route::new(color, PressKind::Double, ButtonAction::RestoreDefaults),
                Route::new(color, PressKind::Long, ButtonAction::RampColor),
            ]),
            None => Vec::from_slice(&[
                toggle,
                ramp,
                Route::new(control, PressKind::Double, ButtonAction::RestoreDefaults),
            ]),
        };
        routes.map_err(|()| ConfigError::TooManyRoutes)
    }
}

/// Maps (button, press) pairs to actions using a fixed routing table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonDispatcher {
    routes: Vec<Route, MAX_ROUTES>,
}

impl ButtonDispatcher {
    /// Create a dispatcher with the standard routes for the given buttons
    pub fn new(buttons: &ButtonMap) -> Result<Self, ConfigError> {
        if buttons.color == Some(buttons.control) {
            return Err(ConfigError::SharedButton);
        }
        Ok(Self {
            routes: buttons.routes()?,
        })
    }

    /// Create a dispatcher with a custom routing table
    ///
    /// When several routes match the same pair, the first one wins.
    pub fn with_routes(routes: &[Route]) -> Result<Self, ConfigError> {
        let routes = Vec::from_slice(routes).map_err(|()| ConfigError::TooManyRoutes)?;
        Ok(Self { routes })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a press to its action
    ///
    /// Returns `None` for pairs that have no route.
    pub fn dispatch(&self, button: ButtonId, press: PressKind) -> Option<ButtonAction> {
        self.routes
            .iter()
            .find(|route| route.button == button && route.press == press)
            .map(|route| route.action)
    }
}
