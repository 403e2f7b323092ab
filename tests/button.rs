mod tests {
    use tunable_white::{
        ButtonAction, ButtonDispatcher, ButtonId, ButtonMap, ConfigError, PressKind, Route,
    };

    const CONTROL: ButtonId = ButtonId(17);
    const COLOR: ButtonId = ButtonId(16);

    #[test]
    fn test_two_button_routes() {
        let dispatcher = ButtonDispatcher::new(&ButtonMap::new(CONTROL, Some(COLOR))).unwrap();
        assert_eq!(
            dispatcher.dispatch(CONTROL, PressKind::Single),
            Some(ButtonAction::TogglePower)
        );
        assert_eq!(
            dispatcher.dispatch(CONTROL, PressKind::Long),
            Some(ButtonAction::RampBrightness)
        );
        assert_eq!(
            dispatcher.dispatch(COLOR, PressKind::Single),
            Some(ButtonAction::StepColor)
        );
        assert_eq!(
            dispatcher.dispatch(COLOR, PressKind::Double),
            Some(ButtonAction::RestoreDefaults)
        );
        assert_eq!(
            dispatcher.dispatch(COLOR, PressKind::Long),
            Some(ButtonAction::RampColor)
        );
    }

    #[test]
    fn test_unrouted_presses_are_ignored() {
        let dispatcher = ButtonDispatcher::new(&ButtonMap::new(CONTROL, Some(COLOR))).unwrap();
        assert_eq!(dispatcher.dispatch(CONTROL, PressKind::Double), None);
        assert_eq!(dispatcher.dispatch(ButtonId(3), PressKind::Single), None);
    }

    #[test]
    fn test_single_button_routes() {
        let dispatcher = ButtonDispatcher::new(&ButtonMap::new(CONTROL, None)).unwrap();
        assert_eq!(
            dispatcher.dispatch(CONTROL, PressKind::Double),
            Some(ButtonAction::RestoreDefaults)
        );
        assert_eq!(dispatcher.routes().len(), 3);
        assert_eq!(dispatcher.dispatch(COLOR, PressKind::Single), None);
    }

    #[test]
    fn test_shared_button_is_rejected() {
        assert_eq!(
            ButtonDispatcher::new(&ButtonMap::new(CONTROL, Some(CONTROL))),
            Err(ConfigError::SharedButton)
        );
    }

    #[test]
    fn test_custom_routes_first_match_wins() {
        let dispatcher = ButtonDispatcher::with_routes(&[
            Route::new(COLOR, PressKind::Single, ButtonAction::TogglePower),
            Route::new(COLOR, PressKind::Single, ButtonAction::StepColor),
        ])
        .unwrap();
        assert_eq!(
            dispatcher.dispatch(COLOR, PressKind::Single),
            Some(ButtonAction::TogglePower)
        );

        let too_many = [Route::new(COLOR, PressKind::Long, ButtonAction::RampColor); 9];
        assert_eq!(
            ButtonDispatcher::with_routes(&too_many),
            Err(ConfigError::TooManyRoutes)
        );
    }
}
