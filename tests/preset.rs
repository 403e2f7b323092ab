mod tests {
    use tunable_white::{ConfigError, PresetCycle, ThresholdJump, ThresholdStep};

    #[test]
    fn test_preset_cycle_visits_each_entry() {
        let mut presets = PresetCycle::new(&[140, 320, 500]).unwrap();
        assert_eq!(presets.index(), 0);
        assert_eq!(presets.advance(), 140);
        assert_eq!(presets.advance(), 320);
        assert_eq!(presets.advance(), 500);
        assert_eq!(presets.advance(), 140);
        assert_eq!(presets.index(), 1);
    }

    #[test]
    fn test_preset_cycle_single_entry() {
        let mut presets = PresetCycle::new(&[250]).unwrap();
        assert_eq!(presets.advance(), 250);
        assert_eq!(presets.advance(), 250);
    }

    #[test]
    fn test_preset_cycle_rejects_bad_tables() {
        assert_eq!(PresetCycle::new(&[]), Err(ConfigError::EmptyPresetTable));
        assert_eq!(
            PresetCycle::new(&[140; 9]),
            Err(ConfigError::TooManyPresets)
        );
    }

    #[test]
    fn test_threshold_jump() {
        let jump = ThresholdJump::new(
            &[ThresholdStep::new(160, 320), ThresholdStep::new(400, 500)],
            140,
        )
        .unwrap();
        assert_eq!(jump.next(140), 320);
        assert_eq!(jump.next(160), 320);
        assert_eq!(jump.next(161), 500);
        assert_eq!(jump.next(400), 500);
        assert_eq!(jump.next(401), 140);
        assert_eq!(jump.next(500), 140);
    }

    #[test]
    fn test_threshold_jump_rejects_bad_buckets() {
        assert_eq!(
            ThresholdJump::new(&[], 5),
            Err(ConfigError::EmptyThresholds)
        );
        assert_eq!(
            ThresholdJump::new(
                &[ThresholdStep::new(50, 75), ThresholdStep::new(50, 100)],
                5
            ),
            Err(ConfigError::UnorderedThresholds)
        );
    }
}
