mod tests {
    use tunable_white::{COLOR_TEMPERATURE_RANGE, PwmLevels, mix};

    #[test]
    fn test_mix_power_off_is_dark() {
        for brightness in [0, 5, 50, 100] {
            for mireds in [140, 320, 500] {
                assert_eq!(mix(false, brightness, mireds), PwmLevels::OFF);
            }
        }
    }

    #[test]
    fn test_mix_neutral_half_brightness() {
        assert_eq!(mix(true, 50, 320), PwmLevels::new(35, 35));
        assert_eq!(mix(true, 100, 320), PwmLevels::new(70, 70));
    }

    #[test]
    fn test_mix_extremes() {
        assert_eq!(mix(true, 100, 140), PwmLevels::new(0, 100));
        assert_eq!(mix(true, 100, 500), PwmLevels::new(100, 0));
        assert_eq!(mix(true, 5, 500), PwmLevels::new(5, 0));
    }

    #[test]
    fn test_mix_truncates_exact_roots() {
        // 340 mireds: warm share 5/9, cool share 4/9
        assert_eq!(mix(true, 6, 340), PwmLevels::new(4, 4));
        assert_eq!(mix(true, 9, 340), PwmLevels::new(6, 6));
        // 460 mireds: cool share 1/9
        assert_eq!(mix(true, 6, 460), PwmLevels::new(5, 2));
    }

    #[test]
    fn test_mix_matches_exact_floor() {
        for brightness in 5u8..=100 {
            for mireds in COLOR_TEMPERATURE_RANGE.min..=COLOR_TEMPERATURE_RANGE.max {
                let levels = mix(true, brightness, mireds);
                let b = u32::from(brightness);
                let warm = u32::from(mireds - 140);
                let cool = u32::from(500 - mireds);
                // floor(b * sqrt(k / 360)) is the largest n with n² * 360 <= b² * k
                for (level, share) in [(levels.warm, warm), (levels.cool, cool)] {
                    let n = u32::from(level);
                    assert!(n * n * 360 <= b * b * share);
                    assert!((n + 1) * (n + 1) * 360 > b * b * share);
                }
            }
        }
    }

    #[test]
    fn test_mix_zero_brightness() {
        assert_eq!(mix(true, 0, 320), PwmLevels::OFF);
    }

    #[test]
    fn test_mix_levels_in_range() {
        for brightness in 5..=100 {
            for mireds in COLOR_TEMPERATURE_RANGE.min..=COLOR_TEMPERATURE_RANGE.max {
                let levels = mix(true, brightness, mireds);
                assert!(levels.warm <= 100 && levels.cool <= 100);
                if mireds == 140 {
                    assert_eq!(levels.warm, 0);
                }
                if mireds == 500 {
                    assert_eq!(levels.cool, 0);
                }
            }
        }
    }

    #[test]
    fn test_mix_warmer_shifts_toward_warm_channel() {
        let cool = mix(true, 80, 200);
        let warm = mix(true, 80, 440);
        assert!(warm.warm > cool.warm);
        assert!(warm.cool < cool.cool);
    }
}
