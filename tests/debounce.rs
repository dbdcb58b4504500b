mod tests {
    use protonpack_engine::{Debouncer, Polarity, Press};

    const SETTLE: u32 = 10;

    #[test]
    fn test_level_accepted_after_settle() {
        let mut input = Debouncer::new(true, SETTLE, 0);
        input.update(false, 100);
        assert!(input.value());
        input.update(false, 109);
        assert!(input.value());
        input.update(false, 110);
        assert!(!input.value());
        assert!(input.fell());
        assert!(!input.rose());
    }

    #[test]
    fn test_edge_flag_lasts_one_update() {
        let mut input = Debouncer::new(false, SETTLE, 0);
        input.update(true, 0);
        input.update(true, 20);
        assert!(input.rose());
        input.update(true, 21);
        assert!(!input.rose());
        assert!(!input.fell());
        assert!(input.value());
    }

    #[test]
    fn test_repeated_stable_level_is_idempotent() {
        let mut input = Debouncer::new(true, SETTLE, 0);
        for now in 0..100 {
            input.update(true, now);
            assert!(!input.rose());
            assert!(!input.fell());
        }
        assert!(input.value());
    }

    #[test]
    fn test_bounce_shorter_than_settle_is_ignored() {
        let mut input = Debouncer::new(true, SETTLE, 0);
        let mut now = 50;
        for level in [false, true, false, true, false, true] {
            input.update(level, now);
            assert!(!input.fell());
            now += 3;
        }
        assert!(input.value());
    }

    #[test]
    fn test_bounce_restarts_settle() {
        let mut input = Debouncer::new(true, SETTLE, 0);
        input.update(false, 100);
        input.update(true, 105);
        input.update(false, 106);
        input.update(false, 115);
        assert!(input.value());
        input.update(false, 116);
        assert!(input.fell());
    }

    #[test]
    fn test_active_low_polarity() {
        let polarity = Polarity::ActiveLow;
        assert!(polarity.is_engaged(false));
        assert_eq!(polarity.press(false, true), Some(Press::Engaged));
        assert_eq!(polarity.press(true, false), Some(Press::Released));
        assert_eq!(polarity.press(false, false), None);
    }

    #[test]
    fn test_active_high_polarity() {
        let polarity = Polarity::ActiveHigh;
        assert!(polarity.is_engaged(true));
        assert_eq!(polarity.press(true, false), Some(Press::Engaged));
        assert_eq!(polarity.press(false, true), Some(Press::Released));
    }

    #[test]
    fn test_press_through_debouncer() {
        let mut trigger = Debouncer::new(true, SETTLE, 0);
        trigger.update(false, 1);
        trigger.update(false, 11);
        assert_eq!(trigger.press(Polarity::ActiveLow), Some(Press::Engaged));
        trigger.update(false, 12);
        assert_eq!(trigger.press(Polarity::ActiveLow), None);
    }
}
