mod tests {
    use protonpack_engine::Schedule;
    use protonpack_engine::tick::{TICK_MASK, TICK_MODULUS, ticks_add, ticks_diff, ticks_sub};

    #[test]
    fn test_ticks_add_wraps() {
        assert_eq!(ticks_add(TICK_MASK, 1), 0);
        assert_eq!(ticks_add(TICK_MODULUS - 10, 25), 15);
    }

    #[test]
    fn test_ticks_sub_wraps() {
        assert_eq!(ticks_sub(0, 1), TICK_MASK);
        assert_eq!(ticks_sub(5, 10), TICK_MODULUS - 5);
    }

    #[test]
    fn test_ticks_diff_across_wrap() {
        assert_eq!(ticks_diff(3, TICK_MASK), 4);
        assert_eq!(ticks_diff(TICK_MASK, 3), -4);
        assert_eq!(ticks_diff(100, 100), 0);
    }

    #[test]
    fn test_schedule_fires_on_first_poll() {
        let mut schedule = Schedule::new(30, 1_000);
        assert!(schedule.poll(1_000));
        assert!(!schedule.poll(1_000));
    }

    #[test]
    fn test_schedule_fires_strictly_after_period() {
        let mut schedule = Schedule::new(30, 0);
        assert!(schedule.poll(0));
        for now in 1..=30 {
            assert!(!schedule.poll(now), "fired early at {now}");
        }
        assert!(schedule.poll(31));
        assert_eq!(schedule.next_due(), 61);
    }

    #[test]
    fn test_schedule_rearms_from_observed_tick() {
        let mut schedule = Schedule::new(10, 0);
        assert!(schedule.poll(0));
        // The loop stalled; one firing, no catch-up burst.
        assert!(schedule.poll(500));
        assert!(!schedule.poll(501));
        assert_eq!(schedule.next_due(), 510);
    }

    #[test]
    fn test_schedule_across_wrap() {
        let start = TICK_MODULUS - 5;
        let mut schedule = Schedule::new(10, start);
        assert!(schedule.poll(start));
        assert_eq!(schedule.next_due(), 5);

        // Just after the wrap the deadline is still ahead.
        assert!(!schedule.poll(0));
        assert!(!schedule.poll(5));
        assert!(schedule.poll(6));
    }

    #[test]
    fn test_schedule_period_change_applies_on_rearm() {
        let mut schedule = Schedule::new(10, 0);
        assert!(schedule.poll(0));
        schedule.set_period(100);
        assert!(schedule.poll(11));
        assert_eq!(schedule.next_due(), 111);
    }

    #[test]
    fn test_schedule_restart() {
        let mut schedule = Schedule::new(1_000, 0);
        assert!(schedule.poll(0));
        schedule.restart(40);
        assert!(schedule.poll(40));
    }
}
