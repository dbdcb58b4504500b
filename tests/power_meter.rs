mod common;

mod tests {
    use super::common::ScriptedRng;
    use protonpack_engine::color::{OFF, Palette, PaletteConfig};
    use protonpack_engine::effect::EffectContext;
    use protonpack_engine::{DeviceMode, Effect, PixelStrip, PowerMeterEffect, StickConfig};

    const LEN: usize = 20;

    fn setup() -> (PowerMeterEffect, PixelStrip<LEN>, Palette) {
        let config = StickConfig::default();
        let strip = PixelStrip::new(config.len, config.brightness).unwrap();
        (
            PowerMeterEffect::new(&config, 0),
            strip,
            Palette::new(&PaletteConfig::default()),
        )
    }

    /// Run `count` growth steps, returning how many of them sparked
    fn grow(
        meter: &mut PowerMeterEffect,
        strip: &mut PixelStrip<LEN>,
        palette: &Palette,
        rng: &mut ScriptedRng,
        count: usize,
    ) -> usize {
        let mut sparks = 0;
        for _ in 0..count {
            let mut ctx = EffectContext {
                now: 0,
                mode: DeviceMode::LoopIdle,
                palette,
                color_index: 0,
                rng: &mut *rng,
            };
            if meter.grow(&mut ctx, strip) {
                sparks += 1;
            }
        }
        sparks
    }

    #[test]
    fn test_active_in_every_mode() {
        let (meter, _, _) = setup();
        for mode in DeviceMode::ALL {
            assert!(meter.is_active(mode));
        }
    }

    #[test]
    fn test_growth_sequence() {
        let (mut meter, mut strip, palette) = setup();
        let mut rng = ScriptedRng::new(&[0, 1, 2], 0);

        assert_eq!(grow(&mut meter, &mut strip, &palette, &mut rng, 10), 3);
        assert_eq!(rng.bounds, [1, 2, 3]);
        assert_eq!(meter.limit(), 3);
        assert_eq!(meter.max(), 2);
        assert_eq!(meter.max_previous(), 1);
        assert_eq!(meter.cursor(), 3);
        assert_eq!(strip.get(0), Some(palette.meter()));
        assert_eq!(strip.get(1), Some(palette.marker()));
        assert_eq!(strip.get(2), Some(palette.meter()));
        assert!(strip.pixels()[3..].iter().all(|pixel| *pixel == OFF));

        // Passing the ceiling resets the bar and sparks.
        assert_eq!(grow(&mut meter, &mut strip, &palette, &mut rng, 1), 1);
        assert_eq!(meter.cursor(), 0);
        assert!(strip.is_blank());
    }

    #[test]
    fn test_limit_ratchets_up_to_top_pixel() {
        let (mut meter, mut strip, palette) = setup();
        let mut rng = ScriptedRng::new(&[], 0);
        grow(&mut meter, &mut strip, &palette, &mut rng, 500);
        assert_eq!(meter.limit(), LEN - 1);
        assert!(rng.bounds.iter().all(|bound| *bound >= 1 && *bound < LEN as u32));
        assert!(rng.bounds.windows(2).all(|pair| pair[1] >= pair[0]));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let (mut meter, mut strip, palette) = setup();
        let mut rng = ScriptedRng::new(&[], 1_000_003);
        for _ in 0..2_000 {
            grow(&mut meter, &mut strip, &palette, &mut rng, 1);
            assert!(meter.cursor() < LEN);
            assert!(meter.max() < LEN);
            assert!(meter.cursor() <= meter.max() + 1);
        }
    }

    #[test]
    fn test_drain_stops_at_bottom() {
        let (mut meter, mut strip, palette) = setup();
        let mut rng = ScriptedRng::new(&[0, 1, 2], 0);
        grow(&mut meter, &mut strip, &palette, &mut rng, 10);

        for _ in 0..5 {
            meter.drain(&palette, &mut strip);
        }
        assert_eq!(meter.cursor(), 0);
        assert_eq!(strip.get(0), Some(palette.meter()));
        assert_eq!(strip.get(1), Some(palette.marker()));
        assert!(strip.pixels()[2..].iter().all(|pixel| *pixel == OFF));
    }

    #[test]
    fn test_blink_once_per_cycle() {
        let (mut meter, mut strip, palette) = setup();
        let mut lit = 0;
        for _ in 0..150 {
            meter.blink(&palette, &mut strip);
            if strip.get(0) == Some(palette.marker()) {
                lit += 1;
            }
        }
        assert_eq!(lit, 3);
        assert!(strip.pixels()[1..].iter().all(|pixel| *pixel == OFF));
    }

    #[test]
    fn test_drain_uses_slower_period() {
        let (mut meter, mut strip, palette) = setup();
        let mut rng = ScriptedRng::default();
        let mut steps = 0;
        for now in 0..=2_500 {
            let mut ctx = EffectContext {
                now,
                mode: DeviceMode::PowerOn,
                palette: &palette,
                color_index: 0,
                rng: &mut rng,
            };
            if meter.update(&mut ctx, &mut strip).stepped {
                steps += 1;
            }
        }
        // Drain period 1000: fires at 0, 1001, 2002.
        assert_eq!(steps, 3);
        assert_eq!(meter.period_for(DeviceMode::PowerOn), 1_000);
        assert_eq!(meter.period_for(DeviceMode::LoopIdle), 20);
    }

    #[test]
    fn test_reset_recharges() {
        let (mut meter, mut strip, palette) = setup();
        let mut rng = ScriptedRng::new(&[0, 1, 2], 0);
        grow(&mut meter, &mut strip, &palette, &mut rng, 10);
        meter.reset(50);
        assert_eq!(meter.cursor(), 0);
        assert_eq!(meter.max(), 0);
        assert_eq!(meter.max_previous(), 0);
        assert_eq!(meter.limit(), 0);
    }
}
