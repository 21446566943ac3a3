mod tests {
    use embassy_time::Instant;
    use lightstrip_engine::color::{Hsv, Rgb, hsv2rgb};
    use lightstrip_engine::palette::{PARTY_PALETTE, color_from_palette};
    use lightstrip_engine::{Command, CommandQueue, EffectId, LightEngine, LightEngineConfig};

    const LEDS: usize = 6;
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn engine_with(
        queue: &CommandQueue<4>,
        effect: EffectId,
    ) -> LightEngine<'_, LEDS, 4> {
        let mut engine = LightEngine::new(queue.receiver(), &LightEngineConfig::default());
        assert!(queue.sender().send(Command::SetEffect(effect)).is_ok());
        engine.tick(Instant::from_millis(0));
        engine
    }

    fn lit(frame: &[Rgb]) -> Vec<usize> {
        frame
            .iter()
            .enumerate()
            .filter(|(_, led)| **led != BLACK)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_rainbow_spans_the_strip() {
        let queue = CommandQueue::new();
        let engine = engine_with(&queue, EffectId::Rainbow);
        // First gated tick advanced the cursor to 1; hue steps 7 per pixel
        for (i, led) in engine.frame().iter().enumerate() {
            let expected = hsv2rgb(Hsv {
                hue: 1 + 7 * i as u8,
                sat: 240,
                val: 255,
            });
            assert_eq!(*led, expected, "pixel {i}");
        }
    }

    #[test]
    fn test_confetti_sprinkles_one_pixel_per_tick() {
        let queue = CommandQueue::new();
        let mut engine = engine_with(&queue, EffectId::Confetti);
        assert_eq!(lit(engine.frame()).len(), 1);

        // Speed 4: confetti advances every 17 ms; old sparkles decay slowly
        engine.tick(Instant::from_millis(18));
        let count = lit(engine.frame()).len();
        assert!(count >= 1 && count <= 2, "{count} pixels lit");
    }

    #[test]
    fn test_sinelon_places_the_dot_on_the_beat() {
        let queue = CommandQueue::new();
        let engine = engine_with(&queue, EffectId::Sinelon);
        // Speed 4 = 60 BPM / 5; at t=0 the sine sits mid-range: pixel 3 of 6
        let expected = hsv2rgb(Hsv {
            hue: 1,
            sat: 255,
            val: 192,
        });
        assert_eq!(engine.frame()[3], expected);
        assert_eq!(lit(engine.frame()), vec![3]);
    }

    #[test]
    fn test_juggle_draws_beat_driven_dots() {
        let queue = CommandQueue::new();
        let mut engine = engine_with(&queue, EffectId::Juggle);
        // At t=0 every dot's sine sits mid-range, stacked on pixel 3
        assert_eq!(lit(engine.frame()), vec![3]);

        // Dots spread as the beats diverge, over the old stack's fading trail
        engine.tick(Instant::from_millis(2017));
        assert!(!lit(engine.frame()).is_empty());
    }

    #[test]
    fn test_bpm_fills_from_the_palette() {
        let queue = CommandQueue::new();
        let engine = engine_with(&queue, EffectId::Bpm);
        // Hue cursor advanced to 1; beat at t=0 is mid-range of 64..255
        let beat = 160u8;
        for (i, led) in engine.frame().iter().enumerate() {
            let i = i as u8;
            let index = 1u8.wrapping_add(i.wrapping_mul(2));
            let brightness = beat.wrapping_sub(1).wrapping_add(i.wrapping_mul(10));
            assert_eq!(
                *led,
                color_from_palette(&PARTY_PALETTE, index, brightness),
                "pixel {i}"
            );
        }
    }

    #[test]
    fn test_continuous_effects_rerender_every_frame() {
        let queue = CommandQueue::new();
        let mut engine = engine_with(&queue, EffectId::Sinelon);
        assert_eq!(lit(engine.frame()), vec![3]);

        // Quarter period of the 12 BPM swing moves the dot to the far end
        // (5000 ms / 4 = 1250 ms), with no update-gate involvement needed
        engine.tick(Instant::from_millis(1250));
        assert!(lit(engine.frame()).contains(&5));
    }
}
