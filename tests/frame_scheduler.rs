mod tests {
    use embassy_time::Instant;
    use lightstrip_engine::color::Rgb;
    use lightstrip_engine::{
        Command, CommandQueue, LightEngine, LightEngineConfig, OutputDriver, StripScheduler,
    };

    #[derive(Default)]
    struct RecordingDriver {
        frames: Vec<Vec<Rgb>>,
        brightness: Vec<u8>,
    }

    impl OutputDriver for RecordingDriver {
        fn present(&mut self, pixels: &[Rgb]) {
            self.frames.push(pixels.to_vec());
        }

        fn set_brightness(&mut self, level: u8) {
            self.brightness.push(level);
        }
    }

    fn scheduler(
        queue: &CommandQueue<4>,
    ) -> StripScheduler<'_, RecordingDriver, 6, 4> {
        let engine = LightEngine::new(queue.receiver(), &LightEngineConfig::default());
        StripScheduler::new(engine, RecordingDriver::default())
    }

    #[test]
    fn test_presents_only_when_the_render_gate_opens() {
        let queue = CommandQueue::new();
        let mut scheduler = scheduler(&queue);

        assert!(scheduler.tick(Instant::from_millis(0)).presented);
        // Polls inside the render interval do not reach the driver
        assert!(!scheduler.tick(Instant::from_millis(4)).presented);
        assert!(!scheduler.tick(Instant::from_millis(8)).presented);
        assert!(scheduler.tick(Instant::from_millis(17)).presented);
    }

    #[test]
    fn test_pushes_brightness_with_every_frame() {
        let queue = CommandQueue::new();
        let mut scheduler = scheduler(&queue);
        assert!(queue.sender().send(Command::SetBrightness(50)).is_ok());

        scheduler.tick(Instant::from_millis(0));
        let driver_frames = scheduler.tick(Instant::from_millis(17));
        assert!(driver_frames.presented);
        // 50 % of the 255 ceiling, snapped because the light is off
        assert_eq!(scheduler.engine().brightness(), 50);
    }

    #[test]
    fn test_sleep_hint_tracks_the_poll_interval() {
        let queue = CommandQueue::new();
        let mut scheduler = scheduler(&queue);

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.sleep_duration.as_millis(), 4);
        assert_eq!(result.next_deadline, Instant::from_millis(4));

        // Late arrival: no sleep, deadline advances from the schedule
        let result = scheduler.tick(Instant::from_millis(6));
        assert_eq!(result.sleep_duration.as_millis(), 2);
    }

    #[test]
    fn test_drift_reset_after_a_stall() {
        let queue = CommandQueue::new();
        let mut scheduler = scheduler(&queue);
        scheduler.tick(Instant::from_millis(0));

        // A long stall skips the backlog instead of catching up in a burst
        let result = scheduler.tick(Instant::from_millis(5000));
        assert_eq!(result.next_deadline, Instant::from_millis(5004));
    }
}
