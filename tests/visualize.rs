mod tests {
    use lightstrip_engine::color::Rgb;
    use lightstrip_engine::visualize::copy_frame;

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_exact_frame_overwrites_in_strip_order() {
        let mut frame = [BLACK; 4];
        let bytes: Vec<u8> = (0..12).collect();
        assert_eq!(copy_frame(&mut frame, &bytes), Ok(true));
        assert_eq!(frame[0], Rgb::new(0, 1, 2));
        assert_eq!(frame[1], Rgb::new(3, 4, 5));
        assert_eq!(frame[3], Rgb::new(9, 10, 11));
    }

    #[test]
    fn test_short_frame_leaves_buffer_unchanged() {
        let mut frame = [Rgb::new(1, 2, 3); 4];
        let err = copy_frame(&mut frame, &[0u8; 11]).expect_err("short frame accepted");
        assert_eq!(err.got, 11);
        assert_eq!(err.expected, 12);
        assert!(frame.iter().all(|led| *led == Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_long_frame_leaves_buffer_unchanged() {
        let mut frame = [Rgb::new(1, 2, 3); 4];
        let err = copy_frame(&mut frame, &[0u8; 13]).expect_err("long frame accepted");
        assert_eq!(err.got, 13);
        assert_eq!(err.expected, 12);
        assert!(frame.iter().all(|led| *led == Rgb::new(1, 2, 3)));
    }

    #[test]
    fn test_empty_input_is_noop() {
        let mut frame = [Rgb::new(1, 2, 3); 4];
        assert_eq!(copy_frame(&mut frame, &[]), Ok(false));
        assert!(frame.iter().all(|led| *led == Rgb::new(1, 2, 3)));
    }
}
