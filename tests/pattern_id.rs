mod tests {
    use embassy_time::Instant;
    use strip_patterns::{PatternId, PatternSlot, Rgb};

    #[test]
    fn test_pattern_id_parse() {
        assert_eq!(
            PatternId::parse_from_str("rainbow"),
            Some(PatternId::Rainbow)
        );
        assert_eq!(
            PatternId::parse_from_str("folded_rainbow"),
            Some(PatternId::FoldedRainbow)
        );
        assert_eq!(
            PatternId::parse_from_str("confetti"),
            Some(PatternId::Confetti)
        );
        assert_eq!(
            PatternId::parse_from_str("sinelon"),
            Some(PatternId::Sinelon)
        );
        assert_eq!(PatternId::parse_from_str("lava_lamp"), None);
    }

    #[test]
    fn test_pattern_id_from_raw() {
        assert_eq!(PatternId::from_raw(0), Some(PatternId::Rainbow));
        assert_eq!(PatternId::from_raw(1), Some(PatternId::FoldedRainbow));
        assert_eq!(PatternId::from_raw(2), Some(PatternId::Confetti));
        assert_eq!(PatternId::from_raw(3), Some(PatternId::Sinelon));
        assert_eq!(PatternId::from_raw(4), None);
    }

    #[test]
    fn test_pattern_id_as_str_round_trips() {
        for raw in 0..4 {
            let id = PatternId::from_raw(raw).unwrap();
            assert_eq!(PatternId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_to_slot_preserves_id() {
        for raw in 0..4 {
            let id = PatternId::from_raw(raw).unwrap();
            assert_eq!(id.to_slot(0).id(), id);
        }
    }

    #[test]
    fn test_slot_render_and_reset() {
        let now = Instant::from_millis(0);
        let mut leds = [Rgb { r: 0, g: 0, b: 0 }; 8];

        for raw in 0..4 {
            let mut slot = PatternId::from_raw(raw).unwrap().to_slot(7);
            slot.render(now, &mut leds);
            slot.render(now, &mut leds);
            assert_eq!(slot.phase(), 2);

            slot.reset();
            assert_eq!(slot.phase(), 0);
        }
    }

    #[test]
    fn test_default_slot_is_rainbow() {
        assert_eq!(PatternSlot::default().id(), PatternId::Rainbow);
        assert_eq!(PatternSlot::default().phase(), 0);
    }
}
