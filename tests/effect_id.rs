mod tests {
    use lightstrip_engine::EffectId;

    #[test]
    fn test_all_ids_round_trip_through_names() {
        for id in EffectId::ALL {
            assert_eq!(EffectId::parse_from_str(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_all_ids_round_trip_through_raw() {
        for id in EffectId::ALL {
            assert_eq!(EffectId::from_raw(id as u8), Some(id));
        }
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(EffectId::Flash.as_str(), "Flash");
        assert_eq!(EffectId::Bpm.as_str(), "BPM");
        assert_eq!(EffectId::Visualize.as_str(), "Visualize");
    }

    #[test]
    fn test_unknown_name_rejected() {
        assert_eq!(EffectId::parse_from_str("Strobe"), None);
        assert_eq!(EffectId::parse_from_str("flash"), None);
    }

    #[test]
    fn test_unknown_raw_rejected() {
        assert_eq!(EffectId::from_raw(9), None);
        assert_eq!(EffectId::from_raw(255), None);
    }

    #[test]
    fn test_effect_list_is_complete() {
        assert_eq!(EffectId::ALL.len(), 9);
    }
}
