mod tests {
    use button_light_engine::color::hsv2rgb;
    use button_light_engine::{Hsv, PALETTE_LEN, Palette, Rgb};

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_slot_zero_is_white() {
        let palette = Palette::new();
        assert_eq!(palette.color(0), WHITE);
    }

    #[test]
    fn test_hue_slots_are_evenly_spaced() {
        let palette = Palette::new();
        for i in 1..=16u8 {
            let expected = hsv2rgb(Hsv {
                hue: (i - 1) * 16,
                sat: 255,
                val: 255,
            });
            assert_eq!(palette.color(i), expected, "palette slot {i}");
        }
    }

    #[test]
    fn test_hue_slots_differ_from_white() {
        let palette = Palette::new();
        for i in 1..=16u8 {
            assert_ne!(palette.color(i), WHITE, "palette slot {i}");
        }
    }

    #[test]
    fn test_out_of_range_index_wraps() {
        let palette = Palette::new();
        #[allow(clippy::cast_possible_truncation)]
        let len = PALETTE_LEN as u8;
        assert_eq!(palette.color(len), palette.color(0));
        assert_eq!(palette.color(len + 3), palette.color(3));
    }

    #[test]
    fn test_len() {
        let palette = Palette::new();
        assert_eq!(palette.len(), 17);
    }
}
