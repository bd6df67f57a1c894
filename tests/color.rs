mod tests {
    use strip_patterns::color::{
        Hsv, Rgb, fade_to_black_by, fill_rainbow, hsv2rgb, max_colors, mirror_fold,
        saturating_add_colors,
    };

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn full_hue(hue: u8) -> Rgb {
        hsv2rgb(Hsv {
            hue,
            sat: 255,
            val: 255,
        })
    }

    #[test]
    fn test_fill_rainbow_steps_hue_per_pixel() {
        let mut leds = [BLACK; 5];
        fill_rainbow(&mut leds, 10, 7);

        assert_eq!(leds[0], full_hue(10));
        assert_eq!(leds[1], full_hue(17));
        assert_eq!(leds[2], full_hue(24));
        assert_eq!(leds[3], full_hue(31));
        assert_eq!(leds[4], full_hue(38));
    }

    #[test]
    fn test_fill_rainbow_hue_wraps() {
        let mut leds = [BLACK; 2];
        fill_rainbow(&mut leds, 250, 10);

        assert_eq!(leds[0], full_hue(250));
        assert_eq!(leds[1], full_hue(4));
    }

    #[test]
    fn test_mirror_fold_reverses_onto_tail() {
        let mut leds = [BLACK; 64];
        for (i, led) in leds.iter_mut().take(32).enumerate() {
            led.r = i as u8;
        }

        mirror_fold(&mut leds, 32);

        for i in 0..32 {
            assert_eq!(leds[63 - i], leds[i]);
        }
    }

    #[test]
    fn test_mirror_fold_never_overwrites_source() {
        let a = Rgb { r: 1, g: 0, b: 0 };
        let b = Rgb { r: 2, g: 0, b: 0 };
        let c = Rgb { r: 3, g: 0, b: 0 };

        // Fold larger than half the slice: only the copy that lands past
        // the fold happens, the gradient region stays untouched.
        let mut leds = [a, b, c, BLACK];
        mirror_fold(&mut leds, 3);
        assert_eq!(leds, [a, b, c, a]);

        // Fold larger than the whole slice: nothing to mirror onto.
        let mut leds = [a, b, c];
        mirror_fold(&mut leds, 8);
        assert_eq!(leds, [a, b, c]);
    }

    #[test]
    fn test_fade_to_black_by() {
        let mut leds = [Rgb {
            r: 255,
            g: 100,
            b: 0,
        }];
        fade_to_black_by(&mut leds, 7);
        assert_eq!(leds[0], Rgb { r: 248, g: 97, b: 0 });

        fade_to_black_by(&mut leds, 255);
        assert_eq!(leds[0], BLACK);
    }

    #[test]
    fn test_saturating_add_colors() {
        let a = Rgb {
            r: 200,
            g: 10,
            b: 0,
        };
        let b = Rgb {
            r: 100,
            g: 20,
            b: 5,
        };
        assert_eq!(
            saturating_add_colors(a, b),
            Rgb {
                r: 255,
                g: 30,
                b: 5
            }
        );
    }

    #[test]
    fn test_max_colors() {
        let a = Rgb {
            r: 200,
            g: 10,
            b: 0,
        };
        let b = Rgb {
            r: 100,
            g: 20,
            b: 0,
        };
        assert_eq!(
            max_colors(a, b),
            Rgb {
                r: 200,
                g: 20,
                b: 0
            }
        );
    }
}
