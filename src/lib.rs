//! Random colors drawn from bounded hue, saturation, and lightness ranges.
//!
//! ```
//! let opts = randcolor::Options {
//!     hue: 0..=0,
//!     saturation: 100..=100,
//!     lightness: 50..=50,
//!     ..Default::default()
//! };
//! assert_eq!(randcolor::generate(&opts).unwrap(), "#FF0000");
//! ```

mod color;
mod options;

use rand::Rng;

pub use color::{Hsl, Rgb};
pub use options::{Channel, Format, HUE_MAX, Options, PERCENT_MAX, ValidationError};

/// Generates a color using the thread-local generator.
pub fn generate(options: &Options) -> Result<String, ValidationError> {
    generate_with(options, &mut rand::rng())
}

/// Generates a color using `rng`. A seeded generator gives reproducible output.
pub fn generate_with<R: Rng + ?Sized>(
    options: &Options,
    rng: &mut R,
) -> Result<String, ValidationError> {
    let rgb = random_rgb(options, rng)?;
    Ok(options.render(rgb))
}

/// Like [`generate_with`] but returns the channels instead of a string.
pub fn random_rgb<R: Rng + ?Sized>(
    options: &Options,
    rng: &mut R,
) -> Result<Rgb, ValidationError> {
    Ok(random_hsl(options, rng)?.to_rgb())
}

/// Draws the HSL triple. Nothing is drawn if the options are invalid.
pub fn random_hsl<R: Rng + ?Sized>(
    options: &Options,
    rng: &mut R,
) -> Result<Hsl, ValidationError> {
    options.validate()?;

    let hue = rng.random_range(options.hue.clone());
    let saturation = rng.random_range(options.saturation.clone());
    let lightness = rng.random_range(options.lightness.clone());

    Ok(Hsl::new(
        f64::from(hue),
        f64::from(saturation) / f64::from(PERCENT_MAX),
        f64::from(lightness) / f64::from(PERCENT_MAX),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use regex::Regex;

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn drawn_values_stay_in_range() {
        let opts = Options {
            hue: 90..=180,
            saturation: 20..=40,
            lightness: 60..=61,
            ..Default::default()
        };
        let mut rng = seeded();
        for _ in 0..500 {
            let hsl = random_hsl(&opts, &mut rng).unwrap();
            assert!((90.0..=180.0).contains(&hsl.h), "hue {} out of range", hsl.h);
            let s = (hsl.s * 100.).round() as u16;
            let l = (hsl.l * 100.).round() as u16;
            assert!(opts.saturation.contains(&s), "saturation {s} out of range");
            assert!(opts.lightness.contains(&l), "lightness {l} out of range");
            assert_eq!(hsl.h.fract(), 0.);
        }
    }

    #[test]
    fn hex_shape() {
        let re = Regex::new(r"^#[0-9A-F]{6}$").unwrap();
        let mut rng = seeded();
        for _ in 0..500 {
            let color = generate_with(&Options::default(), &mut rng).unwrap();
            assert!(re.is_match(&color), "{color} is not #RRGGBB");
        }
    }

    #[test]
    fn rgba_shape_and_alpha() {
        let re = Regex::new(r"^rgba\((\d{1,3}), (\d{1,3}), (\d{1,3}), (.+)\)$").unwrap();
        let opts = Options {
            format: Format::from_name("rgb"),
            alpha: 0.5,
            ..Default::default()
        };
        let mut rng = seeded();
        for _ in 0..500 {
            let color = generate_with(&opts, &mut rng).unwrap();
            let caps = re.captures(&color).expect("rgba shape");
            for i in 1..=3 {
                assert!(caps[i].parse::<u16>().unwrap() <= 255);
            }
            assert_eq!(&caps[4], "0.5");
        }
    }

    #[test]
    fn rgba_default_alpha_is_one() {
        let opts = Options {
            format: Format::Rgba,
            hue: 0..=0,
            saturation: 100..=100,
            lightness: 50..=50,
            ..Default::default()
        };
        assert_eq!(generate(&opts).unwrap(), "rgba(255, 0, 0, 1)");
    }

    #[test]
    fn all_zero_is_black() {
        let opts = Options {
            hue: 0..=0,
            saturation: 0..=0,
            lightness: 0..=0,
            ..Default::default()
        };
        assert_eq!(generate(&opts).unwrap(), "#000000");
    }

    #[test]
    fn pure_red() {
        let opts = Options {
            hue: 0..=0,
            saturation: 100..=100,
            lightness: 50..=50,
            ..Default::default()
        };
        assert_eq!(generate(&opts).unwrap(), "#FF0000");
    }

    #[test]
    fn invalid_ranges_fail_the_same_way() {
        let opts = Options {
            hue: 400..=410,
            ..Default::default()
        };
        let first = generate(&opts).unwrap_err();
        let second = generate(&opts).unwrap_err();
        assert_eq!(first, second);
        assert!(matches!(
            first,
            ValidationError::Range {
                channel: Channel::Hue,
                ..
            }
        ));

        #[allow(clippy::reversed_empty_ranges)]
        let opts = Options {
            saturation: 50..=10,
            ..Default::default()
        };
        assert!(generate(&opts).is_err());
    }

    #[test]
    fn same_seed_same_color() {
        let opts = Options::default();
        let a = generate_with(&opts, &mut seeded()).unwrap();
        let b = generate_with(&opts, &mut seeded()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejected_options_draw_nothing() {
        let opts = Options {
            alpha: 2.,
            ..Default::default()
        };
        let mut used = seeded();
        assert!(generate_with(&opts, &mut used).is_err());
        let mut fresh = seeded();
        assert_eq!(used.random::<u64>(), fresh.random::<u64>());
    }
}
