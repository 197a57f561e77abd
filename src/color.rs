/// A color in HSL space. Hue is in degrees, saturation and lightness are fractions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Hsl {
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        let Hsl { s, l, .. } = self;
        // 360deg is the same hue as 0deg
        let h = if self.h == 360. { 0. } else { self.h };

        let chroma = (1. - f64::abs(2. * l - 1.)) * s;
        let h_prime = h / 60.;
        let x = chroma * (1. - f64::abs(f64::rem_euclid(h_prime, 2.) - 1.)); // X = C * (1 - |H' mod 2 - 1|)
        let (r1, g1, b1) = if (0.0..1.0).contains(&h_prime) {
            (chroma, x, 0.)
        } else if (1.0..2.0).contains(&h_prime) {
            (x, chroma, 0.)
        } else if (2.0..3.0).contains(&h_prime) {
            (0., chroma, x)
        } else if (3.0..4.0).contains(&h_prime) {
            (0., x, chroma)
        } else if (4.0..5.0).contains(&h_prime) {
            (x, 0., chroma)
        } else if (5.0..6.0).contains(&h_prime) {
            (chroma, 0., x)
        } else {
            (0., 0., 0.)
        };

        let m = l - (chroma / 2.);
        Rgb {
            r: channel(r1 + m),
            g: channel(g1 + m),
            b: channel(b1 + m),
        }
    }
}

fn channel(value: f64) -> u8 {
    (value * 255.).round().clamp(0., 255.) as u8
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats as `#RRGGBB` with uppercase digits.
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Formats as `rgba(r, g, b, alpha)`, with `alpha` written as given.
    pub fn to_rgba_string(self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

impl From<Rgb> for termcolor::Color {
    fn from(rgb: Rgb) -> Self {
        termcolor::Color::Rgb(rgb.r, rgb.g, rgb.b)
    }
}
