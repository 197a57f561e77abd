use std::fmt::Display;
use std::ops::RangeInclusive;

use crate::color::Rgb;

pub const HUE_MAX: u16 = 360;
pub const PERCENT_MAX: u16 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// `#RRGGBB`
    #[default]
    Hex,
    /// `rgba(r, g, b, alpha)`
    Rgba,
}

impl Format {
    /// Only `"hex"` selects hex output. Every other name, including `"rgb"`
    /// and `"hsl"`, falls through to the rgba string.
    pub fn from_name(name: &str) -> Self {
        match name {
            "hex" => Format::Hex,
            _ => Format::Rgba,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Hue,
    Saturation,
    Lightness,
}

impl Channel {
    pub fn max(self) -> u16 {
        match self {
            Channel::Hue => HUE_MAX,
            Channel::Saturation | Channel::Lightness => PERCENT_MAX,
        }
    }
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Hue => write!(f, "hue"),
            Channel::Saturation => write!(f, "saturation"),
            Channel::Lightness => write!(f, "lightness"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Range { channel: Channel, low: u16, high: u16 },
    Alpha(f64),
}

impl std::error::Error for ValidationError {}

impl Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Range { channel, low, high } => write!(
                f,
                "Invalid {channel} range [{low}, {high}], expected 0 <= low <= high <= {}",
                channel.max()
            ),
            ValidationError::Alpha(alpha) => {
                write!(f, "Invalid alpha {alpha}, expected a value between 0 and 1")
            }
        }
    }
}

/// Bounds for [`crate::generate`]. Saturation and lightness are percentages.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub format: Format,
    pub alpha: f64,
    pub hue: RangeInclusive<u16>,
    pub saturation: RangeInclusive<u16>,
    pub lightness: RangeInclusive<u16>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: Format::Hex,
            alpha: 1.,
            hue: 0..=HUE_MAX,
            saturation: 0..=PERCENT_MAX,
            lightness: 0..=PERCENT_MAX,
        }
    }
}

impl Options {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range(Channel::Hue, &self.hue)?;
        check_range(Channel::Saturation, &self.saturation)?;
        check_range(Channel::Lightness, &self.lightness)?;

        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ValidationError::Alpha(self.alpha));
        }
        Ok(())
    }

    /// Writes `rgb` in the configured format.
    pub fn render(&self, rgb: Rgb) -> String {
        match self.format {
            Format::Hex => rgb.to_hex(),
            Format::Rgba => rgb.to_rgba_string(self.alpha),
        }
    }
}

fn check_range(channel: Channel, range: &RangeInclusive<u16>) -> Result<(), ValidationError> {
    let (low, high) = (*range.start(), *range.end());
    if low > high || high > channel.max() {
        return Err(ValidationError::Range { channel, low, high });
    }
    Ok(())
}
