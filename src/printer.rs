use std::io::{self, Write};

use randcolor::Rgb;
use termcolor::{ColorChoice, ColorSpec, StandardStream, WriteColor};

const SWATCH: &str = "██";

#[derive(Debug, Clone)]
pub struct PrinterConfig {
    pub plain: bool,
}

pub struct ColorPrinter {
    config: PrinterConfig,
    stdout: StandardStream,
}

impl ColorPrinter {
    pub fn new(config: PrinterConfig) -> Self {
        let choice = if config.plain {
            ColorChoice::Never
        } else {
            ColorChoice::Auto
        };
        Self {
            config,
            stdout: StandardStream::stdout(choice),
        }
    }

    /// Prints `text`, preceded by a swatch of `rgb` unless running plain.
    pub fn print_color(&mut self, text: &str, rgb: Rgb) -> io::Result<()> {
        if self.config.plain {
            return writeln!(&mut self.stdout, "{text}");
        }

        let mut color = ColorSpec::new();
        color.set_fg(Some(rgb.into()));
        self.stdout.set_color(&color)?;
        write!(&mut self.stdout, "{SWATCH}")?;
        self.stdout.reset()?;
        writeln!(&mut self.stdout, " {text}")
    }
}
