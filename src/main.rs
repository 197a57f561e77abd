mod parse;
mod printer;

use std::process::ExitCode;

use rand::SeedableRng;
use rand::rngs::StdRng;
use randcolor::{Format, Options};

use crate::parse::ParseError;
use crate::printer::{ColorPrinter, PrinterConfig};

const FORMAT_ENV: &str = "RANDCOLOR_FORMAT";

fn print_help() {
    println!(
        "Usage: randcolor [options]
  -f, --format <NAME>       Output format, 'hex' or anything else for rgba(). Defaults to $RANDCOLOR_FORMAT or hex.
  -a, --alpha <NUM>         Alpha written into rgba() output, 0 to 1. Defaults to 1.
      --hue <LOW-HIGH>      Hue range in degrees, 0 to 360.
      --saturation <LOW-HIGH>
                            Saturation range in percent, 0 to 100.
      --lightness <LOW-HIGH>
                            Lightness range in percent, 0 to 100.
  -n, --count <NUM>         Number of colors to print. Defaults to 1.
      --seed <NUM>          Seed the generator for reproducible colors.
      --plain               Print only the color value, without a swatch.
      --debug               Print error detail instead of a short message."
    );
}

#[derive(Debug)]
struct CliArgs {
    pub help: bool,
    pub debug: bool,
    pub plain: bool,
    pub count: u32,
    pub seed: Option<u64>,
    pub options: Options,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            help: false,
            debug: false,
            plain: false,
            count: 1,
            seed: None,
            options: Options::default(),
        }
    }
}

fn next_value<I: Iterator<Item = String>>(
    args: &mut I,
    flag: &'static str,
) -> Result<String, ParseError> {
    args.next().ok_or(ParseError::MissingValue(flag))
}

impl CliArgs {
    pub fn from_args<I: Iterator<Item = String>>(
        mut args: I,
        default_format: Option<String>,
    ) -> Result<Self, ParseError> {
        let mut value = Self::default();
        if let Some(name) = default_format {
            value.options.format = Format::from_name(&name);
        }

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => value.help = true,
                "--debug" => value.debug = true,
                "--plain" => value.plain = true,
                "-f" | "--format" => {
                    value.options.format = Format::from_name(&next_value(&mut args, "--format")?)
                }
                "-a" | "--alpha" => {
                    value.options.alpha = parse::parse_alpha(&next_value(&mut args, "--alpha")?)?
                }
                "--hue" => {
                    value.options.hue = parse::parse_range(&next_value(&mut args, "--hue")?)?
                }
                "--saturation" => {
                    value.options.saturation =
                        parse::parse_range(&next_value(&mut args, "--saturation")?)?
                }
                "--lightness" => {
                    value.options.lightness =
                        parse::parse_range(&next_value(&mut args, "--lightness")?)?
                }
                "-n" | "--count" => {
                    value.count = parse::parse_number(&next_value(&mut args, "--count")?)?
                }
                "--seed" => {
                    value.seed = Some(parse::parse_number(&next_value(&mut args, "--seed")?)?)
                }
                _ => (),
            }
        }

        Ok(value)
    }
}

fn run(args: &CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    let mut printer = ColorPrinter::new(PrinterConfig { plain: args.plain });
    for _ in 0..args.count {
        let rgb = randcolor::random_rgb(&args.options, &mut rng)?;
        printer.print_color(&args.options.render(rgb), rgb)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let default_format = std::env::var(FORMAT_ENV).ok();
    let args = match CliArgs::from_args(std::env::args().skip(1), default_format) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("randcolor: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.help {
        print_help();
        return ExitCode::SUCCESS;
    }

    if let Err(e) = run(&args) {
        if args.debug {
            eprintln!("randcolor: {e:?}");
        } else {
            eprintln!("randcolor: {e}");
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
