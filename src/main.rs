use std::path::PathBuf;

use anyhow::{anyhow, bail, Context};
use barprint::{
    init_logging, params_from_config, render, Config, OutputFormat, RectangleSet,
    SilhouetteBuilder, BUILD_DATE, VERSION,
};
use tracing::{debug, error};

const USAGE: &str =
    "Usage: barprint [--config PATH] [--tolerance EPS] [--format json|svg|text] INPUT";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    tolerance: Option<f64>,
    format: Option<OutputFormat>,
    input: Option<PathBuf>,
}

#[derive(Debug)]
enum Command {
    Run(Args),
    Help,
    Version,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<Command> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--config" => {
                let value = args.next().ok_or_else(|| anyhow!("--config needs a path"))?;
                parsed.config = Some(PathBuf::from(value));
            }
            "--tolerance" => {
                let value = args.next().ok_or_else(|| anyhow!("--tolerance needs a value"))?;
                let eps = value
                    .parse::<f64>()
                    .with_context(|| format!("Invalid tolerance: {}", value))?;
                parsed.tolerance = Some(eps);
            }
            "--format" => {
                let value = args.next().ok_or_else(|| anyhow!("--format needs a value"))?;
                parsed.format = Some(value.parse()?);
            }
            flag if flag.starts_with('-') => bail!("Unknown option: {}", flag),
            path => {
                if parsed.input.is_some() {
                    bail!("Only one input file may be given");
                }
                parsed.input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(Command::Run(parsed))
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let args = match parse_args(std::env::args().skip(1))? {
        Command::Run(args) => args,
        Command::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        Command::Version => {
            println!("barprint {} ({})", VERSION, BUILD_DATE);
            return Ok(());
        }
    };
    let Some(input) = args.input else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    let mut config = Config::load_or_default(args.config.as_deref())?;
    if let Some(eps) = args.tolerance {
        config.outline.tolerance = eps;
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }
    let params = params_from_config(&config)?;
    debug!("Outline parameters: {:?}", params);

    let set = RectangleSet::load_from_file(&input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    let outline = match SilhouetteBuilder::new(params).build_from_corners(&set.rectangles) {
        Ok(outline) => outline,
        Err(e) => {
            error!("No outline for {}: {}", input.display(), e);
            std::process::exit(1);
        }
    };

    println!("{}", render(&outline, &config.output)?);
    Ok(())
}
