use serde::Deserialize;
use std::io::Read;
use svgplot::Point;
use svgplot::plot::{self, PlotOptions};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug)]
enum CliError {
    Help(&'static str),
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Plot(plot::Error),
    InvalidInput { line: usize, message: String },
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Help(msg) | CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Plot(err) => write!(f, "{err}"),
            CliError::InvalidInput { line, message } => {
                write!(f, "invalid input on line {line}: {message}")
            }
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<plot::Error> for CliError {
    fn from(value: plot::Error) -> Self {
        Self::Plot(value)
    }
}

#[derive(Debug)]
struct Args {
    input: Option<String>,
    out: Option<String>,
    config: Option<String>,
    width: f64,
    height: f64,
    sample: Option<usize>,
    stride: Option<f64>,
    reverse: bool,
    verbose: bool,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            input: None,
            out: None,
            config: None,
            width: 800.0,
            height: 600.0,
            sample: None,
            stride: None,
            reverse: false,
            verbose: false,
        }
    }
}

fn usage() -> &'static str {
    "svgplot-cli\n\
\n\
USAGE:\n\
  svgplot-cli [--width <w>] [--height <h>] [--sample <n>] [--reverse] [--stride <px>] [--config <path>] [--out <path>] [--verbose] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is either a JSON array of [x, y] pairs / {\"x\": .., \"y\": ..} objects,\n\
    or text with one `x,y` (or `x y`) pair per line; blank lines and `#` comments are skipped.\n\
  - --config loads plot styles from JSON (keys: canvas, line, grid.stride, grid.presentation).\n\
  - --sample keeps every n-th point; --reverse flips the point order (applied after sampling).\n\
  - The SVG is printed to stdout unless --out is given. Logs go to stderr (RUST_LOG is honored).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Help(usage())),
            "--reverse" => args.reverse = true,
            "--verbose" | "-v" => args.verbose = true,
            "--width" => args.width = parse_value(it.next())?,
            "--height" => args.height = parse_value(it.next())?,
            "--sample" => args.sample = Some(parse_value(it.next())?),
            "--stride" => args.stride = Some(parse_value(it.next())?),
            "--config" => args.config = Some(next_string(it.next())?),
            "--out" => args.out = Some(next_string(it.next())?),
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn next_string(v: Option<&String>) -> Result<String, CliError> {
    v.cloned().ok_or(CliError::Usage(usage()))
}

fn parse_value<T: std::str::FromStr>(v: Option<&String>) -> Result<T, CliError> {
    v.and_then(|s| s.parse::<T>().ok())
        .ok_or(CliError::Usage(usage()))
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PointInput {
    Pair([f64; 2]),
    Object(Point),
}

impl From<PointInput> for Point {
    fn from(value: PointInput) -> Self {
        match value {
            PointInput::Pair(p) => p.into(),
            PointInput::Object(p) => p,
        }
    }
}

fn parse_points(text: &str) -> Result<Vec<Point>, CliError> {
    if text.trim_start().starts_with('[') {
        let raw: Vec<PointInput> = serde_json::from_str(text)?;
        return Ok(raw.into_iter().map(Point::from).collect());
    }

    let mut points = Vec::new();
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let invalid = |message: String| CliError::InvalidInput {
            line: i + 1,
            message,
        };
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .collect();
        let [x, y] = fields.as_slice() else {
            return Err(invalid(format!(
                "expected 2 values, found {}",
                fields.len()
            )));
        };
        let num = |s: &str| {
            s.parse::<f64>()
                .map_err(|_| invalid(format!("`{s}` is not a number")))
        };
        points.push(Point::new(num(*x)?, num(*y)?));
    }
    Ok(points)
}

fn load_options(args: &Args) -> Result<PlotOptions, CliError> {
    let mut options = match &args.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => PlotOptions::default(),
    };
    if let Some(stride) = args.stride {
        options.grid.stride = stride;
    }
    Ok(options)
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let options = load_options(&args)?;
    let text = read_input(args.input.as_deref())?;
    let mut points = parse_points(&text)?;
    tracing::debug!(points = points.len(), "read input");

    if let Some(n) = args.sample {
        points = plot::sample(&points, n)?;
        tracing::debug!(points = points.len(), stride = n, "sampled input");
    }
    if args.reverse {
        plot::reverse(&mut points);
    }

    let svg = plot::render_line_svg(&points, args.width, args.height, &options)?;
    write_text(&svg, args.out.as_deref())?;
    if let Some(out) = &args.out {
        tracing::info!(path = %out, bytes = svg.len(), "wrote svg");
    }
    Ok(())
}

fn main() {
    let argv: Vec<String> = std::env::args().collect();
    let args = match parse_args(&argv) {
        Ok(v) => v,
        Err(CliError::Help(msg)) => {
            println!("{msg}");
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    init_logging(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
