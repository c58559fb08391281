//! img2svg CLI
//!
//! Usage:
//!   img2svg [OPTIONS] [IMAGE]
//!
//! Options:
//!   -c, --conf <FILE>           Region file, tab-separated "x y rx ry title href"
//!   -o, --outfile <FILE>        Output SVG [default: out.svg]
//!   -C, --fill-color <COLOR>    Region fill colour [default: #CCCCCC]
//!   -P, --fill-opacity <FLOAT>  Region opacity on hover [default: 0.3]
//!   -s, --style <FILE>          Style file (TOML)
//!   -v, --verbose               Print every region as it is read
//!   -h, -?, --help              Print help
//!   -V, --version               Print version

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, CommandFactory, Parser};

use img2svg::conf::CONF_FORMAT;
use img2svg::{logger, ImageMap, Img2SvgError, Style};

#[derive(Parser)]
#[command(name = "img2svg")]
#[command(version, about = "Convert an image into a clickable SVG image map")]
#[command(disable_help_flag = true)]
struct Cli {
    /// Image file to embed
    image: Option<PathBuf>,

    /// Region file, one "x y rx ry title href" line per region, separated with <Tab>
    #[arg(short, long, value_name = "FILE")]
    conf: Option<PathBuf>,

    /// Output SVG file
    #[arg(short, long, value_name = "FILE", default_value = "out.svg")]
    outfile: PathBuf,

    /// Region fill colour [default: #CCCCCC]
    #[arg(short = 'C', long, value_name = "COLOR")]
    fill_color: Option<String>,

    /// Region fill opacity while hovered, 0.0 to 1.0 [default: 0.3]
    #[arg(short = 'P', long, value_name = "FLOAT", value_parser = parse_opacity)]
    fill_opacity: Option<f64>,

    /// Style file (TOML) with fill_color, fill_opacity and link_target
    #[arg(short, long, value_name = "FILE")]
    style: Option<PathBuf>,

    /// Print every region as it is read
    #[arg(short, long)]
    verbose: bool,

    /// Print help
    #[arg(short = 'h', long, short_alias = '?', action = ArgAction::Help)]
    help: Option<bool>,
}

fn parse_opacity(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(format!("{value} is not within 0.0..=1.0"));
    }
    Ok(value)
}

fn main() {
    let cli = Cli::parse();
    logger::set_verbose(cli.verbose);

    // No image means nothing to convert: show help as an informational exit.
    let Some(image) = &cli.image else {
        if let Err(e) = Cli::command().print_help() {
            logger::error(&e.to_string());
            process::exit(1);
        }
        return;
    };

    if let Err(e) = run(&cli, image) {
        report(&e);
        process::exit(e.exit_code());
    }
}

fn run(cli: &Cli, image: &Path) -> Result<(), Img2SvgError> {
    let mut style = match &cli.style {
        Some(path) => Style::from_file(path)?,
        None => Style::default(),
    };
    if let Some(color) = &cli.fill_color {
        style = style.with_fill_color(color.as_str());
    }
    if let Some(opacity) = cli.fill_opacity {
        style = style.with_fill_opacity(opacity);
    }

    let mut map = ImageMap::new(image, style)?;
    map.wrap(cli.conf.as_deref())?;
    map.save(&cli.outfile)
}

fn report(e: &Img2SvgError) {
    if let Img2SvgError::MalformedConfig { path, .. } = e {
        if let Ok(source) = fs::read_to_string(path) {
            eprint!("{}", e.report(&source));
            return;
        }
    }
    logger::error(&e.to_string());
    if matches!(e, Img2SvgError::MalformedConfig { .. }) {
        eprintln!("expected format: {CONF_FORMAT}");
    }
}
