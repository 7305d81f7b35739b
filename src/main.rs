use std::path::{
    Path,
    PathBuf
};

use clap::{
    CommandFactory,
    Parser
};

use acvcurve::approximation::approximator::ApproximationStrategy;
use acvcurve::configuration::ConversionOptions;
use acvcurve::conversion::{
    convert_file,
    read_curve_file,
    ConversionError
};

#[derive(Parser)]
#[command(name = "gimp2acv")]
#[command(version, about = "Convert GIMP curves files to Adobe .acv curves", long_about = None)]
struct Cli {
    /// Input GIMP curves file
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Input GIMP curves file (same as the positional argument)
    #[arg(short, long, value_name = "FILE", conflicts_with = "file")]
    input: Option<PathBuf>,

    /// Output .acv file [default: <input>.acv]
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Conversion settings (JSON)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// How sampled curves are reduced to control points
    #[arg(long, value_name = "STRATEGY", value_parser = parse_strategy)]
    strategy: Option<ApproximationStrategy>,

    /// Number of control points per sampled curve
    #[arg(long, value_name = "N")]
    points: Option<usize>,

    /// Print the curves stored in an .acv file and exit
    #[arg(long, value_name = "FILE", conflicts_with_all = ["file", "input", "output"])]
    dump: Option<PathBuf>,

    /// Show debug output
    #[arg(short, long)]
    verbose: bool,
}

fn parse_strategy(name: &str) -> Result<ApproximationStrategy, String> {
    ApproximationStrategy::parse(name)
        .ok_or_else(|| format!("unknown strategy '{}' (chebyshev-lagrange, direct-polynomial)", name))
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = if let Some(path) = cli.dump.as_deref() {
        cmd_dump(path)
    } else if let Some(input) = cli.input.clone().or_else(|| cli.file.clone()) {
        cmd_convert(&input, &cli)
    } else {
        let mut command = Cli::command();
        eprintln!("{}", command.render_help());
        std::process::exit(2);
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_convert(input: &Path, cli: &Cli) -> Result<(), ConversionError> {
    let mut options = match cli.config.as_deref() {
        Some(path) => ConversionOptions::from_reader(path)?,
        None => ConversionOptions::new()
    };
    if let Some(strategy) = cli.strategy {
        options = options.with_strategy(strategy);
    }
    if let Some(points) = cli.points {
        options = options.with_number_of_points(points);
    }

    let output = options.resolve_output_path(input, cli.output.as_deref());
    let summary = convert_file(input, &output, &options)?;
    println!("{}", summary);
    Ok(())
}

fn cmd_dump(path: &Path) -> Result<(), ConversionError> {
    let curve_set = read_curve_file(path)?;
    println!("{}: {}", path.display(), curve_set);
    for (index, curve) in curve_set.curves().iter().enumerate() {
        println!("curve {} ({} points): {}", index, curve.len(), curve);
    }
    Ok(())
}
