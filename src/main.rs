use std::io;
use std::path::PathBuf;

use advent_puzzles::cosmic_expansion::DEFAULT_EXPANSION;
use advent_puzzles::model::CubeLimits;
use advent_puzzles::report::{self, ReportFormat};
use advent_puzzles::{Result, ToolError, solve};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging().and_then(|()| run(cli)) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| ToolError::Logging(error.to_string()))
}

fn run(cli: Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Trebuchet(args) => {
            let totals = solve::trebuchet(&args.input_or("../document.txt"))?;
            report::write(&mut stdout, &totals, args.format.into())
        }
        Command::CubeConundrum(args) => {
            let limits = CubeLimits::new(args.max_red, args.max_green, args.max_blue);
            let totals = solve::cube_conundrum(&args.puzzle.input_or("../games.txt"), limits)?;
            report::write(&mut stdout, &totals, args.puzzle.format.into())
        }
        Command::GearRatios(args) => {
            let totals = solve::gear_ratios(&args.input_or("../schematic.txt"))?;
            report::write(&mut stdout, &totals, args.format.into())
        }
        Command::Scratchcards(args) => {
            let totals = solve::scratchcards(&args.input_or("../scratchcards.txt"))?;
            report::write(&mut stdout, &totals, args.format.into())
        }
        Command::SeedAlmanac(args) => {
            let totals = solve::seed_almanac(&args.input_or("../almanac.txt"))?;
            report::write(&mut stdout, &totals, args.format.into())
        }
        Command::BoatRaces(args) => {
            let totals = solve::boat_races(&args.input_or("../races.txt"))?;
            report::write(&mut stdout, &totals, args.format.into())
        }
        Command::CamelCards(args) => {
            let totals = solve::camel_cards(&args.input_or("../hands.txt"))?;
            report::write(&mut stdout, &totals, args.format.into())
        }
        Command::HauntedWasteland(args) => {
            let totals = solve::haunted_wasteland(&args.input_or("../network.txt"))?;
            report::write(&mut stdout, &totals, args.format.into())
        }
        Command::MirageMaintenance(args) => {
            let totals = solve::mirage_maintenance(&args.input_or("../report.txt"))?;
            report::write(&mut stdout, &totals, args.format.into())
        }
        Command::PipeMaze(args) => {
            let totals = solve::pipe_maze(&args.input_or("../tiles.txt"))?;
            report::write(&mut stdout, &totals, args.format.into())
        }
        Command::CosmicExpansion(args) => {
            let input = args.puzzle.input_or("../galaxies.txt");
            let totals = solve::cosmic_expansion(&input, args.expansion)?;
            report::write(&mut stdout, &totals, args.puzzle.format.into())
        }
    }
}

#[derive(Parser)]
#[command(author, version, about = "Solve line-oriented daily text puzzles.")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sum the calibration values of a document.
    Trebuchet(PuzzleArgs),
    /// Check cube game records against the bag limits.
    CubeConundrum(CubeArgs),
    /// Sum part numbers and gear ratios of an engine schematic.
    GearRatios(PuzzleArgs),
    /// Score scratchcards and count the copies they win.
    Scratchcards(PuzzleArgs),
    /// Map seeds through an almanac to their lowest location.
    SeedAlmanac(PuzzleArgs),
    /// Count the ways to beat each boat race record.
    BoatRaces(PuzzleArgs),
    /// Rank camel card hands and total their winnings.
    CamelCards(PuzzleArgs),
    /// Walk the desert node network.
    HauntedWasteland(PuzzleArgs),
    /// Extrapolate oasis histories forwards and backwards.
    MirageMaintenance(PuzzleArgs),
    /// Trace the pipe loop and count the tiles it encloses.
    PipeMaze(PuzzleArgs),
    /// Sum galaxy pair distances in an expanding image.
    CosmicExpansion(ExpansionArgs),
}

#[derive(clap::Args)]
struct PuzzleArgs {
    /// Puzzle input to read. Each puzzle has its own default file.
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format for the totals.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    format: OutputFormat,
}

impl PuzzleArgs {
    fn input_or(&self, default: &str) -> PathBuf {
        self.input.clone().unwrap_or_else(|| PathBuf::from(default))
    }
}

#[derive(clap::Args)]
struct CubeArgs {
    #[command(flatten)]
    puzzle: PuzzleArgs,

    /// Red cubes in the bag.
    #[arg(long, default_value_t = 12)]
    max_red: u32,

    /// Green cubes in the bag.
    #[arg(long, default_value_t = 13)]
    max_green: u32,

    /// Blue cubes in the bag.
    #[arg(long, default_value_t = 14)]
    max_blue: u32,
}

#[derive(clap::Args)]
struct ExpansionArgs {
    #[command(flatten)]
    puzzle: PuzzleArgs,

    /// How many rows or columns each empty one becomes for the second total.
    #[arg(long, default_value_t = DEFAULT_EXPANSION)]
    expansion: u64,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Plain,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => ReportFormat::Plain,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}
