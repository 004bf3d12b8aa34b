//! Command-line interface driving the three exercises

use std::io::Write;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{info, warn};

use crate::io::configuration::{
    DEFAULT_DIRECTION_ORDER, DEFAULT_RING_SIZE, DEFAULT_START, DEFAULT_START_OFFSET, DEFAULT_STEP,
    DEFAULT_TARGET, DISPLAY_LIMIT, PROGRESS_THRESHOLD, SAMPLE_MAZE, SAMPLE_TARGET, SAMPLE_VALUES,
};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_maze_as_png;
use crate::io::maze_file::{load_maze, save_maze};
use crate::io::progress::EliminationProgress;
use crate::maze::solver::{compare_orders, fewest_steps};
use crate::maze::{DirectionOrder, MazeGrid, Position, SearchOutcome, solve};
use crate::ring::{JosephusRing, josephus_survivor};
use crate::search::SearchAlgorithm;

#[derive(Parser, Debug)]
#[command(name = "cs-classics")]
#[command(
    author,
    version,
    about = "Backtracking maze search, Fibonacci search and the Josephus ring"
)]
/// Command-line arguments for the exercise runner
pub struct Cli {
    /// Exercise to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available exercises
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find a path through a maze by backtracking
    Maze(MazeArgs),
    /// Look a value up in a sorted list
    Search(SearchArgs),
    /// Simulate the Josephus elimination
    Josephus(JosephusArgs),
}

/// Arguments of the `maze` command
#[derive(Args, Debug)]
pub struct MazeArgs {
    /// Maze text file (digits 0-3 or symbols . # * x); the built-in sample if omitted
    #[arg(short, long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Direction order, e.g. `down,right,up,left` or `DRUL`; repeat to try several
    #[arg(short, long = "order", default_value = DEFAULT_DIRECTION_ORDER)]
    pub orders: Vec<DirectionOrder>,

    /// Start cell as `row,col`
    #[arg(short, long, value_parser = parse_position)]
    pub start: Option<Position>,

    /// Target cell as `row,col`
    #[arg(short, long, value_parser = parse_position)]
    pub target: Option<Position>,

    /// Also try both preset orders and report the one with the fewest steps
    #[arg(short, long)]
    pub compare: bool,

    /// Write the searched maze as a PNG image
    #[arg(long, value_name = "PNG")]
    pub output: Option<PathBuf>,

    /// Write the searched maze as text
    #[arg(long, value_name = "FILE")]
    pub save: Option<PathBuf>,
}

/// Arguments of the `search` command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Ascending values, comma separated
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true,
          default_values_t = SAMPLE_VALUES.to_vec())]
    pub values: Vec<i64>,

    /// Value to look for
    #[arg(short, long, allow_hyphen_values = true, default_value_t = SAMPLE_TARGET)]
    pub target: i64,

    /// Search algorithm
    #[arg(short, long, value_enum, default_value_t = SearchAlgorithm::Fibonacci)]
    pub algorithm: SearchAlgorithm,
}

/// Arguments of the `josephus` command
#[derive(Args, Debug)]
pub struct JosephusArgs {
    /// Number of participants
    #[arg(short = 'n', long, default_value_t = DEFAULT_RING_SIZE)]
    pub count: usize,

    /// One-based position where counting starts
    #[arg(short, long, default_value_t = DEFAULT_START_OFFSET)]
    pub start: usize,

    /// Count step; every `step`-th participant leaves
    #[arg(short = 'k', long, default_value_t = DEFAULT_STEP)]
    pub step: usize,

    /// Cross-check the survivor against the closed-form recurrence
    #[arg(long)]
    pub verify: bool,

    /// Suppress the progress bar
    #[arg(short, long)]
    pub quiet: bool,
}

/// Parse `row,col` into a grid position
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated unsigned integers
pub fn parse_position(text: &str) -> std::result::Result<Position, String> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| format!("expected `row,col`, got `{text}`"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row `{row}`: {e}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column `{col}`: {e}"))?;
    Ok([row, col])
}

/// Executes parsed commands and writes human-readable reports
pub struct Runner<W: Write> {
    out: W,
}

impl<W: Write> Runner<W> {
    /// Create a runner reporting to `out`
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the runner and return its writer
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, file access or writing the
    /// report fails
    pub fn run(&mut self, cli: &Cli) -> Result<()> {
        match &cli.command {
            Command::Maze(args) => self.run_maze(args),
            Command::Search(args) => self.run_search(args),
            Command::Josephus(args) => self.run_josephus(args),
        }
    }

    fn run_maze(&mut self, args: &MazeArgs) -> Result<()> {
        let mut grid = match &args.file {
            Some(path) => load_maze(path)?,
            None => MazeGrid::from_codes(&SAMPLE_MAZE)?,
        };
        let start = args.start.unwrap_or(DEFAULT_START);
        let target = args.target.unwrap_or(DEFAULT_TARGET);
        check_in_bounds(&grid, "start", start)?;
        check_in_bounds(&grid, "target", target)?;

        if !grid.has_wall_border() {
            warn!("maze has no wall border; cells outside the grid are treated as walls");
        }
        info!(
            rows = grid.rows(),
            cols = grid.cols(),
            ?start,
            ?target,
            "searching maze"
        );

        writeln!(self.out, "Before:")?;
        write!(self.out, "{grid}")?;

        let mut orders = args.orders.clone();
        if args.compare {
            orders.extend([
                DirectionOrder::DOWN_RIGHT_UP_LEFT,
                DirectionOrder::UP_RIGHT_DOWN_LEFT,
            ]);
        }
        dedup_preserving_order(&mut orders);

        let (order, outcome) = if orders.len() > 1 {
            let reports = compare_orders(&grid, start, target, &orders);
            for report in &reports {
                writeln!(
                    self.out,
                    "{:<24} found: {:<5} path cells: {:<4} explored: {}",
                    report.order.to_string(),
                    report.outcome.found,
                    report.path_len(),
                    report.explored()
                )?;
            }
            // Any report will do when nothing was found
            let chosen = fewest_steps(&reports).or_else(|| reports.first());
            match chosen {
                Some(report) => {
                    grid = report.grid.clone();
                    (report.order, report.outcome.clone())
                }
                None => return Err(invalid_parameter("order", &"", &"no order given")),
            }
        } else {
            let order = orders.first().copied().unwrap_or_default();
            let outcome = solve(&mut grid, start, target, &order);
            (order, outcome)
        };

        writeln!(self.out, "After ({order}):")?;
        write!(self.out, "{grid}")?;
        self.write_maze_outcome(&outcome)?;

        if let Some(path) = &args.output {
            export_maze_as_png(&grid, path)?;
            info!(path = %path.display(), "maze image written");
        }
        if let Some(path) = &args.save {
            save_maze(&grid, path)?;
            info!(path = %path.display(), "maze text written");
        }
        Ok(())
    }

    fn write_maze_outcome(&mut self, outcome: &SearchOutcome) -> Result<()> {
        if !outcome.found {
            writeln!(self.out, "No path found")?;
            return Ok(());
        }
        let steps: Vec<String> = outcome
            .path
            .iter()
            .map(|[row, col]| format!("({row},{col})"))
            .collect();
        writeln!(self.out, "Path ({} cells): {}", steps.len(), steps.join(" -> "))?;
        Ok(())
    }

    fn run_search(&mut self, args: &SearchArgs) -> Result<()> {
        if !args.values.is_sorted() {
            warn!("values are not in ascending order; the result is unspecified");
        }
        info!(algorithm = %args.algorithm, len = args.values.len(), "searching values");

        match args.algorithm.search(&args.values, &args.target) {
            Some(index) => writeln!(
                self.out,
                "Found {} at index {index} ({})",
                args.target, args.algorithm
            )?,
            None => writeln!(self.out, "{} not found ({})", args.target, args.algorithm)?,
        }
        Ok(())
    }

    fn run_josephus(&mut self, args: &JosephusArgs) -> Result<()> {
        let mut ring = JosephusRing::build(args.count)?;
        info!(
            count = args.count,
            start = args.start,
            step = args.step,
            "simulating elimination"
        );

        if ring.len() <= DISPLAY_LIMIT {
            let ids: Vec<String> = ring.iter().map(|id| id.to_string()).collect();
            writeln!(self.out, "Ring: {}", ids.join(" "))?;
        }

        let mut progress = if args.quiet || args.count < PROGRESS_THRESHOLD {
            EliminationProgress::hidden(args.count - 1)
        } else {
            EliminationProgress::new(args.count - 1)
        };

        let keep_order = args.count <= DISPLAY_LIMIT;
        let mut order = Vec::new();
        for id in ring.eliminations(args.start, args.step)? {
            progress.tick();
            if keep_order {
                order.push(id.to_string());
            }
        }
        let survivor = ring.first_id();
        let eliminated = progress.position();
        progress.finish(survivor);

        if keep_order {
            writeln!(self.out, "Eliminated: {}", order.join(" "))?;
        } else {
            writeln!(self.out, "Eliminated {eliminated} participants")?;
        }
        writeln!(self.out, "Survivor: {survivor}")?;

        if args.verify {
            let expected = josephus_survivor(args.count, args.start, args.step);
            if expected == Some(survivor) {
                writeln!(self.out, "Verified against closed form")?;
            } else {
                warn!(?expected, survivor, "closed form disagrees with simulation");
                writeln!(self.out, "Closed form expects {expected:?}")?;
            }
        }
        Ok(())
    }
}

fn check_in_bounds(grid: &MazeGrid, parameter: &'static str, position: Position) -> Result<()> {
    if grid.contains(position) {
        return Ok(());
    }
    Err(invalid_parameter(
        parameter,
        &format!("{},{}", position[0], position[1]),
        &format!("outside the {}x{} maze", grid.rows(), grid.cols()),
    ))
}

fn dedup_preserving_order(orders: &mut Vec<DirectionOrder>) {
    let mut seen = Vec::with_capacity(orders.len());
    orders.retain(|order| {
        if seen.contains(order) {
            false
        } else {
            seen.push(*order);
            true
        }
    });
}
