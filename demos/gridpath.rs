//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin gridpath -- --rows 20 --cols 40 --density 0.3
//!      cargo run --bin gridpath -- --map maze.txt

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use gridpath_core::{Board, text};
use gridpath_demos::{animate, random_board, summary};
use gridpath_search::{NoProgress, SearchConfig, search_board};

#[derive(Parser, Debug)]
#[command(name = "gridpath", about = "Animate an A* search on a grid", version)]
struct Args {
    /// Text map to load (`.` empty, `#` wall, `S` start, `G` goal)
    #[arg(short, long)]
    map: Option<PathBuf>,

    /// Rows of the random map
    #[arg(long, default_value_t = 20)]
    rows: i32,

    /// Columns of the random map
    #[arg(long, default_value_t = 30)]
    cols: i32,

    /// Chance of each random cell being a wall
    #[arg(long, default_value_t = 0.25)]
    density: f64,

    /// Seed for the random map
    #[arg(long)]
    seed: Option<u64>,

    /// Start marker id (defaults to the first start)
    #[arg(long)]
    start: Option<String>,

    /// Goal marker id (defaults to the first goal)
    #[arg(long)]
    goal: Option<String>,

    /// Report progress every N explored cells
    #[arg(long, default_value_t = 5)]
    every: usize,

    /// Pause after each progress report, in milliseconds
    #[arg(long, default_value_t = 10)]
    delay_ms: u64,

    /// Print the final map as text instead of animating
    #[arg(long)]
    no_animate: bool,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = match &args.map {
        Some(path) => {
            let s = std::fs::read_to_string(path)?;
            Board::from_text(&s)?
        }
        None => random_board(args.rows, args.cols, args.density, args.seed),
    };
    log::info!(
        "board {}x{} with {} markers",
        board.grid().rows(),
        board.grid().cols(),
        board.markers().len()
    );

    let config = SearchConfig::default()
        .with_progress_every(args.every)
        .with_yield_delay(Duration::from_millis(args.delay_ms));
    let (start, goal) = (args.start.as_deref(), args.goal.as_deref());

    let result = if args.no_animate {
        let result = search_board(&mut board, start, goal, &config, &mut NoProgress)?;
        println!("{}", text::render(board.grid(), Some(board.overlay())));
        result
    } else {
        animate(&mut io::stdout(), &mut board, start, goal, config)?
    };
    println!("{}", summary(&result));
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
