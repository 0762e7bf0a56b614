use clap::Parser;
use knights_tour::{visualize_tour, BoardConfig, Cell, Exploration};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// Number of rows of the board
    #[arg(long, default_value_t = 8)]
    rows: i16,

    /// Number of columns of the board
    #[arg(long, default_value_t = 8)]
    columns: i16,

    /// Row index of the start cell. Picked at random if not given
    #[arg(long)]
    start_row: Option<i16>,

    /// Column index of the start cell. Picked at random if not given
    #[arg(long)]
    start_column: Option<i16>,

    /// RNG seed for picking a random start cell
    #[arg(long)]
    seed: Option<u64>,

    /// Print the tour as JSON instead of a rendered board
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Run one tour from every cell and print a table of tour lengths
    #[arg(short, long, default_value_t = false)]
    sweep: bool,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Serialize)]
struct TourReport {
    rows: i16,
    columns: i16,
    start: Cell,
    complete: bool,
    sequence: Vec<Cell>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    if args.rows < 1 || args.columns < 1 {
        anyhow::bail!("The board must have at least one row and one column");
    }
    let config = BoardConfig::new(args.rows, args.columns);

    if args.sweep {
        return run_sweep(config);
    }

    let start = match (args.start_row, args.start_column) {
        (Some(row), Some(column)) => Cell { row, column },
        (None, None) => {
            // Get a random seed
            let seed = args.seed.unwrap_or_else(rand::random);
            info!(seed);
            let mut rng = StdRng::seed_from_u64(seed);
            Cell {
                row: rng.gen_range(0..config.rows()),
                column: rng.gen_range(0..config.columns()),
            }
        }
        _ => anyhow::bail!("--start-row and --start-column must be given together"),
    };

    let mut exploration = Exploration::new(config);
    let sequence = exploration.run(start)?.to_vec();
    info!(
        start = %start,
        visited = sequence.len(),
        cells = config.num_cells(),
        complete = exploration.is_complete(),
        "Tour finished"
    );
    let stranded = config.num_cells() - sequence.len();
    if stranded > 0 {
        debug!(stranded, "Cells were not reachable from the start");
    }

    if args.json {
        let report = TourReport {
            rows: config.rows(),
            columns: config.columns(),
            start,
            complete: exploration.is_complete(),
            sequence,
        };
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", visualize_tour(&config, &sequence));
    }
    Ok(())
}

// Prints a table with one entry per start cell, holding the number of
// cells the tour from that start visits.
fn run_sweep(config: BoardConfig) -> anyhow::Result<()> {
    let cell_width = config.num_cells().to_string().len();
    let mut num_complete = 0;
    for row in 0..config.rows() {
        let mut line = String::new();
        for column in 0..config.columns() {
            let mut exploration = Exploration::new(config);
            let length = exploration.run(Cell { row, column })?.len();
            debug!(row, column, length);
            if exploration.is_complete() {
                num_complete += 1;
            }
            line += &format!(" {:>cell_width$}", length);
        }
        println!("{}", line);
    }
    info!(
        num_complete,
        cells = config.num_cells(),
        "Starts from which the tour covers the whole board"
    );
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
