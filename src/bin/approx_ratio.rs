use std::io::Write;

use clap::Parser;
use env_logger::{Builder, Target, WriteStyle};
use log::LevelFilter;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tsp_ratio::graph::{kruskal, to_desmos, Graph};
use tsp_ratio::{ApproximationExperiment, ExperimentConfig, Result};

#[derive(Parser, Debug)]
#[command(
    about = "Measures the mean ratio between the MST double-tree tour and the exact optimum on random Euclidean TSP instances.",
    version
)]
struct Args {
    /// Smallest instance size (inclusive).
    #[arg(long, default_value_t = 4)]
    start: usize,

    /// Largest instance size (inclusive).
    #[arg(long, default_value_t = 11)]
    end: usize,

    /// Random instances per size.
    #[arg(long, default_value_t = 16)]
    trials: usize,

    /// Points are drawn uniformly from [-M, M] x [-M, M].
    #[arg(long, default_value_t = 100.0)]
    max_from_origin: f64,

    /// Worker threads (defaults to every available hardware thread).
    #[arg(long)]
    workers: Option<usize>,

    /// Base seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Log level: off, error, warn, info, debug or trace.
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,

    /// Print a random graph of N vertices and its MST in Desmos format, then exit.
    #[arg(long, value_name = "N")]
    desmos: Option<usize>,
}

fn init_logger(level: LevelFilter) {
    Builder::new()
        .filter_level(level)
        .write_style(WriteStyle::Never)
        .target(Target::Stderr)
        .format(|buf, record| writeln!(buf, "{} {}", record.level(), record.args()))
        .init();
}

fn print_desmos(n: usize, args: &Args) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    let graph = Graph::random_complete(n, args.max_from_origin, &mut rng)?;
    println!("{}", to_desmos(&graph));
    println!("{}", to_desmos(&kruskal(&graph)));
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.log_level);

    if let Some(n) = args.desmos {
        return print_desmos(n, &args);
    }

    let mut config = ExperimentConfig::default()
        .with_sizes(args.start, args.end)
        .with_trials(args.trials)
        .with_max_from_origin(args.max_from_origin);
    config.workers = args.workers;
    config.seed = args.seed;

    let experiment = ApproximationExperiment::new(config)?;
    log::info!("running on {} worker threads", experiment.workers());

    let results = experiment.run_with(|size| {
        println!("done! took {} ms.", size.elapsed.as_millis());
        println!("result for n={} : {}", size.n, size.mean_ratio);
    })?;

    for size in &results {
        println!("n={} : {}", size.n, size.mean_ratio);
    }
    Ok(())
}
