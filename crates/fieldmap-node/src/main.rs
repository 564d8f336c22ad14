//! `fieldmap`: build a field, publish it, solve it.
//!
//! Run: cargo run --bin fieldmap -- --random 4 --seed 7

use std::io;
use std::path::PathBuf;
use std::thread;

use clap::Parser;
use fieldmap_core::FieldSpec;
use fieldmap_node::params::{TokenReader, load_field_spec};
use fieldmap_node::{Bus, FieldCreator, FieldSolver, NodeConfig};
use rand::{RngExt, SeedableRng};
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(name = "fieldmap", about = "Publish a field map and find a path through it")]
struct Args {
    /// Read the field description from a JSON file
    #[arg(long, conflicts_with = "random")]
    params: Option<PathBuf>,

    /// Generate a random field with this many obstacles
    #[arg(long)]
    random: Option<usize>,

    /// Width of a random field
    #[arg(long, default_value_t = 10)]
    width: i32,

    /// Height of a random field
    #[arg(long, default_value_t = 10)]
    height: i32,

    /// Seed for the random field
    #[arg(long)]
    seed: Option<u64>,

    /// Node configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Do not print prompts while reading stdin
    #[arg(long)]
    quiet: bool,
}

fn field_spec(args: &Args, config: &NodeConfig) -> Result<FieldSpec, Box<dyn std::error::Error>> {
    if let Some(path) = &args.params {
        return Ok(load_field_spec(path)?);
    }
    if let Some(obstacles) = args.random {
        let seed = args.seed.unwrap_or_else(|| rand::rng().random());
        log::info!("random field, seed {seed}");
        let mut rng = StdRng::seed_from_u64(seed);
        return Ok(FieldSpec::random(&mut rng, args.width, args.height, obstacles));
    }
    let stdin = io::stdin();
    let prompts = (config.prompt && !args.quiet).then(io::stdout);
    let mut reader = TokenReader::new(stdin.lock(), prompts);
    Ok(reader.read_field_spec()?)
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => NodeConfig::load(path)?,
        None => NodeConfig::default(),
    };

    let bus = Bus::new(config.queue_depth);
    let subscription = bus.subscribe(&config.topic)?;
    let solver = thread::spawn(move || FieldSolver::new().spin(subscription, |_| {}));

    let spec = field_spec(&args, &config);
    // The solver only stops once the bus closes, whatever happened above.
    let published = spec.and_then(|spec| {
        FieldCreator::new(bus.clone(), config.topic.as_str())
            .publish(&spec)
            .map_err(Into::into)
    });
    bus.close();

    let handled = solver.join().map_err(|_| "solver thread panicked")?;
    log::debug!("solver handled {handled} map(s)");
    published.map(|_| ())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
