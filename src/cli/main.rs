#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use dcflow::{
    Channel, EdmondsKarp, MaxFlow, NamedNetwork, PushRelabel, RawDataCenter, SolverConfig,
};
use log::LevelFilter;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

type Capacity = i64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Algo {
    /// Breadth-first augmenting paths with flow cancellation
    EdmondsKarp,
    /// Breadth-first augmenting paths over forward edges only
    ForwardOnly,
    /// FIFO push-relabel
    PushRelabel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Maximum simultaneous throughput from one data center to a set of targets.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV file with the header `id,max_in,max_out`
    #[arg(long, value_name = "FILE")]
    data_centers: PathBuf,

    /// CSV file with the header `from,to,capacity`
    #[arg(long, value_name = "FILE")]
    channels: PathBuf,

    /// Data center the data is sent from
    #[arg(long)]
    origin: String,

    /// Data center that receives the data; may be repeated
    #[arg(long = "target", required = true)]
    targets: Vec<String>,

    #[arg(long, value_enum, default_value_t = Algo::EdmondsKarp)]
    algo: Algo,

    /// Give up after this many augmenting paths; not accepted with `--algo push-relabel`
    #[arg(long)]
    max_augmentations: Option<usize>,

    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

impl Args {
    // Push-relabel has no augmenting paths to count.
    fn check(&self) -> Result<(), String> {
        match (self.algo, self.max_augmentations) {
            (Algo::PushRelabel, Some(_)) => {
                Err("--max-augmentations cannot be used with --algo push-relabel".to_string())
            }
            _ => Ok(()),
        }
    }

    fn solver_config(&self) -> SolverConfig {
        let config = match self.algo {
            Algo::ForwardOnly => SolverConfig::forward_only(),
            Algo::EdmondsKarp | Algo::PushRelabel => SolverConfig::default(),
        };
        match self.max_augmentations {
            Some(max) => config.with_max_augmentations(max),
            None => config,
        }
    }
}

fn lib_error(e: dcflow::Error) -> Box<dyn Error> {
    e.to_string().into()
}

// Function to read the data centers and channels from CSV files
fn read_network(
    data_centers: &Path,
    channels: &Path,
) -> Result<NamedNetwork<String, Capacity>, Box<dyn Error>> {
    let mut network = NamedNetwork::new();

    let mut rdr = csv::Reader::from_path(data_centers)?;
    for row in rdr.deserialize() {
        let row: RawDataCenter<String, Capacity> = row?;
        let (id, data_center) = row.validate().map_err(lib_error)?;
        network.add_data_center(id, data_center).map_err(lib_error)?;
    }

    let mut rdr = csv::Reader::from_path(channels)?;
    for row in rdr.deserialize() {
        let channel: Channel<String, Capacity> = row?;
        network.add_channel(channel);
    }

    log::debug!("read {} data centers", network.len());
    Ok(network)
}

fn solve<A: MaxFlow>(
    algo: &mut A,
    network: &NamedNetwork<String, Capacity>,
    args: &Args,
) -> Result<Capacity, dcflow::Error> {
    network.solve_with(algo, &args.origin, &args.targets)
}

fn run(args: &Args) -> Result<Capacity, Box<dyn Error>> {
    args.check()?;
    let network = read_network(&args.data_centers, &args.channels)?;

    let flow = match args.algo {
        Algo::EdmondsKarp | Algo::ForwardOnly => {
            solve(&mut EdmondsKarp::new(args.solver_config()), &network, args)
        }
        Algo::PushRelabel => solve(&mut PushRelabel, &network, args),
    };
    flow.map_err(lib_error)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    if TermLogger::init(
        args.log_level.into(),
        log_config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("failed to initialise logging");
    }

    match run(&args) {
        Ok(flow) => {
            println!("{flow}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
