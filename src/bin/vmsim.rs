//! Virtual memory simulator CLI.
//!
//! Replays a memory trace of two processes against LRU or OPT page
//! replacement and prints the access, fault and disk write totals.

use {
    anyhow::Context,
    clap::Parser,
    std::{fs::File, io::BufReader, path::PathBuf},
    tracing_subscriber::EnvFilter,
    vmsim::{Algorithm, FrameRatio, Report, SimConfig, Simulation, Trace},
};

#[derive(Parser, Debug)]
#[command(name = "vmsim", version, about = "Two-process demand paging simulator")]
struct Args {
    /// Page replacement algorithm: `lru` or `opt`.
    #[arg(short, long)]
    algorithm: Algorithm,

    /// Total number of frames.
    #[arg(short = 'n', long)]
    frames: usize,

    /// Page size in KB.
    #[arg(short, long)]
    page_size: u32,

    /// Frame split between process 0 and process 1, e.g. `1:3`.
    #[arg(short = 's', long, default_value = "1:1")]
    split: FrameRatio,

    /// Trace file.
    trace_file: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "arguments parsed");

    let config = SimConfig::new(args.frames, args.page_size, args.split);
    config.validate().context("Invalid configuration")?;

    // A missing trace is not an error: nothing was accessed.
    let file = match File::open(&args.trace_file) {
        Ok(file) => file,
        Err(err) => {
            tracing::warn!(path = %args.trace_file.display(), %err, "trace file not readable");
            println!("{}", Report::new(args.algorithm.name(), config.total_frames, config.page_size_kb));
            return Ok(());
        }
    };

    let trace = Trace::from_reader(BufReader::new(file), config.page_number_offset())
        .with_context(|| format!("Unable to parse trace {}", args.trace_file.display()))?;

    let mut sim = Simulation::new(args.algorithm, config, &trace);
    let report = sim.run(&trace).context("Simulation aborted")?;
    println!("{report}");

    Ok(())
}
