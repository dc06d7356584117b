use clap::Parser;
use sortsy::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEMO_DATA: [i64; 6] = [5, 2, 9, 1, 5, 6];

/// Sorts the same input with each selected strategy and prints the results.
#[derive(Parser, Debug)]
#[command(name = "sortsy", version, about)]
struct Args {
    /// Algorithm to run (quick, bubble, merge). Repeat to run several; all three run by default.
    #[arg(short, long = "strategy", value_name = "NAME")]
    strategies: Vec<SortAlgorithm>,

    /// Comma-separated integers to sort.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_negative_numbers = true,
        default_values_t = DEMO_DATA
    )]
    data: Vec<i64>,

    /// How each sorted sequence is printed (list, spaced).
    #[arg(short, long, default_value_t = Format::List)]
    format: Format,
}

fn main() {
    // Logs go to stderr so stdout only carries the transcript.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "sortsy=info".into()),
        )
        .init();

    let args = Args::parse();
    let strategies = if args.strategies.is_empty() {
        SortAlgorithm::ALL.to_vec()
    } else {
        args.strategies
    };

    info!(
        runs = strategies.len(),
        len = args.data.len(),
        "sorting input"
    );

    let mut processor: DataProcessor = DataProcessor::default();
    for algorithm in strategies {
        // Every run starts from the original input.
        let mut data = args.data.clone();
        processor.set_strategy(algorithm);
        processor.process(&mut data);
        println!("{}", transcript_line(algorithm, &data, args.format));
    }
}
