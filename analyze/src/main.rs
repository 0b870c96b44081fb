use std::error::Error;
use std::fs::File;
use std::io::BufReader;

use risparmio::{Analyzer, Network};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "analyze",
    about = "Computes the maximum saving of a compiled network."
)]
struct Args {
    #[clap(short = 'i', long)]
    model_filename: String,

    #[clap(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Loading the network model...");
    let reader = BufReader::new(File::open(args.model_filename)?);
    #[cfg(not(feature = "unchecked"))]
    let network = Network::read(reader)?;
    #[cfg(feature = "unchecked")]
    let network = unsafe { Network::read_unchecked(reader)? };

    let analyzer = Analyzer::new(network);
    let mut worker = analyzer.new_worker();
    worker.run()?;

    if args.verbose {
        eprintln!("total_cost: {}", worker.total_cost());
        eprintln!("connector_cost: {}", worker.connector_cost());
        eprintln!("num_repaired: {}", worker.num_repaired());
    }
    println!("{}", worker.max_saving());

    Ok(())
}
