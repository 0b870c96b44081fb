use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use risparmio::Network;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(
    name = "compile",
    about = "Compiles a network definition into the binary model."
)]
struct Args {
    #[clap(short = 'n', long)]
    network_filename: String,

    #[clap(short = 'l', long)]
    labels_filename: String,

    #[clap(short = 'o', long)]
    output_filename: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    eprintln!("Compiling the network model...");
    let start = Instant::now();
    let network = Network::from_readers(
        File::open(args.network_filename)?,
        File::open(args.labels_filename)?,
    )?;
    eprintln!("{} seconds", start.elapsed().as_secs_f64());

    eprintln!("Writing the network model...: {}", &args.output_filename);
    let mut writer = BufWriter::new(File::create(args.output_filename)?);
    let num_bytes = network.write(&mut writer)?;
    eprintln!("{num_bytes} bytes");

    Ok(())
}
