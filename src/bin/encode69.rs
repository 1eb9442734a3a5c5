use base69::{Base69Codec, cli, util};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    cli::init_logger(None);
    let args: Vec<String> = std::env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <plaintext or file>", args[0]);
        std::process::exit(1);
    }
    let codec = Base69Codec::default();
    let (data, _) = util::data_source(&args[1])?;

    println!("[Encoded Text] {}", codec.encode(data));

    Ok(())
}
