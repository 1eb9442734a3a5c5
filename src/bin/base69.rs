use base69::cli::{self, Cli};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli::init_logger(cli.log_level.as_deref());

    let result = cli::execute(&cli);
    if cli.json {
        let failed = result.is_err();
        println!("{}", cli::to_json(result));
        if failed {
            std::process::exit(1);
        }
        return Ok(());
    }

    println!("{}", result?.text());
    Ok(())
}
