use clap::Parser;
use small_fp::core::capture;
use small_fp::utils::{logger, validation};

#[derive(Parser)]
#[command(name = "capture-demo")]
#[command(about = "Show closures capturing a loop counter by value versus through shared state")]
struct Args {
    /// Number of closures built per loop (0 to 64)
    #[arg(short, long, default_value = "4")]
    count: i32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    validation::validate_range("count", args.count, 0, 64)?;

    for value in capture::run_demo(args.count) {
        println!("{}", value);
    }
    Ok(())
}
