#![allow(clippy::cargo_common_metadata)]
use jazzy_publisher::{cli, config::Config, setup_logging};

fn main() {
    let args = cli::parse_args();

    if let Err(error) = run(&args) {
        // Workflow failure annotation, the Actions equivalent of setFailed
        println!("::error::{error:#}");
        std::process::exit(1);
    }
}

fn run(args: &cli::Args) -> anyhow::Result<()> {
    // Setup logging based on debug flag
    setup_logging(args.debug)?;

    // Initialize configuration once; it is immutable from here on
    let config = Config::from_args(args)?;

    // Execute the appropriate command
    cli::execute_command(&config, &args.command)
}
