// src/bin/stage.rs

use pathprep::{cli, logging, run_stage};

fn main() {
    if let Err(err) = run_main() {
        eprintln!("stage error: {err:?}");
        std::process::exit(1);
    }
}

fn run_main() -> anyhow::Result<()> {
    let args = cli::parse_stage();
    logging::init_logging(args.log_level)?;
    run_stage(args)
}
